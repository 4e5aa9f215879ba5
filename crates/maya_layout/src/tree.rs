//! Layout tree management
//!
//! Mirrors the element structure of a rendered [`Node`] into a Taffy tree so
//! the flex grid can be measured. Text runs are not laid out.

use slotmap::{new_key_type, SlotMap};
use taffy::prelude::*;
use taffy::TaffyError;

use crate::node::Node;

new_key_type! {
    pub struct LayoutNodeId;
}

struct LayoutEntry {
    taffy: NodeId,
    children: Vec<LayoutNodeId>,
}

/// Maps between markup elements and Taffy node IDs
pub struct LayoutTree {
    taffy: TaffyTree,
    nodes: SlotMap<LayoutNodeId, LayoutEntry>,
}

impl LayoutTree {
    pub fn new() -> Self {
        Self {
            taffy: TaffyTree::new(),
            nodes: SlotMap::with_key(),
        }
    }

    /// Create a leaf layout node with the given style
    pub fn create_node(&mut self, style: Style) -> Result<LayoutNodeId, TaffyError> {
        let taffy = self.taffy.new_leaf(style)?;
        Ok(self.nodes.insert(LayoutEntry {
            taffy,
            children: Vec::new(),
        }))
    }

    /// Add a child to a parent node
    pub fn add_child(&mut self, parent: LayoutNodeId, child: LayoutNodeId) -> Result<(), TaffyError> {
        let child_node = match self.nodes.get(child) {
            Some(entry) => entry.taffy,
            None => return Ok(()),
        };
        if let Some(entry) = self.nodes.get_mut(parent) {
            self.taffy.add_child(entry.taffy, child_node)?;
            entry.children.push(child);
        }
        Ok(())
    }

    /// Mirror `node` and its element descendants into the tree.
    ///
    /// Elements without a layout style get Taffy's default style. Returns
    /// `None` for a bare text node.
    pub fn build(&mut self, node: &Node) -> Result<Option<LayoutNodeId>, TaffyError> {
        let Node::Element(element) = node else {
            return Ok(None);
        };

        let id = self.create_node(element.layout.clone().unwrap_or_default())?;
        for child in &element.children {
            if let Some(child_id) = self.build(child)? {
                self.add_child(id, child_id)?;
            }
        }
        Ok(Some(id))
    }

    /// Compute layout for a tree rooted at the given node
    pub fn compute(&mut self, root: LayoutNodeId, width: f32, height: f32) -> Result<(), TaffyError> {
        if let Some(entry) = self.nodes.get(root) {
            self.taffy.compute_layout(
                entry.taffy,
                Size {
                    width: AvailableSpace::Definite(width),
                    height: AvailableSpace::Definite(height),
                },
            )?;
            tracing::trace!("computed layout of {} nodes at {}x{}", self.nodes.len(), width, height);
        }
        Ok(())
    }

    /// Get the computed layout for a node
    pub fn get_layout(&self, id: LayoutNodeId) -> Option<&Layout> {
        self.nodes
            .get(id)
            .and_then(|entry| self.taffy.layout(entry.taffy).ok())
    }

    pub fn children(&self, id: LayoutNodeId) -> &[LayoutNodeId] {
        self.nodes
            .get(id)
            .map(|entry| entry.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Default for LayoutTree {
    fn default() -> Self {
        Self::new()
    }
}
