//! Per-component animation settings

use maya_core::{keys, PropertyBag};

use crate::kind::{AnimationBehaviour, AnimationDuration, AnimationType};

/// The animation one component plays
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnimationSpec {
    pub kind: AnimationType,
    pub name: String,
    pub behaviour: AnimationBehaviour,
    pub duration: AnimationDuration,
}

impl AnimationSpec {
    pub fn new(kind: AnimationType, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            behaviour: AnimationBehaviour::default(),
            duration: AnimationDuration::default(),
        }
    }

    pub fn behaviour(mut self, behaviour: AnimationBehaviour) -> Self {
        self.behaviour = behaviour;
        self
    }

    pub fn duration(mut self, duration: AnimationDuration) -> Self {
        self.duration = duration;
        self
    }

    /// Read the animation from a component's resolved properties.
    ///
    /// A component animates only when type, name and behaviour are all set.
    /// The duration is optional and defaults to [`AnimationDuration::Normal`].
    pub fn from_props(props: &PropertyBag) -> Option<Self> {
        let kind = props.parse::<AnimationType>(keys::ANIMATION_TYPE)?;
        let name = props.get_str(keys::ANIMATION_NAME)?;
        let behaviour = props.parse::<AnimationBehaviour>(keys::ANIMATION_BEHAVIOUR)?;
        let duration = props
            .get(keys::ANIMATION_DURATION)
            .and_then(AnimationDuration::from_value)
            .unwrap_or_default();

        Some(Self {
            kind,
            name: name.to_string(),
            behaviour,
            duration,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_type_name_and_behaviour() {
        let partial = PropertyBag::new()
            .with(keys::ANIMATION_TYPE, "attention_seekers")
            .with(keys::ANIMATION_NAME, "bounce");
        assert_eq!(AnimationSpec::from_props(&partial), None);

        let full = partial.with(keys::ANIMATION_BEHAVIOUR, "animateLoop");
        assert_eq!(
            AnimationSpec::from_props(&full),
            Some(
                AnimationSpec::new(AnimationType::AttentionSeekers, "bounce")
                    .behaviour(AnimationBehaviour::AnimateLoop)
            )
        );
    }

    #[test]
    fn test_duration_read_when_present() {
        let props = PropertyBag::new()
            .with(keys::ANIMATION_TYPE, "fading_entrances")
            .with(keys::ANIMATION_NAME, "fadeInLeft")
            .with(keys::ANIMATION_BEHAVIOUR, "animateOnce")
            .with(keys::ANIMATION_DURATION, "faster");
        let spec = AnimationSpec::from_props(&props).unwrap();
        assert_eq!(spec.duration, AnimationDuration::Faster);
    }

    #[test]
    fn test_unparseable_type_disables_animation() {
        let props = PropertyBag::new()
            .with(keys::ANIMATION_TYPE, "wobbling")
            .with(keys::ANIMATION_NAME, "wobble")
            .with(keys::ANIMATION_BEHAVIOUR, "animateOnce");
        assert_eq!(AnimationSpec::from_props(&props), None);
    }
}
