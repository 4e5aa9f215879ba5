//! Flex grid measured through the layout tree

use maya_layout::{div, Breakpoint, ColumnSpan, FlexCol, FlexRow, LayoutStyle, LayoutTree};
use maya_theme::ClassNamespace;

const EPSILON: f32 = 0.5;

fn approx(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

fn measure_row(row: FlexRow, width: f32) -> Vec<(f32, f32)> {
    let ns = ClassNamespace::default();
    let breakpoint = Breakpoint::for_width(width);
    let root = div()
        .layout(LayoutStyle::viewport(width, 600.0))
        .child(row.render(&ns, breakpoint))
        .into_node();

    let mut tree = LayoutTree::new();
    let root_id = tree.build(&root).unwrap().unwrap();
    tree.compute(root_id, width, 600.0).unwrap();

    let row_id = tree.children(root_id)[0];
    tree.children(row_id)
        .iter()
        .map(|id| {
            let layout = tree.get_layout(*id).unwrap();
            (layout.location.x, layout.size.width)
        })
        .collect()
}

#[test]
fn two_half_columns_share_the_row() {
    let ns = ClassNamespace::default();
    let half = FlexCol::new().span_all(ColumnSpan::Span(6));
    let row = FlexRow::new()
        .child(half.render(&ns, Breakpoint::Xl))
        .child(half.render(&ns, Breakpoint::Xl));

    let cols = measure_row(row, 1200.0);
    approx(cols[0].0, 0.0);
    approx(cols[0].1, 600.0);
    approx(cols[1].0, 600.0);
    approx(cols[1].1, 600.0);
}

#[test]
fn span_follows_active_breakpoint() {
    let ns = ClassNamespace::default();
    let col = FlexCol::new()
        .span(Breakpoint::Xs, ColumnSpan::Span(12))
        .span(Breakpoint::Md, ColumnSpan::Span(4));

    let wide = measure_row(FlexRow::new().child(col.render(&ns, Breakpoint::Md)), 900.0);
    approx(wide[0].1, 300.0);

    let narrow = measure_row(FlexRow::new().child(col.render(&ns, Breakpoint::Xs)), 400.0);
    approx(narrow[0].1, 400.0);
}

#[test]
fn hidden_column_takes_no_space() {
    let ns = ClassNamespace::default();
    let hidden = FlexCol::new()
        .span_all(ColumnSpan::Span(6))
        .span(Breakpoint::Sm, ColumnSpan::Hidden);
    let visible = FlexCol::new().span_all(ColumnSpan::Span(6));
    let row = FlexRow::new()
        .child(hidden.render(&ns, Breakpoint::Sm))
        .child(visible.render(&ns, Breakpoint::Sm));

    let cols = measure_row(row, 700.0);
    approx(cols[0].1, 0.0);
    approx(cols[1].0, 0.0);
    approx(cols[1].1, 350.0);
}
