//! Rendered grid snapshots for the default and custom splitter handles.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use splitpane_core::{
    ContainerExtent, Orientation, PaneState, PointerPosition, SplitEvent, transition,
};
use splitpane_view::{Rect, SplitLayout, SplitView, SplitterStyle, SplitterWidget, TextGrid};

fn render(state: &PaneState, width: u16, height: u16, view: &SplitView<'_>) -> Vec<String> {
    let mut grid = TextGrid::new(width, height);
    let area = grid.area();
    view.render(state, area, &mut grid);
    grid.rows()
}

#[test]
fn horizontal_split_snapshot() {
    let rows = render(&PaneState::new(), 11, 3, &SplitView::new().titles("A", "B"));
    assert_eq!(rows, vec!["A 50%│B 50%", "     │     ", "     │     "]);
}

#[test]
fn vertical_split_snapshot() {
    let state = PaneState::new().with_orientation(Orientation::Vertical);
    let rows = render(&state, 6, 5, &SplitView::new().titles("A", "B"));
    assert_eq!(rows, vec!["A 50% ", "      ", "──────", "B 50% ", "      "]);
}

#[test]
fn dragging_and_disabled_handles_differ() {
    let dragging = transition(
        &PaneState::new(),
        &SplitEvent::DragStart {
            position: PointerPosition::new(5.0, 0.0),
            extent: ContainerExtent::new(11.0, 1.0),
        },
    )
    .state;
    let rows = render(&dragging, 11, 1, &SplitView::new().titles("A", "B"));
    assert_eq!(rows, vec!["A 50%┃B 50%"]);

    let disabled = PaneState::new().with_draggable(false);
    let rows = render(&disabled, 11, 1, &SplitView::new().titles("A", "B"));
    assert_eq!(rows, vec!["A 50%┊B 50%"]);
}

struct HashHandle;

impl SplitterWidget for HashHandle {
    fn render(&self, area: Rect, style: SplitterStyle, grid: &mut TextGrid) {
        grid.fill(area, if style.active { '#' } else { '.' });
    }
}

#[test]
fn custom_splitter_replaces_default_handle() {
    let handle = HashHandle;
    let state = PaneState::new().with_split_ratio(0.2);
    let rows = render(&state, 11, 2, &SplitView::new().splitter(&handle));
    assert_eq!(rows, vec!["20#80%     ", "  #        "]);
}

proptest! {
    #[test]
    fn layout_partitions_the_axis(
        width in 0u16..300,
        height in 0u16..120,
        ratio in 0.0f64..=1.0,
        thickness in 0u16..4,
        vertical in any::<bool>(),
    ) {
        let orientation = if vertical { Orientation::Vertical } else { Orientation::Horizontal };
        let area = Rect::new(3, 7, width, height);
        let layout = SplitLayout::compute(area, orientation, ratio, thickness);
        match orientation {
            Orientation::Horizontal => {
                prop_assert_eq!(
                    layout.first.width + layout.splitter.width + layout.second.width,
                    width
                );
                prop_assert_eq!(layout.first.x, area.x);
                prop_assert_eq!(layout.splitter.x, layout.first.right());
                prop_assert_eq!(layout.second.x, layout.splitter.right());
            }
            Orientation::Vertical => {
                prop_assert_eq!(
                    layout.first.height + layout.splitter.height + layout.second.height,
                    height
                );
                prop_assert_eq!(layout.splitter.y, layout.first.bottom());
                prop_assert_eq!(layout.second.y, layout.splitter.bottom());
            }
        }
    }
}
