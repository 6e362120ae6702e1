//! Splitter presentation derived from pane state.

use splitpane_core::{Orientation, PaneState};

/// Pointer cursor a host should show over the splitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorHint {
    /// Left/right resize (horizontal orientation).
    ColResize,
    /// Up/down resize (vertical orientation).
    RowResize,
    /// Plain cursor; the splitter is inert.
    Default,
}

/// Orientation-appropriate styling for the splitter handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitterStyle {
    pub orientation: Orientation,
    pub cursor: CursorHint,
    /// False when the pane is not draggable.
    pub active: bool,
    /// True while a drag gesture holds the splitter.
    pub dragging: bool,
}

impl SplitterStyle {
    #[must_use]
    pub fn for_state(state: &PaneState) -> Self {
        let orientation = state.orientation();
        let active = state.is_draggable();
        let cursor = match (active, orientation) {
            (false, _) => CursorHint::Default,
            (true, Orientation::Horizontal) => CursorHint::ColResize,
            (true, Orientation::Vertical) => CursorHint::RowResize,
        };
        Self {
            orientation,
            cursor,
            active,
            dragging: active && state.is_dragging(),
        }
    }
}
