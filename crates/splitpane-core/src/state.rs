//! The single source of truth for split position and drag status.

use serde::Serialize;

use crate::geometry::{
    ContainerExtent, DEFAULT_SPLIT_RATIO, Orientation, PointerPosition, ResizeBounds, clamp_unit,
};

/// Coarse drag lifecycle derived from the presence of a drag anchor.
///
/// ```text
/// Idle --DragStart--> Dragging --DragEnd/DragCancel--> Idle
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DragPhase {
    Idle,
    Dragging,
}

/// Split-pane state record.
///
/// Fields are private: hosts go through the setters below, and only the
/// interaction engine touches the drag anchor and container extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaneState {
    pub(crate) split_ratio: f64,
    pub(crate) orientation: Orientation,
    pub(crate) draggable: bool,
    pub(crate) resize_bounds: ResizeBounds,
    pub(crate) drag_anchor: Option<PointerPosition>,
    pub(crate) container_extent: Option<ContainerExtent>,
}

impl Default for PaneState {
    fn default() -> Self {
        Self {
            split_ratio: DEFAULT_SPLIT_RATIO,
            orientation: Orientation::default(),
            draggable: true,
            resize_bounds: ResizeBounds::FULL,
            drag_anchor: None,
            container_extent: None,
        }
    }
}

impl PaneState {
    /// Fresh state: ratio 0.5, full bounds, draggable, no drag in progress.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Self::set_orientation`].
    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.set_orientation(orientation);
        self
    }

    /// Builder form of [`Self::set_split_ratio`].
    #[must_use]
    pub fn with_split_ratio(mut self, ratio: f64) -> Self {
        self.set_split_ratio(ratio);
        self
    }

    /// Builder form of [`Self::set_resize_bounds`].
    #[must_use]
    pub fn with_resize_bounds(mut self, bounds: ResizeBounds) -> Self {
        self.set_resize_bounds(bounds);
        self
    }

    /// Builder form of [`Self::set_draggable`].
    #[must_use]
    pub fn with_draggable(mut self, draggable: bool) -> Self {
        self.set_draggable(draggable);
        self
    }

    /// Replace the draggable flag.
    ///
    /// A drag that is already running keeps its anchor; the engine consults
    /// the flag per event, so later move/end events are what get gated.
    pub fn set_draggable(&mut self, draggable: bool) {
        self.draggable = draggable;
    }

    /// Replace the orientation.
    ///
    /// The ratio, drag anchor, and container extent are left untouched, even
    /// mid-drag.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    /// Override the ratio, clamped to `[0, 1]` (not to the resize bounds).
    pub fn set_split_ratio(&mut self, ratio: f64) {
        self.split_ratio = clamp_unit(ratio);
    }

    /// Replace the resize bounds without re-clamping the current ratio.
    pub fn set_resize_bounds(&mut self, bounds: ResizeBounds) {
        self.resize_bounds = bounds;
    }

    /// Fraction of the primary axis given to the first pane.
    #[must_use]
    pub const fn split_ratio(&self) -> f64 {
        self.split_ratio
    }

    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[must_use]
    pub const fn is_draggable(&self) -> bool {
        self.draggable
    }

    #[must_use]
    pub const fn resize_bounds(&self) -> ResizeBounds {
        self.resize_bounds
    }

    /// Last pointer position seen by the active drag, if any.
    #[must_use]
    pub const fn drag_anchor(&self) -> Option<PointerPosition> {
        self.drag_anchor
    }

    /// Container size captured by the most recent drag start.
    ///
    /// Left in place after the drag ends; it is only read while an anchor is
    /// present.
    #[must_use]
    pub const fn container_extent(&self) -> Option<ContainerExtent> {
        self.container_extent
    }

    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    #[must_use]
    pub const fn phase(&self) -> DragPhase {
        if self.is_dragging() {
            DragPhase::Dragging
        } else {
            DragPhase::Idle
        }
    }
}
