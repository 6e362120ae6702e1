#![forbid(unsafe_code)]

//! Rendering layer for split panes.
//!
//! Reads a [`splitpane_core::PaneState`] snapshot (ratio, orientation,
//! draggable flag) and turns it into pane/splitter rectangles and a
//! text-grid drawing. Nothing here mutates the pane.

pub mod geometry;
pub mod layout;
pub mod render;
pub mod style;

pub use geometry::Rect;
pub use layout::{DEFAULT_SPLITTER_THICKNESS, SplitLayout, pane_percentages};
pub use render::{DefaultSplitter, SplitView, SplitterWidget, TextGrid};
pub use style::{CursorHint, SplitterStyle};
