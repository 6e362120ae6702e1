#![forbid(unsafe_code)]

//! Two-pane split state and drag interaction engine.
//!
//! The crate is host-agnostic: an input layer feeds [`SplitEvent`]s into a
//! [`SplitPane`], and a rendering layer reads the resulting ratio and
//! orientation. The engine itself is the pure [`transition`] function.
//!
//! ```
//! use splitpane_core::{
//!     ContainerExtent, PointerPosition, ResizeBounds, SplitEvent, SplitHooks, SplitPane,
//! };
//!
//! let mut pane = SplitPane::new().hooks(SplitHooks::new().on_resize(Some));
//! pane.set_resize_bounds(ResizeBounds::new(0.1, 0.9));
//!
//! pane.update(&SplitEvent::DragStart {
//!     position: PointerPosition::new(200.0, 0.0),
//!     extent: ContainerExtent::new(400.0, 300.0),
//! });
//! let resized = pane.update(&SplitEvent::DragMove {
//!     position: PointerPosition::new(260.0, 0.0),
//! });
//! assert_eq!(resized, Some(0.65));
//! ```

pub mod component;
pub mod config;
pub mod engine;
pub mod geometry;
pub mod hooks;
pub mod state;

pub use component::SplitPane;
pub use config::{SplitConfig, SplitConfigError};
pub use engine::{
    CancelReason, SplitEvent, SplitNoopReason, SplitNotification, SplitTransition,
    TransitionOutcome, resized_ratio, should_subscribe, transition,
};
pub use geometry::{
    ContainerExtent, DEFAULT_SPLIT_RATIO, Orientation, PointerPosition, ResizeBounds, clamp_unit,
};
pub use hooks::SplitHooks;
pub use state::{DragPhase, PaneState};
