#![forbid(unsafe_code)]

//! Input layer for split panes.
//!
//! Normalizes raw pointer/touch samples, forwards them to a
//! [`splitpane_core::SplitPane`], and tells the host when to attach or
//! detach global move/up listeners.

pub mod adapter;
#[cfg(all(feature = "crossterm", not(target_arch = "wasm32")))]
pub mod terminal;

pub use adapter::{
    InputDispatch, InputIgnoredReason, InputLogEntry, InputLogOutcome, InputPhase, PointerSample,
    SplitInputAdapter, SubscriptionCommand,
};
#[cfg(all(feature = "crossterm", not(target_arch = "wasm32")))]
pub use terminal::{TerminalPointerAction, pointer_action_from_crossterm};
