//! Split-pane component: owned state plus host hooks.

use crate::config::SplitConfig;
use crate::engine::{SplitEvent, SplitTransition, TransitionOutcome, should_subscribe, transition};
use crate::geometry::{Orientation, ResizeBounds};
use crate::hooks::SplitHooks;
use crate::state::PaneState;

/// A two-pane split with a draggable splitter.
///
/// Owns its [`PaneState`] exclusively. Every input event runs through the
/// pure [`transition`] function; the result is committed and the outward
/// notification is mapped through the configured [`SplitHooks`].
#[derive(Debug)]
pub struct SplitPane<M> {
    state: PaneState,
    hooks: SplitHooks<M>,
    transition_counter: u64,
    last_outcome: Option<TransitionOutcome>,
}

impl<M> Default for SplitPane<M> {
    fn default() -> Self {
        Self::with_state(PaneState::default())
    }
}

impl<M> SplitPane<M> {
    /// Component with default state and no hooks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_state(state: PaneState) -> Self {
        Self {
            state,
            hooks: SplitHooks::default(),
            transition_counter: 0,
            last_outcome: None,
        }
    }

    #[must_use]
    pub fn from_config(config: SplitConfig) -> Self {
        Self::with_state(config.into_state())
    }

    #[must_use]
    pub fn hooks(mut self, hooks: SplitHooks<M>) -> Self {
        self.hooks = hooks;
        self
    }

    /// Read-only snapshot for the rendering layer.
    #[must_use]
    pub const fn state(&self) -> &PaneState {
        &self.state
    }

    #[must_use]
    pub const fn split_ratio(&self) -> f64 {
        self.state.split_ratio()
    }

    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.state.orientation()
    }

    #[must_use]
    pub const fn is_draggable(&self) -> bool {
        self.state.is_draggable()
    }

    /// Whether the input layer should currently deliver move/end events.
    #[must_use]
    pub const fn should_subscribe(&self) -> bool {
        should_subscribe(&self.state)
    }

    /// Number of events processed so far.
    #[must_use]
    pub const fn transition_count(&self) -> u64 {
        self.transition_counter
    }

    /// Outcome of the most recent event, if any.
    #[must_use]
    pub const fn last_outcome(&self) -> Option<TransitionOutcome> {
        self.last_outcome
    }

    pub fn set_draggable(&mut self, draggable: bool) {
        self.state.set_draggable(draggable);
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.state.set_orientation(orientation);
    }

    pub fn set_split_ratio(&mut self, ratio: f64) {
        self.state.set_split_ratio(ratio);
    }

    pub fn set_resize_bounds(&mut self, bounds: ResizeBounds) {
        self.state.set_resize_bounds(bounds);
    }

    /// Run one event through the engine and commit the resulting state.
    pub fn apply(&mut self, event: &SplitEvent) -> SplitTransition {
        self.transition_counter = self.transition_counter.saturating_add(1);
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "split.transition",
            transition_id = self.transition_counter,
            event = event.kind_name(),
            from_ratio = self.state.split_ratio(),
        )
        .entered();

        let step = transition(&self.state, event);
        self.state = step.state;
        self.last_outcome = Some(step.outcome);

        #[cfg(feature = "tracing")]
        match step.outcome {
            TransitionOutcome::Applied => tracing::trace!(
                ratio = step.state.split_ratio(),
                dragging = step.state.is_dragging(),
                "split transition applied"
            ),
            TransitionOutcome::Ignored(reason) => {
                tracing::debug!(?reason, "split event ignored");
            }
        }

        step
    }
}

impl<M: Clone> SplitPane<M> {
    /// Process one input event, returning the host message it produced.
    pub fn update(&mut self, event: &SplitEvent) -> Option<M> {
        let step = self.apply(event);
        self.dispatch(&step)
    }

    /// Map a transition's notification through the hooks.
    pub fn dispatch(&self, step: &SplitTransition) -> Option<M> {
        step.notification
            .and_then(|notification| self.hooks.dispatch(notification))
    }
}
