//! Deterministic input adapter for split-pane drag interactions.
//!
//! Bridges raw press/move/release/cancel signals into [`SplitEvent`]s while
//! enforcing the subscription gate: position changes and releases are only
//! forwarded while the pane wants them, and the host is told exactly when
//! to attach or detach its global move/up listeners.

use splitpane_core::{
    CancelReason, ContainerExtent, PointerPosition, SplitEvent, SplitNoopReason, SplitPane,
    SplitTransition, TransitionOutcome,
};

/// Raw coordinates delivered with one platform pointer or touch event.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointerSample {
    /// Primary pointer coordinates (mouse/pen), if the platform reported them.
    pub pointer: Option<PointerPosition>,
    /// Active touch points, first touch first.
    pub touches: Vec<PointerPosition>,
}

impl PointerSample {
    /// Sample carrying primary pointer coordinates.
    #[must_use]
    pub fn pointer(x: f64, y: f64) -> Self {
        Self {
            pointer: Some(PointerPosition::new(x, y)),
            touches: Vec::new(),
        }
    }

    /// Sample carrying a single touch point.
    #[must_use]
    pub fn touch(x: f64, y: f64) -> Self {
        Self {
            pointer: None,
            touches: vec![PointerPosition::new(x, y)],
        }
    }

    /// Coordinates to feed the engine: the primary pointer, else the first
    /// touch, else the origin.
    #[must_use]
    pub fn position(&self) -> PointerPosition {
        self.pointer
            .or_else(|| self.touches.first().copied())
            .unwrap_or(PointerPosition::ORIGIN)
    }
}

/// Command for the host's global move/up listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionCommand {
    Subscribe,
    Unsubscribe,
}

/// Lifecycle phase recorded for one adapter dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputPhase {
    Press,
    PositionChange,
    Release,
    Cancel,
    Nudge,
}

/// Why an incoming signal produced no state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputIgnoredReason {
    /// Move/release arrived while the gate was closed; never forwarded.
    NotSubscribed,
    /// Forwarded, but the engine ignored it.
    Engine(SplitNoopReason),
}

/// Outcome category for one dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputLogOutcome {
    Forwarded,
    Ignored(InputIgnoredReason),
}

/// Structured log record for one dispatch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLogEntry {
    pub phase: InputPhase,
    pub sequence: Option<u64>,
    pub position: Option<PointerPosition>,
    pub subscription: Option<SubscriptionCommand>,
    pub outcome: InputLogOutcome,
}

/// Result of one lifecycle dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct InputDispatch<M> {
    pub event: Option<SplitEvent>,
    pub transition: Option<SplitTransition>,
    pub message: Option<M>,
    pub subscription: Option<SubscriptionCommand>,
    pub log: InputLogEntry,
}

impl<M> InputDispatch<M> {
    fn not_subscribed(phase: InputPhase, position: Option<PointerPosition>) -> Self {
        Self {
            event: None,
            transition: None,
            message: None,
            subscription: None,
            log: InputLogEntry {
                phase,
                sequence: None,
                position,
                subscription: None,
                outcome: InputLogOutcome::Ignored(InputIgnoredReason::NotSubscribed),
            },
        }
    }
}

/// Input layer wrapper around a [`SplitPane`].
///
/// Press and cancel signals are always forwarded (the splitter element and
/// cancellation paths are always listened to); position changes and releases
/// only while [`SplitPane::should_subscribe`] holds.
#[derive(Debug)]
pub struct SplitInputAdapter<M> {
    pane: SplitPane<M>,
    subscribed: bool,
    next_sequence: u64,
}

impl<M: Clone> SplitInputAdapter<M> {
    #[must_use]
    pub fn new(pane: SplitPane<M>) -> Self {
        let subscribed = pane.should_subscribe();
        Self {
            pane,
            subscribed,
            next_sequence: 1,
        }
    }

    #[must_use]
    pub const fn pane(&self) -> &SplitPane<M> {
        &self.pane
    }

    /// Mutable access for host setters; call [`Self::sync_subscription`]
    /// afterwards so listener state follows the new flags.
    pub fn pane_mut(&mut self) -> &mut SplitPane<M> {
        &mut self.pane
    }

    #[must_use]
    pub fn into_pane(self) -> SplitPane<M> {
        self.pane
    }

    /// Whether global move/up listeners are currently attached.
    #[must_use]
    pub const fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    /// Press on the splitter, with the container extent measured now.
    pub fn press(&mut self, sample: &PointerSample, extent: ContainerExtent) -> InputDispatch<M> {
        let position = sample.position();
        self.forward(
            InputPhase::Press,
            Some(position),
            SplitEvent::DragStart { position, extent },
        )
    }

    /// Global pointer movement.
    pub fn position_change(&mut self, sample: &PointerSample) -> InputDispatch<M> {
        let position = sample.position();
        if !self.subscribed {
            return InputDispatch::not_subscribed(InputPhase::PositionChange, Some(position));
        }
        self.forward(
            InputPhase::PositionChange,
            Some(position),
            SplitEvent::DragMove { position },
        )
    }

    /// Global pointer release.
    pub fn release(&mut self, sample: &PointerSample) -> InputDispatch<M> {
        let position = sample.position();
        if !self.subscribed {
            return InputDispatch::not_subscribed(InputPhase::Release, Some(position));
        }
        self.forward(
            InputPhase::Release,
            Some(position),
            SplitEvent::DragEnd { position },
        )
    }

    /// Touch-cancel, focus loss, or host-initiated abort.
    pub fn cancel(&mut self, reason: CancelReason) -> InputDispatch<M> {
        self.forward(InputPhase::Cancel, None, SplitEvent::DragCancel { reason })
    }

    /// Discrete keyboard resize.
    pub fn nudge(&mut self, delta: f64) -> InputDispatch<M> {
        self.forward(InputPhase::Nudge, None, SplitEvent::Nudge { delta })
    }

    /// Re-derive listener state from the pane and report an edge, if any.
    pub fn sync_subscription(&mut self) -> Option<SubscriptionCommand> {
        let wanted = self.pane.should_subscribe();
        if wanted == self.subscribed {
            return None;
        }
        self.subscribed = wanted;
        let command = if wanted {
            SubscriptionCommand::Subscribe
        } else {
            SubscriptionCommand::Unsubscribe
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(?command, "split input subscription changed");
        Some(command)
    }

    fn forward(
        &mut self,
        phase: InputPhase,
        position: Option<PointerPosition>,
        event: SplitEvent,
    ) -> InputDispatch<M> {
        let sequence = self.next_sequence();
        let transition = self.pane.apply(&event);
        let message = self.pane.dispatch(&transition);
        let subscription = self.sync_subscription();
        let outcome = match transition.outcome {
            TransitionOutcome::Applied => InputLogOutcome::Forwarded,
            TransitionOutcome::Ignored(reason) => {
                InputLogOutcome::Ignored(InputIgnoredReason::Engine(reason))
            }
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(?phase, sequence, ?outcome, "split input dispatched");

        InputDispatch {
            event: Some(event),
            transition: Some(transition),
            message,
            subscription,
            log: InputLogEntry {
                phase,
                sequence: Some(sequence),
                position,
                subscription,
                outcome,
            },
        }
    }

    fn next_sequence(&mut self) -> u64 {
        let sequence = self.next_sequence;
        self.next_sequence = self.next_sequence.saturating_add(1);
        sequence
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use splitpane_core::{Orientation, SplitHooks, SplitNotification};

    #[derive(Debug, Clone, PartialEq)]
    enum Msg {
        Resized(f64),
        Ended,
    }

    fn adapter() -> SplitInputAdapter<Msg> {
        SplitInputAdapter::new(
            SplitPane::new().hooks(
                SplitHooks::new()
                    .on_resize(|ratio| Some(Msg::Resized(ratio)))
                    .on_resize_ended(Msg::Ended),
            ),
        )
    }

    fn extent() -> ContainerExtent {
        ContainerExtent::new(200.0, 100.0)
    }

    #[test]
    fn sample_prefers_pointer_then_touch_then_origin() {
        let both = PointerSample {
            pointer: Some(PointerPosition::new(1.0, 2.0)),
            touches: vec![PointerPosition::new(9.0, 9.0)],
        };
        assert_eq!(both.position(), PointerPosition::new(1.0, 2.0));
        assert_eq!(
            PointerSample::touch(5.0, 6.0).position(),
            PointerPosition::new(5.0, 6.0)
        );
        assert_eq!(PointerSample::default().position(), PointerPosition::ORIGIN);
    }

    #[test]
    fn press_subscribes_and_release_unsubscribes() {
        let mut adapter = adapter();
        assert!(!adapter.is_subscribed());

        let press = adapter.press(&PointerSample::pointer(100.0, 0.0), extent());
        assert_eq!(press.subscription, Some(SubscriptionCommand::Subscribe));
        assert_eq!(press.message, None);
        assert_eq!(press.log.sequence, Some(1));
        assert!(adapter.is_subscribed());

        let moved = adapter.position_change(&PointerSample::pointer(150.0, 0.0));
        assert_eq!(moved.subscription, None);
        assert_eq!(moved.message, Some(Msg::Resized(0.75)));

        let release = adapter.release(&PointerSample::pointer(150.0, 0.0));
        assert_eq!(release.subscription, Some(SubscriptionCommand::Unsubscribe));
        assert_eq!(release.message, Some(Msg::Ended));
        assert!(!adapter.is_subscribed());
    }

    #[test]
    fn moves_before_press_are_not_forwarded() {
        let mut adapter = adapter();
        let dispatch = adapter.position_change(&PointerSample::pointer(10.0, 0.0));
        assert_eq!(dispatch.event, None);
        assert_eq!(
            dispatch.log.outcome,
            InputLogOutcome::Ignored(InputIgnoredReason::NotSubscribed)
        );
        assert_eq!(adapter.pane().transition_count(), 0);
    }

    #[test]
    fn touch_samples_drive_vertical_drags() {
        let mut adapter = adapter();
        adapter.pane_mut().set_orientation(Orientation::Vertical);
        adapter.press(&PointerSample::touch(0.0, 50.0), extent());
        let moved = adapter.position_change(&PointerSample::touch(0.0, 75.0));
        assert_eq!(moved.message, Some(Msg::Resized(0.75)));
    }

    #[test]
    fn disabling_mid_drag_closes_the_gate() {
        let mut adapter = adapter();
        adapter.press(&PointerSample::pointer(0.0, 0.0), extent());
        adapter.pane_mut().set_draggable(false);
        assert_eq!(
            adapter.sync_subscription(),
            Some(SubscriptionCommand::Unsubscribe)
        );

        let dispatch = adapter.release(&PointerSample::pointer(0.0, 0.0));
        assert_eq!(
            dispatch.log.outcome,
            InputLogOutcome::Ignored(InputIgnoredReason::NotSubscribed)
        );
        assert!(adapter.pane().state().is_dragging());
    }

    #[test]
    fn cancel_resets_gesture_and_releases_listeners() {
        let mut adapter = adapter();
        adapter.press(&PointerSample::pointer(0.0, 0.0), extent());
        let dispatch = adapter.cancel(CancelReason::PointerCancel);
        assert_eq!(dispatch.subscription, Some(SubscriptionCommand::Unsubscribe));
        assert_eq!(dispatch.message, Some(Msg::Ended));
        assert_eq!(
            dispatch.transition.map(|step| step.notification),
            Some(Some(SplitNotification::ResizeEnded))
        );
        assert!(!adapter.pane().state().is_dragging());
    }

    #[test]
    fn press_on_disabled_pane_is_logged_as_engine_noop() {
        let mut adapter = adapter();
        adapter.pane_mut().set_draggable(false);
        let dispatch = adapter.press(&PointerSample::pointer(0.0, 0.0), extent());
        assert_eq!(
            dispatch.log.outcome,
            InputLogOutcome::Ignored(InputIgnoredReason::Engine(SplitNoopReason::Disabled))
        );
        assert_eq!(dispatch.subscription, None);
    }

    #[test]
    fn sequences_are_monotonic_across_forwarded_dispatches() {
        let mut adapter = adapter();
        let first = adapter.press(&PointerSample::pointer(0.0, 0.0), extent());
        let skipped = adapter.cancel(CancelReason::Programmatic);
        let third = adapter.nudge(0.1);
        assert_eq!(first.log.sequence, Some(1));
        assert_eq!(skipped.log.sequence, Some(2));
        assert_eq!(third.log.sequence, Some(3));
        assert_eq!(third.message, Some(Msg::Resized(0.6)));
    }
}
