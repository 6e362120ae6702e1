//! Pure drag interaction engine.
//!
//! [`transition`] is a total function over `(PaneState, SplitEvent)`. It never
//! fails: out-of-order, duplicate, or gated events come back as
//! [`TransitionOutcome::Ignored`] with the input state untouched, so noisy
//! pointer/touch delivery can't corrupt the split.

use serde::{Deserialize, Serialize};

use crate::geometry::{ContainerExtent, PointerPosition};
use crate::state::PaneState;

/// Why a drag was interrupted without a regular release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CancelReason {
    PointerCancel,
    FocusLost,
    Programmatic,
}

/// Input event consumed by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SplitEvent {
    /// Press on the splitter, with the container size read at press time.
    DragStart {
        position: PointerPosition,
        extent: ContainerExtent,
    },
    /// Pointer moved while pressed.
    DragMove { position: PointerPosition },
    /// Press released. The position is accepted but never moves the splitter.
    DragEnd { position: PointerPosition },
    /// Gesture interrupted (touch-cancel, focus loss, host request).
    DragCancel { reason: CancelReason },
    /// Discrete resize by `delta` (fraction of the container) while idle.
    Nudge { delta: f64 },
}

impl SplitEvent {
    /// Stable event name for logs.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::DragStart { .. } => "drag_start",
            Self::DragMove { .. } => "drag_move",
            Self::DragEnd { .. } => "drag_end",
            Self::DragCancel { .. } => "drag_cancel",
            Self::Nudge { .. } => "nudge",
        }
    }
}

/// Outward notification produced by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "notification", rename_all = "snake_case")]
pub enum SplitNotification {
    ResizeStarted,
    Resized { ratio: f64 },
    ResizeEnded,
}

/// Diagnostic for events the engine deliberately ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitNoopReason {
    /// The pane is not draggable.
    Disabled,
    /// Move received with no drag anchor.
    NotDragging,
    /// Move received before any container extent was captured.
    MissingExtent,
    /// Container has a zero, negative, or non-finite length along the drag axis.
    DegenerateExtent,
    /// Pointer coordinates or nudge delta were NaN/infinite.
    NonFiniteInput,
    /// Discrete nudge received while a pointer drag is active.
    DragInProgress,
}

/// Whether an event changed the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "reason", rename_all = "snake_case")]
pub enum TransitionOutcome {
    Applied,
    Ignored(SplitNoopReason),
}

/// Result of one engine step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SplitTransition {
    pub state: PaneState,
    pub notification: Option<SplitNotification>,
    pub outcome: TransitionOutcome,
}

impl SplitTransition {
    fn applied(state: PaneState, notification: Option<SplitNotification>) -> Self {
        Self {
            state,
            notification,
            outcome: TransitionOutcome::Applied,
        }
    }

    fn ignored(state: &PaneState, reason: SplitNoopReason) -> Self {
        Self {
            state: *state,
            notification: None,
            outcome: TransitionOutcome::Ignored(reason),
        }
    }

    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self.outcome, TransitionOutcome::Applied)
    }
}

/// Apply one event to a state snapshot.
#[must_use]
pub fn transition(state: &PaneState, event: &SplitEvent) -> SplitTransition {
    match *event {
        SplitEvent::DragCancel { .. } => cancel(state),
        _ if !state.draggable => SplitTransition::ignored(state, SplitNoopReason::Disabled),
        SplitEvent::DragStart { position, extent } => {
            if !position.is_finite() {
                return SplitTransition::ignored(state, SplitNoopReason::NonFiniteInput);
            }
            let mut next = *state;
            next.drag_anchor = Some(position);
            next.container_extent = Some(extent);
            SplitTransition::applied(next, Some(SplitNotification::ResizeStarted))
        }
        SplitEvent::DragMove { position } => {
            let Some(anchor) = state.drag_anchor else {
                return SplitTransition::ignored(state, SplitNoopReason::NotDragging);
            };
            match resized_ratio(state, anchor, position) {
                Ok(ratio) => {
                    let mut next = *state;
                    next.drag_anchor = Some(position);
                    next.split_ratio = ratio;
                    SplitTransition::applied(next, Some(SplitNotification::Resized { ratio }))
                }
                Err(reason) => SplitTransition::ignored(state, reason),
            }
        }
        SplitEvent::DragEnd { position: _ } => {
            let mut next = *state;
            next.drag_anchor = None;
            SplitTransition::applied(next, Some(SplitNotification::ResizeEnded))
        }
        SplitEvent::Nudge { delta } => {
            if state.is_dragging() {
                return SplitTransition::ignored(state, SplitNoopReason::DragInProgress);
            }
            if !delta.is_finite() {
                return SplitTransition::ignored(state, SplitNoopReason::NonFiniteInput);
            }
            let ratio = state.resize_bounds.clamp(state.split_ratio + delta);
            let mut next = *state;
            next.split_ratio = ratio;
            SplitTransition::applied(next, Some(SplitNotification::Resized { ratio }))
        }
    }
}

/// Cancel always drops the anchor; only an enabled pane reports it.
fn cancel(state: &PaneState) -> SplitTransition {
    let mut next = *state;
    next.drag_anchor = None;
    if state.draggable {
        SplitTransition::applied(next, Some(SplitNotification::ResizeEnded))
    } else if state.is_dragging() {
        SplitTransition::applied(next, None)
    } else {
        SplitTransition::ignored(state, SplitNoopReason::Disabled)
    }
}

/// Incremental resize relative to the previous anchor:
/// `clamp(ratio + delta / extent, min, max)` along the orientation's axis.
pub fn resized_ratio(
    state: &PaneState,
    anchor: PointerPosition,
    position: PointerPosition,
) -> Result<f64, SplitNoopReason> {
    let extent = state
        .container_extent
        .ok_or(SplitNoopReason::MissingExtent)?;
    let length = state.orientation.axis_extent(extent);
    if !length.is_finite() || length <= 0.0 {
        return Err(SplitNoopReason::DegenerateExtent);
    }
    let delta = state.orientation.axis_delta(anchor, position);
    let raw = state.split_ratio + delta / length;
    if !raw.is_finite() {
        return Err(SplitNoopReason::NonFiniteInput);
    }
    Ok(state.resize_bounds.clamp(raw))
}

/// Whether the input layer should deliver move/end events.
///
/// True only while the pane is draggable and a drag is active; re-evaluate
/// after every transition.
#[must_use]
pub const fn should_subscribe(state: &PaneState) -> bool {
    state.draggable && state.drag_anchor.is_some()
}
