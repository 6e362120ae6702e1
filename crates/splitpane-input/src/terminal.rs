//! Crossterm mouse translation.
//!
//! Terminal mice only report cell coordinates for the left button here; other
//! buttons and wheel events are not splitter gestures.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::adapter::PointerSample;

/// Splitter-relevant pointer action decoded from one terminal mouse event.
#[derive(Debug, Clone, PartialEq)]
pub enum TerminalPointerAction {
    Press(PointerSample),
    Move(PointerSample),
    Release(PointerSample),
}

/// Decode a crossterm mouse event, or `None` if it is not a splitter gesture.
#[must_use]
pub fn pointer_action_from_crossterm(event: &MouseEvent) -> Option<TerminalPointerAction> {
    let sample = PointerSample::pointer(f64::from(event.column), f64::from(event.row));
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(TerminalPointerAction::Press(sample)),
        MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
            Some(TerminalPointerAction::Move(sample))
        }
        MouseEventKind::Up(MouseButton::Left) => Some(TerminalPointerAction::Release(sample)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn left_button_lifecycle_maps_to_actions() {
        assert_eq!(
            pointer_action_from_crossterm(&mouse(MouseEventKind::Down(MouseButton::Left), 4, 2)),
            Some(TerminalPointerAction::Press(PointerSample::pointer(4.0, 2.0)))
        );
        assert_eq!(
            pointer_action_from_crossterm(&mouse(MouseEventKind::Drag(MouseButton::Left), 9, 2)),
            Some(TerminalPointerAction::Move(PointerSample::pointer(9.0, 2.0)))
        );
        assert_eq!(
            pointer_action_from_crossterm(&mouse(MouseEventKind::Up(MouseButton::Left), 9, 3)),
            Some(TerminalPointerAction::Release(PointerSample::pointer(9.0, 3.0)))
        );
    }

    #[test]
    fn other_buttons_and_wheel_are_not_gestures() {
        assert_eq!(
            pointer_action_from_crossterm(&mouse(MouseEventKind::Down(MouseButton::Right), 1, 1)),
            None
        );
        assert_eq!(
            pointer_action_from_crossterm(&mouse(MouseEventKind::ScrollUp, 1, 1)),
            None
        );
    }
}
