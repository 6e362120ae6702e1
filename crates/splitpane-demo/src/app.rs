//! Demo application state: routes terminal events into the split pane.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use splitpane_core::{CancelReason, Orientation, SplitConfig, SplitHooks, SplitPane};
use splitpane_input::{
    InputDispatch, SplitInputAdapter, TerminalPointerAction, pointer_action_from_crossterm,
};
use splitpane_view::{Rect, SplitView, TextGrid};

/// Ratio change per arrow-key press.
pub const NUDGE_STEP: f64 = 0.05;

const STATUS_ROWS: u16 = 1;

/// Messages the pane's hooks produce for the demo.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DemoMsg {
    Started,
    Resized(f64),
    Ended,
}

/// Everything the event loop needs between frames.
#[derive(Debug)]
pub struct App {
    input: SplitInputAdapter<DemoMsg>,
    last_message: Option<DemoMsg>,
    quit: bool,
}

impl App {
    #[must_use]
    pub fn new(config: SplitConfig) -> Self {
        let pane = SplitPane::from_config(config).hooks(
            SplitHooks::new()
                .on_resize(|ratio| Some(DemoMsg::Resized(ratio)))
                .on_resize_started(DemoMsg::Started)
                .on_resize_ended(DemoMsg::Ended),
        );
        Self {
            input: SplitInputAdapter::new(pane),
            last_message: None,
            quit: false,
        }
    }

    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.quit
    }

    #[must_use]
    pub const fn pane(&self) -> &SplitPane<DemoMsg> {
        self.input.pane()
    }

    #[must_use]
    pub const fn last_message(&self) -> Option<DemoMsg> {
        self.last_message
    }

    /// Area left for the split once the status line is reserved.
    #[must_use]
    pub const fn split_area(screen: Rect) -> Rect {
        Rect::new(
            screen.x,
            screen.y,
            screen.width,
            screen.height.saturating_sub(STATUS_ROWS),
        )
    }

    /// Handle one terminal event against a screen of the given size.
    pub fn handle_event(&mut self, event: &Event, screen: Rect) {
        match event {
            Event::Key(key) => self.handle_key(*key),
            Event::Mouse(mouse) => {
                if let Some(action) = pointer_action_from_crossterm(mouse) {
                    self.handle_pointer(action, Self::split_area(screen));
                }
            }
            Event::FocusLost => {
                let dispatch = self.input.cancel(CancelReason::FocusLost);
                self.record(dispatch);
            }
            Event::Resize(..) if self.pane().state().is_dragging() => {
                let dispatch = self.input.cancel(CancelReason::Programmatic);
                self.record(dispatch);
            }
            _ => {}
        }
    }

    fn handle_pointer(&mut self, action: TerminalPointerAction, area: Rect) {
        let dispatch = match action {
            TerminalPointerAction::Press(sample) => {
                let layout = SplitView::new().layout(self.pane().state(), area);
                let position = sample.position();
                // Terminal mouse coordinates are whole cells.
                if !layout.splitter_hit(position.x as u16, position.y as u16) {
                    return;
                }
                self.input.press(&sample, area.extent())
            }
            TerminalPointerAction::Move(sample) => self.input.position_change(&sample),
            TerminalPointerAction::Release(sample) => self.input.release(&sample),
        };
        self.record(dispatch);
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            KeyCode::Char('o') => {
                let pane = self.input.pane_mut();
                let toggled = pane.orientation().toggled();
                pane.set_orientation(toggled);
            }
            KeyCode::Char('d') => {
                let draggable = !self.pane().is_draggable();
                if !draggable && self.pane().state().is_dragging() {
                    // The release would be dropped once the gate closes.
                    let dispatch = self.input.cancel(CancelReason::Programmatic);
                    self.record(dispatch);
                }
                self.input.pane_mut().set_draggable(draggable);
                self.input.sync_subscription();
            }
            KeyCode::Left | KeyCode::Up => {
                let dispatch = self.input.nudge(-NUDGE_STEP);
                self.record(dispatch);
            }
            KeyCode::Right | KeyCode::Down => {
                let dispatch = self.input.nudge(NUDGE_STEP);
                self.record(dispatch);
            }
            _ => {}
        }
    }

    fn record(&mut self, dispatch: InputDispatch<DemoMsg>) {
        tracing::trace!(?dispatch.log, "demo input");
        if dispatch.message.is_some() {
            self.last_message = dispatch.message;
        }
    }

    /// Status line shown under the split.
    #[must_use]
    pub fn status_line(&self) -> String {
        let pane = self.pane();
        let orientation = match pane.orientation() {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        };
        let drag = if pane.state().is_dragging() {
            "dragging"
        } else if pane.is_draggable() {
            "draggable"
        } else {
            "locked"
        };
        format!(
            "ratio {:.2} | {orientation} | {drag} | o:orient d:drag arrows:nudge q:quit",
            pane.split_ratio()
        )
    }

    /// Draw the full screen.
    #[must_use]
    pub fn render(&self, screen: Rect) -> TextGrid {
        let mut grid = TextGrid::new(screen.width, screen.height);
        SplitView::new()
            .titles("left", "right")
            .render(self.pane().state(), Self::split_area(screen), &mut grid);
        if screen.height >= STATUS_ROWS {
            let row = screen.height - STATUS_ROWS;
            grid.put_str(0, row, &self.status_line(), screen.width);
        }
        grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use pretty_assertions::assert_eq;

    const SCREEN: Rect = Rect::new(0, 0, 21, 6);

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn dragging_the_splitter_resizes() {
        let mut app = App::new(SplitConfig::default());
        // 21 columns: first pane 10 wide, splitter at column 10.
        app.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 10, 2), SCREEN);
        assert_eq!(app.last_message(), Some(DemoMsg::Started));

        app.handle_event(&mouse(MouseEventKind::Drag(MouseButton::Left), 15, 2), SCREEN);
        let ratio = 0.5 + 5.0 / 21.0;
        assert_eq!(app.last_message(), Some(DemoMsg::Resized(ratio)));
        assert_eq!(app.pane().split_ratio(), ratio);

        app.handle_event(&mouse(MouseEventKind::Up(MouseButton::Left), 15, 2), SCREEN);
        assert_eq!(app.last_message(), Some(DemoMsg::Ended));
        assert!(!app.pane().state().is_dragging());
    }

    #[test]
    fn press_off_the_splitter_is_ignored() {
        let mut app = App::new(SplitConfig::default());
        app.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 3, 2), SCREEN);
        app.handle_event(&mouse(MouseEventKind::Drag(MouseButton::Left), 8, 2), SCREEN);
        assert_eq!(app.last_message(), None);
        assert_eq!(app.pane().split_ratio(), 0.5);
    }

    #[test]
    fn keys_toggle_and_nudge() {
        let mut app = App::new(SplitConfig::default());
        app.handle_event(&key(KeyCode::Right), SCREEN);
        assert_eq!(app.last_message(), Some(DemoMsg::Resized(0.5 + NUDGE_STEP)));

        app.handle_event(&key(KeyCode::Char('o')), SCREEN);
        assert_eq!(app.pane().orientation(), Orientation::Vertical);

        app.handle_event(&key(KeyCode::Char('d')), SCREEN);
        assert!(!app.pane().is_draggable());
        app.handle_event(&key(KeyCode::Left), SCREEN);
        assert_eq!(app.pane().split_ratio(), 0.5 + NUDGE_STEP);

        assert!(!app.should_quit());
        app.handle_event(&key(KeyCode::Char('q')), SCREEN);
        assert!(app.should_quit());
    }

    #[test]
    fn disabling_mid_drag_ends_the_drag() {
        let mut app = App::new(SplitConfig::default());
        app.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 10, 1), SCREEN);
        app.handle_event(&key(KeyCode::Char('d')), SCREEN);
        assert_eq!(app.last_message(), Some(DemoMsg::Ended));
        assert!(!app.pane().state().is_dragging());

        app.handle_event(&mouse(MouseEventKind::Up(MouseButton::Left), 10, 1), SCREEN);
        app.handle_event(&key(KeyCode::Char('d')), SCREEN);
        assert!(app.pane().is_draggable());

        // Hovering with no button held must not move the splitter.
        app.handle_event(&mouse(MouseEventKind::Moved, 18, 1), SCREEN);
        assert!(!app.pane().state().is_dragging());
        assert_eq!(app.pane().split_ratio(), 0.5);
    }

    #[test]
    fn focus_loss_cancels_an_active_drag() {
        let mut app = App::new(SplitConfig::default());
        app.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 10, 0), SCREEN);
        app.handle_event(&Event::FocusLost, SCREEN);
        assert_eq!(app.last_message(), Some(DemoMsg::Ended));
        assert!(!app.pane().state().is_dragging());
    }

    #[test]
    fn render_draws_split_and_status() {
        let app = App::new(SplitConfig::default());
        let rows = app.render(Rect::new(0, 0, 21, 3)).rows();
        assert_eq!(rows[0], "left 50%  │right 50% ");
        assert_eq!(rows[1], "          │          ");
        assert_eq!(rows[2], "ratio 0.50 | horizont");
    }
}
