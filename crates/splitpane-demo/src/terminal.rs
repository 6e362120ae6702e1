//! Raw-mode terminal session with guaranteed restore.

use std::io::{self, Write};

use crossterm::{cursor, event, queue, style, terminal};
use splitpane_view::TextGrid;

/// Puts the terminal into raw mode on the alternate screen with mouse and
/// focus reporting; [`Drop`] undoes it in reverse order.
pub struct TerminalSession {
    stdout: io::Stdout,
}

impl TerminalSession {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        crossterm::execute!(
            stdout,
            terminal::EnterAlternateScreen,
            event::EnableMouseCapture,
            event::EnableFocusChange,
            cursor::Hide,
        )?;
        tracing::info!("terminal session entered");
        Ok(Self { stdout })
    }

    /// Terminal size as (columns, rows).
    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Paint a full frame.
    pub fn draw(&mut self, grid: &TextGrid) -> io::Result<()> {
        for y in 0..grid.height() {
            queue!(
                self.stdout,
                cursor::MoveTo(0, y),
                style::Print(grid.row_string(y)),
            )?;
        }
        self.stdout.flush()
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = crossterm::execute!(
            self.stdout,
            cursor::Show,
            event::DisableFocusChange,
            event::DisableMouseCapture,
            terminal::LeaveAlternateScreen,
        );
        // Raw mode last.
        let _ = terminal::disable_raw_mode();
        let _ = self.stdout.flush();
        tracing::info!("terminal session restored");
    }
}
