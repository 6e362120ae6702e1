#![forbid(unsafe_code)]

//! Terminal demo: drag the splitter with the left mouse button.
//!
//! ```text
//! splitpane-demo [--config split.json]
//!
//! SPLITPANE_ORIENTATION=horizontal|vertical
//! SPLITPANE_RATIO=0.3
//! SPLITPANE_LOG=/tmp/splitpane.log   (RUST_LOG filters, default "debug")
//! ```

mod app;
mod settings;
mod terminal;

use std::fs::File;
use std::io;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Mutex;

use splitpane_core::SplitConfig;
use splitpane_view::Rect;
use tracing_subscriber::EnvFilter;

use crate::app::App;
use crate::settings::DemoSettings;
use crate::terminal::TerminalSession;

fn main() -> ExitCode {
    let settings = match DemoSettings::load() {
        Ok(settings) => settings,
        Err(error) => {
            eprintln!("splitpane-demo: {error}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(path) = settings.log_file.as_deref() {
        if let Err(error) = init_logging(path) {
            eprintln!("splitpane-demo: cannot open log {}: {error}", path.display());
            return ExitCode::FAILURE;
        }
    }

    match run(settings.split) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("splitpane-demo: {error}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(io::Error::other)
}

fn run(config: SplitConfig) -> io::Result<()> {
    tracing::info!(?config, "starting split demo");
    let mut session = TerminalSession::enter()?;
    let mut app = App::new(config);

    while !app.should_quit() {
        let (width, height) = session.size()?;
        let screen = Rect::from_size(width, height);
        session.draw(&app.render(screen))?;

        let event = crossterm::event::read()?;
        app.handle_event(&event, screen);
    }

    tracing::info!(ratio = app.pane().split_ratio(), "split demo finished");
    Ok(())
}
