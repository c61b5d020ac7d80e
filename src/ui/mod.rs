//! Terminal UI for docpost.
//!
//! The run loop owns the tick: it polls completion channels, draws the
//! current screen, and feeds key presses to the [`App`]. When the user
//! asks to edit a draft, the loop suspends the terminal, hands it to the
//! external editor, and restores it afterwards.

mod app;
mod events;
mod theme;
mod widgets;

pub use app::{App, DocFormMode, Screen, StatusKind, StatusMessage};
pub use events::{CrosstermEventSource, EventSource};
pub use theme::Palette;
pub use widgets::TextInput;

use std::io;
use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::Backend;

use crate::editor;

const TICK: Duration = Duration::from_millis(100);

/// Runs the application loop until the user quits.
pub async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: &dyn EventSource,
) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        app.poll_completions();
        terminal.draw(|f| app.render(f))?;

        if events.poll(TICK)? {
            if let Event::Key(key) = events.read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        if let Some(path) = app.edit_request.take() {
            run_editor(terminal, app, &path)?;
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Suspends the TUI, runs the external editor, and restores the terminal.
fn run_editor<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, path: &Path) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;

    let result = editor::open(path);

    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;
    terminal.clear()?;

    app.editor_finished(result);
    Ok(())
}
