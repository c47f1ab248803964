// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, clock polling)
// - Rendering the UI

pub mod app;
pub mod components;
pub mod input;
pub mod layout;
pub mod roster;
pub mod theme;
pub mod ui;

use crate::clock::SecondClock;
use crate::config::Config;
use crate::discussion::Discussion;
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// when done. Hands the discussion back for the exit summary.
pub async fn run_tui(discussion: Discussion, config: &Config, log_buffer: LogBuffer) -> Result<Discussion> {
    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(discussion, config, log_buffer);

    let result = run_event_loop(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result.map(|()| app.discussion)
}

/// Main event loop
///
/// Waits on keyboard input and a 100 ms ticker, whichever comes first. The
/// ticker polls the second clock, so a new wall-clock second is noticed
/// within a tenth of a second.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(100));
    let mut clock = SecondClock::new();

    loop {
        if app.needs_clear {
            terminal.clear().context("Failed to clear terminal")?;
            app.needs_clear = false;
        }

        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key_event)) = event::read() {
                        if let Some(command) = input::map_key(app.mode, key_event) {
                            app.apply(command);
                        }
                    }
                }
            } => {}

            // Clock polling
            _ = tick_interval.tick() => {
                app.poll_clock(&mut clock);
                app.expire_toast();
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
