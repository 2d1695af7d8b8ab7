//! Terminal lifecycle and event loop for the board screen.

pub mod action;
pub mod keys;
pub mod layout;
pub mod reducer;
pub mod state;
pub mod view;
pub mod widgets;

pub use action::Action;
pub use keys::key_to_action;
pub use layout::{GesturePolicy, Orientation};
pub use reducer::reduce;
pub use state::AppState;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::config::Config;

/// Main entry point for TUI mode
pub fn run(config: Config) -> Result<()> {
    let mut state = AppState::new(config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Orientation follows the terminal size from the very first frame, so
    // the first dismiss already sees the current policy.
    let size = terminal.size()?;
    state = reduce(
        state,
        Action::Resize {
            width: size.width,
            height: size.height,
        },
    );

    let result = event_loop(&mut terminal, state);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut state: AppState,
) -> Result<()> {
    loop {
        terminal.draw(|frame| view::draw(frame, &state))?;

        // Poll for input with a short tick so resizes land promptly.
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(action) = key_to_action(key, &state) {
                        state = reduce(state, action);
                    }
                }
                Event::Resize(width, height) => {
                    state = reduce(state, Action::Resize { width, height });
                }
                _ => {}
            }
        }

        if state.quit {
            return Ok(());
        }
    }
}
