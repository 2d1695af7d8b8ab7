/// Keyboard event to action mapping.
///
/// The terminal's stand-in for the touch gesture layer: the selection keys
/// move the cursor, a grabbed card rides the same keys as a reorder, and
/// the indices on Reorder/Dismiss are validated here so the reducer never
/// sees an out-of-range position.
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::trace;

use super::action::Action;
use super::state::AppState;

pub fn key_to_action(key: KeyEvent, state: &AppState) -> Option<Action> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }

    let action = match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Reset),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Left | KeyCode::Char('h') => {
            step(state, -1)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Right | KeyCode::Char('l') => {
            step(state, 1)
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            if state.sports.is_empty() {
                None
            } else {
                Some(Action::ToggleGrab)
            }
        }
        KeyCode::Char('x') | KeyCode::Delete | KeyCode::Backspace => {
            if state.sports.is_empty() {
                None
            } else {
                Some(Action::Dismiss(state.selected))
            }
        }
        _ => None,
    };

    if let Some(ref action) = action {
        trace!("KEY: {:?} -> {:?}", key.code, action);
    }
    action
}

/// One selection step, or a one-slot reorder while the card is grabbed.
/// Returns None at the ends of the list, so emitted indices are always valid.
fn step(state: &AppState, delta: isize) -> Option<Action> {
    let len = state.sports.len();
    if len == 0 {
        return None;
    }
    let from = state.selected;
    let to = from.checked_add_signed(delta)?;
    if to >= len {
        return None;
    }
    Some(if state.grabbed {
        Action::Reorder { from, to }
    } else if delta < 0 {
        Action::SelectPrev
    } else {
        Action::SelectNext
    })
}
