use tracing::{debug, warn};

use crate::catalog;

use super::action::Action;
use super::layout::{GesturePolicy, Orientation};
use super::state::AppState;

/// Pure state reducer.
///
/// Takes the current state and an action, returns the new state. No side
/// effects beyond reading the compiled-in catalog on reset.
pub fn reduce(state: AppState, action: Action) -> AppState {
    debug!("ACTION: {:?}", action);
    match action {
        Action::SelectNext => select(state, 1),
        Action::SelectPrev => select(state, -1),
        Action::ToggleGrab => toggle_grab(state),
        Action::Reorder { from, to } => reorder(state, from, to),
        Action::Dismiss(index) => dismiss(state, index),
        Action::Reset => reset(state),
        Action::Resize { width, height } => resize(state, width, height),
        Action::Quit => {
            let mut state = state;
            state.quit = true;
            state
        }
    }
}

fn select(mut state: AppState, delta: isize) -> AppState {
    state.status = None;
    if state.sports.is_empty() {
        return state;
    }
    let last = state.sports.len() - 1;
    state.selected = state
        .selected
        .saturating_add_signed(delta)
        .min(last);
    state
}

fn toggle_grab(mut state: AppState) -> AppState {
    state.status = None;
    if !state.sports.is_empty() {
        state.grabbed = !state.grabbed;
    }
    state
}

/// Swap the two cards in place; the selection follows the moved card.
fn reorder(mut state: AppState, from: usize, to: usize) -> AppState {
    state.status = None;
    state.sports.swap(from, to);
    state.selected = to;
    debug!("REORDER: card {} -> {}", from, to);
    state
}

/// Remove the card at `index` if the current orientation allows it.
///
/// The policy is computed from the orientation at the time of the gesture.
/// In landscape the card stays on the board and the status bar says so.
fn dismiss(mut state: AppState, index: usize) -> AppState {
    let policy = GesturePolicy::for_orientation(state.orientation);
    if !policy.dismiss_enabled {
        debug!("DISMISS: disabled in landscape, card {} returned", index);
        state.status = Some("Dismiss is disabled in landscape".to_string());
        return state;
    }
    let removed = state.sports.remove(index);
    debug!("DISMISS: removed card {} ({})", index, removed.title);
    state.grabbed = false;
    if state.sports.is_empty() {
        state.selected = 0;
    } else if state.selected >= state.sports.len() {
        state.selected = state.sports.len() - 1;
    }
    state.status = Some(format!("Dismissed {}", removed.title));
    state
}

/// Repopulate the board wholesale from the bundled catalog.
fn reset(mut state: AppState) -> AppState {
    match catalog::load() {
        Ok(sports) => {
            state.sports = sports;
            state.selected = 0;
            state.grabbed = false;
            state.status = Some("Catalog reloaded".to_string());
        }
        Err(e) => {
            warn!("RESET: catalog failed to load: {:#}", e);
            state.status = Some(format!("Reset failed: {}", e));
        }
    }
    state
}

/// Recompute orientation from the terminal size. Pure and idempotent.
fn resize(mut state: AppState, width: u16, height: u16) -> AppState {
    let orientation = Orientation::of(width, height);
    if orientation != state.orientation {
        debug!(
            "RESIZE: {}x{} -> {}, span {}",
            width,
            height,
            orientation.label(),
            orientation.span_count()
        );
        state.orientation = orientation;
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sport::Sport;

    fn board(titles: &[&str], orientation: Orientation) -> AppState {
        AppState {
            sports: titles
                .iter()
                .map(|t| Sport::new(*t, format!("about {}", t), *t))
                .collect(),
            orientation,
            ..AppState::default()
        }
    }

    fn titles(state: &AppState) -> Vec<&str> {
        state.sports.iter().map(|s| s.title.as_str()).collect()
    }

    #[test]
    fn test_reorder_swaps_in_place() {
        let state = board(&["Golf", "Tennis", "Soccer"], Orientation::Portrait);
        let state = reduce(state, Action::Reorder { from: 0, to: 2 });
        assert_eq!(titles(&state), vec!["Soccer", "Tennis", "Golf"]);
        assert_eq!(state.selected, 2);
    }

    #[test]
    fn test_reorder_is_an_involution() {
        let original = board(&["Golf", "Tennis", "Soccer"], Orientation::Portrait);
        let state = reduce(original.clone(), Action::Reorder { from: 0, to: 1 });
        let state = reduce(state, Action::Reorder { from: 1, to: 0 });
        assert_eq!(titles(&state), titles(&original));
    }

    #[test]
    fn test_dismiss_in_portrait_removes_exactly_one() {
        let state = board(&["Golf", "Tennis", "Soccer"], Orientation::Portrait);
        let state = reduce(state, Action::Dismiss(1));
        assert_eq!(titles(&state), vec!["Golf", "Soccer"]);
    }

    #[test]
    fn test_dismiss_in_landscape_is_refused() {
        let state = board(&["Golf", "Tennis", "Soccer"], Orientation::Landscape);
        let state = reduce(state, Action::Dismiss(1));
        assert_eq!(titles(&state), vec!["Golf", "Tennis", "Soccer"]);
        assert!(state.status.as_deref().unwrap().contains("landscape"));
    }

    #[test]
    fn test_dismiss_of_last_card_clamps_selection() {
        let mut state = board(&["Golf", "Tennis"], Orientation::Portrait);
        state.selected = 1;
        let state = reduce(state, Action::Dismiss(1));
        assert_eq!(state.selected, 0);
        let state = reduce(state, Action::Dismiss(0));
        assert!(state.sports.is_empty());
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_resize_sets_span_and_is_idempotent() {
        let state = board(&["Golf"], Orientation::Portrait);
        let state = reduce(state, Action::Resize { width: 120, height: 30 });
        assert_eq!(state.orientation, Orientation::Landscape);
        assert_eq!(state.span_count(), 2);
        let state = reduce(state, Action::Resize { width: 120, height: 30 });
        assert_eq!(state.span_count(), 2);
        let state = reduce(state, Action::Resize { width: 60, height: 40 });
        assert_eq!(state.orientation, Orientation::Portrait);
        assert_eq!(state.span_count(), 1);
    }

    #[test]
    fn test_reset_restores_the_catalog() {
        let state = board(&["Golf", "Tennis"], Orientation::Portrait);
        let state = reduce(state, Action::Dismiss(0));
        let state = reduce(state, Action::Reset);
        let expected = catalog::load().unwrap();
        assert_eq!(state.sports, expected);
        assert_eq!(state.selected, 0);
        assert!(!state.grabbed);
    }

    #[test]
    fn test_select_clamps_at_both_ends() {
        let state = board(&["Golf", "Tennis"], Orientation::Portrait);
        let state = reduce(state, Action::SelectPrev);
        assert_eq!(state.selected, 0);
        let state = reduce(state, Action::SelectNext);
        let state = reduce(state, Action::SelectNext);
        assert_eq!(state.selected, 1);
    }

    #[test]
    fn test_toggle_grab_on_empty_board_is_a_no_op() {
        let state = board(&[], Orientation::Portrait);
        let state = reduce(state, Action::ToggleGrab);
        assert!(!state.grabbed);
    }

    #[test]
    fn test_quit_sets_the_flag() {
        let state = board(&[], Orientation::Portrait);
        assert!(reduce(state, Action::Quit).quit);
    }

    #[test]
    fn test_golf_tennis_scenario() {
        // load -> reorder -> dismiss, the full gesture round trip.
        let state = board(&["Golf", "Tennis"], Orientation::Portrait);
        assert_eq!(state.sports.len(), 2);
        assert_eq!(state.sports[0].title, "Golf");

        let state = reduce(state, Action::Reorder { from: 0, to: 1 });
        assert_eq!(state.sports[0].title, "Tennis");

        let state = reduce(state, Action::Dismiss(0));
        assert_eq!(state.sports.len(), 1);
        assert_eq!(state.sports[0].title, "Golf");
    }
}
