/// State changes of the board screen.
///
/// Key events and terminal resizes are translated into actions by
/// `keys::key_to_action` and the event loop; the reducer applies them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelectNext,
    SelectPrev,
    /// Grab or release the selected card.
    ToggleGrab,
    /// Swap the cards at the two positions. Both indices are validated by
    /// the key layer before this is emitted.
    Reorder { from: usize, to: usize },
    /// Swipe the card at the position away. Honored in portrait only.
    Dismiss(usize),
    /// Reload the bundled catalog, dropping all edits.
    Reset,
    /// Terminal size changed; recompute orientation and span count.
    Resize { width: u16, height: u16 },
    Quit,
}
