use anyhow::Result;

use crate::catalog;
use crate::config::Config;
use crate::sport::Sport;

use super::layout::Orientation;

/// Root state of the board screen - single source of truth.
///
/// All mutation happens through the reducer; the view only reads.
#[derive(Debug, Clone)]
pub struct AppState {
    /// On-screen order of the cards. Reorder swaps in place, dismiss
    /// removes in place, reset repopulates wholesale.
    pub sports: Vec<Sport>,
    /// Index of the selected card; meaningful only while `sports` is
    /// non-empty.
    pub selected: usize,
    /// The selected card is grabbed and rides the selection keys.
    pub grabbed: bool,
    pub orientation: Orientation,
    /// Transient message for the status bar.
    pub status: Option<String>,
    pub quit: bool,
    pub config: Config,
}

impl AppState {
    /// Fresh state with the bundled catalog loaded.
    pub fn new(config: Config) -> Result<Self> {
        Ok(AppState {
            sports: catalog::load()?,
            config,
            ..AppState::default()
        })
    }

    pub fn span_count(&self) -> u16 {
        self.orientation.span_count()
    }
}

impl Default for AppState {
    /// Empty board, before the first load.
    fn default() -> Self {
        AppState {
            sports: Vec::new(),
            selected: 0,
            grabbed: false,
            orientation: Orientation::default(),
            status: None,
            quit: false,
            config: Config::default(),
        }
    }
}
