pub mod scoreboard;

use std::sync::Arc;

use crate::dao::{scoreboard::ScoreboardRepository, scoreboard_store::ScoreboardStore};

/// Handle to [`AppState`] shared by all handlers.
pub type SharedState = Arc<AppState>;

/// Central application state handed to every request handler.
///
/// Nothing about the scoreboard is cached here: each request loads the document from
/// the store, mutates it and writes it back, so concurrent writers race and the last
/// one wins.
pub struct AppState {
    scoreboard: ScoreboardRepository,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    pub fn new(store: Arc<dyn ScoreboardStore>) -> SharedState {
        Arc::new(Self {
            scoreboard: ScoreboardRepository::new(store),
        })
    }

    /// Repository wrapping the configured store backend.
    pub fn scoreboard(&self) -> &ScoreboardRepository {
        &self.scoreboard
    }
}
