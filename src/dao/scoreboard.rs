use std::sync::Arc;

use tracing::{error, info};

use crate::{
    dao::{
        scoreboard_store::{LoadedDocument, ScoreboardStore},
        storage::StoreResult,
    },
    state::scoreboard::ScoreboardDocument,
};

/// Data Access Object applying the load and save policy for the scoreboard document.
#[derive(Clone)]
pub struct ScoreboardRepository {
    store: Arc<dyn ScoreboardStore>,
}

impl ScoreboardRepository {
    /// Wrap a store backend.
    pub fn new(store: Arc<dyn ScoreboardStore>) -> Self {
        Self { store }
    }

    /// Seed the store if it holds nothing yet.
    pub async fn initialize(&self) -> StoreResult<()> {
        if self.store.initialize().await? {
            info!("seeded scoreboard with default teams and games");
        }
        Ok(())
    }

    /// Return the persisted document, seeding it first when absent.
    ///
    /// Content that fails to decode yields [`ScoreboardDocument::fallback`]; only I/O
    /// failures surface as errors.
    pub async fn load(&self) -> StoreResult<ScoreboardDocument> {
        self.initialize().await?;
        match self.store.read().await? {
            LoadedDocument::Parsed(doc) => Ok(doc),
            LoadedDocument::Unparseable { reason } => {
                error!(error = %reason, "scoreboard document is unreadable; serving fallback");
                Ok(ScoreboardDocument::fallback())
            }
        }
    }

    /// Replace the persisted document with `doc`.
    pub async fn save(&self, doc: ScoreboardDocument) -> StoreResult<()> {
        self.store.write(doc).await
    }

    /// Delegate to the backend health check.
    pub async fn health_check(&self) -> StoreResult<()> {
        self.store.health_check().await
    }
}
