use std::sync::Arc;

use futures::future::BoxFuture;
use tokio::sync::Mutex;

use crate::{
    dao::{
        scoreboard_store::{LoadedDocument, ScoreboardStore, to_pretty_json},
        storage::{StoreError, StoreResult},
    },
    state::scoreboard::ScoreboardDocument,
};

/// Process-local backend holding the serialized document text.
///
/// Keeping the raw text rather than the decoded value lets tests plant corrupt content.
#[derive(Debug, Clone, Default)]
pub struct InMemoryScoreboardStore {
    contents: Arc<Mutex<Option<String>>>,
}

impl InMemoryScoreboardStore {
    /// Empty store, as on a first start.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from arbitrary text, as if it had been found on disk.
    pub fn with_raw(contents: impl Into<String>) -> Self {
        Self {
            contents: Arc::new(Mutex::new(Some(contents.into()))),
        }
    }

    /// Current stored text, if any.
    pub async fn raw(&self) -> Option<String> {
        self.contents.lock().await.clone()
    }
}

fn encode(doc: &ScoreboardDocument) -> StoreResult<String> {
    to_pretty_json(doc)
        .map_err(|err| StoreError::unavailable("failed to serialize scoreboard document".into(), err))
}

impl ScoreboardStore for InMemoryScoreboardStore {
    fn initialize(&self) -> BoxFuture<'static, StoreResult<bool>> {
        let contents = Arc::clone(&self.contents);
        Box::pin(async move {
            let mut slot = contents.lock().await;
            if slot.is_some() {
                return Ok(false);
            }
            *slot = Some(encode(&ScoreboardDocument::seed())?);
            Ok(true)
        })
    }

    fn read(&self) -> BoxFuture<'static, StoreResult<LoadedDocument>> {
        let contents = Arc::clone(&self.contents);
        Box::pin(async move {
            let slot = contents.lock().await;
            slot.as_deref()
                .map(LoadedDocument::from_json)
                .ok_or(StoreError::Missing)
        })
    }

    fn write(&self, doc: ScoreboardDocument) -> BoxFuture<'static, StoreResult<()>> {
        let contents = Arc::clone(&self.contents);
        Box::pin(async move {
            let encoded = encode(&doc)?;
            *contents.lock().await = Some(encoded);
            Ok(())
        })
    }

    fn health_check(&self) -> BoxFuture<'static, StoreResult<()>> {
        Box::pin(async { Ok(()) })
    }
}
