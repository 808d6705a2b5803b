/// Pretty-printed JSON file on local disk.
pub mod file;
/// In-process store used by tests.
pub mod memory;

use futures::future::BoxFuture;

use crate::dao::storage::StoreResult;
use crate::state::scoreboard::ScoreboardDocument;

pub use file::FileScoreboardStore;
pub use memory::InMemoryScoreboardStore;

/// Result of reading the persisted document.
///
/// Content that exists but does not decode is reported as [`LoadedDocument::Unparseable`]
/// instead of an error so callers decide how to degrade.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadedDocument {
    /// The content decoded into a document.
    Parsed(ScoreboardDocument),
    /// The content exists but is not a valid document.
    Unparseable {
        /// Decoder error message.
        reason: String,
    },
}

impl LoadedDocument {
    /// Decode raw JSON text into a [`LoadedDocument`].
    pub fn from_json(contents: &str) -> Self {
        match serde_json::from_str::<ScoreboardDocument>(contents) {
            Ok(doc) => LoadedDocument::Parsed(doc),
            Err(err) => LoadedDocument::Unparseable {
                reason: err.to_string(),
            },
        }
    }
}

/// Render a document the way it is kept at rest: pretty JSON with a two-space indent.
pub fn to_pretty_json(doc: &ScoreboardDocument) -> serde_json::Result<String> {
    serde_json::to_string_pretty(doc)
}

/// Abstraction over the persistence of the single scoreboard document.
///
/// Every write replaces the whole document; backends never merge partial updates.
pub trait ScoreboardStore: Send + Sync {
    /// Write the seed document when nothing is persisted yet, returning whether it did.
    fn initialize(&self) -> BoxFuture<'static, StoreResult<bool>>;
    /// Read and decode the persisted document.
    fn read(&self) -> BoxFuture<'static, StoreResult<LoadedDocument>>;
    /// Replace the persisted document; readers never observe a partial write.
    fn write(&self, doc: ScoreboardDocument) -> BoxFuture<'static, StoreResult<()>>;
    /// Check that the backend is reachable without touching the document.
    fn health_check(&self) -> BoxFuture<'static, StoreResult<()>>;
}
