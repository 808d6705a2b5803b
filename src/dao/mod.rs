/// Repository applying the load/save policy on top of a store backend.
pub mod scoreboard;
/// Backends persisting the scoreboard document.
pub mod scoreboard_store;
/// Storage abstraction layer for document persistence.
pub mod storage;
