//! Library crate for scoreboard-back, exposing modules for binaries and integration tests.

pub mod config;
/// Persistence of the scoreboard document.
pub mod dao;
/// Wire types of the HTTP API.
pub mod dto;
/// Service and HTTP error types.
pub mod error;
/// HTTP route trees.
pub mod routes;
/// Business operations behind the routes.
pub mod services;
/// Shared application state and the scoreboard model.
pub mod state;
