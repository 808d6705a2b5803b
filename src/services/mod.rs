/// OpenAPI documentation generation.
pub mod documentation;
/// Health check service.
pub mod health_service;
/// Scoreboard read and update operations.
pub mod scoreboard_service;
