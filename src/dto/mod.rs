/// Health check payloads.
pub mod health;
pub mod scoreboard;
pub mod validation;
