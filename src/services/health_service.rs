use tracing::warn;

use crate::{dto::health::HealthResponse, state::SharedState};

/// Report whether the scoreboard store is reachable, logging the reason when it is not.
pub async fn health_status(state: &SharedState) -> HealthResponse {
    match state.scoreboard().health_check().await {
        Ok(()) => HealthResponse::ok(),
        Err(err) => {
            warn!(error = %err, "storage health check failed");
            HealthResponse::degraded()
        }
    }
}
