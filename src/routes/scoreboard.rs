use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};

use crate::{
    dto::scoreboard::{
        ErrorResponse, MessageResponse, UpdateTeamNamesRequest, UpdateWinnerRequest,
    },
    error::AppError,
    routes::extract::JsonBody,
    services::scoreboard_service,
    state::{SharedState, scoreboard::ScoreboardDocument},
};

const READ_FAILED: &str = "Failed to read data";
const UPDATE_WINNER_FAILED: &str = "Failed to update winner";
const UPDATE_TEAM_NAMES_FAILED: &str = "Failed to update team names";
const RESET_FAILED: &str = "Failed to reset scores";

/// Routes reading and mutating the scoreboard document.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/api/scoreboard", get(get_scoreboard))
        .route("/api/update-winner", post(update_winner))
        .route("/api/update-team-names", post(update_team_names))
        .route("/api/reset-scores", post(reset_scores))
}

#[utoipa::path(
    get,
    path = "/api/scoreboard",
    tag = "scoreboard",
    responses(
        (status = 200, description = "Full scoreboard", body = ScoreboardDocument),
        (status = 500, description = "Store unreadable", body = ErrorResponse)
    )
)]
/// Return team names, scores and every game with its winner.
pub async fn get_scoreboard(
    State(state): State<SharedState>,
) -> Result<Json<ScoreboardDocument>, AppError> {
    let doc = scoreboard_service::get_snapshot(&state)
        .await
        .map_err(AppError::during(READ_FAILED))?;
    Ok(Json(doc))
}

#[utoipa::path(
    post,
    path = "/api/update-winner",
    tag = "scoreboard",
    request_body = UpdateWinnerRequest,
    responses(
        (status = 200, description = "Winner recorded", body = MessageResponse),
        (status = 400, description = "Invalid game index or winner", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
/// Record which team won a game, moving points from any previous winner.
pub async fn update_winner(
    State(state): State<SharedState>,
    JsonBody(request): JsonBody<UpdateWinnerRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    scoreboard_service::record_winner(&state, request)
        .await
        .map_err(AppError::during(UPDATE_WINNER_FAILED))?;
    Ok(Json(MessageResponse::new("Winner updated successfully")))
}

#[utoipa::path(
    post,
    path = "/api/update-team-names",
    tag = "scoreboard",
    request_body = UpdateTeamNamesRequest,
    responses(
        (status = 200, description = "Team names replaced", body = MessageResponse),
        (status = 400, description = "A team name is missing", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
/// Change the displayed team names.
pub async fn update_team_names(
    State(state): State<SharedState>,
    JsonBody(request): JsonBody<UpdateTeamNamesRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    scoreboard_service::rename_teams(&state, request)
        .await
        .map_err(AppError::during(UPDATE_TEAM_NAMES_FAILED))?;
    Ok(Json(MessageResponse::new("Team names updated successfully")))
}

#[utoipa::path(
    post,
    path = "/api/reset-scores",
    tag = "scoreboard",
    responses(
        (status = 200, description = "Scores and winners cleared", body = MessageResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
/// Zero both scores and clear every game winner.
pub async fn reset_scores(
    State(state): State<SharedState>,
) -> Result<Json<MessageResponse>, AppError> {
    scoreboard_service::reset_scores(&state)
        .await
        .map_err(AppError::during(RESET_FAILED))?;
    Ok(Json(MessageResponse::new("Scores reset successfully")))
}
