use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for the scoreboard backend.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::scoreboard::get_scoreboard,
        crate::routes::scoreboard::update_winner,
        crate::routes::scoreboard::update_team_names,
        crate::routes::scoreboard::reset_scores,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::scoreboard::UpdateWinnerRequest,
            crate::dto::scoreboard::UpdateTeamNamesRequest,
            crate::dto::scoreboard::MessageResponse,
            crate::dto::scoreboard::ErrorResponse,
            crate::state::scoreboard::ScoreboardDocument,
            crate::state::scoreboard::TeamNames,
            crate::state::scoreboard::Game,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "scoreboard", description = "Team scores and game winners"),
    )
)]
pub struct ApiDoc;
