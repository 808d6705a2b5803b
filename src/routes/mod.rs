use axum::{
    Router,
    http::{Method, header},
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::info;

use crate::{config::AppConfig, state::SharedState};

/// Swagger UI routes.
pub mod docs;
pub mod extract;
/// Health check route.
pub mod health;
/// Scoreboard API routes.
pub mod scoreboard;

/// Compose all route trees, wiring in shared state and documentation routes.
pub fn router(state: SharedState) -> Router<()> {
    let api_router = health::router().merge(scoreboard::router());

    let docs_router = docs::router(state.clone());

    api_router.merge(docs_router).with_state(state)
}

/// Build the served application: routes, optional frontend and cross-cutting layers.
pub fn build_router(state: SharedState, config: &AppConfig) -> Router<()> {
    let mut app = router(state);

    let frontend = config.frontend_dir();
    if frontend.is_dir() {
        info!(path = %frontend.display(), "serving static frontend files");
        app = app.fallback_service(ServeDir::new(frontend));
    }

    app.layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
}

/// Cross-origin policy: one allowed origin, GET/POST only, `Content-Type` header only.
fn cors_layer(config: &AppConfig) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list([config.allowed_origin().clone()]))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}
