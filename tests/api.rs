use std::{io, sync::Arc};

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
    response::Response,
};
use futures::future::BoxFuture;
use scoreboard_back::{
    config::AppConfig,
    dao::{
        scoreboard_store::{InMemoryScoreboardStore, LoadedDocument, ScoreboardStore},
        storage::{StoreError, StoreResult},
    },
    routes,
    state::{AppState, scoreboard::ScoreboardDocument},
};
use serde_json::{Value, json};
use tower::ServiceExt;

/// Store whose reads succeed but every write fails, as with a read-only disk.
struct ReadOnlyStore;

impl ScoreboardStore for ReadOnlyStore {
    fn initialize(&self) -> BoxFuture<'static, StoreResult<bool>> {
        Box::pin(async { Ok(false) })
    }

    fn read(&self) -> BoxFuture<'static, StoreResult<LoadedDocument>> {
        Box::pin(async { Ok(LoadedDocument::Parsed(ScoreboardDocument::seed())) })
    }

    fn write(&self, _doc: ScoreboardDocument) -> BoxFuture<'static, StoreResult<()>> {
        Box::pin(async {
            Err(StoreError::unavailable(
                "failed to write `data.json`".into(),
                io::Error::new(io::ErrorKind::PermissionDenied, "read-only file system"),
            ))
        })
    }

    fn health_check(&self) -> BoxFuture<'static, StoreResult<()>> {
        Box::pin(async {
            Err(StoreError::unavailable(
                "disk gone".into(),
                io::Error::other("disk gone"),
            ))
        })
    }
}

fn app_with(store: InMemoryScoreboardStore) -> Router {
    routes::router(AppState::new(Arc::new(store)))
}

fn app() -> Router {
    app_with(InMemoryScoreboardStore::new())
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response: Response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn post_empty(uri: &str) -> Request<Body> {
    Request::post(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn scoreboard(app: &Router) -> Value {
    let (status, body) = send(app, get("/api/scoreboard")).await;
    assert_eq!(status, StatusCode::OK);
    body
}

#[tokio::test]
async fn first_read_returns_seed_document() {
    let app = app();
    let body = scoreboard(&app).await;

    assert_eq!(body["teamNames"], json!({ "teamA": "Team A", "teamB": "Team B" }));
    assert_eq!(body["teams"], json!({ "Team A": 0, "Team B": 0 }));
    let games = body["games"].as_array().unwrap();
    assert_eq!(games.len(), 16);
    assert_eq!(
        games[0],
        json!({ "title": "Vadam Vali", "points": 10, "winner": null })
    );
}

#[tokio::test]
async fn corrupt_document_is_served_as_fallback() {
    let app = app_with(InMemoryScoreboardStore::with_raw("{\"teams\": oops"));
    let body = scoreboard(&app).await;

    assert_eq!(body["teams"], json!({ "Team A": 0, "Team B": 0 }));
    assert_eq!(body["games"], json!([]));
}

#[tokio::test]
async fn update_winner_moves_points_between_teams() {
    let app = app();

    let (status, body) = send(
        &app,
        post_json("/api/update-winner", json!({ "gameIndex": 2, "winner": "Team A" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Winner updated successfully" }));
    assert_eq!(scoreboard(&app).await["teams"], json!({ "Team A": 10, "Team B": 0 }));

    send(
        &app,
        post_json("/api/update-winner", json!({ "gameIndex": "2", "winner": "Team B" })),
    )
    .await;
    let body = scoreboard(&app).await;
    assert_eq!(body["teams"], json!({ "Team A": 0, "Team B": 10 }));
    assert_eq!(body["games"][2]["winner"], "Team B");
}

#[tokio::test]
async fn repeating_a_winner_changes_nothing() {
    let app = app();
    for _ in 0..2 {
        let (status, _) = send(
            &app,
            post_json("/api/update-winner", json!({ "gameIndex": 0, "winner": "Team B" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }
    assert_eq!(scoreboard(&app).await["teams"], json!({ "Team A": 0, "Team B": 10 }));
}

#[tokio::test]
async fn index_equal_to_length_is_invalid() {
    let app = app();
    let (status, body) = send(
        &app,
        post_json("/api/update-winner", json!({ "gameIndex": 16, "winner": "Team A" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "Invalid game index" }));
}

#[tokio::test]
async fn missing_index_is_invalid() {
    let app = app();
    let (status, body) = send(
        &app,
        post_json("/api/update-winner", json!({ "winner": "Team A" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid game index");
}

#[tokio::test]
async fn unknown_winner_is_invalid() {
    let app = app();
    let (status, body) = send(
        &app,
        post_json("/api/update-winner", json!({ "gameIndex": 1, "winner": "Team C" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "Invalid winner" }));
    assert_eq!(scoreboard(&app).await["games"][1]["winner"], Value::Null);
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let app = app();
    let request = Request::post("/api/update-winner")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{ not json"))
        .unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn bodyless_winner_update_reports_invalid_index() {
    let app = app();
    let before = scoreboard(&app).await;

    let (status, body) = send(&app, post_empty("/api/update-winner")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "Invalid game index" }));

    let blank = Request::post("/api/update-winner")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("  "))
        .unwrap();
    let (status, body) = send(&app, blank).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "Invalid game index" }));

    assert_eq!(scoreboard(&app).await, before);
}

#[tokio::test]
async fn non_json_body_is_ignored() {
    let app = app();
    let request = Request::post("/api/update-winner")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from(r#"{"gameIndex": 0, "winner": "Team A"}"#))
        .unwrap();

    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "Invalid game index" }));
    assert_eq!(scoreboard(&app).await["teams"]["Team A"], 0);
}

#[tokio::test]
async fn bodyless_rename_reports_missing_names() {
    let app = app();
    let before = scoreboard(&app).await;

    let (status, body) = send(&app, post_empty("/api/update-team-names")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "Both team names are required" }));

    let (status, body) = send(&app, post_json("/api/update-team-names", json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "Both team names are required" }));

    assert_eq!(scoreboard(&app).await, before);
}

#[tokio::test]
async fn rename_updates_display_names_only() {
    let app = app();
    send(
        &app,
        post_json("/api/update-winner", json!({ "gameIndex": 3, "winner": "Team A" })),
    )
    .await;

    let (status, body) = send(
        &app,
        post_json(
            "/api/update-team-names",
            json!({ "teamAName": "  Lions ", "teamBName": "Tigers" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Team names updated successfully" }));

    let body = scoreboard(&app).await;
    assert_eq!(body["teamNames"], json!({ "teamA": "Lions", "teamB": "Tigers" }));
    assert_eq!(body["teams"], json!({ "Team A": 10, "Team B": 0 }));
    assert_eq!(body["games"][3]["winner"], "Team A");
}

#[tokio::test]
async fn rename_with_empty_name_is_rejected() {
    let app = app();
    let before = scoreboard(&app).await;

    let (status, body) = send(
        &app,
        post_json(
            "/api/update-team-names",
            json!({ "teamAName": "Lions", "teamBName": "" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "Both team names are required" }));
    assert_eq!(scoreboard(&app).await, before);
}

#[tokio::test]
async fn reset_clears_scores_and_winners() {
    let app = app();
    for (index, team) in [(0, "Team A"), (4, "Team B"), (9, "Team A")] {
        send(
            &app,
            post_json("/api/update-winner", json!({ "gameIndex": index, "winner": team })),
        )
        .await;
    }

    let (status, body) = send(&app, post_empty("/api/reset-scores")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Scores reset successfully" }));

    let body = scoreboard(&app).await;
    assert_eq!(body["teams"], json!({ "Team A": 0, "Team B": 0 }));
    let games = body["games"].as_array().unwrap();
    assert_eq!(games.len(), 16);
    assert!(games.iter().all(|game| game["winner"].is_null()));
    assert_eq!(games[15]["title"], "Thalayana Adi");
}

#[tokio::test]
async fn store_failures_surface_as_server_errors() {
    let app = routes::router(AppState::new(Arc::new(ReadOnlyStore)));

    let (status, body) = send(&app, post_empty("/api/reset-scores")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Failed to reset scores");
    assert!(body["error"].as_str().unwrap().contains("read-only file system"));

    let (status, body) = send(
        &app,
        post_json("/api/update-winner", json!({ "gameIndex": 0, "winner": "Team A" })),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Failed to update winner");

    let (status, body) = send(&app, get("/healthcheck")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "degraded" }));
}

#[tokio::test]
async fn healthcheck_reports_ok() {
    let (status, body) = send(&app(), get("/healthcheck")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn cors_allows_only_configured_origin() {
    let state = AppState::new(Arc::new(InMemoryScoreboardStore::new()));
    let app = routes::build_router(state, &AppConfig::default());

    let allowed = Request::get("/api/scoreboard")
        .header(header::ORIGIN, "https://anoop968.github.io")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(allowed).await.unwrap();
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://anoop968.github.io"
    );

    let preflight = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/update-winner")
        .header(header::ORIGIN, "https://elsewhere.example")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(preflight).await.unwrap();
    assert!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );
}
