use tracing::{info, warn};
use validator::Validate;

use crate::{
    dto::scoreboard::{UpdateTeamNamesRequest, UpdateWinnerRequest},
    error::ServiceError,
    state::{
        SharedState,
        scoreboard::{ScoreError, ScoreboardDocument, parse_game_index},
    },
};

const TEAM_NAMES_REQUIRED: &str = "Both team names are required";

/// Return the whole persisted scoreboard.
pub async fn get_snapshot(state: &SharedState) -> Result<ScoreboardDocument, ServiceError> {
    Ok(state.scoreboard().load().await?)
}

/// Record the winner of one game and persist the adjusted team scores.
pub async fn record_winner(
    state: &SharedState,
    request: UpdateWinnerRequest,
) -> Result<(), ServiceError> {
    let repository = state.scoreboard();
    let mut doc = repository.load().await?;

    let Some(index) = parse_game_index(&request.game_index) else {
        warn!(game_index = %request.game_index, "rejecting malformed game index");
        return Err(ScoreError::InvalidIndex.into());
    };
    // Non-string winners can never match a team key.
    let winner = request.winner.as_str().unwrap_or_default();

    let change = doc.record_winner(index, winner).inspect_err(|err| {
        warn!(game_index = index, winner, error = %err, "rejecting winner update");
    })?;
    repository.save(doc).await?;

    if change.moved_points(winner) {
        info!(
            game_index = index,
            winner,
            previous = change.previous.as_deref().unwrap_or("none"),
            points = change.points,
            "game winner recorded"
        );
    }
    Ok(())
}

/// Replace the displayed team names, leaving scores and recorded winners untouched.
pub async fn rename_teams(
    state: &SharedState,
    request: UpdateTeamNamesRequest,
) -> Result<(), ServiceError> {
    if let Err(err) = request.validate() {
        warn!(error = %err, "rejecting team rename");
        return Err(ServiceError::InvalidInput(TEAM_NAMES_REQUIRED.into()));
    }
    let (team_a, team_b) = request.trimmed();

    let repository = state.scoreboard();
    let mut doc = repository.load().await?;
    info!(team_a = %team_a, team_b = %team_b, "renaming teams");
    doc.rename_teams(team_a, team_b);
    repository.save(doc).await?;
    Ok(())
}

/// Zero both team scores and clear every recorded winner.
pub async fn reset_scores(state: &SharedState) -> Result<(), ServiceError> {
    let repository = state.scoreboard();
    let mut doc = repository.load().await?;
    doc.reset_scores();
    repository.save(doc).await?;
    info!("scores reset");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::{dao::scoreboard_store::InMemoryScoreboardStore, state::AppState};

    fn state() -> SharedState {
        AppState::new(Arc::new(InMemoryScoreboardStore::new()))
    }

    fn winner(index: serde_json::Value, team: &str) -> UpdateWinnerRequest {
        UpdateWinnerRequest {
            game_index: index,
            winner: json!(team),
        }
    }

    fn rename(a: Option<&str>, b: Option<&str>) -> UpdateTeamNamesRequest {
        UpdateTeamNamesRequest {
            team_a_name: a.map(String::from),
            team_b_name: b.map(String::from),
        }
    }

    fn invalid_input(result: Result<(), ServiceError>) -> String {
        match result {
            Err(ServiceError::InvalidInput(message)) => message,
            other => panic!("expected invalid input, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn recording_winner_persists_points() {
        let state = state();
        record_winner(&state, winner(json!(0), "Team A")).await.unwrap();
        record_winner(&state, winner(json!("1"), "Team A")).await.unwrap();

        let doc = get_snapshot(&state).await.unwrap();
        assert_eq!(doc.teams["Team A"], 20);
        assert_eq!(doc.games[1].winner.as_deref(), Some("Team A"));
    }

    #[tokio::test]
    async fn index_is_checked_before_winner() {
        let state = state();
        let len = get_snapshot(&state).await.unwrap().games.len();

        let message = invalid_input(record_winner(&state, winner(json!(len), "Nobody")).await);
        assert_eq!(message, "Invalid game index");

        let message = invalid_input(record_winner(&state, winner(json!("x"), "Team A")).await);
        assert_eq!(message, "Invalid game index");

        let message = invalid_input(record_winner(&state, winner(json!(0), "Nobody")).await);
        assert_eq!(message, "Invalid winner");
    }

    #[tokio::test]
    async fn non_string_winner_is_invalid() {
        let state = state();
        let request = UpdateWinnerRequest {
            game_index: json!(0),
            winner: json!(1),
        };
        assert_eq!(
            invalid_input(record_winner(&state, request).await),
            "Invalid winner"
        );
    }

    #[tokio::test]
    async fn rename_rejects_missing_name_without_touching_store() {
        let state = state();
        let before = get_snapshot(&state).await.unwrap();

        let message = invalid_input(rename_teams(&state, rename(Some("Lions"), Some(""))).await);
        assert_eq!(message, TEAM_NAMES_REQUIRED);
        let message = invalid_input(rename_teams(&state, rename(None, Some("Tigers"))).await);
        assert_eq!(message, TEAM_NAMES_REQUIRED);

        assert_eq!(get_snapshot(&state).await.unwrap(), before);
    }

    #[tokio::test]
    async fn rename_trims_and_keeps_score_keys() {
        let state = state();
        record_winner(&state, winner(json!(4), "Team B")).await.unwrap();
        rename_teams(&state, rename(Some(" Lions "), Some("Tigers ")))
            .await
            .unwrap();

        let doc = get_snapshot(&state).await.unwrap();
        assert_eq!(doc.team_names.team_a, "Lions");
        assert_eq!(doc.team_names.team_b, "Tigers");
        assert_eq!(doc.teams["Team B"], 10);
        assert!(!doc.teams.contains_key("Tigers"));
    }

    #[tokio::test]
    async fn reset_clears_everything_but_names_and_games() {
        let state = state();
        record_winner(&state, winner(json!(0), "Team A")).await.unwrap();
        record_winner(&state, winner(json!(7), "Team B")).await.unwrap();
        rename_teams(&state, rename(Some("Lions"), Some("Tigers")))
            .await
            .unwrap();

        reset_scores(&state).await.unwrap();

        let doc = get_snapshot(&state).await.unwrap();
        assert!(doc.teams.values().all(|score| *score == 0));
        assert!(doc.games.iter().all(|game| game.winner.is_none()));
        assert_eq!(doc.games.len(), ScoreboardDocument::seed().games.len());
        assert_eq!(doc.team_names.team_a, "Lions");
    }
}
