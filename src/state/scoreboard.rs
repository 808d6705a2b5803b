//! Scoreboard document model and the pure mutations applied to it by the API.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use utoipa::ToSchema;

/// Display name given to the first team in a fresh document.
pub const DEFAULT_TEAM_A: &str = "Team A";
/// Display name given to the second team in a fresh document.
pub const DEFAULT_TEAM_B: &str = "Team B";
/// Points awarded by every seeded game.
pub const SEED_GAME_POINTS: u32 = 10;

const SEED_GAME_TITLES: [&str; 16] = [
    "Vadam Vali",
    "Lemon and Spoon",
    "Kasara Kali",
    "Thetta Pavakka",
    "Sujiyile Nule Korkkal",
    "Vellam Kudi",
    "Theta Malsaram Mulaku",
    "Ballon Chavitti Pottikkal",
    "Porotta Thetta Malsaram",
    "Kuppile Vellom Nirakkal",
    "Imavettal",
    "Ballon Udhipottical",
    "Uriyadi",
    "Mittai Perukkal",
    "Sundarikku Pottuthodal",
    "Thalayana Adi",
];

/// Rejections produced while recording a winner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// The index is malformed or past the end of the game list.
    #[error("Invalid game index")]
    InvalidIndex,
    /// The winner is not one of the scoring team keys.
    #[error("Invalid winner")]
    InvalidWinner,
}

/// Display names shown for the two teams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamNames {
    /// Name displayed for the first team.
    pub team_a: String,
    /// Name displayed for the second team.
    pub team_b: String,
}

impl Default for TeamNames {
    fn default() -> Self {
        Self {
            team_a: DEFAULT_TEAM_A.into(),
            team_b: DEFAULT_TEAM_B.into(),
        }
    }
}

/// A single scored event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Game {
    /// Name of the event.
    pub title: String,
    /// Points awarded to the winner, fixed at creation.
    pub points: u32,
    /// Team key credited with the points, `null` while undecided.
    pub winner: Option<String>,
}

impl Game {
    /// Build an undecided game.
    pub fn new(title: impl Into<String>, points: u32) -> Self {
        Self {
            title: title.into(),
            points,
            winner: None,
        }
    }
}

/// Whole persisted scoreboard state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScoreboardDocument {
    /// Names shown for the two teams.
    pub team_names: TeamNames,
    /// Score per team, keyed by the team names in use when the document was created.
    #[schema(value_type = std::collections::HashMap<String, u32>)]
    pub teams: IndexMap<String, u32>,
    /// Games in display order; their position is the index used by updates.
    pub games: Vec<Game>,
}

/// Outcome of a successful [`ScoreboardDocument::record_winner`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinnerChange {
    /// Winner recorded before the call, if any.
    pub previous: Option<String>,
    /// Points carried by the game.
    pub points: u32,
}

impl WinnerChange {
    /// True when scores moved, false for a repeated assignment.
    pub fn moved_points(&self, winner: &str) -> bool {
        self.previous.as_deref() != Some(winner)
    }
}

impl ScoreboardDocument {
    /// Document written on first start: default teams at zero and the fixed game list.
    pub fn seed() -> Self {
        Self {
            games: SEED_GAME_TITLES
                .iter()
                .map(|title| Game::new(*title, SEED_GAME_POINTS))
                .collect(),
            ..Self::fallback()
        }
    }

    /// Document served when the persisted one cannot be parsed.
    pub fn fallback() -> Self {
        let mut teams = IndexMap::new();
        teams.insert(DEFAULT_TEAM_A.to_string(), 0);
        teams.insert(DEFAULT_TEAM_B.to_string(), 0);
        Self {
            team_names: TeamNames::default(),
            teams,
            games: Vec::new(),
        }
    }

    /// Assign `winner` to the game at `index`, moving the game's points between teams.
    ///
    /// The previous winner (if different) loses the points and the new winner gains them;
    /// assigning the current winner again leaves every score untouched.
    pub fn record_winner(&mut self, index: usize, winner: &str) -> Result<WinnerChange, ScoreError> {
        let game = self.games.get_mut(index).ok_or(ScoreError::InvalidIndex)?;
        if !self.teams.contains_key(winner) {
            return Err(ScoreError::InvalidWinner);
        }

        let previous = game.winner.take();
        if let Some(prev) = previous.as_deref().filter(|prev| *prev != winner) {
            // Orphaned keys (document edited by hand) have nothing to subtract from.
            if let Some(score) = self.teams.get_mut(prev) {
                *score = score.saturating_sub(game.points);
            }
        }
        if previous.as_deref() != Some(winner) {
            if let Some(score) = self.teams.get_mut(winner) {
                *score = score.saturating_add(game.points);
            }
        }
        game.winner = Some(winner.to_string());

        Ok(WinnerChange {
            previous,
            points: game.points,
        })
    }

    /// Replace the displayed team names.
    ///
    /// Score keys and recorded winners keep referring to the old names.
    pub fn rename_teams(&mut self, team_a: String, team_b: String) {
        self.team_names = TeamNames { team_a, team_b };
    }

    /// Zero every team score and clear every recorded winner.
    pub fn reset_scores(&mut self) {
        self.teams.values_mut().for_each(|score| *score = 0);
        self.games.iter_mut().for_each(|game| game.winner = None);
    }
}

/// Interpret a client supplied game index.
///
/// JSON numbers and strings holding a number are read the same way: the value must be a
/// non-negative whole number (`4`, `4.0` and `"4.0"` all mean game 4). Anything else,
/// including negative or fractional numbers, yields `None`.
pub fn parse_game_index(value: &Value) -> Option<usize> {
    match value {
        Value::Number(number) => number
            .as_u64()
            .and_then(|index| usize::try_from(index).ok())
            .or_else(|| number.as_f64().and_then(whole_index)),
        Value::String(text) => text.trim().parse::<f64>().ok().and_then(whole_index),
        _ => None,
    }
}

fn whole_index(value: f64) -> Option<usize> {
    (value >= 0.0 && value.fract() == 0.0 && value <= u32::MAX as f64).then(|| value as usize)
}
