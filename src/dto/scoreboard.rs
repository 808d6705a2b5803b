//! Request and response bodies of the `/api` scoreboard routes.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::dto::validation::validate_team_name;

/// Payload assigning a winner to one game.
///
/// A request without a JSON body is treated as the default (empty) payload.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWinnerRequest {
    /// Position of the game in the `games` list, as a number or a numeric string.
    #[serde(default)]
    #[schema(value_type = u32)]
    pub game_index: Value,
    /// Team key credited with the game.
    #[serde(default)]
    #[schema(value_type = String)]
    pub winner: Value,
}

/// Payload replacing both displayed team names.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeamNamesRequest {
    /// New display name of the first team.
    #[serde(default)]
    pub team_a_name: Option<String>,
    /// New display name of the second team.
    #[serde(default)]
    pub team_b_name: Option<String>,
}

impl UpdateTeamNamesRequest {
    /// Both names with surrounding whitespace removed.
    ///
    /// Meant to be called after [`Validate::validate`] succeeded; a missing name would
    /// come back empty.
    pub fn trimmed(&self) -> (String, String) {
        let trim = |name: &Option<String>| name.as_deref().unwrap_or_default().trim().to_string();
        (trim(&self.team_a_name), trim(&self.team_b_name))
    }
}

impl Validate for UpdateTeamNamesRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        for (field, value) in [
            ("team_a_name", &self.team_a_name),
            ("team_b_name", &self.team_b_name),
        ] {
            match value {
                Some(name) => {
                    if let Err(e) = validate_team_name(name) {
                        errors.add(field, e);
                    }
                }
                None => errors.add(field, ValidationError::new("required")),
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Generic acknowledgement returned by mutating endpoints.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    /// Human readable outcome.
    pub message: String,
}

impl MessageResponse {
    /// Wrap an acknowledgement message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error payload returned with 4xx and 5xx statuses.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// What went wrong, phrased for the client.
    pub message: String,
    /// Underlying failure, only present on server errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
