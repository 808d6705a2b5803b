//! Validation helpers for DTOs.

use validator::ValidationError;

/// Validates that a team name still has content once surrounding whitespace is removed.
///
/// # Examples
///
/// ```ignore
/// validate_team_name("Red Dragons") // Ok
/// validate_team_name("  Red  ")     // Ok
/// validate_team_name("   ")         // Err - blank
/// ```
pub fn validate_team_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        let mut err = ValidationError::new("team_name_blank");
        err.message = Some("Team name must not be blank".into());
        return Err(err);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_team_name_valid() {
        assert!(validate_team_name("Team A").is_ok());
        assert!(validate_team_name("  padded  ").is_ok());
        assert!(validate_team_name("x").is_ok());
    }

    #[test]
    fn test_validate_team_name_blank() {
        assert!(validate_team_name("").is_err());
        assert!(validate_team_name("   ").is_err());
        assert!(validate_team_name("\t\n").is_err());
    }
}
