//! Input validation for proposed schedules.
//!
//! Checks structural integrity of a schedule before detection runs:
//! duplicate ids, non-positive durations, missing or self-paired teams,
//! and missing venues. All issues are reported at once.

use crate::models::ScheduleEvent;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two events share the same id.
    DuplicateId,
    /// An event's duration is zero or negative.
    NonPositiveDuration,
    /// Home or away team is empty.
    MissingTeam,
    /// An event pairs a team against itself.
    SameTeamBothSides,
    /// Venue identifier is empty.
    MissingVenue,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a proposed schedule.
///
/// Checks:
/// 1. No duplicate event ids
/// 2. Every explicit duration is positive
/// 3. Both teams present and distinct
/// 4. Venue present
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_schedule(events: &[ScheduleEvent]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for event in events {
        if !ids.insert(event.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate event id: {}", event.id),
            ));
        }

        if let Some(d) = event.duration_hours {
            if d <= 0.0 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::NonPositiveDuration,
                    format!("Event '{}' has non-positive duration {d}", event.id),
                ));
            }
        }

        if event.home_team.is_empty() || event.away_team.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingTeam,
                format!("Event '{}' is missing a team", event.id),
            ));
        } else if event.home_team == event.away_team {
            errors.push(ValidationError::new(
                ValidationErrorKind::SameTeamBothSides,
                format!(
                    "Event '{}' pairs team '{}' against itself",
                    event.id, event.home_team
                ),
            ));
        }

        if event.venue.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingVenue,
                format!("Event '{}' has no venue", event.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn event(id: &str) -> ScheduleEvent {
        ScheduleEvent::new(
            id,
            NaiveDate::from_ymd_opt(2024, 9, 14).unwrap(),
            "UT",
            "OU",
            "stadium-a",
        )
    }

    #[test]
    fn test_valid_schedule() {
        let events = vec![event("g1"), event("g2")];
        assert!(validate_schedule(&events).is_ok());
    }

    #[test]
    fn test_duplicate_id() {
        let events = vec![event("g1"), event("g1")];
        let errors = validate_schedule(&events).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_non_positive_duration() {
        let mut e = event("g1");
        e.duration_hours = Some(0.0);
        let errors = validate_schedule(&[e]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NonPositiveDuration));
    }

    #[test]
    fn test_missing_team() {
        let mut e = event("g1");
        e.away_team = String::new();
        let errors = validate_schedule(&[e]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::MissingTeam));
    }

    #[test]
    fn test_same_team_both_sides() {
        let mut e = event("g1");
        e.away_team = "UT".into();
        let errors = validate_schedule(&[e]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::SameTeamBothSides));
    }

    #[test]
    fn test_missing_venue() {
        let mut e = event("g1");
        e.venue = String::new();
        let errors = validate_schedule(&[e]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::MissingVenue));
    }

    #[test]
    fn test_multiple_errors() {
        let mut bad = event("g1");
        bad.duration_hours = Some(-1.0);
        bad.venue = String::new();
        let errors = validate_schedule(&[event("g1"), bad]).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
