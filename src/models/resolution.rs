//! Resolution audit records.
//!
//! A resolution documents exactly one schedule mutation applied to address
//! one conflict. Records are append-only; the resolver never applies two
//! resolutions to the same event without the caller re-running detection
//! in between.

use serde::{Deserialize, Serialize};

use super::{Conflict, ConflictType, ScheduleEvent};

/// Kind of schedule mutation a strategy applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionType {
    VenueChange,
    TimeShift,
    DateShift,
    DateTimeShift,
    TeamSwap,
}

impl ResolutionType {
    /// Stable lowercase label for summary keys.
    pub fn label(&self) -> &'static str {
        match self {
            ResolutionType::VenueChange => "venue_change",
            ResolutionType::TimeShift => "time_shift",
            ResolutionType::DateShift => "date_shift",
            ResolutionType::DateTimeShift => "date_time_shift",
            ResolutionType::TeamSwap => "team_swap",
        }
    }
}

/// Event field touched by a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventField {
    Venue,
    StartTime,
    Date,
    StartDateTime,
    HomeTeam,
    AwayTeam,
}

/// Before/after delta of a single field mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldChange {
    pub field: EventField,
    pub from: String,
    pub to: String,
}

impl FieldChange {
    pub fn new(field: EventField, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            field,
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Audit record of one applied schedule mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resolution {
    /// Back-reference to the resolved conflict.
    pub conflict_id: String,
    /// Type of the resolved conflict.
    pub conflict_type: ConflictType,
    /// Kind of mutation applied.
    pub resolution_type: ResolutionType,
    /// Snapshot of the event before the change.
    pub event: ScheduleEvent,
    /// What changed.
    pub change: FieldChange,
    /// Human-readable description.
    pub description: String,
}

impl Resolution {
    /// Creates a resolution record for a conflict.
    pub fn new(
        conflict: &Conflict,
        resolution_type: ResolutionType,
        before: &ScheduleEvent,
        change: FieldChange,
        description: impl Into<String>,
    ) -> Self {
        Self {
            conflict_id: conflict.id.clone(),
            conflict_type: conflict.conflict_type,
            resolution_type,
            event: before.clone(),
            change,
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_resolution_references_conflict() {
        let event = ScheduleEvent::new(
            "g1",
            NaiveDate::from_ymd_opt(2024, 9, 14).unwrap(),
            "UT",
            "OU",
            "stadium-a",
        );
        let conflict = Conflict::venue_overlap("venue-1".into(), &event, &event);
        let r = Resolution::new(
            &conflict,
            ResolutionType::VenueChange,
            &event,
            FieldChange::new(EventField::Venue, "stadium-a", "stadium-b"),
            "Moved game 'g1' to 'stadium-b'",
        );
        assert_eq!(r.conflict_id, "venue-1");
        assert_eq!(r.conflict_type, ConflictType::Venue);
        assert_eq!(r.change.from, "stadium-a");
        assert_eq!(r.change.to, "stadium-b");
        // The snapshot is the pre-change event.
        assert_eq!(r.event.venue, "stadium-a");
    }
}
