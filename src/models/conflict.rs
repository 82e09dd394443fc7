//! Conflict model.
//!
//! A conflict is a detected violation of a scheduling rule. Conflicts are
//! produced only by the detectors, carry denormalized snapshots of the
//! 1–2 events involved (taken at detection time), and are immutable once
//! created.

use serde::{Deserialize, Serialize};

use super::ScheduleEvent;

/// Classification of scheduling conflicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictType {
    /// Two games overlap at the same venue.
    Venue,
    /// One team has two games too close together.
    Team,
    /// Not enough time to travel between venues.
    Travel,
    /// A required resource is missing or overbooked.
    Resource,
    /// Insufficient rest after the previous game.
    Rest,
}

impl ConflictType {
    /// Stable lowercase label, used for conflict ids and summary keys.
    pub fn label(&self) -> &'static str {
        match self {
            ConflictType::Venue => "venue",
            ConflictType::Team => "team",
            ConflictType::Travel => "travel",
            ConflictType::Resource => "resource",
            ConflictType::Rest => "rest",
        }
    }

    /// All conflict types, in resolver processing order (resource last,
    /// since no resolution strategy exists for it).
    pub fn all() -> [ConflictType; 5] {
        [
            ConflictType::Venue,
            ConflictType::Team,
            ConflictType::Travel,
            ConflictType::Rest,
            ConflictType::Resource,
        ]
    }
}

/// Optional refinement of a conflict type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictSubtype {
    /// Team conflict caused by short rest between games (not same-day).
    Rest,
    /// Rest conflict where the preceding trip exceeded the long-travel
    /// distance threshold.
    LongTravel,
    /// A required resource is absent from the registry.
    MissingResource,
    /// Concurrent bookings exceed the resource quantity.
    OverbookedResource,
}

/// Conflict severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// Stable lowercase label for summary keys.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

/// A detected scheduling rule violation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conflict {
    /// Locally unique id within a detection run (e.g. `venue-1`).
    pub id: String,
    /// Conflict classification.
    pub conflict_type: ConflictType,
    /// Optional refinement.
    pub subtype: Option<ConflictSubtype>,
    /// Severity.
    pub severity: Severity,
    /// Snapshot of the 1–2 events involved, taken at detection time.
    pub events: Vec<ScheduleEvent>,
    /// Team involved (team, travel, and rest conflicts).
    pub team: Option<String>,
    /// Venue involved (venue and travel conflicts).
    pub venue: Option<String>,
    /// Resource involved (resource conflicts).
    pub resource: Option<String>,
    /// Hours actually available between the two games.
    pub hours_between: Option<f64>,
    /// Hours of rest the constraints require.
    pub required_rest: Option<f64>,
    /// Hours available for travel (travel conflicts).
    pub hours_available: Option<f64>,
    /// Hours required for travel (travel conflicts).
    pub hours_required: Option<f64>,
    /// Human-readable description.
    pub description: String,
}

impl Conflict {
    /// Two games overlap at one venue.
    pub fn venue_overlap(id: String, first: &ScheduleEvent, second: &ScheduleEvent) -> Self {
        Self {
            description: format!(
                "Games '{}' and '{}' overlap at venue '{}'",
                first.id, second.id, first.venue
            ),
            id,
            conflict_type: ConflictType::Venue,
            subtype: None,
            severity: Severity::High,
            events: vec![first.clone(), second.clone()],
            team: None,
            venue: Some(first.venue.clone()),
            resource: None,
            hours_between: None,
            required_rest: None,
            hours_available: None,
            hours_required: None,
        }
    }

    /// One team plays twice on the same day.
    pub fn team_same_day(
        id: String,
        team: &str,
        first: &ScheduleEvent,
        second: &ScheduleEvent,
        hours_between: f64,
    ) -> Self {
        Self {
            description: format!(
                "Team '{team}' has two games on {} ('{}' and '{}')",
                second.date, first.id, second.id
            ),
            id,
            conflict_type: ConflictType::Team,
            subtype: None,
            severity: Severity::High,
            events: vec![first.clone(), second.clone()],
            team: Some(team.to_string()),
            venue: None,
            resource: None,
            hours_between: Some(hours_between),
            required_rest: None,
            hours_available: None,
            hours_required: None,
        }
    }

    /// One team's games start too close together.
    pub fn team_short_gap(
        id: String,
        team: &str,
        first: &ScheduleEvent,
        second: &ScheduleEvent,
        hours_between: f64,
        required: f64,
    ) -> Self {
        Self {
            description: format!(
                "Team '{team}' has only {hours_between:.1}h between games \
                 '{}' and '{}' ({required:.0}h required)",
                first.id, second.id
            ),
            id,
            conflict_type: ConflictType::Team,
            subtype: Some(ConflictSubtype::Rest),
            severity: Severity::Medium,
            events: vec![first.clone(), second.clone()],
            team: Some(team.to_string()),
            venue: None,
            resource: None,
            hours_between: Some(hours_between),
            required_rest: Some(required),
            hours_available: None,
            hours_required: None,
        }
    }

    /// Not enough time to travel between consecutive games.
    pub fn travel(
        id: String,
        team: &str,
        first: &ScheduleEvent,
        second: &ScheduleEvent,
        available: f64,
        required: f64,
    ) -> Self {
        Self {
            description: format!(
                "Team '{team}' has {available:.1}h to travel from '{}' to '{}' \
                 but needs {required:.1}h",
                first.venue, second.venue
            ),
            id,
            conflict_type: ConflictType::Travel,
            subtype: None,
            severity: Severity::High,
            events: vec![first.clone(), second.clone()],
            team: Some(team.to_string()),
            venue: Some(second.venue.clone()),
            resource: None,
            hours_between: None,
            required_rest: None,
            hours_available: Some(available),
            hours_required: Some(required),
        }
    }

    /// A required resource is absent from the registry.
    pub fn missing_resource(id: String, resource: &str, event: &ScheduleEvent) -> Self {
        Self {
            description: format!(
                "Game '{}' requires unknown resource '{resource}'",
                event.id
            ),
            id,
            conflict_type: ConflictType::Resource,
            subtype: Some(ConflictSubtype::MissingResource),
            severity: Severity::High,
            events: vec![event.clone()],
            team: None,
            venue: None,
            resource: Some(resource.to_string()),
            hours_between: None,
            required_rest: None,
            hours_available: None,
            hours_required: None,
        }
    }

    /// Concurrent bookings exceed a resource's quantity.
    pub fn overbooked_resource(
        id: String,
        resource: &str,
        event: &ScheduleEvent,
        earliest_overlap: &ScheduleEvent,
        all_overlapping_ids: &[String],
    ) -> Self {
        Self {
            description: format!(
                "Resource '{resource}' overbooked for game '{}' (also booked by: {})",
                event.id,
                all_overlapping_ids.join(", ")
            ),
            id,
            conflict_type: ConflictType::Resource,
            subtype: Some(ConflictSubtype::OverbookedResource),
            severity: Severity::Medium,
            events: vec![earliest_overlap.clone(), event.clone()],
            team: None,
            venue: None,
            resource: Some(resource.to_string()),
            hours_between: None,
            required_rest: None,
            hours_available: None,
            hours_required: None,
        }
    }

    /// Insufficient rest after the previous game.
    pub fn short_rest(
        id: String,
        team: &str,
        first: &ScheduleEvent,
        second: &ScheduleEvent,
        rest_hours: f64,
        required: f64,
        long_travel: bool,
    ) -> Self {
        Self {
            description: format!(
                "Team '{team}' gets {rest_hours:.1}h rest before game '{}' \
                 ({required:.0}h required{})",
                second.id,
                if long_travel { ", long travel" } else { "" }
            ),
            id,
            conflict_type: ConflictType::Rest,
            subtype: long_travel.then_some(ConflictSubtype::LongTravel),
            severity: if long_travel {
                Severity::High
            } else {
                Severity::Medium
            },
            events: vec![first.clone(), second.clone()],
            team: Some(team.to_string()),
            venue: None,
            resource: None,
            hours_between: Some(rest_hours),
            required_rest: Some(required),
            hours_available: None,
            hours_required: None,
        }
    }

    /// Shift amount (whole hours, rounded up) that would close this
    /// conflict's deficit: `ceil(required − available)`.
    ///
    /// Travel conflicts derive it from the travel hour fields, rest and
    /// team conflicts from the rest hour fields. Returns `None` when the
    /// conflict carries no deficit (e.g. venue conflicts).
    pub fn deficit_hours(&self) -> Option<f64> {
        let (required, available) = match (self.hours_required, self.hours_available) {
            (Some(req), Some(avail)) => (req, avail),
            _ => (self.required_rest?, self.hours_between?),
        };
        let deficit = (required - available).ceil();
        (deficit > 0.0).then_some(deficit)
    }
}
