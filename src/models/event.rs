//! Scheduled event (game) model.
//!
//! An event is one game between two teams at a venue on a calendar date.
//! Start time and duration are optional on input; the accessors here apply
//! the documented defaults (midnight, 3 hours) so that every detector and
//! every resolution strategy judges intervals identically.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Default game duration when none is supplied (hours).
pub const DEFAULT_DURATION_HOURS: f64 = 3.0;

/// A scheduled game.
///
/// The engine treats input events as values: it deep-copies the schedule
/// before any repair and never mutates the caller's original list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEvent {
    /// Stable event identifier.
    pub id: String,
    /// Calendar date of the game.
    pub date: NaiveDate,
    /// Local start time. `None` = midnight.
    pub start_time: Option<NaiveTime>,
    /// Game duration in hours. `None` = 3.0. Must be positive.
    pub duration_hours: Option<f64>,
    /// Home team identifier.
    pub home_team: String,
    /// Away team identifier.
    pub away_team: String,
    /// Venue identifier.
    pub venue: String,
    /// Resources the game requires (equipment, crews, broadcast slots).
    #[serde(default)]
    pub required_resources: Vec<String>,
}

impl ScheduleEvent {
    /// Creates an event with default start time and duration.
    pub fn new(
        id: impl Into<String>,
        date: NaiveDate,
        home_team: impl Into<String>,
        away_team: impl Into<String>,
        venue: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            date,
            start_time: None,
            duration_hours: None,
            home_team: home_team.into(),
            away_team: away_team.into(),
            venue: venue.into(),
            required_resources: Vec::new(),
        }
    }

    /// Sets the start time.
    pub fn with_start_time(mut self, time: NaiveTime) -> Self {
        self.start_time = Some(time);
        self
    }

    /// Sets the duration in hours.
    pub fn with_duration_hours(mut self, hours: f64) -> Self {
        self.duration_hours = Some(hours);
        self
    }

    /// Adds a required resource.
    pub fn with_resource(mut self, resource_id: impl Into<String>) -> Self {
        self.required_resources.push(resource_id.into());
        self
    }

    /// Start time with the midnight default applied.
    #[inline]
    pub fn start_time_or_default(&self) -> NaiveTime {
        self.start_time.unwrap_or(NaiveTime::MIN)
    }

    /// Duration with the 3-hour default applied.
    #[inline]
    pub fn duration_or_default(&self) -> f64 {
        self.duration_hours.unwrap_or(DEFAULT_DURATION_HOURS)
    }

    /// Start instant (date + start time).
    pub fn start_dt(&self) -> NaiveDateTime {
        self.date.and_time(self.start_time_or_default())
    }

    /// End instant (start + duration). The interval is half-open: the
    /// game occupies `[start_dt, end_dt)`.
    pub fn end_dt(&self) -> NaiveDateTime {
        self.start_dt() + Duration::seconds((self.duration_or_default() * 3600.0).round() as i64)
    }

    /// Whether the given team plays in this event.
    pub fn involves_team(&self, team: &str) -> bool {
        self.home_team == team || self.away_team == team
    }

    /// Composite-key match: date + start time + both teams.
    ///
    /// Used to re-locate an event in a mutated schedule when its id is
    /// no longer present.
    pub fn matches_composite(&self, other: &ScheduleEvent) -> bool {
        self.date == other.date
            && self.start_time_or_default() == other.start_time_or_default()
            && self.home_team == other.home_team
            && self.away_team == other.away_team
    }
}

/// Hours elapsed from `from` to `to` (negative if `to` precedes `from`).
pub fn hours_between(from: NaiveDateTime, to: NaiveDateTime) -> f64 {
    (to - from).num_seconds() as f64 / 3600.0
}
