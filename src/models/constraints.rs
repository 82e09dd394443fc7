//! Operational scheduling constraints.
//!
//! Thresholds the detectors check against. Defaults suit a typical
//! travel-heavy league; callers override per sport via the builder
//! methods — the engine ships no built-in per-sport presets.

use serde::{Deserialize, Serialize};

/// Rest, travel, and spacing thresholds (hours and miles).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SportConstraints {
    /// Minimum hours between one team's game starts.
    pub min_hours_between_games: f64,
    /// Hours a team needs on the ground after arriving before playing.
    pub min_hours_after_travel: f64,
    /// Safety margin added to every travel estimate.
    pub travel_buffer_hours: f64,
    /// Required rest after a home game.
    pub min_hours_after_home_game: f64,
    /// Required rest after an away game.
    pub min_hours_after_away_game: f64,
    /// Required rest after a long trip.
    pub min_hours_after_long_travel: f64,
    /// Trip distance above which the long-travel rest rule applies.
    pub long_travel_distance_miles: f64,
    /// Assumed travel speed for the great-circle estimate.
    pub travel_speed_mph: f64,
}

impl Default for SportConstraints {
    fn default() -> Self {
        Self {
            min_hours_between_games: 20.0,
            min_hours_after_travel: 3.0,
            travel_buffer_hours: 2.0,
            min_hours_after_home_game: 20.0,
            min_hours_after_away_game: 24.0,
            min_hours_after_long_travel: 36.0,
            long_travel_distance_miles: 300.0,
            travel_speed_mph: 60.0,
        }
    }
}

impl SportConstraints {
    /// Creates constraints with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the minimum hours between game starts.
    pub fn with_min_hours_between_games(mut self, hours: f64) -> Self {
        self.min_hours_between_games = hours;
        self
    }

    /// Overrides the post-travel settling time.
    pub fn with_min_hours_after_travel(mut self, hours: f64) -> Self {
        self.min_hours_after_travel = hours;
        self
    }

    /// Overrides the travel buffer.
    pub fn with_travel_buffer_hours(mut self, hours: f64) -> Self {
        self.travel_buffer_hours = hours;
        self
    }

    /// Overrides rest after a home game.
    pub fn with_min_hours_after_home_game(mut self, hours: f64) -> Self {
        self.min_hours_after_home_game = hours;
        self
    }

    /// Overrides rest after an away game.
    pub fn with_min_hours_after_away_game(mut self, hours: f64) -> Self {
        self.min_hours_after_away_game = hours;
        self
    }

    /// Overrides rest after a long trip.
    pub fn with_min_hours_after_long_travel(mut self, hours: f64) -> Self {
        self.min_hours_after_long_travel = hours;
        self
    }

    /// Overrides the long-travel distance threshold.
    pub fn with_long_travel_distance_miles(mut self, miles: f64) -> Self {
        self.long_travel_distance_miles = miles;
        self
    }

    /// Overrides the assumed travel speed.
    pub fn with_travel_speed_mph(mut self, mph: f64) -> Self {
        self.travel_speed_mph = mph;
        self
    }
}
