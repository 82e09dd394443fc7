//! Conflict detectors.
//!
//! Five independent checks over an immutable schedule snapshot: venue
//! double-booking, team double-booking, travel feasibility, resource
//! booking, and rest periods. Every detector takes `(events, context)`,
//! returns typed [`Conflict`](crate::models::Conflict)s, and degrades
//! gracefully — missing venue coordinates or registry entries are skipped
//! with a log line, never an error. Detection never mutates the schedule.
//!
//! All detectors walk the events stably sorted by `(date, start_time)`
//! with the shared default rules (midnight start, 3-hour duration), so
//! the same intervals are judged identically everywhere.

mod resource;
mod rest;
mod team;
mod travel;
mod venue;

pub use resource::detect_resource_conflicts;
pub use rest::detect_rest_conflicts;
pub use team::detect_team_conflicts;
pub use travel::detect_travel_conflicts;
pub use venue::detect_venue_conflicts;

use std::collections::BTreeMap;

use crate::models::{Conflict, ResourceRegistry, ScheduleEvent, SportConstraints, VenueRegistry};

/// Caller-supplied context shared by all detectors.
#[derive(Debug, Clone, Default)]
pub struct DetectionContext {
    /// Venue registry (coordinates drive travel and distance checks).
    pub venues: VenueRegistry,
    /// Resource registry. `None` disables resource detection entirely.
    pub resources: Option<ResourceRegistry>,
    /// Operational thresholds.
    pub constraints: SportConstraints,
}

impl DetectionContext {
    /// Creates a context with an empty venue registry, no resource
    /// registry, and default constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the venue registry.
    pub fn with_venues(mut self, venues: VenueRegistry) -> Self {
        self.venues = venues;
        self
    }

    /// Sets the resource registry (enables resource detection).
    pub fn with_resources(mut self, resources: ResourceRegistry) -> Self {
        self.resources = Some(resources);
        self
    }

    /// Sets the constraints.
    pub fn with_constraints(mut self, constraints: SportConstraints) -> Self {
        self.constraints = constraints;
        self
    }
}

/// Runs all five detectors over the schedule and merges their results.
///
/// The merged order (venue, team, travel, resource, rest) is not
/// contractually meaningful; the orchestrator re-sorts by priority
/// before resolution.
pub fn run_all(events: &[ScheduleEvent], ctx: &DetectionContext) -> Vec<Conflict> {
    let mut conflicts = detect_venue_conflicts(events, ctx);
    conflicts.extend(detect_team_conflicts(events, ctx));
    conflicts.extend(detect_travel_conflicts(events, ctx));
    conflicts.extend(detect_resource_conflicts(events, ctx));
    conflicts.extend(detect_rest_conflicts(events, ctx));
    tracing::debug!(
        events = events.len(),
        conflicts = conflicts.len(),
        "detection pass complete"
    );
    conflicts
}

/// Event indices stably sorted by `(date, start_time)`.
pub(crate) fn chronological(events: &[ScheduleEvent]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..events.len()).collect();
    indices.sort_by_key(|&i| (events[i].date, events[i].start_time_or_default()));
    indices
}

/// Per-team chronological event indices.
///
/// A `BTreeMap` keeps team iteration deterministic, so repeated runs on
/// the same schedule produce structurally identical conflict lists.
pub(crate) fn team_histories<'a>(
    events: &'a [ScheduleEvent],
    order: &[usize],
) -> BTreeMap<&'a str, Vec<usize>> {
    let mut histories: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for &i in order {
        histories
            .entry(events[i].home_team.as_str())
            .or_default()
            .push(i);
        histories
            .entry(events[i].away_team.as_str())
            .or_default()
            .push(i);
    }
    histories
}
