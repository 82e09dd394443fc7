//! Conflict resolution.
//!
//! Each conflict type has an ordered chain of [`ResolutionStrategy`]
//! implementations; the resolver tries them in order and keeps the first
//! success. Strategies take the working schedule by value and return it
//! (mutated or not) alongside an optional audit record, so a failed
//! attempt can never leave a half-applied edit behind.

mod resolver;
mod strategies;

pub use resolver::{ConflictResolver, ResolutionOutcome};
pub use strategies::{AlternateVenue, DateShift, DateTimeShift, TeamSwap, TimeShift};

use std::fmt::Debug;
use std::sync::Arc;
use std::time::Duration;

use crate::advisor::SwapAdvisor;
use crate::models::{Conflict, Resolution, ResolutionType, ScheduleEvent, SportConstraints, VenueRegistry};

/// Default time allotted to an advisor consultation.
pub const DEFAULT_ADVISOR_TIMEOUT: Duration = Duration::from_secs(5);

/// Caller-supplied context shared by all resolution strategies.
#[derive(Debug, Clone, Default)]
pub struct ResolutionContext {
    /// Venue registry; alternate-venue candidates come from here.
    pub venues: VenueRegistry,
    /// Operational thresholds (shift validation).
    pub constraints: SportConstraints,
    /// Teams eligible as swap replacements. Empty disables team swaps.
    pub eligible_teams: Vec<String>,
    /// Optional external advisor for multi-candidate swaps.
    pub advisor: Option<Arc<dyn SwapAdvisor>>,
    /// Time allotted per advisor consultation.
    pub advisor_timeout: Duration,
}

impl ResolutionContext {
    pub fn new() -> Self {
        Self {
            advisor_timeout: DEFAULT_ADVISOR_TIMEOUT,
            ..Self::default()
        }
    }

    pub fn with_venues(mut self, venues: VenueRegistry) -> Self {
        self.venues = venues;
        self
    }

    pub fn with_constraints(mut self, constraints: SportConstraints) -> Self {
        self.constraints = constraints;
        self
    }

    pub fn with_eligible_teams<I, S>(mut self, teams: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.eligible_teams = teams.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_advisor(mut self, advisor: Arc<dyn SwapAdvisor>) -> Self {
        self.advisor = Some(advisor);
        self
    }

    pub fn with_advisor_timeout(mut self, timeout: Duration) -> Self {
        self.advisor_timeout = timeout;
        self
    }
}

/// Result of one strategy application: the working schedule (always
/// handed back) plus an audit record when the strategy succeeded.
#[derive(Debug)]
pub struct StrategyAttempt {
    /// The working schedule, mutated on success, untouched otherwise.
    pub schedule: Vec<ScheduleEvent>,
    /// Audit record of the applied change, `None` if the strategy
    /// declined.
    pub resolution: Option<Resolution>,
}

impl StrategyAttempt {
    /// A declined attempt: the schedule passes through unchanged.
    pub fn unchanged(schedule: Vec<ScheduleEvent>) -> Self {
        Self {
            schedule,
            resolution: None,
        }
    }

    /// A successful attempt.
    pub fn applied(schedule: Vec<ScheduleEvent>, resolution: Resolution) -> Self {
        Self {
            schedule,
            resolution: Some(resolution),
        }
    }
}

/// One way of repairing a conflict.
///
/// Strategies either fully apply their mutation or decline; they never
/// return a partially edited schedule. Declining is a normal outcome
/// (no alternate venue free, no swap candidates) and moves the resolver
/// on to the next strategy in the chain.
pub trait ResolutionStrategy: Send + Sync + Debug {
    /// Strategy name, for logs and summaries.
    fn name(&self) -> &str;

    /// Kind of mutation this strategy applies.
    fn resolution_type(&self) -> ResolutionType;

    /// Human-readable description of what the strategy does.
    fn description(&self) -> String;

    /// Attempts to repair `conflict` in `schedule`.
    fn apply(
        &self,
        schedule: Vec<ScheduleEvent>,
        conflict: &Conflict,
        ctx: &ResolutionContext,
    ) -> StrategyAttempt;
}

/// Finds a conflict's event in the working schedule.
///
/// Tries the id first; if earlier repairs renamed or the caller reused
/// ids, falls back to the composite key (date, start time, both teams).
pub(crate) fn locate_event(schedule: &[ScheduleEvent], snapshot: &ScheduleEvent) -> Option<usize> {
    schedule
        .iter()
        .position(|e| e.id == snapshot.id)
        .or_else(|| schedule.iter().position(|e| e.matches_composite(snapshot)))
}
