//! Run summaries.
//!
//! Compact aggregates of detection and resolution runs. These are what
//! the engine stores in memory and what the learning routine later
//! consumes, so their shape is the crate's persistence contract.
//! `BTreeMap` keys keep serialized output stable.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{Conflict, Resolution};
use crate::resolve::ResolutionOutcome;

/// Aggregate of one detection run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionSummary {
    /// Sport or league label supplied by the caller.
    pub sport: String,
    /// Events examined.
    pub event_count: usize,
    /// Conflicts found.
    pub conflict_count: usize,
    /// Conflict counts keyed by type label.
    pub by_type: BTreeMap<String, usize>,
    /// Conflict counts keyed by severity label.
    pub by_severity: BTreeMap<String, usize>,
}

impl DetectionSummary {
    pub fn from_conflicts(sport: &str, event_count: usize, conflicts: &[Conflict]) -> Self {
        let mut by_type: BTreeMap<String, usize> = BTreeMap::new();
        let mut by_severity: BTreeMap<String, usize> = BTreeMap::new();
        for c in conflicts {
            *by_type.entry(c.conflict_type.label().to_string()).or_default() += 1;
            *by_severity.entry(c.severity.label().to_string()).or_default() += 1;
        }
        Self {
            sport: sport.to_string(),
            event_count,
            conflict_count: conflicts.len(),
            by_type,
            by_severity,
        }
    }
}

/// Aggregate of one resolution run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolutionSummary {
    /// Conflicts handed to the resolver.
    pub conflict_count: usize,
    /// Conflicts a strategy repaired.
    pub resolved_count: usize,
    /// Conflicts left unresolved.
    pub unresolved_count: usize,
    /// Resolved counts keyed by conflict type label.
    pub resolved_by_type: BTreeMap<String, usize>,
    /// Resolved counts keyed by strategy label.
    pub by_strategy: BTreeMap<String, usize>,
    /// `resolved / total`, 0.0 for an empty run.
    pub effectiveness: f64,
}

impl ResolutionSummary {
    pub fn from_outcome(conflict_count: usize, outcome: &ResolutionOutcome) -> Self {
        Self::from_parts(conflict_count, &outcome.resolutions, outcome.unresolved.len())
    }

    fn from_parts(conflict_count: usize, resolutions: &[Resolution], unresolved: usize) -> Self {
        let mut resolved_by_type: BTreeMap<String, usize> = BTreeMap::new();
        let mut by_strategy: BTreeMap<String, usize> = BTreeMap::new();
        for r in resolutions {
            *resolved_by_type
                .entry(r.conflict_type.label().to_string())
                .or_default() += 1;
            *by_strategy
                .entry(r.resolution_type.label().to_string())
                .or_default() += 1;
        }
        let effectiveness = if conflict_count == 0 {
            0.0
        } else {
            resolutions.len() as f64 / conflict_count as f64
        };
        Self {
            conflict_count,
            resolved_count: resolutions.len(),
            unresolved_count: unresolved,
            resolved_by_type,
            by_strategy,
            effectiveness,
        }
    }
}
