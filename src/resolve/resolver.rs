//! Strategy-chain resolver.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use super::strategies::{AlternateVenue, DateShift, DateTimeShift, TeamSwap, TimeShift};
use super::{locate_event, ResolutionContext, ResolutionStrategy};
use crate::models::{Conflict, ConflictSubtype, ConflictType, Resolution, ScheduleEvent};

/// Outcome of a resolution pass.
#[derive(Debug)]
pub struct ResolutionOutcome {
    /// Audit records for every applied mutation, in application order.
    pub resolutions: Vec<Resolution>,
    /// The repaired schedule. The caller's original is never touched.
    pub modified_schedule: Vec<ScheduleEvent>,
    /// Conflicts no strategy could repair, in input order. Resource
    /// conflicts always land here: they need registry changes, not
    /// schedule edits.
    pub unresolved: Vec<Conflict>,
}

/// Applies per-type strategy chains to a conflict list.
///
/// Conflicts are processed grouped by type (venue, team, travel, rest;
/// resource conflicts have no chain) and each conflict runs its chain
/// until a strategy succeeds. The working schedule threads through every
/// attempt, so later conflicts see earlier repairs.
#[derive(Debug, Default)]
pub struct ConflictResolver {
    overrides: HashMap<ConflictType, Vec<Arc<dyn ResolutionStrategy>>>,
}

impl ConflictResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the default chain for one conflict type.
    pub fn with_chain(
        mut self,
        conflict_type: ConflictType,
        chain: Vec<Arc<dyn ResolutionStrategy>>,
    ) -> Self {
        self.overrides.insert(conflict_type, chain);
        self
    }

    /// The strategy chain for a conflict, override first, otherwise the
    /// built-in defaults.
    fn chain_for(
        &self,
        conflict: &Conflict,
        ctx: &ResolutionContext,
    ) -> Vec<Arc<dyn ResolutionStrategy>> {
        if let Some(chain) = self.overrides.get(&conflict.conflict_type) {
            return chain.clone();
        }

        match conflict.conflict_type {
            ConflictType::Venue => vec![
                Arc::new(AlternateVenue::new()) as Arc<dyn ResolutionStrategy>,
                Arc::new(TimeShift::new(3.0)),
                Arc::new(DateShift::new(1)),
            ],
            ConflictType::Team => {
                let mut chain: Vec<Arc<dyn ResolutionStrategy>> =
                    vec![Arc::new(DateShift::new(1))];
                // A rest-subtype gap reappears one day later shifted by
                // hours; only a plain double-booking benefits from a
                // same-day time shift.
                if conflict.subtype != Some(ConflictSubtype::Rest) {
                    chain.push(Arc::new(TimeShift::new(4.0)));
                }
                if !ctx.eligible_teams.is_empty() {
                    chain.push(Arc::new(TeamSwap::new()));
                }
                chain
            }
            ConflictType::Travel => vec![
                Arc::new(DateTimeShift::new()) as Arc<dyn ResolutionStrategy>,
                Arc::new(AlternateVenue::closer_first()),
            ],
            ConflictType::Rest => {
                let mut chain: Vec<Arc<dyn ResolutionStrategy>> =
                    vec![Arc::new(DateTimeShift::new())];
                if !ctx.eligible_teams.is_empty() {
                    chain.push(Arc::new(TeamSwap::new()));
                }
                chain
            }
            ConflictType::Resource => Vec::new(),
        }
    }

    /// Resolves as many conflicts as the chains allow.
    ///
    /// The original schedule is deep-copied once up front; all mutations
    /// happen on the copy. A conflict whose snapshotted event can no
    /// longer be located (dropped by the caller between detection and
    /// resolution) is skipped with a warning and reported unresolved.
    pub fn resolve(
        &self,
        conflicts: &[Conflict],
        original: &[ScheduleEvent],
        ctx: &ResolutionContext,
    ) -> ResolutionOutcome {
        let mut working = original.to_vec();
        let mut resolutions = Vec::new();
        let mut resolved_ids: HashSet<&str> = HashSet::new();

        for ty in ConflictType::all() {
            for conflict in conflicts.iter().filter(|c| c.conflict_type == ty) {
                let located = !conflict.events.is_empty()
                    && conflict
                        .events
                        .iter()
                        .all(|snap| locate_event(&working, snap).is_some());
                if !located {
                    tracing::warn!(
                        conflict = %conflict.id,
                        "conflict event not in schedule; skipping"
                    );
                    continue;
                }

                for strategy in self.chain_for(conflict, ctx) {
                    let attempt = strategy.apply(std::mem::take(&mut working), conflict, ctx);
                    working = attempt.schedule;
                    if let Some(resolution) = attempt.resolution {
                        tracing::debug!(
                            conflict = %conflict.id,
                            strategy = strategy.name(),
                            "conflict resolved"
                        );
                        resolutions.push(resolution);
                        resolved_ids.insert(conflict.id.as_str());
                        break;
                    }
                }
            }
        }

        let unresolved = conflicts
            .iter()
            .filter(|c| !resolved_ids.contains(c.id.as_str()))
            .cloned()
            .collect();

        ResolutionOutcome {
            resolutions,
            modified_schedule: working,
            unresolved,
        }
    }
}
