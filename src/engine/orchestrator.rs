//! Engine facade.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::priority::PriorityMatrix;
use super::summary::{DetectionSummary, ResolutionSummary};
use crate::detect::{run_all, DetectionContext};
use crate::explain::{Explainer, Explanation, RuleBasedExplainer};
use crate::memory::{InMemoryStore, MemoryQuery, MemoryStore};
use crate::models::{Conflict, ScheduleEvent};
use crate::resolve::{ConflictResolver, ResolutionContext, ResolutionOutcome};
use crate::validation::{validate_schedule, ValidationError};

/// Memory tag applied to every stored resolution summary.
const RESOLUTION_SUMMARY_TAG: &str = "resolution-summary";
/// How far back the learning routine looks.
const LEARNING_WINDOW: usize = 100;
/// Maximum weight nudge per learning pass.
const LEARNING_MAGNITUDE: f64 = 0.5;

/// Engine-level failure.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The schedule contained no events.
    #[error("schedule is empty")]
    EmptySchedule,
    /// The schedule failed structural validation.
    #[error("schedule failed validation ({} issues)", errors.len())]
    InvalidSchedule { errors: Vec<ValidationError> },
    /// An empty conflict list was handed to resolution.
    #[error("no conflicts to resolve")]
    NoConflicts,
}

/// Result of a detection run.
#[derive(Debug)]
pub struct DetectionReport {
    /// Detected conflicts, grouped by detector.
    pub conflicts: Vec<Conflict>,
    /// Aggregate counts.
    pub summary: DetectionSummary,
}

impl DetectionReport {
    /// Conflict indices grouped by type label, in detection order.
    pub fn by_type(&self) -> BTreeMap<&'static str, Vec<usize>> {
        let mut index: BTreeMap<&'static str, Vec<usize>> = BTreeMap::new();
        for (i, c) in self.conflicts.iter().enumerate() {
            index.entry(c.conflict_type.label()).or_default().push(i);
        }
        index
    }
}

/// Result of a resolution run.
#[derive(Debug)]
pub struct ResolutionReport {
    /// Applied mutations, unresolved conflicts, and the repaired schedule.
    pub outcome: ResolutionOutcome,
    /// Aggregate counts.
    pub summary: ResolutionSummary,
    /// Priority matrix version the run used.
    pub matrix_version: u64,
}

/// Result of a learning pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningReport {
    /// Resolution summaries the pass aggregated.
    pub summaries_considered: usize,
    /// Mean effectiveness across those summaries.
    pub overall_effectiveness: f64,
    /// Resolved counts per conflict type across the window.
    pub resolved_by_type: BTreeMap<String, usize>,
    /// Priority matrix version after the pass.
    pub matrix_version: u64,
}

/// Orchestrates detection, resolution, explanation, and learning.
///
/// Detection and resolution are pure over their inputs; the engine adds
/// the stateful shell around them: a priority matrix behind a lock, a
/// memory store recording every run, and a learning routine that replaces
/// the matrix wholesale. Memory failures are logged and swallowed — a
/// broken store degrades learning, never scheduling.
#[derive(Debug)]
pub struct ConflictEngine {
    memory: Arc<dyn MemoryStore>,
    explainer: Arc<dyn Explainer>,
    resolver: ConflictResolver,
    priorities: RwLock<PriorityMatrix>,
    learning_seed: u64,
    agent_id: String,
}

impl Default for ConflictEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ConflictEngine {
    /// Creates an engine with an in-process memory store, the rule-based
    /// explainer, default strategy chains, and the seed priority matrix.
    pub fn new() -> Self {
        Self {
            memory: Arc::new(InMemoryStore::new()),
            explainer: Arc::new(RuleBasedExplainer::new()),
            resolver: ConflictResolver::new(),
            priorities: RwLock::new(PriorityMatrix::new()),
            learning_seed: 0,
            agent_id: "conflict-engine".to_string(),
        }
    }

    /// Sets the memory store.
    pub fn with_memory(mut self, memory: Arc<dyn MemoryStore>) -> Self {
        self.memory = memory;
        self
    }

    /// Sets the explainer.
    pub fn with_explainer(mut self, explainer: Arc<dyn Explainer>) -> Self {
        self.explainer = explainer;
        self
    }

    /// Sets the resolver (e.g. with overridden strategy chains).
    pub fn with_resolver(mut self, resolver: ConflictResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Sets the seed for learning perturbations.
    pub fn with_learning_seed(mut self, seed: u64) -> Self {
        self.learning_seed = seed;
        self
    }

    /// Sets the agent id used when writing memory records.
    pub fn with_agent_id(mut self, agent_id: impl Into<String>) -> Self {
        self.agent_id = agent_id.into();
        self
    }

    /// Current priority matrix (a copy; the engine may replace its own
    /// during learning).
    pub fn priority_matrix(&self) -> PriorityMatrix {
        self.read_priorities().clone()
    }

    /// Detects all conflicts in a schedule.
    ///
    /// The schedule must be non-empty and structurally valid. A summary
    /// of the run is recorded in memory, tagged with the sport label.
    pub fn detect_conflicts(
        &self,
        events: &[ScheduleEvent],
        sport: &str,
        ctx: &DetectionContext,
    ) -> Result<DetectionReport, EngineError> {
        if events.is_empty() {
            return Err(EngineError::EmptySchedule);
        }
        validate_schedule(events).map_err(|errors| EngineError::InvalidSchedule { errors })?;

        let conflicts = run_all(events, ctx);
        let summary = DetectionSummary::from_conflicts(sport, events.len(), &conflicts);
        tracing::info!(
            sport,
            events = events.len(),
            conflicts = conflicts.len(),
            "detection complete"
        );
        self.record(
            &["detection-summary".to_string(), sport.to_string()],
            &summary,
        );

        Ok(DetectionReport { conflicts, summary })
    }

    /// Resolves conflicts against a schedule.
    ///
    /// Both inputs must be non-empty; calling with nothing to resolve is
    /// reported as a structured error rather than an empty success.
    /// Conflicts are stably ordered by descending priority weight before
    /// the resolver's per-type pass, so ties and same-type conflicts keep
    /// their detection order. The caller's schedule is never mutated.
    pub fn resolve_conflicts(
        &self,
        conflicts: &[Conflict],
        schedule: &[ScheduleEvent],
        ctx: &ResolutionContext,
    ) -> Result<ResolutionReport, EngineError> {
        if schedule.is_empty() {
            return Err(EngineError::EmptySchedule);
        }
        if conflicts.is_empty() {
            return Err(EngineError::NoConflicts);
        }
        validate_schedule(schedule).map_err(|errors| EngineError::InvalidSchedule { errors })?;

        let (ordered, matrix_version) = {
            let matrix = self.read_priorities();
            let mut ordered = conflicts.to_vec();
            ordered.sort_by(|a, b| {
                matrix
                    .weight(b.conflict_type)
                    .total_cmp(&matrix.weight(a.conflict_type))
            });
            (ordered, matrix.version)
        };

        let outcome = self.resolver.resolve(&ordered, schedule, ctx);
        let summary = ResolutionSummary::from_outcome(conflicts.len(), &outcome);
        tracing::info!(
            conflicts = conflicts.len(),
            resolved = summary.resolved_count,
            unresolved = summary.unresolved_count,
            matrix_version,
            "resolution complete"
        );
        self.record(&[RESOLUTION_SUMMARY_TAG.to_string()], &summary);

        Ok(ResolutionReport {
            outcome,
            summary,
            matrix_version,
        })
    }

    /// Explains a conflict in plain language.
    pub fn explain_conflict(&self, conflict: &Conflict) -> Explanation {
        let explanation = self.explainer.explain(conflict);
        self.record(
            &[
                "explanation".to_string(),
                conflict.conflict_type.label().to_string(),
            ],
            &explanation,
        );
        explanation
    }

    /// Aggregates recent resolution summaries and perturbs the priority
    /// matrix.
    ///
    /// Reads up to the last 100 resolution summaries from memory. With no
    /// history (or an unreachable store) the matrix is left untouched;
    /// otherwise a seeded perturbation replaces it atomically, bumping
    /// its version.
    pub fn learn_from_history(&self) -> LearningReport {
        let query = MemoryQuery::new()
            .with_tag(RESOLUTION_SUMMARY_TAG)
            .with_agent_id(self.agent_id.clone())
            .with_limit(LEARNING_WINDOW);
        let records = match self.memory.retrieve(&query) {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!(error = %err, "memory retrieval failed; skipping learning pass");
                Vec::new()
            }
        };

        let mut summaries_considered = 0usize;
        let mut effectiveness_sum = 0.0;
        let mut resolved_by_type: BTreeMap<String, usize> = BTreeMap::new();
        for record in &records {
            match serde_json::from_value::<ResolutionSummary>(record.payload.clone()) {
                Ok(summary) => {
                    summaries_considered += 1;
                    effectiveness_sum += summary.effectiveness;
                    for (ty, count) in summary.resolved_by_type {
                        *resolved_by_type.entry(ty).or_default() += count;
                    }
                }
                Err(err) => {
                    tracing::warn!(record = %record.id, error = %err, "skipping malformed summary");
                }
            }
        }

        if summaries_considered == 0 {
            let version = self.read_priorities().version;
            return LearningReport {
                summaries_considered: 0,
                overall_effectiveness: 0.0,
                resolved_by_type,
                matrix_version: version,
            };
        }

        let matrix_version = {
            let mut guard = self
                .priorities
                .write()
                .unwrap_or_else(|e| e.into_inner());
            let mut rng = SmallRng::seed_from_u64(self.learning_seed ^ guard.version);
            *guard = guard.perturbed(&mut rng, LEARNING_MAGNITUDE);
            guard.version
        };

        let report = LearningReport {
            summaries_considered,
            overall_effectiveness: effectiveness_sum / summaries_considered as f64,
            resolved_by_type,
            matrix_version,
        };
        tracing::info!(
            summaries = report.summaries_considered,
            effectiveness = report.overall_effectiveness,
            matrix_version,
            "learning pass complete"
        );
        self.record(&["learning-report".to_string()], &report);
        report
    }

    fn read_priorities(&self) -> std::sync::RwLockReadGuard<'_, PriorityMatrix> {
        self.priorities.read().unwrap_or_else(|e| e.into_inner())
    }

    /// Best-effort memory write.
    fn record<T: Serialize>(&self, tags: &[String], payload: &T) {
        let value = match serde_json::to_value(payload) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(error = %err, "failed to serialize memory payload");
                return;
            }
        };
        if let Err(err) = self.memory.store(&self.agent_id, tags, value) {
            tracing::warn!(error = %err, "failed to store memory record");
        }
    }
}
