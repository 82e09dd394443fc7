//! Engine orchestration: priority matrix, run summaries, and the
//! [`ConflictEngine`] facade tying detection, resolution, explanation,
//! and learning together.

mod orchestrator;
mod priority;
mod summary;

pub use orchestrator::{
    ConflictEngine, DetectionReport, EngineError, LearningReport, ResolutionReport,
};
pub use priority::{PriorityMatrix, MAX_WEIGHT, MIN_WEIGHT};
pub use summary::{DetectionSummary, ResolutionSummary};
