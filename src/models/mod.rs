//! Domain models for schedule conflict detection and repair.
//!
//! Provides the core data types: scheduled events, typed conflicts,
//! resolution audit records, caller-supplied registries, and the
//! operational constraints the detectors check against.

mod conflict;
mod constraints;
mod event;
mod registry;
mod resolution;

pub use conflict::{Conflict, ConflictSubtype, ConflictType, Severity};
pub use constraints::SportConstraints;
pub use event::{hours_between, ScheduleEvent, DEFAULT_DURATION_HOURS};
pub use registry::{Coordinates, ResourceRegistry, ResourceSpec, Venue, VenueRegistry};
pub use resolution::{EventField, FieldChange, Resolution, ResolutionType};
