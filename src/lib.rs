//! # matchguard
//!
//! Schedule conflict engine for multi-team sports leagues.
//!
//! The crate splits the problem into three layers:
//!
//! - **Detection** ([`detect`]): five independent detectors (venue,
//!   team, travel, resource, rest) scan an immutable schedule snapshot
//!   and emit typed [`Conflict`](models::Conflict)s.
//! - **Resolution** ([`resolve`]): each conflict type has an ordered
//!   chain of strategies (venue change, time shift, date shift,
//!   deficit-driven date-time shift, team swap); the first success wins
//!   and every repair is audited as a
//!   [`Resolution`](models::Resolution).
//! - **Orchestration** ([`engine`]): the [`ConflictEngine`](engine::ConflictEngine)
//!   validates input, orders conflicts by a versioned priority matrix,
//!   records run summaries to a pluggable memory store, explains
//!   conflicts in plain language, and adapts priorities from history.
//!
//! Schedules are treated as values throughout: detection never mutates,
//! and resolution deep-copies before repairing, so the caller's input is
//! never touched.
//!
//! ## Quick start
//!
//! ```
//! use chrono::{NaiveDate, NaiveTime};
//! use matchguard::detect::DetectionContext;
//! use matchguard::engine::ConflictEngine;
//! use matchguard::models::{ScheduleEvent, Venue, VenueRegistry};
//! use matchguard::resolve::ResolutionContext;
//!
//! let date = NaiveDate::from_ymd_opt(2024, 9, 14).unwrap();
//! let schedule = vec![
//!     ScheduleEvent::new("g1", date, "Austin FC", "Dallas FC", "stadium-a")
//!         .with_start_time(NaiveTime::from_hms_opt(14, 0, 0).unwrap()),
//!     ScheduleEvent::new("g2", date, "Houston FC", "El Paso FC", "stadium-a")
//!         .with_start_time(NaiveTime::from_hms_opt(15, 0, 0).unwrap()),
//! ];
//!
//! let venues = VenueRegistry::new()
//!     .with_venue("stadium-a", Venue::new())
//!     .with_venue("stadium-b", Venue::new());
//!
//! let engine = ConflictEngine::new();
//! let ctx = DetectionContext::new().with_venues(venues.clone());
//! let report = engine.detect_conflicts(&schedule, "mls", &ctx).unwrap();
//! assert_eq!(report.conflicts.len(), 1);
//!
//! let rctx = ResolutionContext::new().with_venues(venues);
//! let repaired = engine
//!     .resolve_conflicts(&report.conflicts, &schedule, &rctx)
//!     .unwrap();
//! assert_eq!(repaired.summary.resolved_count, 1);
//! assert_eq!(repaired.outcome.modified_schedule[1].venue, "stadium-b");
//! ```

pub mod advisor;
pub mod detect;
pub mod engine;
pub mod explain;
pub mod geo;
pub mod memory;
pub mod models;
pub mod resolve;
pub mod validation;
