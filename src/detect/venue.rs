//! Venue double-booking detector.

use super::{chronological, DetectionContext};
use crate::geo::overlaps;
use crate::models::{Conflict, ScheduleEvent};
use std::collections::HashMap;

/// Flags every pair of games whose intervals overlap at the same venue.
///
/// Events are walked in `(date, start_time)` order; each event's
/// half-open interval is checked against every earlier interval at the
/// same venue, producing one high-severity conflict per overlapping pair.
pub fn detect_venue_conflicts(
    events: &[ScheduleEvent],
    _ctx: &DetectionContext,
) -> Vec<Conflict> {
    let mut conflicts = Vec::new();
    let mut seen: HashMap<&str, Vec<usize>> = HashMap::new();
    let mut n = 0usize;

    for &i in &chronological(events) {
        let event = &events[i];
        let (start, end) = (event.start_dt(), event.end_dt());

        if let Some(prior) = seen.get(event.venue.as_str()) {
            for &j in prior {
                let other = &events[j];
                if overlaps(other.start_dt(), other.end_dt(), start, end) {
                    n += 1;
                    conflicts.push(Conflict::venue_overlap(format!("venue-{n}"), other, event));
                }
            }
        }
        seen.entry(event.venue.as_str()).or_default().push(i);
    }

    conflicts
}
