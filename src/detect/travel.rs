//! Travel feasibility detector.

use super::{chronological, team_histories, DetectionContext};
use crate::geo::travel_hours;
use crate::models::{hours_between, Conflict, ScheduleEvent};

/// Flags consecutive games a team cannot reach in time.
///
/// For each team's consecutive venue change, the required window is
/// `travel_hours + min_hours_after_travel + travel_buffer_hours`; the
/// available window is the gap from the previous game's end to the next
/// game's start. Pairs at the same venue need no travel; pairs with
/// unknown travel time (unregistered venue, no coordinates) are skipped.
pub fn detect_travel_conflicts(events: &[ScheduleEvent], ctx: &DetectionContext) -> Vec<Conflict> {
    let order = chronological(events);
    let mut conflicts = Vec::new();
    let mut n = 0usize;

    for (team, history) in team_histories(events, &order) {
        for pair in history.windows(2) {
            let prev = &events[pair[0]];
            let cur = &events[pair[1]];
            if prev.venue == cur.venue {
                continue;
            }

            let Some(travel) = travel_hours(
                &prev.venue,
                &cur.venue,
                &ctx.venues,
                ctx.constraints.travel_speed_mph,
            ) else {
                tracing::debug!(
                    team,
                    from = %prev.venue,
                    to = %cur.venue,
                    "travel time unknown; skipping pair"
                );
                continue;
            };

            let required =
                travel + ctx.constraints.min_hours_after_travel + ctx.constraints.travel_buffer_hours;
            let available = hours_between(prev.end_dt(), cur.start_dt());

            if available < required {
                n += 1;
                conflicts.push(Conflict::travel(
                    format!("travel-{n}"),
                    team,
                    prev,
                    cur,
                    available,
                    required,
                ));
            }
        }
    }

    conflicts
}
