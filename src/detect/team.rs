//! Team double-booking and game-spacing detector.

use super::{chronological, team_histories, DetectionContext};
use crate::models::{hours_between, Conflict, ScheduleEvent};

/// Flags teams scheduled twice on one day or with too little time
/// between game starts.
///
/// For each team, consecutive games in chronological order are compared.
/// A same-day pair is always a high-severity conflict (the same-day rule
/// fires before the rest-hours rule). Otherwise, a start-to-start gap
/// below `min_hours_between_games` yields a medium-severity conflict
/// with the `Rest` subtype.
pub fn detect_team_conflicts(events: &[ScheduleEvent], ctx: &DetectionContext) -> Vec<Conflict> {
    let order = chronological(events);
    let mut conflicts = Vec::new();
    let mut n = 0usize;

    for (team, history) in team_histories(events, &order) {
        for pair in history.windows(2) {
            let prev = &events[pair[0]];
            let cur = &events[pair[1]];
            let gap = hours_between(prev.start_dt(), cur.start_dt());

            if prev.date == cur.date {
                n += 1;
                conflicts.push(Conflict::team_same_day(
                    format!("team-{n}"),
                    team,
                    prev,
                    cur,
                    gap,
                ));
            } else if gap < ctx.constraints.min_hours_between_games {
                n += 1;
                conflicts.push(Conflict::team_short_gap(
                    format!("team-{n}"),
                    team,
                    prev,
                    cur,
                    gap,
                    ctx.constraints.min_hours_between_games,
                ));
            }
        }
    }

    conflicts
}
