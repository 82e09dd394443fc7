//! Rest-period detector.

use super::{chronological, team_histories, DetectionContext};
use crate::geo::distance_miles;
use crate::models::{hours_between, Conflict, ScheduleEvent};

/// Flags teams whose rest window between games is too short.
///
/// The required rest depends on the previous game: `min_hours_after_home_game`
/// if the team hosted, `min_hours_after_away_game` otherwise, bumped to
/// `min_hours_after_long_travel` when the venue changed by more than the
/// long-travel distance. The rest window runs from the previous game's end
/// to the next game's start. Unknown venue distances fall back to the
/// home/away requirement rather than the long-travel one.
pub fn detect_rest_conflicts(events: &[ScheduleEvent], ctx: &DetectionContext) -> Vec<Conflict> {
    let order = chronological(events);
    let mut conflicts = Vec::new();
    let mut n = 0usize;

    for (team, history) in team_histories(events, &order) {
        for pair in history.windows(2) {
            let prev = &events[pair[0]];
            let cur = &events[pair[1]];

            let mut required = if prev.home_team == team {
                ctx.constraints.min_hours_after_home_game
            } else {
                ctx.constraints.min_hours_after_away_game
            };

            let mut long_travel = false;
            if prev.venue != cur.venue {
                match distance_miles(&prev.venue, &cur.venue, &ctx.venues) {
                    Some(miles) if miles > ctx.constraints.long_travel_distance_miles => {
                        required = required.max(ctx.constraints.min_hours_after_long_travel);
                        long_travel = true;
                    }
                    Some(_) => {}
                    None => {
                        tracing::debug!(
                            team,
                            from = %prev.venue,
                            to = %cur.venue,
                            "venue distance unknown; using home/away rest requirement"
                        );
                    }
                }
            }

            let rest = hours_between(prev.end_dt(), cur.start_dt());
            if rest < required {
                n += 1;
                conflicts.push(Conflict::short_rest(
                    format!("rest-{n}"),
                    team,
                    prev,
                    cur,
                    rest,
                    required,
                    long_travel,
                ));
            }
        }
    }

    conflicts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ConflictSubtype, ConflictType, Severity, Venue, VenueRegistry};
    use chrono::{NaiveDate, NaiveTime};

    fn registry() -> VenueRegistry {
        // Austin–Dallas ≈ 182 mi; Austin–Kansas City ≈ 650 mi.
        VenueRegistry::new()
            .with_venue("austin", Venue::new().with_coordinates(30.2672, -97.7431))
            .with_venue("dallas", Venue::new().with_coordinates(32.7767, -96.7970))
            .with_venue("kansas-city", Venue::new().with_coordinates(39.0997, -94.5786))
    }

    fn game(id: &str, day: u32, hour: u32, home: &str, away: &str, venue: &str) -> ScheduleEvent {
        ScheduleEvent::new(
            id,
            NaiveDate::from_ymd_opt(2024, 9, day).unwrap(),
            home,
            away,
            venue,
        )
        .with_start_time(NaiveTime::from_hms_opt(hour, 0, 0).unwrap())
        .with_duration_hours(3.0)
    }

    fn ctx() -> DetectionContext {
        DetectionContext::new().with_venues(registry())
    }

    #[test]
    fn test_short_rest_after_home_game() {
        // Home game ends 22:00, next starts 14:00 next day: 16h < 20h.
        let events = vec![
            game("g1", 14, 19, "UT", "OU", "austin"),
            game("g2", 15, 14, "UT", "Baylor", "austin"),
        ];
        let conflicts = detect_rest_conflicts(&events, &ctx());
        // UT flagged; OU and Baylor each have one game.
        assert_eq!(conflicts.len(), 1);
        let c = &conflicts[0];
        assert_eq!(c.conflict_type, ConflictType::Rest);
        assert_eq!(c.severity, Severity::Medium);
        assert_eq!(c.team.as_deref(), Some("UT"));
        assert!((c.hours_between.unwrap() - 16.0).abs() < 1e-9);
        assert!((c.required_rest.unwrap() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_away_game_needs_more_rest() {
        // UT away in g1, 22h rest: passes the 20h home rule, fails 24h away.
        let events = vec![
            game("g1", 14, 13, "OU", "UT", "dallas"),
            game("g2", 15, 14, "UT", "Baylor", "dallas"),
        ];
        let conflicts = detect_rest_conflicts(&events, &ctx());
        let ut: Vec<_> = conflicts
            .iter()
            .filter(|c| c.team.as_deref() == Some("UT"))
            .collect();
        assert_eq!(ut.len(), 1);
        assert!((ut[0].required_rest.unwrap() - 24.0).abs() < 1e-9);
    }

    #[test]
    fn test_long_travel_raises_requirement() {
        // Austin → Kansas City is well over 300 miles: 36h required.
        // 30h rest passes the away rule but not the long-travel rule.
        let events = vec![
            game("g1", 14, 12, "UT", "OU", "austin"),
            game("g2", 15, 21, "KC", "UT", "kansas-city"),
        ];
        let conflicts = detect_rest_conflicts(&events, &ctx());
        let ut: Vec<_> = conflicts
            .iter()
            .filter(|c| c.team.as_deref() == Some("UT"))
            .collect();
        assert_eq!(ut.len(), 1);
        let c = ut[0];
        assert_eq!(c.subtype, Some(ConflictSubtype::LongTravel));
        assert_eq!(c.severity, Severity::High);
        assert!((c.required_rest.unwrap() - 36.0).abs() < 1e-9);
    }

    #[test]
    fn test_short_trip_keeps_base_requirement() {
        // Austin → Dallas is under 300 miles: home rule (20h) applies.
        // 21h rest is enough.
        let events = vec![
            game("g1", 14, 12, "UT", "OU", "austin"),
            game("g2", 15, 12, "Mavs", "UT", "dallas"),
        ];
        let ut: Vec<_> = detect_rest_conflicts(&events, &ctx())
            .into_iter()
            .filter(|c| c.team.as_deref() == Some("UT"))
            .collect();
        assert!(ut.is_empty());
    }

    #[test]
    fn test_unknown_distance_uses_base_requirement() {
        // Unregistered venue: long-travel bump cannot apply. 30h rest
        // satisfies the 24h away rule.
        let events = vec![
            game("g1", 14, 12, "OU", "UT", "dallas"),
            game("g2", 15, 21, "X", "UT", "nowhere"),
        ];
        let ut: Vec<_> = detect_rest_conflicts(&events, &ctx())
            .into_iter()
            .filter(|c| c.team.as_deref() == Some("UT"))
            .collect();
        assert!(ut.is_empty());
    }

    #[test]
    fn test_well_rested_schedule_clean() {
        let events = vec![
            game("g1", 14, 14, "UT", "OU", "austin"),
            game("g2", 21, 14, "UT", "Baylor", "austin"),
        ];
        assert!(detect_rest_conflicts(&events, &ctx()).is_empty());
    }
}
