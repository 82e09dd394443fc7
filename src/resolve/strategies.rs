//! Built-in resolution strategies.

use chrono::Duration;

use super::{locate_event, ResolutionContext, ResolutionStrategy, StrategyAttempt};
use crate::advisor::SwapQuery;
use crate::geo::{distance_miles, overlaps};
use crate::models::{
    Conflict, EventField, FieldChange, Resolution, ResolutionType, ScheduleEvent,
};

/// The event a conflict's strategies operate on: the later of the
/// snapshotted events (the one that arrived second chronologically).
fn target_snapshot(conflict: &Conflict) -> Option<&ScheduleEvent> {
    conflict.events.last()
}

/// Whether `venue` is free for `event`'s interval in `schedule`,
/// ignoring the event itself.
fn venue_is_free(schedule: &[ScheduleEvent], skip: usize, venue: &str, event: &ScheduleEvent) -> bool {
    schedule.iter().enumerate().all(|(i, other)| {
        i == skip
            || other.venue != venue
            || !overlaps(
                other.start_dt(),
                other.end_dt(),
                event.start_dt(),
                event.end_dt(),
            )
    })
}

/// Moves the game to another registered venue.
///
/// Candidates are the registry's venues minus any venue already involved
/// in the conflict, in sorted-id order; with `closer_first`, candidates
/// with a known distance to the current venue are tried nearest-first
/// (unknown distances last, original order among ties). The top candidate
/// is taken without checking occupancy; a follow-up detection pass
/// surfaces any overlap the move creates. [`require_free`](Self::require_free)
/// opts into skipping occupied candidates.
#[derive(Debug, Clone)]
pub struct AlternateVenue {
    prioritize_closer: bool,
    require_free: bool,
}

impl AlternateVenue {
    pub fn new() -> Self {
        Self {
            prioritize_closer: false,
            require_free: false,
        }
    }

    /// Variant used for travel conflicts: try nearer venues first.
    pub fn closer_first() -> Self {
        Self {
            prioritize_closer: true,
            require_free: false,
        }
    }

    /// Only accept a candidate with no overlapping booking at the
    /// target's interval.
    pub fn require_free(mut self) -> Self {
        self.require_free = true;
        self
    }
}

impl Default for AlternateVenue {
    fn default() -> Self {
        Self::new()
    }
}

impl ResolutionStrategy for AlternateVenue {
    fn name(&self) -> &str {
        if self.prioritize_closer {
            "alternate-venue-closer"
        } else {
            "alternate-venue"
        }
    }

    fn resolution_type(&self) -> ResolutionType {
        ResolutionType::VenueChange
    }

    fn description(&self) -> String {
        "Move the game to a free registered venue".to_string()
    }

    fn apply(
        &self,
        schedule: Vec<ScheduleEvent>,
        conflict: &Conflict,
        ctx: &ResolutionContext,
    ) -> StrategyAttempt {
        let Some(snapshot) = target_snapshot(conflict) else {
            return StrategyAttempt::unchanged(schedule);
        };
        let Some(idx) = locate_event(&schedule, snapshot) else {
            return StrategyAttempt::unchanged(schedule);
        };

        let involved: Vec<&str> = conflict.events.iter().map(|e| e.venue.as_str()).collect();
        let mut candidates: Vec<&str> = ctx
            .venues
            .ids()
            .into_iter()
            .filter(|id| !involved.contains(id))
            .collect();

        if self.prioritize_closer {
            let current = schedule[idx].venue.clone();
            candidates.sort_by(|a, b| {
                let da = distance_miles(&current, a, &ctx.venues);
                let db = distance_miles(&current, b, &ctx.venues);
                match (da, db) {
                    (Some(x), Some(y)) => x.total_cmp(&y),
                    (Some(_), None) => std::cmp::Ordering::Less,
                    (None, Some(_)) => std::cmp::Ordering::Greater,
                    (None, None) => std::cmp::Ordering::Equal,
                }
            });
        }

        let event = schedule[idx].clone();
        let chosen = candidates
            .into_iter()
            .find(|candidate| !self.require_free || venue_is_free(&schedule, idx, candidate, &event));
        let Some(candidate) = chosen else {
            return StrategyAttempt::unchanged(schedule);
        };

        let mut schedule = schedule;
        let from = schedule[idx].venue.clone();
        schedule[idx].venue = candidate.to_string();
        let resolution = Resolution::new(
            conflict,
            ResolutionType::VenueChange,
            &event,
            FieldChange::new(EventField::Venue, from.clone(), candidate),
            format!("Moved game '{}' from '{from}' to '{candidate}'", event.id),
        );
        StrategyAttempt::applied(schedule, resolution)
    }
}

/// Pushes the game's start time later on the same date.
///
/// Declines when the shift would cross midnight; date changes belong to
/// [`DateShift`] and [`DateTimeShift`].
#[derive(Debug, Clone)]
pub struct TimeShift {
    hours: f64,
}

impl TimeShift {
    pub fn new(hours: f64) -> Self {
        Self { hours }
    }
}

impl ResolutionStrategy for TimeShift {
    fn name(&self) -> &str {
        "time-shift"
    }

    fn resolution_type(&self) -> ResolutionType {
        ResolutionType::TimeShift
    }

    fn description(&self) -> String {
        format!("Shift the game's start time by {:+.1}h on the same date", self.hours)
    }

    fn apply(
        &self,
        schedule: Vec<ScheduleEvent>,
        conflict: &Conflict,
        _ctx: &ResolutionContext,
    ) -> StrategyAttempt {
        let Some(snapshot) = target_snapshot(conflict) else {
            return StrategyAttempt::unchanged(schedule);
        };
        let Some(idx) = locate_event(&schedule, snapshot) else {
            return StrategyAttempt::unchanged(schedule);
        };

        let event = schedule[idx].clone();
        let shifted = event.start_dt() + Duration::seconds((self.hours * 3600.0).round() as i64);
        if shifted.date() != event.date {
            return StrategyAttempt::unchanged(schedule);
        }

        let mut schedule = schedule;
        let from = event.start_time_or_default();
        schedule[idx].start_time = Some(shifted.time());
        let resolution = Resolution::new(
            conflict,
            ResolutionType::TimeShift,
            &event,
            FieldChange::new(
                EventField::StartTime,
                from.to_string(),
                shifted.time().to_string(),
            ),
            format!(
                "Shifted game '{}' from {from} to {} ({:+.1}h)",
                event.id,
                shifted.time(),
                self.hours
            ),
        );
        StrategyAttempt::applied(schedule, resolution)
    }
}

/// Moves the game to another date, keeping its start time.
#[derive(Debug, Clone)]
pub struct DateShift {
    days: i64,
}

impl DateShift {
    pub fn new(days: i64) -> Self {
        Self { days }
    }
}

impl ResolutionStrategy for DateShift {
    fn name(&self) -> &str {
        "date-shift"
    }

    fn resolution_type(&self) -> ResolutionType {
        ResolutionType::DateShift
    }

    fn description(&self) -> String {
        format!("Move the game by {:+} day(s), keeping its start time", self.days)
    }

    fn apply(
        &self,
        schedule: Vec<ScheduleEvent>,
        conflict: &Conflict,
        _ctx: &ResolutionContext,
    ) -> StrategyAttempt {
        let Some(snapshot) = target_snapshot(conflict) else {
            return StrategyAttempt::unchanged(schedule);
        };
        let Some(idx) = locate_event(&schedule, snapshot) else {
            return StrategyAttempt::unchanged(schedule);
        };

        let mut schedule = schedule;
        let event = schedule[idx].clone();
        let to = event.date + Duration::days(self.days);
        schedule[idx].date = to;
        let resolution = Resolution::new(
            conflict,
            ResolutionType::DateShift,
            &event,
            FieldChange::new(EventField::Date, event.date.to_string(), to.to_string()),
            format!("Moved game '{}' from {} to {to}", event.id, event.date),
        );
        StrategyAttempt::applied(schedule, resolution)
    }
}

/// Pushes the game forward by the conflict's own deficit.
///
/// The shift is `ceil(required − available)` hours, derived from the
/// conflict's travel or rest fields, and may cross into a later date.
/// Declines when the conflict carries no deficit.
#[derive(Debug, Clone, Default)]
pub struct DateTimeShift;

impl DateTimeShift {
    pub fn new() -> Self {
        Self
    }
}

impl ResolutionStrategy for DateTimeShift {
    fn name(&self) -> &str {
        "date-time-shift"
    }

    fn resolution_type(&self) -> ResolutionType {
        ResolutionType::DateTimeShift
    }

    fn description(&self) -> String {
        "Push the game forward by the conflict's hour deficit".to_string()
    }

    fn apply(
        &self,
        schedule: Vec<ScheduleEvent>,
        conflict: &Conflict,
        _ctx: &ResolutionContext,
    ) -> StrategyAttempt {
        let Some(deficit) = conflict.deficit_hours() else {
            return StrategyAttempt::unchanged(schedule);
        };
        let Some(snapshot) = target_snapshot(conflict) else {
            return StrategyAttempt::unchanged(schedule);
        };
        let Some(idx) = locate_event(&schedule, snapshot) else {
            return StrategyAttempt::unchanged(schedule);
        };

        let mut schedule = schedule;
        let event = schedule[idx].clone();
        let shifted = event.start_dt() + Duration::seconds((deficit * 3600.0).round() as i64);
        schedule[idx].date = shifted.date();
        schedule[idx].start_time = Some(shifted.time());
        let resolution = Resolution::new(
            conflict,
            ResolutionType::DateTimeShift,
            &event,
            FieldChange::new(
                EventField::StartDateTime,
                event.start_dt().to_string(),
                shifted.to_string(),
            ),
            format!(
                "Pushed game '{}' from {} to {shifted} (+{deficit:.0}h)",
                event.id,
                event.start_dt()
            ),
        );
        StrategyAttempt::applied(schedule, resolution)
    }
}

/// Replaces the conflicting team with an eligible substitute.
///
/// Candidates are `eligible_teams` minus both teams in the game. With a
/// single candidate it is taken directly; with several, the configured
/// advisor is consulted. Advisor failure or an answer outside the pool
/// falls back to the first candidate, so a flaky advisor degrades the
/// choice, never the resolution.
#[derive(Debug, Clone, Default)]
pub struct TeamSwap;

impl TeamSwap {
    pub fn new() -> Self {
        Self
    }
}

impl ResolutionStrategy for TeamSwap {
    fn name(&self) -> &str {
        "team-swap"
    }

    fn resolution_type(&self) -> ResolutionType {
        ResolutionType::TeamSwap
    }

    fn description(&self) -> String {
        "Replace the conflicting team with an eligible substitute".to_string()
    }

    fn apply(
        &self,
        schedule: Vec<ScheduleEvent>,
        conflict: &Conflict,
        ctx: &ResolutionContext,
    ) -> StrategyAttempt {
        let Some(team) = conflict.team.as_deref() else {
            return StrategyAttempt::unchanged(schedule);
        };
        let Some(snapshot) = target_snapshot(conflict) else {
            return StrategyAttempt::unchanged(schedule);
        };
        let Some(idx) = locate_event(&schedule, snapshot) else {
            return StrategyAttempt::unchanged(schedule);
        };

        let event = schedule[idx].clone();
        let (field, opponent) = if event.home_team == team {
            (EventField::HomeTeam, event.away_team.clone())
        } else if event.away_team == team {
            (EventField::AwayTeam, event.home_team.clone())
        } else {
            return StrategyAttempt::unchanged(schedule);
        };

        let candidates: Vec<String> = ctx
            .eligible_teams
            .iter()
            .filter(|t| *t != team && **t != opponent)
            .cloned()
            .collect();
        let Some(first) = candidates.first().cloned() else {
            return StrategyAttempt::unchanged(schedule);
        };

        let replacement = if candidates.len() == 1 {
            first
        } else {
            match ctx.advisor.as_deref() {
                Some(advisor) => {
                    let query = SwapQuery {
                        conflict_id: conflict.id.clone(),
                        team_to_replace: team.to_string(),
                        opponent: opponent.clone(),
                        candidates: candidates.clone(),
                        timeout: ctx.advisor_timeout,
                    };
                    match advisor.propose(&query) {
                        Ok(answer) if candidates.contains(&answer) => answer,
                        Ok(answer) => {
                            tracing::warn!(
                                advisor = advisor.name(),
                                answer,
                                "advisor proposed a team outside the pool; using first candidate"
                            );
                            first
                        }
                        Err(err) => {
                            tracing::warn!(
                                advisor = advisor.name(),
                                error = %err,
                                "advisor consultation failed; using first candidate"
                            );
                            first
                        }
                    }
                }
                None => first,
            }
        };

        let mut schedule = schedule;
        match field {
            EventField::HomeTeam => schedule[idx].home_team = replacement.clone(),
            _ => schedule[idx].away_team = replacement.clone(),
        }
        let resolution = Resolution::new(
            conflict,
            ResolutionType::TeamSwap,
            &event,
            FieldChange::new(field, team, replacement.clone()),
            format!(
                "Swapped '{team}' for '{replacement}' in game '{}'",
                event.id
            ),
        );
        StrategyAttempt::applied(schedule, resolution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::{AdvisorError, SwapAdvisor};
    use crate::models::{Venue, VenueRegistry};
    use chrono::{NaiveDate, NaiveTime};
    use std::sync::Arc;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, d).unwrap()
    }

    fn time(h: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, 0, 0).unwrap()
    }

    fn game(id: &str, d: u32, h: u32, venue: &str) -> ScheduleEvent {
        ScheduleEvent::new(id, date(d), format!("{id}-home"), format!("{id}-away"), venue)
            .with_start_time(time(h))
            .with_duration_hours(3.0)
    }

    fn venue_conflict(schedule: &[ScheduleEvent]) -> Conflict {
        Conflict::venue_overlap("venue-1".into(), &schedule[0], &schedule[1])
    }

    #[test]
    fn test_alternate_venue_picks_top_candidate() {
        let schedule = vec![game("g1", 14, 14, "a"), game("g2", 14, 15, "a")];
        let conflict = venue_conflict(&schedule);
        let ctx = ResolutionContext::new().with_venues(
            VenueRegistry::new()
                .with_venue("a", Venue::new())
                .with_venue("b", Venue::new()),
        );
        let attempt = AlternateVenue::new().apply(schedule, &conflict, &ctx);
        let resolution = attempt.resolution.expect("should resolve");
        assert_eq!(resolution.resolution_type, ResolutionType::VenueChange);
        assert_eq!(attempt.schedule[1].venue, "b");
        // g1 stays put; the later game moves.
        assert_eq!(attempt.schedule[0].venue, "a");
    }

    #[test]
    fn test_alternate_venue_takes_top_candidate_even_if_occupied() {
        // Venue "b" hosts g3 during the slot; the default strategy still
        // moves g2 there and leaves the new overlap for the next
        // detection pass.
        let schedule = vec![
            game("g1", 14, 14, "a"),
            game("g2", 14, 15, "a"),
            game("g3", 14, 14, "b"),
        ];
        let conflict = venue_conflict(&schedule);
        let ctx = ResolutionContext::new().with_venues(
            VenueRegistry::new()
                .with_venue("a", Venue::new())
                .with_venue("b", Venue::new()),
        );
        let attempt = AlternateVenue::new().apply(schedule, &conflict, &ctx);
        assert!(attempt.resolution.is_some());
        assert_eq!(attempt.schedule[1].venue, "b");
    }

    #[test]
    fn test_require_free_skips_busy_venue() {
        // Venue "b" is occupied during the slot; only "c" is free.
        let schedule = vec![
            game("g1", 14, 14, "a"),
            game("g2", 14, 15, "a"),
            game("g3", 14, 14, "b"),
        ];
        let conflict = venue_conflict(&schedule);
        let ctx = ResolutionContext::new().with_venues(
            VenueRegistry::new()
                .with_venue("a", Venue::new())
                .with_venue("b", Venue::new())
                .with_venue("c", Venue::new()),
        );
        let attempt = AlternateVenue::new()
            .require_free()
            .apply(schedule, &conflict, &ctx);
        assert!(attempt.resolution.is_some());
        assert_eq!(attempt.schedule[1].venue, "c");
    }

    #[test]
    fn test_require_free_declines_when_all_busy() {
        let schedule = vec![
            game("g1", 14, 14, "a"),
            game("g2", 14, 15, "a"),
            game("g3", 14, 14, "b"),
        ];
        let conflict = venue_conflict(&schedule);
        let ctx = ResolutionContext::new().with_venues(
            VenueRegistry::new()
                .with_venue("a", Venue::new())
                .with_venue("b", Venue::new()),
        );
        let attempt = AlternateVenue::new()
            .require_free()
            .apply(schedule.clone(), &conflict, &ctx);
        assert!(attempt.resolution.is_none());
        assert_eq!(attempt.schedule, schedule);
    }

    #[test]
    fn test_alternate_venue_declines_without_candidates() {
        let schedule = vec![game("g1", 14, 14, "a"), game("g2", 14, 15, "a")];
        let conflict = venue_conflict(&schedule);
        let ctx = ResolutionContext::new()
            .with_venues(VenueRegistry::new().with_venue("a", Venue::new()));
        let attempt = AlternateVenue::new().apply(schedule.clone(), &conflict, &ctx);
        assert!(attempt.resolution.is_none());
        assert_eq!(attempt.schedule, schedule);
    }

    #[test]
    fn test_alternate_venue_closer_first() {
        // From Austin, Dallas (~182mi) beats Kansas City (~650mi).
        let schedule = vec![game("g1", 14, 14, "austin"), game("g2", 14, 15, "austin")];
        let conflict = venue_conflict(&schedule);
        let ctx = ResolutionContext::new().with_venues(
            VenueRegistry::new()
                .with_venue("austin", Venue::new().with_coordinates(30.2672, -97.7431))
                .with_venue("dallas", Venue::new().with_coordinates(32.7767, -96.7970))
                .with_venue(
                    "kansas-city",
                    Venue::new().with_coordinates(39.0997, -94.5786),
                ),
        );
        let attempt = AlternateVenue::closer_first().apply(schedule, &conflict, &ctx);
        assert_eq!(attempt.schedule[1].venue, "dallas");
    }

    #[test]
    fn test_time_shift_same_date() {
        let schedule = vec![game("g1", 14, 14, "a"), game("g2", 14, 15, "a")];
        let conflict = venue_conflict(&schedule);
        let attempt = TimeShift::new(3.0).apply(schedule, &conflict, &ResolutionContext::new());
        assert!(attempt.resolution.is_some());
        assert_eq!(attempt.schedule[1].start_time, Some(time(18)));
        assert_eq!(attempt.schedule[1].date, date(14));
    }

    #[test]
    fn test_time_shift_declines_past_midnight() {
        let schedule = vec![game("g1", 14, 14, "a"), game("g2", 14, 22, "a")];
        let conflict = Conflict::venue_overlap("venue-1".into(), &schedule[0], &schedule[1]);
        let attempt =
            TimeShift::new(3.0).apply(schedule.clone(), &conflict, &ResolutionContext::new());
        assert!(attempt.resolution.is_none());
        assert_eq!(attempt.schedule, schedule);
    }

    #[test]
    fn test_date_shift_keeps_time() {
        let schedule = vec![game("g1", 14, 14, "a"), game("g2", 14, 15, "a")];
        let conflict = venue_conflict(&schedule);
        let attempt = DateShift::new(1).apply(schedule, &conflict, &ResolutionContext::new());
        assert!(attempt.resolution.is_some());
        assert_eq!(attempt.schedule[1].date, date(15));
        assert_eq!(attempt.schedule[1].start_time, Some(time(15)));
    }

    #[test]
    fn test_date_time_shift_uses_deficit() {
        // 2h available, 8h required: deficit ceil(6.0) = 6h.
        let schedule = vec![game("g1", 14, 14, "a"), game("g2", 14, 19, "b")];
        let conflict = Conflict::travel(
            "travel-1".into(),
            "UT",
            &schedule[0],
            &schedule[1],
            2.0,
            8.0,
        );
        let attempt = DateTimeShift::new().apply(schedule, &conflict, &ResolutionContext::new());
        assert!(attempt.resolution.is_some());
        // 19:00 + 6h = 01:00 next day.
        assert_eq!(attempt.schedule[1].date, date(15));
        assert_eq!(attempt.schedule[1].start_time, Some(time(1)));
    }

    #[test]
    fn test_date_time_shift_declines_without_deficit() {
        let schedule = vec![game("g1", 14, 14, "a"), game("g2", 14, 15, "a")];
        let conflict = venue_conflict(&schedule);
        let attempt =
            DateTimeShift::new().apply(schedule.clone(), &conflict, &ResolutionContext::new());
        assert!(attempt.resolution.is_none());
        assert_eq!(attempt.schedule, schedule);
    }

    fn swap_fixture() -> (Vec<ScheduleEvent>, Conflict) {
        let g1 = ScheduleEvent::new("g1", date(14), "UT", "OU", "a").with_start_time(time(9));
        let g2 = ScheduleEvent::new("g2", date(14), "UT", "Baylor", "b").with_start_time(time(19));
        let conflict = Conflict::team_same_day("team-1".into(), "UT", &g1, &g2, 10.0);
        (vec![g1, g2], conflict)
    }

    #[test]
    fn test_team_swap_single_candidate() {
        let (schedule, conflict) = swap_fixture();
        let ctx = ResolutionContext::new().with_eligible_teams(["UT", "Baylor", "TCU"]);
        let attempt = TeamSwap::new().apply(schedule, &conflict, &ctx);
        let resolution = attempt.resolution.expect("should resolve");
        assert_eq!(resolution.resolution_type, ResolutionType::TeamSwap);
        // UT and the opponent Baylor are excluded; TCU is the pool.
        assert_eq!(attempt.schedule[1].home_team, "TCU");
        assert_eq!(attempt.schedule[1].away_team, "Baylor");
    }

    #[test]
    fn test_team_swap_declines_with_empty_pool() {
        let (schedule, conflict) = swap_fixture();
        let ctx = ResolutionContext::new().with_eligible_teams(["UT", "Baylor"]);
        let attempt = TeamSwap::new().apply(schedule.clone(), &conflict, &ctx);
        assert!(attempt.resolution.is_none());
        assert_eq!(attempt.schedule, schedule);
    }

    #[derive(Debug)]
    struct PickLast;

    impl SwapAdvisor for PickLast {
        fn name(&self) -> &str {
            "pick-last"
        }

        fn propose(&self, query: &SwapQuery) -> Result<String, AdvisorError> {
            query
                .candidates
                .last()
                .cloned()
                .ok_or_else(|| AdvisorError::Malformed("empty pool".into()))
        }
    }

    #[derive(Debug)]
    struct AlwaysDown;

    impl SwapAdvisor for AlwaysDown {
        fn name(&self) -> &str {
            "always-down"
        }

        fn propose(&self, _query: &SwapQuery) -> Result<String, AdvisorError> {
            Err(AdvisorError::Unavailable("connection refused".into()))
        }
    }

    #[derive(Debug)]
    struct OffPool;

    impl SwapAdvisor for OffPool {
        fn name(&self) -> &str {
            "off-pool"
        }

        fn propose(&self, _query: &SwapQuery) -> Result<String, AdvisorError> {
            Ok("Nonexistent FC".into())
        }
    }

    #[test]
    fn test_team_swap_consults_advisor() {
        let (schedule, conflict) = swap_fixture();
        let ctx = ResolutionContext::new()
            .with_eligible_teams(["UT", "Baylor", "TCU", "Tech"])
            .with_advisor(Arc::new(PickLast));
        let attempt = TeamSwap::new().apply(schedule, &conflict, &ctx);
        assert_eq!(attempt.schedule[1].home_team, "Tech");
    }

    #[test]
    fn test_team_swap_survives_advisor_failure() {
        let (schedule, conflict) = swap_fixture();
        let ctx = ResolutionContext::new()
            .with_eligible_teams(["UT", "Baylor", "TCU", "Tech"])
            .with_advisor(Arc::new(AlwaysDown));
        let attempt = TeamSwap::new().apply(schedule, &conflict, &ctx);
        // Falls back to the first candidate rather than failing.
        assert!(attempt.resolution.is_some());
        assert_eq!(attempt.schedule[1].home_team, "TCU");
    }

    #[test]
    fn test_team_swap_rejects_off_pool_answer() {
        let (schedule, conflict) = swap_fixture();
        let ctx = ResolutionContext::new()
            .with_eligible_teams(["UT", "Baylor", "TCU", "Tech"])
            .with_advisor(Arc::new(OffPool));
        let attempt = TeamSwap::new().apply(schedule, &conflict, &ctx);
        assert_eq!(attempt.schedule[1].home_team, "TCU");
    }

    #[test]
    fn test_team_swap_without_advisor_uses_first_candidate() {
        let (schedule, conflict) = swap_fixture();
        let ctx = ResolutionContext::new().with_eligible_teams(["UT", "Baylor", "TCU", "Tech"]);
        let attempt = TeamSwap::new().apply(schedule, &conflict, &ctx);
        assert_eq!(attempt.schedule[1].home_team, "TCU");
    }
}
