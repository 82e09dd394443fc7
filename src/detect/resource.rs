//! Resource booking detector.

use super::{chronological, DetectionContext};
use crate::geo::overlaps;
use crate::models::{Conflict, ScheduleEvent};
use std::collections::HashMap;

/// Flags unknown and overbooked resources.
///
/// No-ops when the context supplies no resource registry. For each game
/// that lists required resources: a resource absent from the registry is
/// a high-severity "missing" conflict; a resource whose prior overlapping
/// bookings already meet its quantity is a medium-severity "overbooked"
/// conflict, with every overlapping game named in the description.
pub fn detect_resource_conflicts(
    events: &[ScheduleEvent],
    ctx: &DetectionContext,
) -> Vec<Conflict> {
    let Some(registry) = &ctx.resources else {
        return Vec::new();
    };

    let mut conflicts = Vec::new();
    let mut bookings: HashMap<&str, Vec<usize>> = HashMap::new();
    let mut n = 0usize;

    for &i in &chronological(events) {
        let event = &events[i];
        for resource in &event.required_resources {
            let Some(spec) = registry.get(resource) else {
                n += 1;
                conflicts.push(Conflict::missing_resource(
                    format!("resource-{n}"),
                    resource,
                    event,
                ));
                continue;
            };

            let prior = bookings.entry(resource.as_str()).or_default();
            let overlapping: Vec<usize> = prior
                .iter()
                .copied()
                .filter(|&j| {
                    overlaps(
                        events[j].start_dt(),
                        events[j].end_dt(),
                        event.start_dt(),
                        event.end_dt(),
                    )
                })
                .collect();

            if overlapping.len() as u32 >= spec.quantity {
                let ids: Vec<String> = overlapping.iter().map(|&j| events[j].id.clone()).collect();
                n += 1;
                conflicts.push(Conflict::overbooked_resource(
                    format!("resource-{n}"),
                    resource,
                    event,
                    &events[overlapping[0]],
                    &ids,
                ));
            }
            prior.push(i);
        }
    }

    conflicts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ConflictSubtype, ResourceRegistry, ResourceSpec, Severity};
    use chrono::{NaiveDate, NaiveTime};

    fn game(id: &str, hour: u32, resources: &[&str]) -> ScheduleEvent {
        let mut e = ScheduleEvent::new(
            id,
            NaiveDate::from_ymd_opt(2024, 9, 14).unwrap(),
            format!("{id}-home"),
            format!("{id}-away"),
            format!("{id}-venue"),
        )
        .with_start_time(NaiveTime::from_hms_opt(hour, 0, 0).unwrap());
        for r in resources {
            e = e.with_resource(*r);
        }
        e
    }

    fn ctx_with(registry: ResourceRegistry) -> DetectionContext {
        DetectionContext::new().with_resources(registry)
    }

    #[test]
    fn test_no_registry_is_noop() {
        let events = vec![game("g1", 14, &["tv-truck"]), game("g2", 14, &["tv-truck"])];
        assert!(detect_resource_conflicts(&events, &DetectionContext::new()).is_empty());
    }

    #[test]
    fn test_missing_resource() {
        let registry = ResourceRegistry::new().with_resource("ref-crew", ResourceSpec::new());
        let events = vec![game("g1", 14, &["tv-truck"])];
        let conflicts = detect_resource_conflicts(&events, &ctx_with(registry));
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].subtype, Some(ConflictSubtype::MissingResource));
        assert_eq!(conflicts[0].severity, Severity::High);
        assert_eq!(conflicts[0].resource.as_deref(), Some("tv-truck"));
    }

    #[test]
    fn test_overbooked_single_unit() {
        let registry = ResourceRegistry::new().with_resource("tv-truck", ResourceSpec::new());
        // Both games at 14:00, each needing the single truck.
        let events = vec![game("g1", 14, &["tv-truck"]), game("g2", 14, &["tv-truck"])];
        let conflicts = detect_resource_conflicts(&events, &ctx_with(registry));
        assert_eq!(conflicts.len(), 1);
        let c = &conflicts[0];
        assert_eq!(c.subtype, Some(ConflictSubtype::OverbookedResource));
        assert_eq!(c.severity, Severity::Medium);
        assert_eq!(c.events.len(), 2);
        assert!(c.description.contains("g1"));
    }

    #[test]
    fn test_quantity_two_allows_two_concurrent() {
        let registry =
            ResourceRegistry::new().with_resource("tv-truck", ResourceSpec::new().with_quantity(2));
        let events = vec![game("g1", 14, &["tv-truck"]), game("g2", 14, &["tv-truck"])];
        assert!(detect_resource_conflicts(&events, &ctx_with(registry)).is_empty());

        // A third concurrent booking exceeds quantity 2.
        let events = vec![
            game("g1", 14, &["tv-truck"]),
            game("g2", 14, &["tv-truck"]),
            game("g3", 14, &["tv-truck"]),
        ];
        let registry =
            ResourceRegistry::new().with_resource("tv-truck", ResourceSpec::new().with_quantity(2));
        let conflicts = detect_resource_conflicts(&events, &ctx_with(registry));
        assert_eq!(conflicts.len(), 1);
        assert!(conflicts[0].description.contains("g1"));
        assert!(conflicts[0].description.contains("g2"));
    }

    #[test]
    fn test_sequential_bookings_are_fine() {
        let registry = ResourceRegistry::new().with_resource("tv-truck", ResourceSpec::new());
        // 14:00-17:00 then 18:00-21:00: no concurrency.
        let events = vec![game("g1", 14, &["tv-truck"]), game("g2", 18, &["tv-truck"])];
        assert!(detect_resource_conflicts(&events, &ctx_with(registry)).is_empty());
    }

    #[test]
    fn test_events_without_resources_ignored() {
        let registry = ResourceRegistry::new().with_resource("tv-truck", ResourceSpec::new());
        let events = vec![game("g1", 14, &[]), game("g2", 14, &[])];
        assert!(detect_resource_conflicts(&events, &ctx_with(registry)).is_empty());
    }
}
