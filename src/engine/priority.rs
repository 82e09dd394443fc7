//! Priority matrix.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::ConflictType;

/// Weight bounds; learning never pushes a weight outside them.
pub const MIN_WEIGHT: f64 = 1.0;
pub const MAX_WEIGHT: f64 = 10.0;

/// Per-type resolution priority weights.
///
/// Higher-weighted conflict types are resolved first. The matrix is
/// versioned: the learning routine builds a perturbed successor and
/// replaces the engine's matrix atomically, so a resolution pass reads
/// exactly one version throughout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriorityMatrix {
    pub version: u64,
    pub venue: f64,
    pub team: f64,
    pub travel: f64,
    pub rest: f64,
    pub resource: f64,
}

impl Default for PriorityMatrix {
    /// Seed weights: hard physical conflicts (venue, team) first, then
    /// travel and rest, resource conflicts last since no schedule edit
    /// can repair them.
    fn default() -> Self {
        Self {
            version: 1,
            venue: 8.0,
            team: 7.0,
            travel: 6.0,
            rest: 5.0,
            resource: 2.0,
        }
    }
}

impl PriorityMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Weight for a conflict type.
    pub fn weight(&self, conflict_type: ConflictType) -> f64 {
        match conflict_type {
            ConflictType::Venue => self.venue,
            ConflictType::Team => self.team,
            ConflictType::Travel => self.travel,
            ConflictType::Rest => self.rest,
            ConflictType::Resource => self.resource,
        }
    }

    /// A successor matrix with every weight nudged by at most
    /// `magnitude` in either direction, clamped to the weight bounds,
    /// carrying the next version number.
    pub fn perturbed<R: Rng>(&self, rng: &mut R, magnitude: f64) -> Self {
        let mut nudge =
            |w: f64| (w + rng.random_range(-magnitude..=magnitude)).clamp(MIN_WEIGHT, MAX_WEIGHT);
        Self {
            version: self.version + 1,
            venue: nudge(self.venue),
            team: nudge(self.team),
            travel: nudge(self.travel),
            rest: nudge(self.rest),
            resource: nudge(self.resource),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_ordering() {
        let m = PriorityMatrix::new();
        assert!(m.weight(ConflictType::Venue) > m.weight(ConflictType::Team));
        assert!(m.weight(ConflictType::Team) > m.weight(ConflictType::Travel));
        assert!(m.weight(ConflictType::Rest) > m.weight(ConflictType::Resource));
        assert_eq!(m.version, 1);
    }

    #[test]
    fn test_perturbed_bumps_version_and_stays_in_bounds() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut m = PriorityMatrix::new();
        for _ in 0..100 {
            m = m.perturbed(&mut rng, 5.0);
            for ty in ConflictType::all() {
                let w = m.weight(ty);
                assert!((MIN_WEIGHT..=MAX_WEIGHT).contains(&w), "weight {w} out of bounds");
            }
        }
        assert_eq!(m.version, 101);
    }

    #[test]
    fn test_perturbation_is_deterministic_per_seed() {
        let base = PriorityMatrix::new();
        let a = base.perturbed(&mut SmallRng::seed_from_u64(7), 0.5);
        let b = base.perturbed(&mut SmallRng::seed_from_u64(7), 0.5);
        assert_eq!(a.venue, b.venue);
        assert_eq!(a.resource, b.resource);
    }
}
