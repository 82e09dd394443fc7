//! Caller-supplied venue and resource registries.
//!
//! Registries are lookup tables the caller provides to detection and
//! resolution. Missing entries are a first-class, silently-skippable
//! outcome — a venue without coordinates simply opts out of travel and
//! distance checks.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Geographic coordinates (decimal degrees).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// A venue entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Venue {
    /// Human-readable name.
    pub name: Option<String>,
    /// Location, if known. Venues without coordinates are skipped by
    /// travel and distance checks.
    pub coordinates: Option<Coordinates>,
}

impl Venue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the venue name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the venue location.
    pub fn with_coordinates(mut self, lat: f64, lon: f64) -> Self {
        self.coordinates = Some(Coordinates::new(lat, lon));
        self
    }
}

/// Venue id → venue lookup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VenueRegistry {
    venues: HashMap<String, Venue>,
}

impl VenueRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: adds a venue and returns self.
    pub fn with_venue(mut self, id: impl Into<String>, venue: Venue) -> Self {
        self.venues.insert(id.into(), venue);
        self
    }

    /// Adds a venue.
    pub fn add(&mut self, id: impl Into<String>, venue: Venue) {
        self.venues.insert(id.into(), venue);
    }

    /// Looks up a venue by id.
    pub fn get(&self, id: &str) -> Option<&Venue> {
        self.venues.get(id)
    }

    /// Coordinates for a venue, if the venue exists and has them.
    pub fn coordinates(&self, id: &str) -> Option<Coordinates> {
        self.venues.get(id).and_then(|v| v.coordinates)
    }

    /// Venue ids, sorted for deterministic iteration.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.venues.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Number of registered venues.
    pub fn len(&self) -> usize {
        self.venues.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.venues.is_empty()
    }
}

/// A resource entry (equipment, officiating crew, broadcast slot).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceSpec {
    /// Human-readable name.
    pub name: Option<String>,
    /// Units available simultaneously (default: 1).
    pub quantity: u32,
}

impl Default for ResourceSpec {
    fn default() -> Self {
        Self {
            name: None,
            quantity: 1,
        }
    }
}

impl ResourceSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the resource name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the available quantity.
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }
}

/// Resource id → spec lookup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourceRegistry {
    resources: HashMap<String, ResourceSpec>,
}

impl ResourceRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: adds a resource and returns self.
    pub fn with_resource(mut self, id: impl Into<String>, spec: ResourceSpec) -> Self {
        self.resources.insert(id.into(), spec);
        self
    }

    /// Looks up a resource by id.
    pub fn get(&self, id: &str) -> Option<&ResourceSpec> {
        self.resources.get(id)
    }

    /// Quantity for a resource, if registered.
    pub fn quantity(&self, id: &str) -> Option<u32> {
        self.resources.get(id).map(|r| r.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_venue_registry_lookup() {
        let reg = VenueRegistry::new()
            .with_venue(
                "stadium-a",
                Venue::new()
                    .with_name("Memorial Stadium")
                    .with_coordinates(30.28, -97.73),
            )
            .with_venue("stadium-b", Venue::new());

        assert!(reg.get("stadium-a").is_some());
        assert!(reg.coordinates("stadium-a").is_some());
        // Registered but no coordinates
        assert!(reg.coordinates("stadium-b").is_none());
        // Not registered
        assert!(reg.get("stadium-z").is_none());
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn test_venue_ids_sorted() {
        let reg = VenueRegistry::new()
            .with_venue("z", Venue::new())
            .with_venue("a", Venue::new())
            .with_venue("m", Venue::new());
        assert_eq!(reg.ids(), vec!["a", "m", "z"]);
    }

    #[test]
    fn test_resource_default_quantity() {
        let reg = ResourceRegistry::new()
            .with_resource("ref-crew", ResourceSpec::new())
            .with_resource("tv-truck", ResourceSpec::new().with_quantity(2));
        assert_eq!(reg.quantity("ref-crew"), Some(1));
        assert_eq!(reg.quantity("tv-truck"), Some(2));
        assert_eq!(reg.quantity("unknown"), None);
    }
}
