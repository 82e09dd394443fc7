//! Geographic and interval utilities.
//!
//! Great-circle distance, travel-hour estimation, and half-open interval
//! overlap. Travel estimates degrade to `None` when venue data is
//! incomplete — absence of coordinates is a skippable outcome for every
//! caller, never an error.

use crate::models::{Coordinates, VenueRegistry};

/// Mean Earth radius in miles.
const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Great-circle distance between two points (haversine formula), in miles.
pub fn haversine_miles(a: Coordinates, b: Coordinates) -> f64 {
    let lat_a = a.lat.to_radians();
    let lat_b = b.lat.to_radians();
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_MILES * h.sqrt().asin()
}

/// Great-circle distance between two venues, in miles.
///
/// `None` when either venue is unregistered or lacks coordinates.
pub fn distance_miles(from: &str, to: &str, venues: &VenueRegistry) -> Option<f64> {
    let a = venues.coordinates(from)?;
    let b = venues.coordinates(to)?;
    Some(haversine_miles(a, b))
}

/// Estimated hours to travel between two venues at the given speed.
///
/// `None` when either venue is unregistered, lacks coordinates, or the
/// speed is non-positive.
pub fn travel_hours(from: &str, to: &str, venues: &VenueRegistry, speed_mph: f64) -> Option<f64> {
    if speed_mph <= 0.0 {
        return None;
    }
    distance_miles(from, to, venues).map(|miles| miles / speed_mph)
}

/// Whether the half-open intervals `[a_start, a_end)` and
/// `[b_start, b_end)` intersect.
///
/// Symmetric; identical intervals overlap; back-to-back intervals
/// (one ending exactly where the other starts) do not.
pub fn overlaps<T: PartialOrd>(a_start: T, a_end: T, b_start: T, b_end: T) -> bool {
    a_start < b_end && b_start < a_end
}
