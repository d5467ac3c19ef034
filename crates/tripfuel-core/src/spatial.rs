//! Spatial math for route segmentation and station selection.

use crate::models::GeoPoint;

/// Mean Earth radius in statute miles.
pub const EARTH_RADIUS_MI: f64 = 3958.8;

/// Meters per statute mile, for converting provider distances and radii.
pub const METERS_PER_MILE: f64 = 1609.344;

/// Great-circle distance between two points in miles.
///
/// Standard Haversine formula. Callers guarantee well-formed coordinates
/// (latitude in [-90, 90], longitude in [-180, 180]); no validation is
/// performed. Symmetric, non-negative, zero for coincident points.
pub fn haversine_miles(a: GeoPoint, b: GeoPoint) -> f64 {
    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let dphi = (b.lat - a.lat).to_radians();
    let dlambda = (b.lon - a.lon).to_radians();
    let h = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_MI * h.sqrt().atan2((1.0 - h).sqrt())
}
