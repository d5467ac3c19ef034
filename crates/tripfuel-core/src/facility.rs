//! Nearest-station selection among search candidates.

use crate::models::{FacilityCandidate, GeoPoint};
use crate::spatial::haversine_miles;

/// Pick the candidate closest to `origin` and return it with its distance
/// in miles.
///
/// Linear scan; ties go to the first candidate in input order. Returns
/// `None` for an empty slice, which callers treat as "no station found".
pub fn select_nearest(
    origin: GeoPoint,
    candidates: &[FacilityCandidate],
) -> Option<(&FacilityCandidate, f64)> {
    let mut best: Option<(&FacilityCandidate, f64)> = None;

    for candidate in candidates {
        let dist = haversine_miles(origin, candidate.location);
        match best {
            Some((_, best_dist)) if dist >= best_dist => {}
            _ => best = Some((candidate, dist)),
        }
    }

    best
}
