//! Greedy segmentation of a route polyline into range-limited stop points.

use crate::models::{GeoPoint, StopPoint};
use crate::spatial::haversine_miles;

/// Walk the route polyline and emit a stop point every time the distance
/// accumulated since the last stop reaches the usable range.
///
/// Stops are placed at polyline vertices, never interpolated along a
/// segment. For detailed routing geometry the positional error is bounded by
/// the vertex spacing; a single segment longer than the usable range still
/// yields one stop at its terminal vertex, so the effective inter-stop
/// distance can exceed the range in that case.
///
/// Returns an empty vector for polylines with fewer than two points and for
/// routes shorter than the usable range. Pure function, idempotent.
pub fn compute_stop_points(route: &[GeoPoint], usable_range_mi: f64) -> Vec<StopPoint> {
    let mut stops = Vec::new();
    if route.len() < 2 {
        return stops;
    }

    let mut distance_since_last_stop = 0.0;
    let mut cumulative_distance = 0.0;

    for pair in route.windows(2) {
        let seg_dist = haversine_miles(pair[0], pair[1]);
        distance_since_last_stop += seg_dist;
        cumulative_distance += seg_dist;

        if distance_since_last_stop >= usable_range_mi {
            stops.push(StopPoint {
                location: pair[1],
                distance_from_start_mi: cumulative_distance,
            });
            distance_since_last_stop = 0.0;
        }
    }

    stops
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial::EARTH_RADIUS_MI;

    /// Equally spaced points running north along a meridian. Haversine along
    /// a meridian depends only on the latitude delta, so every segment has
    /// the same length.
    fn meridian_route(spacing_mi: f64, points: usize) -> Vec<GeoPoint> {
        let spacing_deg = spacing_mi / (EARTH_RADIUS_MI * 1.0_f64.to_radians());
        (0..points)
            .map(|i| GeoPoint::new(i as f64 * spacing_deg, -98.0))
            .collect()
    }

    #[test]
    fn emits_floor_of_distance_over_range_stops() {
        // 50 segments of 10 miles = 500 miles total, 65-mile range:
        // a stop fires every 7th vertex, floor(500 / 65) = 7 stops.
        let route = meridian_route(10.0, 51);
        let stops = compute_stop_points(&route, 65.0);
        assert_eq!(stops.len(), 7);

        for (i, stop) in stops.iter().enumerate() {
            let expected = 70.0 * (i + 1) as f64;
            assert!(
                (stop.distance_from_start_mi - expected).abs() < 0.5,
                "stop {} at {} miles, expected ~{}",
                i,
                stop.distance_from_start_mi,
                expected
            );
        }
    }

    #[test]
    fn stop_distances_are_strictly_increasing() {
        let route = meridian_route(17.3, 80);
        let stops = compute_stop_points(&route, 120.0);
        assert!(stops.len() > 1);
        for pair in stops.windows(2) {
            assert!(pair[0].distance_from_start_mi < pair[1].distance_from_start_mi);
        }
    }

    #[test]
    fn stops_land_on_polyline_vertices() {
        let route = meridian_route(25.0, 20);
        let stops = compute_stop_points(&route, 100.0);
        assert!(!stops.is_empty());
        for stop in &stops {
            assert!(route.contains(&stop.location));
        }
    }

    #[test]
    fn empty_for_degenerate_polylines() {
        assert!(compute_stop_points(&[], 100.0).is_empty());
        assert!(compute_stop_points(&[GeoPoint::new(40.0, -98.0)], 100.0).is_empty());
    }

    #[test]
    fn empty_when_range_exceeds_route_length() {
        // 20-mile route, 100-mile range: no stops needed.
        let route = meridian_route(10.0, 3);
        assert!(compute_stop_points(&route, 100.0).is_empty());
    }

    #[test]
    fn route_of_exactly_one_range_stops_at_final_vertex() {
        let route = meridian_route(200.0, 2);
        let range = haversine_miles(route[0], route[1]);
        let stops = compute_stop_points(&route, range);
        assert_eq!(stops.len(), 1);
        assert_eq!(stops[0].location, route[1]);
        assert!((stops[0].distance_from_start_mi - range).abs() < 1e-9);
    }

    #[test]
    fn overlong_segment_yields_single_stop_at_its_terminal_vertex() {
        // One 500-mile segment with a 200-mile range: vertex-granularity
        // placement emits exactly one stop, at the far end.
        let route = meridian_route(500.0, 2);
        let stops = compute_stop_points(&route, 200.0);
        assert_eq!(stops.len(), 1);
        assert_eq!(stops[0].location, route[1]);
        assert!(stops[0].distance_from_start_mi > 499.0);
    }

    #[test]
    fn five_hundred_mile_trip_with_two_hundred_mile_range() {
        // 500-mile route, ~200-mile usable range: stops near 200 and 400,
        // none for the final 100 miles.
        let route = meridian_route(20.0, 26);
        let stops = compute_stop_points(&route, 199.0);
        assert_eq!(stops.len(), 2);
        assert!((stops[0].distance_from_start_mi - 200.0).abs() < 0.5);
        assert!((stops[1].distance_from_start_mi - 400.0).abs() < 0.5);
    }

    #[test]
    fn idempotent_over_identical_input() {
        let route = meridian_route(12.0, 60);
        let first = compute_stop_points(&route, 90.0);
        let second = compute_stop_points(&route, 90.0);
        assert_eq!(first, second);
    }
}
