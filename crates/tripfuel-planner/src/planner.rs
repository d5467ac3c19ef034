//! Trip planning: validation, endpoint resolution, segmentation, and the
//! per-stop station fan-out.

use futures::future::join_all;
use futures::try_join;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use tripfuel_core::models::{NearestFacility, StopPoint, StopResult};
use tripfuel_core::{compute_stop_points, select_nearest, PlanError};

use crate::traits::{FacilitySearch, GeocodedPlace, Geocoder, RouteService};

/// Trips with a smaller usable range are rejected before any network call;
/// below this floor the vertex-granularity segmentation error gets
/// proportionally large.
pub const MIN_USABLE_RANGE_MI: f64 = 30.0;

/// Station search radius around each stop point (the source used 8000 m).
pub const DEFAULT_SEARCH_RADIUS_MI: f64 = 5.0;

/// A trip planning request as entered by the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripRequest {
    pub origin: String,
    pub destination: String,
    pub range_mi: f64,
    #[serde(default)]
    pub reserve_mi: f64,
}

/// The complete planning result served to rendering layers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripPlan {
    pub origin: GeocodedPlace,
    pub destination: GeocodedPlace,
    pub total_distance_mi: f64,
    pub stops: Vec<StopResult>,
    /// Raw route GeoJSON, passed through for map display.
    pub geometry: serde_json::Value,
}

impl TripRequest {
    /// Validate the request and return the usable range in miles.
    pub fn usable_range_mi(&self) -> Result<f64, PlanError> {
        // Comparisons are written so that NaN inputs fail them.
        if self.origin.trim().is_empty()
            || self.destination.trim().is_empty()
            || !(self.range_mi > 0.0)
        {
            return Err(PlanError::Validation(
                "Please fill in origin, destination, and a valid range.".to_string(),
            ));
        }

        if !(self.reserve_mi >= 0.0 && self.reserve_mi < self.range_mi) {
            return Err(PlanError::Validation(
                "Reserve buffer must be less than the range per tank.".to_string(),
            ));
        }

        let usable = self.range_mi - self.reserve_mi;
        if !(usable >= MIN_USABLE_RANGE_MI) {
            return Err(PlanError::Validation(
                "Usable range is too small. Increase range or decrease reserve.".to_string(),
            ));
        }

        Ok(usable)
    }
}

/// Look up the nearest station for every stop point.
///
/// Lookups run concurrently; results come back in stop order regardless of
/// completion order. An empty or failed lookup degrades that one stop to a
/// not-found result and never aborts the rest of the batch.
pub async fn plan_stops<F: FacilitySearch>(
    search: &F,
    stop_points: &[StopPoint],
    radius_mi: f64,
) -> Vec<StopResult> {
    let lookups = stop_points.iter().enumerate().map(|(idx, stop)| async move {
        let outcome = match search.search_nearby(stop.location, radius_mi).await {
            Ok(candidates) => match select_nearest(stop.location, &candidates) {
                Some((candidate, distance_mi)) => NearestFacility::Found {
                    candidate: candidate.clone(),
                    distance_mi,
                },
                None => NearestFacility::NotFound,
            },
            Err(err) => {
                warn!(stop = idx + 1, error = %err, "station lookup failed");
                NearestFacility::NotFound
            }
        };
        StopResult::from_outcome(idx + 1, stop, outcome)
    });

    join_all(lookups).await
}

/// Plan a full trip: geocode both endpoints concurrently, fetch the driving
/// route, segment it by usable range, and annotate each stop with its
/// nearest station.
///
/// Validation, geocoding, and routing failures abort the whole plan with no
/// partial results. An empty stop list is a valid plan (no stops needed).
pub async fn plan_trip<G, R, F>(
    geocoder: &G,
    router: &R,
    search: &F,
    request: &TripRequest,
    search_radius_mi: f64,
) -> Result<TripPlan, PlanError>
where
    G: Geocoder,
    R: RouteService,
    F: FacilitySearch,
{
    let usable_range_mi = request.usable_range_mi()?;

    let (origin, destination) = try_join!(
        geocoder.geocode(request.origin.trim()),
        geocoder.geocode(request.destination.trim()),
    )?;

    let route = router.route(origin.location, destination.location).await?;
    debug!(
        total_distance_mi = route.total_distance_mi,
        points = route.polyline.len(),
        "route fetched"
    );

    let stop_points = compute_stop_points(&route.polyline, usable_range_mi);
    let stops = plan_stops(search, &stop_points, search_radius_mi).await;

    Ok(TripPlan {
        origin,
        destination,
        total_distance_mi: route.total_distance_mi,
        stops,
        geometry: route.geometry,
    })
}
