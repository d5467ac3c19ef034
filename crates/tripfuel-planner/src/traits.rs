//! Collaborator capabilities the planner depends on.
//!
//! The planner never talks to the network itself; it is generic over these
//! traits so the HTTP clients in `tripfuel-providers` and plain in-memory
//! mocks are interchangeable.

use std::future::Future;

use serde::{Deserialize, Serialize};
use tripfuel_core::{FacilityCandidate, GeoPoint, PlanError};

/// A resolved place: coordinates plus a human-readable label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodedPlace {
    pub location: GeoPoint,
    pub label: String,
}

/// A driving route between two geocoded endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrivingRoute {
    /// Route vertices, index 0 at the origin end.
    pub polyline: Vec<GeoPoint>,
    pub total_distance_mi: f64,
    /// Raw GeoJSON feature from the routing service, carried opaquely for
    /// rendering layers.
    pub geometry: serde_json::Value,
}

/// Resolves free-form place text to a single location.
pub trait Geocoder {
    fn geocode(
        &self,
        text: &str,
    ) -> impl Future<Output = Result<GeocodedPlace, PlanError>> + Send;
}

/// Fetches a driving route between two points.
pub trait RouteService {
    fn route(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
    ) -> impl Future<Output = Result<DrivingRoute, PlanError>> + Send;
}

/// Searches for fuel stations within a radius of a point. May return an
/// empty vector; errors are absorbed per stop by the orchestrator.
pub trait FacilitySearch {
    fn search_nearby(
        &self,
        point: GeoPoint,
        radius_mi: f64,
    ) -> impl Future<Output = Result<Vec<FacilityCandidate>, PlanError>> + Send;
}
