pub mod planner;
pub mod traits;

pub use planner::{
    plan_stops, plan_trip, TripPlan, TripRequest, DEFAULT_SEARCH_RADIUS_MI, MIN_USABLE_RANGE_MI,
};
pub use traits::{DrivingRoute, FacilitySearch, GeocodedPlace, Geocoder, RouteService};
