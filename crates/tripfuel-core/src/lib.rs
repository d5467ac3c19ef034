pub mod error;
pub mod facility;
pub mod models;
pub mod segmenter;
pub mod spatial;

pub use error::PlanError;
pub use facility::select_nearest;
pub use models::{
    AddressTags, FacilityCandidate, GeoPoint, NearestFacility, StopPoint, StopResult,
};
pub use segmenter::compute_stop_points;
pub use spatial::haversine_miles;
