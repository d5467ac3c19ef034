//! HTTP clients for the planner's external collaborators.

pub mod ors;
pub mod overpass;

pub use ors::OrsClient;
pub use overpass::OverpassClient;
