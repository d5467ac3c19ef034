//! Error taxonomy for trip planning.

use thiserror::Error;

/// Failures that abort a planning attempt.
///
/// Validation and endpoint-resolution failures are fatal to the whole plan;
/// per-stop station lookups never surface here because the orchestrator
/// downgrades them to not-found results.
#[derive(Debug, Error)]
pub enum PlanError {
    /// Malformed or missing input, rejected before any network call.
    #[error("{0}")]
    Validation(String),

    /// Geocoding resolved zero results for a place string.
    #[error("Location not found: {0}")]
    LocationNotFound(String),

    /// The routing service found no route between the endpoints.
    #[error("No route found. Check locations and try again.")]
    NoRoute,

    /// Transport or HTTP failure talking to an external service.
    #[error("{service} request failed: {message}")]
    Service {
        service: &'static str,
        message: String,
    },
}

impl PlanError {
    pub fn service(service: &'static str, message: impl Into<String>) -> Self {
        Self::Service {
            service,
            message: message.into(),
        }
    }
}
