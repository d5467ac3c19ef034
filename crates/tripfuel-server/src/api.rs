//! REST API routes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use std::sync::Arc;

use tripfuel_core::PlanError;
use tripfuel_planner::{plan_trip, TripPlan, TripRequest};

use crate::state::AppState;

/// Create the API router.
pub fn create_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/v1/trips/plan", post(plan_trip_handler))
}

struct ApiError(PlanError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            PlanError::Validation(_) => StatusCode::BAD_REQUEST,
            PlanError::LocationNotFound(_) | PlanError::NoRoute => StatusCode::NOT_FOUND,
            PlanError::Service { .. } => StatusCode::BAD_GATEWAY,
        };
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

async fn plan_trip_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<TripRequest>,
) -> Result<Json<TripPlan>, ApiError> {
    tracing::info!(
        origin = %request.origin,
        destination = %request.destination,
        range_mi = request.range_mi,
        "planning trip"
    );

    let plan = plan_trip(
        &state.ors,
        &state.ors,
        &state.overpass,
        &request,
        state.search_radius_mi,
    )
    .await
    .map_err(ApiError)?;

    tracing::info!(
        total_distance_mi = plan.total_distance_mi,
        stops = plan.stops.len(),
        "trip planned"
    );

    Ok(Json(plan))
}
