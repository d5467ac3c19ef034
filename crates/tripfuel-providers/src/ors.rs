//! OpenRouteService API HTTP client (geocoding and driving directions).

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use tripfuel_core::spatial::METERS_PER_MILE;
use tripfuel_core::{GeoPoint, PlanError};
use tripfuel_planner::{DrivingRoute, GeocodedPlace, Geocoder, RouteService};

pub const DEFAULT_ORS_BASE_URL: &str = "https://api.openrouteservice.org";

/// HTTP client for the OpenRouteService geocoding and directions APIs.
pub struct OrsClient {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    features: Vec<GeocodeFeature>,
}

#[derive(Debug, Deserialize)]
struct GeocodeFeature {
    geometry: PointGeometry,
    #[serde(default)]
    properties: GeocodeProperties,
}

#[derive(Debug, Deserialize)]
struct PointGeometry {
    /// GeoJSON order: [lon, lat].
    coordinates: [f64; 2],
}

#[derive(Debug, Default, Deserialize)]
struct GeocodeProperties {
    #[serde(default)]
    label: Option<String>,
}

impl OrsClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(10))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

fn parse_route_feature(feature: &Value) -> Result<DrivingRoute, PlanError> {
    let coords = feature
        .pointer("/geometry/coordinates")
        .and_then(Value::as_array)
        .ok_or_else(|| PlanError::service("routing", "malformed route geometry"))?;

    let mut polyline = Vec::with_capacity(coords.len());
    for pair in coords {
        let lon = pair.get(0).and_then(Value::as_f64);
        let lat = pair.get(1).and_then(Value::as_f64);
        match (lat, lon) {
            (Some(lat), Some(lon)) => polyline.push(GeoPoint::new(lat, lon)),
            _ => return Err(PlanError::service("routing", "malformed route coordinate")),
        }
    }

    let dist_meters = feature
        .pointer("/properties/summary/distance")
        .and_then(Value::as_f64)
        .ok_or_else(|| PlanError::service("routing", "missing route distance"))?;

    Ok(DrivingRoute {
        polyline,
        total_distance_mi: dist_meters / METERS_PER_MILE,
        geometry: feature.clone(),
    })
}

impl Geocoder for OrsClient {
    async fn geocode(&self, text: &str) -> Result<GeocodedPlace, PlanError> {
        let url = format!("{}/geocode/search", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("text", text),
                ("size", "1"),
            ])
            .send()
            .await
            .map_err(|err| PlanError::service("geocoding", err.to_string()))?;

        if !response.status().is_success() {
            return Err(PlanError::service(
                "geocoding",
                format!("status {} for {}", response.status(), text),
            ));
        }

        let payload: GeocodeResponse = response
            .json()
            .await
            .map_err(|err| PlanError::service("geocoding", err.to_string()))?;

        let Some(feature) = payload.features.into_iter().next() else {
            return Err(PlanError::LocationNotFound(text.to_string()));
        };

        let [lon, lat] = feature.geometry.coordinates;
        Ok(GeocodedPlace {
            location: GeoPoint::new(lat, lon),
            label: feature
                .properties
                .label
                .unwrap_or_else(|| text.to_string()),
        })
    }
}

impl RouteService for OrsClient {
    async fn route(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
    ) -> Result<DrivingRoute, PlanError> {
        let url = format!("{}/v2/directions/driving-car/geojson", self.base_url);
        let body = serde_json::json!({
            "coordinates": [
                [origin.lon, origin.lat],
                [destination.lon, destination.lat],
            ],
        });

        let response = self
            .client
            .post(&url)
            .header("Authorization", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|err| PlanError::service("routing", err.to_string()))?;

        if !response.status().is_success() {
            return Err(PlanError::service(
                "routing",
                format!("status {}", response.status()),
            ));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|err| PlanError::service("routing", err.to_string()))?;

        let feature = payload
            .get("features")
            .and_then(Value::as_array)
            .and_then(|features| features.first())
            .ok_or(PlanError::NoRoute)?;

        parse_route_feature(feature)
    }
}
