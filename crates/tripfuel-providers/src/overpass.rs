//! Overpass API HTTP client for fuel-station search.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use tripfuel_core::models::AddressTags;
use tripfuel_core::spatial::METERS_PER_MILE;
use tripfuel_core::{FacilityCandidate, GeoPoint, PlanError};
use tripfuel_planner::FacilitySearch;

pub const DEFAULT_OVERPASS_BASE_URL: &str = "https://overpass-api.de";

/// HTTP client for the Overpass API, querying `amenity=fuel` nodes.
pub struct OverpassClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct OverpassResponse {
    #[serde(default)]
    elements: Vec<OverpassElement>,
}

#[derive(Debug, Deserialize)]
struct OverpassElement {
    lat: f64,
    lon: f64,
    #[serde(default)]
    tags: HashMap<String, String>,
}

impl OverpassClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.into(),
        }
    }
}

/// Overpass QL query for fuel stations around a point. The radius is
/// converted to whole meters, which is what `around` expects.
fn fuel_query(point: GeoPoint, radius_mi: f64) -> String {
    let radius_m = (radius_mi * METERS_PER_MILE).round() as i64;
    format!(
        "[out:json][timeout:25];(node[\"amenity\"=\"fuel\"](around:{},{},{}););out body;",
        radius_m, point.lat, point.lon
    )
}

fn candidate_from_element(mut element: OverpassElement) -> FacilityCandidate {
    FacilityCandidate {
        location: GeoPoint::new(element.lat, element.lon),
        name: element.tags.remove("name"),
        brand: element.tags.remove("brand"),
        address: AddressTags {
            house_number: element.tags.remove("addr:housenumber"),
            street: element.tags.remove("addr:street"),
            city: element.tags.remove("addr:city"),
            state: element.tags.remove("addr:state"),
        },
    }
}

impl FacilitySearch for OverpassClient {
    async fn search_nearby(
        &self,
        point: GeoPoint,
        radius_mi: f64,
    ) -> Result<Vec<FacilityCandidate>, PlanError> {
        let url = format!("{}/api/interpreter", self.base_url);
        let query = fuel_query(point, radius_mi);

        let response = self
            .client
            .get(&url)
            .query(&[("data", query.as_str())])
            .send()
            .await
            .map_err(|err| PlanError::service("station search", err.to_string()))?;

        if !response.status().is_success() {
            return Err(PlanError::service(
                "station search",
                format!("status {}", response.status()),
            ));
        }

        let payload: OverpassResponse = response
            .json()
            .await
            .map_err(|err| PlanError::service("station search", err.to_string()))?;

        debug!(
            lat = point.lat,
            lon = point.lon,
            stations = payload.elements.len(),
            "overpass search complete"
        );

        Ok(payload
            .elements
            .into_iter()
            .map(candidate_from_element)
            .collect())
    }
}
