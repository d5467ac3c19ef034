//! Core data models for trip planning.

use serde::{Deserialize, Serialize};

/// Name used when a station has neither a `name` nor a `brand` tag.
pub const GENERIC_STATION_NAME: &str = "Gas station";

/// Address shown when a station carries no usable address tags.
pub const ADDRESS_NOT_AVAILABLE: &str = "Address not available";

/// Name shown when no station was found near a stop point.
pub const STATION_NOT_FOUND_NAME: &str = "Gas station not found nearby";

/// Advice shown in place of an address when no station was found.
pub const STATION_NOT_FOUND_ADDRESS: &str =
    "Try stopping a bit earlier or later along the route.";

/// A geographic coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// An ideal refueling location computed purely from route geometry.
///
/// One per usable-range interval, ordered by increasing distance from the
/// route origin. Not mutated after segmentation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StopPoint {
    pub location: GeoPoint,
    pub distance_from_start_mi: f64,
}

/// OSM-style address components attached to a station.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressTags {
    #[serde(default)]
    pub house_number: Option<String>,
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

/// A fuel station returned by the facility search within radius of a stop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityCandidate {
    pub location: GeoPoint,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub address: AddressTags,
}

impl FacilityCandidate {
    /// Display name: tagged name, else brand, else a generic label.
    pub fn display_name(&self) -> String {
        self.name
            .as_deref()
            .or(self.brand.as_deref())
            .unwrap_or(GENERIC_STATION_NAME)
            .to_string()
    }

    /// Display address: "house_number street, city, state" from whichever
    /// components are present, joined by ", ". Empty tag values count as
    /// absent.
    pub fn display_address(&self) -> String {
        let mut parts: Vec<String> = Vec::new();

        let street_line = format!(
            "{} {}",
            self.address.house_number.as_deref().unwrap_or(""),
            self.address.street.as_deref().unwrap_or(""),
        );
        let street_line = street_line.trim();
        if !street_line.is_empty() {
            parts.push(street_line.to_string());
        }
        if let Some(city) = self.address.city.as_deref().filter(|s| !s.is_empty()) {
            parts.push(city.to_string());
        }
        if let Some(state) = self.address.state.as_deref().filter(|s| !s.is_empty()) {
            parts.push(state.to_string());
        }

        if parts.is_empty() {
            ADDRESS_NOT_AVAILABLE.to_string()
        } else {
            parts.join(", ")
        }
    }
}

/// Outcome of the nearest-station search for a single stop point.
#[derive(Debug, Clone, PartialEq)]
pub enum NearestFacility {
    /// A station was found; `distance_mi` is the offset from the ideal stop.
    Found {
        candidate: FacilityCandidate,
        distance_mi: f64,
    },
    /// Nothing within the search radius, or the lookup failed.
    NotFound,
}

/// One annotated fuel stop, the planner's terminal output.
///
/// Results keep the 1-based index assigned at segmentation time and the same
/// ordering as their source stop points. `distance_offset_mi` is `None`
/// exactly when no station was found, in which case `name` and `address`
/// carry fallback text and `location` is the stop point itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopResult {
    pub index: usize,
    pub name: String,
    pub address: String,
    pub location: GeoPoint,
    pub distance_from_start_mi: f64,
    pub distance_offset_mi: Option<f64>,
}

impl StopResult {
    /// Build the result record for a stop from its search outcome.
    pub fn from_outcome(index: usize, stop: &StopPoint, outcome: NearestFacility) -> Self {
        match outcome {
            NearestFacility::Found {
                candidate,
                distance_mi,
            } => Self {
                index,
                name: candidate.display_name(),
                address: candidate.display_address(),
                location: candidate.location,
                distance_from_start_mi: stop.distance_from_start_mi,
                distance_offset_mi: Some(distance_mi),
            },
            NearestFacility::NotFound => Self {
                index,
                name: STATION_NOT_FOUND_NAME.to_string(),
                address: STATION_NOT_FOUND_ADDRESS.to_string(),
                location: stop.location,
                distance_from_start_mi: stop.distance_from_start_mi,
                distance_offset_mi: None,
            },
        }
    }
}
