//! Shared server state: provider clients and planning settings.

use tripfuel_providers::{OrsClient, OverpassClient};

use crate::config::Config;

pub struct AppState {
    pub ors: OrsClient,
    pub overpass: OverpassClient,
    pub search_radius_mi: f64,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            ors: OrsClient::new(config.ors_base_url.clone(), config.ors_api_key.clone()),
            overpass: OverpassClient::new(config.overpass_base_url.clone()),
            search_radius_mi: config.search_radius_mi,
        }
    }
}
