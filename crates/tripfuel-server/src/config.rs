//! Server configuration from environment.

use anyhow::Context;
use std::env;

use tripfuel_planner::DEFAULT_SEARCH_RADIUS_MI;
use tripfuel_providers::ors::DEFAULT_ORS_BASE_URL;
use tripfuel_providers::overpass::DEFAULT_OVERPASS_BASE_URL;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    pub ors_api_key: String,
    pub ors_base_url: String,
    pub overpass_base_url: String,
    pub search_radius_mi: f64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server_port: env::var("TRIPFUEL_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3000),
            ors_api_key: env::var("ORS_API_KEY").context("ORS_API_KEY must be set")?,
            ors_base_url: env::var("ORS_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_ORS_BASE_URL.to_string()),
            overpass_base_url: env::var("OVERPASS_URL")
                .unwrap_or_else(|_| DEFAULT_OVERPASS_BASE_URL.to_string()),
            search_radius_mi: env::var("SEARCH_RADIUS_MI")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_SEARCH_RADIUS_MI),
        })
    }
}
