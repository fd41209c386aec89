use crate::constants::*;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// API key for the directions/places collaborators. When absent the
    /// service runs in sample mode against the curated offline catalog.
    pub maps_api_key: Option<String>,
    pub spot_finder: SpotFinderConfig,
}

#[derive(Debug, Clone)]
pub struct SpotFinderConfig {
    /// Nearby-search radius (meters) around each segment center.
    pub search_radius_m: f64,

    /// Minimum rating for candidates accepted on venue type alone.
    pub min_rating: f32,

    /// Minimum pairwise separation (coordinate degrees, flat distance)
    /// between spots selected from the offline catalog.
    pub catalog_min_separation_deg: f64,
}

impl Default for SpotFinderConfig {
    fn default() -> Self {
        Self {
            search_radius_m: DEFAULT_SEARCH_RADIUS_METERS,
            min_rating: DEFAULT_MIN_RATING,
            catalog_min_separation_deg: DEFAULT_CATALOG_MIN_SEPARATION_DEG,
        }
    }
}

impl SpotFinderConfig {
    pub fn from_env() -> Result<Self, String> {
        let defaults = Self::default();

        let config = Self {
            search_radius_m: env::var("SPOT_SEARCH_RADIUS_M")
                .unwrap_or_else(|_| defaults.search_radius_m.to_string())
                .parse()
                .map_err(|_| "Invalid SPOT_SEARCH_RADIUS_M")?,

            min_rating: env::var("SPOT_MIN_RATING")
                .unwrap_or_else(|_| defaults.min_rating.to_string())
                .parse()
                .map_err(|_| "Invalid SPOT_MIN_RATING")?,

            catalog_min_separation_deg: env::var("CATALOG_MIN_SEPARATION_DEG")
                .unwrap_or_else(|_| defaults.catalog_min_separation_deg.to_string())
                .parse()
                .map_err(|_| "Invalid CATALOG_MIN_SEPARATION_DEG")?,
        };

        if config.search_radius_m <= 0.0 || config.search_radius_m > 50_000.0 {
            return Err("SPOT_SEARCH_RADIUS_M must be between 0 and 50000 meters".to_string());
        }
        if !(0.0..=5.0).contains(&config.min_rating) {
            return Err("SPOT_MIN_RATING must be between 0 and 5".to_string());
        }
        if config.catalog_min_separation_deg < 0.0 {
            return Err("CATALOG_MIN_SEPARATION_DEG must be non-negative".to_string());
        }

        Ok(config)
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenv::dotenv().ok();

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| "Invalid PORT")?,
            maps_api_key: env::var("GOOGLE_MAPS_API_KEY").ok(),
            spot_finder: SpotFinderConfig::from_env()?,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
