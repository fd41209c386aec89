use crate::constants::COLLABORATOR_LANGUAGE;
use crate::error::{AppError, Result};
use crate::models::{Coordinates, DrivingRoute};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

const DIRECTIONS_BASE_URL: &str = "https://maps.googleapis.com/maps/api/directions/json";

/// Routing collaborator seam. The live implementation talks to the Google
/// Directions REST API; tests substitute fixture-backed providers.
#[async_trait]
pub trait RouteProvider: Send + Sync {
    /// Compute a driving route between two free-text place names.
    /// A failure here aborts the whole search — there is no partial result.
    async fn compute_route(&self, origin: &str, destination: &str) -> Result<DrivingRoute>;
}

#[derive(Clone)]
pub struct DirectionsClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl DirectionsClient {
    pub fn new(api_key: String) -> Self {
        DirectionsClient {
            client: Client::new(),
            api_key,
            base_url: DIRECTIONS_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        DirectionsClient {
            client: Client::new(),
            api_key,
            base_url,
        }
    }
}

#[async_trait]
impl RouteProvider for DirectionsClient {
    async fn compute_route(&self, origin: &str, destination: &str) -> Result<DrivingRoute> {
        tracing::debug!(
            origin = origin,
            destination = destination,
            "Directions API request: {} -> {}",
            origin,
            destination
        );

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("origin", origin),
                ("destination", destination),
                ("mode", "driving"),
                ("language", COLLABORATOR_LANGUAGE),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AppError::DirectionsApi(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!(
                status = %status,
                "Directions API HTTP error {}: {}",
                status, error_text
            );
            return Err(AppError::DirectionsApi(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let directions: DirectionsApiResponse = response
            .json()
            .await
            .map_err(|e| AppError::DirectionsApi(format!("Failed to parse response: {}", e)))?;

        if directions.status != "OK" {
            return Err(AppError::DirectionsApi(format!(
                "Status {}: {}",
                directions.status,
                directions.error_message.unwrap_or_default()
            )));
        }

        let route = directions
            .routes
            .first()
            .ok_or_else(|| AppError::DirectionsApi("No routes found".to_string()))?;
        let leg = route
            .legs
            .first()
            .ok_or_else(|| AppError::DirectionsApi("Route has no legs".to_string()))?;

        // Path assembled from step endpoints; segment sampling does not need
        // the fine-grained overview polyline.
        let mut path: Vec<Coordinates> = Vec::with_capacity(leg.steps.len() + 1);
        for step in &leg.steps {
            if let Ok(coords) = Coordinates::new(step.start_location.lat, step.start_location.lng)
            {
                path.push(coords);
            }
        }
        if let Some(last) = leg.steps.last() {
            if let Ok(coords) = Coordinates::new(last.end_location.lat, last.end_location.lng) {
                path.push(coords);
            }
        }

        if path.is_empty() {
            return Err(AppError::DirectionsApi(
                "Route has no usable path coordinates".to_string(),
            ));
        }

        tracing::debug!(
            path_points = path.len(),
            distance = %leg.distance.text,
            duration = %leg.duration.text,
            "Directions response: {} path points, {}, {}",
            path.len(), leg.distance.text, leg.duration.text
        );

        Ok(DrivingRoute::new(
            origin.to_string(),
            destination.to_string(),
            path,
            leg.distance.text.clone(),
            leg.duration.text.clone(),
        ))
    }
}

// Directions API response types

#[derive(Debug, Deserialize)]
struct DirectionsApiResponse {
    status: String,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    routes: Vec<ApiRoute>,
}

#[derive(Debug, Deserialize)]
struct ApiRoute {
    legs: Vec<ApiLeg>,
}

#[derive(Debug, Deserialize)]
struct ApiLeg {
    distance: ApiTextValue,
    duration: ApiTextValue,
    steps: Vec<ApiStep>,
}

#[derive(Debug, Deserialize)]
struct ApiTextValue {
    text: String,
}

#[derive(Debug, Deserialize)]
struct ApiStep {
    start_location: ApiLatLng,
    end_location: ApiLatLng,
}

#[derive(Debug, Deserialize)]
struct ApiLatLng {
    lat: f64,
    lng: f64,
}
