use crate::constants::COLLABORATOR_LANGUAGE;
use crate::error::{AppError, Result};
use crate::models::{Coordinates, PlaceCandidate, PlaceDetails};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

const NEARBY_SEARCH_BASE_URL: &str =
    "https://maps.googleapis.com/maps/api/place/nearbysearch/json";
const PLACE_DETAILS_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place/details/json";

/// Statuses the nearby search can return without it being a failure.
/// ZERO_RESULTS is an ordinary empty answer, not an error.
const STATUS_OK: &str = "OK";
const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";

/// Places collaborator seam. The live implementation talks to the Google
/// Places REST API; tests substitute fixture-backed providers.
#[async_trait]
pub trait PlaceSearch: Send + Sync {
    /// Search for places near a center point matching a keyword, restricted
    /// to one venue type.
    async fn search_nearby(
        &self,
        center: &Coordinates,
        radius_m: f64,
        keyword: &str,
        venue_type: &str,
    ) -> Result<Vec<PlaceCandidate>>;

    /// Fetch detail fields for a single place. `Ok(None)` when the
    /// collaborator has no details for the id.
    async fn place_details(&self, place_id: &str) -> Result<Option<PlaceDetails>>;
}

#[derive(Clone)]
pub struct PlacesClient {
    client: Client,
    api_key: String,
    nearby_url: String,
    details_url: String,
}

impl PlacesClient {
    pub fn new(api_key: String) -> Self {
        PlacesClient {
            client: Client::new(),
            api_key,
            nearby_url: NEARBY_SEARCH_BASE_URL.to_string(),
            details_url: PLACE_DETAILS_BASE_URL.to_string(),
        }
    }

    pub fn with_base_urls(api_key: String, nearby_url: String, details_url: String) -> Self {
        PlacesClient {
            client: Client::new(),
            api_key,
            nearby_url,
            details_url,
        }
    }

    fn convert_results(&self, results: Vec<NearbyResult>) -> Vec<PlaceCandidate> {
        results
            .into_iter()
            .filter_map(|result| {
                let location = result.geometry?.location;
                let coordinates = Coordinates::new(location.lat, location.lng).ok()?;

                Some(PlaceCandidate {
                    place_id: result.place_id?,
                    name: result.name?,
                    vicinity: result.vicinity,
                    coordinates,
                    types: result.types,
                    rating: result.rating,
                })
            })
            .collect()
    }
}

#[async_trait]
impl PlaceSearch for PlacesClient {
    async fn search_nearby(
        &self,
        center: &Coordinates,
        radius_m: f64,
        keyword: &str,
        venue_type: &str,
    ) -> Result<Vec<PlaceCandidate>> {
        let location = format!("{},{}", center.lat, center.lng);
        let radius = format!("{:.0}", radius_m);

        let response = self
            .client
            .get(&self.nearby_url)
            .query(&[
                ("location", location.as_str()),
                ("radius", radius.as_str()),
                ("keyword", keyword),
                ("type", venue_type),
                ("language", COLLABORATOR_LANGUAGE),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AppError::PlacesApi(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::PlacesApi(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let api_response: NearbySearchResponse = response
            .json()
            .await
            .map_err(|e| AppError::PlacesApi(format!("Failed to parse response: {}", e)))?;

        match api_response.status.as_str() {
            STATUS_OK => {}
            STATUS_ZERO_RESULTS => return Ok(Vec::new()),
            other => {
                return Err(AppError::PlacesApi(format!(
                    "Status {}: {}",
                    other,
                    api_response.error_message.unwrap_or_default()
                )));
            }
        }

        let candidates = self.convert_results(api_response.results);
        tracing::debug!(
            keyword = keyword,
            count = candidates.len(),
            "Nearby search for '{}' returned {} candidates",
            keyword,
            candidates.len()
        );

        Ok(candidates)
    }

    async fn place_details(&self, place_id: &str) -> Result<Option<PlaceDetails>> {
        let response = self
            .client
            .get(&self.details_url)
            .query(&[
                ("place_id", place_id),
                ("fields", "name,formatted_address"),
                ("language", COLLABORATOR_LANGUAGE),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AppError::PlacesApi(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::PlacesApi(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let api_response: DetailsResponse = response
            .json()
            .await
            .map_err(|e| AppError::PlacesApi(format!("Failed to parse response: {}", e)))?;

        if api_response.status != STATUS_OK {
            tracing::debug!(
                place_id = place_id,
                status = %api_response.status,
                "Place details unavailable for {}: {}",
                place_id, api_response.status
            );
            return Ok(None);
        }

        Ok(api_response.result)
    }
}

// Places API response types

#[derive(Debug, Deserialize)]
struct NearbySearchResponse {
    status: String,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    results: Vec<NearbyResult>,
}

#[derive(Debug, Deserialize)]
struct NearbyResult {
    place_id: Option<String>,
    name: Option<String>,
    vicinity: Option<String>,
    geometry: Option<NearbyGeometry>,
    #[serde(default)]
    types: Vec<String>,
    rating: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct NearbyGeometry {
    location: NearbyLocation,
}

#[derive(Debug, Deserialize)]
struct NearbyLocation {
    lat: f64,
    lng: f64,
}

#[derive(Debug, Deserialize)]
struct DetailsResponse {
    status: String,
    result: Option<PlaceDetails>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_results_skips_incomplete_entries() {
        let client = PlacesClient::new("test-key".to_string());
        let results = vec![
            NearbyResult {
                place_id: Some("p1".to_string()),
                name: Some("鶴岡八幡宮".to_string()),
                vicinity: Some("鎌倉市雪ノ下2-1-31".to_string()),
                geometry: Some(NearbyGeometry {
                    location: NearbyLocation {
                        lat: 35.3249,
                        lng: 139.5565,
                    },
                }),
                types: vec!["place_of_worship".to_string()],
                rating: Some(4.5),
            },
            // Missing geometry - dropped
            NearbyResult {
                place_id: Some("p2".to_string()),
                name: Some("名無し".to_string()),
                vicinity: None,
                geometry: None,
                types: vec![],
                rating: None,
            },
            // Missing place_id - dropped
            NearbyResult {
                place_id: None,
                name: Some("無番地".to_string()),
                vicinity: None,
                geometry: Some(NearbyGeometry {
                    location: NearbyLocation {
                        lat: 35.0,
                        lng: 139.0,
                    },
                }),
                types: vec![],
                rating: None,
            },
        ];

        let candidates = client.convert_results(results);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].place_id, "p1");
        assert_eq!(candidates[0].rating, Some(4.5));
    }

    #[test]
    fn test_zero_results_parsing() {
        let json = r#"{"status": "ZERO_RESULTS", "results": []}"#;
        let parsed: NearbySearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.status, "ZERO_RESULTS");
        assert!(parsed.results.is_empty());
    }
}
