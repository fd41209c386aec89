use crate::models::{Coordinates, Spot};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A driving route as returned by the directions collaborator. Immutable
/// once produced; consumed only for segment sampling and display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrivingRoute {
    pub id: Uuid,
    pub origin: String,
    pub destination: String,
    /// Ordered coordinate path from origin to destination.
    pub path: Vec<Coordinates>,
    /// Human-readable summaries, e.g. "51.2 km" / "1時間 12分".
    pub distance_text: String,
    pub duration_text: String,
}

impl DrivingRoute {
    pub fn new(
        origin: String,
        destination: String,
        path: Vec<Coordinates>,
        distance_text: String,
        duration_text: String,
    ) -> Self {
        DrivingRoute {
            id: Uuid::new_v4(),
            origin,
            destination,
            path,
            distance_text,
            duration_text,
        }
    }
}

// Request/Response types for API endpoints

#[derive(Debug, Deserialize)]
pub struct RouteSearchRequest {
    pub origin: String,
    pub destination: String,
}

impl RouteSearchRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.origin.trim().is_empty() {
            return Err("origin must not be empty".to_string());
        }
        if self.destination.trim().is_empty() {
            return Err("destination must not be empty".to_string());
        }
        Ok(())
    }
}

/// Whether results came from the live collaborators or the offline catalog.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    Live,
    Sample,
}

#[derive(Debug, Serialize)]
pub struct RouteSearchResponse {
    pub route: DrivingRoute,
    pub spots: Vec<Spot>,
    pub mode: SearchMode,
}
