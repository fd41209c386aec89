use async_trait::async_trait;
use drivestudy::error::{AppError, Result};
use drivestudy::models::{Coordinates, DrivingRoute, PlaceCandidate, PlaceDetails};
use drivestudy::services::directions::RouteProvider;
use drivestudy::services::places::PlaceSearch;
use std::collections::HashMap;

/// Create a test candidate
#[allow(dead_code)]
pub fn create_candidate(
    place_id: &str,
    name: &str,
    types: &[&str],
    rating: Option<f32>,
) -> PlaceCandidate {
    PlaceCandidate {
        place_id: place_id.to_string(),
        name: name.to_string(),
        vicinity: Some(format!("{}前通り", name)),
        coordinates: Coordinates::new(35.3, 139.5).unwrap(),
        types: types.iter().map(|t| t.to_string()).collect(),
        rating,
    }
}

/// Straight-line path with `n` points, roughly Tokyo toward Kamakura
#[allow(dead_code)]
pub fn straight_path(n: usize) -> Vec<Coordinates> {
    (0..n)
        .map(|i| {
            let t = if n > 1 { i as f64 / (n - 1) as f64 } else { 0.0 };
            Coordinates::new(35.6812 - 0.36 * t, 139.7671 - 0.22 * t).unwrap()
        })
        .collect()
}

/// Places collaborator backed by a fixed keyword -> candidates table.
/// Keywords listed in `failing_keywords` return an error instead.
#[allow(dead_code)]
#[derive(Default)]
pub struct FixturePlaces {
    pub by_keyword: HashMap<String, Vec<PlaceCandidate>>,
    pub failing_keywords: Vec<String>,
    pub details: HashMap<String, PlaceDetails>,
}

#[allow(dead_code)]
impl FixturePlaces {
    pub fn with_keyword(mut self, keyword: &str, candidates: Vec<PlaceCandidate>) -> Self {
        self.by_keyword.insert(keyword.to_string(), candidates);
        self
    }

    pub fn with_failing_keyword(mut self, keyword: &str) -> Self {
        self.failing_keywords.push(keyword.to_string());
        self
    }
}

#[async_trait]
impl PlaceSearch for FixturePlaces {
    async fn search_nearby(
        &self,
        _center: &Coordinates,
        _radius_m: f64,
        keyword: &str,
        _venue_type: &str,
    ) -> Result<Vec<PlaceCandidate>> {
        if self.failing_keywords.iter().any(|k| k == keyword) {
            return Err(AppError::PlacesApi(format!(
                "fixture failure for '{}'",
                keyword
            )));
        }
        Ok(self.by_keyword.get(keyword).cloned().unwrap_or_default())
    }

    async fn place_details(&self, place_id: &str) -> Result<Option<PlaceDetails>> {
        Ok(self.details.get(place_id).cloned())
    }
}

/// Routing collaborator returning a fixed path
#[allow(dead_code)]
pub struct FixtureRoutes {
    pub path: Vec<Coordinates>,
}

#[async_trait]
impl RouteProvider for FixtureRoutes {
    async fn compute_route(&self, origin: &str, destination: &str) -> Result<DrivingRoute> {
        Ok(DrivingRoute::new(
            origin.to_string(),
            destination.to_string(),
            self.path.clone(),
            "51.2 km".to_string(),
            "1時間 12分".to_string(),
        ))
    }
}

/// Routing collaborator that always fails
#[allow(dead_code)]
pub struct FailingRoutes;

#[async_trait]
impl RouteProvider for FailingRoutes {
    async fn compute_route(&self, _origin: &str, _destination: &str) -> Result<DrivingRoute> {
        Err(AppError::DirectionsApi("fixture routing failure".to_string()))
    }
}
