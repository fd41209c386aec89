//! Route-based educational spot discovery.
//!
//! The pipeline samples a route's coordinate path into a fixed number of
//! segments, runs one bounded nearby search per segment and category until a
//! category yields an accepted candidate, and assembles the winners into a
//! deduplicated, segment-ordered spot list. Everything runs sequentially
//! within one request; the only mutable state is the per-search used-identity
//! set.

use crate::config::SpotFinderConfig;
use crate::constants::{SEARCH_VENUE_TYPE, SEGMENT_COUNT};
use crate::error::{AppError, Result};
use crate::models::{Coordinates, DrivingRoute, PlaceCandidate, Spot, SpotCategory};
use crate::services::keyword_picker::{KeywordPicker, SeededKeywordPicker};
use crate::services::places::PlaceSearch;
use crate::services::{labels, relevance};
use rand::Rng;
use std::collections::HashSet;
use std::sync::Arc;

pub struct SpotFinder {
    places: Arc<dyn PlaceSearch>,
    keyword_picker: Box<dyn KeywordPicker>,
    config: SpotFinderConfig,
}

impl SpotFinder {
    pub fn new(places: Arc<dyn PlaceSearch>, config: SpotFinderConfig) -> Self {
        let seed = rand::rng().random();
        Self::with_keyword_picker(places, config, Box::new(SeededKeywordPicker::new(seed)))
    }

    pub fn with_keyword_picker(
        places: Arc<dyn PlaceSearch>,
        config: SpotFinderConfig,
        keyword_picker: Box<dyn KeywordPicker>,
    ) -> Self {
        SpotFinder {
            places,
            keyword_picker,
            config,
        }
    }

    /// Map `segments` evenly spaced sample positions onto a coordinate path
    /// of length `path_len`. Segment i maps to index
    /// `round((path_len - 1) * i / (segments - 1))`, clamped to the path.
    /// Indices repeat when the path is shorter than the segment count; the
    /// identity dedup downstream absorbs the repetition.
    pub fn sample_indices(path_len: usize, segments: usize) -> Vec<usize> {
        debug_assert!(path_len >= 1);
        if segments <= 1 {
            return vec![0; segments];
        }

        (0..segments)
            .map(|segment| {
                let position =
                    (path_len - 1) as f64 * segment as f64 / (segments - 1) as f64;
                (position.round() as usize).min(path_len - 1)
            })
            .collect()
    }

    /// Discover educational spots along a route. Returns at most
    /// [`SEGMENT_COUNT`] spots, ordered by segment index, unique by place
    /// identity. An empty list is a valid outcome, not an error.
    pub async fn find_educational_spots(&self, route: &DrivingRoute) -> Result<Vec<Spot>> {
        if route.path.is_empty() {
            return Err(AppError::InvalidRequest(
                "Route has no path coordinates".to_string(),
            ));
        }

        let indices = Self::sample_indices(route.path.len(), SEGMENT_COUNT);
        tracing::info!(
            path_points = route.path.len(),
            segments = indices.len(),
            "Searching {} segments along {} path points",
            indices.len(),
            route.path.len()
        );

        let mut used_ids: HashSet<String> = HashSet::new();
        let mut spots: Vec<Spot> = Vec::new();

        for (segment, &index) in indices.iter().enumerate() {
            if spots.len() >= SEGMENT_COUNT {
                break;
            }

            let center = route.path[index];
            match self
                .find_spot_for_segment(segment, &center, &mut used_ids)
                .await
            {
                Some(spot) => {
                    tracing::info!(
                        segment = segment + 1,
                        name = %spot.name,
                        category = %spot.category,
                        "Segment {}: selected {}",
                        segment + 1,
                        spot.name
                    );
                    spots.push(spot);
                }
                None => {
                    tracing::debug!(
                        segment = segment + 1,
                        "Segment {}: no qualifying candidate",
                        segment + 1
                    );
                }
            }
        }

        tracing::info!(count = spots.len(), "Found {} educational spots", spots.len());
        Ok(spots)
    }

    /// Try categories in priority order until one yields an accepted
    /// candidate for this segment. Search failures and empty results advance
    /// to the next category; nothing is retried or surfaced.
    async fn find_spot_for_segment(
        &self,
        segment: usize,
        center: &Coordinates,
        used_ids: &mut HashSet<String>,
    ) -> Option<Spot> {
        for (category, _weight) in SpotCategory::search_priorities() {
            let keyword = self
                .keyword_picker
                .pick(segment, *category, category.keywords());

            let candidates = match self
                .places
                .search_nearby(center, self.config.search_radius_m, keyword, SEARCH_VENUE_TYPE)
                .await
            {
                Ok(candidates) => candidates,
                Err(e) => {
                    tracing::warn!(
                        segment = segment + 1,
                        category = %category,
                        keyword = keyword,
                        error = %e,
                        "Nearby search failed for '{}', trying next category",
                        keyword
                    );
                    continue;
                }
            };

            if candidates.is_empty() {
                continue;
            }

            let Some(winner) =
                relevance::select_best_candidate(candidates, used_ids, self.config.min_rating)
            else {
                continue;
            };

            used_ids.insert(winner.place_id.clone());
            return Some(self.assemble_spot(winner, *category, keyword).await);
        }

        None
    }

    /// Enrich a winning candidate into a finalized spot. The detail fetch
    /// only fills a missing address and is non-fatal.
    async fn assemble_spot(
        &self,
        candidate: PlaceCandidate,
        category: SpotCategory,
        keyword: &str,
    ) -> Spot {
        let address = match candidate.vicinity.clone() {
            Some(vicinity) => vicinity,
            None => match self.places.place_details(&candidate.place_id).await {
                Ok(Some(details)) => details.formatted_address.unwrap_or_default(),
                Ok(None) => String::new(),
                Err(e) => {
                    tracing::debug!(
                        place_id = %candidate.place_id,
                        error = %e,
                        "Place details lookup failed, leaving address empty"
                    );
                    String::new()
                }
            },
        };

        Spot {
            description: labels::describe(&candidate.name, category, keyword),
            historical_period: labels::historical_period(&candidate.name, keyword).to_string(),
            significance: category.significance().to_string(),
            place_id: candidate.place_id,
            name: candidate.name,
            address,
            coordinates: candidate.coordinates,
            category,
        }
    }
}
