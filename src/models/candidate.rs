use crate::models::Coordinates;
use serde::{Deserialize, Serialize};

/// A raw nearby-search result, not yet vetted. Scoped to one segment's
/// search; candidates that survive the relevance filter become [`Spot`]s.
///
/// [`Spot`]: crate::models::Spot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceCandidate {
    /// Opaque identity assigned by the places collaborator.
    pub place_id: String,
    pub name: String,
    /// Short address line as returned by the nearby search.
    pub vicinity: Option<String>,
    pub coordinates: Coordinates,
    /// Venue-type tags, e.g. "museum", "place_of_worship".
    pub types: Vec<String>,
    /// User rating 0.0-5.0 when the collaborator has one.
    pub rating: Option<f32>,
}

impl PlaceCandidate {
    pub fn has_type(&self, venue_type: &str) -> bool {
        self.types.iter().any(|t| t == venue_type)
    }
}

/// Detail record fetched for a winning candidate. Only the fields the spot
/// assembler consumes.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceDetails {
    pub name: Option<String>,
    pub formatted_address: Option<String>,
}
