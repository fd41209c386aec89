use crate::models::{Coordinates, SpotCategory};
use serde::{Deserialize, Serialize};

/// A vetted, labeled point of interest selected as a segment's winner.
/// Created once per segment by the spot assembler, immutable afterward, and
/// scoped to a single route search — spots are never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spot {
    pub place_id: String,
    pub name: String,
    pub address: String,
    pub coordinates: Coordinates,
    pub description: String,
    pub category: SpotCategory,
    pub historical_period: String,
    pub significance: String,
}
