//! Stable application-wide constants.
//!
//! Values here are structural invariants, heuristic coefficients, and default
//! fallbacks for env-var-based configuration. They should rarely change.
//! For tuning knobs that benefit from runtime experimentation, see
//! [`SpotFinderConfig`](crate::config::SpotFinderConfig) instead.

// --- Server defaults (used when HOST / PORT env vars are absent) ---

/// Default bind address for the HTTP server.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default port for the HTTP server.
pub const DEFAULT_PORT: &str = "3000";

// --- Route segmentation ---

/// Number of evenly spaced sample positions along a route's coordinate path.
/// At most one spot is selected per segment, so this also bounds the length
/// of the final spot list.
pub const SEGMENT_COUNT: usize = 10;

// --- Nearby-search defaults ---

/// Default nearby-search radius (meters) around each segment center.
/// Segment centers are geographically sparse on long routes, so the radius
/// is wide. Overridden by `SPOT_SEARCH_RADIUS_M`.
pub const DEFAULT_SEARCH_RADIUS_METERS: f64 = 8_000.0;
/// Venue type the nearby search is restricted to.
pub const SEARCH_VENUE_TYPE: &str = "tourist_attraction";
/// Language for collaborator requests. Place names, addresses, and the
/// derived labels are all Japanese-history domain content.
pub const COLLABORATOR_LANGUAGE: &str = "ja";

// --- Relevance filter defaults ---

/// Minimum collaborator rating for candidates accepted on venue type alone.
/// Candidates whose name carries a high-value marker skip this bar.
/// Overridden by `SPOT_MIN_RATING`.
pub const DEFAULT_MIN_RATING: f32 = 4.0;
/// Multiplier applied to a candidate's rating when computing its score.
pub const RATING_SCORE_MULTIPLIER: f32 = 5.0;

// --- Offline catalog selection ---

/// Default minimum pairwise separation between selected catalog spots,
/// measured as flat Euclidean distance in coordinate degrees (~1 km).
/// Overridden by `CATALOG_MIN_SEPARATION_DEG`.
pub const DEFAULT_CATALOG_MIN_SEPARATION_DEG: f64 = 0.01;
