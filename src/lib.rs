// Library exports for testing and reusability

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use error::{AppError, Result};

use services::catalog::SpotCatalog;
use services::directions::RouteProvider;
use services::spot_finder::SpotFinder;
use std::sync::Arc;

/// Live collaborator bundle: routing plus segment-based spot discovery.
pub struct LiveSearch {
    pub route_provider: Arc<dyn RouteProvider>,
    pub spot_finder: SpotFinder,
}

// App state for sharing across the application
pub struct AppState {
    /// Present when a maps API key is configured; otherwise requests are
    /// served from the offline catalog.
    pub live: Option<LiveSearch>,
    pub catalog: SpotCatalog,
}
