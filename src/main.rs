use axum::Router;
use drivestudy::config::Config;
use drivestudy::services::catalog::SpotCatalog;
use drivestudy::services::directions::DirectionsClient;
use drivestudy::services::places::PlacesClient;
use drivestudy::services::spot_finder::SpotFinder;
use drivestudy::{AppState, LiveSearch};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "drivestudy=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| format!("Failed to load configuration: {}", e))?;

    tracing::info!("Starting Driving Study API server");
    tracing::info!("Configuration loaded successfully");

    // Initialize collaborators: live clients when a key is configured,
    // offline catalog mode otherwise
    let live = match config.maps_api_key.clone() {
        Some(api_key) => {
            tracing::info!("Maps API key configured, running in live mode");
            let route_provider = Arc::new(DirectionsClient::new(api_key.clone()));
            let places = Arc::new(PlacesClient::new(api_key));
            let spot_finder = SpotFinder::new(places, config.spot_finder.clone());
            Some(LiveSearch {
                route_provider,
                spot_finder,
            })
        }
        None => {
            tracing::warn!(
                "GOOGLE_MAPS_API_KEY not set, running in sample mode against the offline catalog"
            );
            None
        }
    };

    // Create application state
    let state = Arc::new(AppState {
        live,
        catalog: SpotCatalog::new(config.spot_finder.catalog_min_separation_deg),
    });

    // Build router with CORS and tracing
    let app = Router::new()
        .nest("/api/v1", drivestudy::routes::create_router(state))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.server_address();
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
