use crate::error::{AppError, Result};
use crate::models::{DrivingRoute, RouteSearchRequest, RouteSearchResponse, SearchMode};
use crate::AppState;
use axum::{extract::State, Json};
use std::sync::Arc;

/// POST /routes/search
/// Compute a driving route and discover educational spots along it.
/// Runs against the live collaborators when configured, otherwise serves
/// the curated offline catalog.
pub async fn search_route(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RouteSearchRequest>,
) -> Result<Json<RouteSearchResponse>> {
    // Validate request
    request.validate().map_err(AppError::InvalidRequest)?;

    tracing::info!(
        origin = %request.origin,
        destination = %request.destination,
        "Route search request: {} -> {}",
        request.origin,
        request.destination
    );

    match &state.live {
        Some(live) => {
            let route = live
                .route_provider
                .compute_route(&request.origin, &request.destination)
                .await?;

            let spots = live.spot_finder.find_educational_spots(&route).await?;

            Ok(Json(RouteSearchResponse {
                route,
                spots,
                mode: SearchMode::Live,
            }))
        }
        None => {
            let (distance_text, duration_text) = state
                .catalog
                .route_summary(&request.origin, &request.destination);
            let spots = state
                .catalog
                .find_spots(&request.origin, &request.destination);

            let route = DrivingRoute::new(
                request.origin,
                request.destination,
                Vec::new(),
                distance_text,
                duration_text,
            );

            Ok(Json(RouteSearchResponse {
                route,
                spots,
                mode: SearchMode::Sample,
            }))
        }
    }
}
