pub mod health;
pub mod search;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/routes/search", post(search::search_route))
        .route("/health", get(health::health_check))
        .with_state(state)
}
