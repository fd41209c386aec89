use crate::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

/// GET /health
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    let mode = if state.live.is_some() { "live" } else { "sample" };
    Json(json!({
        "status": "healthy",
        "mode": mode,
    }))
}
