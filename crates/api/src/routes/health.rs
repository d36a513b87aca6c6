//! Liveness endpoint.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Routes mounted at the application root (not under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

/// GET /health -- liveness plus a database ping.
async fn health(State(state): State<AppState>) -> AppResult<Json<Value>> {
    reachly_db::health_check(&state.pool)
        .await
        .map_err(AppError::Database)?;
    Ok(Json(json!({ "status": "ok", "database": "reachable" })))
}
