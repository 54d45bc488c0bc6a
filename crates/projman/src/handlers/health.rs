//! Liveness probe.

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /api/health - Reports that the process is up and where it stores data.
///
/// Does not touch the database.
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "ok": true,
        "db": state.config.db_path().display().to_string(),
    }))
}
