//! Generic query endpoint.
//!
//! `POST /api/query` accepts `{action, table, data, where}` and answers with
//! the selected rows, `{"id": n}` for inserts or `{"ok": true}` for updates
//! and deletes.

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use projman_core::query::{QueryExecutor, QueryOutcome, QueryRequest};

use crate::{handlers::AppError, state::AppState};

/// Handle a generic query (POST /api/query).
///
/// The body is read as raw bytes so that a missing or wrong Content-Type
/// does not stop a well-formed JSON body from being accepted.
pub async fn handle_query(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, AppError> {
    let request = QueryRequest::from_slice(&body)?;
    let outcome = execute(state.executor.as_ref(), &request).await?;

    Ok(outcome_response(outcome))
}

/// Builds and runs the statement for an already parsed request.
///
/// Shared by the generic endpoint and the per-table routes.
pub async fn execute(
    executor: &dyn QueryExecutor,
    request: &QueryRequest,
) -> Result<QueryOutcome, AppError> {
    let statement = request.statement()?;
    let outcome = executor.execute(statement).await?;

    match &outcome {
        QueryOutcome::Inserted(id) => {
            tracing::info!(table = %request.table, id, "Inserted row");
        }
        QueryOutcome::Affected(rows) => {
            tracing::info!(
                action = %request.action,
                table = %request.table,
                rows,
                "Applied mutation"
            );
        }
        QueryOutcome::Rows(_) => {}
    }

    Ok(outcome)
}

/// Translates a statement outcome into the response envelope.
pub fn outcome_response(outcome: QueryOutcome) -> Response {
    match outcome {
        QueryOutcome::Rows(rows) => (StatusCode::OK, Json(rows)).into_response(),
        QueryOutcome::Inserted(id) => {
            (StatusCode::CREATED, Json(json!({ "id": id }))).into_response()
        }
        QueryOutcome::Affected(_) => {
            (StatusCode::OK, Json(json!({ "ok": true }))).into_response()
        }
    }
}
