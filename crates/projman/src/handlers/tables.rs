//! Per-table routes.
//!
//! REST-style wrappers over the generic query path: each handler builds a
//! [`QueryRequest`] and hands it to [`execute`], so table and column
//! validation, statement building and execution are the same as for
//! `POST /api/query`.

use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Map, Value};

use projman_core::query::{guard_table, Action, QueryError, QueryOutcome, QueryRequest};
use projman_core::schema::Table;

use crate::{
    handlers::{
        query::{execute, outcome_response},
        AppError,
    },
    state::AppState,
};

fn table_from_path(path: Result<Path<String>, PathRejection>) -> Result<Table, AppError> {
    let Path(name) = path.map_err(|e| QueryError::InvalidRequest(e.body_text()))?;
    Ok(guard_table(&name)?)
}

fn row_from_path(
    path: Result<Path<(String, i64)>, PathRejection>,
) -> Result<(Table, i64), AppError> {
    let Path((name, id)) = path.map_err(|e| QueryError::InvalidRequest(e.body_text()))?;
    Ok((guard_table(&name)?, id))
}

fn id_filter(id: i64) -> Map<String, Value> {
    let mut filter = Map::new();
    filter.insert("id".to_string(), Value::from(id));
    filter
}

/// Parses a request body that must be a JSON object of column values.
fn object_body(body: &[u8]) -> Result<Map<String, Value>, QueryError> {
    match serde_json::from_slice(body) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(QueryError::MalformedPayload(
            "request body must be a JSON object".to_string(),
        )),
        Err(e) => Err(QueryError::MalformedPayload(e.to_string())),
    }
}

fn not_found(table: Table, id: i64) -> AppError {
    AppError::NotFound(format!("{table} {id} not found"))
}

/// List rows (GET /api/tables/{table}).
///
/// Query-string pairs become equality filters, e.g. `?list_id=3`.
pub async fn list_rows(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let table = table_from_path(path)?;
    let filter: Map<String, Value> = params
        .into_iter()
        .map(|(column, value)| (column, Value::String(value)))
        .collect();

    let request = QueryRequest::new(Action::Select, table).with_filter(filter);
    let outcome = execute(state.executor.as_ref(), &request).await?;

    Ok(outcome_response(outcome))
}

/// Create a row (POST /api/tables/{table}).
pub async fn create_row(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> Result<Response, AppError> {
    let table = table_from_path(path)?;
    let data = object_body(&body)?;

    let request = QueryRequest::new(Action::Insert, table).with_data(data);
    let outcome = execute(state.executor.as_ref(), &request).await?;

    Ok(outcome_response(outcome))
}

/// Get a single row by id (GET /api/tables/{table}/{id}).
pub async fn get_row(
    State(state): State<AppState>,
    path: Result<Path<(String, i64)>, PathRejection>,
) -> Result<Response, AppError> {
    let (table, id) = row_from_path(path)?;

    let request = QueryRequest::new(Action::Select, table).with_filter(id_filter(id));
    match execute(state.executor.as_ref(), &request).await? {
        QueryOutcome::Rows(rows) => rows
            .into_iter()
            .next()
            .map(|row| (StatusCode::OK, Json(row)).into_response())
            .ok_or_else(|| not_found(table, id)),
        other => Ok(outcome_response(other)),
    }
}

/// Update a row by id (PUT/PATCH /api/tables/{table}/{id}).
///
/// Only the supplied columns change.
pub async fn update_row(
    State(state): State<AppState>,
    path: Result<Path<(String, i64)>, PathRejection>,
    body: Bytes,
) -> Result<Response, AppError> {
    let (table, id) = row_from_path(path)?;
    let data = object_body(&body)?;

    let request = QueryRequest::new(Action::Update, table)
        .with_data(data)
        .with_filter(id_filter(id));
    mutation_response(execute(state.executor.as_ref(), &request).await?, table, id)
}

/// Delete a row by id (DELETE /api/tables/{table}/{id}).
pub async fn delete_row(
    State(state): State<AppState>,
    path: Result<Path<(String, i64)>, PathRejection>,
) -> Result<Response, AppError> {
    let (table, id) = row_from_path(path)?;

    let request = QueryRequest::new(Action::Delete, table).with_filter(id_filter(id));
    mutation_response(execute(state.executor.as_ref(), &request).await?, table, id)
}

/// A by-id mutation that touched nothing means the row does not exist.
fn mutation_response(outcome: QueryOutcome, table: Table, id: i64) -> Result<Response, AppError> {
    match outcome {
        QueryOutcome::Affected(0) => Err(not_found(table, id)),
        QueryOutcome::Affected(_) => Ok(Json(json!({ "ok": true })).into_response()),
        other => Ok(outcome_response(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_body() {
        let map = object_body(br##"{"name":"Ana","color":"#fff"}"##).unwrap();
        assert_eq!(map.len(), 2);

        assert!(matches!(
            object_body(b"[1]"),
            Err(QueryError::MalformedPayload(_))
        ));
        assert!(matches!(
            object_body(b"{"),
            Err(QueryError::MalformedPayload(_))
        ));
    }

    #[test]
    fn test_id_filter() {
        let filter = id_filter(5);
        assert_eq!(filter.get("id"), Some(&Value::from(5)));
        assert_eq!(filter.len(), 1);
    }

    #[test]
    fn test_zero_affected_is_not_found() {
        let err = mutation_response(QueryOutcome::Affected(0), Table::Tasks, 3).unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref m) if m == "tasks 3 not found"));

        let ok = mutation_response(QueryOutcome::Affected(1), Table::Tasks, 3).unwrap();
        assert_eq!(ok.status(), StatusCode::OK);
    }
}
