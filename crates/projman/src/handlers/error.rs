use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use projman_core::query::{query_error_to_status_code, QueryError};

/// Handler error, rendered as an `{"error": "<message>"}` envelope.
#[derive(Debug)]
pub enum AppError {
    Query(QueryError),
    NotFound(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Query(error) => StatusCode::from_u16(query_error_to_status_code(error))
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    /// Whether the caller is at fault, as opposed to the store.
    pub fn is_client_error(&self) -> bool {
        match self {
            AppError::Query(error) => error.is_client_error(),
            AppError::NotFound(_) => true,
        }
    }

    fn message(&self) -> String {
        match self {
            AppError::Query(error) => error.to_string(),
            AppError::NotFound(message) => message.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();

        if self.is_client_error() {
            tracing::warn!(status = %status, error = %message, "Rejected request");
        } else {
            tracing::error!(status = %status, error = %message, "Query failed");
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<QueryError> for AppError {
    fn from(err: QueryError) -> Self {
        Self::Query(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn test_error_envelope() {
        let response =
            AppError::from(QueryError::UnknownTable("users".to_string())).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, json!({"error": "Table not allowed: users"}));
    }

    #[test]
    fn test_status_classification() {
        let constraint = AppError::from(QueryError::StoreConstraintViolation("x".into()));
        assert_eq!(constraint.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let unavailable = AppError::from(QueryError::ConnectionFailed("x".into()));
        assert_eq!(unavailable.status(), StatusCode::SERVICE_UNAVAILABLE);

        let missing = AppError::NotFound("tasks 3 not found".into());
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_client_errors_match_4xx_statuses() {
        let errors = [
            AppError::from(QueryError::UnknownTable("users".into())),
            AppError::from(QueryError::UnknownColumn {
                table: "tasks",
                column: "owner".into(),
            }),
            AppError::from(QueryError::InvalidRequest("delete requires where".into())),
            AppError::from(QueryError::MalformedPayload("eof".into())),
            AppError::NotFound("tasks 3 not found".into()),
            AppError::from(QueryError::StoreConstraintViolation("x".into())),
            AppError::from(QueryError::ConnectionFailed("x".into())),
            AppError::from(QueryError::QueryFailed("x".into())),
        ];

        for error in errors {
            assert_eq!(
                error.is_client_error(),
                error.status().is_client_error(),
                "{error:?}"
            );
        }
    }
}
