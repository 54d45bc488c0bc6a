//! Pure functions for mapping query errors to HTTP status codes.

use super::QueryError;

/// Maps a [`QueryError`] to an HTTP status code.
///
/// - `UnknownTable`, `UnknownColumn`, `InvalidRequest`, `MalformedPayload` -> 400
/// - `StoreConstraintViolation` -> 500
/// - `ConnectionFailed` -> 503
/// - `QueryFailed` -> 500
///
/// # Examples
///
/// ```
/// use projman_core::query::{query_error_to_status_code, QueryError};
///
/// let error = QueryError::UnknownTable("users".to_string());
/// assert_eq!(query_error_to_status_code(&error), 400);
/// ```
pub fn query_error_to_status_code(error: &QueryError) -> u16 {
    match error {
        QueryError::UnknownTable(_) => 400,
        QueryError::UnknownColumn { .. } => 400,
        QueryError::InvalidRequest(_) => 400,
        QueryError::MalformedPayload(_) => 400,
        QueryError::StoreConstraintViolation(_) => 500,
        QueryError::ConnectionFailed(_) => 503,
        QueryError::QueryFailed(_) => 500,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_map_to_400() {
        let errors = [
            QueryError::UnknownTable("users".to_string()),
            QueryError::UnknownColumn {
                table: "tasks",
                column: "nope".to_string(),
            },
            QueryError::InvalidRequest("unknown action: upsert".to_string()),
            QueryError::MalformedPayload("expected an object".to_string()),
        ];
        for error in errors {
            assert_eq!(query_error_to_status_code(&error), 400, "{error}");
        }
    }

    #[test]
    fn test_constraint_violation_maps_to_500() {
        let error = QueryError::StoreConstraintViolation("UNIQUE".to_string());
        assert_eq!(query_error_to_status_code(&error), 500);
    }

    #[test]
    fn test_connection_failed_maps_to_503() {
        let error = QueryError::ConnectionFailed("unable to open database file".to_string());
        assert_eq!(query_error_to_status_code(&error), 503);
    }

    #[test]
    fn test_query_failed_maps_to_500() {
        let error = QueryError::QueryFailed("disk I/O error".to_string());
        assert_eq!(query_error_to_status_code(&error), 500);
    }
}
