use thiserror::Error;

/// Errors that can occur while parsing, building or executing a query.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Table not allowed: {0}")]
    UnknownTable(String),
    #[error("Unknown column for {table}: {column}")]
    UnknownColumn { table: &'static str, column: String },
    #[error("{0}")]
    InvalidRequest(String),
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),
    #[error("Constraint violation: {0}")]
    StoreConstraintViolation(String),
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl QueryError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        QueryError::InvalidRequest(message.into())
    }

    /// Whether the caller caused the error (as opposed to the store).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            QueryError::UnknownTable(_)
                | QueryError::UnknownColumn { .. }
                | QueryError::InvalidRequest(_)
                | QueryError::MalformedPayload(_)
        )
    }
}

/// Result type for query operations.
pub type Result<T> = std::result::Result<T, QueryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_table_names_the_table() {
        let error = QueryError::UnknownTable("users".to_string());
        assert_eq!(error.to_string(), "Table not allowed: users");
    }

    #[test]
    fn test_unknown_column_display() {
        let error = QueryError::UnknownColumn {
            table: "tasks",
            column: "password".to_string(),
        };
        assert_eq!(error.to_string(), "Unknown column for tasks: password");
    }

    #[test]
    fn test_invalid_request_is_verbatim() {
        let error = QueryError::invalid("update requires where");
        assert_eq!(error.to_string(), "update requires where");
    }

    #[test]
    fn test_client_error_classification() {
        assert!(QueryError::UnknownTable("x".into()).is_client_error());
        assert!(QueryError::MalformedPayload("x".into()).is_client_error());
        assert!(!QueryError::StoreConstraintViolation("x".into()).is_client_error());
        assert!(!QueryError::ConnectionFailed("x".into()).is_client_error());
    }
}
