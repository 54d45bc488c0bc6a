//! SQLite error mapping.
//!
//! Maps `tokio_rusqlite::Error` and `rusqlite::Error` to `QueryError` from
//! `projman_core::query`. Every constraint failure (unique, foreign key,
//! not null, ...) becomes `StoreConstraintViolation`.

use projman_core::query::QueryError;
use rusqlite::ffi;

/// Short label for a constraint failure's extended result code.
fn constraint_kind(extended_code: i32) -> &'static str {
    match extended_code {
        ffi::SQLITE_CONSTRAINT_UNIQUE => "unique",
        ffi::SQLITE_CONSTRAINT_PRIMARYKEY => "primary key",
        ffi::SQLITE_CONSTRAINT_FOREIGNKEY => "foreign key",
        ffi::SQLITE_CONSTRAINT_NOTNULL => "not null",
        ffi::SQLITE_CONSTRAINT_CHECK => "check",
        _ => "constraint",
    }
}

/// Maps a rusqlite error to a QueryError.
///
/// # Error Mapping
///
/// - `SQLITE_CONSTRAINT_*` → `QueryError::StoreConstraintViolation`
/// - `SQLITE_CANTOPEN` → `QueryError::ConnectionFailed`
/// - All other errors → `QueryError::QueryFailed`
pub fn map_rusqlite_error(err: &rusqlite::Error) -> QueryError {
    match err {
        rusqlite::Error::SqliteFailure(sqlite_err, message)
            if sqlite_err.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            let detail = message
                .clone()
                .unwrap_or_else(|| sqlite_err.to_string());
            QueryError::StoreConstraintViolation(format!(
                "{} violation: {detail}",
                constraint_kind(sqlite_err.extended_code)
            ))
        }

        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.code == rusqlite::ErrorCode::CannotOpen =>
        {
            QueryError::ConnectionFailed(format!("Cannot open database: {err}"))
        }

        _ => QueryError::QueryFailed(err.to_string()),
    }
}

/// Maps a tokio_rusqlite error to a QueryError.
///
/// This is the main entry point for error mapping in async code.
pub fn map_tokio_rusqlite_error(err: tokio_rusqlite::Error) -> QueryError {
    match &err {
        tokio_rusqlite::Error::Rusqlite(rusqlite_err) => map_rusqlite_error(rusqlite_err),
        tokio_rusqlite::Error::ConnectionClosed => {
            QueryError::ConnectionFailed("Connection closed unexpectedly".to_string())
        }
        tokio_rusqlite::Error::Close((_, rusqlite_err)) => {
            QueryError::ConnectionFailed(format!("Failed to close connection: {rusqlite_err}"))
        }
        _ => QueryError::QueryFailed(err.to_string()),
    }
}

/// Maps a failure to open a connection.
///
/// Everything that goes wrong before the first statement runs is reported
/// as a connection failure.
pub fn map_open_error(err: tokio_rusqlite::Error) -> QueryError {
    match map_tokio_rusqlite_error(err) {
        QueryError::QueryFailed(message) => QueryError::ConnectionFailed(message),
        other => other,
    }
}
