//! SQLite statement executor.
//!
//! Every statement runs on a connection opened for it alone and released
//! right after, whether the statement succeeded or not.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use projman_core::query::{Action, QueryExecutor, QueryOutcome, Result, Statement};

use super::conversions::{row_to_json, to_sqlite_value};
use super::error::{map_open_error, map_tokio_rusqlite_error};
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-backed [`QueryExecutor`].
///
/// Holds only the database path. Connections are never shared between
/// requests.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    /// Opens the store at `path`, creating the file and schema if needed.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let store = Self { path: path.into() };

        let conn = store.connect().await?;
        let created = conn
            .call(|conn| {
                conn.execute_batch(schema::CREATE_TABLES)
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(map_tokio_rusqlite_error);
        release(conn).await;
        created?;

        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens a new connection and applies the per-connection pragmas.
    ///
    /// If the pragmas fail the half-configured connection is dropped here,
    /// which shuts down its thread.
    async fn connect(&self) -> Result<Connection> {
        let conn = Connection::open(&self.path)
            .await
            .map_err(map_open_error)?;

        conn.call(|conn| {
            conn.busy_timeout(Duration::from_millis(schema::BUSY_TIMEOUT_MS))
                .map_err(wrap_err)?;
            conn.execute_batch(schema::CONNECTION_PRAGMAS)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(map_open_error)?;

        Ok(conn)
    }
}

/// Closes a connection, logging instead of failing the request.
async fn release(conn: Connection) {
    if let Err(e) = conn.close().await {
        tracing::warn!(error = %e, "Failed to close SQLite connection");
    }
}

/// Runs one statement on a configured connection.
fn run_statement(
    conn: &rusqlite::Connection,
    statement: &Statement,
) -> rusqlite::Result<QueryOutcome> {
    let params = rusqlite::params_from_iter(statement.params.iter().map(to_sqlite_value));

    match statement.action {
        Action::Select => {
            let mut stmt = conn.prepare(&statement.sql)?;
            let columns: Vec<String> = stmt
                .column_names()
                .into_iter()
                .map(String::from)
                .collect();
            let rows = stmt.query_map(params, |row| row_to_json(row, &columns))?;

            let mut records = Vec::new();
            for row_result in rows {
                records.push(row_result?);
            }
            Ok(QueryOutcome::Rows(records))
        }
        Action::Insert => {
            conn.execute(&statement.sql, params)?;
            Ok(QueryOutcome::Inserted(conn.last_insert_rowid()))
        }
        Action::Update | Action::Delete => {
            let affected = conn.execute(&statement.sql, params)?;
            Ok(QueryOutcome::Affected(affected))
        }
    }
}

#[async_trait]
impl QueryExecutor for SqliteStore {
    async fn execute(&self, statement: Statement) -> Result<QueryOutcome> {
        let conn = self.connect().await?;

        tracing::debug!(
            action = %statement.action,
            table = %statement.table,
            sql = %statement.sql,
            params = statement.params.len(),
            "Executing statement"
        );

        let outcome = conn
            .call(move |conn| run_statement(conn, &statement).map_err(wrap_err))
            .await
            .map_err(map_tokio_rusqlite_error);

        release(conn).await;

        outcome
    }
}
