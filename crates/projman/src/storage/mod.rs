//! Storage backend.
//!
//! Implements [`projman_core::query::QueryExecutor`] on top of SQLite.

pub mod sqlite;

pub use sqlite::SqliteStore;
