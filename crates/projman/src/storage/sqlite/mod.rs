//! SQLite storage backend.
//!
//! Uses `rusqlite` for statement execution and `tokio-rusqlite` to run each
//! request's connection on its own thread.

mod conversions;
mod error;
mod schema;
mod store;

pub use store::SqliteStore;
