//! Schema registry.
//!
//! The fixed set of tables the service exposes, their columns and their
//! default read ordering. This is compiled in and never changes at runtime.

mod table;

pub use table::{Column, Table};
