//! Functional core of the projman data-access service.
//!
//! Everything in this crate is pure: the schema registry, the table and
//! column allowlist, request parsing and statement building. Executing a
//! [`query::Statement`] is left to an implementation of
//! [`query::QueryExecutor`] living in the imperative shell.

pub mod query;
pub mod schema;
