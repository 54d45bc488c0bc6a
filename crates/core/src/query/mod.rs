//! Generic query protocol.
//!
//! An abstract `(action, table, data, where)` request is parsed, checked
//! against the schema allowlist and turned into a parameterized
//! [`Statement`]. Running the statement is the job of a [`QueryExecutor`].

mod action;
mod builder;
mod error;
mod guard;
mod http_mapping;
mod request;
mod traits;
mod value;

pub use action::Action;
pub use builder::Statement;
pub use error::{QueryError, Result};
pub use guard::{guard_column, guard_table};
pub use http_mapping::query_error_to_status_code;
pub use request::QueryRequest;
pub use traits::{QueryExecutor, QueryOutcome, Row};
pub use value::SqlValue;
