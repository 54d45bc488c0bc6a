use async_trait::async_trait;
use serde_json::{Map, Value};

use super::{Result, Statement};

/// A selected row, keyed by column name in column order.
pub type Row = Map<String, Value>;

/// What executing a single statement produced.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    /// Rows returned by a select.
    Rows(Vec<Row>),
    /// Identity assigned by an insert.
    Inserted(i64),
    /// Rows touched by an update or delete.
    Affected(usize),
}

/// Executes statements against the backing store.
///
/// Each call runs exactly one statement; implementations own the
/// connection handling around it.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    async fn execute(&self, statement: Statement) -> Result<QueryOutcome>;
}
