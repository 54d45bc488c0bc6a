use serde_json::{Map, Value};

use crate::schema::Table;

use super::{guard_table, Action, QueryError, Result, Statement};

/// A parsed and allowlisted `(action, table, data, where)` request.
///
/// Column names inside `data` and `filter` are still unchecked here; they
/// are resolved when the [`Statement`] is built.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryRequest {
    pub action: Action,
    pub table: Table,
    pub data: Map<String, Value>,
    pub filter: Map<String, Value>,
}

impl QueryRequest {
    pub fn new(action: Action, table: Table) -> Self {
        Self {
            action,
            table,
            data: Map::new(),
            filter: Map::new(),
        }
    }

    pub fn with_data(mut self, data: Map<String, Value>) -> Self {
        self.data = data;
        self
    }

    pub fn with_filter(mut self, filter: Map<String, Value>) -> Self {
        self.filter = filter;
        self
    }

    /// Parses a raw request body.
    ///
    /// The body must be a JSON object. The table is checked before the
    /// action, so a request naming an unknown table is always reported as
    /// such whatever else is wrong with it.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| QueryError::MalformedPayload(e.to_string()))?;
        Self::from_value(value)
    }

    /// Parses an already decoded request envelope.
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(mut envelope) = value else {
            return Err(QueryError::MalformedPayload(
                "request body must be a JSON object".to_string(),
            ));
        };

        let table = match envelope.remove("table") {
            Some(Value::String(name)) => guard_table(&name)?,
            None | Some(Value::Null) => {
                return Err(QueryError::invalid("request is missing a table"));
            }
            Some(other) => return Err(QueryError::UnknownTable(other.to_string())),
        };

        let action = match envelope.remove("action") {
            Some(Value::String(action)) => action.parse::<Action>()?,
            None | Some(Value::Null) => return Err(QueryError::invalid("unknown action")),
            Some(other) => return Err(QueryError::invalid(format!("unknown action: {other}"))),
        };

        let data = object_field(&mut envelope, "data")?;
        let filter = object_field(&mut envelope, "where")?;

        Ok(Self {
            action,
            table,
            data,
            filter,
        })
    }

    /// Builds the statement this request describes.
    pub fn statement(&self) -> Result<Statement> {
        Statement::build(self.action, self.table, &self.data, &self.filter)
    }
}

/// Takes an optional object-valued field; absent or `null` means empty.
fn object_field(envelope: &mut Map<String, Value>, key: &str) -> Result<Map<String, Value>> {
    match envelope.remove(key) {
        None | Some(Value::Null) => Ok(Map::new()),
        Some(Value::Object(map)) => Ok(map),
        Some(_) => Err(QueryError::invalid(format!("{key} must be an object"))),
    }
}
