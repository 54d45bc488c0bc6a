//! Statement builder.
//!
//! Pure functions turning a validated request into SQL text plus positional
//! parameters. Table and column identifiers come from the schema registry;
//! every value is bound as a `?` parameter.

use serde_json::{Map, Value};

use crate::schema::{Column, Table};

use super::{guard_column, Action, QueryError, Result, SqlValue};

/// A single parameterized statement, ready to execute.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub action: Action,
    pub table: Table,
    pub sql: String,
    pub params: Vec<SqlValue>,
}

impl Statement {
    /// Builds the statement for `action` on `table`.
    ///
    /// `data` supplies column values for insert and update, `filter` the
    /// equality conditions (joined with `AND`) for select, update and delete.
    /// Update and delete refuse to run without a filter.
    pub fn build(
        action: Action,
        table: Table,
        data: &Map<String, Value>,
        filter: &Map<String, Value>,
    ) -> Result<Self> {
        let (sql, params) = match action {
            Action::Select => build_select(table, filter)?,
            Action::Insert => build_insert(table, data)?,
            Action::Update => build_update(table, data, filter)?,
            Action::Delete => build_delete(table, filter)?,
        };

        Ok(Self {
            action,
            table,
            sql,
            params,
        })
    }
}

fn build_select(table: Table, filter: &Map<String, Value>) -> Result<(String, Vec<SqlValue>)> {
    let (conditions, params) = bind(table, filter)?;

    let mut sql = format!("SELECT * FROM {table}");
    if !conditions.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&where_clause(&conditions));
    }
    sql.push_str(" ORDER BY ");
    sql.push_str(table.default_order());

    Ok((sql, params))
}

fn build_insert(table: Table, data: &Map<String, Value>) -> Result<(String, Vec<SqlValue>)> {
    if data.is_empty() {
        return Err(QueryError::invalid("insert requires data"));
    }
    let (columns, params) = bind(table, data)?;

    let names: Vec<&str> = columns.iter().map(Column::name).collect();
    let placeholders = vec!["?"; columns.len()];
    let sql = format!(
        "INSERT INTO {table} ({}) VALUES ({})",
        names.join(","),
        placeholders.join(",")
    );

    Ok((sql, params))
}

fn build_update(
    table: Table,
    data: &Map<String, Value>,
    filter: &Map<String, Value>,
) -> Result<(String, Vec<SqlValue>)> {
    if filter.is_empty() {
        return Err(QueryError::invalid("update requires where"));
    }
    if data.is_empty() {
        return Err(QueryError::invalid("update requires data"));
    }
    let (assignments, mut params) = bind(table, data)?;
    let (conditions, filter_params) = bind(table, filter)?;
    params.extend(filter_params);

    let sets: Vec<String> = assignments
        .iter()
        .map(|column| format!("{column}=?"))
        .collect();
    let sql = format!(
        "UPDATE {table} SET {} WHERE {}",
        sets.join(", "),
        where_clause(&conditions)
    );

    Ok((sql, params))
}

fn build_delete(table: Table, filter: &Map<String, Value>) -> Result<(String, Vec<SqlValue>)> {
    if filter.is_empty() {
        return Err(QueryError::invalid("delete requires where"));
    }
    let (conditions, params) = bind(table, filter)?;

    let sql = format!("DELETE FROM {table} WHERE {}", where_clause(&conditions));

    Ok((sql, params))
}

/// Resolves every key of `map` to a column and converts its value.
///
/// Columns and parameters come back in the map's iteration order.
fn bind(table: Table, map: &Map<String, Value>) -> Result<(Vec<Column>, Vec<SqlValue>)> {
    let mut columns = Vec::with_capacity(map.len());
    let mut params = Vec::with_capacity(map.len());
    for (key, value) in map {
        let column = guard_column(table, key)?;
        params.push(SqlValue::from_json(column.name(), value)?);
        columns.push(column);
    }
    Ok((columns, params))
}

fn where_clause(columns: &[Column]) -> String {
    columns
        .iter()
        .map(|column| format!("{column}=?"))
        .collect::<Vec<_>>()
        .join(" AND ")
}
