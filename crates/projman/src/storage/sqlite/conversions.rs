//! SQLite value conversions.
//!
//! Pure functions for converting between statement parameters, SQLite
//! values and JSON. These are testable in isolation without database access.

use projman_core::query::{Row, SqlValue};
use rusqlite::types::{Value as SqliteValue, ValueRef};
use serde_json::{Number, Value};

/// Convert a statement parameter to an owned SQLite value.
pub fn to_sqlite_value(value: &SqlValue) -> SqliteValue {
    match value {
        SqlValue::Null => SqliteValue::Null,
        SqlValue::Integer(v) => SqliteValue::Integer(*v),
        SqlValue::Real(v) => SqliteValue::Real(*v),
        SqlValue::Text(v) => SqliteValue::Text(v.clone()),
    }
}

/// Convert a SQLite column value to JSON.
///
/// Non-finite reals become `null`; blobs become an array of bytes.
pub fn value_ref_to_json(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(v) => Value::Number(v.into()),
        ValueRef::Real(v) => Number::from_f64(v).map_or(Value::Null, Value::Number),
        ValueRef::Text(bytes) => Value::String(String::from_utf8_lossy(bytes).into_owned()),
        ValueRef::Blob(bytes) => Value::Array(bytes.iter().map(|b| Value::from(*b)).collect()),
    }
}

/// Convert a SQLite row to a JSON object keyed by column name.
///
/// `columns` are the statement's column names, in select order.
pub fn row_to_json(row: &rusqlite::Row<'_>, columns: &[String]) -> rusqlite::Result<Row> {
    let mut record = Row::new();
    for (idx, name) in columns.iter().enumerate() {
        record.insert(name.clone(), value_ref_to_json(row.get_ref(idx)?));
    }
    Ok(record)
}
