use serde_json::Value;

use super::{QueryError, Result};

/// A scalar value bound to a statement parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

impl SqlValue {
    /// Converts a JSON value supplied for `column` into a bindable value.
    ///
    /// Booleans become `0`/`1`. Arrays and objects have no column
    /// representation and are rejected.
    pub fn from_json(column: &str, value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(SqlValue::Null),
            Value::Bool(flag) => Ok(SqlValue::Integer(i64::from(*flag))),
            Value::Number(number) => {
                if let Some(integer) = number.as_i64() {
                    Ok(SqlValue::Integer(integer))
                } else if let Some(real) = number.as_f64() {
                    Ok(SqlValue::Real(real))
                } else {
                    Err(QueryError::invalid(format!(
                        "value for {column} is out of range: {number}"
                    )))
                }
            }
            Value::String(text) => Ok(SqlValue::Text(text.clone())),
            Value::Array(_) | Value::Object(_) => Err(QueryError::invalid(format!(
                "value for {column} must be a scalar"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalars_convert() {
        assert_eq!(SqlValue::from_json("c", &json!(null)).unwrap(), SqlValue::Null);
        assert_eq!(SqlValue::from_json("c", &json!(true)).unwrap(), SqlValue::Integer(1));
        assert_eq!(SqlValue::from_json("c", &json!(false)).unwrap(), SqlValue::Integer(0));
        assert_eq!(SqlValue::from_json("c", &json!(42)).unwrap(), SqlValue::Integer(42));
        assert_eq!(SqlValue::from_json("c", &json!(1.5)).unwrap(), SqlValue::Real(1.5));
        assert_eq!(
            SqlValue::from_json("c", &json!("2024-01-01")).unwrap(),
            SqlValue::Text("2024-01-01".to_string())
        );
    }

    #[test]
    fn test_u64_beyond_i64_becomes_real() {
        let value = SqlValue::from_json("c", &json!(u64::MAX)).unwrap();
        assert!(matches!(value, SqlValue::Real(_)));
    }

    #[test]
    fn test_compound_values_are_rejected() {
        let err = SqlValue::from_json("tags", &json!(["a", "b"])).unwrap_err();
        assert_eq!(err, QueryError::InvalidRequest("value for tags must be a scalar".into()));
        assert!(SqlValue::from_json("meta", &json!({"a": 1})).is_err());
    }
}
