//! Table and column allowlist.
//!
//! Identifiers cannot be bound as statement parameters, so every table and
//! column name is resolved through the schema registry before it is written
//! into SQL text.

use crate::schema::{Column, Table};

use super::{QueryError, Result};

/// Resolves a caller-supplied table name, rejecting anything outside the registry.
pub fn guard_table(name: &str) -> Result<Table> {
    Table::from_name(name).ok_or_else(|| QueryError::UnknownTable(name.to_string()))
}

/// Resolves a caller-supplied column name on an already allowed table.
pub fn guard_column(table: Table, name: &str) -> Result<Column> {
    table.column(name).ok_or_else(|| QueryError::UnknownColumn {
        table: table.name(),
        column: name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_table_allows_registry_tables() {
        for table in Table::ALL {
            assert_eq!(guard_table(table.name()), Ok(table));
        }
    }

    #[test]
    fn test_guard_table_rejects_everything_else() {
        for name in ["users", "sqlite_master", "tasks;--", "TASKS", "todo-items", ""] {
            assert_eq!(
                guard_table(name),
                Err(QueryError::UnknownTable(name.to_string()))
            );
        }
    }

    #[test]
    fn test_guard_column_rejects_foreign_columns() {
        assert!(guard_column(Table::Tasks, "title").is_ok());
        assert_eq!(
            guard_column(Table::TeamMembers, "title"),
            Err(QueryError::UnknownColumn {
                table: "team_members",
                column: "title".to_string(),
            })
        );
        assert!(guard_column(Table::Tasks, "1=1 OR id").is_err());
    }
}
