use std::fmt;


/// A table exposed by the service.
///
/// This is the only source of table identifiers that ever reach SQL text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Tasks,
    TodoLists,
    TodoItems,
    TeamMembers,
    Projects,
    ProjectStages,
}

const TASK_COLUMNS: &[&str] = &[
    "id",
    "title",
    "description",
    "date",
    "end_date",
    "created_by",
    "assigned_to",
    "status",
    "priority",
    "color",
    "project_id",
    "caldav_uid",
    "caldav_etag",
    "all_day",
    "task_time",
    "created_at",
];

const TODO_LIST_COLUMNS: &[&str] = &["id", "name", "description", "created_by", "created_at"];

const TODO_ITEM_COLUMNS: &[&str] = &[
    "id",
    "list_id",
    "text",
    "completed",
    "assigned_to",
    "created_by",
    "sort_order",
    "created_at",
];

const TEAM_MEMBER_COLUMNS: &[&str] = &["id", "name", "email", "color", "created_at"];

const PROJECT_COLUMNS: &[&str] = &[
    "id",
    "name",
    "description",
    "start_date",
    "end_date",
    "status",
    "color",
    "created_by",
    "created_at",
];

const PROJECT_STAGE_COLUMNS: &[&str] = &[
    "id",
    "project_id",
    "name",
    "start_date",
    "end_date",
    "color",
    "sort_order",
    "created_at",
];

impl Table {
    /// Every table, in schema creation order.
    pub const ALL: [Table; 6] = [
        Table::Tasks,
        Table::TodoLists,
        Table::TodoItems,
        Table::TeamMembers,
        Table::Projects,
        Table::ProjectStages,
    ];

    /// The SQL name of the table.
    pub const fn name(self) -> &'static str {
        match self {
            Table::Tasks => "tasks",
            Table::TodoLists => "todo_lists",
            Table::TodoItems => "todo_items",
            Table::TeamMembers => "team_members",
            Table::Projects => "projects",
            Table::ProjectStages => "project_stages",
        }
    }

    /// Looks up a table by its SQL name. Matching is exact.
    pub fn from_name(name: &str) -> Option<Table> {
        Table::ALL.into_iter().find(|table| table.name() == name)
    }

    /// All columns of the table, including `id` and `created_at`.
    pub const fn columns(self) -> &'static [&'static str] {
        match self {
            Table::Tasks => TASK_COLUMNS,
            Table::TodoLists => TODO_LIST_COLUMNS,
            Table::TodoItems => TODO_ITEM_COLUMNS,
            Table::TeamMembers => TEAM_MEMBER_COLUMNS,
            Table::Projects => PROJECT_COLUMNS,
            Table::ProjectStages => PROJECT_STAGE_COLUMNS,
        }
    }

    /// Resolves a caller-supplied column name against this table.
    pub fn column(self, name: &str) -> Option<Column> {
        self.columns()
            .iter()
            .find(|column| **column == name)
            .map(|column| Column { name: column })
    }

    /// Ordering clause (without `ORDER BY`) applied to every select.
    ///
    /// Each clause ends on a unique key so results are reproducible.
    pub const fn default_order(self) -> &'static str {
        match self {
            Table::Tasks => "date ASC, created_at ASC, id ASC",
            Table::TodoLists => "created_at DESC, id DESC",
            Table::TodoItems => "sort_order ASC, created_at ASC, id ASC",
            Table::TeamMembers => "name ASC",
            Table::Projects => "created_at DESC, id DESC",
            Table::ProjectStages => "sort_order ASC, created_at ASC, id ASC",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A column that is known to exist on its table.
///
/// Only [`Table::column`] constructs one, so the name is always one of the
/// registry's static strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Column {
    name: &'static str,
}

impl Column {
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_round_trips_every_table() {
        for table in Table::ALL {
            assert_eq!(Table::from_name(table.name()), Some(table));
        }
    }

    #[test]
    fn test_from_name_is_exact() {
        assert_eq!(Table::from_name("Tasks"), None);
        assert_eq!(Table::from_name("tasks "), None);
        assert_eq!(Table::from_name("sqlite_master"), None);
        assert_eq!(Table::from_name(""), None);
    }

    #[test]
    fn test_every_table_has_id_and_created_at() {
        for table in Table::ALL {
            assert!(table.column("id").is_some(), "{table} has no id");
            assert!(table.column("created_at").is_some(), "{table} has no created_at");
        }
    }

    #[test]
    fn test_column_resolution() {
        let column = Table::TodoItems.column("list_id").unwrap();
        assert_eq!(column.name(), "list_id");

        assert!(Table::TodoLists.column("list_id").is_none());
        assert!(Table::Tasks.column("title; DROP TABLE tasks").is_none());
    }

    #[test]
    fn test_default_order_ends_on_unique_key() {
        for table in Table::ALL {
            let order = table.default_order();
            assert!(
                order.ends_with("id ASC") || order.ends_with("id DESC") || order == "name ASC",
                "{table} ordering is not total: {order}"
            );
        }
    }
}
