//! SQLite schema definitions.
//!
//! Column sets must match `projman_core::schema::Table::columns`.

/// Pragmas applied to every connection.
///
/// WAL lets readers proceed while a single writer commits; foreign keys are
/// off by default in SQLite and the cascades below depend on them.
pub const CONNECTION_PRAGMAS: &str = r#"
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;
"#;

/// How long a connection waits on a locked database before failing.
pub const BUSY_TIMEOUT_MS: u64 = 5_000;

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
-- Projects table
CREATE TABLE IF NOT EXISTS projects (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT NOT NULL,
    description TEXT DEFAULT '',
    start_date  TEXT DEFAULT '',
    end_date    TEXT DEFAULT '',
    status      TEXT DEFAULT 'active',
    color       TEXT DEFAULT '#4f8ef7',
    created_by  TEXT DEFAULT '',
    created_at  TEXT DEFAULT (datetime('now'))
);

-- Tasks table
CREATE TABLE IF NOT EXISTS tasks (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    title       TEXT NOT NULL,
    description TEXT DEFAULT '',
    date        TEXT DEFAULT '',
    end_date    TEXT DEFAULT '',
    created_by  TEXT DEFAULT '',
    assigned_to TEXT DEFAULT '',
    status      TEXT DEFAULT 'pending',
    priority    TEXT DEFAULT 'medium',
    color       TEXT DEFAULT '#4f8ef7',
    project_id  INTEGER DEFAULT NULL REFERENCES projects(id) ON DELETE SET NULL,
    caldav_uid  TEXT DEFAULT '',
    caldav_etag TEXT DEFAULT '',
    all_day     INTEGER DEFAULT 1,
    task_time   TEXT DEFAULT '',
    created_at  TEXT DEFAULT (datetime('now'))
);

-- Todo lists table
CREATE TABLE IF NOT EXISTS todo_lists (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT NOT NULL,
    description TEXT DEFAULT '',
    created_by  TEXT DEFAULT '',
    created_at  TEXT DEFAULT (datetime('now'))
);

-- Todo items table
CREATE TABLE IF NOT EXISTS todo_items (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    list_id     INTEGER NOT NULL REFERENCES todo_lists(id) ON DELETE CASCADE,
    text        TEXT NOT NULL,
    completed   INTEGER DEFAULT 0,
    assigned_to TEXT DEFAULT '',
    created_by  TEXT DEFAULT '',
    sort_order  INTEGER DEFAULT 0,
    created_at  TEXT DEFAULT (datetime('now'))
);

-- Team members table
CREATE TABLE IF NOT EXISTS team_members (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    name       TEXT NOT NULL UNIQUE,
    email      TEXT DEFAULT '',
    color      TEXT DEFAULT '#4f8ef7',
    created_at TEXT DEFAULT (datetime('now'))
);

-- Project stages table
CREATE TABLE IF NOT EXISTS project_stages (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    project_id  INTEGER NOT NULL REFERENCES projects(id) ON DELETE CASCADE,
    name        TEXT NOT NULL,
    start_date  TEXT DEFAULT '',
    end_date    TEXT DEFAULT '',
    color       TEXT DEFAULT '',
    sort_order  INTEGER DEFAULT 0,
    created_at  TEXT DEFAULT (datetime('now'))
);

-- Indexes for the foreign keys
CREATE INDEX IF NOT EXISTS idx_tasks_project_id ON tasks(project_id);
CREATE INDEX IF NOT EXISTS idx_todo_items_list_id ON todo_items(list_id);
CREATE INDEX IF NOT EXISTS idx_project_stages_project_id ON project_stages(project_id);
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use projman_core::schema::Table;

    #[test]
    fn test_create_tables_covers_every_registry_table() {
        for table in Table::ALL {
            let needle = format!("CREATE TABLE IF NOT EXISTS {} (", table.name());
            assert!(CREATE_TABLES.contains(&needle), "missing DDL for {table}");
        }
    }

    #[test]
    fn test_cascades_are_declared() {
        assert!(CREATE_TABLES
            .contains("list_id     INTEGER NOT NULL REFERENCES todo_lists(id) ON DELETE CASCADE"));
        assert!(CREATE_TABLES
            .contains("project_id  INTEGER NOT NULL REFERENCES projects(id) ON DELETE CASCADE"));
        assert!(CREATE_TABLES.contains("REFERENCES projects(id) ON DELETE SET NULL"));
    }

    #[test]
    fn test_pragmas_enable_wal_and_foreign_keys() {
        assert!(CONNECTION_PRAGMAS.contains("journal_mode = WAL"));
        assert!(CONNECTION_PRAGMAS.contains("foreign_keys = ON"));
    }
}
