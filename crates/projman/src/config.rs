use std::path::{Path, PathBuf};

/// Server configuration, built once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the SQLite database file
    pub db_path: PathBuf,
    /// Host address to bind the server to
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl Config {
    pub fn new(db_path: impl Into<PathBuf>, host: impl Into<String>, port: u16) -> Self {
        Self {
            db_path: db_path.into(),
            host: host.into(),
            port,
        }
    }

    /// `host:port` string suitable for `TcpListener::bind`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_address() {
        let config = Config::new("pm.db", "127.0.0.1", 5000);
        assert_eq!(config.bind_address(), "127.0.0.1:5000");
    }

    #[test]
    fn test_db_path() {
        let config = Config::new("/mnt/nas/shared/project-manager.db", "0.0.0.0", 5000);
        assert_eq!(
            config.db_path(),
            Path::new("/mnt/nas/shared/project-manager.db")
        );
    }
}
