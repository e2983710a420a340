//! Application configuration.
//!
//! The database file and the optional schema script live at fixed,
//! repository-relative paths. Both are carried in a config value that is
//! passed explicitly into the connector and initializer instead of being
//! recomputed at each call site.

use std::path::PathBuf;

/// Default location of the SQLite database file.
pub const DEFAULT_DB_PATH: &str = "data/products.db";

/// Default location of the schema script. If the file is missing the
/// initializer falls back to an inline CREATE TABLE statement.
pub const DEFAULT_SCHEMA_PATH: &str = "data/schema.sql";

/// Paths used by the storage layer.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Path to the SQLite database file
    pub db_path: PathBuf,
    /// Path to the schema script executed on startup, when present
    pub schema_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            schema_path: PathBuf::from(DEFAULT_SCHEMA_PATH),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paths_are_repository_relative() {
        let config = AppConfig::default();
        assert!(config.db_path.is_relative());
        assert!(config.schema_path.is_relative());
        assert_eq!(config.db_path, PathBuf::from("data/products.db"));
        assert_eq!(config.schema_path, PathBuf::from("data/schema.sql"));
    }
}
