use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

use crate::util::paths::config_path;

/// Commented example config, written out verbatim on first run
pub const EXAMPLE_CONFIG: &str = include_str!("config.toml.example");

/// Everything the app reads from `~/.marksheet/config.toml`.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where records are persisted
    pub database: DatabaseConfig,
}

/// Where the record store lives and which table it writes.
///
/// Injected into the store at construction; nothing downstream reads the
/// config file directly.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file
    pub path: PathBuf,
    /// Name of the students table
    pub table: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: DatabaseConfig {
                path: crate::util::paths::database_path(),
                table: "students".to_string(),
            },
        }
    }
}

/// `[database]` section as it appears on disk, every key optional
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlDatabaseConfig {
    pub path: Option<PathBuf>,
    pub table: Option<String>,
}

/// On-disk shape of the config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub database: Option<TomlDatabaseConfig>,
}

impl Config {
    /// Read the config file and overlay it onto the defaults
    pub fn load() -> Self {
        let mut config = Config::default();

        let config_file = config_path();

        // First run: seed the config file from the bundled example
        if !config_file.exists() {
            Self::create_default_config(&config_file);
        }

        // Unreadable or malformed files fall back to the defaults
        if config_file.exists() {
            if let Ok(contents) = fs::read_to_string(&config_file) {
                if let Ok(toml_config) = toml::from_str::<TomlConfig>(&contents) {
                    config.merge(toml_config);
                }
            }
        }

        config
    }

    /// Apply user-provided values over the defaults
    fn merge(&mut self, toml_config: TomlConfig) {
        if let Some(database) = toml_config.database {
            if let Some(path) = database.path {
                self.database.path = path;
            }
            if let Some(table) = database.table {
                self.database.table = table;
            }
        }
    }

    /// Seed a fresh config file from the bundled example
    fn create_default_config(path: &PathBuf) {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                if let Err(e) = fs::create_dir_all(parent) {
                    eprintln!("Failed to create config directory: {}", e);
                    return;
                }
            }
        }

        if let Err(e) = fs::write(path, EXAMPLE_CONFIG) {
            eprintln!("Failed to write default config: {}", e);
        }
    }
}
