//! Path utilities for Marksheet data directories

use std::path::PathBuf;

/// Get the base Marksheet data directory (~/.marksheet)
pub fn data_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".marksheet"))
        .unwrap_or_else(|| PathBuf::from(".marksheet"))
}

/// Get the default database file path (~/.marksheet/marksheet.db)
pub fn database_path() -> PathBuf {
    data_dir().join("marksheet.db")
}

/// Get the logs directory (~/.marksheet/logs)
pub fn logs_dir() -> PathBuf {
    data_dir().join("logs")
}

/// Get the default log file path (~/.marksheet/logs/marksheet.log)
pub fn log_file_path() -> PathBuf {
    logs_dir().join("marksheet.log")
}

/// Get the config file path (~/.marksheet/config.toml)
pub fn config_path() -> PathBuf {
    data_dir().join("config.toml")
}
