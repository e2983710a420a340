//! Error types for product_manager

use std::fmt;

/// Unified error type for storage and I/O operations
#[derive(Debug)]
pub enum AppError {
    /// Database operation failed (open, statement execution)
    Database(rusqlite::Error),
    /// File or terminal I/O failed
    Io(std::io::Error),
    /// Schema script could not be read
    SchemaScript(std::io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Database(e) => write!(f, "Database error: {}", e),
            AppError::Io(e) => write!(f, "I/O error: {}", e),
            AppError::SchemaScript(e) => write!(f, "Failed to read schema script: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Database(e) => Some(e),
            AppError::Io(e) => Some(e),
            AppError::SchemaScript(e) => Some(e),
        }
    }
}

impl From<rusqlite::Error> for AppError {
    fn from(err: rusqlite::Error) -> Self {
        AppError::Database(err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

/// Result alias for product_manager operations
pub type Result<T> = std::result::Result<T, AppError>;
