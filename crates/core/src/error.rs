//! Error types for consent-ledger
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// Main error type for consent-ledger
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not authorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Result type alias for consent-ledger operations
pub type Result<T> = std::result::Result<T, LedgerError>;

impl LedgerError {
    /// Check whether this error stems from a missing OS-level grant
    pub fn is_authorization(&self) -> bool {
        matches!(self, LedgerError::Unauthorized(_))
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            LedgerError::Io(e) => format!("File operation failed: {}", e),
            LedgerError::Config(msg) => format!("Configuration error: {}", msg),
            LedgerError::Unauthorized(msg) => format!("Not authorized: {}", msg),
            LedgerError::NotFound(msg) => format!("Not found: {}", msg),
            _ => self.to_string(),
        }
    }
}
