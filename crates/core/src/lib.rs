//! Consent Ledger Core - shared types
//!
//! This crate provides the types shared across the consent-ledger
//! workspace: the closed permission model, caller-owned grant state,
//! fact records, errors, and application configuration.

pub mod config;
pub mod error;
pub mod permissions;
pub mod record;

pub use config::AppConfig;
pub use error::{LedgerError, Result};
pub use permissions::{GrantSet, PermissionKind};
pub use record::{FactKind, FactRecord, FieldValue};

/// Consent Ledger version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "Consent Ledger";
