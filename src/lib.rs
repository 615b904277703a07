//! Consent Ledger - consent-gated fact collection with an append-only log
//!
//! Models the data path of a permission-demo application: an external
//! trigger delivers a permission identifier and a grant flag; when the
//! grant is affirmative, at most one privacy-reduced fact (a count, a
//! rounded coordinate, an aggregate size) is derived and durably
//! appended to a local log file. There is no networking and no
//! background execution; each invocation runs to completion.
//!
//! ## Architecture
//!
//! The workspace is organized into specialized crates:
//!
//! - `consent-core`: permission model, grant state, fact records,
//!   errors, configuration
//! - `consent-collector`: provider traits and the permission-to-fact
//!   dispatch
//! - `consent-datalog`: record rendering and the append-only log file
//!
//! This crate re-exports them and adds the [`service`] layer that ties
//! a permission result to a collect-and-append round trip.

#![warn(clippy::all)]

pub mod service;

// Re-export main components for library usage
pub use consent_collector as collector;
pub use consent_core as core;
pub use consent_datalog as datalog;

pub use service::CollectionService;

/// Prelude module for convenient imports
pub mod prelude {
    pub use consent_collector::{Collector, ContactStore, LocationFix, LocationProvider};
    pub use consent_core::{
        AppConfig, FactKind, FactRecord, FieldValue, GrantSet, LedgerError, PermissionKind, Result,
    };
    pub use consent_datalog::{DataLog, NO_DATA};

    pub use crate::service::CollectionService;
}
