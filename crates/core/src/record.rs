//! Fact Records
//!
//! The unit of collected data: one privacy-reduced fact derived from a
//! granted permission, stamped with capture time and the consent flag.
//! Records are built once and never mutated; the durable form is the
//! append-only log file owned by `consent-datalog`.

use chrono::Local;
use indexmap::IndexMap;
use serde::Serialize;

use crate::permissions::PermissionKind;

/// Timestamp format used in serialized records (local time)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// What a record measured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FactKind {
    ContactCount,
    ApproximateLocation,
    AppStorageInfo,
}

impl FactKind {
    /// The `data_type` tag written to the log
    pub fn as_str(&self) -> &'static str {
        match self {
            FactKind::ContactCount => "contact_count",
            FactKind::ApproximateLocation => "approximate_location",
            FactKind::AppStorageInfo => "app_storage_info",
        }
    }
}

/// Scalar payload value in a record's `fields` map
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Int(v)
    }
}

impl From<u64> for FieldValue {
    fn from(v: u64) -> Self {
        // Sizes and counts fit comfortably; clamp rather than wrap.
        FieldValue::Int(i64::try_from(v).unwrap_or(i64::MAX))
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Float(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Text(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Text(v)
    }
}

/// One collected fact.
///
/// Serializes with a fixed key order: `permission`, `data_type`, the
/// payload fields in insertion order, then `timestamp` and
/// `user_consent`.
#[derive(Debug, Clone, Serialize)]
pub struct FactRecord {
    /// Permission that gated the collection (short name on disk)
    pub permission: PermissionKind,
    /// What was measured
    #[serde(rename = "data_type")]
    pub fact_kind: FactKind,
    /// Measured payload, in insertion order
    #[serde(flatten)]
    pub fields: IndexMap<String, FieldValue>,
    /// Local wall-clock capture time, `YYYY-MM-DD HH:MM:SS`
    pub timestamp: String,
    /// Always true: records exist only downstream of an affirmative grant
    pub user_consent: bool,
}

impl FactRecord {
    /// Build a record stamped with the current local time.
    pub fn new(
        permission: PermissionKind,
        fact_kind: FactKind,
        fields: IndexMap<String, FieldValue>,
    ) -> Self {
        Self {
            permission,
            fact_kind,
            fields,
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            user_consent: true,
        }
    }
}
