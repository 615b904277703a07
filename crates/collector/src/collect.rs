//! Fact Collection
//!
//! Maps a granted permission onto at most one privacy-reduced fact.
//! Every query failure resolves to "no record"; the dispatch never
//! propagates a platform security fault to the caller.

use std::path::PathBuf;

use indexmap::IndexMap;
use tracing::{debug, error};

use consent_core::{FactKind, FactRecord, FieldValue, PermissionKind};

use crate::providers::{ContactStore, LocationProvider};
use crate::storage;

/// Round a coordinate to two decimal places (city-level granularity)
pub fn round_coordinate(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Derives facts from the platform providers, one per granted
/// permission at most.
pub struct Collector {
    contacts: Box<dyn ContactStore>,
    location: Box<dyn LocationProvider>,
    app_data_dir: PathBuf,
}

impl Collector {
    /// Create a collector over the given providers and private data
    /// directory
    pub fn new(
        contacts: Box<dyn ContactStore>,
        location: Box<dyn LocationProvider>,
        app_data_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            contacts,
            location,
            app_data_dir: app_data_dir.into(),
        }
    }

    /// Derive at most one fact for `kind`.
    ///
    /// A denied flag is always a no-op. Camera and microphone never
    /// produce a record. Authorization failures at the query boundary
    /// are logged and resolve to `None`.
    pub fn collect(&self, kind: PermissionKind, granted: bool) -> Option<FactRecord> {
        if !granted {
            debug!(permission = %kind, "permission not granted, nothing to collect");
            return None;
        }

        match kind {
            PermissionKind::Contacts => self.collect_contacts(),
            PermissionKind::Location => self.collect_location(),
            PermissionKind::Camera | PermissionKind::Microphone => {
                debug!(permission = %kind, "capability-only permission, no data collected");
                None
            }
            PermissionKind::Storage => self.collect_storage(),
        }
    }

    /// Contact count only; individual contact fields are never read
    fn collect_contacts(&self) -> Option<FactRecord> {
        let count = match self.contacts.contact_count() {
            Ok(count) => count,
            Err(e) => {
                error!("contact store query failed: {}", e.user_message());
                return None;
            }
        };

        let mut fields = IndexMap::new();
        fields.insert("value".to_string(), FieldValue::from(count));

        debug!(count, "collected contact count");
        Some(FactRecord::new(
            PermissionKind::Contacts,
            FactKind::ContactCount,
            fields,
        ))
    }

    /// Last known position, rounded to city-level granularity
    fn collect_location(&self) -> Option<FactRecord> {
        let fix = match self.location.last_known() {
            Ok(Some(fix)) => fix,
            Ok(None) => {
                debug!("no last known location available");
                return None;
            }
            Err(e) => {
                error!("location query failed: {}", e.user_message());
                return None;
            }
        };

        let mut fields = IndexMap::new();
        fields.insert(
            "latitude_rounded".to_string(),
            FieldValue::Float(round_coordinate(fix.latitude)),
        );
        fields.insert(
            "longitude_rounded".to_string(),
            FieldValue::Float(round_coordinate(fix.longitude)),
        );
        fields.insert("accuracy".to_string(), FieldValue::Float(fix.accuracy));

        debug!("collected approximate location");
        Some(FactRecord::new(
            PermissionKind::Location,
            FactKind::ApproximateLocation,
            fields,
        ))
    }

    /// Aggregate size of the app's own data directory, not user media
    fn collect_storage(&self) -> Option<FactRecord> {
        let bytes = storage::dir_size(&self.app_data_dir);

        let mut fields = IndexMap::new();
        fields.insert("app_data_size_bytes".to_string(), FieldValue::from(bytes));
        fields.insert(
            "app_data_size_mb".to_string(),
            FieldValue::from(bytes / (1024 * 1024)),
        );

        debug!(bytes, "collected app storage info");
        Some(FactRecord::new(
            PermissionKind::Storage,
            FactKind::AppStorageInfo,
            fields,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::{SimulatedContactStore, SimulatedLocationProvider};

    fn collector_with(
        contacts: SimulatedContactStore,
        location: SimulatedLocationProvider,
        app_data_dir: &std::path::Path,
    ) -> Collector {
        Collector::new(Box::new(contacts), Box::new(location), app_data_dir)
    }

    fn default_collector() -> Collector {
        Collector::new(
            Box::new(SimulatedContactStore::with_contacts(3)),
            Box::new(SimulatedLocationProvider::with_fix(1.0, 2.0, 5.0)),
            "/nonexistent/app/data",
        )
    }

    #[test]
    fn test_denied_flag_is_noop_for_every_kind() {
        let collector = default_collector();
        for kind in PermissionKind::ALL {
            assert!(collector.collect(kind, false).is_none());
        }
    }

    #[test]
    fn test_capability_permissions_never_produce_records() {
        let collector = default_collector();
        assert!(collector.collect(PermissionKind::Camera, true).is_none());
        assert!(collector.collect(PermissionKind::Microphone, true).is_none());
    }

    #[test]
    fn test_contact_count_only() {
        let dir = tempfile::tempdir().unwrap();
        let collector = collector_with(
            SimulatedContactStore::with_contacts(42),
            SimulatedLocationProvider::unavailable(),
            dir.path(),
        );

        let record = collector.collect(PermissionKind::Contacts, true).unwrap();
        assert_eq!(record.fact_kind, FactKind::ContactCount);
        assert_eq!(record.fields.len(), 1);
        assert_eq!(record.fields.get("value"), Some(&FieldValue::Int(42)));
        assert!(record.user_consent);
    }

    #[test]
    fn test_unauthorized_contact_query_resolves_to_none() {
        let dir = tempfile::tempdir().unwrap();
        let collector = collector_with(
            SimulatedContactStore::unauthorized(),
            SimulatedLocationProvider::unavailable(),
            dir.path(),
        );

        assert!(collector.collect(PermissionKind::Contacts, true).is_none());
    }

    #[test]
    fn test_location_rounds_to_two_decimals() {
        let dir = tempfile::tempdir().unwrap();
        let collector = collector_with(
            SimulatedContactStore::with_contacts(0),
            SimulatedLocationProvider::with_fix(37.4219999, -122.0840575, 12.4),
            dir.path(),
        );

        let record = collector.collect(PermissionKind::Location, true).unwrap();
        assert_eq!(record.fact_kind, FactKind::ApproximateLocation);
        assert_eq!(
            record.fields.get("latitude_rounded"),
            Some(&FieldValue::Float(37.42))
        );
        assert_eq!(
            record.fields.get("longitude_rounded"),
            Some(&FieldValue::Float(-122.08))
        );
        assert_eq!(record.fields.get("accuracy"), Some(&FieldValue::Float(12.4)));
    }

    #[test]
    fn test_no_last_known_location_produces_no_record() {
        let dir = tempfile::tempdir().unwrap();
        let collector = collector_with(
            SimulatedContactStore::with_contacts(0),
            SimulatedLocationProvider::unavailable(),
            dir.path(),
        );

        assert!(collector.collect(PermissionKind::Location, true).is_none());
    }

    #[test]
    fn test_storage_reports_bytes_and_megabytes() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("blob.bin"), vec![0u8; 2048]).unwrap();

        let collector = collector_with(
            SimulatedContactStore::with_contacts(0),
            SimulatedLocationProvider::unavailable(),
            dir.path(),
        );

        let record = collector.collect(PermissionKind::Storage, true).unwrap();
        assert_eq!(record.fact_kind, FactKind::AppStorageInfo);
        assert_eq!(
            record.fields.get("app_data_size_bytes"),
            Some(&FieldValue::Int(2048))
        );
        assert_eq!(
            record.fields.get("app_data_size_mb"),
            Some(&FieldValue::Int(0))
        );
    }

    #[test]
    fn test_storage_on_missing_directory_reports_zero() {
        let collector = default_collector();
        let record = collector.collect(PermissionKind::Storage, true).unwrap();
        assert_eq!(
            record.fields.get("app_data_size_bytes"),
            Some(&FieldValue::Int(0))
        );
    }

    #[test]
    fn test_rounding() {
        assert_eq!(round_coordinate(37.4219999), 37.42);
        assert_eq!(round_coordinate(-122.0840575), -122.08);
        assert_eq!(round_coordinate(0.005), 0.01);
        assert_eq!(round_coordinate(0.0), 0.0);
    }
}
