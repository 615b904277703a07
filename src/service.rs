//! Collection Service
//!
//! The trigger-handling layer: a permission result comes in from the
//! platform (identifier plus grant flag), the caller-owned grant state
//! is updated, and an affirmative grant runs one collect-and-append
//! round trip. Unknown identifiers are ignored.

use tracing::{debug, info};

use consent_collector::Collector;
use consent_core::{AppConfig, FactRecord, GrantSet, PermissionKind, Result};
use consent_datalog::DataLog;

/// Wires the collector to the data log and exposes the accessor
/// operations used by UI collaborators.
pub struct CollectionService {
    collector: Collector,
    log: DataLog,
}

impl CollectionService {
    /// Create a service over a collector and its data log
    pub fn new(collector: Collector, log: DataLog) -> Self {
        Self { collector, log }
    }

    /// Create a service whose log lives at the configured path
    pub fn with_config(collector: Collector, config: &AppConfig) -> Result<Self> {
        Ok(Self {
            collector,
            log: DataLog::new(config.log_path()?),
        })
    }

    /// Handle one permission result.
    ///
    /// Updates `grants`, and on an affirmative grant derives and
    /// appends at most one fact record, which is returned for the
    /// caller's benefit. Unknown permission identifiers and denied
    /// results yield `Ok(None)`.
    pub async fn handle_permission_result(
        &self,
        grants: &mut GrantSet,
        permission: &str,
        granted: bool,
    ) -> Result<Option<FactRecord>> {
        let Some(kind) = PermissionKind::from_android_name(permission) else {
            debug!(permission, "ignoring unknown permission identifier");
            return Ok(None);
        };

        grants.set(kind, granted);
        if !granted {
            debug!(permission = %kind, "permission denied, nothing to do");
            return Ok(None);
        }

        let Some(record) = self.collector.collect(kind, granted) else {
            return Ok(None);
        };

        self.log.append(&record).await?;
        info!(
            permission = %kind,
            data_type = record.fact_kind.as_str(),
            "fact recorded"
        );
        Ok(Some(record))
    }

    /// Raw contents of the data log, or the no-data sentinel
    pub async fn collected_data(&self) -> Result<String> {
        self.log.read_all().await
    }

    /// Wipe the entire data log
    pub async fn clear_collected_data(&self) -> Result<()> {
        self.log.clear().await
    }
}
