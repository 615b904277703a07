//! Platform Providers
//!
//! Seams over the platform query surfaces the collector reads from.
//! A real deployment backs these with the OS contact store and
//! location service; tests and demos use the simulated variants.

use consent_core::{LedgerError, Result};

/// A position fix from the location provider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationFix {
    pub latitude: f64,
    pub longitude: f64,
    /// Estimated accuracy radius in meters, reported as-is
    pub accuracy: f64,
}

/// Read-only view of the platform contact store
pub trait ContactStore: Send + Sync {
    /// Number of contact rows. Never exposes per-contact fields.
    ///
    /// Fails with [`LedgerError::Unauthorized`] when the OS-level
    /// grant is missing at query time.
    fn contact_count(&self) -> Result<u64>;
}

/// Read-only view of the platform location service
pub trait LocationProvider: Send + Sync {
    /// Most recent known fix, if any
    fn last_known(&self) -> Result<Option<LocationFix>>;
}

/// In-memory contact store for simulation and tests
#[derive(Debug, Clone)]
pub struct SimulatedContactStore {
    count: u64,
    authorized: bool,
}

impl SimulatedContactStore {
    /// A store holding `count` contacts
    pub fn with_contacts(count: u64) -> Self {
        Self {
            count,
            authorized: true,
        }
    }

    /// A store that rejects every query, as if the OS grant were revoked
    pub fn unauthorized() -> Self {
        Self {
            count: 0,
            authorized: false,
        }
    }
}

impl ContactStore for SimulatedContactStore {
    fn contact_count(&self) -> Result<u64> {
        if !self.authorized {
            return Err(LedgerError::Unauthorized(
                "contact store queried without OS-level grant".into(),
            ));
        }
        Ok(self.count)
    }
}

/// In-memory location provider for simulation and tests
#[derive(Debug, Clone, Default)]
pub struct SimulatedLocationProvider {
    fix: Option<LocationFix>,
}

impl SimulatedLocationProvider {
    /// A provider whose last known position is the given coordinates
    pub fn with_fix(latitude: f64, longitude: f64, accuracy: f64) -> Self {
        Self {
            fix: Some(LocationFix {
                latitude,
                longitude,
                accuracy,
            }),
        }
    }

    /// A provider with no last known position
    pub fn unavailable() -> Self {
        Self { fix: None }
    }
}

impl LocationProvider for SimulatedLocationProvider {
    fn last_known(&self) -> Result<Option<LocationFix>> {
        Ok(self.fix)
    }
}
