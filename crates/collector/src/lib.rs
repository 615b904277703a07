//! Consent Collector - permission-gated fact derivation
//!
//! Given a permission kind and its grant flag, derives at most one
//! privacy-reduced fact (a count, a rounded coordinate, an aggregate
//! size) from the platform providers. Camera and microphone gate
//! real-time capability only and never produce a fact.

pub mod collect;
pub mod providers;
pub mod storage;

pub use collect::{round_coordinate, Collector};
pub use providers::{
    ContactStore, LocationFix, LocationProvider, SimulatedContactStore, SimulatedLocationProvider,
};
pub use storage::dir_size;
