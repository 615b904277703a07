//! Consent Datalog - append-only fact persistence
//!
//! Serializes fact records into pretty-printed JSON object blocks and
//! appends them to a single log file. The file is a sequence of
//! independent objects separated by blank lines, not one JSON
//! document; prior entries are never rewritten.

pub mod log;
pub mod writer;

pub use log::{DataLog, NO_DATA};
pub use writer::render;
