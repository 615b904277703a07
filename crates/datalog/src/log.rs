//! Append-Only Data Log
//!
//! A single file of serialized fact records. Appends open the file in
//! append mode and write one block; the log is never read back,
//! truncated, or rewritten to service a write, so a write costs the
//! same no matter how large the file has grown.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use consent_core::{FactRecord, Result};

use crate::writer;

/// Sentinel returned by [`DataLog::read_all`] when nothing has been
/// collected yet
pub const NO_DATA: &str = "No data collected yet";

/// The append-only log of collected fact records
#[derive(Debug, Clone)]
pub struct DataLog {
    path: PathBuf,
}

impl DataLog {
    /// A log backed by the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// A log at the standard file name inside a data directory
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(consent_core::config::LOG_FILE_NAME))
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record to the log.
    ///
    /// Creates the file (and its parent directory) on first use. Prior
    /// entries are never touched; an I/O failure is surfaced to the
    /// caller and not retried.
    pub async fn append(&self, record: &FactRecord) -> Result<()> {
        let block = writer::render(record)?;

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(block.as_bytes()).await?;
        file.flush().await?;

        debug!("record appended to {:?}", self.path);
        Ok(())
    }

    /// Full concatenated log text, or [`NO_DATA`] when the file does
    /// not exist.
    ///
    /// The text is a sequence of JSON object blocks; callers parse
    /// blocks individually, the file is not one JSON document.
    pub async fn read_all(&self) -> Result<String> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => Ok(contents),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(NO_DATA.to_string()),
            Err(e) => Err(e.into()),
        }
    }

    /// Delete the backing file. An absent file is a no-op, not an
    /// error.
    pub async fn clear(&self) -> Result<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => {
                info!("collected data cleared from {:?}", self.path);
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
