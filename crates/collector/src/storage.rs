//! App Storage Sizing
//!
//! Recursive byte sum over the application's private data directory.
//! Only aggregate numbers leave this module; file names and contents
//! are never reported.

use std::fs;
use std::path::Path;

use tracing::warn;

/// Total size in bytes of all regular files under `dir`.
///
/// A missing or empty directory counts as 0. Symbolic links are never
/// followed, so cyclic links cannot loop the walk. Entries that cannot
/// be read are skipped rather than failing the whole sum.
pub fn dir_size(dir: &Path) -> u64 {
    let metadata = match fs::symlink_metadata(dir) {
        Ok(metadata) => metadata,
        Err(_) => return 0,
    };
    if !metadata.is_dir() {
        return 0;
    }

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("cannot read directory {:?}: {}", dir, e);
            return 0;
        }
    };

    let mut size: u64 = 0;
    for entry in entries.flatten() {
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        if file_type.is_symlink() {
            continue;
        }
        if file_type.is_file() {
            if let Ok(metadata) = entry.metadata() {
                size = size.saturating_add(metadata.len());
            }
        } else if file_type.is_dir() {
            size = size.saturating_add(dir_size(&entry.path()));
        }
    }
    size
}
