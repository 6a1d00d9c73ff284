//! JSON persistence for the watched list.
//!
//! The on-disk format is a plain serde array of entries; there is no schema
//! version and no migration story.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use thiserror::Error;

use super::WatchedMovie;

/// Errors that can occur while loading or saving the watched list.
#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("Failed to read library file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse library file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write library file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode library file '{path}': {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Path-owning store for the watched list.
pub struct LibraryStore {
    path: PathBuf,
}

impl LibraryStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all entries. A missing file is an empty list, not an error.
    pub fn load(&self) -> Result<Vec<WatchedMovie>, LibraryError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| LibraryError::Read {
            path: self.path.clone(),
            source: e,
        })?;

        serde_json::from_str(&content).map_err(|e| LibraryError::Parse {
            path: self.path.clone(),
            source: e,
        })
    }

    /// Replace the file contents with the given entries.
    ///
    /// Holds an exclusive file lock for the duration of the write so two
    /// instances saving concurrently cannot interleave.
    pub fn save(&self, entries: &[WatchedMovie]) -> Result<(), LibraryError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| LibraryError::Write {
                path: self.path.clone(),
                source: e,
            })?;
        }

        // Open without truncating: the file may only be emptied once the
        // exclusive lock is held, otherwise a concurrent saver clobbers a
        // write in progress.
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .open(&self.path)
            .map_err(|e| LibraryError::Write {
                path: self.path.clone(),
                source: e,
            })?;
        file.lock_exclusive().map_err(|e| LibraryError::Write {
            path: self.path.clone(),
            source: e,
        })?;
        file.set_len(0).map_err(|e| LibraryError::Write {
            path: self.path.clone(),
            source: e,
        })?;

        serde_json::to_writer_pretty(&file, entries).map_err(|e| LibraryError::Encode {
            path: self.path.clone(),
            source: e,
        })?;

        tracing::debug!(path = %self.path.display(), count = entries.len(), "Library saved");
        Ok(())
    }
}
