use std::{
    fs, io,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::default_history_path;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("no deletions to undo")]
    Empty,

    #[error("failed to access history file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed history file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// One deleted entry. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletionRecord {
    pub original_file_path: String,
    pub filename: String,
    pub filesize: i64,
    pub deleted_at: DateTime<Utc>,
    /// Coarse type label ("PDF", "Image", ...), for display only.
    pub file_type: String,
}

impl DeletionRecord {
    pub fn new(
        original_file_path: impl Into<String>,
        filename: impl Into<String>,
        filesize: i64,
        file_type: impl Into<String>,
        deleted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            original_file_path: original_file_path.into(),
            filename: filename.into(),
            filesize,
            deleted_at,
            file_type: file_type.into(),
        }
    }
}

/// Ordered log of deletions; insertion order is deletion order. Appended on
/// each successful deletion, popped by undo, persisted as a whole.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DeletionHistory {
    #[serde(default)]
    pub records: Vec<DeletionRecord>,
}

impl DeletionHistory {
    pub fn push(&mut self, record: DeletionRecord) {
        self.records.push(record);
    }

    /// Drop the most recent record and hand it back so the caller can tell
    /// the user where the file came from. Removing the record does not
    /// restore the file; that stays with the OS trash.
    pub fn undo_last(&mut self) -> Result<DeletionRecord, HistoryError> {
        self.records.pop().ok_or(HistoryError::Empty)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Whole-file JSON store for the deletion history.
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self {
            path: default_history_path(),
        }
    }

    /// Store at a custom location.
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full history. A missing file is the valid initial state and
    /// yields an empty history; a malformed file is fatal.
    pub fn load(&self) -> Result<DeletionHistory, HistoryError> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Ok(DeletionHistory::default());
            }
            Err(source) => {
                return Err(HistoryError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        serde_json::from_slice(&data).map_err(|source| HistoryError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Overwrite the history file with the full serialized aggregate. A
    /// failure here leaves the in-memory history untouched; the caller
    /// reports it and carries on.
    pub fn save(&self, history: &DeletionHistory) -> Result<(), HistoryError> {
        let io_err = |source| HistoryError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let json = serde_json::to_vec_pretty(history).map_err(|source| HistoryError::Parse {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, json).map_err(io_err)
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod tests;
