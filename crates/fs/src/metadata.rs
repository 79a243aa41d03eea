use chrono::{DateTime, Utc};

/// One filesystem entry as reconstructed from the tool's reply.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileMetadata {
    /// Canonical identifier. May be rewritten during parsing when the tool
    /// omitted an extension the real filesystem requires.
    pub path: String,
    /// Authoritative size; a platform-verified size wins over the
    /// tool-reported one when they disagree.
    pub size_bytes: i64,
    /// Creation time; `None` means unknown, never epoch zero.
    pub created_at: Option<DateTime<Utc>>,
    /// Last modification time
    pub modified_at: Option<DateTime<Utc>>,
    /// Last access time (unreliable on many filesystems/mount options)
    pub accessed_at: Option<DateTime<Utc>>,
    pub is_file: bool,
    pub is_dir: bool,
    /// Informational only, not used in control flow.
    pub mime_type: String,
}

impl FileMetadata {
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Exactly one of `is_file`/`is_dir` holds for a resolved entry; an
    /// unresolved entry must not be classified.
    pub fn is_resolved(&self) -> bool {
        self.is_file != self.is_dir
    }
}
