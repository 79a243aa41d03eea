use chrono::{DateTime, Duration, Utc};
use silt_fs::{FileMetadata, PlatformProbe};

/// A classification verdict: why an entry qualified, with the evidence in
/// display order. Transient, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Explanation {
    pub reason: String,
    pub evidence: Vec<String>,
}

/// Report `entry` as likely unused, or `None` when it does not qualify.
///
/// Directories and unresolved entries never qualify. An unknown
/// last-accessed time never qualifies either: unknown is not evidence of
/// staleness. The threshold test runs against the modification time;
/// access times are unreliable on many filesystems and are reported as
/// evidence only.
pub fn explain_unused(
    entry: &FileMetadata,
    threshold_days: u32,
    now: DateTime<Utc>,
) -> Option<Explanation> {
    if !entry.is_resolved() || entry.is_dir {
        return None;
    }
    let accessed = entry.accessed_at?;
    let modified = entry.modified_at?;

    let threshold = Duration::hours(i64::from(threshold_days) * 24);
    if now.signed_duration_since(modified) < threshold {
        return None;
    }

    Some(Explanation {
        reason: format!("not modified in the last {threshold_days} days"),
        evidence: vec![
            format!("staleness threshold: {threshold_days} days"),
            format!("last modified: {}", modified.format("%Y-%m-%d %H:%M:%S")),
            format!("size: {} bytes", entry.size_bytes),
            format!("last accessed: {}", accessed.format("%Y-%m-%d %H:%M:%S")),
        ],
    })
}

/// Report `entry` as genuinely zero bytes, or `None` when it does not
/// qualify.
///
/// A reported zero size is not trusted on its own: cloud-sync placeholders
/// surface as zero-length through ordinary filesystem calls while their
/// real content simply is not local yet. The entry qualifies only when the
/// platform verifies the zero: a positive verified size or a placeholder
/// state vetoes the verdict regardless of what the tool reported.
pub fn explain_zero_byte(entry: &FileMetadata, probe: &dyn PlatformProbe) -> Option<Explanation> {
    if !entry.is_resolved() || entry.is_dir {
        return None;
    }

    let verified = probe.true_size(&entry.path);
    if matches!(verified, Some(size) if size > 0) {
        return None;
    }
    if probe.is_cloud_placeholder(&entry.path) {
        return None;
    }
    if entry.size_bytes != 0 || verified != Some(0) {
        return None;
    }

    Some(Explanation {
        reason: "file is zero bytes on disk".to_owned(),
        evidence: vec![
            "tool-reported and platform-verified sizes are both zero".to_owned(),
            "likely an incomplete download or placeholder artifact".to_owned(),
        ],
    })
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
