use std::sync::OnceLock;

use chrono::{DateTime, NaiveDateTime, Utc};
use regex::Regex;
use silt_fs::{FileMetadata, PlatformProbe};
use silt_protocol::ToolResponse;
use thiserror::Error;

/// Extensions tried, in order, when the tool reports a path the filesystem
/// cannot resolve. The tool is known to drop extensions on some entries.
const EXTENSION_CANDIDATES: &[&str] = &[".pdf", ".doc", ".docx", ".txt"];

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed tool response envelope: {0}")]
    Envelope(#[from] serde_json::Error),
}

fn uri_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"file://([^\s)]+)").expect("valid file URI pattern"))
}

/// Extract the ordered file paths from a `list_directory` reply.
///
/// Every text block is scanned for `file://<path>` substrings, terminated by
/// whitespace or a closing parenthesis. Order and duplicates are preserved;
/// a reply with no matches is an empty listing, not an error.
pub fn parse_listing(raw: &[u8]) -> Result<Vec<String>, ParseError> {
    let response: ToolResponse = serde_json::from_slice(raw)?;

    let mut paths = Vec::new();
    for text in response.text_blocks() {
        for capture in uri_pattern().captures_iter(text) {
            paths.push(capture[1].to_owned());
        }
    }
    Ok(paths)
}

/// Reconstruct file metadata from a `get_file_info` reply.
///
/// The tool's text format is not a guaranteed contract: fields that are
/// absent or fail to parse stay at their zero value. Only a malformed
/// envelope is fatal.
pub fn parse_file_info(
    raw: &[u8],
    path: &str,
    probe: &dyn PlatformProbe,
) -> Result<FileMetadata, ParseError> {
    let response: ToolResponse = serde_json::from_slice(raw)?;

    let mut meta = FileMetadata::with_path(path);
    for text in response.text_blocks() {
        for line in text.lines() {
            apply_field(&mut meta, line);
        }
    }

    reconcile_with_platform(&mut meta, probe);
    Ok(meta)
}

fn apply_field(meta: &mut FileMetadata, line: &str) {
    let line = line.trim();
    if let Some(rest) = line.strip_prefix("Size:") {
        if let Some(size) = parse_size(rest) {
            meta.size_bytes = size;
        }
    } else if let Some(rest) = line.strip_prefix("Created:") {
        meta.created_at = parse_timestamp(rest);
    } else if let Some(rest) = line.strip_prefix("Modified:") {
        meta.modified_at = parse_timestamp(rest);
    } else if let Some(rest) = line.strip_prefix("Accessed:") {
        meta.accessed_at = parse_timestamp(rest);
    } else if let Some(rest) = line.strip_prefix("IsFile:") {
        meta.is_file = parse_bool(rest);
    } else if let Some(rest) = line.strip_prefix("IsDirectory:") {
        meta.is_dir = parse_bool(rest);
    } else if let Some(rest) = line.strip_prefix("MIME Type:") {
        meta.mime_type = rest.trim().to_owned();
    }
}

/// "Size: 1234 bytes"; the unit suffix is dropped.
fn parse_size(text: &str) -> Option<i64> {
    text.split_whitespace().next()?.parse().ok()
}

fn parse_bool(text: &str) -> bool {
    text.trim().eq_ignore_ascii_case("true")
}

fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|naive| naive.and_utc())
}

/// The tool may report a cloud placeholder's logical size and may drop file
/// extensions. The platform probe is the authority: its size wins, and when
/// the reported path does not resolve, common document extensions are tried
/// and the path rewritten to the first that does.
fn reconcile_with_platform(meta: &mut FileMetadata, probe: &dyn PlatformProbe) {
    if meta.is_dir {
        return;
    }

    let mut verified = probe.true_size(&meta.path);
    if verified.is_none() {
        for ext in EXTENSION_CANDIDATES {
            let candidate = format!("{}{ext}", meta.path);
            if let Some(size) = probe.true_size(&candidate) {
                meta.path = candidate;
                verified = Some(size);
                break;
            }
        }
    }

    if let Some(size) = verified {
        meta.size_bytes = size;
    }
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
