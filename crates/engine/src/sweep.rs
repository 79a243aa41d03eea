use std::path::Path;

use chrono::{DateTime, Utc};
use log::warn;
use serde_json::json;
use silt_fs::{
    FileMetadata, FilterConfig, PlatformProbe, ReversibleDelete, coarse_type, file_name,
};
use silt_protocol::client::{ClientError, ToolClient, Transport};
use silt_runtime::history::{DeletionHistory, DeletionRecord, HistoryStore};
use thiserror::Error;

use crate::classify::{Explanation, explain_unused, explain_zero_byte};
use crate::parse::{ParseError, parse_file_info, parse_listing};

pub const LIST_DIRECTORY_TOOL: &str = "list_directory";
pub const FILE_INFO_TOOL: &str = "get_file_info";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// One `list_directory` round trip: the ordered paths the tool reported.
pub fn list_files<T: Transport>(
    client: &mut ToolClient<T>,
    path: &str,
) -> Result<Vec<String>, FetchError> {
    let raw = client.call(LIST_DIRECTORY_TOOL, json!({ "path": path }))?;
    Ok(parse_listing(&raw)?)
}

/// One `get_file_info` round trip, reconciled against the platform probe.
pub fn fetch_metadata<T: Transport>(
    client: &mut ToolClient<T>,
    path: &str,
    probe: &dyn PlatformProbe,
) -> Result<FileMetadata, FetchError> {
    let raw = client.call(FILE_INFO_TOOL, json!({ "path": path }))?;
    Ok(parse_file_info(&raw, path, probe)?)
}

#[derive(Debug, Clone)]
pub struct SweepConfig {
    pub threshold_days: u32,
    pub filter: FilterConfig,
    /// Offer every filtered entry, not just the ones a classifier flagged.
    pub include_unflagged: bool,
}

/// One entry up for review: its metadata and both classification verdicts.
#[derive(Debug)]
pub struct SweepCandidate {
    pub metadata: FileMetadata,
    pub unused: Option<Explanation>,
    pub zero_byte: Option<Explanation>,
}

impl SweepCandidate {
    pub fn flagged(&self) -> bool {
        self.unused.is_some() || self.zero_byte.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepDecision {
    Delete,
    Skip,
    /// Stop reviewing; the rest of the run is abandoned.
    Quit,
}

/// Presentation seam for the interactive run. The orchestrator hands over
/// plain data; rendering and prompting belong entirely to the front end.
pub trait SweepUi {
    fn review(&mut self, candidate: &SweepCandidate) -> SweepDecision;

    /// Called after the delete backend confirmed the removal.
    fn deleted(&mut self, record: &DeletionRecord);
}

#[derive(Debug, Default)]
pub struct SweepReport {
    pub scanned: usize,
    pub deleted: usize,
    pub skipped: usize,
    /// Set when the history file could not be rewritten after the run; the
    /// in-memory history is still intact.
    pub persist_error: Option<String>,
}

/// Drives the interactive deletion workflow over a set of candidate paths:
/// fetch metadata, filter, classify, confirm, delete, record, and persist
/// the history once at the end of the run.
///
/// Per-file failures (missing metadata, failed delete) degrade to "skip this
/// file, continue the run".
pub struct Sweeper<'a, T: Transport> {
    client: &'a mut ToolClient<T>,
    probe: &'a dyn PlatformProbe,
    trash: &'a dyn ReversibleDelete,
    config: SweepConfig,
}

impl<'a, T: Transport> Sweeper<'a, T> {
    pub fn new(
        client: &'a mut ToolClient<T>,
        probe: &'a dyn PlatformProbe,
        trash: &'a dyn ReversibleDelete,
        config: SweepConfig,
    ) -> Self {
        Self {
            client,
            probe,
            trash,
            config,
        }
    }

    pub fn run(
        &mut self,
        paths: &[String],
        history: &mut DeletionHistory,
        store: &HistoryStore,
        ui: &mut dyn SweepUi,
        now: DateTime<Utc>,
    ) -> SweepReport {
        let mut report = SweepReport::default();

        for path in paths {
            report.scanned += 1;

            let metadata = match fetch_metadata(self.client, path, self.probe) {
                Ok(metadata) => metadata,
                Err(err) => {
                    warn!("skipping {path}: {err}");
                    report.skipped += 1;
                    continue;
                }
            };

            if metadata.is_dir || !self.config.filter.accepts(&metadata.path, metadata.size_bytes)
            {
                report.skipped += 1;
                continue;
            }

            let candidate = SweepCandidate {
                unused: explain_unused(&metadata, self.config.threshold_days, now),
                zero_byte: explain_zero_byte(&metadata, self.probe),
                metadata,
            };

            if !self.config.include_unflagged && !candidate.flagged() {
                report.skipped += 1;
                continue;
            }

            match ui.review(&candidate) {
                SweepDecision::Skip => report.skipped += 1,
                SweepDecision::Quit => {
                    report.skipped += 1;
                    break;
                }
                SweepDecision::Delete => {
                    let target = &candidate.metadata.path;
                    match self.trash.delete(Path::new(target)) {
                        Ok(()) => {
                            let record = DeletionRecord::new(
                                target.clone(),
                                file_name(target),
                                candidate.metadata.size_bytes,
                                coarse_type(target),
                                now,
                            );
                            history.push(record.clone());
                            ui.deleted(&record);
                            report.deleted += 1;
                        }
                        Err(err) => {
                            warn!("failed to delete {target}: {err}");
                            report.skipped += 1;
                        }
                    }
                }
            }
        }

        if report.deleted > 0
            && let Err(err) = store.save(history)
        {
            report.persist_error = Some(err.to_string());
        }

        report
    }
}

#[cfg(test)]
#[path = "sweep_tests.rs"]
mod tests;
