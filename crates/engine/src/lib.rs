mod classify;
mod parse;
mod sweep;

pub use classify::{Explanation, explain_unused, explain_zero_byte};
pub use parse::{ParseError, parse_file_info, parse_listing};
pub use sweep::{
    FILE_INFO_TOOL, FetchError, LIST_DIRECTORY_TOOL, SweepCandidate, SweepConfig, SweepDecision,
    SweepReport, SweepUi, Sweeper, fetch_metadata, list_files,
};
