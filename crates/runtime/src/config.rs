use std::path::PathBuf;

pub const PROGRAM_NAME: &str = "silt";
pub const PROGRAM_LOG_LEVEL: &str = "SILT_LOG_LEVEL";

/// External filesystem tool the protocol client spawns.
pub const DEFAULT_TOOL_COMMAND: &str = "mcp-filesystem-server";

/// Days without modification before a file is reported as likely unused.
pub const DEFAULT_THRESHOLD_DAYS: u32 = 60;

const HISTORY_FILE_NAME: &str = "deletion-history.json";

/// Default location of the deletion history document, under the user's home
/// directory.
pub fn default_history_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(format!(".{PROGRAM_NAME}"))
        .join(HISTORY_FILE_NAME)
}
