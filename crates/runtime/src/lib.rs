mod config;
pub mod history;
pub mod logging;

pub use config::{
    DEFAULT_THRESHOLD_DAYS, DEFAULT_TOOL_COMMAND, PROGRAM_LOG_LEVEL, PROGRAM_NAME,
    default_history_path,
};
