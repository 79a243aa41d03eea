use std::process::ExitCode;

use clap::Args;

use silt_runtime::history::{HistoryError, HistoryStore};

use crate::commands::CommandResult;
use crate::printer::{ColorChoice, Printer};

#[derive(Debug, Args)]
pub struct UndoArgs {
    /// When to use colors: auto, always, never
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: String,
}

pub fn run(args: UndoArgs) -> ExitCode {
    match execute(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("[error] {e}");
            ExitCode::from(2)
        }
    }
}

fn execute(args: UndoArgs) -> CommandResult<ExitCode> {
    let printer = Printer::stdout(ColorChoice::parse(&args.color));

    let store = HistoryStore::new();
    let mut history = store.load()?;

    let record = match history.undo_last() {
        Ok(record) => record,
        Err(HistoryError::Empty) => {
            printer.warning("no deletions to undo");
            return Ok(ExitCode::from(1));
        }
        Err(e) => return Err(e.into()),
    };

    store.save(&history)?;

    printer.info(&format!("removed {} from the history", record.filename));
    printer.info(&format!(
        "the file was moved to the trash from: {}",
        record.original_file_path
    ));
    printer.info("restore it manually through your system's trash");
    Ok(ExitCode::SUCCESS)
}
