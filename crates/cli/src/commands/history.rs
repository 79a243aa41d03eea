use std::process::ExitCode;

use clap::Args;

use silt_runtime::history::HistoryStore;

use crate::printer::{ColorChoice, Printer};

#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// Number of entries to display
    #[arg(long, short = 'n', default_value = "20")]
    pub limit: usize,

    /// When to use colors: auto, always, never
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: String,
}

pub fn run(args: HistoryArgs) -> ExitCode {
    let printer = Printer::stdout(ColorChoice::parse(&args.color));

    let store = HistoryStore::new();
    let history = match store.load() {
        Ok(history) => history,
        Err(e) => {
            eprintln!("[error] {e}");
            return ExitCode::from(1);
        }
    };

    if history.is_empty() {
        println!("No files deleted yet.");
        return ExitCode::SUCCESS;
    }

    println!("Deletion History ({} files)", history.len());
    printer.divider();

    let start = history.len().saturating_sub(args.limit);
    for (index, record) in history.records.iter().enumerate().skip(start) {
        printer.history_entry(index + 1, record);
    }

    if start > 0 {
        println!("({start} older entries, use --limit to show more)");
    }

    ExitCode::SUCCESS
}
