use std::io::{self, Write as _};
use std::process::ExitCode;

use chrono::Utc;
use clap::Args;

use silt_engine::{SweepCandidate, SweepConfig, SweepDecision, SweepUi, Sweeper, list_files};
use silt_fs::{NativeProbe, NativeTrash};
use silt_runtime::history::{DeletionRecord, HistoryStore};

use crate::commands::{CommandResult, InspectOptions};
use crate::printer::Printer;

#[derive(Debug, Args)]
pub struct SweepArgs {
    #[command(flatten)]
    pub options: InspectOptions,

    /// Offer every filtered file for review, not only flagged ones
    #[arg(long)]
    pub all: bool,
}

/// Per-candidate confirmation over stdin.
struct PromptUi<'a> {
    printer: &'a Printer,
}

impl SweepUi for PromptUi<'_> {
    fn review(&mut self, candidate: &SweepCandidate) -> SweepDecision {
        self.printer.candidate(candidate);

        print!("Delete this file? [y/N/q] ");
        io::stdout().flush().ok();

        let mut line = String::new();
        if io::stdin().read_line(&mut line).is_err() {
            return SweepDecision::Quit;
        }
        match line.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => SweepDecision::Delete,
            "q" | "quit" => SweepDecision::Quit,
            _ => SweepDecision::Skip,
        }
    }

    fn deleted(&mut self, record: &DeletionRecord) {
        self.printer
            .success(&format!("moved {} to the trash", record.filename));
    }
}

pub fn run(args: SweepArgs) -> ExitCode {
    match execute(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("[error] {e}");
            ExitCode::from(2)
        }
    }
}

fn execute(args: SweepArgs) -> CommandResult<ExitCode> {
    let printer = args.options.printer();
    let probe = NativeProbe;
    let trash = NativeTrash::new()?;

    let store = HistoryStore::new();
    let mut history = store.load()?;

    let mut client = args.options.spawn_client()?;
    let paths = list_files(&mut client, &args.options.root)?;

    let config = SweepConfig {
        threshold_days: args.options.days,
        filter: args.options.filter(),
        include_unflagged: args.all,
    };

    let mut ui = PromptUi { printer: &printer };
    let report = Sweeper::new(&mut client, &probe, &trash, config).run(
        &paths,
        &mut history,
        &store,
        &mut ui,
        Utc::now(),
    );

    printer.sweep_summary(&report);
    Ok(ExitCode::SUCCESS)
}
