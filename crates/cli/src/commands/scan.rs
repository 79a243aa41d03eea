use std::process::ExitCode;

use chrono::Utc;
use clap::Args;
use log::warn;

use silt_engine::{explain_unused, explain_zero_byte, fetch_metadata, list_files};
use silt_fs::NativeProbe;

use crate::commands::{CommandResult, InspectOptions};

#[derive(Debug, Args)]
pub struct ScanArgs {
    #[command(flatten)]
    pub options: InspectOptions,
}

pub fn run(args: ScanArgs) -> ExitCode {
    match execute(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("[error] {e}");
            ExitCode::from(2)
        }
    }
}

fn execute(args: ScanArgs) -> CommandResult<ExitCode> {
    let printer = args.options.printer();
    let probe = NativeProbe;
    let filter = args.options.filter();

    let mut client = args.options.spawn_client()?;
    let paths = list_files(&mut client, &args.options.root)?;

    let now = Utc::now();
    let mut scanned = 0usize;
    let mut unused_count = 0usize;
    let mut zero_byte_count = 0usize;

    for path in &paths {
        let meta = match fetch_metadata(&mut client, path, &probe) {
            Ok(meta) => meta,
            Err(err) => {
                warn!("skipping {path}: {err}");
                continue;
            }
        };

        if meta.is_dir || !filter.accepts(&meta.path, meta.size_bytes) {
            continue;
        }
        scanned += 1;

        if let Some(explanation) = explain_unused(&meta, args.options.days, now) {
            printer.unused(&meta.path, &explanation);
            unused_count += 1;
        }
        if let Some(explanation) = explain_zero_byte(&meta, &probe) {
            printer.zero_byte(&meta.path, &explanation);
            zero_byte_count += 1;
        }
    }

    printer.scan_summary(scanned, unused_count, zero_byte_count);
    Ok(ExitCode::SUCCESS)
}
