use std::process::ExitCode;

use clap::Parser;

mod commands;
mod printer;

use commands::{Cli, Command};
use silt_runtime::logging;

fn main() -> ExitCode {
    logging::init().ok();

    let cli = Cli::parse();
    match cli.command {
        Command::Scan(args) => commands::scan::run(args),
        Command::Sweep(args) => commands::sweep::run(args),
        Command::History(args) => commands::history::run(args),
        Command::Undo(args) => commands::undo::run(args),
    }
}
