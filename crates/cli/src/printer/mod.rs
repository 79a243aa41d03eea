use std::io::IsTerminal;

use silt_engine::{Explanation, SweepCandidate, SweepReport};
use silt_fs::{coarse_type, file_name};
use silt_runtime::history::DeletionRecord;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const BLUE: &str = "\x1b[34m";
const CYAN: &str = "\x1b[36m";

/// Color handling strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorChoice {
    /// Detect TTY and enable colors if appropriate.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn parse(input: &str) -> Self {
        match input {
            "always" => Self::Always,
            "never" => Self::Never,
            _ => Self::Auto,
        }
    }
}

/// Human-facing output for scan results, sweep candidates, and history.
pub struct Printer {
    use_color: bool,
}

impl Printer {
    pub fn stdout(choice: ColorChoice) -> Self {
        let use_color = match choice {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => std::io::stdout().is_terminal(),
        };
        Self { use_color }
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.use_color {
            format!("{code}{text}{RESET}")
        } else {
            text.to_owned()
        }
    }

    pub fn info(&self, message: &str) {
        println!("    {}", self.paint(CYAN, &format!("ℹ {message}")));
    }

    pub fn success(&self, message: &str) {
        println!("    {}", self.paint(GREEN, &format!("✓ {message}")));
    }

    pub fn warning(&self, message: &str) {
        println!("    {}", self.paint(YELLOW, &format!("⚠ {message}")));
    }

    pub fn error(&self, message: &str) {
        println!("    {}", self.paint(RED, &format!("✗ {message}")));
    }

    pub fn divider(&self) {
        println!("{}", self.paint(CYAN, &"─".repeat(60)));
    }

    fn field(&self, label: &str, value: &str) {
        println!("      {}: {value}", self.paint(BLUE, label));
    }

    fn tagged_block(&self, color: &str, tag: &str, path: &str, explanation: &Explanation) {
        println!(
            "\n{} {}",
            self.paint(color, &format!("{BOLD}{tag}")),
            self.paint(BOLD, path)
        );
        println!("  {}: {}", self.paint(color, "Reason"), explanation.reason);
        for evidence in &explanation.evidence {
            println!("  {} {evidence}", self.paint(color, "▸"));
        }
    }

    pub fn unused(&self, path: &str, explanation: &Explanation) {
        self.tagged_block(RED, "[UNUSED]", path, explanation);
    }

    pub fn zero_byte(&self, path: &str, explanation: &Explanation) {
        self.tagged_block(YELLOW, "[ZERO-BYTE]", path, explanation);
    }

    /// Everything the user needs to judge one deletion candidate.
    pub fn candidate(&self, candidate: &SweepCandidate) {
        let meta = &candidate.metadata;
        println!();
        self.divider();
        self.field("Name", file_name(&meta.path));
        self.field("Size", &human_size(meta.size_bytes));
        self.field("Type", coarse_type(&meta.path));
        self.field("Path", &meta.path);
        if let Some(explanation) = &candidate.unused {
            self.unused(&meta.path, explanation);
        }
        if let Some(explanation) = &candidate.zero_byte {
            self.zero_byte(&meta.path, explanation);
        }
    }

    pub fn scan_summary(&self, scanned: usize, unused: usize, zero_byte: usize) {
        println!();
        self.divider();
        println!("{}", self.paint(BOLD, "Scan Summary:"));
        self.field("Files Scanned", &scanned.to_string());
        self.field("Unused Files", &unused.to_string());
        self.field("Zero-Byte Files", &zero_byte.to_string());
        self.divider();
    }

    pub fn sweep_summary(&self, report: &SweepReport) {
        println!();
        self.divider();
        self.info(&format!(
            "{} scanned, {} deleted, {} skipped",
            report.scanned, report.deleted, report.skipped
        ));
        if let Some(err) = &report.persist_error {
            self.error(&format!("history not saved: {err}"));
        }
    }

    pub fn history_entry(&self, index: usize, record: &DeletionRecord) {
        println!(
            "{} {}",
            self.paint(YELLOW, &format!("{index}.")),
            record.filename
        );
        self.field("Size", &human_size(record.filesize));
        self.field("Type", &record.file_type);
        self.field(
            "Deleted",
            &record.deleted_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        );
        self.field("Original", &record.original_file_path);
        println!();
    }
}

/// Binary-unit size formatting: 1024 B boundary, one decimal above it.
pub fn human_size(size: i64) -> String {
    const UNIT: i64 = 1024;
    if size < UNIT {
        return format!("{size} B");
    }
    let mut div = UNIT;
    let mut exp = 0;
    let mut n = size / UNIT;
    while n >= UNIT {
        div *= UNIT;
        exp += 1;
        n /= UNIT;
    }
    let prefixes = ['K', 'M', 'G', 'T', 'P', 'E'];
    format!("{:.1} {}B", size as f64 / div as f64, prefixes[exp])
}

#[cfg(test)]
#[path = "printer_tests.rs"]
mod tests;
