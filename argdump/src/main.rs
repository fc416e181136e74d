//! Parse this process's command line against a fixed option table and dump
//! the result.
//!
//! Exit status: 0 on success or after printing help, 1 when the `--status`
//! device code is negative (unless `--dry-run`), 2 when any option value
//! failed to convert.

mod logging;
mod options;

use std::process::ExitCode;

use argtab::{exit_on_error, exit_on_status};

use crate::options::{Settings, FLAG_DRY_RUN, FLAG_FORCE, FLAG_HELP, FLAG_QUIET, FLAG_VERBOSE};

fn main() -> ExitCode {
    logging::init();

    let args: Vec<String> = std::env::args().collect();
    let settings = Settings::default();
    let table = options::build_table(&settings);
    let outcome = table.parse_all(&args);
    tracing::debug!(args = args.len(), ok = outcome.is_ok(), "parsed command line");

    if settings.has(FLAG_HELP) {
        println!("Usage: argdump [OPTION]...");
        println!("Short values also switch on any flag letters they contain; prefer --name=value.");
        exit_on_error!(table.print_help());
        return ExitCode::SUCCESS;
    }

    if let Err(e) = outcome {
        eprintln!("argdump: {}", e);
        if settings.has(FLAG_FORCE) {
            exit_on_error!(table.print_values());
        }
        return ExitCode::from(2);
    }

    if settings.has(FLAG_VERBOSE) {
        eprintln!(
            "argdump: parsed {} arguments, flags {:#06x}",
            args.len(),
            settings.flags.get()
        );
    }

    if !settings.has(FLAG_DRY_RUN) {
        exit_on_status!(settings.status.get());
    }

    if !settings.has(FLAG_QUIET) {
        exit_on_error!(table.print_values());
    }
    ExitCode::SUCCESS
}
