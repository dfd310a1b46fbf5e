//! Seed document generation CLI.
//!
//! This binary delegates to `fixture_data::seed_cli` for parsing and
//! generation logic, keeping the CLI behaviour testable without spawning a
//! process.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use fixture_data::seed_cli::{
    CliError, ParseOutcome, parse_args, run_generation, success_message,
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), CliError> {
    match parse_args(env::args().skip(1))? {
        ParseOutcome::Help => {
            print_usage(io::stdout().lock());
            Ok(())
        }
        ParseOutcome::Options(options) => {
            let summary = run_generation(&options)?;
            let message = success_message(&summary, options.out());
            write_success(&message);
            Ok(())
        }
    }
}

fn print_usage(mut out: impl Write) {
    let usage = concat!(
        "Usage: fixture-data-seed [options]\n",
        "\n",
        "Options:\n",
        "  --out <path>     Destination file (defaults to populate_db.json)\n",
        "  --seed <seed>    RNG seed value (defaults to random)\n",
        "  --now <time>     Generation instant as YYYY-MM-DD HH:MM:SS\n",
        "                   (defaults to the local clock)\n",
        "  -h, --help       Print this help output\n",
    );
    if let Err(err) = out.write_all(usage.as_bytes()) {
        drop(err);
    }
}

fn write_success(message: &str) {
    if let Err(err) = writeln!(io::stdout().lock(), "{message}") {
        drop(err);
    }
}
