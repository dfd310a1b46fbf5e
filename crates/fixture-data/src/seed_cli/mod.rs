//! CLI support for generating the seed document.
//!
//! This module provides parsing and orchestration helpers for the seed
//! generation CLI. The binary delegates to these functions so they can be
//! exercised in tests without spawning a subprocess.

use std::fmt;

use camino::{Utf8Path, Utf8PathBuf};
use chrono::{Local, NaiveDateTime};
use rand::Rng;
use thiserror::Error;

use crate::config::{DEFAULT_OUTPUT_PATH, TIMESTAMP_FORMAT};
use crate::error::{ConfigError, WriteError};
use crate::generator::generate_seed_document;

/// Parsed options for the seed generation CLI.
#[derive(Debug, Clone)]
pub struct Options {
    out: Utf8PathBuf,
    seed: Option<u64>,
    now: Option<NaiveDateTime>,
}

impl Options {
    /// Returns the destination path for the seed document.
    #[must_use]
    pub fn out(&self) -> &Utf8Path {
        self.out.as_path()
    }

    /// Returns the RNG seed override, if one was supplied.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the generation-instant override, if one was supplied.
    #[must_use]
    pub const fn now(&self) -> Option<NaiveDateTime> {
        self.now
    }
}

/// Outcome of parsing CLI arguments.
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    /// Show help output and exit successfully.
    Help,
    /// Continue with the parsed options.
    Options(Options),
}

/// Result of a completed generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Seed the document was generated with.
    pub seed: u64,
    /// Number of companies written.
    pub companies: usize,
    /// Number of sites written.
    pub sites: usize,
    /// Number of devices written.
    pub devices: usize,
    /// Number of realtime readings written.
    pub readings: usize,
    /// Number of API keys written.
    pub api_keys: usize,
    /// Number of users written.
    pub users: usize,
}

/// Parses CLI arguments into a generation plan.
///
/// # Errors
///
/// Returns [`CliError`] when a flag is missing its value or a value cannot
/// be parsed.
///
/// # Example
///
/// ```
/// use fixture_data::seed_cli::{ParseOutcome, parse_args};
///
/// let args = vec!["--seed".to_string(), "42".to_string()];
/// let ParseOutcome::Options(options) = parse_args(args.into_iter()).expect("parse") else {
///     panic!("expected options");
/// };
///
/// assert_eq!(options.seed(), Some(42));
/// assert_eq!(options.out().as_str(), "populate_db.json");
/// ```
pub fn parse_args<I>(mut args: I) -> Result<ParseOutcome, CliError>
where
    I: Iterator<Item = String>,
{
    let mut out: Option<Utf8PathBuf> = None;
    let mut seed: Option<u64> = None;
    let mut now: Option<NaiveDateTime> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(ParseOutcome::Help),
            "--out" => {
                let value = next_value(&mut args, "--out")?;
                out = Some(Utf8PathBuf::from(value));
            }
            "--seed" => {
                let value = next_value(&mut args, "--seed")?;
                seed = Some(parse_number(&value, "--seed")?);
            }
            "--now" => {
                let value = next_value(&mut args, "--now")?;
                now = Some(parse_timestamp(&value)?);
            }
            _ => return Err(CliError::UnknownArgument { value: arg }),
        }
    }

    Ok(ParseOutcome::Options(Options {
        out: out.unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_OUTPUT_PATH)),
        seed,
        now,
    }))
}

/// Generates the seed document and writes it to the configured path.
///
/// Missing options fall back to a random seed and the local wall clock; the
/// resolved seed is returned in the [`Summary`] so a run can be reproduced.
///
/// # Errors
///
/// Returns [`CliError`] when the fixed configuration is inconsistent or the
/// document cannot be written.
pub fn run_generation(options: &Options) -> Result<Summary, CliError> {
    let seed = options.seed.unwrap_or_else(random_seed);
    let now = options.now.unwrap_or_else(local_now);

    let document = generate_seed_document(seed, now)?;
    document.write_to_file(options.out())?;

    Ok(Summary {
        seed,
        companies: document.master_perusahaan.len(),
        sites: document.master_site.len(),
        devices: document.master_device.len(),
        readings: document.data_realtime.len(),
        api_keys: document.api_keys.len(),
        users: document.users.len(),
    })
}

/// Formats the success message emitted by the CLI.
///
/// # Example
///
/// ```
/// use camino::Utf8Path;
/// use fixture_data::seed_cli::{Summary, success_message};
///
/// let summary = Summary {
///     seed: 42,
///     companies: 25,
///     sites: 50,
///     devices: 400,
///     readings: 1200,
///     api_keys: 25,
///     users: 25,
/// };
/// let message = success_message(&summary, Utf8Path::new("populate_db.json"));
///
/// assert!(message.contains("seed=42"));
/// ```
#[must_use]
pub fn success_message(summary: &Summary, out: &Utf8Path) -> String {
    format!(
        "Wrote {} companies, {} sites, {} devices, {} readings, {} api keys, {} users to {out} (seed={})",
        summary.companies,
        summary.sites,
        summary.devices,
        summary.readings,
        summary.api_keys,
        summary.users,
        summary.seed
    )
}

fn next_value<I>(args: &mut I, flag: &'static str) -> Result<String, CliError>
where
    I: Iterator<Item = String>,
{
    args.next().ok_or(CliError::MissingValue { flag })
}

fn parse_number<T>(value: &str, flag: &'static str) -> Result<T, CliError>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    value.parse::<T>().map_err(|err| CliError::InvalidNumber {
        flag,
        value: value.to_owned(),
        message: err.to_string(),
    })
}

fn parse_timestamp(value: &str) -> Result<NaiveDateTime, CliError> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map_err(|err| {
        CliError::InvalidTimestamp {
            value: value.to_owned(),
            message: err.to_string(),
        }
    })
}

fn random_seed() -> u64 {
    rand::rng().random()
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Errors surfaced by the CLI parsing and generation flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// A flag expected a value but none was provided.
    #[error("missing value for {flag}")]
    MissingValue {
        /// Flag that was missing its value.
        flag: &'static str,
    },
    /// An unsupported argument was supplied.
    #[error("unknown argument: {value}")]
    UnknownArgument {
        /// Argument value that was not recognised.
        value: String,
    },
    /// A numeric value failed to parse.
    #[error("invalid number for {flag}: '{value}' ({message})")]
    InvalidNumber {
        /// Flag associated with the invalid number.
        flag: &'static str,
        /// Raw value supplied for the flag.
        value: String,
        /// Parser error message.
        message: String,
    },
    /// A timestamp value did not match the document layout.
    #[error("invalid timestamp for --now: '{value}' ({message}); expected YYYY-MM-DD HH:MM:SS")]
    InvalidTimestamp {
        /// Raw value supplied for the flag.
        value: String,
        /// Parser error message.
        message: String,
    },
    /// The fixed generation constants disagree with each other.
    #[error("configuration error: {source}")]
    Config {
        /// Underlying configuration error.
        #[from]
        #[source]
        source: ConfigError,
    },
    /// The seed document could not be written.
    #[error("output error: {source}")]
    Write {
        /// Underlying write error.
        #[from]
        #[source]
        source: WriteError,
    },
}
