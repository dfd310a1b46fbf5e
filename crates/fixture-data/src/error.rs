//! Error types for the fixture-data crate.
//!
//! This module defines semantic error enums for configuration validation and
//! seed document output, following the project's error handling conventions
//! with `thiserror`.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised when the fixed generation constants disagree with each other.
///
/// These are detected before any record is generated so a misconfigured build
/// can never emit a partial or internally inconsistent seed document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The region table does not produce the configured company count.
    #[error("region table yields {expected} companies but the configuration declares {actual}")]
    CompanyCountMismatch {
        /// Company count derived from the region table.
        expected: usize,
        /// Configured company count.
        actual: usize,
    },

    /// The location table cannot be split evenly across the companies.
    #[error("{expected} monitoring locations are required for the company roster, found {actual}")]
    LocationCountMismatch {
        /// Location count required by the company roster.
        expected: usize,
        /// Number of entries in the location table.
        actual: usize,
    },

    /// The device count does not fill every site with a full block of devices.
    #[error("device count {actual} does not equal sites x devices-per-site ({expected})")]
    DeviceCountMismatch {
        /// Device count derived from the site roster.
        expected: usize,
        /// Configured device count.
        actual: usize,
    },
}

/// Errors raised while serializing or writing the seed document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WriteError {
    /// The document could not be serialized to JSON.
    #[error("failed to serialize seed document: {message}")]
    Serialize {
        /// Description of the serialization failure.
        message: String,
    },

    /// The destination path has no file name component.
    #[error("seed document path '{path}' does not name a file")]
    InvalidPath {
        /// The rejected destination path.
        path: Utf8PathBuf,
    },

    /// The document could not be written to disk.
    #[error("failed to write seed document at '{path}': {message}")]
    Io {
        /// Path involved in the failed operation.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },
}
