//! Deterministic fixture data generation for the peatland monitoring database.
//!
//! This crate fabricates a complete, referentially consistent seed document
//! for the monitoring schema: companies, sites, devices, realtime TMAT
//! readings, API keys, users, and group memberships, serialized as one JSON
//! object keyed by table name. Record shapes are randomized but bounded;
//! record relationships are exact, so the document always satisfies the
//! foreign-key arithmetic the loader relies on.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Single-pass generation through six ordered stages, each consuming the
//!   previous stage's output as an explicit input
//! - Deterministic output from an injectable seed and generation instant
//! - Cross-validation of the fixed counts before any record is produced
//! - Atomic serialization to disk via a temp-file-and-rename write
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDateTime;
//! use fixture_data::generate_seed_document;
//!
//! let now = NaiveDateTime::parse_from_str("2025-11-25 12:00:00", "%Y-%m-%d %H:%M:%S")
//!     .expect("valid timestamp");
//! let document = generate_seed_document(42, now).expect("generation succeeds");
//!
//! assert_eq!(document.master_site.len(), 2 * document.master_perusahaan.len());
//! assert_eq!(document.master_device.len(), 8 * document.master_site.len());
//! ```

mod atomic_io;
pub mod config;
mod document;
mod error;
mod generator;
pub mod locations;
mod records;
pub mod seed_cli;

pub use document::SeedDocument;
pub use error::{ConfigError, WriteError};
pub use generator::generate_seed_document;
pub use records::{ApiKey, Company, Device, Reading, Site, User, UserGroup};
