//! `csv-checker` validates every row of a delimited text file against a per-column type
//! [`types::Schema`], splitting the file into accepted and rejected rows and logging why each
//! rejected row failed.
//!
//! The primary entrypoint is [`run::run_check`], driven by a [`config::CheckerConfig`] loaded from
//! a TOML file. The engine underneath, [`validation::RowValidator`], works on any
//! [`ingestion::RecordSource`] and pair of [`ingestion::RecordSink`]s.
//!
//! ## Schema tags
//!
//! A schema is a string with one tag character per column:
//!
//! | Tag | Accepts | Blank |
//! |---|---|---|
//! | `S` | printable text | allowed |
//! | `F` | finite decimal float | allowed |
//! | `N` | decimal digits | allowed |
//! | `B` | printable text | rejected |
//! | `Q` | finite decimal float | rejected |
//! | `P` | decimal digits | rejected |
//!
//! Any other character, or a column past the end of the schema, fails every field it applies to.
//! A row is accepted only if all of its fields pass. Rows are written verbatim; nothing is trimmed
//! or reformatted.
//!
//! ## Quick example
//!
//! ```rust
//! use csv_checker::ingestion::{MemorySink, MemorySource};
//! use csv_checker::types::Schema;
//! use csv_checker::validation::{MemoryDiagnostics, RowValidator};
//!
//! let diags = MemoryDiagnostics::new();
//! let mut validator = RowValidator::new(
//!     Schema::parse("BP"),
//!     MemorySink::new(),
//!     MemorySink::new(),
//!     diags.clone(),
//! );
//! let rows = vec![
//!     vec!["widget".to_string(), "12".to_string()],
//!     vec!["gadget".to_string(), "-3".to_string()],
//! ];
//! let stats = validator.run(&mut MemorySource::new(rows)).unwrap();
//!
//! assert_eq!(stats.accepted, 1);
//! assert_eq!(diags.lines(), vec!["Row 2, Field 2 is not an integer or is blank".to_string()]);
//! ```
//!
//! ## Modules
//!
//! - [`validation`]: classifiers, diagnostics, and the row validator
//! - [`ingestion`]: record source/sink traits, CSV implementations, input discovery
//! - [`config`]: TOML configuration
//! - [`run`]: configuration-driven entrypoint
//! - [`types`]: schema and record types
//! - [`error`]: error type for run-aborting failures

pub mod config;
pub mod error;
pub mod ingestion;
pub mod run;
pub mod types;
pub mod validation;

pub use error::{CheckError, CheckResult};
