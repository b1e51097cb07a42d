//! Checker configuration.
//!
//! The configuration file is TOML with PascalCase keys:
//!
//! ```toml
//! WorkingDirectory = "/srv/drop/"
//! SpecifiedFieldCheck = "BSFNQP"
//!
//! # Optional
//! InputCSVFile = "orders.csv"
//! OutputCSVFile = "orders-accepted.csv"
//! ErrorCSVFile = "orders-rejected.csv"
//! ErrorLogFile = "orders.log"
//! Delimiter = ";"
//! ExitPauseSeconds = 15
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{CheckError, CheckResult};
use crate::types::Schema;

/// Default configuration file name, relative to the current directory.
pub const DEFAULT_CONFIG_PATH: &str = "filecheck.cfg";

const DEFAULT_EXIT_PAUSE_SECS: u64 = 15;

/// Settings for one checker run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct CheckerConfig {
    /// Directory scanned for the input file. Relative paths below resolve against it.
    pub working_directory: PathBuf,
    /// Schema string, one tag per column.
    pub specified_field_check: String,
    /// Explicit input file; when set, the directory scan is skipped.
    #[serde(rename = "InputCSVFile", default)]
    pub input_csv_file: Option<PathBuf>,
    /// Accepted-rows file; defaults to `<stem>-GOOD.csv` next to the input.
    #[serde(rename = "OutputCSVFile", default)]
    pub output_csv_file: Option<PathBuf>,
    /// Rejected-rows file; defaults to `<stem>-BAD.csv` next to the input.
    #[serde(rename = "ErrorCSVFile", default)]
    pub error_csv_file: Option<PathBuf>,
    /// Diagnostic log; defaults to `<stem>.log` next to the input.
    #[serde(default)]
    pub error_log_file: Option<PathBuf>,
    /// Single ASCII field delimiter. Defaults to `,`.
    #[serde(default)]
    pub delimiter: Option<String>,
    /// Pause before exiting when no usable input is found. Defaults to 15 seconds.
    #[serde(default)]
    pub exit_pause_seconds: Option<u64>,
}

impl CheckerConfig {
    /// Read and parse the configuration file at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> CheckResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Parse configuration from TOML text and check its values.
    pub fn from_toml_str(text: &str) -> CheckResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.delimiter_byte()?;
        if config.specified_field_check.is_empty() {
            return Err(CheckError::Config {
                message: "SpecifiedFieldCheck must contain at least one tag".to_string(),
            });
        }
        Ok(config)
    }

    /// The parsed schema.
    pub fn schema(&self) -> Schema {
        Schema::parse(&self.specified_field_check)
    }

    /// The field delimiter as a byte.
    pub fn delimiter_byte(&self) -> CheckResult<u8> {
        let Some(d) = self.delimiter.as_deref() else {
            return Ok(b',');
        };
        match d.as_bytes() {
            [b] if b.is_ascii() && *b != b'"' && *b != b'\n' && *b != b'\r' => Ok(*b),
            _ => Err(CheckError::Config {
                message: format!("Delimiter must be a single ASCII character other than a quote or newline, got {d:?}"),
            }),
        }
    }

    /// How long the binary waits before exiting when no usable input is found.
    pub fn exit_pause(&self) -> Duration {
        Duration::from_secs(self.exit_pause_seconds.unwrap_or(DEFAULT_EXIT_PAUSE_SECS))
    }

    /// Resolve `path` against the working directory unless it is absolute.
    pub fn resolve_path(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.working_directory.join(path)
        }
    }
}
