use std::path::PathBuf;

use thiserror::Error;

/// Convenience result type for checker operations.
pub type CheckResult<T> = Result<T, CheckError>;

/// Error type returned by the checker.
///
/// Field-level validation failures are never errors: they are reported as diagnostics and only
/// condemn the containing row. Everything here aborts the run.
#[derive(Debug, Error)]
pub enum CheckError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Structural CSV failure (unequal field counts, invalid UTF-8, unreadable input).
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The configuration file is not valid TOML or is missing required keys.
    #[error("config error: {0}")]
    Toml(#[from] toml::de::Error),

    /// The configuration parsed but contains an unusable value.
    #[error("config error: {message}")]
    Config { message: String },

    /// Input discovery found no candidate file.
    #[error("There are no csv files in the working folder: {}", dir.display())]
    NoInput { dir: PathBuf },

    /// Input discovery found more than one candidate file.
    #[error(
        "There are too many csv files in the current working directory: {} ({count} found). \
         Please remove all csv files except the one you intend to work with.",
        dir.display()
    )]
    TooManyInputs { dir: PathBuf, count: usize },
}

impl CheckError {
    /// Returns `true` for errors raised while locating the input file.
    ///
    /// The binary pauses before exiting on these.
    pub fn is_discovery_failure(&self) -> bool {
        matches!(self, Self::NoInput { .. } | Self::TooManyInputs { .. })
    }
}
