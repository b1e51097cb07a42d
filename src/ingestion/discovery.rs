//! Input discovery and output path derivation.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::config::CheckerConfig;
use crate::error::{CheckError, CheckResult};

/// Suffix appended to the input stem for accepted rows.
pub const ACCEPTED_SUFFIX: &str = "-GOOD.csv";
/// Suffix appended to the input stem for rejected rows.
pub const REJECTED_SUFFIX: &str = "-BAD.csv";
/// Extension used for the diagnostic log.
pub const LOG_EXTENSION: &str = "log";

/// Find the single `*.csv` file in `dir`.
///
/// Files this tool writes (`*-GOOD.csv`, `*-BAD.csv`) are not candidates, so re-running in the
/// same directory picks up the same input.
pub fn locate_input(dir: impl AsRef<Path>) -> CheckResult<PathBuf> {
    let dir = dir.as_ref();
    let dir_str = dir.to_str().ok_or_else(|| CheckError::Config {
        message: format!("working directory is not valid UTF-8: {}", dir.display()),
    })?;
    let pattern = Path::new(&glob::Pattern::escape(dir_str)).join("*.csv");
    let pattern = pattern.to_string_lossy();

    let entries = glob::glob(&pattern).map_err(|e| CheckError::Config {
        message: format!("invalid input pattern '{pattern}': {e}"),
    })?;

    let mut candidates = Vec::new();
    for entry in entries {
        let path = entry.map_err(std::io::Error::from)?;
        if path.is_file() && !is_generated_output(&path) {
            candidates.push(path);
        }
    }

    match candidates.len() {
        0 => Err(CheckError::NoInput {
            dir: dir.to_path_buf(),
        }),
        1 => Ok(candidates.remove(0)),
        count => Err(CheckError::TooManyInputs {
            dir: dir.to_path_buf(),
            count,
        }),
    }
}

fn is_generated_output(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with(ACCEPTED_SUFFIX) || n.ends_with(REJECTED_SUFFIX))
}

/// Where a run writes its outputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    /// Accepted rows.
    pub accepted: PathBuf,
    /// Rejected rows.
    pub rejected: PathBuf,
    /// Diagnostic log.
    pub log: PathBuf,
}

impl OutputPaths {
    /// Default outputs next to `input`: `<stem>-GOOD.csv`, `<stem>-BAD.csv`, `<stem>.log`.
    pub fn derive(input: impl AsRef<Path>) -> Self {
        let input = input.as_ref();
        let stem = input.file_stem().map(|s| s.to_os_string()).unwrap_or_default();
        let with_suffix = |suffix: &str| {
            let mut name: OsString = stem.clone();
            name.push(suffix);
            input.with_file_name(name)
        };
        Self {
            accepted: with_suffix(ACCEPTED_SUFFIX),
            rejected: with_suffix(REJECTED_SUFFIX),
            log: with_suffix(&format!(".{LOG_EXTENSION}")),
        }
    }

    /// [`OutputPaths::derive`] with any paths set in `config` taking precedence.
    pub fn resolve(input: impl AsRef<Path>, config: &CheckerConfig) -> Self {
        let mut paths = Self::derive(input);
        if let Some(p) = &config.output_csv_file {
            paths.accepted = config.resolve_path(p);
        }
        if let Some(p) = &config.error_csv_file {
            paths.rejected = config.resolve_path(p);
        }
        if let Some(p) = &config.error_log_file {
            paths.log = config.resolve_path(p);
        }
        paths
    }
}
