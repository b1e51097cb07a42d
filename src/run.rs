//! One-call entrypoint: configuration in, partitioned files out.
//!
//! [`run_check`] wires the pieces together:
//!
//! - resolves the input file (explicit `InputCSVFile`, else a scan of `WorkingDirectory`)
//! - derives the accepted/rejected/log paths (see [`OutputPaths`])
//! - opens the diagnostic log first, then both outputs (all truncated)
//! - runs a [`RowValidator`] over the input

use std::path::PathBuf;

use crate::config::CheckerConfig;
use crate::error::CheckResult;
use crate::ingestion::csv::{create_sink, open_source};
use crate::ingestion::{locate_input, OutputPaths};
use crate::validation::{
    CompositeDiagnostics, FileDiagnostics, RowValidator, StdErrDiagnostics, ValidationStats,
};

/// Options controlling a run beyond what the configuration file holds.
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Also write every diagnostic to stderr.
    pub echo_diagnostics: bool,
}

/// What a completed run touched and counted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub input: PathBuf,
    pub outputs: OutputPaths,
    pub stats: ValidationStats,
}

/// Resolve the input file for `config`.
pub fn resolve_input(config: &CheckerConfig) -> CheckResult<PathBuf> {
    match &config.input_csv_file {
        Some(p) => Ok(config.resolve_path(p)),
        None => locate_input(&config.working_directory),
    }
}

/// Run the checker described by `config`.
///
/// # Examples
///
/// ```no_run
/// use csv_checker::config::CheckerConfig;
/// use csv_checker::run::{run_check, CheckOptions};
///
/// # fn main() -> Result<(), csv_checker::CheckError> {
/// let config = CheckerConfig::from_path("filecheck.cfg")?;
/// let outcome = run_check(&config, &CheckOptions::default())?;
/// println!(
///     "accepted={} rejected={} -> {}",
///     outcome.stats.accepted,
///     outcome.stats.rejected,
///     outcome.outputs.accepted.display()
/// );
/// # Ok(())
/// # }
/// ```
pub fn run_check(config: &CheckerConfig, options: &CheckOptions) -> CheckResult<CheckOutcome> {
    let delimiter = config.delimiter_byte()?;
    let input = resolve_input(config)?;
    let outputs = OutputPaths::resolve(&input, config);
    tracing::info!(
        input = %input.display(),
        accepted = %outputs.accepted.display(),
        rejected = %outputs.rejected.display(),
        log = %outputs.log.display(),
        "resolved files"
    );

    let mut diagnostics = CompositeDiagnostics::default();
    diagnostics.push(Box::new(FileDiagnostics::create(&outputs.log)?));
    if options.echo_diagnostics {
        diagnostics.push(Box::new(StdErrDiagnostics));
    }
    let accepted = create_sink(&outputs.accepted, delimiter)?;
    let rejected = create_sink(&outputs.rejected, delimiter)?;
    let mut source = open_source(&input, delimiter)?;

    let mut validator = RowValidator::new(config.schema(), accepted, rejected, diagnostics);
    let stats = validator.run(&mut source)?;

    Ok(CheckOutcome {
        input,
        outputs,
        stats,
    })
}

/// Owned request object, e.g. for callers that queue runs.
#[derive(Debug, Clone)]
pub struct CheckRequest {
    pub config: CheckerConfig,
    pub options: CheckOptions,
}

impl CheckRequest {
    /// Load the configuration file at `path` into a request with default options.
    pub fn from_config_path(path: impl AsRef<std::path::Path>) -> CheckResult<Self> {
        Ok(Self {
            config: CheckerConfig::from_path(path)?,
            options: CheckOptions::default(),
        })
    }

    /// Execute the request by calling [`run_check`].
    pub fn run(&self) -> CheckResult<CheckOutcome> {
        run_check(&self.config, &self.options)
    }
}
