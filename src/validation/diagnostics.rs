use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::error::CheckResult;
use crate::types::{BlankMode, FieldKind};

/// Severity classification for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// A field failed its classifier. The row is rejected and the run continues.
    Warning,
    /// A configuration fault or failed sink write. The run still continues.
    Error,
}

/// What a diagnostic is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A field failed the classifier selected by its schema tag.
    InvalidField { kind: FieldKind, blank: BlankMode },
    /// The field's schema tag is unrecognized, or the schema has no tag for its column.
    BeyondDefinition,
    /// Writing or flushing a row to the accepted sink failed.
    AcceptedWriteFailed,
    /// Writing or flushing a row to the rejected sink failed.
    RejectedWriteFailed,
}

/// A single diagnostic line.
///
/// `row` and `field` are 1-based. `field` is `None` for row-level diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Diagnostic {
    pub row: usize,
    pub field: Option<usize>,
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub fn invalid_field(row: usize, field: usize, kind: FieldKind, blank: BlankMode) -> Self {
        Self {
            row,
            field: Some(field),
            kind: DiagnosticKind::InvalidField { kind, blank },
        }
    }

    pub fn beyond_definition(row: usize, field: usize) -> Self {
        Self {
            row,
            field: Some(field),
            kind: DiagnosticKind::BeyondDefinition,
        }
    }

    pub fn write_failed(row: usize, accepted: bool) -> Self {
        let kind = if accepted {
            DiagnosticKind::AcceptedWriteFailed
        } else {
            DiagnosticKind::RejectedWriteFailed
        };
        Self {
            row,
            field: None,
            kind,
        }
    }

    pub fn severity(&self) -> Severity {
        match self.kind {
            DiagnosticKind::InvalidField { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row = self.row;
        let field = self.field.unwrap_or_default();
        match self.kind {
            DiagnosticKind::InvalidField { kind, blank } => {
                let what = match kind {
                    FieldKind::Text => "a string",
                    FieldKind::Float => "a floating point number",
                    FieldKind::Integer => "an integer",
                };
                write!(f, "Row {row}, Field {field} is not {what}")?;
                if blank == BlankMode::NoBlank {
                    f.write_str(" or is blank")?;
                }
                Ok(())
            }
            DiagnosticKind::BeyondDefinition => {
                f.write_str("ERROR: CSV Field is beyond defined definition list.")
            }
            DiagnosticKind::AcceptedWriteFailed => {
                write!(f, "Error writing Row {row} to accepted csv file")
            }
            DiagnosticKind::RejectedWriteFailed => {
                write!(f, "Error writing Row {row} to rejected csv file")
            }
        }
    }
}

/// Destination for diagnostic lines.
///
/// Sinks are best-effort: a sink that cannot record a line drops it rather than failing the run.
pub trait DiagnosticSink {
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Push buffered lines to the underlying destination.
    fn flush(&mut self) {}
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for Box<S> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        (**self).emit(diagnostic)
    }

    fn flush(&mut self) {
        (**self).flush()
    }
}

/// A sink that fans out every diagnostic to a list of sinks.
#[derive(Default)]
pub struct CompositeDiagnostics {
    sinks: Vec<Box<dyn DiagnosticSink>>,
}

impl CompositeDiagnostics {
    pub fn new(sinks: Vec<Box<dyn DiagnosticSink>>) -> Self {
        Self { sinks }
    }

    pub fn push(&mut self, sink: Box<dyn DiagnosticSink>) {
        self.sinks.push(sink);
    }
}

impl fmt::Debug for CompositeDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeDiagnostics")
            .field("sinks_len", &self.sinks.len())
            .finish()
    }
}

impl DiagnosticSink for CompositeDiagnostics {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        for s in &mut self.sinks {
            s.emit(diagnostic);
        }
    }

    fn flush(&mut self) {
        for s in &mut self.sinks {
            s.flush();
        }
    }
}

/// Writes diagnostics to stderr.
#[derive(Debug, Default)]
pub struct StdErrDiagnostics;

impl DiagnosticSink for StdErrDiagnostics {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        eprintln!("[check][{:?}] {diagnostic}", diagnostic.severity());
    }
}

/// Writes diagnostics to a log file, one timestamped line each.
///
/// The file is truncated when the sink is created and every line is flushed as it is emitted.
/// Lines look like
/// `2024/05/01 13:37:00 Row 2, Field 2 is not a floating point number`.
#[derive(Debug)]
pub struct FileDiagnostics {
    out: BufWriter<File>,
}

impl FileDiagnostics {
    /// Create (or truncate) the log file at `path`.
    pub fn create(path: impl AsRef<Path>) -> CheckResult<Self> {
        let file = File::create(path)?;
        Ok(Self {
            out: BufWriter::new(file),
        })
    }
}

impl DiagnosticSink for FileDiagnostics {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        let _ = writeln!(self.out, "{} {diagnostic}", log_ts());
        let _ = self.out.flush();
    }

    fn flush(&mut self) {
        let _ = self.out.flush();
    }
}

impl Drop for FileDiagnostics {
    fn drop(&mut self) {
        let _ = self.out.flush();
    }
}

/// Collects diagnostic lines in memory.
///
/// Clones share the same buffer, so a caller can keep one handle while the validator owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryDiagnostics {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the lines collected so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }
}

impl DiagnosticSink for MemoryDiagnostics {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(diagnostic.to_string());
        }
    }
}

fn log_ts() -> String {
    chrono::Local::now().format("%Y/%m/%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::{Diagnostic, DiagnosticSink, FileDiagnostics, MemoryDiagnostics, Severity};
    use crate::types::{BlankMode, FieldKind};

    #[test]
    fn invalid_field_messages_match_expected_wording() {
        let cases = [
            (FieldKind::Text, BlankMode::BlankAllowed, "Row 3, Field 4 is not a string"),
            (
                FieldKind::Float,
                BlankMode::BlankAllowed,
                "Row 3, Field 4 is not a floating point number",
            ),
            (FieldKind::Integer, BlankMode::BlankAllowed, "Row 3, Field 4 is not an integer"),
            (FieldKind::Text, BlankMode::NoBlank, "Row 3, Field 4 is not a string or is blank"),
            (
                FieldKind::Float,
                BlankMode::NoBlank,
                "Row 3, Field 4 is not a floating point number or is blank",
            ),
            (
                FieldKind::Integer,
                BlankMode::NoBlank,
                "Row 3, Field 4 is not an integer or is blank",
            ),
        ];
        for (kind, blank, expected) in cases {
            assert_eq!(Diagnostic::invalid_field(3, 4, kind, blank).to_string(), expected);
        }
    }

    #[test]
    fn beyond_definition_message_has_no_position() {
        let d = Diagnostic::beyond_definition(7, 9);
        assert_eq!(d.to_string(), "ERROR: CSV Field is beyond defined definition list.");
        assert_eq!(d.severity(), Severity::Error);
    }

    #[test]
    fn write_failure_names_the_row_and_destination() {
        assert_eq!(
            Diagnostic::write_failed(5, true).to_string(),
            "Error writing Row 5 to accepted csv file"
        );
        assert_eq!(
            Diagnostic::write_failed(6, false).to_string(),
            "Error writing Row 6 to rejected csv file"
        );
    }

    #[test]
    fn memory_diagnostics_clones_share_lines() {
        let handle = MemoryDiagnostics::new();
        let mut sink = handle.clone();
        sink.emit(&Diagnostic::beyond_definition(1, 1));
        assert_eq!(handle.lines().len(), 1);
    }

    #[test]
    fn file_diagnostics_lines_are_on_disk_before_the_sink_is_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.log");
        let mut sink = FileDiagnostics::create(&path).unwrap();

        sink.emit(&Diagnostic::beyond_definition(1, 1));
        let first = fs::read_to_string(&path).unwrap();
        assert!(first.ends_with("ERROR: CSV Field is beyond defined definition list.\n"));

        sink.emit(&Diagnostic::write_failed(2, false));
        let second = fs::read_to_string(&path).unwrap();
        assert_eq!(second.lines().count(), 2);
        assert!(second.ends_with("Error writing Row 2 to rejected csv file\n"));
        drop(sink);
    }
}
