//! The row validator: classify every field, then route the whole row.

use serde::Serialize;

use crate::error::CheckResult;
use crate::ingestion::{RecordSink, RecordSource};
use crate::types::{Schema, SchemaTag};

use super::classifiers::classify;
use super::diagnostics::{Diagnostic, DiagnosticSink};

/// Where a row was routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowVerdict {
    /// Every field was valid.
    Accepted,
    /// At least one field was invalid.
    Rejected,
}

/// Counters for a validation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ValidationStats {
    /// Rows pulled from the source.
    pub rows_read: u64,
    /// Rows routed to the accepted sink.
    pub accepted: u64,
    /// Rows routed to the rejected sink.
    pub rejected: u64,
    /// Diagnostics emitted, including write failures.
    pub diagnostics: u64,
    /// Rows whose write or flush failed.
    pub write_failures: u64,
}

/// Check one field against its tag.
///
/// `row` and `field` are 1-based and only used to build the diagnostic. `tag` is `None` when the
/// schema has no tag for this column. Returns `None` when the field is valid.
pub fn check_field(
    tag: Option<SchemaTag>,
    row: usize,
    field: usize,
    value: &str,
) -> Option<Diagnostic> {
    let Some((kind, blank)) = tag.and_then(SchemaTag::rule) else {
        return Some(Diagnostic::beyond_definition(row, field));
    };
    if classify(kind, value, blank) {
        None
    } else {
        Some(Diagnostic::invalid_field(row, field, kind, blank))
    }
}

/// Partitions records into accepted and rejected sinks, reporting every invalid field.
///
/// A row is accepted only if all of its fields are valid. Rows are written verbatim and each
/// write is flushed before the next row is read.
pub struct RowValidator<A, R, D> {
    schema: Schema,
    accepted: A,
    rejected: R,
    diagnostics: D,
    stats: ValidationStats,
    width_warned: bool,
}

impl<A, R, D> RowValidator<A, R, D>
where
    A: RecordSink,
    R: RecordSink,
    D: DiagnosticSink,
{
    /// Create a validator that owns both record sinks and the diagnostic sink.
    pub fn new(schema: Schema, accepted: A, rejected: R, diagnostics: D) -> Self {
        for pos in schema.unknown_positions() {
            tracing::warn!(
                column = pos + 1,
                tag = %schema.tags[pos].as_char(),
                "schema contains an unrecognized tag; every row will be rejected"
            );
        }
        Self {
            schema,
            accepted,
            rejected,
            diagnostics,
            stats: ValidationStats::default(),
            width_warned: false,
        }
    }

    /// The schema rows are checked against.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Counters so far.
    pub fn stats(&self) -> ValidationStats {
        self.stats
    }

    /// Give back the sinks, e.g. to inspect in-memory outputs.
    pub fn into_parts(self) -> (A, R, D) {
        (self.accepted, self.rejected, self.diagnostics)
    }

    /// Classify every field of `record` as row `row` (1-based), emitting diagnostics in field
    /// order. Does not route the record.
    pub fn check_record<S: AsRef<str>>(&mut self, row: usize, record: &[S]) -> RowVerdict {
        let mut bad = false;
        for (x, value) in record.iter().enumerate() {
            let tag = self.schema.tag_at(x);
            if tag.is_none() && !self.width_warned {
                self.width_warned = true;
                tracing::warn!(
                    row,
                    fields = record.len(),
                    schema_width = self.schema.len(),
                    "record is wider than the schema"
                );
            }
            if let Some(diagnostic) = check_field(tag, row, x + 1, value.as_ref()) {
                self.emit(&diagnostic);
                bad = true;
            }
        }
        if bad {
            RowVerdict::Rejected
        } else {
            RowVerdict::Accepted
        }
    }

    /// Classify the next record and write it to the sink its verdict selects.
    ///
    /// A failed write is reported as a diagnostic; the row still counts towards its verdict.
    pub fn process(&mut self, record: &[String]) -> RowVerdict {
        self.stats.rows_read += 1;
        let row = self.stats.rows_read as usize;
        let verdict = self.check_record(row, record);

        let written = match verdict {
            RowVerdict::Accepted => write_and_flush(&mut self.accepted, record),
            RowVerdict::Rejected => write_and_flush(&mut self.rejected, record),
        };
        match verdict {
            RowVerdict::Accepted => self.stats.accepted += 1,
            RowVerdict::Rejected => self.stats.rejected += 1,
        }
        if let Err(e) = written {
            tracing::error!(row, ?verdict, error = %e, "failed to write row");
            self.stats.write_failures += 1;
            self.emit(&Diagnostic::write_failed(row, verdict == RowVerdict::Accepted));
        }
        verdict
    }

    /// Drain `source`, routing every record.
    ///
    /// Ends when the source is exhausted. A read error aborts the run immediately; rows already
    /// processed stay written.
    pub fn run<S: RecordSource + ?Sized>(&mut self, source: &mut S) -> CheckResult<ValidationStats> {
        tracing::info!(schema = %self.schema, "validation started");
        loop {
            match source.next_record() {
                Ok(Some(record)) => {
                    self.process(&record);
                }
                Ok(None) => break,
                Err(e) => {
                    self.diagnostics.flush();
                    tracing::error!(
                        after_rows = self.stats.rows_read,
                        error = %e,
                        "aborting: input could not be read"
                    );
                    return Err(e);
                }
            }
        }
        self.diagnostics.flush();
        tracing::info!(
            rows = self.stats.rows_read,
            accepted = self.stats.accepted,
            rejected = self.stats.rejected,
            diagnostics = self.stats.diagnostics,
            "validation finished"
        );
        Ok(self.stats)
    }

    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.stats.diagnostics += 1;
        tracing::debug!(row = diagnostic.row, field = ?diagnostic.field, "{diagnostic}");
        self.diagnostics.emit(diagnostic);
    }
}

fn write_and_flush<K: RecordSink>(sink: &mut K, record: &[String]) -> std::io::Result<()> {
    sink.write_record(record)?;
    sink.flush()
}
