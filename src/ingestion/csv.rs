//! CSV-backed record sources and sinks.

use std::fs::File;
use std::io;
use std::path::Path;

use crate::error::CheckResult;
use crate::types::Record;

use super::{RecordSink, RecordSource};

/// Open `path` as a CSV record source.
///
/// Rules:
///
/// - There is no header row; the first line is validated like every other.
/// - Every row must have as many fields as the first one. A row that does not, a quoting error, or
///   invalid UTF-8 is a structural failure.
/// - Blank lines are skipped.
pub fn open_source(path: impl AsRef<Path>, delimiter: u8) -> CheckResult<csv::Reader<File>> {
    let rdr = reader_builder(delimiter).from_path(path)?;
    Ok(rdr)
}

/// Build a CSV source over any reader with the same rules as [`open_source`].
pub fn source_from_reader<R: io::Read>(reader: R, delimiter: u8) -> csv::Reader<R> {
    reader_builder(delimiter).from_reader(reader)
}

/// Create (or truncate) `path` as a CSV record sink.
pub fn create_sink(path: impl AsRef<Path>, delimiter: u8) -> CheckResult<csv::Writer<File>> {
    let file = File::create(path)?;
    Ok(sink_from_writer(file, delimiter))
}

/// Build a CSV sink over any writer.
pub fn sink_from_writer<W: io::Write>(writer: W, delimiter: u8) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .has_headers(false)
        .delimiter(delimiter)
        .from_writer(writer)
}

fn reader_builder(delimiter: u8) -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(false).flexible(false).delimiter(delimiter);
    builder
}

impl<R: io::Read> RecordSource for csv::Reader<R> {
    fn next_record(&mut self) -> CheckResult<Option<Record>> {
        let mut record = csv::StringRecord::new();
        if !self.read_record(&mut record)? {
            return Ok(None);
        }
        Ok(Some(record.iter().map(str::to_owned).collect()))
    }
}

impl<W: io::Write> RecordSink for csv::Writer<W> {
    fn write_record(&mut self, record: &[String]) -> io::Result<()> {
        csv::Writer::write_record(self, record)?;
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        csv::Writer::flush(self)
    }
}
