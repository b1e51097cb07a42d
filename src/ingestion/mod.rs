//! Record sources and sinks.
//!
//! The validator only sees the [`RecordSource`] and [`RecordSink`] traits. Implementations:
//!
//! - [`csv`]: file-backed CSV readers and writers
//! - [`MemorySource`] / [`MemorySink`]: in-memory rows
//!
//! [`discovery`] locates the single input file in a working directory and derives the output
//! paths next to it.

pub mod csv;
pub mod discovery;

use std::collections::VecDeque;
use std::io;

use crate::error::CheckResult;
use crate::types::Record;

pub use discovery::{locate_input, OutputPaths};

/// A sequential supply of records.
pub trait RecordSource {
    /// Next record, `Ok(None)` once the input is exhausted.
    ///
    /// An `Err` means the input is structurally broken and the run must stop.
    fn next_record(&mut self) -> CheckResult<Option<Record>>;
}

impl<S: RecordSource + ?Sized> RecordSource for &mut S {
    fn next_record(&mut self) -> CheckResult<Option<Record>> {
        (**self).next_record()
    }
}

/// A destination for whole records.
pub trait RecordSink {
    /// Append `record` verbatim.
    fn write_record(&mut self, record: &[String]) -> io::Result<()>;

    /// Push everything written so far to the underlying destination.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<S: RecordSink + ?Sized> RecordSink for Box<S> {
    fn write_record(&mut self, record: &[String]) -> io::Result<()> {
        (**self).write_record(record)
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }
}

/// Records held in memory, yielded in order.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    rows: VecDeque<Record>,
}

impl MemorySource {
    pub fn new(rows: Vec<Record>) -> Self {
        Self { rows: rows.into() }
    }
}

impl RecordSource for MemorySource {
    fn next_record(&mut self) -> CheckResult<Option<Record>> {
        Ok(self.rows.pop_front())
    }
}

/// Collects written records in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    rows: Vec<Record>,
    flushes: usize,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records written so far, in write order.
    pub fn records(&self) -> Vec<Record> {
        self.rows.clone()
    }

    /// Number of flushes requested.
    pub fn flushes(&self) -> usize {
        self.flushes
    }

    /// Turn the collected rows into a source, e.g. to feed one run's output into another.
    pub fn into_source(self) -> MemorySource {
        MemorySource::new(self.rows)
    }
}

impl RecordSink for MemorySink {
    fn write_record(&mut self, record: &[String]) -> io::Result<()> {
        self.rows.push(record.to_vec());
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushes += 1;
        Ok(())
    }
}
