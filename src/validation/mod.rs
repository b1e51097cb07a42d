//! Field classification and row partitioning.
//!
//! - [`classifiers`]: pure per-field predicates (printable text, digits, float)
//! - [`diagnostics`]: diagnostic lines and the sinks that record them
//! - [`validator`]: the [`RowValidator`] loop that routes each row to the accepted or rejected sink
//!
//! ## Example
//!
//! ```rust
//! use csv_checker::ingestion::{MemorySink, MemorySource};
//! use csv_checker::types::Schema;
//! use csv_checker::validation::{MemoryDiagnostics, RowValidator};
//!
//! let rows = vec![
//!     vec!["a".to_string(), "1.5".to_string(), "10".to_string()],
//!     vec!["b".to_string(), "x".to_string(), "5".to_string()],
//!     vec![String::new(), String::new(), String::new()],
//! ];
//! let diags = MemoryDiagnostics::new();
//! let mut validator = RowValidator::new(
//!     Schema::parse("SFN"),
//!     MemorySink::new(),
//!     MemorySink::new(),
//!     diags.clone(),
//! );
//!
//! let stats = validator.run(&mut MemorySource::new(rows)).unwrap();
//! assert_eq!((stats.accepted, stats.rejected), (2, 1));
//! assert_eq!(
//!     diags.lines(),
//!     vec!["Row 2, Field 2 is not a floating point number".to_string()]
//! );
//! ```

pub mod classifiers;
pub mod diagnostics;
pub mod validator;

pub use classifiers::{classify, is_digits, is_float, is_printable_text};
pub use diagnostics::{
    CompositeDiagnostics, Diagnostic, DiagnosticKind, DiagnosticSink, FileDiagnostics, MemoryDiagnostics,
    Severity, StdErrDiagnostics,
};
pub use validator::{check_field, RowValidator, RowVerdict, ValidationStats};
