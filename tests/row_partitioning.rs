use csv_checker::ingestion::{MemorySink, MemorySource};
use csv_checker::types::{Record, Schema};
use csv_checker::validation::{MemoryDiagnostics, RowValidator, ValidationStats};

fn row(fields: &[&str]) -> Record {
    fields.iter().map(|s| s.to_string()).collect()
}

struct Partition {
    accepted: Vec<Record>,
    rejected: Vec<Record>,
    diagnostics: Vec<String>,
    stats: ValidationStats,
}

fn partition(schema: &str, rows: Vec<Record>) -> Partition {
    let diags = MemoryDiagnostics::new();
    let mut validator = RowValidator::new(
        Schema::parse(schema),
        MemorySink::new(),
        MemorySink::new(),
        diags.clone(),
    );
    let stats = validator.run(&mut MemorySource::new(rows)).unwrap();
    let (accepted, rejected, _) = validator.into_parts();
    Partition {
        accepted: accepted.records(),
        rejected: rejected.records(),
        diagnostics: diags.lines(),
        stats,
    }
}

fn mixed_rows() -> Vec<Record> {
    vec![
        row(&["alpha", "1", "0.5", "x"]),
        row(&["", "2", "1.5", "y"]),
        row(&["gamma", "", "", ""]),
        row(&["delta", "4.0", "2", "z"]),
        row(&["eps\tilon", "5", "3", "w"]),
        row(&["zeta", "6", "1e3", ""]),
        row(&["eta", "7", "nan", "v"]),
    ]
}

#[test]
fn sfn_scenario_accepts_rows_one_and_three() {
    let out = partition(
        "SFN",
        vec![row(&["a", "1.5", "10"]), row(&["b", "x", "5"]), row(&["", "", ""])],
    );

    assert_eq!(out.accepted, vec![row(&["a", "1.5", "10"]), row(&["", "", ""])]);
    assert_eq!(out.rejected, vec![row(&["b", "x", "5"])]);
    assert_eq!(
        out.diagnostics,
        vec!["Row 2, Field 2 is not a floating point number".to_string()]
    );
}

#[test]
fn every_row_lands_in_exactly_one_bucket_in_input_order() {
    let input = mixed_rows();
    let out = partition("BNFS", input.clone());

    assert_eq!(out.accepted.len() + out.rejected.len(), input.len());
    assert_eq!(out.stats.rows_read, input.len() as u64);

    // Merging the buckets back by input position reconstructs the input exactly.
    let mut a = out.accepted.iter().peekable();
    let mut r = out.rejected.iter().peekable();
    for original in &input {
        if a.peek() == Some(&original) {
            a.next();
        } else {
            assert_eq!(r.next(), Some(original));
        }
    }
    assert!(a.next().is_none());
    assert!(r.next().is_none());
}

#[test]
fn mixed_rows_route_as_expected() {
    let out = partition("BNFS", mixed_rows());
    assert_eq!(
        out.accepted,
        vec![
            row(&["alpha", "1", "0.5", "x"]),
            row(&["gamma", "", "", ""]),
            row(&["zeta", "6", "1e3", ""]),
        ]
    );
    assert_eq!(
        out.diagnostics,
        vec![
            "Row 2, Field 1 is not a string or is blank".to_string(),
            "Row 4, Field 2 is not an integer".to_string(),
            "Row 5, Field 1 is not a string or is blank".to_string(),
            "Row 7, Field 3 is not a floating point number".to_string(),
        ]
    );
}

#[test]
fn unknown_tag_rejects_every_row_with_one_diagnostic_per_field() {
    let out = partition(
        "SXS",
        vec![row(&["a", "b", "c"]), row(&["d", "", "f"]), row(&["g", "h", "i"])],
    );

    assert!(out.accepted.is_empty());
    assert_eq!(out.rejected.len(), 3);
    assert_eq!(out.diagnostics.len(), 3);
    assert!(
        out.diagnostics
            .iter()
            .all(|l| l == "ERROR: CSV Field is beyond defined definition list.")
    );
}

#[test]
fn rerunning_on_accepted_rows_is_clean() {
    let first = partition("BNFS", mixed_rows());
    let second = partition("BNFS", first.accepted.clone());

    assert_eq!(second.accepted, first.accepted);
    assert!(second.rejected.is_empty());
    assert!(second.diagnostics.is_empty());
}

#[test]
fn empty_input_produces_nothing() {
    let out = partition("SFN", Vec::new());
    assert_eq!(out.stats, ValidationStats::default());
    assert!(out.accepted.is_empty() && out.rejected.is_empty() && out.diagnostics.is_empty());
}
