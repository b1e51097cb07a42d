//! Pure field classifiers.
//!
//! Every classifier takes the raw field and a [`BlankMode`] and returns a plain `bool`. Values are
//! never trimmed, parsed into a stored representation, or rewritten.

use unicode_general_category::{get_general_category, GeneralCategory};

use crate::types::{BlankMode, FieldKind};

/// Classify `value` with the classifier selected by `kind`.
pub fn classify(kind: FieldKind, value: &str, blank: BlankMode) -> bool {
    match kind {
        FieldKind::Text => is_printable_text(value, blank),
        FieldKind::Float => is_float(value, blank),
        FieldKind::Integer => is_digits(value, blank),
    }
}

/// Every character is printable: ASCII space or a visible glyph.
///
/// A character is printable when its general category is a letter, mark, number, punctuation or
/// symbol. Control, format, private-use, surrogate and unassigned code points are rejected, as is
/// every separator other than U+0020.
pub fn is_printable_text(value: &str, blank: BlankMode) -> bool {
    if value.is_empty() {
        return blank_verdict(blank);
    }
    value.chars().all(is_printable)
}

/// Every character is a Unicode decimal digit (category Nd). No sign, separator, or decimal point.
pub fn is_digits(value: &str, blank: BlankMode) -> bool {
    if value.is_empty() {
        return blank_verdict(blank);
    }
    value
        .chars()
        .all(|c| get_general_category(c) == GeneralCategory::DecimalNumber)
}

/// The value parses as a finite single-precision float.
///
/// Accepts an optional sign, optional fraction and optional exponent (`-1.5e3`, `.5`, `7.`).
/// Values that overflow `f32`, `inf` and `NaN` are rejected.
pub fn is_float(value: &str, blank: BlankMode) -> bool {
    if value.is_empty() {
        return blank_verdict(blank);
    }
    value.parse::<f32>().is_ok_and(f32::is_finite)
}

fn blank_verdict(blank: BlankMode) -> bool {
    matches!(blank, BlankMode::BlankAllowed)
}

fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    !matches!(
        get_general_category(c),
        GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::PrivateUse
            | GeneralCategory::Surrogate
            | GeneralCategory::Unassigned
            | GeneralCategory::LineSeparator
            | GeneralCategory::ParagraphSeparator
            | GeneralCategory::SpaceSeparator
    )
}

#[cfg(test)]
mod tests {
    use super::{classify, is_digits, is_float, is_printable_text};
    use crate::types::{BlankMode, FieldKind};

    const ALLOW: BlankMode = BlankMode::BlankAllowed;
    const REQUIRE: BlankMode = BlankMode::NoBlank;

    #[test]
    fn blank_follows_mode_for_every_classifier() {
        for kind in [FieldKind::Text, FieldKind::Float, FieldKind::Integer] {
            assert!(classify(kind, "", ALLOW), "{kind:?} should allow blank");
            assert!(!classify(kind, "", REQUIRE), "{kind:?} should reject blank");
        }
    }

    #[test]
    fn printable_text_accepts_spaces_and_glyphs() {
        assert!(is_printable_text("hello world", REQUIRE));
        assert!(is_printable_text("Ünïcödé – ok €", REQUIRE));
        assert!(is_printable_text(" ", REQUIRE));
        assert!(is_printable_text("a,b \"quoted\"", REQUIRE));
    }

    #[test]
    fn printable_text_rejects_control_and_invisible_characters() {
        assert!(!is_printable_text("tab\there", ALLOW));
        assert!(!is_printable_text("line\nbreak", ALLOW));
        assert!(!is_printable_text("bell\u{7}", ALLOW));
        assert!(!is_printable_text("nb\u{00A0}sp", ALLOW));
        assert!(!is_printable_text("zero\u{200B}width", ALLOW));
        assert!(!is_printable_text("\u{FEFF}bom", ALLOW));
        assert!(!is_printable_text("em\u{2003}space", ALLOW));
        assert!(!is_printable_text("line\u{2028}sep", ALLOW));
    }

    #[test]
    fn printable_text_rejects_tags_private_use_and_unassigned() {
        assert!(!is_printable_text("a\u{E0001}", REQUIRE));
        assert!(!is_printable_text("a\u{E0041}", REQUIRE));
        assert!(!is_printable_text("a\u{E000}", REQUIRE));
        assert!(!is_printable_text("a\u{F0000}", REQUIRE));
        assert!(!is_printable_text("a\u{10FFFD}", REQUIRE));
        assert!(!is_printable_text("a\u{0378}", REQUIRE));
        assert!(!is_printable_text("a\u{1D173}", REQUIRE));
    }

    #[test]
    fn digits_reject_sign_point_and_separators() {
        assert!(is_digits("0123456789", REQUIRE));
        assert!(!is_digits("-5", ALLOW));
        assert!(!is_digits("+5", ALLOW));
        assert!(!is_digits("3.14", ALLOW));
        assert!(!is_digits("1,000", ALLOW));
        assert!(!is_digits(" 5", ALLOW));
        assert!(!is_digits("٣.٥", ALLOW));
        assert!(!is_digits("½", ALLOW));
        assert!(!is_digits("²", ALLOW));
    }

    #[test]
    fn digits_accept_non_ascii_decimal_digits() {
        assert!(is_digits("٣", REQUIRE));
        assert!(is_digits("१२३", REQUIRE));
        assert!(is_digits("12٣", REQUIRE));
    }

    #[test]
    fn float_accepts_standard_decimal_forms() {
        for v in ["3.14", "-5", "+2", ".5", "7.", "1e10", "-1.5E-3", "0"] {
            assert!(is_float(v, REQUIRE), "{v} should be a float");
        }
    }

    #[test]
    fn float_rejects_non_numbers_and_non_finite_values() {
        for v in ["x", "1.2.3", " 1.5", "1.5 ", "1,5", "inf", "NaN", "1e39", "--1"] {
            assert!(!is_float(v, ALLOW), "{v} should not be a float");
        }
    }
}
