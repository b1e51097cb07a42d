//! Core data model types for row validation.
//!
//! A [`Schema`] is an ordered list of single-character [`SchemaTag`]s, one per expected column.
//! Each recognized tag selects a [`FieldKind`] classifier and a [`BlankMode`].

use std::fmt;

/// A single record: ordered field strings, exactly as read from the input.
pub type Record = Vec<String>;

/// Policy for empty field values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlankMode {
    /// An empty value is automatically valid.
    BlankAllowed,
    /// An empty value is automatically invalid.
    NoBlank,
}

/// Which classifier a field is checked with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Printable characters only (space included).
    Text,
    /// Finite decimal floating point number.
    Float,
    /// Decimal digits only.
    Integer,
}

/// One column's type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaTag {
    /// `S`: optional free text.
    OptionalText,
    /// `F`: optional decimal number.
    OptionalFloat,
    /// `N`: optional integer.
    OptionalInteger,
    /// `B`: required free text.
    RequiredText,
    /// `Q`: required decimal number.
    RequiredFloat,
    /// `P`: required integer.
    RequiredInteger,
    /// Any other character. Every field checked against it fails.
    Unknown(char),
}

impl SchemaTag {
    /// Map a tag character (case-sensitive) to a tag.
    pub fn from_char(c: char) -> Self {
        match c {
            'S' => Self::OptionalText,
            'F' => Self::OptionalFloat,
            'N' => Self::OptionalInteger,
            'B' => Self::RequiredText,
            'Q' => Self::RequiredFloat,
            'P' => Self::RequiredInteger,
            other => Self::Unknown(other),
        }
    }

    /// The character this tag was parsed from.
    pub fn as_char(self) -> char {
        match self {
            Self::OptionalText => 'S',
            Self::OptionalFloat => 'F',
            Self::OptionalInteger => 'N',
            Self::RequiredText => 'B',
            Self::RequiredFloat => 'Q',
            Self::RequiredInteger => 'P',
            Self::Unknown(c) => c,
        }
    }

    /// Classifier and blank mode for a recognized tag; `None` for [`SchemaTag::Unknown`].
    pub fn rule(self) -> Option<(FieldKind, BlankMode)> {
        match self {
            Self::OptionalText => Some((FieldKind::Text, BlankMode::BlankAllowed)),
            Self::OptionalFloat => Some((FieldKind::Float, BlankMode::BlankAllowed)),
            Self::OptionalInteger => Some((FieldKind::Integer, BlankMode::BlankAllowed)),
            Self::RequiredText => Some((FieldKind::Text, BlankMode::NoBlank)),
            Self::RequiredFloat => Some((FieldKind::Float, BlankMode::NoBlank)),
            Self::RequiredInteger => Some((FieldKind::Integer, BlankMode::NoBlank)),
            Self::Unknown(_) => None,
        }
    }

    /// Returns `true` unless this is [`SchemaTag::Unknown`].
    pub fn is_recognized(self) -> bool {
        self.rule().is_some()
    }
}

/// Ordered per-column tags describing the expected shape of every record.
///
/// The schema is not required to match the record width up front. Column `x` is checked against
/// [`Schema::tag_at`]`(x)`, and a column with no tag is a configuration fault reported per field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    /// Ordered list of tags.
    pub tags: Vec<SchemaTag>,
}

impl Schema {
    /// Create a schema from tags.
    pub fn new(tags: Vec<SchemaTag>) -> Self {
        Self { tags }
    }

    /// Parse a schema string such as `"SFNBQP"`, one tag per character.
    ///
    /// Unrecognized characters are kept as [`SchemaTag::Unknown`]; they only fail the fields they
    /// are applied to.
    pub fn parse(tags: &str) -> Self {
        Self::new(tags.chars().map(SchemaTag::from_char).collect())
    }

    /// Tag for the 0-based column `index`, if the schema is that wide.
    pub fn tag_at(&self, index: usize) -> Option<SchemaTag> {
        self.tags.get(index).copied()
    }

    /// Number of tags.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Returns `true` if the schema has no tags.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// 0-based positions holding unrecognized tags.
    pub fn unknown_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.tags
            .iter()
            .enumerate()
            .filter(|(_, t)| !t.is_recognized())
            .map(|(i, _)| i)
    }
}

impl From<&str> for Schema {
    fn from(tags: &str) -> Self {
        Self::parse(tags)
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tag in &self.tags {
            write!(f, "{}", tag.as_char())?;
        }
        Ok(())
    }
}
