//! Quote records and the two content categories.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::QuizError;

/// Which collection a quote was loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Lyrics taken from rap songs.
    Rap,
    /// Lines taken from books and other written works.
    Author,
}

impl Category {
    /// Both categories in loading order.
    pub const ALL: [Category; 2] = [Category::Rap, Category::Author];

    /// The other category. Distractors are drawn from here.
    pub fn opposite(self) -> Category {
        match self {
            Self::Rap => Self::Author,
            Self::Author => Self::Rap,
        }
    }

    /// Label shown next to a quote's source in the info panel.
    pub fn source_label(self) -> &'static str {
        match self {
            Self::Rap => "Song",
            Self::Author => "Work",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rap => write!(f, "rap"),
            Self::Author => write!(f, "author"),
        }
    }
}

impl FromStr for Category {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rap" => Ok(Self::Rap),
            "author" | "authors" => Ok(Self::Author),
            other => Err(QuizError::UnknownCategory(other.to_string())),
        }
    }
}

/// A single attributable quote with its provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quote {
    /// Display name of the true author.
    pub author: String,
    /// The quote text itself.
    pub citation: String,
    /// Song or work the quote comes from.
    pub source: String,
    /// Auxiliary citation metadata.
    pub reference: String,
    /// Collection the quote was loaded from.
    pub category: Category,
}

impl Quote {
    /// Build a quote from its four text fields.
    pub fn new(
        author: impl Into<String>,
        citation: impl Into<String>,
        source: impl Into<String>,
        reference: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            author: author.into(),
            citation: citation.into(),
            source: source.into(),
            reference: reference.into(),
            category,
        }
    }

    /// Map positional CSV fields onto a quote. Missing fields become empty.
    pub fn from_fields(fields: Vec<String>, category: Category) -> Self {
        let mut fields = fields.into_iter();
        let mut next = || fields.next().unwrap_or_default();
        let author = next();
        let citation = next();
        let source = next();
        let reference = next();
        Self {
            author,
            citation,
            source,
            reference,
            category,
        }
    }
}
