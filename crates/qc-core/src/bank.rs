//! The quote repository: both category collections, loaded once.

use std::collections::HashSet;

use serde::Serialize;

use crate::parse::parse_quotes;
use crate::quote::{Category, Quote};

/// Both quote collections, partitioned by category.
///
/// A bank is built once at startup and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QuoteBank {
    rap: Vec<Quote>,
    author: Vec<Quote>,
}

impl QuoteBank {
    /// Create a bank from already parsed collections.
    ///
    /// Each quote is re-tagged with the category of the collection it was
    /// passed in, so the partition always agrees with `Quote::category`.
    pub fn new(rap: Vec<Quote>, author: Vec<Quote>) -> Self {
        Self {
            rap: tag(rap, Category::Rap),
            author: tag(author, Category::Author),
        }
    }

    /// A bank with no quotes in either category.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse both raw payloads into a bank.
    pub fn from_payloads(rap: &str, author: &str) -> Self {
        Self {
            rap: parse_quotes(rap, Category::Rap),
            author: parse_quotes(author, Category::Author),
        }
    }

    /// Quotes in one category, in payload order.
    pub fn quotes(&self, category: Category) -> &[Quote] {
        match category {
            Category::Rap => &self.rap,
            Category::Author => &self.author,
        }
    }

    /// All quotes, rap first.
    pub fn iter(&self) -> impl Iterator<Item = &Quote> {
        self.rap.iter().chain(self.author.iter())
    }

    /// Total number of quotes.
    pub fn len(&self) -> usize {
        self.rap.len() + self.author.len()
    }

    /// Whether both categories are empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether questions can be generated: both categories have quotes.
    pub fn is_ready(&self) -> bool {
        !self.rap.is_empty() && !self.author.is_empty()
    }

    /// Quote at `index` in the combined rap-then-author pool.
    pub fn get(&self, index: usize) -> Option<&Quote> {
        if index < self.rap.len() {
            self.rap.get(index)
        } else {
            self.author.get(index - self.rap.len())
        }
    }

    /// Distinct author names in one category, in first-seen order.
    pub fn distinct_authors(&self, category: Category) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.quotes(category)
            .iter()
            .map(|q| q.author.as_str())
            .filter(|author| seen.insert(*author))
            .collect()
    }

    /// Counts for one category.
    pub fn summary(&self, category: Category) -> CategorySummary {
        CategorySummary {
            category,
            quotes: self.quotes(category).len(),
            authors: self.distinct_authors(category).len(),
        }
    }
}

/// Quote and author counts for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    /// The category counted.
    pub category: Category,
    /// Number of quotes loaded.
    pub quotes: usize,
    /// Number of distinct authors among them.
    pub authors: usize,
}

fn tag(quotes: Vec<Quote>, category: Category) -> Vec<Quote> {
    quotes
        .into_iter()
        .map(|q| Quote { category, ..q })
        .collect()
}
