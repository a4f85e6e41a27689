//! Comma-separated quote payload parsing.
//!
//! Payloads are line-oriented: the first non-blank line is a header and is
//! skipped, every other non-blank line becomes exactly one [`Quote`].
//! Fields follow the usual CSV quoting rules: a field wrapped in double
//! quotes may contain commas, and `""` inside it stands for one `"`.
//! Parsing never fails; short rows are padded with empty fields.

use crate::quote::{Category, Quote};

/// Parse a whole payload into quotes tagged with `category`.
///
/// The category comes from the caller, never from the row content.
pub fn parse_quotes(text: &str, category: Category) -> Vec<Quote> {
    text.split('\n')
        .filter(|line| !line.trim().is_empty())
        .skip(1)
        .map(|line| Quote::from_fields(split_record(line), category))
        .collect()
}

/// Split one line into its fields.
///
/// An unterminated quoted field runs to the end of the line. Text after a
/// closing quote and before the next comma is appended to the field. A line
/// the reader rejects yields no fields, which [`Quote::from_fields`] pads.
pub fn split_record(line: &str) -> Vec<String> {
    let line = line.strip_suffix('\r').unwrap_or(line);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(line.as_bytes());

    match reader.records().next() {
        Some(Ok(record)) => record.iter().map(str::to_string).collect(),
        Some(Err(_)) => Vec::new(),
        None => vec![String::new()],
    }
}
