//! Error types for parsing input strings and loading locales.

use thiserror::Error;

/// Errors that can occur when parsing a date or time string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid date '{input}': expected YYYY-MM-DD")]
    InvalidDate { input: String },

    #[error("invalid time '{input}': expected HH:MM")]
    InvalidTime { input: String },
}

/// Errors that can occur when building or loading a locale table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    #[error("malformed locale table: {0}")]
    Malformed(String),

    #[error("numeral glyph '{glyph}' is mapped to more than one digit")]
    DuplicateNumeral { glyph: char },

    #[error("empty entry in {table} at position {index}")]
    EmptyEntry { table: &'static str, index: usize },
}
