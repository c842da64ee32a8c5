//! Error types for the diagram arc checker.
//!
//! This module provides [`CliError`], which covers everything that can go
//! wrong between reading the input and printing the normalized records.

use std::{io, ops::Range};

use thiserror::Error;

use diagram_arc::ValidationError;

use crate::{config::ConfigError, document::Format};

/// The main error type for checker runs.
///
/// # Diagnostic Variants
///
/// `Decode` keeps the source text and the span at fault, and `Invalid`
/// holds one [`RecordError`] per rejected record. Both are expanded into
/// separate reports by [`crate::error_adapter::to_reportables`].
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Cannot infer the input format of `{0}`; pass --format")]
    UnknownFormat(String),

    #[error("Failed to decode {format} input: {message}")]
    Decode {
        format: Format,
        message: String,
        span: Option<Range<usize>>,
        src: String,
    },

    #[error("Failed to encode {format} output: {message}")]
    Encode { format: Format, message: String },

    #[error("{} invalid arc record(s)", .0.len())]
    Invalid(Vec<RecordError>),
}

/// A validation failure tied to one record of the input document.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("arc #{index}{}: {error}", name_suffix(.name.as_deref()))]
pub struct RecordError {
    /// Zero-based position of the record in the document
    pub index: usize,
    /// Name of the record, if it had one
    pub name: Option<String>,
    #[source]
    pub error: ValidationError,
}

impl RecordError {
    pub fn new(index: usize, name: Option<String>, error: ValidationError) -> Self {
        Self { index, name, error }
    }
}

fn name_suffix(name: Option<&str>) -> String {
    match name {
        Some(name) => format!(" `{name}`"),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_error_display() {
        let err = RecordError::new(
            2,
            Some("bad".to_string()),
            ValidationError::NegativeRadius(-5.0),
        );
        assert_eq!(
            err.to_string(),
            "arc #2 `bad`: radius must not be negative, got -5"
        );

        let err = RecordError::new(0, None, ValidationError::MissingField("name"));
        assert_eq!(err.to_string(), "arc #0: missing required field `name`");
    }

    #[test]
    fn test_invalid_display_counts_records() {
        let err = CliError::Invalid(vec![
            RecordError::new(0, None, ValidationError::MissingField("name")),
            RecordError::new(1, None, ValidationError::MissingField("color")),
        ]);
        assert_eq!(err.to_string(), "2 invalid arc record(s)");
    }
}
