//! Error adapter for converting CliError to miette diagnostics.
//!
//! This module provides the bridge between the checker's error types and
//! miette's rich diagnostic formatting.
//!
//! # Multi-Error Support
//!
//! When a [`CliError::Invalid`] holds several rejected records, each record
//! is rendered as its own report. Decode errors point at the source span
//! the parser blamed.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use diagram_arc::ValidationError;

use crate::{CliError, RecordError};

/// Adapter for one rejected record.
#[derive(Debug)]
pub struct RecordAdapter<'a>(pub &'a RecordError);

impl fmt::Display for RecordAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for RecordAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0.error)
    }
}

impl MietteDiagnostic for RecordAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("diagram_arc::validation"))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0.error {
            ValidationError::NegativeRadius(_) => "use a radius of zero or more".to_string(),
            ValidationError::NonFinite { field, .. } => {
                format!("`{field}` must be an ordinary number")
            }
            ValidationError::MissingField(field) => format!("add a `{field}` key to the record"),
            ValidationError::InvalidColor { .. } => {
                "use a CSS color such as `#ff0000` or `blue`, or disable `strict_colors`"
                    .to_string()
            }
        };
        Some(Box::new(help))
    }
}

/// Adapter for a decode error that knows where in the source it happened.
pub struct DecodeAdapter<'a> {
    err: &'a CliError,
    message: &'a str,
    span: Option<SourceSpan>,
    src: &'a str,
}

impl fmt::Debug for DecodeAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodeAdapter")
            .field("message", &self.message)
            .field("span", &self.span)
            .finish()
    }
}

impl fmt::Display for DecodeAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.err, f)
    }
}

impl std::error::Error for DecodeAdapter<'_> {}

impl MietteDiagnostic for DecodeAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("diagram_arc::decode"))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.span?;
        Some(Box::new(std::iter::once(
            LabeledSpan::new_primary_with_span(Some(self.message.to_string()), span),
        )))
    }
}

/// Adapter for [`CliError`] variants without per-item detail.
pub struct ErrorAdapter<'a>(pub &'a CliError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            CliError::Io(_) => "diagram_arc::io",
            CliError::Config(_) => "diagram_arc::config",
            CliError::UnknownFormat(_) => "diagram_arc::format",
            CliError::Decode { .. } => "diagram_arc::decode",
            CliError::Encode { .. } => "diagram_arc::encode",
            CliError::Invalid(_) => "diagram_arc::validation",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            CliError::UnknownFormat(_) => Some(Box::new("pass `--format json` or `--format toml`")),
            _ => None,
        }
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A single rejected record.
    Record(RecordAdapter<'a>),
    /// A decode failure with source location information.
    Decode(DecodeAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Record(r) => fmt::Display::fmt(r, f),
            Reportable::Decode(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Record(r) => std::error::Error::source(r),
            Reportable::Decode(_) => None,
            Reportable::Error(e) => std::error::Error::source(e),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Record(r) => r.code(),
            Reportable::Decode(d) => d.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Record(r) => r.help(),
            Reportable::Decode(d) => d.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Record(r) => r.source_code(),
            Reportable::Decode(d) => d.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Record(r) => r.labels(),
            Reportable::Decode(d) => d.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert a [`CliError`] into a list of reportable errors.
///
/// [`CliError::Invalid`] yields one [`Reportable`] per rejected record,
/// [`CliError::Decode`] yields one located report, and every other variant
/// yields a single plain report.
pub fn to_reportables(err: &CliError) -> Vec<Reportable<'_>> {
    match err {
        CliError::Invalid(failures) => failures
            .iter()
            .map(|failure| Reportable::Record(RecordAdapter(failure)))
            .collect(),
        CliError::Decode {
            message, span, src, ..
        } => vec![Reportable::Decode(DecodeAdapter {
            err,
            message,
            span: span
                .clone()
                .map(|span| SourceSpan::new(span.start.into(), span.len())),
            src,
        })],
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}

#[cfg(test)]
mod tests {
    use crate::document::Format;

    use super::*;

    #[test]
    fn test_one_reportable_per_record() {
        let err = CliError::Invalid(vec![
            RecordError::new(0, Some("bad".to_string()), ValidationError::NegativeRadius(-5.0)),
            RecordError::new(3, None, ValidationError::MissingField("color")),
        ]);

        let reportables = to_reportables(&err);

        assert_eq!(reportables.len(), 2);
        assert_eq!(
            reportables[0].to_string(),
            "arc #0 `bad`: radius must not be negative, got -5"
        );
        assert_eq!(
            reportables[1].to_string(),
            "arc #3: missing required field `color`"
        );
        assert_eq!(
            reportables[1].help().unwrap().to_string(),
            "add a `color` key to the record"
        );
    }

    #[test]
    fn test_decode_error_is_labeled() {
        let err = CliError::Decode {
            format: Format::Json,
            message: "expected value".to_string(),
            span: Some(4..5),
            src: "[1, x]".to_string(),
        };

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);

        match &reportables[0] {
            Reportable::Decode(d) => {
                assert!(d.source_code().is_some());
                let labels: Vec<_> = d.labels().unwrap().collect();
                assert_eq!(labels.len(), 1);
                assert!(labels[0].primary());
                assert_eq!(labels[0].offset(), 4);
                assert_eq!(labels[0].label(), Some("expected value"));
            }
            other => panic!("Expected Decode, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_error_without_span_has_no_labels() {
        let err = CliError::Decode {
            format: Format::Toml,
            message: "missing table".to_string(),
            span: None,
            src: String::new(),
        };

        let reportables = to_reportables(&err);
        assert!(reportables[0].labels().is_none());
    }

    #[test]
    fn test_plain_error() {
        let err = CliError::UnknownFormat("arcs.yaml".to_string());

        let reportables = to_reportables(&err);

        assert_eq!(reportables.len(), 1);
        match &reportables[0] {
            Reportable::Error(e) => {
                assert_eq!(e.code().unwrap().to_string(), "diagram_arc::format");
                assert!(e.help().is_some());
            }
            other => panic!("Expected Error, got {other:?}"),
        }
    }
}
