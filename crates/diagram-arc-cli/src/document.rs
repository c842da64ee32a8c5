//! Reading and writing files of arc records.
//!
//! A document is a list of arc records. The accepted layouts are:
//!
//! - JSON: a bare array `[{...}, ...]` or an object `{ "arcs": [...] }`
//! - TOML: an array of tables under `arcs`
//!
//! ```toml
//! [[arcs]]
//! name = "outer"
//! radius = 50
//! startAngle = 0
//! endAngle = 180
//! color = "#ff0000"
//! ```
//!
//! The `arcs` key is required and no other top-level key is accepted, so a
//! file in the wrong shape is a decode error rather than an empty document.
//!
//! Decoding stops at the structural level and yields raw [`ArcRecord`]s so
//! that every record can be validated, and reported, on its own.

use std::{fmt, ops::Range, path::Path};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use diagram_arc::{DiagramArc, record::ArcRecord};

use crate::error::CliError;

/// Serialization format of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Toml,
}

impl Format {
    /// Infers the format from a file extension, ignoring case.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let extension = path.as_ref().extension()?.to_str()?;
        if extension.eq_ignore_ascii_case("json") {
            Some(Self::Json)
        } else if extension.eq_ignore_ascii_case("toml") {
            Some(Self::Toml)
        } else {
            None
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Toml => write!(f, "toml"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct Document<T> {
    arcs: Vec<T>,
}

/// Decodes `source` into raw records without validating them.
///
/// # Errors
///
/// Returns [`CliError::Decode`] when the text is not well-formed for
/// `format` or does not have the document layout. The error keeps the
/// source and, when the parser reports one, the byte span at fault.
pub fn decode(source: &str, format: Format) -> Result<Vec<ArcRecord>, CliError> {
    match format {
        Format::Json => decode_json(source),
        Format::Toml => toml::from_str::<Document<ArcRecord>>(source)
            .map(|document| document.arcs)
            .map_err(|err| CliError::Decode {
                format,
                message: err.message().to_string(),
                span: err.span(),
                src: source.to_string(),
            }),
    }
}

fn decode_json(source: &str) -> Result<Vec<ArcRecord>, CliError> {
    let result = if source.trim_start().starts_with('[') {
        serde_json::from_str::<Vec<ArcRecord>>(source)
    } else {
        serde_json::from_str::<Document<ArcRecord>>(source).map(|document| document.arcs)
    };

    result.map_err(|err| CliError::Decode {
        format: Format::Json,
        span: line_column_to_span(source, err.line(), err.column()),
        message: err.to_string(),
        src: source.to_string(),
    })
}

/// Encodes validated arcs in `format`.
///
/// JSON output is a pretty-printed bare array; TOML output is an `arcs`
/// array of tables.
///
/// # Errors
///
/// Returns [`CliError::Encode`] if the serializer rejects the data.
pub fn encode(arcs: &[DiagramArc], format: Format) -> Result<String, CliError> {
    let encoded = match format {
        Format::Json => serde_json::to_string_pretty(arcs).map_err(|err| err.to_string()),
        Format::Toml => toml::to_string(&Document {
            arcs: arcs.to_vec(),
        })
        .map_err(|err| err.to_string()),
    };

    encoded.map_err(|message| CliError::Encode { format, message })
}

/// Converts a 1-based line and column into a one-byte span.
///
/// serde_json reports line 0 when the error has no position.
fn line_column_to_span(source: &str, line: usize, column: usize) -> Option<Range<usize>> {
    if line == 0 {
        return None;
    }

    let line_start: usize = source
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    let offset = (line_start + column.saturating_sub(1)).min(source.len());
    let end = (offset + 1).min(source.len());

    Some(offset..end)
}
