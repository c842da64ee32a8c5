//! CLI logic for the diagram arc checker.
//!
//! The checker reads a file of arc records, validates every record, and
//! returns the normalized records. It never renders or stores anything.

pub mod config;
pub mod document;
pub mod error_adapter;

mod args;
mod error;

pub use args::Args;
pub use error::{CliError, RecordError};

use std::fs;

use log::{debug, info, warn};

use diagram_arc::{DiagramArc, record::ArcRecord};

use config::ValidationConfig;
use document::Format;

/// Run the diagram arc checker
///
/// Loads the configuration, decodes the input file, validates each record
/// on its own, and encodes the valid arcs in the requested output format.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `CliError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Unknown input formats
/// - Malformed documents
/// - Invalid records (all of them, not just the first)
pub fn run(args: &Args) -> Result<String, CliError> {
    info!(
        input_path = args.input,
        emit:% = args.emit;
        "Checking arc records"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let format = match args.format {
        Some(format) => format,
        None => Format::from_path(&args.input)
            .ok_or_else(|| CliError::UnknownFormat(args.input.clone()))?,
    };
    debug!(format:%; "Input format selected");

    let source = fs::read_to_string(&args.input)?;
    let records = document::decode(&source, format)?;
    let arcs = validate_records(records, app_config.validation())?;

    info!(count = arcs.len(); "All arc records are valid");

    document::encode(&arcs, args.emit)
}

/// Validate decoded records against the arc rules and the configured policy.
///
/// # Errors
///
/// Returns [`CliError::Invalid`] listing every rejected record.
pub fn validate_records(
    records: Vec<ArcRecord>,
    policy: &ValidationConfig,
) -> Result<Vec<DiagramArc>, CliError> {
    let mut arcs = Vec::with_capacity(records.len());
    let mut failures = Vec::new();

    for (index, record) in records.into_iter().enumerate() {
        let name = record.name.clone();
        let checked = DiagramArc::try_from(record)
            .and_then(|arc| policy.check(&arc).map(|()| arc));

        match checked {
            Ok(arc) => arcs.push(arc),
            Err(error) => {
                warn!(index, name:?, error:%; "Rejected arc record");
                failures.push(RecordError::new(index, name, error));
            }
        }
    }

    if failures.is_empty() {
        Ok(arcs)
    } else {
        Err(CliError::Invalid(failures))
    }
}

#[cfg(test)]
mod tests {
    use diagram_arc::ValidationError;

    use super::*;

    fn record(name: &str, radius: f64) -> ArcRecord {
        ArcRecord {
            name: Some(name.to_string()),
            radius: Some(radius),
            start_angle: Some(0.0),
            end_angle: Some(90.0),
            color: Some("red".to_string()),
            ..ArcRecord::default()
        }
    }

    #[test]
    fn test_validate_records_all_valid() {
        let records = vec![record("a", 1.0), record("b", 2.0)];
        let arcs = validate_records(records, &ValidationConfig::default()).unwrap();

        assert_eq!(arcs.len(), 2);
        assert_eq!(arcs[1].name(), "b");
    }

    #[test]
    fn test_validate_records_collects_every_failure() {
        let records = vec![
            record("bad", -5.0),
            record("good", 1.0),
            ArcRecord {
                color: None,
                ..record("colorless", 1.0)
            },
        ];

        match validate_records(records, &ValidationConfig::default()) {
            Err(CliError::Invalid(failures)) => {
                assert_eq!(failures.len(), 2);
                assert_eq!(failures[0].index, 0);
                assert_eq!(failures[0].error, ValidationError::NegativeRadius(-5.0));
                assert_eq!(failures[1].index, 2);
                assert_eq!(failures[1].name.as_deref(), Some("colorless"));
                assert_eq!(failures[1].error, ValidationError::MissingField("color"));
            }
            other => panic!("Expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_records_applies_policy() {
        let policy = ValidationConfig::new(false, true, true);

        let result = validate_records(vec![record("a", 1.0)], &policy);
        assert!(matches!(result, Err(CliError::Invalid(ref f)) if f.len() == 1));
    }
}
