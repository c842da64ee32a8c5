//! Validation errors for arc construction.

use thiserror::Error;

/// The error raised when a [`DiagramArc`](crate::DiagramArc) cannot be built.
///
/// Every constructor, `with_*` method, and decoder of the crate reports
/// failures through this type. There is no partial result: either the
/// value is fully valid or the caller receives one of these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("radius must not be negative, got {0}")]
    NegativeRadius(f64),

    #[error("`{field}` must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("invalid color `{color}`: {reason}")]
    InvalidColor { color: String, reason: String },
}

impl ValidationError {
    /// Returns the name of the record field this error is about.
    ///
    /// Field names use the camelCase spelling of the interchange record.
    pub fn field(&self) -> &'static str {
        match self {
            Self::NegativeRadius(_) => "radius",
            Self::NonFinite { field, .. } | Self::MissingField(field) => field,
            Self::InvalidColor { .. } => "color",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ValidationError::NegativeRadius(-5.0).to_string(),
            "radius must not be negative, got -5"
        );
        assert_eq!(
            ValidationError::MissingField("color").to_string(),
            "missing required field `color`"
        );
    }

    #[test]
    fn test_field() {
        assert_eq!(ValidationError::NegativeRadius(-1.0).field(), "radius");
        assert_eq!(ValidationError::MissingField("startAngle").field(), "startAngle");
        let err = ValidationError::NonFinite {
            field: "x",
            value: f64::NAN,
        };
        assert_eq!(err.field(), "x");
        let err = ValidationError::InvalidColor {
            color: "nope".to_string(),
            reason: "unknown name".to_string(),
        };
        assert_eq!(err.field(), "color");
    }
}
