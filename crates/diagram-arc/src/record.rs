//! Interchange form of an arc.
//!
//! [`ArcRecord`] mirrors the keyed record exchanged with renderers:
//!
//! ```text
//! { name: string, x?: number, y?: number, radius: number,
//!   startAngle: number, endAngle: number, color: string, isFull?: boolean }
//! ```
//!
//! [`DiagramArc`] serializes through this record and deserializes from it
//! with full validation, so any serde format works:
//!
//! ```
//! use diagram_arc::DiagramArc;
//!
//! let arc: DiagramArc = serde_json::from_str(
//!     r##"{"name":"outer","radius":50,"startAngle":0,"endAngle":180,"color":"#ff0000"}"##,
//! )?;
//! assert_eq!(arc.radius(), 50.0);
//!
//! let bad = serde_json::from_str::<DiagramArc>(
//!     r#"{"name":"bad","radius":-5,"startAngle":0,"endAngle":10,"color":"black"}"#,
//! );
//! assert!(bad.is_err());
//! # Ok::<(), serde_json::Error>(())
//! ```
//!
//! Keys not listed above are ignored on input.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{DiagramArc, ValidationError};

/// The keyed record form of a [`DiagramArc`], with every key optional.
///
/// Decoding into a record never fails on missing keys; turning the record
/// into a [`DiagramArc`] does.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArcRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_angle: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_angle: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_full: Option<bool>,
}

impl TryFrom<ArcRecord> for DiagramArc {
    type Error = ValidationError;

    fn try_from(record: ArcRecord) -> Result<Self, Self::Error> {
        let ArcRecord {
            name,
            x,
            y,
            radius,
            start_angle,
            end_angle,
            color,
            is_full,
        } = record;

        let name = name.ok_or(ValidationError::MissingField("name"))?;
        let radius = radius.ok_or(ValidationError::MissingField("radius"))?;
        let start_angle = start_angle.ok_or(ValidationError::MissingField("startAngle"))?;
        let end_angle = end_angle.ok_or(ValidationError::MissingField("endAngle"))?;
        let color = color.ok_or(ValidationError::MissingField("color"))?;

        let mut arc = DiagramArc::new(name, radius, start_angle, end_angle, color)?;
        if let Some(x) = x {
            arc = arc.with_x(x)?;
        }
        if let Some(y) = y {
            arc = arc.with_y(y)?;
        }
        if let Some(is_full) = is_full {
            arc = arc.with_full(is_full);
        }

        debug!(name = arc.name(), centered = arc.is_centered(); "Arc decoded from record");

        Ok(arc)
    }
}

impl From<DiagramArc> for ArcRecord {
    fn from(arc: DiagramArc) -> Self {
        Self {
            x: arc.x(),
            y: arc.y(),
            radius: Some(arc.radius()),
            start_angle: Some(arc.start_angle()),
            end_angle: Some(arc.end_angle()),
            is_full: arc.is_full(),
            name: Some(arc.name().to_string()),
            color: Some(arc.color().to_string()),
        }
    }
}
