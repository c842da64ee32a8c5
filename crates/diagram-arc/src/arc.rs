//! The arc value type.
//!
//! # Overview
//!
//! - [`DiagramArc`]: One validated arc segment of a circular diagram
//! - [`ArcFill`]: Whether a renderer should fill the sector or stroke the outline
//!
//! # Renderer Contract
//!
//! A [`DiagramArc`] carries numbers, not meaning. The following are decided
//! by whichever renderer consumes the value and must be documented there:
//!
//! - the unit of `start_angle` and `end_angle` (degrees or radians)
//! - the sweep direction from start to end (clockwise or counterclockwise)
//! - how angles outside one turn wrap around
//! - the color syntax accepted in `color`
//! - the origin used when `x` or `y` is absent
//!
//! The only geometric rule enforced here is that the radius is a finite,
//! non-negative number.

use log::{trace, warn};
use serde::{Deserialize, Serialize};

use crate::{ValidationError, color::Color, geometry::Point, record::ArcRecord};

/// How the renderer should paint an arc.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ArcFill {
    /// Only the curved boundary is drawn (default)
    #[default]
    Stroke,
    /// The whole sector area is filled
    Full,
}

/// One arc segment of a circular diagram.
///
/// The arc lies on a circle of `radius` centered at (`x`, `y`) and spans
/// from `start_angle` to `end_angle`. Either coordinate of the center may be
/// absent, in which case the renderer picks its own origin (see
/// [`DiagramArc::center_or`]).
///
/// Values are immutable. The `with_*` methods consume the arc, re-check the
/// changed field, and return a new one.
///
/// # Examples
///
/// ```
/// use diagram_arc::{ArcFill, DiagramArc};
///
/// let outer = DiagramArc::new("outer", 50.0, 0.0, 180.0, "#ff0000")?;
/// assert_eq!(outer.is_full(), None);
/// assert_eq!(outer.fill(), ArcFill::Stroke);
///
/// let inner = DiagramArc::new("inner", 30.0, 45.0, 90.0, "blue")?
///     .with_center(10.0, 20.0)?
///     .with_full(true);
/// assert_eq!(inner.x(), Some(10.0));
/// assert_eq!(inner.fill(), ArcFill::Full);
///
/// assert!(DiagramArc::new("bad", -5.0, 0.0, 10.0, "black").is_err());
/// # Ok::<(), diagram_arc::ValidationError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ArcRecord", into = "ArcRecord")]
pub struct DiagramArc {
    name: String,
    x: Option<f64>,
    y: Option<f64>,
    radius: f64,
    start_angle: f64,
    end_angle: f64,
    color: String,
    is_full: Option<bool>,
}

impl DiagramArc {
    /// Creates an arc with no explicit center and no fill mode.
    ///
    /// # Arguments
    ///
    /// * `name` - Human-readable identifier; empty names are accepted with a warning
    /// * `radius` - Radius of the full circle the arc belongs to
    /// * `start_angle` - Where the arc begins, in the renderer's unit
    /// * `end_angle` - Where the arc ends, in the renderer's unit
    /// * `color` - Color specifier, kept verbatim
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NonFinite`] if any number is NaN or infinite,
    /// and [`ValidationError::NegativeRadius`] if `radius` is below zero.
    pub fn new(
        name: impl Into<String>,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        color: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let radius = check_finite("radius", radius)?;
        if radius < 0.0 {
            return Err(ValidationError::NegativeRadius(radius));
        }
        let start_angle = check_finite("startAngle", start_angle)?;
        let end_angle = check_finite("endAngle", end_angle)?;

        if name.is_empty() {
            warn!(radius, start_angle, end_angle; "Arc created with an empty name");
        }
        trace!(name = name.as_str(), radius; "Arc created");

        Ok(Self {
            name,
            x: None,
            y: None,
            radius,
            start_angle,
            end_angle,
            color: color.into(),
            is_full: None,
        })
    }

    /// Returns a copy with both center coordinates set.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NonFinite`] if either coordinate is NaN or infinite.
    pub fn with_center(self, x: f64, y: f64) -> Result<Self, ValidationError> {
        self.with_x(x)?.with_y(y)
    }

    /// Returns a copy with the horizontal center set.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NonFinite`] if `x` is NaN or infinite.
    pub fn with_x(mut self, x: f64) -> Result<Self, ValidationError> {
        self.x = Some(check_finite("x", x)?);
        Ok(self)
    }

    /// Returns a copy with the vertical center set.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NonFinite`] if `y` is NaN or infinite.
    pub fn with_y(mut self, y: f64) -> Result<Self, ValidationError> {
        self.y = Some(check_finite("y", y)?);
        Ok(self)
    }

    /// Returns a copy with the fill mode set explicitly.
    pub fn with_full(mut self, is_full: bool) -> Self {
        self.is_full = Some(is_full);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn x(&self) -> Option<f64> {
        self.x
    }

    pub fn y(&self) -> Option<f64> {
        self.y
    }

    /// Returns the center when both coordinates were given.
    pub fn center(&self) -> Option<Point> {
        Some(Point::new(self.x?, self.y?))
    }

    /// Returns the center, taking each missing coordinate from `origin`.
    ///
    /// ```
    /// use diagram_arc::{DiagramArc, geometry::Point};
    ///
    /// let arc = DiagramArc::new("a", 1.0, 0.0, 1.0, "red")?.with_x(4.0)?;
    /// assert_eq!(arc.center_or(Point::new(100.0, 100.0)), Point::new(4.0, 100.0));
    /// # Ok::<(), diagram_arc::ValidationError>(())
    /// ```
    pub fn center_or(&self, origin: Point) -> Point {
        Point::new(self.x.unwrap_or(origin.x()), self.y.unwrap_or(origin.y()))
    }

    /// Returns `true` when neither center coordinate was given.
    pub fn is_centered(&self) -> bool {
        self.x.is_none() && self.y.is_none()
    }

    /// Radius of the full circle, always finite and non-negative.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    pub fn end_angle(&self) -> f64 {
        self.end_angle
    }

    /// Returns the color specifier exactly as given.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Returns the fill flag as given, `None` when it was omitted.
    pub fn is_full(&self) -> Option<bool> {
        self.is_full
    }

    /// Returns how the arc should be painted. An omitted flag means [`ArcFill::Stroke`].
    pub fn fill(&self) -> ArcFill {
        match self.is_full {
            Some(true) => ArcFill::Full,
            Some(false) | None => ArcFill::Stroke,
        }
    }

    /// Interprets the color specifier as a CSS color.
    ///
    /// Construction never calls this; it is for callers whose renderer
    /// expects CSS colors and wants to reject others early.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidColor`] when the text is not a CSS color.
    pub fn parse_color(&self) -> Result<Color, ValidationError> {
        Color::new(&self.color).map_err(|reason| ValidationError::InvalidColor {
            color: self.color.clone(),
            reason,
        })
    }
}

fn check_finite(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::NonFinite { field, value })
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn angle_strategy() -> impl Strategy<Value = f64> {
        -1000.0f64..1000.0
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Any arc that constructs successfully has a non-negative radius.
    fn check_valid_radius_non_negative(
        radius: f64,
        start: f64,
        end: f64,
    ) -> Result<(), TestCaseError> {
        if let Ok(arc) = DiagramArc::new("p", radius, start, end, "red") {
            prop_assert!(arc.radius() >= 0.0, "radius {} is negative", arc.radius());
            prop_assert_eq!(arc.radius(), radius);
        }
        Ok(())
    }

    /// Every strictly negative radius is rejected.
    fn check_negative_radius_rejected(
        radius: f64,
        start: f64,
        end: f64,
    ) -> Result<(), TestCaseError> {
        let result = DiagramArc::new("p", radius, start, end, "red");
        prop_assert_eq!(result, Err(ValidationError::NegativeRadius(radius)));
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn valid_radius_non_negative(radius in -1000.0f64..1000.0, start in angle_strategy(), end in angle_strategy()) {
            check_valid_radius_non_negative(radius, start, end)?;
        }

        #[test]
        fn negative_radius_rejected(radius in -1000.0f64..-0.001, start in angle_strategy(), end in angle_strategy()) {
            check_negative_radius_rejected(radius, start, end)?;
        }
    }
}
