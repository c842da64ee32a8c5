//! CSS color interpretation for arc colors.
//!
//! Arc colors are stored as plain text and belong to the renderer. This
//! module lets callers that do speak CSS check them up front, by wrapping
//! the `DynamicColor` type from the color crate.

use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::DynamicColor;

/// A parsed CSS color such as `"#ff0000"`, `"rgb(255, 0, 0)"` or `"red"`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl Color {
    /// Parses a CSS color string.
    ///
    /// # Examples
    ///
    /// ```
    /// use diagram_arc::color::Color;
    ///
    /// assert!(Color::new("#ff0000").is_ok());
    /// assert!(Color::new("blue").is_ok());
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns the parser's message when `color_str` is not a CSS color.
    pub fn new(color_str: &str) -> Result<Self, String> {
        DynamicColor::from_str(color_str)
            .map(|color| Self { color })
            .map_err(|err| err.to_string())
    }

    /// Returns the alpha component, between 0.0 (transparent) and 1.0 (opaque).
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)
    }
}
