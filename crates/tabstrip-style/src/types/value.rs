//! Length values for tab styling.
//!
//! # Example
//!
//! ```
//! use tabstrip_style::prelude::{ItemWidthConstraint, LengthValue, TabStyle};
//!
//! let style = TabStyle::new().with_max_width(LengthValue::percent(25.0));
//!
//! // Percentages resolve against the tab bar width
//! let constraint = style.width_constraint().unwrap();
//! assert_eq!(constraint, ItemWidthConstraint::PercentOfWidth(25.0));
//! assert_eq!(constraint.resolve(400.0), Some(100.0));
//! ```

/// CSS-like length values.
///
/// Unitless numbers in tab styles are treated as pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LengthValue {
    /// Absolute pixels.
    Px(f32),
    /// Percentage of the containing width.
    Percent(f32),
    /// Automatic sizing (context-dependent).
    #[default]
    Auto,
    /// Zero length.
    Zero,
}

impl LengthValue {
    /// Create a pixel value.
    pub fn px(value: f32) -> Self {
        Self::Px(value)
    }

    /// Create a percentage value.
    pub fn percent(value: f32) -> Self {
        Self::Percent(value)
    }
}
