//! Per-item style configuration and the width constraint derived from it.

use std::str::FromStr;

use super::LengthValue;
use crate::Error;

/// Upper bound on an item's width, derived from its style.
///
/// The layout resolver multiplies this by the item count to decide whether
/// items fit side by side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ItemWidthConstraint {
    /// A fixed width in layout units.
    Fixed(f32),
    /// A percentage (0-100) of the tab bar's width.
    PercentOfWidth(f32),
}

impl ItemWidthConstraint {
    /// Resolve the constraint against the tab bar width.
    ///
    /// Returns `None` when the result is not a usable width (non-finite,
    /// zero, or negative), so callers can fall back to their default.
    pub fn resolve(&self, bar_width: f32) -> Option<f32> {
        let width = match self {
            ItemWidthConstraint::Fixed(v) => *v,
            ItemWidthConstraint::PercentOfWidth(p) => bar_width * (p / 100.0),
        };
        (width.is_finite() && width > 0.0).then_some(width)
    }
}

/// Style overrides applied to every tab item.
///
/// Only the sizing properties matter to layout; anything else in a parsed
/// declaration block is ignored.
///
/// # Example
///
/// ```
/// use tabstrip_style::prelude::*;
///
/// let style: TabStyle = "max-width: 25%".parse().unwrap();
/// assert_eq!(
///     style.width_constraint(),
///     Some(ItemWidthConstraint::PercentOfWidth(25.0))
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TabStyle {
    /// Explicit item width.
    pub width: Option<LengthValue>,
    /// Maximum item width, consulted when `width` gives no constraint.
    pub max_width: Option<LengthValue>,
}

impl TabStyle {
    /// Create an empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the explicit width.
    pub fn with_width(mut self, width: LengthValue) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the maximum width.
    pub fn with_max_width(mut self, max_width: LengthValue) -> Self {
        self.max_width = Some(max_width);
        self
    }

    /// Derive the width constraint.
    ///
    /// `width` wins over `max-width`; an `auto` width defers to `max-width`.
    pub fn width_constraint(&self) -> Option<ItemWidthConstraint> {
        [self.width, self.max_width]
            .into_iter()
            .flatten()
            .find_map(|len| match len {
                LengthValue::Px(v) => Some(ItemWidthConstraint::Fixed(v)),
                LengthValue::Zero => Some(ItemWidthConstraint::Fixed(0.0)),
                LengthValue::Percent(p) => Some(ItemWidthConstraint::PercentOfWidth(p)),
                LengthValue::Auto => None,
            })
    }
}

impl FromStr for TabStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::parse_tab_style(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_takes_precedence() {
        let style = TabStyle::new()
            .with_width(LengthValue::px(90.0))
            .with_max_width(LengthValue::percent(10.0));
        assert_eq!(style.width_constraint(), Some(ItemWidthConstraint::Fixed(90.0)));
    }

    #[test]
    fn auto_width_defers_to_max_width() {
        let style = TabStyle::new()
            .with_width(LengthValue::Auto)
            .with_max_width(LengthValue::px(110.0));
        assert_eq!(style.width_constraint(), Some(ItemWidthConstraint::Fixed(110.0)));
    }

    #[test]
    fn empty_style_has_no_constraint() {
        assert_eq!(TabStyle::default().width_constraint(), None);
    }

    #[test]
    fn unusable_widths_do_not_resolve() {
        assert_eq!(ItemWidthConstraint::Fixed(0.0).resolve(500.0), None);
        assert_eq!(ItemWidthConstraint::Fixed(f32::NAN).resolve(500.0), None);
        assert_eq!(ItemWidthConstraint::PercentOfWidth(20.0).resolve(0.0), None);
        assert_eq!(ItemWidthConstraint::PercentOfWidth(20.0).resolve(500.0), Some(100.0));
    }
}
