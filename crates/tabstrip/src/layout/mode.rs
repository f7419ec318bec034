//! Layout mode types.

use tabstrip_render::Size;

/// Direction in which an item's icon and label are arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    /// Icon beside label.
    Horizontal,
    /// Icon above label.
    #[default]
    Vertical,
}

impl Axis {
    /// Returns true for the horizontal axis.
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Axis::Horizontal)
    }

    /// Returns true for the vertical axis.
    pub fn is_vertical(&self) -> bool {
        matches!(self, Axis::Vertical)
    }
}

/// Sizing of the tab bar container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Density {
    /// Short bar for height-constrained screens.
    Compact,
    /// Standard bar height.
    #[default]
    Regular,
}

/// The resolved layout of the tab bar.
///
/// Recomputed on every layout pass and never stored by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LayoutMode {
    /// Arrangement of icon and label within each item.
    pub axis: Axis,
    /// Container sizing.
    pub density: Density,
}

impl LayoutMode {
    /// Icon above label in a regular-height bar.
    pub const STACKED: Self = Self::new(Axis::Vertical, Density::Regular);

    /// Create a layout mode.
    pub const fn new(axis: Axis, density: Density) -> Self {
        Self { axis, density }
    }

    /// Returns true if icon and label sit side by side.
    #[inline]
    pub fn is_horizontal(&self) -> bool {
        self.axis.is_horizontal()
    }

    /// Returns true if the bar uses compact height.
    #[inline]
    pub fn is_compact(&self) -> bool {
        self.density == Density::Compact
    }
}

/// Live measurements supplied by the host on each layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutEnvironment {
    /// Tab bar viewport; zero dimensions mean "not measured yet".
    pub viewport: Size,
    /// Whether the device is in landscape orientation.
    pub is_landscape: bool,
}

impl LayoutEnvironment {
    /// Create a portrait environment.
    pub fn portrait(viewport: Size) -> Self {
        Self {
            viewport,
            is_landscape: false,
        }
    }

    /// Create a landscape environment.
    pub fn landscape(viewport: Size) -> Self {
        Self {
            viewport,
            is_landscape: true,
        }
    }
}
