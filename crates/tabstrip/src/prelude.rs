//! Prelude module for Tabstrip.
//!
//! ```ignore
//! use tabstrip::prelude::*;
//! ```

// ============================================================================
// Value types
// ============================================================================

pub use tabstrip_render::{Color, Size};
pub use tabstrip_style::types::{ItemWidthConstraint, LengthValue, TabStyle};

// ============================================================================
// Layout
// ============================================================================

pub use crate::device::{DeviceClass, Os, Platform};
pub use crate::layout::{
    resolve_layout_mode, Axis, Density, LayoutEnvironment, LayoutMode, LayoutRequest,
};

// ============================================================================
// Interpolation
// ============================================================================

pub use crate::animation::{color_at, colors_at, ColorStops, Keyframes};

// ============================================================================
// Tab bar
// ============================================================================

pub use crate::content::{LabelSource, Navigator, TabBarDelegate, TabPressEvent, TestIds};
pub use crate::options::TabBarOptions;
pub use crate::scene::{NavigationState, Route, TabScene};
pub use crate::tab_bar::{
    BarMetrics, BottomTabBar, IconFrame, ItemMetrics, LabelContent, LabelPlacement, TabBarFrame,
    TabItemFrame,
};

pub use crate::{Error, Result};
