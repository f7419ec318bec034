//! Adaptive layout for the tab bar.
//!
//! The resolver turns viewport measurements, orientation and the tab style's
//! width constraint into a [`LayoutMode`]: whether each item's icon and label
//! sit side by side or stacked, and whether the bar is compact.

mod mode;
mod resolver;

pub use mode::{Axis, Density, LayoutEnvironment, LayoutMode};
pub use resolver::{
    is_height_constrained, max_item_width, resolve_layout_mode, LayoutRequest,
    DEFAULT_MAX_ITEM_WIDTH, HEIGHT_CONSTRAINED_BELOW,
};
