//! Breakpoint policy for the tab bar layout.
//!
//! Horizontal items are chosen only when every item provably fits side by
//! side at its maximum width; otherwise items stack icon-above-label so that
//! nothing is clipped. Density follows the available height.

use tabstrip_render::Size;
use tabstrip_style::types::ItemWidthConstraint;

use super::mode::{Axis, Density, LayoutEnvironment, LayoutMode};
use crate::device::DeviceClass;

/// Viewports shorter than this are height constrained.
pub const HEIGHT_CONSTRAINED_BELOW: f32 = 500.0;

/// Maximum item width when the tab style gives no usable constraint.
pub const DEFAULT_MAX_ITEM_WIDTH: f32 = 125.0;

/// Inputs to [`resolve_layout_mode`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutRequest {
    /// Viewport and orientation.
    pub environment: LayoutEnvironment,
    /// Whether the axis adapts to the available space.
    pub adaptive: bool,
    /// Number of tab items.
    pub item_count: usize,
    /// Width constraint from the tab style.
    pub width_constraint: Option<ItemWidthConstraint>,
    /// Fallback used while the viewport is unmeasured.
    pub device_class: DeviceClass,
}

impl LayoutRequest {
    /// Create an adaptive request without a width constraint.
    pub fn new(environment: LayoutEnvironment, item_count: usize) -> Self {
        Self {
            environment,
            adaptive: true,
            item_count,
            width_constraint: None,
            device_class: DeviceClass::default(),
        }
    }

    /// Set whether the layout is adaptive.
    pub fn with_adaptive(mut self, adaptive: bool) -> Self {
        self.adaptive = adaptive;
        self
    }

    /// Set the item width constraint.
    pub fn with_width_constraint(mut self, constraint: Option<ItemWidthConstraint>) -> Self {
        self.width_constraint = constraint;
        self
    }

    /// Set the device class fallback.
    pub fn with_device_class(mut self, device_class: DeviceClass) -> Self {
        self.device_class = device_class;
        self
    }
}

/// Resolve the maximum width of a single item.
///
/// Percentages resolve against `bar_width`. Missing or unusable constraints
/// fall back to [`DEFAULT_MAX_ITEM_WIDTH`].
pub fn max_item_width(constraint: Option<ItemWidthConstraint>, bar_width: f32) -> f32 {
    match constraint {
        Some(c) => c.resolve(bar_width).unwrap_or_else(|| {
            tracing::warn!(
                "Unusable tab width constraint {:?} for bar width {}, using {}",
                c,
                bar_width,
                DEFAULT_MAX_ITEM_WIDTH
            );
            DEFAULT_MAX_ITEM_WIDTH
        }),
        None => DEFAULT_MAX_ITEM_WIDTH,
    }
}

/// Whether the bar should use its short form.
///
/// A measured width means the height is trusted as is, so an unmeasured
/// height (`0`) counts as constrained. While the width is unmeasured the bar
/// is only constrained when the height is unmeasured too and the device is a
/// phone.
pub fn is_height_constrained(environment: &LayoutEnvironment, device_class: DeviceClass) -> bool {
    let Size { width, height } = environment.viewport;
    if width == 0.0 {
        height == 0.0 && !device_class.is_tablet()
    } else {
        height < HEIGHT_CONSTRAINED_BELOW
    }
}

/// Decide the layout mode for the given measurements.
///
/// Pure and idempotent; safe to call on every layout pass.
///
/// # Example
///
/// ```
/// use tabstrip::layout::{resolve_layout_mode, Axis, LayoutEnvironment, LayoutRequest};
/// use tabstrip_render::Size;
///
/// // Five items at 125 each need 625 units
/// let wide = LayoutRequest::new(LayoutEnvironment::portrait(Size::new(700.0, 800.0)), 5);
/// assert_eq!(resolve_layout_mode(&wide).axis, Axis::Horizontal);
///
/// let narrow = LayoutRequest::new(LayoutEnvironment::portrait(Size::new(600.0, 800.0)), 5);
/// assert_eq!(resolve_layout_mode(&narrow).axis, Axis::Vertical);
/// ```
pub fn resolve_layout_mode(request: &LayoutRequest) -> LayoutMode {
    if !request.adaptive {
        return LayoutMode::STACKED;
    }

    let env = &request.environment;
    let viewport = env.viewport;

    let height_constrained = is_height_constrained(env, request.device_class);

    let horizontal = if viewport.width == 0.0 {
        request.device_class.is_tablet()
    } else if height_constrained {
        env.is_landscape
    } else {
        let item_width = max_item_width(request.width_constraint, viewport.width);
        request.item_count as f32 * item_width <= viewport.width
    };

    let axis = if horizontal {
        Axis::Horizontal
    } else {
        Axis::Vertical
    };
    let density = if horizontal && height_constrained {
        Density::Compact
    } else {
        Density::Regular
    };

    tracing::trace!(
        width = viewport.width,
        height = viewport.height,
        landscape = env.is_landscape,
        items = request.item_count,
        ?axis,
        ?density,
        "resolved tab bar layout"
    );

    LayoutMode::new(axis, density)
}
