//! Bottom tab bar.
//!
//! [`BottomTabBar`] combines the layout resolver and the interpolation engine
//! into a per-frame description of the bar that a host view layer paints.
//!
//! # Example
//!
//! ```
//! use tabstrip::prelude::*;
//!
//! struct Labels;
//!
//! impl TabBarDelegate for Labels {
//!     type Node = ();
//!
//!     fn label(&self, scene: &TabScene, _tint: Color) -> LabelSource<()> {
//!         LabelSource::text(scene.route.key.clone())
//!     }
//!
//!     fn render_icon(&self, _scene: &TabScene, _tint: Color) -> Option<()> {
//!         Some(())
//!     }
//! }
//!
//! let bar = BottomTabBar::new(TabBarOptions::default());
//! let state = NavigationState::from_keys(["feed", "search", "inbox"]);
//! let env = LayoutEnvironment::portrait(Size::new(390.0, 844.0));
//!
//! // Halfway from "feed" to "search"
//! let frame = bar.frame(&state, env, 0.5, &Labels);
//! assert_eq!(frame.items.len(), 3);
//! assert_eq!(frame.bar.height, 49.0);
//! ```

use tabstrip_render::Color;

use crate::animation::{colors_at, value_at};
use crate::content::{LabelSource, Navigator, TabBarDelegate, TabPressEvent, TestIds};
use crate::device::{DeviceClass, Platform};
use crate::layout::{resolve_layout_mode, LayoutEnvironment, LayoutMode, LayoutRequest};
use crate::options::TabBarOptions;
use crate::scene::{NavigationState, TabScene};
use crate::Result;

/// Bar height in compact density.
pub const COMPACT_BAR_HEIGHT: f32 = 29.0;

/// Bar height in regular density.
pub const REGULAR_BAR_HEIGHT: f32 = 49.0;

/// Default bar background (iOS 10 tab bar gray).
pub const DEFAULT_BAR_BACKGROUND: Color = Color::new(247.0 / 255.0, 247.0 / 255.0, 247.0 / 255.0, 1.0);

/// Default hairline color along the top edge, `rgba(0, 0, 0, .3)`.
pub const DEFAULT_BAR_BORDER: Color = Color::new(0.0, 0.0, 0.0, 0.3);

/// Main-axis direction of an item's contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlexDirection {
    /// Icon and label side by side.
    Row,
    /// Icon above label.
    Column,
}

/// Main-axis distribution of an item's contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Justify {
    /// Centered along the main axis.
    Center,
    /// Packed towards the bottom of the item.
    FlexEnd,
}

/// Cross-axis alignment of an item's contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrossAlignment {
    /// Centered across the item.
    Center,
    /// Filling the item's cross axis.
    Stretch,
}

/// Container metrics for the bar itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarMetrics {
    /// Bar height, excluding safe-area insets.
    pub height: f32,
    /// Fill behind all items.
    pub background_color: Color,
    /// Hairline along the top edge.
    pub border_top_color: Color,
}

/// Arrangement of an item's icon and label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemMetrics {
    /// Main axis of the item's contents.
    pub direction: FlexDirection,
    /// Distribution along the main axis.
    pub justify: Justify,
    /// Alignment across the main axis.
    pub align: CrossAlignment,
}

impl ItemMetrics {
    /// Metrics for a layout mode on a platform.
    pub fn for_mode(mode: LayoutMode, platform: Platform) -> Self {
        let (direction, justify) = if mode.is_horizontal() {
            (FlexDirection::Row, Justify::Center)
        } else {
            (FlexDirection::Column, Justify::FlexEnd)
        };
        let align = if platform.is_ios() {
            CrossAlignment::Center
        } else {
            CrossAlignment::Stretch
        };
        Self {
            direction,
            justify,
            align,
        }
    }
}

/// Where a text label sits relative to the icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelPlacement {
    /// To the right of the icon.
    Beside,
    /// Under the icon.
    Beneath,
}

impl LabelPlacement {
    /// Font size for the placement.
    pub fn font_size(&self) -> f32 {
        match self {
            LabelPlacement::Beside => 13.0,
            LabelPlacement::Beneath => 10.0,
        }
    }

    /// Space between the icon and the label.
    pub fn margin_left(&self) -> f32 {
        match self {
            LabelPlacement::Beside => 20.0,
            LabelPlacement::Beneath => 0.0,
        }
    }

    /// Space below the label.
    pub fn margin_bottom(&self) -> f32 {
        match self {
            LabelPlacement::Beside => 0.0,
            LabelPlacement::Beneath => 1.5,
        }
    }
}

/// A resolved label.
#[derive(Debug, Clone, PartialEq)]
pub enum LabelContent<N> {
    /// Text for the host to paint.
    Text {
        text: String,
        /// The item's interpolated tint.
        color: Color,
        placement: LabelPlacement,
        /// Whether the text follows the system font scale.
        allow_font_scaling: bool,
    },
    /// A host node from the delegate.
    Node(N),
}

/// A resolved icon.
#[derive(Debug, Clone, PartialEq)]
pub struct IconFrame<N> {
    /// Host node from the delegate.
    pub node: N,
    /// 1 when the icon fills the space above a label, 0 beside one.
    pub flex_grow: f32,
}

/// Everything needed to paint one item for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct TabItemFrame<N> {
    /// The item's destination and focus.
    pub scene: TabScene,
    /// Interpolated item background.
    pub background_color: Color,
    /// Interpolated label and icon tint.
    pub tint_color: Color,
    /// How focused the item is: 1 when shown, 0 when another item is.
    pub focus_progress: f32,
    /// Label, or `None` when suppressed.
    pub label: Option<LabelContent<N>>,
    /// Icon, or `None` when suppressed.
    pub icon: Option<IconFrame<N>>,
    pub test_ids: Option<TestIds>,
    pub metrics: ItemMetrics,
}

impl<N> TabItemFrame<N> {
    /// The test identifier, if the delegate supplied one.
    pub fn test_id(&self) -> Option<&str> {
        self.test_ids.as_ref()?.test_id.as_deref()
    }

    /// The accessibility label, if the delegate supplied one.
    pub fn accessibility_label(&self) -> Option<&str> {
        self.test_ids.as_ref()?.accessibility_label.as_deref()
    }
}

/// One frame of the tab bar.
#[derive(Debug, Clone, PartialEq)]
pub struct TabBarFrame<N> {
    /// Resolved layout mode.
    pub mode: LayoutMode,
    /// Container metrics.
    pub bar: BarMetrics,
    /// One entry per route, in display order.
    pub items: Vec<TabItemFrame<N>>,
}

/// Interpolated per-item values for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ItemColors {
    tint: Color,
    background: Color,
    focus_progress: f32,
}

/// A bottom tab bar.
///
/// Holds only configuration; every method is a pure function of its inputs
/// and may be called as often as the host likes.
#[derive(Debug, Clone, PartialEq)]
pub struct BottomTabBar {
    options: TabBarOptions,
    device_class: DeviceClass,
    platform: Platform,
    bar_background: Color,
    bar_border: Color,
}

impl BottomTabBar {
    /// Create a tab bar with the given options.
    pub fn new(options: TabBarOptions) -> Self {
        Self {
            options,
            device_class: DeviceClass::default(),
            platform: Platform::default(),
            bar_background: DEFAULT_BAR_BACKGROUND,
            bar_border: DEFAULT_BAR_BORDER,
        }
    }

    /// Set the device class used while the viewport is unmeasured.
    pub fn with_device_class(mut self, device_class: DeviceClass) -> Self {
        self.device_class = device_class;
        self
    }

    /// Set the platform.
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Set the bar background color.
    pub fn with_bar_background(mut self, color: Color) -> Self {
        self.bar_background = color;
        self
    }

    /// Set the top border color.
    pub fn with_bar_border(mut self, color: Color) -> Self {
        self.bar_border = color;
        self
    }

    /// The options.
    pub fn options(&self) -> &TabBarOptions {
        &self.options
    }

    /// Replace the options.
    pub fn set_options(&mut self, options: TabBarOptions) {
        self.options = options;
    }

    /// The device class.
    pub fn device_class(&self) -> DeviceClass {
        self.device_class
    }

    /// The platform.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Resolve the layout mode for `item_count` items.
    pub fn layout_mode(&self, environment: LayoutEnvironment, item_count: usize) -> LayoutMode {
        resolve_layout_mode(&LayoutRequest {
            environment,
            adaptive: self.options.adaptive,
            item_count,
            width_constraint: self.options.tab_style.width_constraint(),
            device_class: self.device_class,
        })
    }

    /// Container metrics for a layout mode.
    pub fn bar_metrics(&self, mode: LayoutMode) -> BarMetrics {
        BarMetrics {
            height: if mode.is_compact() {
                COMPACT_BAR_HEIGHT
            } else {
                REGULAR_BAR_HEIGHT
            },
            background_color: self.bar_background,
            border_top_color: self.bar_border,
        }
    }

    /// Item metrics for a layout mode.
    pub fn item_metrics(&self, mode: LayoutMode) -> ItemMetrics {
        ItemMetrics::for_mode(mode, self.platform)
    }

    /// Label placement for a layout mode.
    pub fn label_placement(&self, mode: LayoutMode) -> LabelPlacement {
        if self.options.show_icon && mode.is_horizontal() {
            LabelPlacement::Beside
        } else {
            LabelPlacement::Beneath
        }
    }

    /// Describe the bar at `position`.
    ///
    /// A state without routes produces a frame without items.
    pub fn frame<D>(
        &self,
        state: &NavigationState,
        environment: LayoutEnvironment,
        position: f32,
        delegate: &D,
    ) -> TabBarFrame<D::Node>
    where
        D: TabBarDelegate + ?Sized,
    {
        let mode = self.layout_mode(environment, state.len());
        let metrics = self.item_metrics(mode);

        let items = match self.item_colors(state.len(), position) {
            Ok(colors) => state
                .scenes()
                .zip(colors)
                .map(|(scene, colors)| self.item_frame(scene, colors, mode, metrics, delegate))
                .collect(),
            Err(e) => {
                tracing::warn!("Rendering tab bar without items: {}", e);
                Vec::new()
            }
        };

        TabBarFrame {
            mode,
            bar: self.bar_metrics(mode),
            items,
        }
    }

    /// Route a press on the item at `index`.
    ///
    /// The delegate decides what happens; by default the navigator jumps to
    /// the item. Returns `false` if `index` does not name an item.
    pub fn press<D, N>(
        &self,
        state: &NavigationState,
        index: usize,
        delegate: &D,
        navigator: &mut N,
    ) -> bool
    where
        D: TabBarDelegate + ?Sized,
        N: Navigator,
    {
        let (Some(previous), Some(scene)) = (state.focused_route(), state.scene(index)) else {
            tracing::warn!("Ignoring press on tab {} of {}", index, state.len());
            return false;
        };

        tracing::trace!(from = state.index(), to = index, "tab pressed");
        delegate.on_press(
            &TabPressEvent {
                previous,
                scene: &scene,
            },
            navigator,
        );
        true
    }

    fn item_colors(&self, item_count: usize, position: f32) -> Result<Vec<ItemColors>> {
        let o = &self.options;
        let tints = colors_at(position, item_count, o.active_tint_color, o.inactive_tint_color)?;
        let backgrounds = colors_at(
            position,
            item_count,
            o.active_background_color,
            o.inactive_background_color,
        )?;

        tints
            .into_iter()
            .zip(backgrounds)
            .enumerate()
            .map(|(index, (tint, background))| -> Result<ItemColors> {
                Ok(ItemColors {
                    tint,
                    background,
                    focus_progress: value_at(position, item_count, index, 1.0, 0.0)?,
                })
            })
            .collect()
    }

    fn item_frame<D>(
        &self,
        scene: TabScene,
        colors: ItemColors,
        mode: LayoutMode,
        metrics: ItemMetrics,
        delegate: &D,
    ) -> TabItemFrame<D::Node>
    where
        D: TabBarDelegate + ?Sized,
    {
        let o = &self.options;

        let label = if o.show_label {
            self.resolve_label(&scene, colors.tint, mode, delegate)
        } else {
            None
        };

        let icon = if o.show_icon {
            let flex_grow = if o.show_label && mode.is_horizontal() {
                0.0
            } else {
                1.0
            };
            delegate
                .render_icon(&scene, colors.tint)
                .map(|node| IconFrame { node, flex_grow })
        } else {
            None
        };

        let test_ids = delegate.test_ids(&scene);

        TabItemFrame {
            scene,
            background_color: colors.background,
            tint_color: colors.tint,
            focus_progress: colors.focus_progress,
            label,
            icon,
            test_ids,
            metrics,
        }
    }

    fn resolve_label<D>(
        &self,
        scene: &TabScene,
        tint: Color,
        mode: LayoutMode,
        delegate: &D,
    ) -> Option<LabelContent<D::Node>>
    where
        D: TabBarDelegate + ?Sized,
    {
        match delegate.label(scene, tint) {
            LabelSource::Text(text) => Some(LabelContent::Text {
                text,
                color: tint,
                placement: self.label_placement(mode),
                allow_font_scaling: self.options.allow_font_scaling,
            }),
            LabelSource::Render(render) => Some(LabelContent::Node(render(scene, tint))),
            LabelSource::Node(node) => Some(LabelContent::Node(node)),
            LabelSource::None => None,
        }
    }
}

impl Default for BottomTabBar {
    fn default() -> Self {
        Self::new(TabBarOptions::default())
    }
}
