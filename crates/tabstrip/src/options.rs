//! Tab bar options and their TOML representation.
//!
//! # Example
//!
//! ```
//! use tabstrip::options::TabBarOptions;
//!
//! let options = TabBarOptions::from_toml(r##"
//! active_tint_color = "#e91e63"
//! show_label = false
//! tab_style = "max-width: 100px"
//! "##).unwrap();
//!
//! assert!(!options.show_label);
//! assert!(options.show_icon);
//! ```

use serde::Deserialize;
use tabstrip_render::Color;
use tabstrip_style::parser::{parse_color, parse_tab_style};
use tabstrip_style::types::TabStyle;

use crate::device::Platform;
use crate::{Error, Result};

/// Default active tint (iOS 10 system blue).
pub const DEFAULT_ACTIVE_TINT: Color = Color::new(52.0 / 255.0, 120.0 / 255.0, 246.0 / 255.0, 1.0);

/// Default inactive tint (iOS 10 system gray).
pub const DEFAULT_INACTIVE_TINT: Color = Color::new(146.0 / 255.0, 146.0 / 255.0, 146.0 / 255.0, 1.0);

/// Appearance and behavior options for a bottom tab bar.
#[derive(Debug, Clone, PartialEq)]
pub struct TabBarOptions {
    /// Label and icon tint of the focused item.
    pub active_tint_color: Color,
    /// Label and icon tint of unfocused items.
    pub inactive_tint_color: Color,
    /// Background of the focused item.
    pub active_background_color: Color,
    /// Background of unfocused items.
    pub inactive_background_color: Color,
    /// Whether labels are rendered.
    pub show_label: bool,
    /// Whether icons are rendered.
    pub show_icon: bool,
    /// Whether label text follows the system font scale.
    pub allow_font_scaling: bool,
    /// Whether the item axis adapts to the available space.
    pub adaptive: bool,
    /// Per-item style overrides.
    pub tab_style: TabStyle,
}

impl Default for TabBarOptions {
    fn default() -> Self {
        Self {
            active_tint_color: DEFAULT_ACTIVE_TINT,
            inactive_tint_color: DEFAULT_INACTIVE_TINT,
            active_background_color: Color::TRANSPARENT,
            inactive_background_color: Color::TRANSPARENT,
            show_label: true,
            show_icon: true,
            allow_font_scaling: true,
            adaptive: true,
            tab_style: TabStyle::default(),
        }
    }
}

impl TabBarOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults for a specific platform.
    ///
    /// Adaptive layout is only on by default where the platform supports it.
    pub fn for_platform(platform: Platform) -> Self {
        Self {
            adaptive: platform.adaptive_by_default(),
            ..Self::default()
        }
    }

    /// Set the active and inactive tint colors.
    pub fn with_tint_colors(mut self, active: Color, inactive: Color) -> Self {
        self.active_tint_color = active;
        self.inactive_tint_color = inactive;
        self
    }

    /// Set the active and inactive background colors.
    pub fn with_background_colors(mut self, active: Color, inactive: Color) -> Self {
        self.active_background_color = active;
        self.inactive_background_color = inactive;
        self
    }

    /// Set whether labels are shown.
    pub fn with_show_label(mut self, show: bool) -> Self {
        self.show_label = show;
        self
    }

    /// Set whether icons are shown.
    pub fn with_show_icon(mut self, show: bool) -> Self {
        self.show_icon = show;
        self
    }

    /// Set whether the layout is adaptive.
    pub fn with_adaptive(mut self, adaptive: bool) -> Self {
        self.adaptive = adaptive;
        self
    }

    /// Set the per-item style.
    pub fn with_tab_style(mut self, tab_style: TabStyle) -> Self {
        self.tab_style = tab_style;
        self
    }

    /// Set the per-item style from a declaration block such as
    /// `"max-width: 25%"`.
    pub fn with_tab_style_css(self, css: &str) -> Result<Self> {
        Ok(self.with_tab_style(parse_tab_style(css)?))
    }

    /// Load options from TOML, starting from [`TabBarOptions::default`].
    ///
    /// Colors are CSS color strings and `tab_style` is a declaration block.
    /// A tab style that fails to parse is logged and ignored; a bad color is
    /// an error.
    pub fn from_toml(source: &str) -> Result<Self> {
        Self::default().merge_toml(source)
    }

    /// Overlay the fields present in `source` onto these options.
    pub fn merge_toml(self, source: &str) -> Result<Self> {
        let raw: RawOptions = toml::from_str(source)?;
        tracing::debug!("Loaded tab bar options: {:?}", raw);
        raw.apply(self)
    }
}

/// Options as written in TOML; every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawOptions {
    active_tint_color: Option<String>,
    inactive_tint_color: Option<String>,
    active_background_color: Option<String>,
    inactive_background_color: Option<String>,
    show_label: Option<bool>,
    show_icon: Option<bool>,
    allow_font_scaling: Option<bool>,
    adaptive: Option<bool>,
    tab_style: Option<String>,
}

impl RawOptions {
    fn apply(self, base: TabBarOptions) -> Result<TabBarOptions> {
        Ok(TabBarOptions {
            active_tint_color: color_field("active_tint_color", self.active_tint_color, base.active_tint_color)?,
            inactive_tint_color: color_field("inactive_tint_color", self.inactive_tint_color, base.inactive_tint_color)?,
            active_background_color: color_field(
                "active_background_color",
                self.active_background_color,
                base.active_background_color,
            )?,
            inactive_background_color: color_field(
                "inactive_background_color",
                self.inactive_background_color,
                base.inactive_background_color,
            )?,
            show_label: self.show_label.unwrap_or(base.show_label),
            show_icon: self.show_icon.unwrap_or(base.show_icon),
            allow_font_scaling: self.allow_font_scaling.unwrap_or(base.allow_font_scaling),
            adaptive: self.adaptive.unwrap_or(base.adaptive),
            tab_style: match self.tab_style {
                Some(css) => parse_tab_style(&css).unwrap_or_else(|e| {
                    tracing::warn!("Ignoring invalid tab_style '{}': {}", css, e);
                    base.tab_style
                }),
                None => base.tab_style,
            },
        })
    }
}

fn color_field(field: &str, value: Option<String>, fallback: Color) -> Result<Color> {
    match value {
        Some(value) => parse_color(&value).map_err(|_| Error::invalid_color(field, value)),
        None => Ok(fallback),
    }
}
