//! Basic size and color types shared by the tab bar engine.
//!
//! Both types are plain `Pod` values so that a host renderer can copy them
//! straight into its own vertex or uniform buffers.

use std::fmt;

use bytemuck::{Pod, Zeroable};

/// A size in 2D space (width and height).
///
/// A zero dimension is meaningful to the layout resolver: it means the host
/// has not measured that axis yet.
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[repr(C)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Zero size.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Ratio of height to width, or `None` when the width is not positive.
    #[inline]
    pub fn aspect_ratio(&self) -> Option<f32> {
        (self.width > 0.0).then(|| self.height / self.width)
    }
}

/// An RGBA color with straight (non-premultiplied) alpha.
///
/// Interpolation blends each stored channel independently, the way CSS and
/// native animation drivers blend `rgba()` values. A renderer expecting
/// premultiplied input multiplies on upload.
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[repr(C)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Create a new color from RGBA components (0.0-1.0 range).
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from 8-bit RGBA components (0-255 range).
    #[inline]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Create an opaque color from RGB components.
    #[inline]
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create an opaque color from 8-bit RGB components.
    #[inline]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Create a color from a hex string.
    ///
    /// Accepts the CSS short forms (`#RGB`, `#RGBA`) as well as `#RRGGBB` and
    /// `#RRGGBBAA`. The leading `#` is optional.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }

        let digit = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|d| d * 17);
        let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

        match hex.len() {
            3 => Some(Self::from_rgb8(digit(0)?, digit(1)?, digit(2)?)),
            4 => Some(Self::from_rgba8(digit(0)?, digit(1)?, digit(2)?, digit(3)?)),
            6 => Some(Self::from_rgb8(pair(0)?, pair(2)?, pair(4)?)),
            8 => Some(Self::from_rgba8(pair(0)?, pair(2)?, pair(4)?, pair(6)?)),
            _ => None,
        }
    }

    /// Linear interpolation between two colors, channel by channel.
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// Convert to 8-bit RGBA components.
    pub fn to_rgba8(self) -> [u8; 4] {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [channel(self.r), channel(self.g), channel(self.b), channel(self.a)]
    }

    /// Format as `#RRGGBBAA`.
    pub fn to_hex(self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    }

    // Common colors
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Self = Self::from_rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::from_rgb(1.0, 1.0, 1.0);
    pub const RED: Self = Self::from_rgb(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::from_rgb(0.0, 1.0, 0.0);
    pub const BLUE: Self = Self::from_rgb(0.0, 0.0, 1.0);
    pub const GRAY: Self = Self::from_rgb(0.5, 0.5, 0.5);
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_aspect_ratio() {
        assert_eq!(Size::new(100.0, 160.0).aspect_ratio(), Some(1.6));
        assert_eq!(Size::ZERO.aspect_ratio(), None);
    }

    #[test]
    fn test_hex_short_and_long_forms_agree() {
        assert_eq!(Color::from_hex("#111"), Color::from_hex("#111111"));
        assert_eq!(Color::from_hex("#EEE"), Color::from_hex("#eeeeee"));
        assert_eq!(Color::from_hex("#3478f6ff"), Color::from_hex("3478f6"));
    }

    #[test]
    fn test_hex_rejects_garbage() {
        assert_eq!(Color::from_hex("#12"), None);
        assert_eq!(Color::from_hex("#zzzzzz"), None);
        assert_eq!(Color::from_hex("#ééé"), None);
    }

    #[test]
    fn test_hex_alpha_is_straight() {
        let c = Color::from_hex("#ff000080").unwrap();
        assert!((c.a - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.to_rgba8(), [255, 0, 0, 128]);
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = Color::from_hex("#111").unwrap();
        let b = Color::from_hex("#eee").unwrap();
        assert_eq!(a.lerp(b, 0.0), a);

        let mid = a.lerp(b, 0.5);
        assert!((mid.r - (a.r + b.r) / 2.0).abs() < 1e-6);
        assert_eq!(mid.a, 1.0);
    }

    #[test]
    fn test_lerp_towards_transparent_blends_every_channel() {
        let mid = Color::WHITE.lerp(Color::TRANSPARENT, 0.5);
        assert_eq!(mid, Color::new(0.5, 0.5, 0.5, 0.5));
        assert_eq!(mid.to_hex(), "#80808080");

        assert_eq!(Color::RED.lerp(Color::TRANSPARENT, 0.5).to_hex(), "#80000080");
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Color::from_rgb8(0x34, 0x78, 0xf6).to_hex(), "#3478f6ff");
        assert_eq!(Color::TRANSPARENT.to_string(), "#00000000");
    }
}
