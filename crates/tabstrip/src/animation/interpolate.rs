//! Position-driven interpolation of per-item properties.
//!
//! The host's animation driver supplies a fractional position: `2.0` while
//! item 2 is shown, `1.5` halfway between items 1 and 2. Each item samples
//! its own keyframes at that position, built from control points
//! `[-1, 0, 1, .., N-1]` where the item's own index carries the active value
//! and every other point the inactive value.
//!
//! The leading `-1` point guarantees at least two control points for a
//! single-item bar and gives transient overshoot below `0` a defined value.
//! Positions outside `[-1, N-1]` are clamped.

use tabstrip_render::Color;

use crate::{Error, Result};

/// Values that can be blended linearly.
pub trait Interpolate: Copy {
    /// Blend from `self` towards `other` by `t` in `[0, 1]`.
    fn interpolate(self, other: Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    #[inline]
    fn interpolate(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Interpolate for Color {
    /// Channel-wise blend of the straight-alpha channels.
    #[inline]
    fn interpolate(self, other: Self, t: f32) -> Self {
        self.lerp(other, t)
    }
}

/// A control point: a position in the interpolation domain and its value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe<T> {
    /// Item index, or `-1` for the leading pad.
    pub position: f32,
    /// Value at this position.
    pub value: T,
}

/// An ordered sequence of control points, sampled by position.
///
/// Always holds at least two keyframes.
#[derive(Debug, Clone, PartialEq)]
pub struct Keyframes<T> {
    frames: Vec<Keyframe<T>>,
}

/// Keyframes over colors, one table per item and property.
pub type ColorStops = Keyframes<Color>;

impl<T: Interpolate> Keyframes<T> {
    /// Build the control points for the item at `target` in a bar of
    /// `item_count` items.
    ///
    /// A `target` outside the bar never becomes active, so every point holds
    /// `inactive`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoItems`] when `item_count` is zero.
    pub fn for_item(item_count: usize, target: usize, active: T, inactive: T) -> Result<Self> {
        if item_count == 0 {
            return Err(Error::NoItems);
        }

        let frames = std::iter::once(None)
            .chain((0..item_count).map(Some))
            .map(|index| Keyframe {
                position: index.map_or(-1.0, |i| i as f32),
                value: if index == Some(target) { active } else { inactive },
            })
            .collect();

        Ok(Self { frames })
    }

    /// The control points, in ascending position order.
    pub fn frames(&self) -> &[Keyframe<T>] {
        &self.frames
    }

    /// The domain covered by the control points.
    pub fn domain(&self) -> (f32, f32) {
        (self.first().position, self.last().position)
    }

    /// Sample the keyframes at `position`.
    ///
    /// A position on a control point returns that point's value exactly.
    /// Positions outside the domain clamp to the nearest end; NaN resolves to
    /// the lower end.
    pub fn sample(&self, position: f32) -> T {
        let first = self.first();
        let last = self.last();

        if position.is_nan() || position <= first.position {
            return first.value;
        }
        if position >= last.position {
            return last.value;
        }

        // first.position < position < last.position, so 1 <= hi < len
        let hi = self.frames.partition_point(|k| k.position <= position);
        let lo = &self.frames[hi - 1];
        let hi = &self.frames[hi];

        let span = hi.position - lo.position;
        if position == lo.position || span <= 0.0 {
            return lo.value;
        }
        lo.value.interpolate(hi.value, (position - lo.position) / span)
    }

    fn first(&self) -> &Keyframe<T> {
        &self.frames[0]
    }

    fn last(&self) -> &Keyframe<T> {
        &self.frames[self.frames.len() - 1]
    }
}

/// The value of one item's property at `position`.
pub fn value_at<T: Interpolate>(
    position: f32,
    item_count: usize,
    target: usize,
    active: T,
    inactive: T,
) -> Result<T> {
    Keyframes::for_item(item_count, target, active, inactive).map(|k| k.sample(position))
}

/// The color of the item at `target` at `position`.
pub fn color_at(
    position: f32,
    item_count: usize,
    target: usize,
    active: Color,
    inactive: Color,
) -> Result<Color> {
    value_at(position, item_count, target, active, inactive)
}

/// The color of every item at `position`, indexed by item.
///
/// # Example
///
/// ```
/// use tabstrip::animation::colors_at;
/// use tabstrip_render::Color;
///
/// let active = Color::from_hex("#111").unwrap();
/// let inactive = Color::from_hex("#eee").unwrap();
///
/// let colors = colors_at(2.0, 5, active, inactive).unwrap();
/// assert_eq!(colors[2], active);
/// assert_eq!(colors[0], inactive);
/// ```
///
/// # Errors
///
/// Returns [`Error::NoItems`] when `item_count` is zero.
pub fn colors_at(position: f32, item_count: usize, active: Color, inactive: Color) -> Result<Vec<Color>> {
    if item_count == 0 {
        return Err(Error::NoItems);
    }
    (0..item_count)
        .map(|target| color_at(position, item_count, target, active, inactive))
        .collect()
}
