//! Animation support for the tab bar.
//!
//! The engine does not drive animations itself. A host animation driver
//! produces a fractional position each frame, and this module maps that
//! position to per-item values.
//!
//! # Example
//!
//! ```
//! use tabstrip::animation::ColorStops;
//! use tabstrip_render::Color;
//!
//! // Tint table for item 1 of a three-item bar
//! let stops = ColorStops::for_item(3, 1, Color::BLUE, Color::GRAY).unwrap();
//!
//! assert_eq!(stops.sample(1.0), Color::BLUE);
//! assert_eq!(stops.sample(2.0), Color::GRAY);
//! ```

mod interpolate;

pub use interpolate::{
    color_at, colors_at, value_at, ColorStops, Interpolate, Keyframe, Keyframes,
};
