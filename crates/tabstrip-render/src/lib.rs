//! Value types for the Tabstrip tab bar engine.
//!
//! This crate holds the small, copyable types that cross the boundary between
//! the engine and a host renderer:
//!
//! - [`Size`]: viewport and screen measurements
//! - [`Color`]: straight-alpha RGBA with channel-wise interpolation
//!
//! # Example
//!
//! ```
//! use tabstrip_render::Color;
//!
//! let active = Color::from_hex("#3478f6").unwrap();
//! let inactive = Color::from_hex("#929292").unwrap();
//!
//! // Halfway through a transition
//! let tint = active.lerp(inactive, 0.5);
//! assert_eq!(tint.a, 1.0);
//! ```

mod types;

pub use types::{Color, Size};
