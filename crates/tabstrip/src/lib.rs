//! Adaptive layout and interpolation engine for bottom tab bars.
//!
//! This crate computes what a bottom tab bar should look like; a host view
//! layer does the painting:
//!
//! - **Layout**: decide from live measurements whether each item's icon and
//!   label sit side by side or stacked, and whether the bar is compact
//! - **Interpolation**: map a fractional position signal from the host's
//!   animation driver to per-item tint and background colors
//! - **Tab bar**: combine both with the options into a per-frame description
//!   of every item, resolving labels and icons through a host delegate
//!
//! Everything is a pure function of its inputs. Viewport, orientation and
//! position are read-only snapshots supplied on each call.
//!
//! # Example
//!
//! ```
//! use tabstrip::prelude::*;
//!
//! let request = LayoutRequest::new(
//!     LayoutEnvironment::landscape(Size::new(812.0, 375.0)),
//!     4,
//! );
//!
//! // A short landscape phone gets a compact, side-by-side bar
//! let mode = resolve_layout_mode(&request);
//! assert_eq!(mode, LayoutMode::new(Axis::Horizontal, Density::Compact));
//! ```

pub mod animation;
pub mod content;
pub mod device;
pub mod layout;
pub mod options;
pub mod prelude;
pub mod scene;
pub mod tab_bar;

mod error;

pub use error::{Error, Result};
pub use tab_bar::BottomTabBar;
