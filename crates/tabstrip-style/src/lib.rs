//! Style input for the Tabstrip tab bar engine.
//!
//! This crate turns CSS-like style input into typed values:
//!
//! - **Lengths**: pixel, percentage and `auto` values ([`types::LengthValue`])
//! - **Tab styles**: per-item sizing ([`types::TabStyle`]) and the width
//!   constraint the layout resolver consumes ([`types::ItemWidthConstraint`])
//! - **Parsing**: declaration blocks and color values via `cssparser`
//!
//! # Example
//!
//! ```
//! use tabstrip_style::prelude::*;
//!
//! let style: TabStyle = "width: 50%".parse().unwrap();
//! let constraint = style.width_constraint().unwrap();
//!
//! // Half of a 320-wide bar
//! assert_eq!(constraint.resolve(320.0), Some(160.0));
//! ```

pub mod parser;
pub mod types;

mod error;

pub use error::{Error, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::parser::{parse_color, parse_length, parse_tab_style};
    pub use crate::types::{ItemWidthConstraint, LengthValue, TabStyle};
}
