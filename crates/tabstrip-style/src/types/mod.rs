//! Style value types.

mod tab_style;
mod value;

pub use tab_style::{ItemWidthConstraint, TabStyle};
pub use value::LengthValue;
