//! Declaration and value parsing.

mod declarations;

pub use declarations::{parse_color, parse_length, parse_tab_style};
