//! Plan renderers.
//!
//! Both renderers consume the same [`crate::layout::RoomLayout`] walk and a
//! [`crate::scale::ScaleContext`], so a given document always produces
//! geometrically consistent ASCII and SVG output.

pub mod ascii;
pub mod svg;

pub use ascii::AsciiArt;
pub use svg::{SvgOptions, SvgView};
