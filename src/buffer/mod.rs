//! Buffer module: the render surface widgets draw into.
//!
//! - [`Cell`]: one styled character
//! - [`Buffer`]: a grid of cells
//! - [`Rgb`], [`Modifiers`], [`Style`]: colors and text attributes

mod cell;
#[allow(clippy::module_inception)]
mod buffer;

pub use buffer::Buffer;
pub use cell::{Cell, CellFlags, Modifiers, Rgb, Style};
