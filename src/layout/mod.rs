//! Layout primitives.
//!
//! Widgets receive a [`Rect`] from the host and derive everything else
//! (text width, visible row count) from it.

mod rect;

pub use rect::Rect;
