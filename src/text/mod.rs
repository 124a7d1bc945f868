//! Text module: the single-line editing engine.
//!
//! This module contains:
//! - [`LineBuffer`]: editable text with a cursor, filter and masking
//! - [`Viewport`]: the horizontal window that keeps the cursor visible
//! - [`CharFilter`]: allow/deny lists checked on every insertion
//! - [`word`]: word boundary search shared by jumps and deletion

mod filter;
mod line;
mod viewport;
pub mod word;

pub use filter::{CharFilter, FilterMode};
pub use line::{Direction, LineBuffer, LineBufferConfig};
pub use viewport::Viewport;
