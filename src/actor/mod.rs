//! Input delivery: terminal events in, one at a time.
//!
//! The input actor polls crossterm on its own thread and forwards converted
//! events over a crossbeam channel. Whoever owns the editable components
//! drains that channel and handles each event to completion before taking
//! the next one, so the components themselves never see concurrency.
//!
//! ```text
//! ┌──────────────┐     InputEvent      ┌──────────────┐   handle_input   ┌────────────┐
//! │ Input Thread │ ─────────────────▶  │  Main Loop   │ ───────────────▶ │ Components │
//! └──────────────┘                     └──────────────┘                  └────────────┘
//! ```

mod messages;
mod input;

pub use messages::{InputEvent, KeyCode, KeyModifiers};
pub use input::{convert_event, InputActor};
