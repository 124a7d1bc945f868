//! Error types for editing operations.
//!
//! Only two things can go wrong while editing: a filter rejects a character,
//! or the clipboard fails during paste. Both are recoverable and leave the
//! buffer untouched. Structural no-ops (navigating an empty list, removing
//! from nothing) are not errors and report through `bool`/`Option` returns.

use thiserror::Error;

use crate::clipboard::ClipboardError;
use crate::event::{BufferId, Event};

/// Failure of a text editing operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// A character was refused by the buffer's filter.
    #[error("character {rejected:?} is not accepted by this input")]
    InvalidInput {
        /// The first offending character.
        rejected: char,
    },

    /// The clipboard could not supply text.
    #[error("paste failed: {0}")]
    ClipboardUnavailable(#[from] ClipboardError),
}

impl EditError {
    /// The event a key handler emits for this failure.
    pub const fn event(&self, buffer: BufferId) -> Event {
        match self {
            Self::InvalidInput { .. } => Event::InvalidInputAttempt(buffer),
            Self::ClipboardUnavailable(_) => Event::ClipboardError(buffer),
        }
    }
}

/// Result alias for editing operations.
pub type Result<T> = std::result::Result<T, EditError>;
