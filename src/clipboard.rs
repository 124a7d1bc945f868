//! Clipboard abstraction.
//!
//! The crate only defines the interface and error types. Hosts plug in a
//! concrete provider backed by whatever system clipboard they have.

use std::borrow::Cow;
use std::cell::RefCell;

use thiserror::Error;

/// Failure reported by a clipboard provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// The provider cannot read at all (no backend installed).
    #[error("clipboard provider does not support reading")]
    ReadingNotSupported,
    /// The provider returned nothing.
    #[error("clipboard provider did not return any contents")]
    Empty,
    /// Backend specific failure.
    #[error("clipboard error: {0}")]
    Platform(String),
}

/// Result alias for clipboard operations.
pub type Result<T> = std::result::Result<T, ClipboardError>;

/// An external source of pasted text.
///
/// Paste is a single synchronous call. Callers never retry.
pub trait ClipboardProvider {
    /// Human readable provider name, used in logs.
    fn name(&self) -> Cow<'_, str>;

    /// Read the current clipboard contents.
    fn get_contents(&self) -> Result<String>;

    /// Replace the clipboard contents.
    fn set_contents(&self, content: &str) -> Result<()>;
}

/// Provider used when no clipboard is available. Every read fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoClipboard;

impl ClipboardProvider for NoClipboard {
    fn name(&self) -> Cow<'_, str> {
        "none".into()
    }

    fn get_contents(&self) -> Result<String> {
        Err(ClipboardError::ReadingNotSupported)
    }

    fn set_contents(&self, _content: &str) -> Result<()> {
        Ok(())
    }
}

/// Process-local clipboard.
///
/// Useful for hosts without a system clipboard and for tests.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: RefCell<Option<String>>,
}

impl MemoryClipboard {
    /// Create a clipboard holding `text`.
    pub fn with_contents(text: impl Into<String>) -> Self {
        Self {
            contents: RefCell::new(Some(text.into())),
        }
    }
}

impl ClipboardProvider for MemoryClipboard {
    fn name(&self) -> Cow<'_, str> {
        "memory".into()
    }

    fn get_contents(&self) -> Result<String> {
        self.contents.borrow().clone().ok_or(ClipboardError::Empty)
    }

    fn set_contents(&self, content: &str) -> Result<()> {
        *self.contents.borrow_mut() = Some(content.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_clipboard_cannot_read() {
        assert_eq!(NoClipboard.get_contents(), Err(ClipboardError::ReadingNotSupported));
    }

    #[test]
    fn test_memory_clipboard() {
        let clipboard = MemoryClipboard::default();
        assert_eq!(clipboard.get_contents(), Err(ClipboardError::Empty));

        clipboard.set_contents("copied").unwrap();
        assert_eq!(clipboard.get_contents().as_deref(), Ok("copied"));
    }
}
