//! Events emitted by editable components.
//!
//! Every input is handled synchronously: a component mutates its state and
//! pushes zero or more [`Event`]s into the [`Context`] it was handed. The
//! host drains them after the call returns.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::clipboard::{ClipboardProvider, NoClipboard};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

fn next_id() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Identity of a [`LineBuffer`](crate::text::LineBuffer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BufferId(u64);

impl BufferId {
    /// Allocate a fresh id.
    pub fn next() -> Self {
        Self(next_id())
    }
}

/// Identity of a collection (list, outline or search list).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CollectionId(u64);

impl CollectionId {
    /// Allocate a fresh id.
    pub fn next() -> Self {
        Self(next_id())
    }
}

/// Observable side effect of handling an input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The buffer's content changed.
    TextChanged(BufferId),
    /// A character was refused by the buffer's filter. Nothing was inserted.
    InvalidInputAttempt(BufferId),
    /// Pasting from the clipboard failed. Nothing was inserted.
    ClipboardError(BufferId),
    /// The confirm key was pressed on a highlighted item while not editing.
    ItemSelected {
        /// Collection that raised the selection.
        collection: CollectionId,
        /// Text of the selected item.
        value: String,
    },
}

/// Per-event handling context.
///
/// Carries the clipboard collaborator in and the emitted events out.
pub struct Context<'a> {
    clipboard: &'a dyn ClipboardProvider,
    events: Vec<Event>,
}

impl<'a> Context<'a> {
    /// Create a context backed by `clipboard`.
    pub fn new(clipboard: &'a dyn ClipboardProvider) -> Self {
        Self {
            clipboard,
            events: Vec::new(),
        }
    }

    /// The clipboard collaborator.
    pub fn clipboard(&self) -> &'a dyn ClipboardProvider {
        self.clipboard
    }

    /// Record an event.
    pub fn emit(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Events recorded so far.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Take the recorded events, leaving the context empty.
    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }
}

impl Context<'static> {
    /// A context without clipboard access.
    pub fn detached() -> Self {
        Self::new(&NoClipboard)
    }
}

impl std::fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("clipboard", &self.clipboard.name())
            .field("events", &self.events)
            .finish()
    }
}
