//! # Flyedit
//!
//! Editable text components for terminal interfaces.
//!
//! Flyedit provides the editing models behind single-line inputs, editable
//! lists, outlines and multi-line text areas, plus thin widgets that draw
//! them into a cell buffer.
//!
//! ## Core Concepts
//!
//! - **Line buffers**: text, cursor, character filter and masking in one type
//! - **Viewports**: a horizontal window that scrolls minimally to keep the cursor visible
//! - **Collections**: lists and trees of buffers with a highlight and an edit mode
//! - **Synchronous events**: every input is handled to completion; side effects
//!   are returned as [`Event`]s through a [`Context`]
//!
//! ## Example
//!
//! ```rust
//! use flyedit::{Context, Event, InputEvent, NavigableCollection};
//!
//! let mut list = NavigableCollection::new();
//! let mut cx = Context::detached();
//!
//! list.insert_at_end();
//! for c in "hi".chars() {
//!     list.handle_input(&InputEvent::char(c), &mut cx);
//! }
//! list.exit_edit();
//!
//! assert_eq!(list.values(), vec!["hi"]);
//! assert!(matches!(cx.events()[0], Event::TextChanged(_)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod actor;
pub mod buffer;
pub mod clipboard;
pub mod collection;
pub mod error;
pub mod event;
pub mod keymap;
pub mod layout;
pub mod text;
pub mod widget;

// Re-exports for convenience
pub use actor::{InputActor, InputEvent, KeyCode, KeyModifiers};
pub use buffer::{Buffer, Cell, Modifiers, Rgb, Style};
pub use clipboard::{ClipboardError, ClipboardProvider, MemoryClipboard, NoClipboard};
pub use collection::{CollectionState, NavigableCollection, NestedCollection, NodeId, SearchList, Step, TextArea};
pub use error::EditError;
pub use event::{BufferId, CollectionId, Context, Event};
pub use keymap::{Action, KeyBindings, KeyPress};
pub use layout::Rect;
pub use text::{CharFilter, Direction, FilterMode, LineBuffer, LineBufferConfig, Viewport};
pub use widget::{ListEdit, SearchListEdit, TextEditor, TextInput, TreeEdit, Widget};
