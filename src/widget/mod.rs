//! Widgets: screen adapters for the editable models.
//!
//! Each widget owns one model and maps it onto a [`Rect`](crate::Rect):
//!
//! | Widget | Model |
//! |--------|-------|
//! | [`TextInput`] | [`LineBuffer`](crate::LineBuffer) |
//! | [`ListEdit`] | [`NavigableCollection`](crate::NavigableCollection) |
//! | [`TreeEdit`] | [`NestedCollection`](crate::NestedCollection) |
//! | [`TextEditor`] | [`TextArea`](crate::TextArea) |
//! | [`SearchListEdit`] | [`SearchList`](crate::SearchList) |
//!
//! Resizing a widget recomputes its model's viewports; rendering only reads.

mod list_edit;
mod search_list_edit;
mod text_editor;
mod text_input;
mod traits;
mod tree_edit;

pub use list_edit::{ListEdit, ListStyle};
pub use search_list_edit::SearchListEdit;
pub use text_editor::{TextEditor, TextEditorConfig};
pub use text_input::{TextInput, TextInputConfig};
pub use traits::Widget;
pub use tree_edit::{TreeEdit, TreeGlyphs};
