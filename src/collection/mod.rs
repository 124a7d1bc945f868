//! Collections of line buffers.
//!
//! - [`NavigableCollection`]: a flat list with a highlight and edit mode
//! - [`NestedCollection`]: an outline of nodes with expand/collapse
//! - [`TextArea`]: a multi-line document made of list rows
//! - [`SearchList`]: a list filtered by a query box

mod multiline;
mod navigable;
mod nested;
mod search;

pub use multiline::TextArea;
pub use navigable::{CollectionState, NavigableCollection, Step};
pub use nested::{NestedCollection, Node, NodeId};
pub use search::SearchList;
