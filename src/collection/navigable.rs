//! Navigable collection: an editable list of line buffers.
//!
//! The collection is a small state machine over `(editing, highlighted)`:
//!
//! ```text
//!            insert_*                 enter_edit
//!   Empty ─────────────▶ Editing ◀─────────────── Idle
//!     ▲                     │  exit_edit (cancel)   ▲ │
//!     │                     └───────────────────────┘ │ navigate / remove
//!     └───────── remove_current (last item) ──────────┘
//! ```
//!
//! Outside of edit mode the collection interprets keys through its
//! [`KeyBindings`]; in edit mode every key except cancel goes verbatim to
//! the highlighted buffer.

use tracing::trace;

use crate::actor::InputEvent;
use crate::event::{CollectionId, Context, Event};
use crate::keymap::{Action, KeyBindings};
use crate::text::LineBuffer;

/// One navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Towards index 0.
    Previous,
    /// Towards the last index.
    Next,
}

/// Observable state of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionState {
    /// No items, nothing highlighted.
    Empty,
    /// An item is highlighted; keys drive navigation.
    Idle(usize),
    /// The highlighted item owns keystrokes.
    Editing(usize),
}

/// An ordered, editable sequence of [`LineBuffer`]s with a highlight.
#[derive(Debug, Clone)]
pub struct NavigableCollection {
    id: CollectionId,
    items: Vec<LineBuffer>,
    /// `None` only when `items` is empty.
    highlighted: Option<usize>,
    editing: bool,
    /// Cyclic navigation instead of clamping at the ends.
    wrap: bool,
    /// Display width handed to every item.
    item_width: Option<usize>,
    bindings: KeyBindings,
}

impl NavigableCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self {
            id: CollectionId::next(),
            items: Vec::new(),
            highlighted: None,
            editing: false,
            wrap: false,
            item_width: None,
            bindings: KeyBindings::default(),
        }
    }

    /// Create a collection with one item per seed, cursors at the end.
    pub fn from_values<I, S>(seeds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut collection = Self::new();
        collection.items = seeds
            .into_iter()
            .map(|seed| LineBuffer::from_text(seed.as_ref()))
            .collect();
        collection.highlighted = (!collection.items.is_empty()).then_some(0);
        collection
    }

    /// Set the navigation policy.
    #[must_use]
    pub const fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    /// Replace the key bindings.
    #[must_use]
    pub fn with_bindings(mut self, bindings: KeyBindings) -> Self {
        self.bindings = bindings;
        self
    }

    /// Identity used in emitted events.
    pub const fn id(&self) -> CollectionId {
        self.id
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if there are no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Read-only view of the items.
    pub fn items(&self) -> &[LineBuffer] {
        &self.items
    }

    /// Item at `index`.
    pub fn get(&self, index: usize) -> Option<&LineBuffer> {
        self.items.get(index)
    }

    /// Text of every item, in order.
    pub fn values(&self) -> Vec<String> {
        self.items.iter().map(LineBuffer::text).collect()
    }

    /// Index of the highlighted item.
    pub const fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Check if the highlighted item owns keystrokes.
    pub const fn is_editing(&self) -> bool {
        self.editing
    }

    /// Check if navigation wraps around.
    pub const fn wraps(&self) -> bool {
        self.wrap
    }

    /// Change the navigation policy.
    pub const fn set_wrap(&mut self, wrap: bool) {
        self.wrap = wrap;
    }

    /// The key bindings.
    pub const fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Width handed to items, if bounded.
    pub const fn item_width(&self) -> Option<usize> {
        self.item_width
    }

    /// Current state.
    pub const fn state(&self) -> CollectionState {
        match self.highlighted {
            None => CollectionState::Empty,
            Some(index) if self.editing => CollectionState::Editing(index),
            Some(index) => CollectionState::Idle(index),
        }
    }

    /// The highlighted item.
    pub fn current(&self) -> Option<&LineBuffer> {
        self.highlighted.and_then(|index| self.items.get(index))
    }

    /// The highlighted item, mutably.
    pub fn current_mut(&mut self) -> Option<&mut LineBuffer> {
        self.highlighted.and_then(|index| self.items.get_mut(index))
    }

    /// Move the highlight one step. Only legal while idle.
    ///
    /// Wrapping collections cycle; others clamp at the ends.
    pub fn navigate(&mut self, step: Step) -> bool {
        let Some(current) = self.highlighted else {
            return false;
        };
        if self.editing {
            return false;
        }
        let len = self.items.len();
        let target = match (step, self.wrap) {
            (Step::Next, true) => (current + 1) % len,
            (Step::Next, false) => (current + 1).min(len - 1),
            (Step::Previous, true) => (current + len - 1) % len,
            (Step::Previous, false) => current.saturating_sub(1),
        };
        self.select(target)
    }

    /// Highlight the first item. Only legal while idle.
    pub fn move_to_top(&mut self) -> bool {
        if self.editing || self.items.is_empty() {
            return false;
        }
        self.select(0)
    }

    /// Highlight the last item. Only legal while idle.
    pub fn move_to_bottom(&mut self) -> bool {
        if self.editing || self.items.is_empty() {
            return false;
        }
        self.select(self.items.len() - 1)
    }

    /// Highlight `index` directly. Focus follows the highlight while editing.
    ///
    /// Returns `true` if the highlight changed.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.items.len() || self.highlighted == Some(index) {
            return false;
        }
        if self.editing {
            self.focus_current(false);
        }
        self.highlighted = Some(index);
        if self.editing {
            self.focus_current(true);
        }
        trace!(collection = ?self.id, index, "highlight moved");
        true
    }

    /// Start editing the highlighted item.
    pub fn enter_edit(&mut self) -> bool {
        if self.editing || self.highlighted.is_none() {
            return false;
        }
        self.editing = true;
        self.focus_current(true);
        trace!(collection = ?self.id, "enter edit");
        true
    }

    /// Stop editing and return to idle.
    pub fn exit_edit(&mut self) -> bool {
        if !self.editing {
            return false;
        }
        self.focus_current(false);
        self.editing = false;
        trace!(collection = ?self.id, "exit edit");
        true
    }

    /// Insert an empty item right after the highlighted one and edit it.
    ///
    /// From the empty state this creates the first item.
    pub fn insert_below(&mut self) -> usize {
        let index = self.highlighted.map_or(0, |current| current + 1);
        self.insert_and_edit(index)
    }

    /// Append an empty item and edit it.
    pub fn insert_at_end(&mut self) -> usize {
        self.insert_and_edit(self.items.len())
    }

    /// Insert an empty item at `index` and edit it.
    ///
    /// Returns `None` when `index` is past the end.
    pub fn insert_at(&mut self, index: usize) -> Option<usize> {
        (index <= self.items.len()).then(|| self.insert_and_edit(index))
    }

    /// Remove the highlighted item.
    ///
    /// The highlight stays at the same index (clamped to the new end) and
    /// the collection returns to idle. Removing the last item leaves it empty.
    pub fn remove_current(&mut self) -> Option<LineBuffer> {
        let index = self.highlighted?;
        let mut removed = self.items.remove(index);
        removed.set_focused(false);
        self.editing = false;
        self.highlighted = if self.items.is_empty() {
            None
        } else {
            Some(index.min(self.items.len() - 1))
        };
        trace!(collection = ?self.id, index, remaining = self.items.len(), "item removed");
        Some(removed)
    }

    /// The selection event for the highlighted item, if idle.
    pub fn confirm(&self) -> Option<Event> {
        if self.editing {
            return None;
        }
        self.current().map(|item| Event::ItemSelected {
            collection: self.id,
            value: item.text(),
        })
    }

    /// Apply a new item width and recompute every item's viewport.
    pub fn on_resize(&mut self, width: usize) {
        self.item_width = Some(width);
        for item in &mut self.items {
            item.on_resize(width);
        }
    }

    /// Handle an input event.
    ///
    /// Returns `true` if the event was consumed.
    pub fn handle_input(&mut self, event: &InputEvent, cx: &mut Context<'_>) -> bool {
        if self.editing {
            if self.bindings.action_for_event(event) == Some(Action::Cancel) {
                return self.exit_edit();
            }
            return match self.current_mut() {
                Some(item) => item.handle_input(event, cx),
                None => false,
            };
        }

        let Some(action) = self.bindings.action_for_event(event) else {
            return false;
        };
        self.apply(action, cx)
    }

    /// Run an idle-mode action.
    pub fn apply(&mut self, action: Action, cx: &mut Context<'_>) -> bool {
        match action {
            Action::Down => {
                self.navigate(Step::Next);
            }
            Action::Up => {
                self.navigate(Step::Previous);
            }
            Action::Top => {
                self.move_to_top();
            }
            Action::Bottom => {
                self.move_to_bottom();
            }
            Action::Edit => {
                self.enter_edit();
            }
            Action::InsertBelow => {
                self.insert_below();
            }
            Action::InsertAtEnd => {
                self.insert_at_end();
            }
            Action::Remove => {
                self.remove_current();
            }
            Action::Confirm => {
                if let Some(event) = self.confirm() {
                    cx.emit(event);
                }
            }
            _ => return false,
        }
        true
    }

    fn insert_and_edit(&mut self, index: usize) -> usize {
        if self.editing {
            self.focus_current(false);
        }
        let mut item = LineBuffer::new();
        if let Some(width) = self.item_width {
            item.on_resize(width);
        }
        self.items.insert(index, item);
        self.highlighted = Some(index);
        self.editing = true;
        self.focus_current(true);
        trace!(collection = ?self.id, index, "item inserted");
        index
    }

    fn focus_current(&mut self, focused: bool) {
        if let Some(item) = self.current_mut() {
            item.set_focused(focused);
        }
    }
}

impl Default for NavigableCollection {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::KeyCode;

    fn press(collection: &mut NavigableCollection, event: InputEvent) -> Vec<Event> {
        let mut cx = Context::detached();
        collection.handle_input(&event, &mut cx);
        cx.take_events()
    }

    #[test]
    fn test_from_values() {
        let list = NavigableCollection::from_values(["one", "two"]);
        assert_eq!(list.values(), vec!["one", "two"]);
        assert_eq!(list.state(), CollectionState::Idle(0));
        assert_eq!(list.items()[1].cursor(), 3);
    }

    #[test]
    fn test_navigate_wraps() {
        let mut list = NavigableCollection::from_values(["a", "b", "c"]).with_wrap(true);
        list.select(2);
        list.navigate(Step::Next);
        assert_eq!(list.highlighted(), Some(0));
        list.navigate(Step::Previous);
        assert_eq!(list.highlighted(), Some(2));
    }

    #[test]
    fn test_navigate_clamps() {
        let mut list = NavigableCollection::from_values(["a", "b", "c"]);
        list.select(2);
        assert!(!list.navigate(Step::Next));
        assert_eq!(list.highlighted(), Some(2));

        list.select(0);
        assert!(!list.navigate(Step::Previous));
        assert_eq!(list.highlighted(), Some(0));
    }

    #[test]
    fn test_navigate_is_illegal_while_editing() {
        let mut list = NavigableCollection::from_values(["a", "b"]);
        list.enter_edit();
        assert!(!list.navigate(Step::Next));
        assert_eq!(list.state(), CollectionState::Editing(0));
    }

    #[test]
    fn test_empty_collection_noops() {
        let mut list = NavigableCollection::new();
        assert!(!list.navigate(Step::Next));
        assert!(!list.enter_edit());
        assert!(!list.move_to_bottom());
        assert!(list.remove_current().is_none());
        assert!(list.confirm().is_none());
        assert_eq!(list.state(), CollectionState::Empty);
    }

    #[test]
    fn test_insert_below_focuses_new_item() {
        let mut list = NavigableCollection::from_values(["a", "b"]);
        assert_eq!(list.insert_below(), 1);
        assert_eq!(list.values(), vec!["a", "", "b"]);
        assert_eq!(list.state(), CollectionState::Editing(1));
        assert!(list.items()[1].is_focused());
        assert!(!list.items()[0].is_focused());
    }

    #[test]
    fn test_insert_from_empty() {
        let mut list = NavigableCollection::new();
        list.insert_below();
        assert_eq!(list.state(), CollectionState::Editing(0));

        let mut list = NavigableCollection::new();
        list.insert_at_end();
        assert_eq!(list.state(), CollectionState::Editing(0));
    }

    #[test]
    fn test_insert_while_editing_moves_focus() {
        let mut list = NavigableCollection::from_values(["a"]);
        list.enter_edit();
        list.insert_at_end();
        assert!(!list.items()[0].is_focused());
        assert!(list.items()[1].is_focused());
        assert_eq!(list.insert_at(5), None);
    }

    #[test]
    fn test_remove_clamps_and_stays_idle() {
        let mut list = NavigableCollection::from_values(["a", "b", "c"]);
        list.select(2);
        list.enter_edit();

        let removed = list.remove_current().unwrap();
        assert_eq!(removed.text(), "c");
        assert_eq!(list.state(), CollectionState::Idle(1));
        assert!(!list.items()[1].is_focused());

        list.select(0);
        list.remove_current();
        assert_eq!(list.state(), CollectionState::Idle(0));
        assert_eq!(list.values(), vec!["b"]);

        list.remove_current();
        assert_eq!(list.state(), CollectionState::Empty);
        assert!(list.remove_current().is_none());
        assert_eq!(list.state(), CollectionState::Empty);
    }

    #[test]
    fn test_resize_reaches_new_items() {
        let mut list = NavigableCollection::from_values(["abcdefgh"]);
        list.on_resize(4);
        assert_eq!(list.items()[0].visible_slice(), "fgh");

        list.insert_at_end();
        assert_eq!(list.current().unwrap().width(), Some(4));
    }

    #[test]
    fn test_keys_in_idle_and_editing() {
        let mut list = NavigableCollection::from_values(["one", "two"]);

        press(&mut list, InputEvent::char('j'));
        assert_eq!(list.highlighted(), Some(1));

        press(&mut list, InputEvent::char('i'));
        assert!(list.is_editing());

        // 'j' is text now
        press(&mut list, InputEvent::char('j'));
        assert_eq!(list.values(), vec!["one", "twoj"]);

        press(&mut list, InputEvent::key(KeyCode::Esc));
        assert!(!list.is_editing());

        let events = press(&mut list, InputEvent::key(KeyCode::Enter));
        assert_eq!(
            events,
            vec![Event::ItemSelected {
                collection: list.id(),
                value: "twoj".into(),
            }]
        );
    }

    #[test]
    fn test_idle_keys_are_never_forwarded() {
        let mut list = NavigableCollection::from_values(["one"]);
        let mut cx = Context::detached();
        assert!(!list.handle_input(&InputEvent::char('x'), &mut cx));
        assert_eq!(list.values(), vec!["one"]);
    }
}
