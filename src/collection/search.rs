//! Searchable list: a navigable collection behind a query box.
//!
//! Items whose text contains the query (case-insensitively) are visible.
//! Navigation, editing and selection only ever touch visible items. While
//! search mode is active every key goes to the query box instead.

use tracing::trace;

use super::navigable::{NavigableCollection, Step};
use crate::actor::InputEvent;
use crate::event::{CollectionId, Context, Event};
use crate::keymap::{Action, KeyBindings};
use crate::text::LineBuffer;

/// A [`NavigableCollection`] filtered by a query.
#[derive(Debug, Clone)]
pub struct SearchList {
    list: NavigableCollection,
    query: LineBuffer,
    searching: bool,
    /// Indices of the items that match the query, ascending.
    matches: Vec<usize>,
}

impl SearchList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::from_values(std::iter::empty::<&str>())
    }

    /// Create a list with one item per seed.
    pub fn from_values<I, S>(seeds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut search = Self {
            list: NavigableCollection::from_values(seeds),
            query: LineBuffer::new(),
            searching: false,
            matches: Vec::new(),
        };
        search.refilter();
        search
    }

    /// Replace the key bindings.
    #[must_use]
    pub fn with_bindings(mut self, bindings: KeyBindings) -> Self {
        self.list = self.list.with_bindings(bindings);
        self
    }

    /// Identity used in emitted events.
    pub const fn id(&self) -> CollectionId {
        self.list.id()
    }

    /// The underlying list, unfiltered.
    pub const fn list(&self) -> &NavigableCollection {
        &self.list
    }

    /// The query box.
    pub const fn query(&self) -> &LineBuffer {
        &self.query
    }

    /// Check if keys currently go to the query box.
    pub const fn is_searching(&self) -> bool {
        self.searching
    }

    /// Check if the highlighted item is being edited.
    pub const fn is_editing(&self) -> bool {
        self.list.is_editing()
    }

    /// Indices of the visible items.
    pub fn visible(&self) -> &[usize] {
        &self.matches
    }

    /// Texts of the visible items.
    pub fn visible_values(&self) -> Vec<String> {
        self.matches
            .iter()
            .filter_map(|&index| self.list.get(index))
            .map(LineBuffer::text)
            .collect()
    }

    /// Index of the highlighted item. `None` when nothing matches.
    pub fn highlighted(&self) -> Option<usize> {
        self.list
            .highlighted()
            .filter(|index| self.matches.contains(index))
    }

    /// The highlighted item.
    pub fn current(&self) -> Option<&LineBuffer> {
        self.highlighted().and_then(|index| self.list.get(index))
    }

    /// Replace the query and refilter.
    pub fn set_query(&mut self, query: &str) {
        self.query.set_text(query);
        self.refilter();
    }

    /// Empty the query so every item is visible.
    pub fn clear_query(&mut self) -> bool {
        let changed = self.query.clear();
        self.refilter();
        changed
    }

    /// Send keys to the query box. Not available while editing an item.
    pub fn enter_search(&mut self) -> bool {
        if self.searching || self.list.is_editing() {
            return false;
        }
        self.searching = true;
        self.query.set_focused(true);
        trace!(collection = ?self.id(), "enter search");
        true
    }

    /// Leave search mode. The query stays applied.
    pub fn exit_search(&mut self) -> bool {
        if !self.searching {
            return false;
        }
        self.searching = false;
        self.query.set_focused(false);
        true
    }

    /// Move the highlight among visible items.
    pub fn navigate(&mut self, step: Step) -> bool {
        if self.searching || self.list.is_editing() {
            return false;
        }
        let Some(here) = self
            .highlighted()
            .and_then(|index| self.matches.iter().position(|&m| m == index))
        else {
            return false;
        };
        let len = self.matches.len();
        let target = match (step, self.list.wraps()) {
            (Step::Next, true) => (here + 1) % len,
            (Step::Next, false) => (here + 1).min(len - 1),
            (Step::Previous, true) => (here + len - 1) % len,
            (Step::Previous, false) => here.saturating_sub(1),
        };
        self.list.select(self.matches[target])
    }

    /// Highlight the first visible item.
    pub fn move_to_top(&mut self) -> bool {
        match self.matches.first() {
            Some(&first) if !self.searching && !self.list.is_editing() => self.list.select(first),
            _ => false,
        }
    }

    /// Highlight the last visible item.
    pub fn move_to_bottom(&mut self) -> bool {
        match self.matches.last() {
            Some(&last) if !self.searching && !self.list.is_editing() => self.list.select(last),
            _ => false,
        }
    }

    /// Start editing the highlighted item.
    pub fn enter_edit(&mut self) -> bool {
        !self.searching && self.highlighted().is_some() && self.list.enter_edit()
    }

    /// Stop editing. The edited item may stop matching and disappear.
    pub fn exit_edit(&mut self) -> bool {
        let exited = self.list.exit_edit();
        if exited {
            self.refilter();
        }
        exited
    }

    /// Clear the query, insert an empty item below the highlight and edit it.
    pub fn insert_below(&mut self) -> usize {
        self.exit_search();
        self.clear_query();
        let index = self.list.insert_below();
        self.refilter();
        index
    }

    /// Clear the query, append an empty item and edit it.
    pub fn insert_at_end(&mut self) -> usize {
        self.exit_search();
        self.clear_query();
        let index = self.list.insert_at_end();
        self.refilter();
        index
    }

    /// Remove the highlighted item if it is visible.
    pub fn remove_current(&mut self) -> Option<LineBuffer> {
        self.highlighted()?;
        let removed = self.list.remove_current();
        self.refilter();
        removed
    }

    /// The selection event for the highlighted item, if idle.
    pub fn confirm(&self) -> Option<Event> {
        self.highlighted().and_then(|_| self.list.confirm())
    }

    /// Apply a new width to the query box and every item.
    pub fn on_resize(&mut self, width: usize) {
        self.query.on_resize(width);
        self.list.on_resize(width);
    }

    /// Handle an input event.
    ///
    /// Returns `true` if the event was consumed.
    pub fn handle_input(&mut self, event: &InputEvent, cx: &mut Context<'_>) -> bool {
        let action = self.list.bindings().action_for_event(event);

        if self.searching {
            return match action {
                Some(Action::Cancel | Action::Confirm) => self.exit_search(),
                Some(Action::ClearSearch) => {
                    self.clear_query();
                    true
                }
                _ => {
                    let consumed = self.query.handle_input(event, cx);
                    self.refilter();
                    consumed
                }
            };
        }

        if self.list.is_editing() {
            let consumed = self.list.handle_input(event, cx);
            if !self.list.is_editing() {
                self.refilter();
            }
            return consumed;
        }

        match action {
            Some(Action::Search) => self.enter_search(),
            Some(Action::ClearSearch) => self.clear_query(),
            Some(Action::Down) => {
                self.navigate(Step::Next);
                true
            }
            Some(Action::Up) => {
                self.navigate(Step::Previous);
                true
            }
            Some(Action::Top) => {
                self.move_to_top();
                true
            }
            Some(Action::Bottom) => {
                self.move_to_bottom();
                true
            }
            Some(Action::Edit) => {
                self.enter_edit();
                true
            }
            Some(Action::InsertBelow) => {
                self.insert_below();
                true
            }
            Some(Action::InsertAtEnd) => {
                self.insert_at_end();
                true
            }
            Some(Action::Remove) => {
                self.remove_current();
                true
            }
            Some(Action::Confirm) => {
                if let Some(event) = self.confirm() {
                    cx.emit(event);
                }
                true
            }
            _ => false,
        }
    }

    /// Recompute the visible items and keep the highlight on one of them.
    fn refilter(&mut self) {
        let query = self.query.text().to_lowercase();
        self.matches = self
            .list
            .items()
            .iter()
            .enumerate()
            .filter(|(_, item)| item.text().to_lowercase().contains(&query))
            .map(|(index, _)| index)
            .collect();

        if self.highlighted().is_none() {
            if let Some(&first) = self.matches.first() {
                self.list.select(first);
            }
        }
        trace!(collection = ?self.id(), visible = self.matches.len(), "refiltered");
    }
}

impl Default for SearchList {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::KeyCode;

    fn fruits() -> SearchList {
        SearchList::from_values(["apple", "banana", "cherry", "grape"])
    }

    #[test]
    fn test_everything_visible_without_query() {
        let search = fruits();
        assert_eq!(search.visible(), &[0, 1, 2, 3]);
        assert_eq!(search.highlighted(), Some(0));
    }

    #[test]
    fn test_query_filters_and_moves_highlight() {
        let mut search = fruits();
        search.set_query("AP");
        assert_eq!(search.visible_values(), vec!["apple", "grape"]);
        assert_eq!(search.highlighted(), Some(0));

        search.navigate(Step::Next);
        assert_eq!(search.highlighted(), Some(3));
        search.navigate(Step::Next);
        assert_eq!(search.highlighted(), Some(3));

        search.set_query("an");
        assert_eq!(search.highlighted(), Some(1));
    }

    #[test]
    fn test_no_match_disables_commands() {
        let mut search = fruits();
        search.set_query("zzz");
        assert_eq!(search.highlighted(), None);
        assert!(!search.enter_edit());
        assert!(search.remove_current().is_none());
        assert!(search.confirm().is_none());
        assert_eq!(search.list().len(), 4);
    }

    #[test]
    fn test_insert_clears_query() {
        let mut search = fruits();
        search.set_query("cherry");
        search.insert_below();
        assert!(search.query().is_empty());
        assert_eq!(search.visible().len(), 5);
        assert!(search.is_editing());
        assert_eq!(search.highlighted(), Some(3));
    }

    #[test]
    fn test_search_mode_keys() {
        let mut search = fruits();
        let mut cx = Context::detached();

        search.handle_input(&InputEvent::ctrl(KeyCode::Char('s')), &mut cx);
        assert!(search.is_searching());
        for c in "rry".chars() {
            search.handle_input(&InputEvent::char(c), &mut cx);
        }
        assert_eq!(search.visible_values(), vec!["cherry"]);

        // navigation keys type into the query while searching
        search.handle_input(&InputEvent::char('j'), &mut cx);
        assert!(search.visible().is_empty());
        search.handle_input(&InputEvent::key(KeyCode::Backspace), &mut cx);

        search.handle_input(&InputEvent::key(KeyCode::Esc), &mut cx);
        assert!(!search.is_searching());
        assert_eq!(search.highlighted(), Some(2));

        cx.take_events();
        search.handle_input(&InputEvent::key(KeyCode::Enter), &mut cx);
        assert_eq!(
            cx.take_events(),
            vec![Event::ItemSelected {
                collection: search.id(),
                value: "cherry".into(),
            }]
        );

        search.handle_input(&InputEvent::ctrl(KeyCode::Char('l')), &mut cx);
        assert_eq!(search.visible().len(), 4);
    }

    #[test]
    fn test_edit_out_of_filter_hides_on_exit() {
        let mut search = fruits();
        let mut cx = Context::detached();
        search.set_query("a");
        assert_eq!(search.visible_values(), vec!["apple", "banana", "grape"]);

        search.handle_input(&InputEvent::char('i'), &mut cx);
        search.handle_input(&InputEvent::ctrl(KeyCode::Char('l')), &mut cx);
        search.handle_input(&InputEvent::char('x'), &mut cx);
        assert!(search.is_editing());
        assert_eq!(search.visible().len(), 3);

        search.handle_input(&InputEvent::key(KeyCode::Esc), &mut cx);
        assert_eq!(search.visible_values(), vec!["banana", "grape"]);
        assert_eq!(search.highlighted(), Some(1));
    }
}
