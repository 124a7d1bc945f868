//! Key bindings for collection-level commands.
//!
//! While a collection is not editing, a fixed set of keys drives navigation
//! and structural edits. Which physical keys those are is configuration:
//! each collection owns its own [`KeyBindings`].

use crate::actor::{InputEvent, KeyCode, KeyModifiers};

/// A key plus the modifiers that must be held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPress {
    /// The key code.
    pub code: KeyCode,
    /// Required modifiers.
    pub modifiers: KeyModifiers,
}

impl KeyPress {
    /// A key without modifiers.
    pub const fn plain(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    /// A plain character key.
    pub const fn char(c: char) -> Self {
        Self::plain(KeyCode::Char(c))
    }

    /// A key with Control held.
    pub const fn ctrl(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::CONTROL,
        }
    }

    /// Check whether a pressed key matches this binding.
    ///
    /// Shift is ignored for characters since it is already folded into
    /// the character itself (`G` arrives as `Char('G')` plus Shift).
    pub fn matches(&self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        if self.code != code {
            return false;
        }
        let shift_ok = matches!(code, KeyCode::Char(_)) || self.modifiers.shift == modifiers.shift;
        shift_ok
            && self.modifiers.control == modifiers.control
            && self.modifiers.alt == modifiers.alt
            && self.modifiers.super_key == modifiers.super_key
    }
}

/// Commands a collection understands outside of edit mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Highlight the next item.
    Down,
    /// Highlight the previous item.
    Up,
    /// Highlight the first item.
    Top,
    /// Highlight the last item.
    Bottom,
    /// Start editing the highlighted item.
    Edit,
    /// Stop editing.
    Cancel,
    /// Select the highlighted item.
    Confirm,
    /// Insert a new item below the highlighted one (outlines: add a sibling).
    InsertBelow,
    /// Append a new item (outlines: add a child).
    InsertAtEnd,
    /// Remove the highlighted item.
    Remove,
    /// Expand or collapse the highlighted node.
    ToggleExpand,
    /// Move to the parent node and expand or collapse it.
    ToggleExpandParent,
    /// Enter search mode.
    Search,
    /// Clear the search query.
    ClearSearch,
}

/// Mapping from key presses to [`Action`]s.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: Vec<(KeyPress, Action)>,
}

impl KeyBindings {
    /// An empty binding table.
    pub const fn empty() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// Add a binding. Earlier bindings win on conflict.
    #[must_use]
    pub fn bind(mut self, key: KeyPress, action: Action) -> Self {
        self.bindings.push((key, action));
        self
    }

    /// Remove every binding for `action`.
    #[must_use]
    pub fn unbind(mut self, action: Action) -> Self {
        self.bindings.retain(|(_, bound)| *bound != action);
        self
    }

    /// Look up the action for a key press.
    pub fn action_for(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        self.bindings
            .iter()
            .find(|(key, _)| key.matches(code, modifiers))
            .map(|(_, action)| *action)
    }

    /// Look up the action for an input event. Only key events map.
    pub fn action_for_event(&self, event: &InputEvent) -> Option<Action> {
        match event {
            InputEvent::Key { code, modifiers } => self.action_for(*code, *modifiers),
            _ => None,
        }
    }

    /// Keys bound to `action`.
    pub fn keys_for(&self, action: Action) -> impl Iterator<Item = &KeyPress> + '_ {
        self.bindings
            .iter()
            .filter(move |(_, bound)| *bound == action)
            .map(|(key, _)| key)
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::empty()
            .bind(KeyPress::char('j'), Action::Down)
            .bind(KeyPress::plain(KeyCode::Down), Action::Down)
            .bind(KeyPress::char('k'), Action::Up)
            .bind(KeyPress::plain(KeyCode::Up), Action::Up)
            .bind(KeyPress::char('g'), Action::Top)
            .bind(KeyPress::plain(KeyCode::Home), Action::Top)
            .bind(KeyPress::char('G'), Action::Bottom)
            .bind(KeyPress::plain(KeyCode::End), Action::Bottom)
            .bind(KeyPress::char('i'), Action::Edit)
            .bind(KeyPress::plain(KeyCode::Esc), Action::Cancel)
            .bind(KeyPress::plain(KeyCode::Enter), Action::Confirm)
            .bind(KeyPress::char('a'), Action::InsertBelow)
            .bind(KeyPress::char('A'), Action::InsertAtEnd)
            .bind(KeyPress::char('d'), Action::Remove)
            .bind(KeyPress::plain(KeyCode::Delete), Action::Remove)
            .bind(KeyPress::char('z'), Action::ToggleExpand)
            .bind(KeyPress::char('Z'), Action::ToggleExpandParent)
            .bind(KeyPress::ctrl(KeyCode::Char('s')), Action::Search)
            .bind(KeyPress::ctrl(KeyCode::Char('l')), Action::ClearSearch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let keys = KeyBindings::default();
        assert_eq!(keys.action_for(KeyCode::Char('j'), KeyModifiers::NONE), Some(Action::Down));
        assert_eq!(keys.action_for(KeyCode::Up, KeyModifiers::NONE), Some(Action::Up));
        assert_eq!(keys.action_for(KeyCode::Esc, KeyModifiers::NONE), Some(Action::Cancel));
        assert_eq!(keys.action_for(KeyCode::Char('x'), KeyModifiers::NONE), None);
    }

    #[test]
    fn test_shifted_char_matches() {
        let keys = KeyBindings::default();
        assert_eq!(keys.action_for(KeyCode::Char('G'), KeyModifiers::SHIFT), Some(Action::Bottom));
    }

    #[test]
    fn test_control_is_significant() {
        let keys = KeyBindings::default();
        assert_eq!(keys.action_for(KeyCode::Char('s'), KeyModifiers::NONE), None);
        assert_eq!(keys.action_for(KeyCode::Char('s'), KeyModifiers::CONTROL), Some(Action::Search));
        assert_eq!(keys.action_for(KeyCode::Down, KeyModifiers::CONTROL), None);
    }

    #[test]
    fn test_rebind() {
        let keys = KeyBindings::default()
            .unbind(Action::Remove)
            .bind(KeyPress::char('x'), Action::Remove);
        assert_eq!(keys.action_for(KeyCode::Char('d'), KeyModifiers::NONE), None);
        assert_eq!(keys.action_for(KeyCode::Char('x'), KeyModifiers::NONE), Some(Action::Remove));
        assert_eq!(keys.keys_for(Action::Remove).count(), 1);
    }
}
