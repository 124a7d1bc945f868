//! Character filters for line buffers.

use std::collections::HashSet;

/// Whether the filter's set lists permitted or forbidden characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    /// Only characters in the set are accepted.
    Allow,
    /// Characters in the set are refused.
    Deny,
}

/// An allow- or deny-list of characters.
///
/// `Deny` with an empty set accepts everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharFilter {
    mode: FilterMode,
    set: HashSet<char>,
}

impl CharFilter {
    /// Accept every character.
    pub fn unrestricted() -> Self {
        Self {
            mode: FilterMode::Deny,
            set: HashSet::new(),
        }
    }

    /// Accept only the given characters.
    pub fn allow(chars: impl IntoIterator<Item = char>) -> Self {
        Self {
            mode: FilterMode::Allow,
            set: chars.into_iter().collect(),
        }
    }

    /// Refuse the given characters.
    pub fn deny(chars: impl IntoIterator<Item = char>) -> Self {
        Self {
            mode: FilterMode::Deny,
            set: chars.into_iter().collect(),
        }
    }

    /// ASCII digits and space.
    pub fn numeric() -> Self {
        Self::allow(('0'..='9').chain(std::iter::once(' ')))
    }

    /// The filter mode.
    pub const fn mode(&self) -> FilterMode {
        self.mode
    }

    /// Check if this filter accepts everything.
    pub fn is_unrestricted(&self) -> bool {
        self.mode == FilterMode::Deny && self.set.is_empty()
    }

    /// Check a single character.
    pub fn permits(&self, c: char) -> bool {
        match self.mode {
            FilterMode::Allow => self.set.contains(&c),
            FilterMode::Deny => !self.set.contains(&c),
        }
    }

    /// The first character of `text` this filter refuses, if any.
    pub fn first_rejected(&self, text: &str) -> Option<char> {
        text.chars().find(|&c| !self.permits(c))
    }
}

impl Default for CharFilter {
    fn default() -> Self {
        Self::unrestricted()
    }
}
