//! Viewport: the visible window over a line buffer.
//!
//! The window is the half-open range `[start, end)` of character indices.
//! It is derived state: a buffer recomputes it from its cursor, its length
//! and the display width after every edit and every resize.

use std::ops::Range;

/// Half-open window over a buffer's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    start: usize,
    end: usize,
}

impl Viewport {
    /// Create a window. `end` is raised to `start` if it lies before it.
    pub const fn new(start: usize, end: usize) -> Self {
        let end = if end < start { start } else { end };
        Self { start, end }
    }

    /// A window that shows `len` characters plus the end-of-line cursor slot.
    pub const fn unbounded(len: usize) -> Self {
        Self::new(0, len + 1)
    }

    /// First visible index.
    #[inline]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// One past the last visible index.
    #[inline]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Number of columns the window spans.
    #[inline]
    pub const fn width(&self) -> usize {
        self.end - self.start
    }

    /// Check if `index` lies inside the window.
    #[inline]
    pub const fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end
    }

    /// Scroll by the minimum amount that brings `cursor` inside the window.
    ///
    /// Leaves the window alone when the cursor is already visible.
    pub fn follow(&mut self, cursor: usize, width: usize) {
        let width = width.max(1);
        if cursor < self.start {
            self.start = cursor;
            self.end = self.start + width;
        } else if cursor >= self.end {
            self.start = (cursor + 1).saturating_sub(width);
            self.end = self.start + width;
        }
    }

    /// Apply a new display width, then keep the cursor visible.
    ///
    /// `start` is pulled back so the window never begins further right than
    /// `len - width`, so widening reveals text rather than blank columns.
    pub fn resize(&mut self, len: usize, cursor: usize, width: usize) {
        let width = width.max(1);
        self.start = self.start.min(len.saturating_sub(width));
        self.end = self.start + width;
        self.follow(cursor, width);
    }

    /// The visible index range, clipped to `len`.
    pub fn range(&self, len: usize) -> Range<usize> {
        let start = self.start.min(len);
        start..self.end.min(len)
    }
}
