//! Line buffer: single-line editable text with a cursor.
//!
//! Content is stored as a `Vec<char>` and every position (cursor, viewport
//! bounds) is a char index, so no operation can land inside a UTF-8
//! sequence. The buffer keeps its [`Viewport`] in step with the cursor after
//! every edit.

use tracing::{debug, warn};

use super::filter::CharFilter;
use super::viewport::Viewport;
use super::word;
use crate::actor::{InputEvent, KeyCode, KeyModifiers};
use crate::clipboard::ClipboardProvider;
use crate::error::{EditError, Result};
use crate::event::{BufferId, Context, Event};

/// Glyphs used when a buffer renders itself to text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineBufferConfig {
    /// Drawn at the cursor position while focused.
    pub cursor_glyph: char,
    /// Drawn in place of every character of a masked buffer.
    pub mask_glyph: char,
}

impl Default for LineBufferConfig {
    fn default() -> Self {
        Self {
            cursor_glyph: '|',
            mask_glyph: '•',
        }
    }
}

/// Cursor movement target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One character (or word) to the left.
    Left,
    /// One character (or word) to the right.
    Right,
    /// Start of the line.
    Home,
    /// End of the line.
    End,
}

/// A single editable line of text plus its cursor.
#[derive(Debug, Clone)]
pub struct LineBuffer {
    id: BufferId,
    /// Current text content.
    content: Vec<char>,
    /// Cursor position, `0..=content.len()`.
    cursor: usize,
    filter: CharFilter,
    /// Render-only: storage is never masked.
    masked: bool,
    focused: bool,
    /// Display width; `None` shows the whole line.
    width: Option<usize>,
    viewport: Viewport,
    config: LineBufferConfig,
}

impl LineBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self {
            id: BufferId::next(),
            content: Vec::new(),
            cursor: 0,
            filter: CharFilter::unrestricted(),
            masked: false,
            focused: false,
            width: None,
            viewport: Viewport::unbounded(0),
            config: LineBufferConfig::default(),
        }
    }

    /// Create a buffer holding `text` with the cursor at the end.
    pub fn from_text(text: &str) -> Self {
        let mut buffer = Self::new();
        buffer.set_text(text);
        buffer
    }

    /// A buffer that accepts only digits and spaces.
    pub fn numeric() -> Self {
        Self::new().with_filter(CharFilter::numeric())
    }

    /// A masked buffer for secrets.
    pub fn password() -> Self {
        let mut buffer = Self::new();
        buffer.masked = true;
        buffer
    }

    /// Set the character filter.
    #[must_use]
    pub fn with_filter(mut self, filter: CharFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Set the rendering glyphs.
    #[must_use]
    pub const fn with_config(mut self, config: LineBufferConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the display width.
    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.on_resize(width);
        self
    }

    /// Identity used in emitted events.
    pub const fn id(&self) -> BufferId {
        self.id
    }

    /// The content as a `String`.
    pub fn text(&self) -> String {
        self.content.iter().collect()
    }

    /// The content as characters.
    pub fn chars(&self) -> &[char] {
        &self.content
    }

    /// Number of characters.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Check if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Cursor position as a character index.
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// The character filter.
    pub const fn filter(&self) -> &CharFilter {
        &self.filter
    }

    /// Replace the character filter. Existing content is kept as is.
    pub fn set_filter(&mut self, filter: CharFilter) {
        self.filter = filter;
    }

    /// Check if rendering masks the content.
    pub const fn is_masked(&self) -> bool {
        self.masked
    }

    /// Turn masking on or off.
    pub const fn set_masked(&mut self, masked: bool) {
        self.masked = masked;
    }

    /// Check if the buffer currently accepts keys.
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    /// Set focus state.
    pub const fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Display width, if bounded.
    pub const fn width(&self) -> Option<usize> {
        self.width
    }

    /// The current visible window.
    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Rendering glyphs.
    pub const fn config(&self) -> &LineBufferConfig {
        &self.config
    }

    /// Replace the content and put the cursor at its end.
    ///
    /// This is programmatic: the filter only guards typed and pasted input.
    pub fn set_text(&mut self, text: &str) {
        self.content = text.chars().collect();
        self.cursor = self.content.len();
        self.refresh_viewport();
    }

    /// Move the cursor to `position`. Out-of-range positions are ignored.
    pub fn set_cursor(&mut self, position: usize) -> bool {
        if position > self.content.len() {
            return false;
        }
        self.cursor = position;
        self.refresh_viewport();
        true
    }

    /// Insert `text` at the cursor.
    ///
    /// The whole text is refused if any character fails the filter; nothing
    /// is inserted in that case.
    pub fn insert(&mut self, text: &str) -> Result<()> {
        if let Some(rejected) = self.filter.first_rejected(text) {
            debug!(buffer = ?self.id, ?rejected, "input refused by filter");
            return Err(EditError::InvalidInput { rejected });
        }

        let before = self.content.len();
        self.content.splice(self.cursor..self.cursor, text.chars());
        self.cursor += self.content.len() - before;
        self.refresh_viewport();
        Ok(())
    }

    /// Delete left of the cursor: one character, or back to the previous word start.
    ///
    /// Returns `true` if anything was removed.
    pub fn delete_backward(&mut self, word: bool) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let from = if word {
            word::previous_boundary(&self.content, self.cursor)
        } else {
            self.cursor - 1
        };
        self.content.drain(from..self.cursor);
        self.cursor = from;
        self.refresh_viewport();
        true
    }

    /// Delete right of the cursor: one character, or up to the next word end.
    ///
    /// Returns `true` if anything was removed.
    pub fn delete_forward(&mut self, word: bool) -> bool {
        if self.cursor >= self.content.len() {
            return false;
        }
        let to = if word {
            word::next_boundary(&self.content, self.cursor)
        } else {
            self.cursor + 1
        };
        self.content.drain(self.cursor..to);
        self.refresh_viewport();
        true
    }

    /// Move the cursor without touching the content.
    ///
    /// Returns `true` if the cursor moved.
    pub fn move_cursor(&mut self, direction: Direction, word: bool) -> bool {
        let target = match direction {
            Direction::Left if word => word::previous_boundary(&self.content, self.cursor),
            Direction::Left => self.cursor.saturating_sub(1),
            Direction::Right if word => word::next_boundary(&self.content, self.cursor),
            Direction::Right => (self.cursor + 1).min(self.content.len()),
            Direction::Home => 0,
            Direction::End => self.content.len(),
        };
        if target == self.cursor {
            return false;
        }
        self.cursor = target;
        self.refresh_viewport();
        true
    }

    /// Insert the clipboard contents at the cursor.
    ///
    /// A clipboard failure leaves the buffer unchanged and is not retried.
    pub fn paste(&mut self, clipboard: &dyn ClipboardProvider) -> Result<()> {
        let text = clipboard.get_contents().map_err(|err| {
            warn!(buffer = ?self.id, provider = %clipboard.name(), %err, "failed to read clipboard");
            EditError::from(err)
        })?;
        self.insert(&text)
    }

    /// Remove all content.
    ///
    /// Returns `true` if there was anything to remove.
    pub fn clear(&mut self) -> bool {
        if self.content.is_empty() {
            return false;
        }
        self.content.clear();
        self.cursor = 0;
        self.refresh_viewport();
        true
    }

    /// Cut everything right of the cursor and return it.
    pub fn split_off_at_cursor(&mut self) -> String {
        let rest: String = self.content.drain(self.cursor..).collect();
        self.refresh_viewport();
        rest
    }

    /// Append `text` at the end without moving the cursor.
    ///
    /// Programmatic, like [`set_text`](Self::set_text).
    pub fn append(&mut self, text: &str) {
        self.content.extend(text.chars());
        self.refresh_viewport();
    }

    /// Apply a new display width and recompute the viewport.
    ///
    /// Never drops characters: only the visible window changes.
    pub fn on_resize(&mut self, width: usize) {
        self.width = Some(width);
        self.viewport.resize(self.content.len(), self.cursor, width);
    }

    /// Drop the width bound; the whole line becomes visible.
    pub fn clear_width(&mut self) {
        self.width = None;
        self.refresh_viewport();
    }

    /// The visible slice for a display `width`.
    ///
    /// Applies `width` first if it differs from the current one.
    pub fn render_slice(&mut self, width: usize) -> String {
        if self.width != Some(width) {
            self.on_resize(width);
        }
        self.visible_slice()
    }

    /// The raw characters inside the viewport.
    pub fn visible_slice(&self) -> String {
        self.content[self.viewport.range(self.content.len())].iter().collect()
    }

    /// The viewport contents as they should be drawn.
    ///
    /// Masked buffers show the mask glyph for every character. Focused
    /// buffers get the cursor glyph inserted at the cursor column.
    pub fn visible_text(&self) -> String {
        let range = self.viewport.range(self.content.len());
        let start = range.start;
        let mut out = String::with_capacity(range.len() + 1);

        for (offset, &c) in self.content[range].iter().enumerate() {
            if self.focused && start + offset == self.cursor {
                out.push(self.config.cursor_glyph);
            }
            out.push(if self.masked { self.config.mask_glyph } else { c });
        }
        if self.focused && self.cursor >= start && self.cursor == self.content.len() {
            out.push(self.config.cursor_glyph);
        }
        out
    }

    /// Cursor column relative to the viewport start.
    pub const fn cursor_column(&self) -> usize {
        self.cursor.saturating_sub(self.viewport.start())
    }

    /// Handle a key or paste event.
    ///
    /// Returns `true` if the event was consumed.
    pub fn handle_input(&mut self, event: &InputEvent, cx: &mut Context<'_>) -> bool {
        match event {
            InputEvent::Key { code, modifiers } => self.handle_key(*code, *modifiers, cx),
            InputEvent::Paste(text) => {
                let result = self.insert(text);
                self.report(result, !text.is_empty(), cx);
                true
            }
            _ => false,
        }
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers, cx: &mut Context<'_>) -> bool {
        let word = modifiers.control || modifiers.alt;
        match code {
            KeyCode::Char('v') if modifiers.control => {
                let before = self.content.len();
                let result = self.paste(cx.clipboard());
                self.report(result, self.content.len() != before, cx);
            }
            KeyCode::Char('w') if modifiers.control => {
                let changed = self.delete_backward(true);
                self.report_change(changed, cx);
            }
            KeyCode::Char('h') if modifiers.control => {
                let changed = self.delete_backward(false);
                self.report_change(changed, cx);
            }
            KeyCode::Char('l') if modifiers.control => {
                let changed = self.clear();
                self.report_change(changed, cx);
            }
            KeyCode::Char(c) if !modifiers.is_command() => {
                let mut utf8 = [0; 4];
                let result = self.insert(c.encode_utf8(&mut utf8));
                self.report(result, true, cx);
            }
            KeyCode::Backspace => {
                let changed = self.delete_backward(word);
                self.report_change(changed, cx);
            }
            KeyCode::Delete => {
                let changed = self.delete_forward(word);
                self.report_change(changed, cx);
            }
            KeyCode::Left => {
                self.move_cursor(Direction::Left, word);
            }
            KeyCode::Right => {
                self.move_cursor(Direction::Right, word);
            }
            KeyCode::Home => {
                self.move_cursor(Direction::Home, false);
            }
            KeyCode::End => {
                self.move_cursor(Direction::End, false);
            }
            _ => return false,
        }
        true
    }

    fn report(&self, result: Result<()>, changed: bool, cx: &mut Context<'_>) {
        match result {
            Ok(()) => self.report_change(changed, cx),
            Err(err) => cx.emit(err.event(self.id)),
        }
    }

    fn report_change(&self, changed: bool, cx: &mut Context<'_>) {
        if changed {
            cx.emit(Event::TextChanged(self.id));
        }
    }

    /// The window never starts past `len - width`, so shrinking the content
    /// pulls the remaining text back into view.
    fn refresh_viewport(&mut self) {
        match self.width {
            Some(width) => self.viewport.resize(self.content.len(), self.cursor, width),
            None => self.viewport = Viewport::unbounded(self.content.len()),
        }
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}
