//! Text Input Widget: a single [`LineBuffer`] on one screen row.
//!
//! The widget draws an optional prompt followed by the buffer's viewport.
//! Its width minus the prompt is the buffer's display width.

use super::traits::Widget;
use crate::actor::InputEvent;
use crate::buffer::{Buffer, Cell, Modifiers, Rgb, Style};
use crate::event::Context;
use crate::layout::Rect;
use crate::text::LineBuffer;

/// Configuration for the text input widget.
#[derive(Debug, Clone)]
pub struct TextInputConfig {
    /// Style for the text.
    pub text: Style,
    /// Style for the cursor glyph.
    pub cursor: Style,
    /// Placeholder text shown when the buffer is empty and unfocused.
    pub placeholder: String,
    /// Placeholder text color.
    pub placeholder_fg: Rgb,
    /// Prompt prefix (e.g., "> ").
    pub prompt: String,
    /// Prompt color.
    pub prompt_fg: Rgb,
}

impl Default for TextInputConfig {
    fn default() -> Self {
        let bg = Rgb::new(30, 30, 30);
        Self {
            text: Style::new(Rgb::WHITE, bg),
            cursor: Style::new(Rgb::new(0, 255, 255), bg).with_modifiers(Modifiers::BOLD),
            placeholder: String::new(),
            placeholder_fg: Rgb::GRAY,
            prompt: String::from("> "),
            prompt_fg: Rgb::new(0, 255, 255),
        }
    }
}

/// A single-line input backed by a [`LineBuffer`].
#[derive(Debug)]
pub struct TextInput {
    line: LineBuffer,
    bounds: Rect,
    config: TextInputConfig,
    dirty: bool,
}

impl TextInput {
    /// Create a focused, unrestricted input.
    pub fn new(bounds: Rect) -> Self {
        Self::with_line(bounds, LineBuffer::new(), TextInputConfig::default())
    }

    /// Create an input with a custom configuration.
    pub fn with_config(bounds: Rect, config: TextInputConfig) -> Self {
        Self::with_line(bounds, LineBuffer::new(), config)
    }

    /// Wrap an existing buffer, e.g. [`LineBuffer::numeric`] or [`LineBuffer::password`].
    pub fn with_line(bounds: Rect, mut line: LineBuffer, config: TextInputConfig) -> Self {
        line.set_focused(true);
        let mut input = Self {
            line,
            bounds,
            config,
            dirty: true,
        };
        input.set_bounds(bounds);
        input
    }

    /// The underlying buffer.
    pub const fn line(&self) -> &LineBuffer {
        &self.line
    }

    /// The underlying buffer, mutably.
    pub fn line_mut(&mut self) -> &mut LineBuffer {
        self.dirty = true;
        &mut self.line
    }

    /// Get the current text content.
    pub fn content(&self) -> String {
        self.line.text()
    }

    /// Set the content, moving the cursor to the end.
    pub fn set_content(&mut self, content: &str) {
        self.line.set_text(content);
        self.dirty = true;
    }

    /// Set focus state.
    pub const fn set_focused(&mut self, focused: bool) {
        self.line.set_focused(focused);
        self.dirty = true;
    }

    /// Check if focused.
    pub const fn is_focused(&self) -> bool {
        self.line.is_focused()
    }

    fn prompt_width(&self) -> u16 {
        u16::try_from(self.config.prompt.chars().count()).unwrap_or(u16::MAX)
    }
}

impl Widget for TextInput {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        let text_width = bounds.width.saturating_sub(self.prompt_width());
        self.line.on_resize(usize::from(text_width));
        self.dirty = true;
    }

    fn render(&self, buffer: &mut Buffer) {
        let Rect { x, y, width, .. } = self.bounds;
        let text = self.config.text;
        buffer.fill_rect(self.bounds, Cell::styled(' ', text));

        let prompt_style = Style::new(self.config.prompt_fg, text.bg);
        let prompt = buffer.draw_text(x, y, &self.config.prompt, width, prompt_style);
        let text_x = x + prompt;
        let text_width = width - prompt;

        if self.line.is_empty() && !self.line.is_focused() && !self.config.placeholder.is_empty() {
            let placeholder = Style::new(self.config.placeholder_fg, text.bg);
            buffer.draw_text(text_x, y, &self.config.placeholder, text_width, placeholder);
        } else {
            draw_line(buffer, (text_x, y), text_width, &self.line, text, self.config.cursor);
        }
    }

    fn handle_input(&mut self, event: &InputEvent, cx: &mut Context<'_>) -> bool {
        if !self.line.is_focused() {
            return false;
        }
        let consumed = self.line.handle_input(event, cx);
        self.dirty |= consumed;
        consumed
    }

    fn needs_redraw(&self) -> bool {
        self.dirty
    }

    fn clear_redraw(&mut self) {
        self.dirty = false;
    }
}

/// Draw a buffer's visible text at `origin`, at most `width` columns.
///
/// The cursor glyph of a focused buffer is drawn with `cursor` and its cell
/// is flagged so the host can place the terminal cursor there.
pub(crate) fn draw_line(
    buffer: &mut Buffer,
    origin: (u16, u16),
    width: u16,
    line: &LineBuffer,
    text: Style,
    cursor: Style,
) {
    let (x, y) = origin;
    let limit = x.saturating_add(width);
    let cursor_at = line.is_focused().then(|| line.cursor_column());
    let mut col = x;
    let mut utf8 = [0; 4];

    for (i, c) in line.visible_text().chars().enumerate() {
        if col >= limit {
            break;
        }
        let is_cursor = cursor_at == Some(i);
        let style = if is_cursor { cursor } else { text };
        let written = buffer.draw_text(col, y, c.encode_utf8(&mut utf8), limit - col, style);
        if is_cursor {
            if let Some(cell) = buffer.get_mut(col, y) {
                cell.set_cursor(true);
            }
        }
        col += written;
    }
}
