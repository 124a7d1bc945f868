//! Text Editor Widget: a [`TextArea`] drawn one row per screen line.

use super::text_input::draw_line;
use super::traits::{scroll_offset, Widget};
use crate::actor::InputEvent;
use crate::buffer::{Buffer, Cell, Rgb, Style};
use crate::collection::TextArea;
use crate::event::Context;
use crate::layout::Rect;

/// Configuration for the text editor widget.
#[derive(Debug, Clone)]
pub struct TextEditorConfig {
    /// Style of the text.
    pub text: Style,
    /// Style of the cursor glyph.
    pub cursor: Style,
    /// Draw row numbers in a left gutter.
    pub line_numbers: bool,
    /// Style of the gutter.
    pub gutter: Style,
}

impl Default for TextEditorConfig {
    fn default() -> Self {
        let bg = Rgb::new(25, 25, 25);
        Self {
            text: Style::new(Rgb::WHITE, bg),
            cursor: Style::new(Rgb::new(0, 255, 255), bg),
            line_numbers: false,
            gutter: Style::new(Rgb::GRAY, bg),
        }
    }
}

/// Gutter columns: three digits and a space.
const GUTTER_WIDTH: u16 = 4;

/// A multi-line editor widget.
#[derive(Debug)]
pub struct TextEditor {
    area: TextArea,
    bounds: Rect,
    config: TextEditorConfig,
    dirty: bool,
}

impl TextEditor {
    /// Create an empty editor.
    pub fn new(bounds: Rect) -> Self {
        Self::with_config(bounds, TextEditorConfig::default())
    }

    /// Create an empty editor with a custom configuration.
    pub fn with_config(bounds: Rect, config: TextEditorConfig) -> Self {
        let mut editor = Self {
            area: TextArea::new(),
            bounds,
            config,
            dirty: true,
        };
        editor.set_bounds(bounds);
        editor
    }

    /// The underlying text area.
    pub const fn area(&self) -> &TextArea {
        &self.area
    }

    /// The underlying text area, mutably.
    pub fn area_mut(&mut self) -> &mut TextArea {
        self.dirty = true;
        &mut self.area
    }

    /// The document text.
    pub fn text(&self) -> String {
        self.area.text()
    }

    /// Replace the document text.
    pub fn set_text(&mut self, text: &str) {
        self.area.set_text(text);
        self.dirty = true;
    }

    const fn gutter_width(&self) -> u16 {
        if self.config.line_numbers {
            GUTTER_WIDTH
        } else {
            0
        }
    }
}

impl Widget for TextEditor {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        let width = bounds.width.saturating_sub(self.gutter_width());
        self.area.on_resize(usize::from(width));
        self.dirty = true;
    }

    fn render(&self, buffer: &mut Buffer) {
        buffer.fill_rect(self.bounds, Cell::styled(' ', self.config.text));
        let gutter = self.gutter_width().min(self.bounds.width);
        let first = scroll_offset(self.area.current_row(), usize::from(self.bounds.height));

        for (row, (index, line)) in (0..self.bounds.height).zip(self.area.rows().iter().enumerate().skip(first)) {
            let y = self.bounds.y + row;
            if gutter > 0 {
                let number = format!("{:>3} ", index + 1);
                buffer.draw_text(self.bounds.x, y, &number, gutter, self.config.gutter);
            }
            draw_line(
                buffer,
                (self.bounds.x + gutter, y),
                self.bounds.width - gutter,
                line,
                self.config.text,
                self.config.cursor,
            );
        }
    }

    fn handle_input(&mut self, event: &InputEvent, cx: &mut Context<'_>) -> bool {
        let consumed = self.area.handle_input(event, cx);
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::KeyCode;

    #[test]
    fn test_typing_wraps_into_rows() {
        let mut editor = TextEditor::new(Rect::new(0, 0, 4, 3));
        let mut cx = Context::detached();
        for c in "abcdef".chars() {
            editor.handle_input(&InputEvent::char(c), &mut cx);
        }
        editor.handle_input(&InputEvent::key(KeyCode::Enter), &mut cx);
        editor.handle_input(&InputEvent::char('g'), &mut cx);
        assert_eq!(editor.text(), "abcd\nef\ng");

        let mut buffer = Buffer::new(4, 3);
        editor.render(&mut buffer);
        assert_eq!(buffer.row_text(0), "abcd");
        assert_eq!(buffer.row_text(1), "ef  ");
        assert_eq!(buffer.row_text(2), "g|  ");
    }

    #[test]
    fn test_line_numbers() {
        let config = TextEditorConfig {
            line_numbers: true,
            ..TextEditorConfig::default()
        };
        let mut editor = TextEditor::with_config(Rect::new(0, 0, 10, 2), config);
        editor.set_text("one\ntwo");
        assert_eq!(editor.area().row_width(), Some(6));

        let mut buffer = Buffer::new(10, 2);
        editor.render(&mut buffer);
        assert_eq!(buffer.row_text(0), "  1 one   ");
        assert_eq!(buffer.row_text(1), "  2 two|  ");
    }
}
