//! List Edit Widget: a [`NavigableCollection`] drawn one item per row.
//!
//! The highlighted row carries a marker and the highlight colors. The list
//! scrolls so the highlight is always on screen.

use super::text_input::draw_line;
use super::traits::{scroll_offset, Widget};
use crate::actor::InputEvent;
use crate::buffer::{Buffer, Cell, Modifiers, Rgb, Style};
use crate::collection::NavigableCollection;
use crate::event::Context;
use crate::layout::Rect;

/// Colors and glyphs shared by the list-like widgets.
#[derive(Debug, Clone)]
pub struct ListStyle {
    /// Style of ordinary rows.
    pub item: Style,
    /// Style of the highlighted row.
    pub highlight: Style,
    /// Style of the cursor glyph while editing.
    pub cursor: Style,
    /// Drawn before the highlighted row.
    pub marker: String,
    /// Shown when there is nothing to list.
    pub empty_text: String,
}

impl ListStyle {
    pub(crate) fn marker_width(&self) -> u16 {
        u16::try_from(self.marker.chars().count()).unwrap_or(u16::MAX)
    }

    pub(crate) fn draw_empty(&self, buffer: &mut Buffer, area: Rect) {
        let dim = Style::new(Rgb::GRAY, self.item.bg).with_modifiers(Modifiers::ITALIC);
        buffer.draw_text(area.x, area.y, &self.empty_text, area.width, dim);
    }
}

impl Default for ListStyle {
    fn default() -> Self {
        let bg = Rgb::new(20, 20, 20);
        Self {
            item: Style::new(Rgb::WHITE, bg),
            highlight: Style::new(Rgb::WHITE, Rgb::new(40, 60, 90)).with_modifiers(Modifiers::BOLD),
            cursor: Style::new(Rgb::new(0, 255, 255), Rgb::new(40, 60, 90)),
            marker: String::from("> "),
            empty_text: String::from("(empty)"),
        }
    }
}

/// An editable list widget.
#[derive(Debug)]
pub struct ListEdit {
    list: NavigableCollection,
    bounds: Rect,
    style: ListStyle,
    dirty: bool,
}

impl ListEdit {
    /// Wrap a collection.
    pub fn new(bounds: Rect, list: NavigableCollection) -> Self {
        Self::with_style(bounds, list, ListStyle::default())
    }

    /// Wrap a collection with a custom style.
    pub fn with_style(bounds: Rect, list: NavigableCollection, style: ListStyle) -> Self {
        let mut widget = Self {
            list,
            bounds,
            style,
            dirty: true,
        };
        widget.set_bounds(bounds);
        widget
    }

    /// The underlying collection.
    pub const fn list(&self) -> &NavigableCollection {
        &self.list
    }

    /// The underlying collection, mutably.
    pub fn list_mut(&mut self) -> &mut NavigableCollection {
        self.dirty = true;
        &mut self.list
    }
}

impl Widget for ListEdit {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        let width = bounds.width.saturating_sub(self.style.marker_width());
        self.list.on_resize(usize::from(width));
        self.dirty = true;
    }

    fn render(&self, buffer: &mut Buffer) {
        buffer.fill_rect(self.bounds, Cell::styled(' ', self.style.item));
        if self.list.is_empty() {
            self.style.draw_empty(buffer, self.bounds);
            return;
        }

        let height = usize::from(self.bounds.height);
        let selected = self.list.highlighted().unwrap_or(0);
        let first = scroll_offset(selected, height);
        let marker_width = self.style.marker_width();

        for (row, (index, item)) in (0..self.bounds.height).zip(self.list.items().iter().enumerate().skip(first)) {
            let y = self.bounds.y + row;
            let highlighted = Some(index) == self.list.highlighted();
            let style = if highlighted { self.style.highlight } else { self.style.item };
            if highlighted {
                buffer.fill_rect(Rect::new(self.bounds.x, y, self.bounds.width, 1), Cell::styled(' ', style));
                buffer.draw_text(self.bounds.x, y, &self.style.marker, marker_width, style);
            }
            let origin = (self.bounds.x + marker_width.min(self.bounds.width), y);
            let width = self.bounds.width.saturating_sub(marker_width);
            draw_line(buffer, origin, width, item, style, self.style.cursor);
        }
    }

    fn handle_input(&mut self, event: &InputEvent, cx: &mut Context<'_>) -> bool {
        let consumed = self.list.handle_input(event, cx);
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
    fn test_render_marks_highlight() {
        let list = NavigableCollection::from_values(["one", "two"]);
        let widget = ListEdit::new(Rect::new(0, 0, 8, 3), list);

        let mut buffer = Buffer::new(8, 3);
        widget.render(&mut buffer);
        assert_eq!(buffer.row_text(0), "> one   ");
        assert_eq!(buffer.row_text(1), "  two   ");
        assert_eq!(buffer.row_text(2), "        ");
    }

    #[test]
    fn test_scrolls_to_highlight() {
        let list = NavigableCollection::from_values(["a", "b", "c", "d"]);
        let mut widget = ListEdit::new(Rect::new(0, 0, 4, 2), list);
        let mut cx = Context::detached();
        widget.handle_input(&InputEvent::char('G'), &mut cx);

        let mut buffer = Buffer::new(4, 2);
        widget.render(&mut buffer);
        assert_eq!(buffer.row_text(0), "  c ");
        assert_eq!(buffer.row_text(1), "> d ");
    }

    #[test]
    fn test_empty_list() {
        let mut widget = ListEdit::new(Rect::new(0, 0, 10, 1), NavigableCollection::new());
        let mut buffer = Buffer::new(10, 1);
        widget.render(&mut buffer);
        assert_eq!(buffer.row_text(0), "(empty)   ");

        let mut cx = Context::detached();
        widget.handle_input(&InputEvent::char('a'), &mut cx);
        widget.handle_input(&InputEvent::char('x'), &mut cx);
        widget.handle_input(&InputEvent::key(KeyCode::Esc), &mut cx);
        assert_eq!(widget.list().values(), vec!["x"]);
        assert_eq!(widget.list().item_width(), Some(8));
    }
}
