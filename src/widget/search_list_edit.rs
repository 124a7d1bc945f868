//! Search List Widget: a query row above a filtered list.

use super::list_edit::ListStyle;
use super::text_input::draw_line;
use super::traits::{scroll_offset, Widget};
use crate::actor::InputEvent;
use crate::buffer::{Buffer, Cell, Rgb, Style};
use crate::collection::SearchList;
use crate::event::Context;
use crate::layout::Rect;

/// Prompt drawn before the query.
const QUERY_PROMPT: &str = "/ ";

/// A searchable list widget.
#[derive(Debug)]
pub struct SearchListEdit {
    search: SearchList,
    bounds: Rect,
    style: ListStyle,
    dirty: bool,
}

impl SearchListEdit {
    /// Wrap a search list.
    pub fn new(bounds: Rect, search: SearchList) -> Self {
        let mut widget = Self {
            search,
            bounds,
            style: ListStyle::default(),
            dirty: true,
        };
        widget.set_bounds(bounds);
        widget
    }

    /// Replace the row style.
    #[must_use]
    pub fn with_style(mut self, style: ListStyle) -> Self {
        self.style = style;
        let bounds = self.bounds;
        self.set_bounds(bounds);
        self
    }

    /// The underlying search list.
    pub const fn search(&self) -> &SearchList {
        &self.search
    }

    /// The underlying search list, mutably.
    pub fn search_mut(&mut self) -> &mut SearchList {
        self.dirty = true;
        &mut self.search
    }
}

impl Widget for SearchListEdit {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        let prompt = u16::try_from(QUERY_PROMPT.len()).unwrap_or(u16::MAX);
        let indent = prompt.max(self.style.marker_width());
        self.search.on_resize(usize::from(bounds.width.saturating_sub(indent)));
        self.dirty = true;
    }

    fn render(&self, buffer: &mut Buffer) {
        buffer.fill_rect(self.bounds, Cell::styled(' ', self.style.item));
        if self.bounds.is_empty() {
            return;
        }
        let Rect { x, y, width, height } = self.bounds;

        let prompt_style = Style::new(Rgb::GRAY, self.style.item.bg);
        let prompt = buffer.draw_text(x, y, QUERY_PROMPT, width, prompt_style);
        draw_line(buffer, (x + prompt, y), width - prompt, self.search.query(), self.style.item, self.style.cursor);

        let (_, list_area) = self.bounds.split_vertical(1);
        let visible = self.search.visible();
        if visible.is_empty() {
            self.style.draw_empty(buffer, list_area);
            return;
        }

        let selected = self
            .search
            .highlighted()
            .and_then(|index| visible.iter().position(|&v| v == index))
            .unwrap_or(0);
        let first = scroll_offset(selected, usize::from(height - 1));
        let marker_width = self.style.marker_width().min(width);

        for (row, &index) in (0..list_area.height).zip(visible.iter().skip(first)) {
            let Some(item) = self.search.list().get(index) else {
                continue;
            };
            let row_y = list_area.y + row;
            let highlighted = self.search.highlighted() == Some(index);
            let style = if highlighted { self.style.highlight } else { self.style.item };
            if highlighted {
                buffer.fill_rect(Rect::new(x, row_y, width, 1), Cell::styled(' ', style));
                buffer.draw_text(x, row_y, &self.style.marker, marker_width, style);
            }
            draw_line(buffer, (x + marker_width, row_y), width - marker_width, item, style, self.style.cursor);
        }
    }

    fn handle_input(&mut self, event: &InputEvent, cx: &mut Context<'_>) -> bool {
        let consumed = self.search.handle_input(event, cx);
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
