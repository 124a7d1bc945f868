//! Multi-line text area built from a list of rows.
//!
//! Each row is a [`LineBuffer`] inside a [`NavigableCollection`] that never
//! leaves edit mode. Line breaks split the active row at the cursor; with a
//! row width set, a row that fills up opens a fresh row below it.

use tracing::trace;

use super::navigable::NavigableCollection;
use crate::actor::{InputEvent, KeyCode};
use crate::event::{Context, Event};
use crate::text::{Direction, LineBuffer};

/// A multi-line document edited row by row.
#[derive(Debug, Clone)]
pub struct TextArea {
    rows: NavigableCollection,
    row_width: Option<usize>,
    /// Column kept while moving vertically through shorter rows.
    preferred_column: Option<usize>,
}

impl TextArea {
    /// Create an area with one empty row.
    pub fn new() -> Self {
        Self::from_text("")
    }

    /// Create an area holding `text`, one row per line.
    ///
    /// The cursor lands at the end of the last row.
    pub fn from_text(text: &str) -> Self {
        let mut area = Self {
            rows: NavigableCollection::new(),
            row_width: None,
            preferred_column: None,
        };
        area.set_text(text);
        area
    }

    /// Replace the whole document.
    pub fn set_text(&mut self, text: &str) {
        self.rows = NavigableCollection::from_values(text.split('\n'));
        if let Some(width) = self.row_width {
            self.rows.on_resize(width);
        }
        self.rows.move_to_bottom();
        self.rows.enter_edit();
        self.preferred_column = None;
    }

    /// The document with rows joined by `\n`.
    pub fn text(&self) -> String {
        self.rows.values().join("\n")
    }

    /// The rows.
    pub fn rows(&self) -> &[LineBuffer] {
        self.rows.items()
    }

    /// Number of rows. Never zero.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Index of the active row.
    pub fn current_row(&self) -> usize {
        self.rows.highlighted().unwrap_or(0)
    }

    /// The active row.
    pub fn current(&self) -> Option<&LineBuffer> {
        self.rows.current()
    }

    /// Cursor as `(row, column)`.
    pub fn cursor(&self) -> (usize, usize) {
        (
            self.current_row(),
            self.rows.current().map_or(0, LineBuffer::cursor),
        )
    }

    /// Width at which rows split automatically.
    pub const fn row_width(&self) -> Option<usize> {
        self.row_width
    }

    /// Apply a new width to every row.
    pub fn on_resize(&mut self, width: usize) {
        self.row_width = Some(width);
        self.rows.on_resize(width);
    }

    /// Split the active row at the cursor.
    ///
    /// The text right of the cursor moves to a new row below, which becomes
    /// active with the cursor at its start.
    pub fn split_line(&mut self) {
        let rest = self
            .rows
            .current_mut()
            .map(LineBuffer::split_off_at_cursor)
            .unwrap_or_default();
        self.rows.insert_below();
        if let Some(row) = self.rows.current_mut() {
            row.set_text(&rest);
            row.set_cursor(0);
        }
        self.preferred_column = None;
        trace!(row = self.current_row(), "row split");
    }

    /// Join the active row onto the end of the previous one.
    ///
    /// The cursor lands at the seam. Does nothing on the first row.
    pub fn join_with_previous(&mut self) -> bool {
        let index = self.current_row();
        if index == 0 {
            return false;
        }
        let Some(removed) = self.rows.remove_current() else {
            return false;
        };
        self.rows.select(index - 1);
        self.rows.enter_edit();
        if let Some(row) = self.rows.current_mut() {
            let seam = row.len();
            row.append(&removed.text());
            row.set_cursor(seam);
        }
        self.preferred_column = None;
        trace!(row = index - 1, "rows joined");
        true
    }

    /// Move to the row above, keeping the cursor column where possible.
    pub fn move_up(&mut self) -> bool {
        let index = self.current_row();
        index > 0 && self.move_to_row(index - 1)
    }

    /// Move to the row below, keeping the cursor column where possible.
    pub fn move_down(&mut self) -> bool {
        self.move_to_row(self.current_row() + 1)
    }

    /// Jump to the start of the first row.
    pub fn move_to_start(&mut self) {
        self.rows.select(0);
        if let Some(row) = self.rows.current_mut() {
            row.move_cursor(Direction::Home, false);
        }
        self.preferred_column = None;
    }

    /// Jump to the end of the last row.
    pub fn move_to_end(&mut self) {
        self.rows.select(self.rows.len().saturating_sub(1));
        if let Some(row) = self.rows.current_mut() {
            row.move_cursor(Direction::End, false);
        }
        self.preferred_column = None;
    }

    /// Handle an input event.
    ///
    /// Returns `true` if the event was consumed. Escape is left to the host.
    pub fn handle_input(&mut self, event: &InputEvent, cx: &mut Context<'_>) -> bool {
        if let InputEvent::Key { code, modifiers } = *event {
            match code {
                KeyCode::Enter if !modifiers.is_command() => {
                    let before = self
                        .current()
                        .filter(|row| row.cursor() < row.len())
                        .map(LineBuffer::id);
                    self.split_line();
                    if let Some(id) = before {
                        cx.emit(Event::TextChanged(id));
                    }
                    self.emit_current_changed(cx);
                    return true;
                }
                KeyCode::Up => {
                    self.move_up();
                    return true;
                }
                KeyCode::Down => {
                    self.move_down();
                    return true;
                }
                KeyCode::Home if modifiers.control => {
                    self.move_to_start();
                    return true;
                }
                KeyCode::End if modifiers.control => {
                    self.move_to_end();
                    return true;
                }
                KeyCode::Backspace
                    if !modifiers.is_command() && self.cursor().1 == 0 && self.current_row() > 0 =>
                {
                    if self.join_with_previous() {
                        self.emit_current_changed(cx);
                    }
                    return true;
                }
                KeyCode::Esc => return false,
                _ => {}
            }
        }

        self.preferred_column = None;
        let consumed = match self.rows.current_mut() {
            Some(row) => row.handle_input(event, cx),
            None => false,
        };
        let inserted = matches!(
            event,
            InputEvent::Key { code: KeyCode::Char(_), modifiers } if !modifiers.is_command()
        ) || matches!(event, InputEvent::Paste(_));
        if consumed && inserted {
            self.split_when_full();
        }
        consumed
    }

    fn move_to_row(&mut self, target: usize) -> bool {
        if target >= self.rows.len() {
            return false;
        }
        let column = self
            .preferred_column
            .unwrap_or_else(|| self.cursor().1);
        self.rows.select(target);
        if let Some(row) = self.rows.current_mut() {
            row.set_cursor(column.min(row.len()));
        }
        self.preferred_column = Some(column);
        true
    }

    /// Open a new row once the active one reaches the row width.
    ///
    /// Only an exact fit splits: a paste that overshoots the width stays on
    /// one row and scrolls horizontally.
    fn split_when_full(&mut self) {
        let Some(width) = self.row_width else {
            return;
        };
        if self.current().is_some_and(|row| row.len() == width) {
            // scroll the finished row back to its start
            if let Some(row) = self.rows.current_mut() {
                row.set_cursor(0);
            }
            self.rows.insert_below();
            trace!(row = self.current_row(), width, "row full, continuing below");
        }
    }

    fn emit_current_changed(&self, cx: &mut Context<'_>) {
        if let Some(row) = self.current() {
            cx.emit(Event::TextChanged(row.id()));
        }
    }
}

impl Default for TextArea {
    fn default() -> Self {
        Self::new()
    }
}
