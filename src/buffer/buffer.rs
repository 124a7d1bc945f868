//! Buffer: the grid widgets render into.
//!
//! Cells are stored in row-major order in one contiguous `Vec`.

use unicode_width::UnicodeWidthChar;

use super::cell::{Cell, Style};
use crate::layout::Rect;

/// A grid of styled cells.
///
/// Access is in row-major order: `index = y * width + x`.
#[derive(Clone, PartialEq, Eq)]
pub struct Buffer {
    cells: Vec<Cell>,
    width: u16,
    height: u16,
}

impl Buffer {
    /// Create a blank buffer. Zero-sized buffers are allowed and draw nothing.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            cells: vec![Cell::EMPTY; usize::from(width) * usize::from(height)],
            width,
            height,
        }
    }

    /// Get the buffer width.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Get the buffer height.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// The whole buffer as a rectangle.
    pub const fn area(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    /// Get the underlying cell slice.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Convert (x, y) coordinates to a linear index.
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn index_of(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| usize::from(y) * usize::from(self.width) + usize::from(x))
    }

    /// Get a cell. `None` if out of bounds.
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index_of(x, y).map(|i| &self.cells[i])
    }

    /// Get a cell mutably. `None` if out of bounds.
    #[inline]
    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.index_of(x, y).map(|i| &mut self.cells[i])
    }

    /// Set a cell. Returns `false` if out of bounds.
    #[inline]
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) -> bool {
        match self.index_of(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Fill a rectangle with a cell, clipped to the buffer.
    pub fn fill_rect(&mut self, area: Rect, cell: Cell) {
        for row in area.y..area.bottom().min(self.height) {
            for col in area.x..area.right().min(self.width) {
                self.set(col, row, cell);
            }
        }
    }

    /// Blank the whole buffer.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::EMPTY);
    }

    /// Resize, keeping the overlapping top-left content.
    pub fn resize(&mut self, width: u16, height: u16) {
        if width == self.width && height == self.height {
            return;
        }
        let mut cells = vec![Cell::EMPTY; usize::from(width) * usize::from(height)];
        let copy_width = usize::from(self.width.min(width));
        for y in 0..usize::from(self.height.min(height)) {
            let old_start = y * usize::from(self.width);
            let new_start = y * usize::from(width);
            cells[new_start..new_start + copy_width]
                .copy_from_slice(&self.cells[old_start..old_start + copy_width]);
        }
        self.cells = cells;
        self.width = width;
        self.height = height;
    }

    /// Draw `text` on row `y` starting at column `x`, using at most `max_width` columns.
    ///
    /// Wide characters take two columns and are skipped whole if only one
    /// column is left. Zero-width characters are dropped. Returns the number
    /// of columns written.
    pub fn draw_text(&mut self, x: u16, y: u16, text: &str, max_width: u16, style: Style) -> u16 {
        let limit = x.saturating_add(max_width).min(self.width);
        let mut col = x;
        for c in text.chars() {
            let width = match c.width() {
                Some(0) | None => continue,
                Some(w) => u16::try_from(w).unwrap_or(1),
            };
            if col.saturating_add(width) > limit {
                break;
            }
            self.set(col, y, Cell::styled(c, style));
            if width == 2 {
                self.set(col + 1, y, Cell::wide_continuation(style));
            }
            col += width;
        }
        col - x
    }

    /// The characters on row `y`, continuation cells skipped.
    pub fn row_text(&self, y: u16) -> String {
        self.rows()
            .nth(usize::from(y))
            .map(|row| {
                row.iter()
                    .filter(|cell| !cell.is_wide_continuation())
                    .map(Cell::symbol)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Position of the cell flagged as the cursor, if any.
    pub fn cursor_position(&self) -> Option<(u16, u16)> {
        let index = self.cells.iter().position(Cell::is_cursor)?;
        let width = usize::from(self.width);
        let x = u16::try_from(index % width).ok()?;
        let y = u16::try_from(index / width).ok()?;
        Some((x, y))
    }

    /// Iterate over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(usize::from(self.width.max(1)))
    }
}

impl std::fmt::Debug for Buffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Buffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}
