//! Tree Edit Widget: a [`NestedCollection`] drawn as an indented outline.
//!
//! ```text
//! ▾ fruit
//!     • apple
//!     ▸ citrus
//! • veg
//! ```

use super::list_edit::ListStyle;
use super::text_input::draw_line;
use super::traits::{scroll_offset, Widget};
use crate::actor::InputEvent;
use crate::buffer::{Buffer, Cell};
use crate::collection::{NestedCollection, NodeId};
use crate::event::Context;
use crate::layout::Rect;

/// Glyphs in front of each node.
#[derive(Debug, Clone)]
pub struct TreeGlyphs {
    /// Node with visible children.
    pub expanded: char,
    /// Node with hidden children.
    pub collapsed: char,
    /// Node without children.
    pub leaf: char,
}

impl Default for TreeGlyphs {
    fn default() -> Self {
        Self {
            expanded: '▾',
            collapsed: '▸',
            leaf: '•',
        }
    }
}

/// Columns taken by the glyph and the gap after it.
const GLYPH_WIDTH: u16 = 2;

/// An editable outline widget.
#[derive(Debug)]
pub struct TreeEdit {
    tree: NestedCollection,
    bounds: Rect,
    style: ListStyle,
    glyphs: TreeGlyphs,
    dirty: bool,
}

impl TreeEdit {
    /// Wrap an outline.
    pub fn new(bounds: Rect, tree: NestedCollection) -> Self {
        let mut widget = Self {
            tree,
            bounds,
            style: ListStyle::default(),
            glyphs: TreeGlyphs::default(),
            dirty: true,
        };
        widget.set_bounds(bounds);
        widget
    }

    /// Replace the row style.
    #[must_use]
    pub fn with_style(mut self, style: ListStyle) -> Self {
        self.style = style;
        self.dirty = true;
        self
    }

    /// Replace the node glyphs.
    #[must_use]
    pub fn with_glyphs(mut self, glyphs: TreeGlyphs) -> Self {
        self.glyphs = glyphs;
        self.dirty = true;
        self
    }

    /// The underlying outline.
    pub const fn tree(&self) -> &NestedCollection {
        &self.tree
    }

    /// The underlying outline, mutably.
    pub fn tree_mut(&mut self) -> &mut NestedCollection {
        self.dirty = true;
        &mut self.tree
    }

    fn glyph(&self, id: NodeId) -> char {
        if self.tree.children(id).is_empty() {
            self.glyphs.leaf
        } else if self.tree.is_expanded(id) {
            self.glyphs.expanded
        } else {
            self.glyphs.collapsed
        }
    }
}

impl Widget for TreeEdit {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.tree
            .on_resize(usize::from(bounds.width.saturating_sub(GLYPH_WIDTH)));
        self.dirty = true;
    }

    fn render(&self, buffer: &mut Buffer) {
        buffer.fill_rect(self.bounds, Cell::styled(' ', self.style.item));
        let rows = self.tree.visible_rows();
        if rows.is_empty() {
            self.style.draw_empty(buffer, self.bounds);
            return;
        }

        let selected = rows
            .iter()
            .position(|&(id, _)| Some(id) == self.tree.highlighted())
            .unwrap_or(0);
        let first = scroll_offset(selected, usize::from(self.bounds.height));
        let right = self.bounds.right();

        for (row, &(id, depth)) in (0..self.bounds.height).zip(rows.iter().skip(first)) {
            let Some(payload) = self.tree.payload(id) else {
                continue;
            };
            let y = self.bounds.y + row;
            let highlighted = Some(id) == self.tree.highlighted();
            let style = if highlighted { self.style.highlight } else { self.style.item };
            if highlighted {
                buffer.fill_rect(Rect::new(self.bounds.x, y, self.bounds.width, 1), Cell::styled(' ', style));
            }

            let indent = u16::try_from(depth * self.tree.guide_width()).unwrap_or(u16::MAX);
            let glyph_x = self.bounds.x.saturating_add(indent);
            if glyph_x >= right {
                continue;
            }
            let mut utf8 = [0; 4];
            buffer.draw_text(glyph_x, y, self.glyph(id).encode_utf8(&mut utf8), right - glyph_x, style);

            let text_x = glyph_x.saturating_add(GLYPH_WIDTH).min(right);
            draw_line(buffer, (text_x, y), right - text_x, payload, style, self.style.cursor);
        }
    }

    fn handle_input(&mut self, event: &InputEvent, cx: &mut Context<'_>) -> bool {
        let consumed = self.tree.handle_input(event, cx);
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
