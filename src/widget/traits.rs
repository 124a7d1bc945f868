//! Widget trait and the common render helpers.

use crate::actor::InputEvent;
use crate::buffer::Buffer;
use crate::event::Context;
use crate::layout::Rect;

/// A UI component that renders to a buffer and handles input.
///
/// Widgets own one editable model (a line, a list, an outline) and adapt
/// it to a screen rectangle. All state changes happen in
/// [`handle_input`](Widget::handle_input); rendering only reads.
pub trait Widget {
    /// Get the current bounds of this widget.
    fn bounds(&self) -> Rect;

    /// Set the bounds of this widget.
    ///
    /// Called when the layout changes (e.g., terminal resize). The model's
    /// viewports are recomputed for the new width.
    fn set_bounds(&mut self, bounds: Rect);

    /// Render this widget to the given buffer.
    ///
    /// The widget only writes to cells within its bounds.
    fn render(&self, buffer: &mut Buffer);

    /// Handle an input event.
    ///
    /// Emitted events are pushed into `cx`. Returns `true` if the event was
    /// consumed, `false` if it should propagate to other widgets.
    fn handle_input(&mut self, event: &InputEvent, cx: &mut Context<'_>) -> bool;

    /// Check if this widget needs to be redrawn.
    fn needs_redraw(&self) -> bool;

    /// Clear the redraw flag after rendering.
    fn clear_redraw(&mut self);
}

/// First row to draw so that `selected` stays inside `height` rows.
pub(crate) const fn scroll_offset(selected: usize, height: usize) -> usize {
    selected.saturating_sub(height.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_offset() {
        assert_eq!(scroll_offset(0, 5), 0);
        assert_eq!(scroll_offset(4, 5), 0);
        assert_eq!(scroll_offset(7, 5), 3);
        assert_eq!(scroll_offset(3, 0), 3);
    }
}
