//! Outline Demo: edit a small tree in the terminal.
//!
//! Keyboard (outside edit mode):
//!   j/k or arrows  → Move highlight
//!   i              → Edit node
//!   a / A          → Add sibling / add child
//!   z / Z          → Toggle node / toggle parent
//!   d              → Remove node
//!   Enter          → Select node
//!   q or Ctrl+C    → Exit
//!
//! In edit mode keys go to the node's text; Esc leaves edit mode.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::style::{Color, Print, SetBackgroundColor, SetForegroundColor};
use crossterm::{cursor, execute, queue, terminal};
use flyedit::{
    Buffer, Context, Event, InputActor, InputEvent, KeyCode, MemoryClipboard, NestedCollection,
    Rect, Rgb, Style, TreeEdit, Widget,
};

fn main() -> io::Result<()> {
    let (width, height) = terminal::size()?;
    let mut tree = NestedCollection::new();
    let root = tree.root();
    if let Some(todo) = tree.push_child(root, "todo") {
        tree.push_child(todo, "write the parser");
        tree.push_child(todo, "wire up the keymap");
    }
    tree.push_child(root, "done");

    let mut widget = TreeEdit::new(tree_area(width, height), tree);
    let mut buffer = Buffer::new(width, height);
    let clipboard = MemoryClipboard::default();
    let mut status = String::from("q to quit");

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

    let (tx, rx) = crossbeam_channel::unbounded();
    let input = InputActor::spawn(tx, Duration::from_millis(50))?;

    draw(&mut stdout, &mut buffer, &widget, &status)?;
    while let Ok(event) = rx.recv() {
        match &event {
            InputEvent::Shutdown => break,
            InputEvent::Key { code: KeyCode::Char('c'), modifiers } if modifiers.control => break,
            InputEvent::Key { code: KeyCode::Char('q'), .. } if !widget.tree().is_editing() => break,
            InputEvent::Resize { width, height } => {
                buffer.resize(*width, *height);
                widget.set_bounds(tree_area(*width, *height));
            }
            _ => {
                let mut cx = Context::new(&clipboard);
                widget.handle_input(&event, &mut cx);
                for emitted in cx.take_events() {
                    match emitted {
                        Event::ItemSelected { value, .. } => status = format!("selected: {value}"),
                        Event::InvalidInputAttempt(_) => status = String::from("input refused"),
                        Event::ClipboardError(_) => status = String::from("clipboard is empty"),
                        Event::TextChanged(_) => {}
                    }
                }
            }
        }
        if widget.needs_redraw() {
            draw(&mut stdout, &mut buffer, &widget, &status)?;
            widget.clear_redraw();
        }
    }

    input.join();
    execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()
}

fn tree_area(width: u16, height: u16) -> Rect {
    Rect::new(0, 0, width, height.saturating_sub(1))
}

fn draw(out: &mut impl Write, buffer: &mut Buffer, widget: &TreeEdit, status: &str) -> io::Result<()> {
    buffer.clear();
    widget.render(buffer);
    let status_y = buffer.height().saturating_sub(1);
    let status_style = Style::new(Rgb::BLACK, Rgb::new(0, 200, 200));
    buffer.draw_text(0, status_y, status, buffer.width(), status_style);

    for (y, row) in (0u16..).zip(buffer.rows()) {
        queue!(out, cursor::MoveTo(0, y))?;
        for cell in row.iter().filter(|cell| !cell.is_wide_continuation()) {
            queue!(
                out,
                SetForegroundColor(color(cell.fg())),
                SetBackgroundColor(color(cell.bg())),
                Print(cell.symbol())
            )?;
        }
    }
    out.flush()
}

const fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
