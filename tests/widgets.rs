//! Rendering scenarios driven through the `Widget` trait.

use flyedit::{
    Buffer, Context, InputEvent, KeyCode, ListEdit, NavigableCollection, Rect, SearchList,
    SearchListEdit, TextEditor, TextInput, Widget,
};
use pretty_assertions::assert_eq;

fn feed(widget: &mut dyn Widget, events: &[InputEvent]) -> Context<'static> {
    let mut cx = Context::detached();
    for event in events {
        widget.handle_input(event, &mut cx);
    }
    cx
}

fn chars(text: &str) -> Vec<InputEvent> {
    text.chars().map(InputEvent::char).collect()
}

fn screen(widget: &dyn Widget) -> Vec<String> {
    let bounds = widget.bounds();
    let mut buffer = Buffer::new(bounds.right(), bounds.bottom());
    widget.render(&mut buffer);
    (bounds.y..bounds.bottom()).map(|y| buffer.row_text(y)).collect()
}

#[test]
fn long_input_scrolls_and_shrinks_back() {
    let mut input = TextInput::new(Rect::new(0, 0, 8, 1));
    feed(&mut input, &chars("abcdefghij"));
    assert_eq!(screen(&input), vec!["> fghij|"]);

    feed(&mut input, &[InputEvent::key(KeyCode::Home)]);
    assert_eq!(screen(&input), vec!["> |abcde"]);

    input.set_bounds(Rect::new(0, 0, 14, 1));
    assert_eq!(screen(&input), vec!["> |abcdefghij "]);
}

#[test]
fn list_session() {
    let mut list = ListEdit::new(Rect::new(0, 0, 10, 3), NavigableCollection::new());
    let mut events = chars("a");
    events.extend(chars("milk"));
    events.push(InputEvent::key(KeyCode::Esc));
    events.extend(chars("a"));
    events.extend(chars("eggs"));
    events.push(InputEvent::key(KeyCode::Esc));
    events.extend(chars("k"));
    feed(&mut list, &events);

    assert_eq!(screen(&list), vec!["> milk    ", "  eggs    ", "          "]);
    assert!(list.needs_redraw());
    list.clear_redraw();
    assert!(!list.needs_redraw());
}

#[test]
fn editor_session() {
    let mut editor = TextEditor::new(Rect::new(0, 0, 12, 3));
    let mut events = chars("first");
    events.push(InputEvent::key(KeyCode::Enter));
    events.extend(chars("second"));
    events.push(InputEvent::key(KeyCode::Up));
    feed(&mut editor, &events);

    assert_eq!(editor.text(), "first\nsecond");
    assert_eq!(editor.area().cursor(), (0, 5));
    assert_eq!(screen(&editor), vec!["first|      ", "second      ", "            "]);
}

#[test]
fn search_session() {
    let search = SearchList::from_values(["red", "green", "blue"]);
    let mut widget = SearchListEdit::new(Rect::new(0, 0, 10, 4), search);
    let mut events = vec![InputEvent::ctrl(KeyCode::Char('s'))];
    events.extend(chars("e"));
    events.push(InputEvent::key(KeyCode::Esc));
    events.extend(chars("j"));
    let mut cx = feed(&mut widget, &events);

    assert_eq!(widget.search().visible_values(), vec!["red", "green", "blue"]);
    assert_eq!(screen(&widget), vec!["/ e       ", "  red     ", "> green   ", "  blue    "]);

    cx.take_events();
    widget.handle_input(&InputEvent::key(KeyCode::Enter), &mut cx);
    assert!(matches!(
        cx.events(),
        [flyedit::Event::ItemSelected { value, .. }] if value == "green"
    ));
}
