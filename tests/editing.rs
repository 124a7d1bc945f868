//! Keystroke-level scenarios across buffers and collections.

use flyedit::{
    CharFilter, ClipboardProvider, CollectionState, Context, Event, InputEvent, KeyCode, LineBuffer,
    MemoryClipboard, NavigableCollection, NestedCollection, NoClipboard, Step,
};
use pretty_assertions::assert_eq;

fn type_str(list: &mut NavigableCollection, text: &str, cx: &mut Context<'_>) {
    for c in text.chars() {
        list.handle_input(&InputEvent::char(c), cx);
    }
}

fn press(tree: &mut NestedCollection, cx: &mut Context<'_>, keys: &str) {
    for c in keys.chars() {
        tree.handle_input(&InputEvent::char(c), cx);
    }
}

fn assert_viewport_holds(line: &LineBuffer) {
    let view = line.viewport();
    assert!(line.cursor() <= line.len());
    assert!(view.start() <= view.end());
    if let Some(width) = line.width() {
        if line.len() >= width {
            assert!(view.contains(line.cursor()), "cursor {} outside {:?}", line.cursor(), view);
        }
    }
}

#[test]
fn cancel_does_not_select_but_confirm_does() {
    let mut list = NavigableCollection::new();
    let mut cx = Context::detached();

    list.insert_at_end();
    assert_eq!(list.state(), CollectionState::Editing(0));

    type_str(&mut list, "hi", &mut cx);
    list.handle_input(&InputEvent::key(KeyCode::Esc), &mut cx);
    assert_eq!(list.state(), CollectionState::Idle(0));
    assert_eq!(list.values(), vec!["hi".to_string()]);

    let events = cx.take_events();
    assert_eq!(events.len(), 2);
    assert!(events.iter().all(|event| matches!(event, Event::TextChanged(_))));

    list.handle_input(&InputEvent::key(KeyCode::Enter), &mut cx);
    assert_eq!(
        cx.take_events(),
        vec![Event::ItemSelected {
            collection: list.id(),
            value: "hi".to_string(),
        }]
    );
}

#[test]
fn enter_while_editing_goes_to_the_buffer() {
    let mut list = NavigableCollection::from_values(["a"]);
    let mut cx = Context::detached();
    list.enter_edit();
    list.handle_input(&InputEvent::key(KeyCode::Enter), &mut cx);
    assert!(cx.events().is_empty());
    assert!(list.is_editing());
}

#[test]
fn building_a_list_from_keys() {
    let mut list = NavigableCollection::new();
    let mut cx = Context::detached();

    for word in ["one", "two", "three"] {
        list.handle_input(&InputEvent::char('a'), &mut cx);
        type_str(&mut list, word, &mut cx);
        list.handle_input(&InputEvent::key(KeyCode::Esc), &mut cx);
    }
    assert_eq!(list.values(), vec!["one", "two", "three"]);

    list.handle_input(&InputEvent::char('g'), &mut cx);
    list.handle_input(&InputEvent::char('d'), &mut cx);
    assert_eq!(list.values(), vec!["two", "three"]);
    assert_eq!(list.highlighted(), Some(0));
    assert!(!list.is_editing());
}

#[test]
fn wrap_policy() {
    let mut wrapping = NavigableCollection::from_values(["a", "b", "c"]).with_wrap(true);
    wrapping.select(2);
    wrapping.navigate(Step::Next);
    assert_eq!(wrapping.highlighted(), Some(0));

    let mut clamped = NavigableCollection::from_values(["a", "b", "c"]);
    clamped.select(2);
    clamped.navigate(Step::Next);
    assert_eq!(clamped.highlighted(), Some(2));
}

#[test]
fn removing_from_empty_is_silent() {
    let mut list = NavigableCollection::new();
    let mut cx = Context::detached();
    list.handle_input(&InputEvent::char('d'), &mut cx);
    list.handle_input(&InputEvent::char('j'), &mut cx);
    assert_eq!(list.state(), CollectionState::Empty);
    assert!(cx.events().is_empty());
}

#[test]
fn deny_filter_rejects_whole_insert() {
    let mut line = LineBuffer::new().with_filter(CharFilter::deny([' ']));
    assert!(line.insert("a b").is_err());
    assert_eq!(line.text(), "");
    assert!(line.insert("ab").is_ok());
    assert_eq!(line.text(), "ab");

    let mut cx = Context::detached();
    line.handle_input(&InputEvent::char(' '), &mut cx);
    assert_eq!(cx.take_events(), vec![Event::InvalidInputAttempt(line.id())]);
    assert_eq!(line.text(), "ab");
}

#[test]
fn paste_from_keys() {
    let clipboard = MemoryClipboard::with_contents("pasted");
    let mut line = LineBuffer::from_text("x");
    let mut cx = Context::new(&clipboard);

    line.handle_input(&InputEvent::ctrl(KeyCode::Char('v')), &mut cx);
    assert_eq!(line.text(), "xpasted");
    assert_eq!(cx.take_events(), vec![Event::TextChanged(line.id())]);

    let empty = NoClipboard;
    assert!(empty.get_contents().is_err());
    let mut cx = Context::new(&empty);
    line.handle_input(&InputEvent::ctrl(KeyCode::Char('v')), &mut cx);
    assert_eq!(line.text(), "xpasted");
    assert_eq!(cx.take_events(), vec![Event::ClipboardError(line.id())]);
}

#[test]
fn cursor_stays_visible_through_a_session() {
    let mut line = LineBuffer::new().with_width(5);
    let mut cx = Context::detached();
    let keys = [
        InputEvent::Paste("the quick brown fox".into()),
        InputEvent::key(KeyCode::Home),
        InputEvent::ctrl(KeyCode::Right),
        InputEvent::ctrl(KeyCode::Right),
        InputEvent::key(KeyCode::Backspace),
        InputEvent::ctrl(KeyCode::Backspace),
        InputEvent::key(KeyCode::End),
        InputEvent::ctrl(KeyCode::Left),
        InputEvent::key(KeyCode::Delete),
    ];
    for key in &keys {
        line.handle_input(key, &mut cx);
        assert_viewport_holds(&line);
    }

    for width in [3, 12, 1, 40, 5] {
        line.on_resize(width);
        assert_viewport_holds(&line);
    }
}

#[test]
fn resize_never_drops_characters() {
    let mut list = NavigableCollection::from_values(["abcdefghij", "short"]);
    list.on_resize(4);
    list.on_resize(20);
    assert_eq!(list.values(), vec!["abcdefghij", "short"]);
    assert_eq!(list.items()[0].visible_slice(), "abcdefghij");
}

#[test]
fn lone_top_level_node_gets_one_sibling() {
    let mut tree = NestedCollection::new();
    let root = tree.root();
    let first = tree.push_child(root, "first");

    let sibling = tree.add_sibling();
    assert_eq!(tree.children(root).len(), 2);
    assert_eq!(tree.children(root).first().copied(), first);
    assert_eq!(tree.children(root).last().copied(), sibling);
    assert!(tree.is_expanded(root));
}

#[test]
fn outline_from_keys() {
    let mut tree = NestedCollection::new();
    let mut cx = Context::detached();

    // "a" on an empty outline creates the first node
    press(&mut tree, &mut cx, "a");
    press(&mut tree, &mut cx, "parent");
    tree.handle_input(&InputEvent::key(KeyCode::Esc), &mut cx);

    press(&mut tree, &mut cx, "A");
    press(&mut tree, &mut cx, "child");
    tree.handle_input(&InputEvent::key(KeyCode::Esc), &mut cx);

    press(&mut tree, &mut cx, "a");
    press(&mut tree, &mut cx, "sibling");
    tree.handle_input(&InputEvent::key(KeyCode::Esc), &mut cx);

    let rows: Vec<(String, usize)> = tree
        .visible_rows()
        .into_iter()
        .filter_map(|(id, depth)| tree.payload(id).map(|line| (line.text(), depth)))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("parent".to_string(), 0),
            ("child".to_string(), 1),
            ("sibling".to_string(), 1),
        ]
    );

    // collapse the parent from below
    press(&mut tree, &mut cx, "Z");
    assert_eq!(tree.visible_nodes().len(), 1);
}
