use crossterm::event::{
    Event as CtEvent, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseEvent,
    MouseEventKind,
};
use tuidom::layout::layout;
use tuidom::{hit_path, hit_test, Element, Event, Key, Modifiers, MouseButton, Rect, Size};

// 20x2 list: two rows, each with a fixed 5-cell "bar" on the left
fn list() -> Element {
    let row = |id: &str| {
        Element::row()
            .id(id)
            .width(Size::Fill)
            .height(Size::Fixed(1))
            .clickable(true)
            .child(
                Element::box_()
                    .id(format!("{id}-bar"))
                    .width(Size::Fixed(5))
                    .height(Size::Fixed(1)),
            )
    };
    Element::col()
        .id("list")
        .width(Size::Fill)
        .height(Size::Fill)
        .child(row("first"))
        .child(row("second"))
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> CtEvent {
    CtEvent::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

// =============================================================================
// Hit Testing
// =============================================================================

#[test]
fn test_hit_test_finds_clickable_ancestor() {
    let root = list();
    let layout = layout(&root, Rect::from_size(20, 2));

    // The bar itself isn't clickable, its row is
    assert_eq!(hit_test(&layout, &root, 2, 0), Some("first".to_string()));
    assert_eq!(hit_test(&layout, &root, 15, 1), Some("second".to_string()));
}

#[test]
fn test_hit_test_misses_outside() {
    let root = list();
    let layout = layout(&root, Rect::from_size(20, 2));

    assert_eq!(hit_test(&layout, &root, 25, 0), None);
}

#[test]
fn test_hit_test_ignores_non_clickable() {
    let root = Element::col()
        .id("root")
        .child(Element::text("plain").id("plain"));
    let layout = layout(&root, Rect::from_size(10, 1));

    assert_eq!(hit_test(&layout, &root, 0, 0), None);
}

#[test]
fn test_hit_path_outermost_first() {
    let root = list();
    let layout = layout(&root, Rect::from_size(20, 2));

    assert_eq!(hit_path(&layout, &root, 1, 1), vec!["list", "second", "second-bar"]);
    assert_eq!(hit_path(&layout, &root, 10, 0), vec!["list", "first"]);
}

#[test]
fn test_hit_path_empty_outside_root() {
    let root = list();
    let layout = layout(&root, Rect::from_size(20, 2));

    assert!(hit_path(&layout, &root, 0, 5).is_empty());
}

// =============================================================================
// Event Conversion
// =============================================================================

#[test]
fn test_convert_key_press() {
    let raw = CtEvent::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL));

    assert_eq!(
        Event::from_crossterm(&raw),
        Some(Event::Key {
            key: Key::Char('q'),
            modifiers: Modifiers {
                shift: false,
                ctrl: true,
                alt: false,
            },
        })
    );
}

#[test]
fn test_key_release_ignored() {
    let raw = CtEvent::Key(KeyEvent {
        code: KeyCode::Enter,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    });

    assert_eq!(Event::from_crossterm(&raw), None);
}

#[test]
fn test_unsupported_key_ignored() {
    let raw = CtEvent::Key(KeyEvent::new(KeyCode::F(5), KeyModifiers::NONE));

    assert_eq!(Event::from_crossterm(&raw), None);
}

#[test]
fn test_convert_mouse_down() {
    let raw = mouse(
        MouseEventKind::Down(crossterm::event::MouseButton::Left),
        3,
        4,
    );

    assert_eq!(
        Event::from_crossterm(&raw),
        Some(Event::Click {
            x: 3,
            y: 4,
            button: MouseButton::Left,
        })
    );
}

#[test]
fn test_convert_mouse_move_and_drag() {
    let moved = mouse(MouseEventKind::Moved, 7, 1);
    let drag = mouse(
        MouseEventKind::Drag(crossterm::event::MouseButton::Left),
        8,
        1,
    );

    assert_eq!(Event::from_crossterm(&moved), Some(Event::MouseMove { x: 7, y: 1 }));
    assert_eq!(Event::from_crossterm(&drag), Some(Event::MouseMove { x: 8, y: 1 }));
}

#[test]
fn test_mouse_up_and_scroll_ignored() {
    let up = mouse(
        MouseEventKind::Up(crossterm::event::MouseButton::Left),
        0,
        0,
    );
    let scroll = mouse(MouseEventKind::ScrollDown, 0, 0);

    assert_eq!(Event::from_crossterm(&up), None);
    assert_eq!(Event::from_crossterm(&scroll), None);
}

#[test]
fn test_convert_resize() {
    assert_eq!(
        Event::from_crossterm(&CtEvent::Resize(80, 24)),
        Some(Event::Resize {
            width: 80,
            height: 24,
        })
    );
}

#[test]
fn test_modifiers_none() {
    assert!(Modifiers::default().none());
    assert!(!Modifiers::from(KeyModifiers::SHIFT).none());
}
