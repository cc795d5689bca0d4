use std::time::{Duration, Instant};

use tuidom::animation::AnimationState;
use tuidom::{
    Buffer, Color, Easing, Element, Initial, Rect, Rgb, Size, Style, Stylesheet, TextAlign,
    TransitionConfig, Transitions,
};

fn render_with(root: &Element, width: u16, height: u16, stylesheet: &Stylesheet) -> Buffer {
    let layout = tuidom::layout::layout(root, Rect::new(0, 0, width, height));
    let mut buf = Buffer::new(width, height);
    let animation = AnimationState::new();
    tuidom::render::render_to_buffer(root, &layout, &mut buf, &animation, stylesheet);
    buf
}

fn render(root: &Element, width: u16, height: u16) -> Buffer {
    render_with(root, width, height, &Stylesheet::new())
}

const RED: Rgb = Rgb::new(255, 0, 0);
const GREEN: Rgb = Rgb::new(0, 255, 0);
const BLACK: Rgb = Rgb::new(0, 0, 0);

// ============================================================================
// Backgrounds
// ============================================================================

#[test]
fn test_background_fills_rect() {
    let root = Element::box_()
        .id("root")
        .width(Size::Fixed(4))
        .height(Size::Fixed(2))
        .style(Style::new().background(Color::rgb(255, 0, 0)));

    let buf = render(&root, 6, 3);

    for y in 0..2 {
        for x in 0..4 {
            assert_eq!(buf.get(x, y).unwrap().bg, RED, "({x}, {y})");
        }
    }
    assert_eq!(buf.get(4, 0).unwrap().bg, BLACK);
    assert_eq!(buf.get(0, 2).unwrap().bg, BLACK);
}

#[test]
fn test_child_background_paints_over_parent() {
    let root = Element::row()
        .id("root")
        .width(Size::Fixed(10))
        .height(Size::Fixed(1))
        .style(Style::new().background(Color::rgb(255, 0, 0)))
        .child(
            Element::box_()
                .id("child")
                .width(Size::Percent(0.3))
                .height(Size::Fixed(1))
                .style(Style::new().background(Color::rgb(0, 255, 0))),
        );

    let buf = render(&root, 10, 1);

    assert_eq!(buf.get(2, 0).unwrap().bg, GREEN);
    assert_eq!(buf.get(3, 0).unwrap().bg, RED);
}

// ============================================================================
// Text
// ============================================================================

#[test]
fn test_text_renders_and_keeps_parent_background() {
    let root = Element::row()
        .id("root")
        .width(Size::Fixed(6))
        .height(Size::Fixed(1))
        .style(Style::new().background(Color::rgb(255, 0, 0)))
        .child(Element::text("hi").id("t"));

    let buf = render(&root, 6, 1);

    assert_eq!(buf.row_text(0), "hi    ");
    assert_eq!(buf.get(0, 0).unwrap().bg, RED);
}

#[test]
fn test_text_align_right() {
    let root = Element::text("ab")
        .id("t")
        .width(Size::Fixed(5))
        .text_align(TextAlign::Right);

    let buf = render(&root, 5, 1);

    assert_eq!(buf.row_text(0), "   ab");
}

#[test]
fn test_text_truncates_with_ellipsis() {
    let root = Element::text("abcdef").id("t").width(Size::Fixed(4));

    let buf = render(&root, 6, 1);

    assert_eq!(buf.row_text(0), "abc…  ");
}

#[test]
fn test_wide_chars_mark_continuation() {
    let root = Element::text("日本").id("t").width(Size::Fixed(4));

    let buf = render(&root, 4, 1);

    assert_eq!(buf.get(0, 0).unwrap().symbol, '日');
    assert!(buf.get(1, 0).unwrap().continuation);
    assert_eq!(buf.row_text(0), "日本");
}

// ============================================================================
// Stylesheet
// ============================================================================

#[test]
fn test_class_rule_applies() {
    let sheet = Stylesheet::new().rule("warn", Style::new().foreground(Color::rgb(255, 255, 0)).bold());
    let root = Element::text("hi").id("t").class("warn");

    let buf = render_with(&root, 2, 1, &sheet);

    let cell = buf.get(0, 0).unwrap();
    assert_eq!(cell.fg, Rgb::new(255, 255, 0));
    assert!(cell.attrs.bold);
}

#[test]
fn test_inline_style_beats_class_rule() {
    let sheet = Stylesheet::new().rule("warn", Style::new().foreground(Color::rgb(255, 255, 0)));
    let root = Element::text("hi")
        .id("t")
        .class("warn")
        .style(Style::new().foreground(Color::rgb(0, 0, 255)));

    let buf = render_with(&root, 2, 1, &sheet);

    assert_eq!(buf.get(0, 0).unwrap().fg, Rgb::new(0, 0, 255));
}

// ============================================================================
// Animated Width
// ============================================================================

fn animated_bar() -> Element {
    Element::row()
        .id("track")
        .width(Size::Fixed(20))
        .height(Size::Fixed(1))
        .child(
            Element::box_()
                .id("bar")
                .width(Size::Percent(0.5))
                .height(Size::Fixed(1))
                .initial(Initial::new().width(Size::Percent(0.0)))
                .transitions(
                    Transitions::new()
                        .width(TransitionConfig::new(Duration::from_secs(1), Easing::Linear)),
                )
                .style(Style::new().background(Color::rgb(0, 255, 0))),
        )
}

fn render_at(root: &Element, animation: &AnimationState, now: Instant) -> Buffer {
    let layout = tuidom::layout::layout(root, Rect::new(0, 0, 20, 1));
    let mut buf = Buffer::new(20, 1);
    tuidom::render::render_to_buffer_at(root, &layout, &mut buf, animation, &Stylesheet::new(), now);
    buf
}

fn green_cells(buf: &Buffer) -> usize {
    (0..buf.width())
        .filter(|&x| buf.get(x, 0).unwrap().bg == GREEN)
        .count()
}

#[test]
fn test_bar_grows_from_initial_width() {
    let root = animated_bar();
    let mut animation = AnimationState::new();
    let t0 = Instant::now();
    animation.update_at(&root, t0);

    assert_eq!(green_cells(&render_at(&root, &animation, t0)), 0);
    assert_eq!(
        green_cells(&render_at(&root, &animation, t0 + Duration::from_millis(500))),
        5
    );
    assert_eq!(
        green_cells(&render_at(&root, &animation, t0 + Duration::from_secs(1))),
        10
    );
}

#[test]
fn test_bar_without_animation_renders_target_width() {
    let root = animated_bar();
    let animation = AnimationState::new();

    assert_eq!(green_cells(&render_at(&root, &animation, Instant::now())), 10);
}
