use std::time::Instant;

use crate::animation::{AnimationState, PropertyValue, TransitionProperty};
use crate::buffer::Buffer;
use crate::element::{Content, Element};
use crate::layout::{percent_of, LayoutResult, Rect};
use crate::stylesheet::Stylesheet;
use crate::text::{char_width, display_width, truncate_to_width};
use crate::types::{Color, Style, TextAlign};

/// Everything a frame needs besides the tree itself.
struct Frame<'a> {
    layout: &'a LayoutResult,
    animation: &'a AnimationState,
    stylesheet: &'a Stylesheet,
    now: Instant,
    element_count: usize,
}

pub fn render_to_buffer(
    element: &Element,
    layout: &LayoutResult,
    buf: &mut Buffer,
    animation: &AnimationState,
    stylesheet: &Stylesheet,
) {
    render_to_buffer_at(element, layout, buf, animation, stylesheet, Instant::now());
}

/// Render with animations sampled at `now`.
pub fn render_to_buffer_at(
    element: &Element,
    layout: &LayoutResult,
    buf: &mut Buffer,
    animation: &AnimationState,
    stylesheet: &Stylesheet,
    now: Instant,
) {
    let t0 = Instant::now();
    let mut frame = Frame {
        layout,
        animation,
        stylesheet,
        now,
        element_count: 0,
    };

    render_element(element, None, buf, &mut frame);

    log::debug!(
        "render: elements={} active_transitions={} took={:>6.2}µs",
        frame.element_count,
        animation.active_count(),
        t0.elapsed().as_secs_f64() * 1_000_000.0,
    );
}

fn render_element(element: &Element, parent_inner: Option<Rect>, buf: &mut Buffer, frame: &mut Frame) {
    let Some(&layout_rect) = frame.layout.get(&element.id) else {
        return;
    };
    frame.element_count += 1;

    let rect = animated_rect(element, layout_rect, parent_inner, frame);
    let style = animated_style(element, frame);

    if let Some(bg) = &style.background {
        buf.paint(rect.x, rect.y, rect.width, rect.height, bg.to_rgb());
    }

    let inner = rect.shrink(
        element.padding.top,
        element.padding.right,
        element.padding.bottom,
        element.padding.left,
    );

    match &element.content {
        Content::None => {}
        Content::Text(text) => render_text(text, element, &style, inner, buf),
        Content::Children(children) => {
            for child in children {
                render_element(child, Some(inner), buf, frame);
            }
        }
    }
}

/// The layout rect with any in-flight width transition applied.
fn animated_rect(element: &Element, rect: Rect, parent_inner: Option<Rect>, frame: &Frame) -> Rect {
    let width = match frame
        .animation
        .get_interpolated_at(&element.id, TransitionProperty::Width, frame.now)
    {
        Some(PropertyValue::Percent(p)) => {
            let basis = parent_inner.map_or(rect.width, |r| r.width);
            percent_of(basis, p)
        }
        Some(PropertyValue::U16(n)) => n,
        _ => return rect,
    };

    Rect { width, ..rect }
}

fn animated_style(element: &Element, frame: &Frame) -> Style {
    let mut style = frame.stylesheet.computed(element);
    if let Some(PropertyValue::Color(color)) =
        frame
            .animation
            .get_interpolated_at(&element.id, TransitionProperty::Background, frame.now)
    {
        style.background = Some(color);
    }
    style
}

fn render_text(text: &str, element: &Element, style: &Style, inner: Rect, buf: &mut Buffer) {
    let fg = style.foreground.as_ref().unwrap_or(&Color::WHITE).to_rgb();
    let explicit_bg = style.background.as_ref().map(Color::to_rgb);

    for (line_no, line) in text.lines().enumerate() {
        let y = inner.y + line_no as u16;
        if y >= inner.bottom() {
            break;
        }

        let line = truncate_to_width(line, inner.width as usize);
        let slack = (inner.width as usize).saturating_sub(display_width(&line)) as u16;
        let mut x = match element.text_align {
            TextAlign::Left => inner.x,
            TextAlign::Right => inner.x + slack,
        };

        for ch in line.chars() {
            let width = char_width(ch) as u16;
            if x + width > inner.right() {
                break;
            }

            // Text without its own background keeps whatever is beneath it
            x += buf.put(x, y, ch, fg, explicit_bg, style.text_style);
        }
    }
}
