use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute, queue,
    style::{Attribute, Color as CtColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use crate::animation::AnimationState;
use crate::buffer::Buffer;
use crate::element::Element;
use crate::event::Event;
use crate::layout::{layout, LayoutResult, Rect};
use crate::render::render_to_buffer;
use crate::stylesheet::Stylesheet;
use crate::text::char_width;
use crate::types::{Rgb, TextStyle};

/// A raw-mode, alternate-screen terminal that redraws only changed cells.
pub struct Terminal {
    stdout: io::Stdout,
    current_buffer: Buffer,
    previous_buffer: Buffer,
    last_layout: LayoutResult,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        let (width, height) = terminal::size()?;

        Ok(Self {
            stdout,
            current_buffer: Buffer::new(width, height),
            previous_buffer: Buffer::new(width, height),
            last_layout: LayoutResult::new(),
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.current_buffer.width(), self.current_buffer.height())
    }

    /// Wait up to `timeout` for input and return every pending event.
    pub fn poll(&self, timeout: Duration) -> io::Result<Vec<Event>> {
        let mut events = Vec::new();

        if event::poll(timeout)? {
            push_event(&mut events, &event::read()?);
            // Drain any additional pending events
            while event::poll(Duration::ZERO)? {
                push_event(&mut events, &event::read()?);
            }
        }

        Ok(events)
    }

    /// Lay out and draw `root`, advancing `animation` to the new tree first.
    pub fn render(
        &mut self,
        root: &Element,
        animation: &mut AnimationState,
        stylesheet: &Stylesheet,
    ) -> io::Result<&LayoutResult> {
        let (width, height) = terminal::size()?;
        if width != self.current_buffer.width() || height != self.current_buffer.height() {
            self.current_buffer = Buffer::new(width, height);
            self.previous_buffer = Buffer::new(width, height);
            execute!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
        }

        self.current_buffer.clear();

        animation.update(root);
        self.last_layout = layout(root, Rect::from_size(width, height));
        render_to_buffer(
            root,
            &self.last_layout,
            &mut self.current_buffer,
            animation,
            stylesheet,
        );

        self.flush_diff()?;
        std::mem::swap(&mut self.current_buffer, &mut self.previous_buffer);

        Ok(&self.last_layout)
    }

    /// Get the layout from the last render.
    pub fn layout(&self) -> &LayoutResult {
        &self.last_layout
    }

    fn flush_diff(&mut self) -> io::Result<()> {
        let mut last_x = u16::MAX;
        let mut last_y = u16::MAX;
        let mut last_char_width: u16 = 1;
        let mut last_fg = Rgb::new(255, 255, 255);
        let mut last_bg = Rgb::new(0, 0, 0);
        let mut last_style = TextStyle::new();

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;

        for (x, y, cell) in self.current_buffer.changes(&self.previous_buffer) {
            if cell.continuation {
                continue;
            }

            // Move cursor if not sequential (accounting for wide chars)
            if y != last_y || x != last_x.wrapping_add(last_char_width) {
                queue!(self.stdout, cursor::MoveTo(x, y))?;
            }

            if cell.fg != last_fg {
                queue!(self.stdout, SetForegroundColor(ct_color(cell.fg)))?;
                last_fg = cell.fg;
            }

            if cell.bg != last_bg {
                queue!(self.stdout, SetBackgroundColor(ct_color(cell.bg)))?;
                last_bg = cell.bg;
            }

            if cell.attrs != last_style {
                queue!(self.stdout, SetAttribute(Attribute::Reset))?;
                queue!(
                    self.stdout,
                    SetForegroundColor(ct_color(cell.fg)),
                    SetBackgroundColor(ct_color(cell.bg))
                )?;
                for (enabled, attribute) in [
                    (cell.attrs.bold, Attribute::Bold),
                    (cell.attrs.dim, Attribute::Dim),
                    (cell.attrs.italic, Attribute::Italic),
                    (cell.attrs.underline, Attribute::Underlined),
                ] {
                    if enabled {
                        queue!(self.stdout, SetAttribute(attribute))?;
                    }
                }
                last_style = cell.attrs;
            }

            write!(self.stdout, "{}", cell.symbol)?;

            last_x = x;
            last_y = y;
            last_char_width = char_width(cell.symbol).max(1) as u16;
        }

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

fn push_event(events: &mut Vec<Event>, raw: &CrosstermEvent) {
    if let Some(event) = Event::from_crossterm(raw) {
        events.push(event);
    }
}

fn ct_color(rgb: Rgb) -> CtColor {
    CtColor::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
