use tuidom::{Color, Style, Stylesheet};

pub const BAR_LIST: &str = "bar-list";
pub const ITEM: &str = "bar-list-item";
pub const CLICKABLE: &str = "bar-list-clickable";
pub const LABEL: &str = "bar-list-label";
pub const VALUE: &str = "bar-list-value";
pub const BAR: &str = "bar-list-bar";
pub const OUTER_BAR: &str = "bar-list-outer-bar";

/// Rules for the default bar list classes. Hosts extend this with rules for
/// their own class names.
pub fn default_stylesheet() -> Stylesheet {
    Stylesheet::new()
        .rule(ITEM, Style::new())
        .rule(CLICKABLE, Style::new().background(Color::oklch(0.2, 0.0, 0.0)))
        .rule(LABEL, Style::new().foreground(Color::oklch(0.9, 0.0, 0.0)))
        .rule(VALUE, Style::new().foreground(Color::oklch(0.75, 0.0, 0.0)).bold())
        .rule(OUTER_BAR, Style::new().background(Color::oklch(0.27, 0.0, 0.0)))
        .rule(BAR, Style::new())
}
