use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use tuidom::text::display_width;
use tuidom::{Element, Initial, Size, Style, TextAlign};

use super::style::{BAR, BAR_LIST, CLICKABLE, ITEM, LABEL, OUTER_BAR, VALUE};
use crate::color::{get_color, ColorContext, ColorScheme};
use crate::data::DataPoint;
use crate::format::format_value;
use crate::handlers::{HandlerRegistry, ItemEvent};
use crate::motion::default_transitions;

/// Callback receiving the data point of the item the event happened on.
pub type ItemCallback = Arc<dyn Fn(&DataPoint) + Send + Sync>;

/// Configuration of a bar list series.
///
/// Class names are appended after the default class of the element they
/// target, so stylesheet rules for them win over the defaults.
#[derive(Clone, Default)]
pub struct BarListSeriesProps {
    /// Defaults to the `cybertron` palette.
    pub color_scheme: ColorScheme,
    pub item_class_name: Option<String>,
    pub label_class_name: Option<String>,
    pub value_class_name: Option<String>,
    pub bar_class_name: Option<String>,
    pub outer_bar_class_name: Option<String>,
    pub on_item_click: Option<ItemCallback>,
    pub on_item_mouse_enter: Option<ItemCallback>,
    pub on_item_mouse_leave: Option<ItemCallback>,
}

impl fmt::Debug for BarListSeriesProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BarListSeriesProps")
            .field("color_scheme", &self.color_scheme)
            .field("item_class_name", &self.item_class_name)
            .field("label_class_name", &self.label_class_name)
            .field("value_class_name", &self.value_class_name)
            .field("bar_class_name", &self.bar_class_name)
            .field("outer_bar_class_name", &self.outer_bar_class_name)
            .field("on_item_click", &self.on_item_click.is_some())
            .field("on_item_mouse_enter", &self.on_item_mouse_enter.is_some())
            .field("on_item_mouse_leave", &self.on_item_mouse_leave.is_some())
            .finish()
    }
}

/// A vertical list of labeled bars, one per data point.
///
/// # Example
///
/// ```
/// use tuichart::{BarListSeries, DataPoint, HandlerRegistry};
///
/// let data = vec![DataPoint::new("A", 40.0, 4.0), DataPoint::new("B", 60.0, 6.0)];
/// let registry = HandlerRegistry::new();
///
/// let tree = BarListSeries::new()
///     .on_item_click(|point| println!("clicked {}", point.key))
///     .render(&data, &registry);
///
/// assert_eq!(tree.child_elements().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct BarListSeries {
    id: String,
    props: BarListSeriesProps,
}

impl Default for BarListSeries {
    fn default() -> Self {
        Self::new()
    }
}

impl BarListSeries {
    pub fn new() -> Self {
        Self::from_props(BarListSeriesProps::default())
    }

    pub fn from_props(props: BarListSeriesProps) -> Self {
        Self {
            id: BAR_LIST.to_string(),
            props,
        }
    }

    /// Prefix for element ids. Give each series on screen its own.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn props(&self) -> &BarListSeriesProps {
        &self.props
    }

    pub fn color_scheme(mut self, scheme: ColorScheme) -> Self {
        self.props.color_scheme = scheme;
        self
    }

    pub fn item_class_name(mut self, class: impl Into<String>) -> Self {
        self.props.item_class_name = Some(class.into());
        self
    }

    pub fn label_class_name(mut self, class: impl Into<String>) -> Self {
        self.props.label_class_name = Some(class.into());
        self
    }

    pub fn value_class_name(mut self, class: impl Into<String>) -> Self {
        self.props.value_class_name = Some(class.into());
        self
    }

    pub fn bar_class_name(mut self, class: impl Into<String>) -> Self {
        self.props.bar_class_name = Some(class.into());
        self
    }

    pub fn outer_bar_class_name(mut self, class: impl Into<String>) -> Self {
        self.props.outer_bar_class_name = Some(class.into());
        self
    }

    pub fn on_item_click(mut self, f: impl Fn(&DataPoint) + Send + Sync + 'static) -> Self {
        self.props.on_item_click = Some(Arc::new(f));
        self
    }

    pub fn on_item_mouse_enter(mut self, f: impl Fn(&DataPoint) + Send + Sync + 'static) -> Self {
        self.props.on_item_mouse_enter = Some(Arc::new(f));
        self
    }

    pub fn on_item_mouse_leave(mut self, f: impl Fn(&DataPoint) + Send + Sync + 'static) -> Self {
        self.props.on_item_mouse_leave = Some(Arc::new(f));
        self
    }

    /// Element id of the row for `key`.
    pub fn item_id(&self, key: &str) -> String {
        format!("{}-item-{key}", self.id)
    }

    /// Build the element tree for `data`, one row per point in input order.
    ///
    /// Handlers are registered in `registry` only for the callbacks that are
    /// set; nothing is registered for absent ones.
    pub fn render(&self, data: &[DataPoint], registry: &HandlerRegistry) -> Element {
        let values: Vec<String> = data
            .iter()
            .map(|point| format_value(point.metadata.value))
            .collect();
        let label_width = column_width(data.iter().map(|point| point.key.as_str()));
        let value_width = column_width(values.iter().map(String::as_str));

        let mut used = HashSet::with_capacity(data.len());
        let mut rows = Vec::with_capacity(data.len());
        let mut registered = 0;

        for (index, (point, value)) in data.iter().zip(values).enumerate() {
            let row_id = self.unique_row_id(&point.key, index, &mut used);

            let fill = get_color(&ColorContext {
                data,
                scheme: &self.props.color_scheme,
                value: point.data,
                index,
            });

            let bar = Element::box_()
                .id(format!("{row_id}-bar"))
                .class(BAR)
                .class_opt(self.props.bar_class_name.as_deref())
                .width(Size::Percent((point.data / 100.0) as f32))
                .height(Size::Fixed(1))
                .initial(Initial::new().width(Size::Percent(0.0)))
                .transitions(default_transitions())
                .style(Style::new().background(fill));

            let outer_bar = Element::box_()
                .id(format!("{row_id}-outer-bar"))
                .class(OUTER_BAR)
                .class_opt(self.props.outer_bar_class_name.as_deref())
                .width(Size::Fill)
                .height(Size::Fixed(1))
                .child(bar);

            let label = Element::text(point.key.clone())
                .id(format!("{row_id}-label"))
                .class(LABEL)
                .class_opt(self.props.label_class_name.as_deref())
                .width(Size::Fixed(label_width));

            let value = Element::text(value)
                .id(format!("{row_id}-value"))
                .class(VALUE)
                .class_opt(self.props.value_class_name.as_deref())
                .width(Size::Fixed(value_width))
                .text_align(TextAlign::Right);

            let clickable = self.props.on_item_click.is_some();
            let mut row = Element::row()
                .id(row_id.clone())
                .class(ITEM)
                .class_opt(self.props.item_class_name.as_deref())
                .role("listitem")
                .width(Size::Fill)
                .gap(1)
                .clickable(clickable)
                .data("key", point.key.clone())
                .children([label, outer_bar, value]);
            if clickable {
                row = row.class(CLICKABLE);
            }

            registered += self.register_handlers(&row_id, point, registry);
            rows.push(row);
        }

        log::debug!(
            "[bar_list] {}: rendered {} rows, {} handlers registered",
            self.id,
            rows.len(),
            registered
        );

        Element::col()
            .id(self.id.clone())
            .class(BAR_LIST)
            .role("list")
            .width(Size::Fill)
            .children(rows)
    }

    /// Row id for `key`. An id already taken by an earlier row gets `-{n}`
    /// appended, counting up from the row's index until the id is free.
    fn unique_row_id(&self, key: &str, index: usize, used: &mut HashSet<String>) -> String {
        let base = self.item_id(key);
        if used.insert(base.clone()) {
            return base;
        }

        log::warn!(
            "[bar_list] {}: key {key:?} at index {index} collides with an earlier row",
            self.id
        );
        let mut n = index;
        loop {
            let candidate = format!("{base}-{n}");
            if used.insert(candidate.clone()) {
                return candidate;
            }
            n += 1;
        }
    }

    /// Register the callbacks that are set. Returns how many were registered.
    fn register_handlers(&self, row_id: &str, point: &DataPoint, registry: &HandlerRegistry) -> usize {
        let callbacks = [
            (ItemEvent::Click, &self.props.on_item_click),
            (ItemEvent::MouseEnter, &self.props.on_item_mouse_enter),
            (ItemEvent::MouseLeave, &self.props.on_item_mouse_leave),
        ];

        let mut count = 0;
        for (event, callback) in callbacks {
            let Some(callback) = callback.clone() else {
                continue;
            };
            let point = point.clone();
            registry.register(row_id, event, Arc::new(move || callback(&point)));
            count += 1;
        }
        count
    }
}

/// Widest entry in columns, so every row lines up.
fn column_width<'a>(entries: impl Iterator<Item = &'a str>) -> u16 {
    let widest = entries.map(display_width).max().unwrap_or(0);
    u16::try_from(widest).unwrap_or(u16::MAX)
}
