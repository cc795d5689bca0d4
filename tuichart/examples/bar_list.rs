use std::fs::File;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use simplelog::{Config, LevelFilter, WriteLogger};
use tuichart::{BarListSeries, ColorScheme, DataPoint, HandlerRegistry, PointerState};
use tuidom::animation::AnimationState;
use tuidom::{Color, Edges, Element, Event, Key, Size, Style, Stylesheet, Terminal};

const SALES: [(&str, f64); 6] = [
    ("Berlin", 1840.0),
    ("Lisbon", 1210.5),
    ("Oslo", 960.0),
    ("Tokyo", 2475.25),
    ("Lima", 430.0),
    ("Nairobi", 1105.0),
];

/// Shared between the item callbacks and the main loop.
#[derive(Default)]
struct Status {
    hovered: Option<String>,
    selected: Option<String>,
}

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("bar_list.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let status = Arc::new(Mutex::new(Status::default()));
    let schemes = ["cybertron", "set1", "set2", "dark2"];
    let mut scheme_index = 0;
    let mut rotation = 0;
    let mut reduced_motion = false;

    let registry = HandlerRegistry::new();
    let stylesheet = tuichart::default_stylesheet().extend(
        Stylesheet::new().rule(
            "amount",
            Style::new().foreground(Color::oklch(0.85, 0.15, 90.0)),
        ),
    );
    let mut animation = AnimationState::new();
    let mut pointer = PointerState::new();
    let mut term = Terminal::new()?;

    loop {
        let scheme: ColorScheme = schemes[scheme_index].parse().unwrap_or_default();
        let data = sales(rotation);

        registry.clear();
        let root = ui(&data, scheme, &status, &registry);
        term.render(&root, &mut animation, &stylesheet)?;

        let timeout = if animation.has_active_transitions() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(250)
        };

        for event in term.poll(timeout)? {
            match event {
                Event::Key {
                    key: Key::Char('q') | Key::Escape,
                    ..
                } => return Ok(()),
                Event::Key {
                    key: Key::Char('r'),
                    ..
                } => rotation += 1,
                Event::Key {
                    key: Key::Char('c'),
                    ..
                } => scheme_index = (scheme_index + 1) % schemes.len(),
                Event::Key {
                    key: Key::Char('m'),
                    ..
                } => {
                    reduced_motion = !reduced_motion;
                    animation.set_reduced_motion(reduced_motion);
                }
                _ => {
                    pointer.dispatch(&event, &root, term.layout(), &registry);
                }
            }
        }
    }
}

/// Sales figures with the values shifted by `rotation`, so bars move on refresh.
fn sales(rotation: usize) -> Vec<DataPoint> {
    let max = SALES.iter().map(|(_, v)| *v).fold(0.0, f64::max);
    (0..SALES.len())
        .map(|i| {
            let (key, _) = SALES[i];
            let (_, value) = SALES[(i + rotation) % SALES.len()];
            DataPoint::new(key, value / max * 100.0, value)
        })
        .collect()
}

fn ui(
    data: &[DataPoint],
    scheme: ColorScheme,
    status: &Arc<Mutex<Status>>,
    registry: &HandlerRegistry,
) -> Element {
    let (hovered, selected) = match status.lock() {
        Ok(s) => (s.hovered.clone(), s.selected.clone()),
        Err(_) => (None, None),
    };

    let on_click = status.clone();
    let on_enter = status.clone();
    let on_leave = status.clone();

    let series = BarListSeries::new()
        .id("sales")
        .color_scheme(scheme)
        .value_class_name("amount")
        .on_item_click(move |point| {
            if let Ok(mut s) = on_click.lock() {
                s.selected = Some(point.key.clone());
            }
        })
        .on_item_mouse_enter(move |point| {
            if let Ok(mut s) = on_enter.lock() {
                s.hovered = Some(point.key.clone());
            }
        })
        .on_item_mouse_leave(move |point| {
            if let Ok(mut s) = on_leave.lock() {
                if s.hovered.as_deref() == Some(point.key.as_str()) {
                    s.hovered = None;
                }
            }
        });

    let footer = format!(
        "hover: {}  selected: {}",
        hovered.as_deref().unwrap_or("-"),
        selected.as_deref().unwrap_or("-"),
    );

    Element::col()
        .width(Size::Fill)
        .height(Size::Fill)
        .padding(Edges::all(1))
        .gap(1)
        .style(Style::new().background(Color::oklch(0.15, 0.01, 250.0)))
        .child(
            Element::text("Sales by city").style(
                Style::new()
                    .bold()
                    .foreground(Color::oklch(0.9, 0.05, 250.0)),
            ),
        )
        .child(series.render(data, registry))
        .child(Element::text(footer))
        .child(
            Element::text("r=refresh  c=colors  m=reduced motion  q=quit")
                .style(Style::new().dim()),
        )
}
