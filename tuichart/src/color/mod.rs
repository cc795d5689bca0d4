//! Fill color resolution for chart items.

mod schemes;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use tuidom::Color;

use crate::data::DataPoint;
use crate::error::{ChartError, Result};

pub use schemes::{scheme, scheme_names, DEFAULT_SCHEME};

/// User-supplied color function.
pub type ColorResolver = Arc<dyn Fn(&ColorContext<'_>) -> Color + Send + Sync>;

/// How a series picks a color for each item.
#[derive(Clone)]
pub enum ColorScheme {
    /// A built-in palette, cycled by item index.
    Named(String),
    /// An explicit palette, cycled by item index.
    Palette(Vec<Color>),
    /// Color stops spread across the series' value range.
    Gradient(Vec<Color>),
    /// Every item gets the same color.
    Single(Color),
    Custom(ColorResolver),
}

/// Everything a scheme may look at to color one item.
#[derive(Debug, Clone, Copy)]
pub struct ColorContext<'a> {
    /// The full series.
    pub data: &'a [DataPoint],
    pub scheme: &'a ColorScheme,
    /// The item's bar percentage, its `data` field.
    pub value: f64,
    /// The item's position in `data`.
    pub index: usize,
}

impl ColorScheme {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn custom(resolver: impl Fn(&ColorContext<'_>) -> Color + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(resolver))
    }

    /// Build a palette from hex literals.
    pub fn palette_from_hex<S: AsRef<str>>(colors: &[S]) -> Result<Self> {
        colors
            .iter()
            .map(|c| parse_color(c.as_ref()))
            .collect::<Result<Vec<_>>>()
            .map(Self::Palette)
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::Named(DEFAULT_SCHEME.to_string())
    }
}

impl fmt::Debug for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.debug_tuple("Named").field(name).finish(),
            Self::Palette(colors) => f.debug_tuple("Palette").field(colors).finish(),
            Self::Gradient(stops) => f.debug_tuple("Gradient").field(stops).finish(),
            Self::Single(color) => f.debug_tuple("Single").field(color).finish(),
            Self::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

impl PartialEq for ColorScheme {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Named(a), Self::Named(b)) => a == b,
            (Self::Palette(a), Self::Palette(b)) => a == b,
            (Self::Gradient(a), Self::Gradient(b)) => a == b,
            (Self::Single(a), Self::Single(b)) => a == b,
            (Self::Custom(a), Self::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl FromStr for ColorScheme {
    type Err = ChartError;

    /// A built-in scheme name, or a hex color used for every item.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Some(name) = scheme_names().find(|name| name.eq_ignore_ascii_case(s)) {
            return Ok(Self::Named(name.to_string()));
        }
        if s.starts_with('#') {
            return parse_color(s).map(Self::Single);
        }
        Color::from_hex(s)
            .map(Self::Single)
            .ok_or_else(|| ChartError::UnknownColorScheme(s.to_string()))
    }
}

/// Parse a hex color literal such as `#4c86ff` or `#fff`.
pub fn parse_color(input: &str) -> Result<Color> {
    let digits = input.trim().trim_start_matches('#');
    if digits.len() != 3 && digits.len() != 6 {
        return Err(ChartError::InvalidColor {
            input: input.to_string(),
            reason: format!("expected 3 or 6 hex digits, found {}", digits.len()),
        });
    }
    Color::from_hex(digits).ok_or_else(|| ChartError::InvalidColor {
        input: input.to_string(),
        reason: "not a hex number".to_string(),
    })
}

/// Resolve the fill color of one item.
///
/// Index-based schemes cycle through their palette; gradients place the
/// item's value within the min..max of the whole series.
pub fn get_color(ctx: &ColorContext<'_>) -> Color {
    match ctx.scheme {
        ColorScheme::Named(name) => {
            let palette = scheme(name).unwrap_or_else(|| {
                log::warn!("[color] unknown scheme {name:?}, using {DEFAULT_SCHEME}");
                scheme(DEFAULT_SCHEME).unwrap_or_default()
            });
            cycle(palette, ctx.index)
        }
        ColorScheme::Palette(colors) => cycle(colors, ctx.index),
        ColorScheme::Gradient(stops) => gradient(stops, value_position(ctx.data, ctx.value)),
        ColorScheme::Single(color) => color.clone(),
        ColorScheme::Custom(resolver) => resolver(ctx),
    }
}

fn cycle(palette: &[Color], index: usize) -> Color {
    if palette.is_empty() {
        return Color::WHITE;
    }
    palette[index % palette.len()].clone()
}

/// Where `value` sits between the smallest and largest `data` of the series, `0.0..=1.0`.
fn value_position(data: &[DataPoint], value: f64) -> f32 {
    let (min, max) = data
        .iter()
        .map(|d| d.data)
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));

    if !value.is_finite() || max <= min {
        return 0.0;
    }
    ((value - min) / (max - min)).clamp(0.0, 1.0) as f32
}

fn gradient(stops: &[Color], t: f32) -> Color {
    match stops {
        [] => Color::WHITE,
        [only] => only.clone(),
        _ => {
            let segments = (stops.len() - 1) as f32;
            let scaled = t * segments;
            let i = (scaled.floor() as usize).min(stops.len() - 2);
            stops[i].lerp(&stops[i + 1], scaled - i as f32)
        }
    }
}
