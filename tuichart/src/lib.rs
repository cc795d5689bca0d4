//! Chart series rendered as `tuidom` element trees.
//!
//! A series is a pure function from data and configuration to an
//! [`Element`](tuidom::Element). Interaction callbacks are registered in a
//! [`HandlerRegistry`] keyed by element id, and a [`PointerState`] routes
//! pointer events from the host terminal to them.

pub mod bar_list;
pub mod color;
pub mod data;
pub mod error;
pub mod format;
pub mod handlers;
pub mod motion;

pub use bar_list::{default_stylesheet, BarListSeries, BarListSeriesProps, ItemCallback};
pub use color::{get_color, ColorContext, ColorResolver, ColorScheme};
pub use data::{DataPoint, Metadata};
pub use error::{ChartError, Result};
pub use format::format_value;
pub use handlers::{Handler, HandlerRegistry, ItemEvent, PointerState};
pub use motion::{default_transitions, DEFAULT_TRANSITION};
