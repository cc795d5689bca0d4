//! Bar list: one labeled horizontal bar per data point.

mod series;
mod style;

pub use series::{BarListSeries, BarListSeriesProps, ItemCallback};
pub use style::{
    default_stylesheet, BAR, BAR_LIST, CLICKABLE, ITEM, LABEL, OUTER_BAR, VALUE,
};
