mod color;
mod edges;
mod enums;
mod style;

pub use color::{Color, Rgb};
pub use edges::Edges;
pub use enums::{Align, Direction, Size, TextAlign, TextStyle};
pub use style::Style;
