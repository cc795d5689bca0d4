mod flex;
mod rect;

pub(crate) use flex::percent_of;
pub use flex::{layout, LayoutResult};
pub use rect::Rect;
