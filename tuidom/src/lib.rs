pub mod animation;
pub mod buffer;
pub mod element;
pub mod event;
pub mod hit;
pub mod layout;
pub mod render;
pub mod stylesheet;
pub mod terminal;
pub mod text;
pub mod transitions;
pub mod types;

pub use buffer::Buffer;
pub use element::{Element, Initial};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use hit::{hit_path, hit_test};
pub use layout::{LayoutResult, Rect};
pub use stylesheet::Stylesheet;
pub use terminal::Terminal;
pub use transitions::{Easing, TransitionConfig, Transitions};
pub use types::*;
