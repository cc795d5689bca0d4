//! Interaction callbacks and pointer event routing.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};

use tuidom::{hit_path, Element, Event, LayoutResult, MouseButton};

/// Item-level interactions a series can listen for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemEvent {
    Click,
    MouseEnter,
    MouseLeave,
}

/// A registered callback. Captures whatever item it belongs to.
pub type Handler = Arc<dyn Fn() + Send + Sync>;

/// Registry for item event handlers.
///
/// Maps (element_id, event) to handler closures. Hosts clear it before each
/// render so handlers from the previous tree don't persist.
#[derive(Default, Clone)]
pub struct HandlerRegistry {
    handlers: Arc<RwLock<HashMap<(String, ItemEvent), Handler>>>,
}

impl HandlerRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for an element event, replacing any previous one.
    pub fn register(&self, element_id: &str, event: ItemEvent, handler: Handler) {
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.insert((element_id.to_string(), event), handler);
        }
    }

    /// Get a handler for an element event.
    pub fn get(&self, element_id: &str, event: ItemEvent) -> Option<Handler> {
        self.handlers
            .read()
            .ok()?
            .get(&(element_id.to_string(), event))
            .cloned()
    }

    pub fn has(&self, element_id: &str, event: ItemEvent) -> bool {
        self.get(element_id, event).is_some()
    }

    /// Clear all handlers.
    pub fn clear(&self) {
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.clear();
        }
    }

    pub fn len(&self) -> usize {
        self.handlers.read().map(|h| h.len()).unwrap_or(0)
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("len", &self.len())
            .finish()
    }
}

/// Tracks which elements the pointer is over and turns raw pointer events
/// into item events.
#[derive(Debug, Default, Clone)]
pub struct PointerState {
    /// Ids under the pointer, outermost first.
    hovered: Vec<String>,
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids currently under the pointer, outermost first.
    pub fn hovered(&self) -> &[String] {
        &self.hovered
    }

    pub fn is_hovered(&self, element_id: &str) -> bool {
        self.hovered.iter().any(|id| id == element_id)
    }

    /// Route one event through the tree. Returns how many handlers ran.
    ///
    /// A left click runs the click handler of the deepest element under the
    /// pointer that has one. A move fires leave handlers for elements the
    /// pointer left, deepest first, then enter handlers for elements it
    /// entered, outermost first.
    pub fn dispatch(
        &mut self,
        event: &Event,
        root: &Element,
        layout: &LayoutResult,
        registry: &HandlerRegistry,
    ) -> usize {
        match *event {
            Event::Click {
                x,
                y,
                button: MouseButton::Left,
            } => {
                let path = hit_path(layout, root, x, y);
                let handler = path
                    .iter()
                    .rev()
                    .find_map(|id| registry.get(id, ItemEvent::Click).map(|h| (id, h)));

                match handler {
                    Some((id, handler)) => {
                        log::trace!("[dispatch] click on {id}");
                        handler();
                        1
                    }
                    None => 0,
                }
            }
            Event::MouseMove { x, y } => {
                let path = hit_path(layout, root, x, y);
                self.move_to(path, registry)
            }
            _ => 0,
        }
    }

    /// Pointer left the tree entirely (e.g. the terminal lost focus).
    pub fn leave_all(&mut self, registry: &HandlerRegistry) -> usize {
        self.move_to(Vec::new(), registry)
    }

    fn move_to(&mut self, path: Vec<String>, registry: &HandlerRegistry) -> usize {
        let mut invoked = 0;

        for id in self.hovered.iter().rev().filter(|id| !path.contains(id)) {
            if let Some(handler) = registry.get(id, ItemEvent::MouseLeave) {
                log::trace!("[dispatch] mouse leave {id}");
                handler();
                invoked += 1;
            }
        }

        for id in path.iter().filter(|id| !self.hovered.contains(id)) {
            if let Some(handler) = registry.get(id, ItemEvent::MouseEnter) {
                log::trace!("[dispatch] mouse enter {id}");
                handler();
                invoked += 1;
            }
        }

        self.hovered = path;
        invoked
    }
}
