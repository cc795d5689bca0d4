use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

use crate::element::Element;
use crate::transitions::{Easing, TransitionConfig};
use crate::types::{Color, Size};

/// Which property is being transitioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionProperty {
    Width,
    Background,
}

/// A property value that can be interpolated.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    U16(u16),
    /// Fraction of the parent's size, as in `Size::Percent`.
    Percent(f32),
    Color(Color),
}

impl PropertyValue {
    fn from_size(size: Size) -> Option<Self> {
        match size {
            Size::Fixed(n) => Some(Self::U16(n)),
            Size::Percent(p) => Some(Self::Percent(p)),
            Size::Fill | Size::Auto => None,
        }
    }
}

/// Snapshot of an element's transitionable properties.
#[derive(Debug, Clone, Default)]
struct ElementSnapshot {
    width: Option<PropertyValue>,
    background: Option<PropertyValue>,
}

/// A single active transition.
#[derive(Debug, Clone)]
struct ActiveTransition {
    from: PropertyValue,
    to: PropertyValue,
    start: Instant,
    duration: Duration,
    easing: Easing,
}

impl ActiveTransition {
    fn value_at(&self, now: Instant) -> PropertyValue {
        let elapsed = now.saturating_duration_since(self.start);
        let progress = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        };
        interpolate(&self.from, &self.to, self.easing.apply(progress))
    }
}

/// Manages animation state across frames.
///
/// Elements are matched between frames by id, so ids must be stable for
/// an element to animate rather than pop.
#[derive(Debug, Default)]
pub struct AnimationState {
    /// Previous frame's property values per element.
    snapshots: HashMap<String, ElementSnapshot>,
    /// Currently active transitions: (element_id, property) -> transition.
    active: HashMap<(String, TransitionProperty), ActiveTransition>,
    /// Reduced motion flag - when true, transitions complete instantly.
    reduced_motion: bool,
}

impl AnimationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable reduced motion (accessibility).
    /// When enabled, all transitions complete instantly.
    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.reduced_motion = enabled;
    }

    /// Returns true if any transition is currently active.
    pub fn has_active_transitions(&self) -> bool {
        !self.active.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Update animation state based on current element tree.
    pub fn update(&mut self, root: &Element) {
        self.update_at(root, Instant::now());
    }

    /// Update against the tree as of `now`: prunes finished transitions,
    /// starts new ones for changed or newly mounted elements, and forgets
    /// elements that left the tree.
    pub fn update_at(&mut self, root: &Element, now: Instant) {
        self.active
            .retain(|_, transition| now.saturating_duration_since(transition.start) < transition.duration);

        self.update_element(root, now);

        let ids = collect_element_ids(root);
        self.cleanup(&ids);
    }

    fn update_element(&mut self, element: &Element, now: Instant) {
        let id = &element.id;
        let current = ElementSnapshot {
            width: PropertyValue::from_size(element.width),
            background: element.style.background.clone().map(PropertyValue::Color),
        };
        let transitions = &element.transitions;

        match self.snapshots.get(id).cloned() {
            Some(prev) => {
                self.start_if_changed(
                    id,
                    TransitionProperty::Width,
                    prev.width,
                    current.width.clone(),
                    transitions.width,
                    now,
                );
                self.start_if_changed(
                    id,
                    TransitionProperty::Background,
                    prev.background,
                    current.background.clone(),
                    transitions.background,
                    now,
                );
            }
            None => {
                // First appearance: animate from the declared initial values
                let initial = element.initial.width.and_then(PropertyValue::from_size);
                if initial.is_some() {
                    log::trace!("[animation] mounting {id} from initial width {initial:?}");
                }
                self.start_if_changed(
                    id,
                    TransitionProperty::Width,
                    initial,
                    current.width.clone(),
                    transitions.width,
                    now,
                );
            }
        }

        self.snapshots.insert(id.clone(), current);

        for child in element.child_elements() {
            self.update_element(child, now);
        }
    }

    fn start_if_changed(
        &mut self,
        id: &str,
        property: TransitionProperty,
        prev: Option<PropertyValue>,
        current: Option<PropertyValue>,
        config: Option<TransitionConfig>,
        now: Instant,
    ) {
        let Some(config) = config else { return };
        let Some(prev_val) = prev else { return };
        let Some(curr_val) = current else { return };

        if prev_val == curr_val {
            return;
        }

        // Skip if reduced motion is enabled
        if self.reduced_motion {
            return;
        }

        let key = (id.to_string(), property);

        // Retarget from the in-flight value so the motion stays continuous
        let from = match self.active.get(&key) {
            Some(existing) => existing.value_at(now),
            None => prev_val,
        };

        self.active.insert(
            key,
            ActiveTransition {
                from,
                to: curr_val,
                start: now,
                duration: config.duration,
                easing: config.easing,
            },
        );
    }

    /// Get interpolated value for a property.
    /// Returns None if no active transition for this property.
    pub fn get_interpolated(
        &self,
        element_id: &str,
        property: TransitionProperty,
    ) -> Option<PropertyValue> {
        self.get_interpolated_at(element_id, property, Instant::now())
    }

    pub fn get_interpolated_at(
        &self,
        element_id: &str,
        property: TransitionProperty,
        now: Instant,
    ) -> Option<PropertyValue> {
        let key = (element_id.to_string(), property);
        self.active.get(&key).map(|transition| transition.value_at(now))
    }

    /// Remove transitions and snapshots for elements no longer in tree.
    pub fn cleanup(&mut self, current_ids: &HashSet<String>) {
        self.snapshots.retain(|id, _| current_ids.contains(id));
        self.active.retain(|(id, _), _| current_ids.contains(id));
    }
}

fn interpolate(from: &PropertyValue, to: &PropertyValue, t: f32) -> PropertyValue {
    match (from, to) {
        (PropertyValue::U16(from_val), PropertyValue::U16(to_val)) => {
            PropertyValue::U16(lerp_u16(*from_val, *to_val, t))
        }
        (PropertyValue::Percent(from_val), PropertyValue::Percent(to_val)) => {
            PropertyValue::Percent(from_val + (to_val - from_val) * t)
        }
        (PropertyValue::Color(from_color), PropertyValue::Color(to_color)) => {
            PropertyValue::Color(from_color.lerp(to_color, t))
        }
        _ => to.clone(), // Mismatched types, just use target
    }
}

/// Linear interpolation for u16 values.
fn lerp_u16(from: u16, to: u16, t: f32) -> u16 {
    let from = from as f32;
    let to = to as f32;
    (from + (to - from) * t).round() as u16
}

/// Collect all element IDs from the tree.
pub fn collect_element_ids(element: &Element) -> HashSet<String> {
    let mut ids = HashSet::new();
    collect_ids_recursive(element, &mut ids);
    ids
}

fn collect_ids_recursive(element: &Element, ids: &mut HashSet<String>) {
    ids.insert(element.id.clone());
    for child in element.child_elements() {
        collect_ids_recursive(child, ids);
    }
}
