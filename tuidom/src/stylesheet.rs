//! Class-based styling.
//!
//! A [`Stylesheet`] maps class names to [`Style`] rules. An element's
//! computed style layers the rules for its classes in the order the classes
//! were added, then the element's inline style on top.

use std::collections::HashMap;

use crate::element::Element;
use crate::types::Style;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stylesheet {
    rules: HashMap<String, Style>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the rule for `class`.
    pub fn rule(mut self, class: impl Into<String>, style: Style) -> Self {
        self.insert(class, style);
        self
    }

    pub fn insert(&mut self, class: impl Into<String>, style: Style) {
        self.rules.insert(class.into(), style);
    }

    pub fn get(&self, class: &str) -> Option<&Style> {
        self.rules.get(class)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Combine two stylesheets. Rules in `other` replace rules with the same class.
    pub fn extend(mut self, other: Stylesheet) -> Self {
        self.rules.extend(other.rules);
        self
    }

    /// The style an element renders with.
    pub fn computed(&self, element: &Element) -> Style {
        element
            .classes
            .iter()
            .filter_map(|class| self.rules.get(class))
            .fold(Style::default(), |acc, rule| acc.merge(rule))
            .merge(&element.style)
    }
}
