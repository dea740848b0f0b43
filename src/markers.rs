//! Mode markers on the document root.
//!
//! Markers are always written clear-all-then-set, so whatever stale state the
//! root starts in, exactly one mode is active afterwards.

use std::collections::BTreeMap;

use crate::config::MarkerStrategy;
use crate::theme::ThemePreference;

/// The element carrying mode markers (`<html>` in the browser).
pub trait MarkerTarget {
    fn add_class(&mut self, class: &str);
    fn remove_class(&mut self, class: &str);
    fn has_class(&self, class: &str) -> bool;
    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&mut self, name: &str, value: &str);
    fn remove_attribute(&mut self, name: &str);
}

impl<T: MarkerTarget + ?Sized> MarkerTarget for &mut T {
    fn add_class(&mut self, class: &str) {
        (**self).add_class(class)
    }

    fn remove_class(&mut self, class: &str) {
        (**self).remove_class(class)
    }

    fn has_class(&self, class: &str) -> bool {
        (**self).has_class(class)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        (**self).attribute(name)
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        (**self).set_attribute(name, value)
    }

    fn remove_attribute(&mut self, name: &str) {
        (**self).remove_attribute(name)
    }
}

/// Clear every mode marker, then set the one for `mode`.
pub fn apply_markers<T: MarkerTarget + ?Sized>(
    target: &mut T,
    strategy: MarkerStrategy,
    attribute: &str,
    mode: ThemePreference,
) {
    match strategy {
        MarkerStrategy::Class => {
            for other in ThemePreference::ALL {
                target.remove_class(other.class_marker());
            }
            target.add_class(mode.class_marker());
        }
        MarkerStrategy::Attribute => {
            target.remove_attribute(attribute);
            target.set_attribute(attribute, mode.as_str());
        }
    }
}

/// Every mode whose marker is currently present.
pub fn active_markers<T: MarkerTarget + ?Sized>(
    target: &T,
    strategy: MarkerStrategy,
    attribute: &str,
) -> Vec<ThemePreference> {
    match strategy {
        MarkerStrategy::Class => ThemePreference::ALL
            .into_iter()
            .filter(|mode| target.has_class(mode.class_marker()))
            .collect(),
        MarkerStrategy::Attribute => target
            .attribute(attribute)
            .and_then(|value| ThemePreference::ALL.into_iter().find(|mode| mode.as_str() == value))
            .into_iter()
            .collect(),
    }
}

/// Detached root element for native use.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryRoot {
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
}

impl MemoryRoot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_classes(classes: &[&str]) -> Self {
        let mut root = Self::new();
        for class in classes {
            root.add_class(class);
        }
        root
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }
}

impl MarkerTarget for MemoryRoot {
    fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    fn remove_attribute(&mut self, name: &str) {
        self.attributes.remove(name);
    }
}
