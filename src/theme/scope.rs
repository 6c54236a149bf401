//! Global style scope the active theme is written into

use indexmap::IndexMap;
use serde::Serialize;

/// A key/value surface read by the presentation layer, the equivalent of
/// custom properties and attributes on the document root.
pub trait StyleScope {
    /// Remove every property and attribute
    fn clear(&mut self);

    fn set_property(&mut self, name: &str, value: &str);

    fn set_attribute(&mut self, name: &str, value: &str);
}

/// In-memory style scope that can render itself as CSS
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StyleSheet {
    properties: IndexMap<String, String>,
    attributes: IndexMap<String, String>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Properties in the order they were set
    pub fn properties(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty() && self.attributes.is_empty()
    }

    /// Render as a single `:root` rule, qualified by the root's attributes
    pub fn to_css(&self) -> String {
        let mut selector = ":root".to_string();
        for (name, value) in &self.attributes {
            selector.push_str(&format!("[{}=\"{}\"]", name, value));
        }

        let mut css = format!("{} {{\n", selector);
        for (name, value) in &self.properties {
            css.push_str(&format!("  {}: {};\n", name, value));
        }
        css.push_str("}\n");
        css
    }
}

impl StyleScope for StyleSheet {
    fn clear(&mut self) {
        self.properties.clear();
        self.attributes.clear();
    }

    fn set_property(&mut self, name: &str, value: &str) {
        self.properties.insert(name.to_string(), value.to_string());
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }
}
