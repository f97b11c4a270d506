//! Inline style maps
//!
//! A [`Style`] is an ordered set of CSS declarations. Setting a property to an
//! empty value is a no-op, so a token that failed to resolve simply makes no
//! contribution to the rendered style.

use std::fmt;

use indexmap::IndexMap;

/// Ordered CSS declarations
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Style {
    declarations: IndexMap<String, String>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a declaration; empty values are skipped
    pub fn set(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(property, value);
        self
    }

    /// Set a declaration only when `condition` holds
    pub fn set_if(
        self,
        condition: bool,
        property: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        if condition {
            self.set(property, value)
        } else {
            self
        }
    }

    /// In-place form of [`Style::set`]
    pub fn insert(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        if value.trim().is_empty() {
            return;
        }
        self.declarations.insert(property.into(), value);
    }

    pub fn remove(&mut self, property: &str) -> Option<String> {
        self.declarations.shift_remove(property)
    }

    /// Overlay `other` on top of this style; `other` wins on conflicts
    pub fn merge(mut self, other: &Style) -> Self {
        for (property, value) in &other.declarations {
            self.declarations.insert(property.clone(), value.clone());
        }
        self
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations.get(property).map(String::as_str)
    }

    pub fn contains(&self, property: &str) -> bool {
        self.declarations.contains_key(property)
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations
            .iter()
            .map(|(property, value)| (property.as_str(), value.as_str()))
    }

    /// Render as an inline `style` attribute value
    pub fn to_css(&self) -> String {
        self.iter()
            .map(|(property, value)| format!("{property}: {value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

/// Join resolved token parts with spaces, or `""` if any part is missing
///
/// Keeps compound values like `padding: <y> <x>` or `border: 2px solid <c>`
/// from rendering half-resolved.
pub fn compose(parts: &[&str]) -> String {
    if parts.iter().any(|part| part.trim().is_empty()) {
        return String::new();
    }
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_values_make_no_contribution() {
        let style = Style::new().set("color", "").set("margin", "  ").set("padding", "1rem");
        assert_eq!(style.len(), 1);
        assert_eq!(style.get("padding"), Some("1rem"));
        assert!(!style.contains("color"));
    }

    #[test]
    fn merge_overrides_in_place() {
        let base = Style::new().set("color", "red").set("width", "auto");
        let merged = base.merge(&Style::new().set("width", "100%").set("gap", "4px"));
        assert_eq!(merged.to_css(), "color: red; width: 100%; gap: 4px");
    }

    #[test]
    fn compose_requires_every_part() {
        assert_eq!(compose(&["0.5rem", "1rem"]), "0.5rem 1rem");
        assert_eq!(compose(&["2px", "solid", ""]), "");
    }
}
