//! Rendered element tree
//!
//! Components render into a small, framework-neutral tree of [`Element`]s.
//! Hosts can walk it directly or serialize it with [`Element::to_html`].
//!
//! Component parts carry a `data-part` attribute (`"check-mark"`,
//! `"indeterminate"`, `"label"`, ...) so callers can locate them with
//! [`Element::find_part`] without depending on tree shape.

use std::fmt::Write as _;

use indexmap::IndexMap;

use crate::style::Style;

/// A child of an [`Element`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

/// A rendered element: tag, attributes, classes, inline style and children
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    tag: &'static str,
    attrs: IndexMap<&'static str, String>,
    classes: Vec<String>,
    style: Style,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: IndexMap::new(),
            classes: Vec::new(),
            style: Style::new(),
            children: Vec::new(),
        }
    }

    // =========================================================================
    // Builder
    // =========================================================================

    /// Set an attribute
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.insert(name, value.into());
        self
    }

    /// Set an attribute if a value is present
    pub fn attr_opt(self, name: &'static str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    /// Boolean attribute: present (with an empty value) when `on`
    pub fn flag(mut self, name: &'static str, on: bool) -> Self {
        if on {
            self.attrs.insert(name, String::new());
        }
        self
    }

    /// Add a class; empty names are ignored
    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        for name in class.split_whitespace() {
            self.classes.push(name.to_string());
        }
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = self.style.merge(&style);
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Add a child only if present
    pub fn child_opt(self, child: Option<impl Into<Node>>) -> Self {
        match child {
            Some(child) => self.child(child),
            None => self,
        }
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Space-separated class list
    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }

    pub fn get_style(&self) -> &Style {
        &self.style
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Depth-first search, including `self`
    pub fn find(&self, predicate: &dyn Fn(&Element) -> bool) -> Option<&Element> {
        if predicate(self) {
            return Some(self);
        }
        self.children.iter().find_map(|child| match child {
            Node::Element(element) => element.find(predicate),
            Node::Text(_) => None,
        })
    }

    /// Find the element marked with `data-part="<part>"`
    pub fn find_part(&self, part: &str) -> Option<&Element> {
        self.find(&|element: &Element| element.get_attr("data-part") == Some(part))
    }

    /// First element with the given tag
    pub fn find_tag(&self, tag: &str) -> Option<&Element> {
        self.find(&|element: &Element| element.tag == tag)
    }

    /// Concatenated text of this element and its descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(text) => out.push_str(text),
                Node::Element(element) => element.collect_text(out),
            }
        }
    }

    // =========================================================================
    // Serialization
    // =========================================================================

    /// Serialize as HTML markup
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        let _ = write!(out, "<{}", self.tag);
        if !self.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", escape(&self.class_name()));
        }
        for (name, value) in &self.attrs {
            if value.is_empty() {
                let _ = write!(out, " {name}");
            } else {
                let _ = write!(out, " {name}=\"{}\"", escape(value));
            }
        }
        if !self.style.is_empty() {
            let _ = write!(out, " style=\"{}\"", escape(&self.style.to_css()));
        }

        if is_void(self.tag) {
            out.push_str(" />");
            return;
        }
        out.push('>');
        for child in &self.children {
            match child {
                Node::Text(text) => out.push_str(&escape(text)),
                Node::Element(element) => element.write_html(out),
            }
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

fn is_void(tag: &str) -> bool {
    matches!(tag, "input" | "path" | "circle" | "br")
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn finds_parts_depth_first() {
        let tree = Element::new("label")
            .child(Element::new("span").attr("data-part", "control").child(
                Element::new("svg").attr("data-part", "check-mark"),
            ))
            .child(Element::new("span").attr("data-part", "label").text("Accept"));

        assert_eq!(tree.find_part("check-mark").map(Element::tag), Some("svg"));
        assert!(tree.find_part("indeterminate").is_none());
        assert_eq!(tree.text_content(), "Accept");
    }

    #[test]
    fn serializes_to_html() {
        let element = Element::new("input")
            .class("swatch-input  swatch-input--error")
            .attr("type", "text")
            .flag("disabled", true)
            .flag("required", false)
            .style(Style::new().set("color", "#ef4444"));

        assert_eq!(
            element.to_html(),
            concat!(
                "<input class=\"swatch-input swatch-input--error\" type=\"text\" disabled",
                " style=\"color: #ef4444\" />"
            )
        );
    }

    #[test]
    fn escapes_text() {
        let element = Element::new("span").text("a < b & \"c\"");
        assert_eq!(element.to_html(), "<span>a &lt; b &amp; &quot;c&quot;</span>");
    }
}
