//! Text input with label, helper text and icon slots
//!
//! Focus is tracked by the component itself: [`Input::focus`] and
//! [`Input::blur`] switch the border to the primary colour and toggle the
//! focus ring. Error and success states take precedence over focus.
//!
//! # Example
//!
//! ```rust
//! use swatch_cn::prelude::*;
//!
//! let mut email = cn::input()
//!     .label("Email")
//!     .placeholder("you@example.com")
//!     .required(true)
//!     .helper_text("We never share it")
//!     .on_change(|value| println!("email: {value}"));
//!
//! email.focus();
//! assert!(email.input("ada@example.com"));
//! assert_eq!(email.value(), "ada@example.com");
//!
//! let element = email.render(&TokenResolver::embedded());
//! assert_eq!(element.find_part("required").map(|e| e.text_content()), Some("*".to_string()));
//! ```

use std::sync::Arc;

use swatch_theme::TokenResolver;

use super::shared::{focus_ring, width, DISABLED_OPACITY};
use super::Render;
use crate::element::{Element, Node};
use crate::style::{compose, Style};

/// Input visual variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputVariant {
    /// Bordered on a solid background
    #[default]
    Default,
    /// Bordered on a transparent background
    Outlined,
    /// Tinted background with a bottom border only
    Filled,
}

impl InputVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            InputVariant::Default => "default",
            InputVariant::Outlined => "outlined",
            InputVariant::Filled => "filled",
        }
    }
}

/// Input size variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputSize {
    /// 32px tall
    Small,
    /// 40px tall
    #[default]
    Medium,
    /// 48px tall
    Large,
}

impl InputSize {
    fn height(&self) -> &'static str {
        match self {
            InputSize::Small => "32px",
            InputSize::Medium => "40px",
            InputSize::Large => "48px",
        }
    }

    /// (vertical, horizontal) spacing keys
    fn padding(&self) -> (u32, u32) {
        match self {
            InputSize::Small => (1, 2),
            InputSize::Medium => (2, 3),
            InputSize::Large => (3, 4),
        }
    }

    fn font_size(&self) -> &'static str {
        match self {
            InputSize::Small => "sm",
            InputSize::Medium => "base",
            InputSize::Large => "lg",
        }
    }
}

/// Text input component
#[derive(Clone)]
pub struct Input {
    value: String,
    placeholder: Option<String>,
    name: Option<String>,
    input_type: String,
    variant: InputVariant,
    size: InputSize,
    error: bool,
    success: bool,
    disabled: bool,
    full_width: bool,
    required: bool,
    label: Option<String>,
    helper_text: Option<String>,
    start_icon: Option<Node>,
    end_icon: Option<Node>,
    class_name: Option<String>,
    style: Style,
    focused: bool,
    on_change: Option<Arc<dyn Fn(&str) + Send + Sync>>,
}

impl Input {
    pub fn new() -> Self {
        Self {
            value: String::new(),
            placeholder: None,
            name: None,
            input_type: "text".to_string(),
            variant: InputVariant::default(),
            size: InputSize::default(),
            error: false,
            success: false,
            disabled: false,
            full_width: false,
            required: false,
            label: None,
            helper_text: None,
            start_icon: None,
            end_icon: None,
            class_name: None,
            style: Style::new(),
            focused: false,
            on_change: None,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Set the initial value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Native `type` attribute (defaults to `text`)
    pub fn input_type(mut self, input_type: impl Into<String>) -> Self {
        self.input_type = input_type.into();
        self
    }

    pub fn variant(mut self, variant: InputVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: InputSize) -> Self {
        self.size = size;
        self
    }

    pub fn error(mut self, error: bool) -> Self {
        self.error = error;
        self
    }

    pub fn success(mut self, success: bool) -> Self {
        self.success = success;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        if disabled {
            self.focused = false;
        }
        self
    }

    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn helper_text(mut self, text: impl Into<String>) -> Self {
        self.helper_text = Some(text.into());
        self
    }

    pub fn start_icon(mut self, icon: impl Into<Node>) -> Self {
        self.start_icon = Some(icon.into());
        self
    }

    pub fn end_icon(mut self, icon: impl Into<Node>) -> Self {
        self.end_icon = Some(icon.into());
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Extra declarations merged over the computed input style
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Called with the new value on every edit
    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.on_change = Some(Arc::new(callback));
        self
    }

    /// Take focus; disabled inputs cannot be focused
    pub fn focus(&mut self) {
        if !self.disabled {
            self.focused = true;
        }
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Apply an edit; returns whether it was accepted
    pub fn input(&mut self, text: impl Into<String>) -> bool {
        if self.disabled {
            tracing::trace!("input edit ignored: disabled");
            return false;
        }
        self.value = text.into();
        if let Some(callback) = &self.on_change {
            callback(&self.value);
        }
        true
    }

    /// Border colour by precedence: error, success, focus, resting
    fn border_color(&self, tokens: &TokenResolver) -> String {
        if self.error {
            tokens.error_color(None)
        } else if self.success {
            tokens.success_color(None)
        } else if self.focused {
            tokens.primary_color(None)
        } else {
            tokens.resolve_color("border", Some("primary"))
        }
    }

    fn input_style(&self, tokens: &TokenResolver) -> Style {
        let border_color = self.border_color(tokens);
        let box_shadow = if self.focused {
            focus_ring(tokens)
        } else {
            "none".to_string()
        };

        let variant = match self.variant {
            InputVariant::Outlined => Style::new()
                .set("border", compose(&["1px", "solid", &border_color]))
                .set("background-color", "transparent"),
            InputVariant::Filled => Style::new()
                .set("border", "none")
                .set("background-color", tokens.resolve_color("background", Some("secondary")))
                .set("border-bottom", compose(&["2px", "solid", &border_color])),
            InputVariant::Default => Style::new()
                .set("border", compose(&["1px", "solid", &border_color]))
                .set("background-color", tokens.resolve_color("background", Some("primary"))),
        }
        .set("box-shadow", box_shadow);

        let (py, px) = self.size.padding();
        let size = Style::new()
            .set(
                "padding",
                compose(&[&tokens.resolve_spacing(py), &tokens.resolve_spacing(px)]),
            )
            .set("font-size", tokens.resolve_font_size(self.size.font_size()))
            .set("height", self.size.height())
            .set("min-height", self.size.height());

        let mut style = Style::new()
            .set("width", width(self.full_width))
            .set("border-radius", tokens.resolve_border_radius("md"))
            .set("color", tokens.resolve_color("text", Some("primary")))
            .set("outline", "none")
            .set("transition", "all 0.2s ease")
            .set("box-sizing", "border-box")
            .set("font-family", "inherit")
            .merge(&variant)
            .merge(&size);

        let icon_padding = icon_padding(tokens);
        if self.start_icon.is_some() {
            style.insert("padding-left", icon_padding.clone());
        }
        if self.end_icon.is_some() {
            style.insert("padding-right", icon_padding);
        }
        if self.disabled {
            style.insert("opacity", DISABLED_OPACITY);
            style.insert("cursor", "not-allowed");
            style.insert(
                "background-color",
                tokens.resolve_color("background", Some("secondary")),
            );
        }

        style.merge(&self.style)
    }

    fn render_label(&self, tokens: &TokenResolver) -> Option<Element> {
        let label = self.label.as_ref()?;
        let required = self.required.then(|| {
            Element::new("span")
                .attr("data-part", "required")
                .style(
                    Style::new()
                        .set("color", tokens.error_color(None))
                        .set("font-size", tokens.small_font_size()),
                )
                .text("*")
        });

        Some(
            Element::new("label")
                .attr("data-part", "label")
                .style(
                    Style::new()
                        .set("font-size", tokens.small_font_size())
                        .set("font-weight", "500")
                        .set("color", tokens.resolve_color("text", Some("primary")))
                        .set("margin-bottom", tokens.resolve_spacing(1))
                        .set("display", "flex")
                        .set("align-items", "center")
                        .set("gap", tokens.resolve_spacing(1)),
                )
                .text(label.clone())
                .child_opt(required),
        )
    }

    fn render_icon(
        &self,
        tokens: &TokenResolver,
        icon: &Node,
        part: &'static str,
        side: &'static str,
    ) -> Element {
        let style = Style::new()
            .set("position", "absolute")
            .set("display", "flex")
            .set("align-items", "center")
            .set("justify-content", "center")
            .set("color", tokens.resolve_color("text", Some("secondary")))
            .set("z-index", "1")
            .set("pointer-events", "none")
            .set(side, tokens.resolve_spacing(2));

        Element::new("div")
            .attr("data-part", part)
            .style(style)
            .child(icon.clone())
    }

    fn render_helper_text(&self, tokens: &TokenResolver) -> Option<Element> {
        let text = self.helper_text.as_ref()?;
        let color = if self.error {
            tokens.error_color(None)
        } else {
            tokens.resolve_color("text", Some("secondary"))
        };

        let error_icon = self
            .error
            .then(|| status_icon(&tokens.error_color(None), "M12 8v4M12 16h.01", "error-icon"));
        let success_icon = self
            .success
            .then(|| status_icon(&tokens.success_color(None), "M9 12l2 2 4-4", "success-icon"));

        Some(
            Element::new("span")
                .attr("data-part", "helper-text")
                .style(
                    Style::new()
                        .set("font-size", tokens.small_font_size())
                        .set("color", color)
                        .set("margin-top", tokens.resolve_spacing(1))
                        .set("display", "flex")
                        .set("align-items", "center")
                        .set("gap", tokens.resolve_spacing(1)),
                )
                .child_opt(error_icon)
                .child_opt(success_icon)
                .text(text.clone()),
        )
    }
}

impl Default for Input {
    fn default() -> Self {
        Self::new()
    }
}

impl Render for Input {
    fn render(&self, tokens: &TokenResolver) -> Element {
        let field = Element::new("input")
            .attr("data-part", "input")
            .attr("type", self.input_type.clone())
            .attr("value", self.value.clone())
            .attr_opt("placeholder", self.placeholder.clone())
            .attr_opt("name", self.name.clone())
            .flag("disabled", self.disabled)
            .flag("required", self.required)
            .attr_opt("aria-invalid", self.error.then_some("true"))
            .attr_opt("data-focused", self.focused.then_some("true"))
            .style(self.input_style(tokens));

        let start_icon = self
            .start_icon
            .as_ref()
            .map(|icon| self.render_icon(tokens, icon, "start-icon", "left"));
        let end_icon = self
            .end_icon
            .as_ref()
            .map(|icon| self.render_icon(tokens, icon, "end-icon", "right"));

        let field_row = Element::new("div")
            .style(
                Style::new()
                    .set("position", "relative")
                    .set("display", "flex")
                    .set("align-items", "center"),
            )
            .child_opt(start_icon)
            .child(field)
            .child_opt(end_icon);

        Element::new("div")
            .class(self.class_name.clone().unwrap_or_default())
            .style(
                Style::new()
                    .set("display", "flex")
                    .set("flex-direction", "column")
                    .set("width", width(self.full_width)),
            )
            .child_opt(self.render_label(tokens))
            .child(field_row)
            .child_opt(self.render_helper_text(tokens))
    }
}

/// Padding that clears a 24px icon
fn icon_padding(tokens: &TokenResolver) -> String {
    let gap = tokens.resolve_spacing(3);
    if gap.is_empty() {
        return String::new();
    }
    format!("calc({gap} + 24px)")
}

fn status_icon(fill: &str, path: &str, part: &'static str) -> Element {
    Element::new("svg")
        .attr("data-part", part)
        .attr("width", "16")
        .attr("height", "16")
        .attr("viewBox", "0 0 24 24")
        .attr("fill", "none")
        .child(
            Element::new("circle")
                .attr("cx", "12")
                .attr("cy", "12")
                .attr("r", "10")
                .attr("fill", fill.to_string()),
        )
        .child(
            Element::new("path")
                .attr("d", path.to_string())
                .attr("stroke", "white")
                .attr("stroke-width", "2")
                .attr("stroke-linecap", "round"),
        )
}

/// Create an empty text input
pub fn input() -> Input {
    Input::new()
}
