//! Button component with shadcn-style variants
//!
//! # Example
//!
//! ```rust
//! use swatch_cn::prelude::*;
//!
//! let save = cn::button("Save")
//!     .variant(ButtonVariant::Success)
//!     .size(ButtonSize::Large)
//!     .on_click(|| println!("saved"));
//!
//! let element = save.render(&TokenResolver::embedded());
//! assert!(element.has_class("swatch-button--success"));
//! assert!(save.click());
//!
//! // Loading buttons swallow clicks
//! let busy = cn::button("Saving").loading(true).on_click(|| unreachable!());
//! assert!(!busy.click());
//! ```

use std::sync::Arc;

use swatch_theme::TokenResolver;

use super::shared::{cursor, opacity, transition_all, width};
use super::Render;
use crate::element::Element;
use crate::style::{compose, Style};

const CLASS: &str = "swatch-button";

/// Button visual variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Primary action - solid primary colour
    #[default]
    Primary,
    /// Secondary action - tinted with a border
    Secondary,
    Success,
    Warning,
    /// Destructive action
    Error,
    /// Minimal styling, primary-coloured text
    Ghost,
}

impl ButtonVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Success => "success",
            ButtonVariant::Warning => "warning",
            ButtonVariant::Error => "error",
            ButtonVariant::Ghost => "ghost",
        }
    }

    fn style(self, tokens: &TokenResolver) -> Style {
        let white = || tokens.resolve_color("neutral", Some("white"));
        match self {
            ButtonVariant::Secondary => Style::new()
                .set("background-color", tokens.secondary_color(Some("100")))
                .set("color", tokens.secondary_color(Some("900")))
                .set(
                    "border",
                    compose(&["1px", "solid", &tokens.secondary_color(Some("300"))]),
                ),
            ButtonVariant::Ghost => Style::new()
                .set("background-color", "transparent")
                .set("color", tokens.primary_color(Some("500")))
                .set("border", "1px solid transparent"),
            solid => Style::new()
                .set("background-color", tokens.resolve_color(solid.as_str(), Some("500")))
                .set("color", white()),
        }
    }
}

/// Button size variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    /// Compact (32px min height)
    Small,
    /// Default (40px min height)
    #[default]
    Medium,
    /// Prominent (48px min height)
    Large,
}

impl ButtonSize {
    /// Class suffix (`sm`, `md`, `lg`)
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonSize::Small => "sm",
            ButtonSize::Medium => "md",
            ButtonSize::Large => "lg",
        }
    }

    /// (vertical, horizontal) spacing keys
    fn padding(self) -> (u32, u32) {
        match self {
            ButtonSize::Small => (2, 3),
            ButtonSize::Medium => (3, 4),
            ButtonSize::Large => (4, 6),
        }
    }

    fn font_size(self) -> &'static str {
        match self {
            ButtonSize::Small => "sm",
            ButtonSize::Medium => "base",
            ButtonSize::Large => "lg",
        }
    }

    fn min_height(self) -> &'static str {
        match self {
            ButtonSize::Small => "32px",
            ButtonSize::Medium => "40px",
            ButtonSize::Large => "48px",
        }
    }
}

/// Native `type` attribute
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonType {
    #[default]
    Button,
    Submit,
    Reset,
}

impl ButtonType {
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonType::Button => "button",
            ButtonType::Submit => "submit",
            ButtonType::Reset => "reset",
        }
    }
}

/// Button component
#[derive(Clone)]
pub struct Button {
    children: String,
    variant: ButtonVariant,
    size: ButtonSize,
    button_type: ButtonType,
    disabled: bool,
    loading: bool,
    full_width: bool,
    class_name: Option<String>,
    style: Style,
    on_click: Option<Arc<dyn Fn() + Send + Sync>>,
}

impl Button {
    pub fn new(children: impl Into<String>) -> Self {
        Self {
            children: children.into(),
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            button_type: ButtonType::default(),
            disabled: false,
            loading: false,
            full_width: false,
            class_name: None,
            style: Style::new(),
            on_click: None,
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn button_type(mut self, button_type: ButtonType) -> Self {
        self.button_type = button_type;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Show a busy indicator and swallow clicks
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Extra declarations merged over the computed style
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn on_click<F>(mut self, callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_click = Some(Arc::new(callback));
        self
    }

    pub fn label(&self) -> &str {
        &self.children
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether a click would reach `on_click`
    pub fn is_interactive(&self) -> bool {
        !self.disabled && !self.loading
    }

    /// Activate the button; returns whether `on_click` fired
    pub fn click(&self) -> bool {
        if !self.is_interactive() {
            tracing::trace!(
                disabled = self.disabled,
                loading = self.loading,
                "button click ignored"
            );
            return false;
        }
        match &self.on_click {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }

    /// Composed class list, in a stable order
    pub fn class_names(&self) -> Vec<String> {
        let mut classes = vec![
            CLASS.to_string(),
            format!("{CLASS}--{}", self.variant.as_str()),
            format!("{CLASS}--{}", self.size.as_str()),
        ];
        if self.disabled {
            classes.push(format!("{CLASS}--disabled"));
        }
        if self.loading {
            classes.push(format!("{CLASS}--loading"));
        }
        if self.full_width {
            classes.push(format!("{CLASS}--full-width"));
        }
        if let Some(extra) = self.class_name.as_deref().filter(|c| !c.is_empty()) {
            classes.push(extra.to_string());
        }
        classes
    }

    fn base_style(&self, tokens: &TokenResolver) -> Style {
        let (py, px) = self.size.padding();
        let padding = compose(&[&tokens.resolve_spacing(py), &tokens.resolve_spacing(px)]);

        Style::new()
            .set("border-radius", tokens.resolve_border_radius("md"))
            .set("font-weight", tokens.resolve_font_weight("medium"))
            .set("box-shadow", tokens.resolve_shadow("sm"))
            .set("transition", transition_all(tokens))
            .set("border", "none")
            .set("cursor", cursor(!self.is_interactive()))
            .set("opacity", opacity(self.disabled))
            .set("width", width(self.full_width))
            .set("padding", padding)
            .set("font-size", tokens.resolve_font_size(self.size.font_size()))
            .set("min-height", self.size.min_height())
    }
}

impl Render for Button {
    fn render(&self, tokens: &TokenResolver) -> Element {
        let style = self
            .base_style(tokens)
            .merge(&self.variant.style(tokens))
            .merge(&self.style);

        let loader = self.loading.then(|| {
            Element::new("span")
                .class(format!("{CLASS}__loader"))
                .attr("data-part", "loader")
                .child(
                    Element::new("svg")
                        .class(format!("{CLASS}__spinner"))
                        .attr("viewBox", "0 0 24 24")
                        .child(
                            Element::new("circle")
                                .attr("cx", "12")
                                .attr("cy", "12")
                                .attr("r", "10")
                                .attr("stroke", "currentColor")
                                .attr("stroke-width", "4")
                                .attr("fill", "none"),
                        ),
                )
        });

        let mut element = Element::new("button")
            .attr("type", self.button_type.as_str())
            .flag("disabled", !self.is_interactive())
            .style(style);
        for class in self.class_names() {
            element = element.class(class);
        }
        if self.loading {
            element = element.attr("aria-busy", "true");
        }

        element.child_opt(loader).child(
            Element::new("span")
                .class(format!("{CLASS}__content"))
                .attr("data-part", "content")
                .text(self.children.clone()),
        )
    }
}

/// Create a button with the given label
pub fn button(children: impl Into<String>) -> Button {
    Button::new(children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn tokens() -> TokenResolver {
        TokenResolver::embedded()
    }

    #[test]
    fn default_class_names() {
        assert_eq!(
            button("Go").class_names(),
            vec!["swatch-button", "swatch-button--primary", "swatch-button--md"]
        );
    }

    #[test]
    fn state_class_names_are_appended() {
        let classes = button("Go")
            .variant(ButtonVariant::Ghost)
            .size(ButtonSize::Small)
            .disabled(true)
            .loading(true)
            .full_width(true)
            .class_name("toolbar-action")
            .class_names();
        assert_eq!(
            classes,
            vec![
                "swatch-button",
                "swatch-button--ghost",
                "swatch-button--sm",
                "swatch-button--disabled",
                "swatch-button--loading",
                "swatch-button--full-width",
                "toolbar-action",
            ]
        );
    }

    #[test]
    fn click_fires_only_when_interactive() {
        let clicks = Arc::new(AtomicUsize::new(0));
        let counter = clicks.clone();
        let make = move || {
            let counter = counter.clone();
            button("Go").on_click(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            })
        };

        assert!(make().click());
        assert!(!make().disabled(true).click());
        assert!(!make().loading(true).click());
        assert_eq!(clicks.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn primary_medium_styles() {
        let element = button("Go").render(&tokens());
        let style = element.get_style();
        assert_eq!(style.get("background-color"), Some("#3b82f6"));
        assert_eq!(style.get("color"), Some("#ffffff"));
        assert_eq!(style.get("padding"), Some("0.75rem 1rem"));
        assert_eq!(style.get("min-height"), Some("40px"));
        assert_eq!(style.get("font-weight"), Some("500"));
        assert_eq!(style.get("transition"), Some("all 200ms ease"));
        assert_eq!(style.get("opacity"), Some("1"));
        assert_eq!(element.get_attr("type"), Some("button"));
        assert!(!element.has_attr("disabled"));
    }

    #[test]
    fn secondary_variant_has_border() {
        let style = button("Go")
            .variant(ButtonVariant::Secondary)
            .render(&tokens())
            .get_style()
            .clone();
        assert!(style.get("border").is_some_and(|b| b.starts_with("1px solid #")));
    }

    #[test]
    fn loading_renders_busy_indicator() {
        let element = button("Saving").loading(true).render(&tokens());
        assert!(element.find_part("loader").is_some());
        assert!(element.has_attr("disabled"));
        assert_eq!(element.get_attr("aria-busy"), Some("true"));
        assert_eq!(element.get_style().get("cursor"), Some("not-allowed"));
        // Loading alone does not dim the button
        assert_eq!(element.get_style().get("opacity"), Some("1"));
    }

    #[test]
    fn missing_tokens_drop_declarations() {
        let tokens = TokenResolver::from_json_str(r#"{"spacing": {"3": "0.75rem"}}"#).unwrap();
        let style = button("Go").render(&tokens).get_style().clone();
        assert!(!style.contains("background-color"));
        assert!(!style.contains("padding"));
        assert_eq!(style.get("cursor"), Some("pointer"));
    }
}
