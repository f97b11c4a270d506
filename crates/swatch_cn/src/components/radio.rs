//! Radio button and radio group
//!
//! A [`RadioButton`] only ever checks itself. Unchecking happens when its
//! owner pushes `checked = false`, which is what [`RadioGroup`] does for every
//! sibling after a selection.
//!
//! # Example
//!
//! ```rust
//! use swatch_cn::prelude::*;
//!
//! let mut size = cn::radio_group("size")
//!     .option("sm", "Small")
//!     .option("md", "Medium")
//!     .option("lg", "Large")
//!     .horizontal()
//!     .on_change(|value| println!("Selected: {value}"));
//!
//! assert!(size.click("md"));
//! assert_eq!(size.get_selected(), Some("md"));
//!
//! // Re-selecting is a no-op
//! assert!(!size.click("md"));
//! ```

use std::sync::Arc;

use swatch_core::{CheckState, ControlMachine, RadioState};
use swatch_theme::TokenResolver;

use super::shared::{
    centered_overlay, control_wrapper, focus_outline, selectable_border, selectable_container,
    selectable_input, selectable_label, ChangeCallback,
};
use super::Render;
use crate::element::Element;
use crate::style::Style;

/// Radio button size variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RadioSize {
    /// 16px circle
    Small,
    /// 20px circle
    #[default]
    Medium,
    /// 24px circle
    Large,
}

impl RadioSize {
    fn outer_size(&self) -> u32 {
        match self {
            RadioSize::Small => 16,
            RadioSize::Medium => 20,
            RadioSize::Large => 24,
        }
    }

    fn inner_size(&self) -> u32 {
        match self {
            RadioSize::Small => 6,
            RadioSize::Medium => 8,
            RadioSize::Large => 10,
        }
    }

    fn font_size(&self) -> &'static str {
        match self {
            RadioSize::Small => "sm",
            RadioSize::Medium => "base",
            RadioSize::Large => "lg",
        }
    }
}

/// Layout direction for radio options
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RadioLayout {
    /// Options stacked vertically (default)
    #[default]
    Vertical,
    /// Options arranged horizontally
    Horizontal,
}

// ============================================================================
// RadioButton
// ============================================================================

/// A single radio button
#[derive(Clone)]
pub struct RadioButton {
    controlled_checked: Option<bool>,
    default_checked: Option<bool>,
    machine: ControlMachine<RadioState>,
    size: RadioSize,
    label: Option<String>,
    description: Option<String>,
    name: Option<String>,
    value: String,
    error: bool,
    disabled: bool,
    full_width: bool,
    highlighted: bool,
    focused: bool,
    class_name: Option<String>,
    style: Style,
    on_change: Option<ChangeCallback>,
}

impl RadioButton {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            controlled_checked: None,
            default_checked: None,
            machine: ControlMachine::default(),
            size: RadioSize::default(),
            label: None,
            description: None,
            name: None,
            value: value.into(),
            error: false,
            disabled: false,
            full_width: false,
            highlighted: false,
            focused: false,
            class_name: None,
            style: Style::new(),
            on_change: None,
        }
    }

    fn reinit(mut self) -> Self {
        let state = RadioState::new(self.controlled_checked, self.default_checked);
        self.machine = ControlMachine::new(state);
        self
    }

    /// Controlled checked value
    pub fn checked(mut self, checked: bool) -> Self {
        self.controlled_checked = Some(checked);
        self.reinit()
    }

    /// Initial checked value when uncontrolled
    pub fn default_checked(mut self, checked: bool) -> Self {
        self.default_checked = Some(checked);
        self.reinit()
    }

    pub fn size(mut self, size: RadioSize) -> Self {
        self.size = size;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Secondary text under the label
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Group name shared with sibling radios
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn error(mut self, error: bool) -> Self {
        self.error = error;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        if disabled {
            self.highlighted = false;
        }
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

    /// Extra declarations merged over the container style
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Called with `true` when the user selects this radio
    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.on_change = Some(Arc::new(callback));
        self
    }

    // =========================================================================
    // State
    // =========================================================================

    pub fn get_value(&self) -> &str {
        &self.value
    }

    pub fn get_label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn state(&self) -> RadioState {
        self.machine.state()
    }

    pub fn visual(&self) -> CheckState {
        self.machine.visual()
    }

    pub fn is_checked(&self) -> bool {
        self.machine.state().checked()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Whether the border is currently highlighted by hover or focus
    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    pub fn machine(&self) -> &ControlMachine<RadioState> {
        &self.machine
    }

    /// Push a new controlled checked value
    ///
    /// Applied only when it differs from the previously supplied value.
    pub fn set_checked(&mut self, checked: bool) {
        if self.controlled_checked == Some(checked) {
            return;
        }
        self.controlled_checked = Some(checked);
        self.machine.external(Some(checked));
    }

    /// Push a controlled value even if it matches the last one supplied
    pub(crate) fn force_checked(&mut self, checked: bool) {
        self.controlled_checked = Some(checked);
        self.machine.external(Some(checked));
    }

    /// User activation; returns `Some(true)` when this radio became checked
    pub fn click(&mut self) -> Option<bool> {
        let checked = self.machine.interact(self.disabled)?;
        tracing::debug!(value = %self.value, "radio selected");
        if let Some(callback) = &self.on_change {
            callback(checked);
        }
        Some(checked)
    }

    /// Take focus; disabled radios cannot be focused
    pub fn focus(&mut self) {
        if !self.disabled {
            self.focused = true;
            self.highlighted = true;
        }
    }

    pub fn blur(&mut self) {
        self.focused = false;
        self.highlighted = false;
    }

    /// Pointer entered or left; ignored while disabled
    pub fn hover(&mut self, hovered: bool) {
        if !self.disabled {
            self.highlighted = hovered;
        }
    }

    fn render_text(&self, tokens: &TokenResolver) -> Option<Element> {
        if self.label.is_none() && self.description.is_none() {
            return None;
        }

        let label = self.label.as_ref().map(|text| {
            Element::new("span")
                .attr("data-part", "label")
                .style(selectable_label(tokens, self.size.font_size(), self.disabled))
                .text(text.clone())
        });
        let description = self.description.as_ref().map(|text| {
            Element::new("span")
                .attr("data-part", "description")
                .style(
                    Style::new()
                        .set("font-size", tokens.small_font_size())
                        .set("color", tokens.resolve_color("text", Some("secondary")))
                        .set("cursor", super::shared::cursor(self.disabled))
                        .set("user-select", "none")
                        .set("line-height", "1.2")
                        .set("margin", "0")
                        .set("padding", "0")
                        .set("display", "block"),
                )
                .text(text.clone())
        });

        Some(
            Element::new("span")
                .style(
                    Style::new()
                        .set("display", "flex")
                        .set("flex-direction", "column")
                        .set("gap", tokens.resolve_spacing(1))
                        .set("flex", "1"),
                )
                .child_opt(label)
                .child_opt(description),
        )
    }
}

impl Render for RadioButton {
    fn render(&self, tokens: &TokenResolver) -> Element {
        let checked = self.is_checked();

        let mut input_style = selectable_input(self.size.outer_size(), self.disabled)
            .set("border", selectable_border(tokens, self.error, self.highlighted))
            .set("border-radius", "50%")
            .set(
                "background-color",
                if checked {
                    tokens.primary_color(None)
                } else {
                    tokens.resolve_color("background", Some("primary"))
                },
            )
            .set("box-sizing", "border-box");
        if self.focused {
            input_style = input_style.merge(&focus_outline(tokens));
        }

        let native = Element::new("input")
            .attr("data-part", "control")
            .attr("type", "radio")
            .attr("data-state", if checked { "checked" } else { "unchecked" })
            .attr_opt("name", self.name.clone())
            .attr("value", self.value.clone())
            .flag("checked", checked)
            .flag("disabled", self.disabled)
            .style(input_style);

        let dot = checked.then(|| {
            let side = format!("{}px", self.size.inner_size());
            Element::new("span").attr("data-part", "dot").style(
                centered_overlay()
                    .set("width", side.clone())
                    .set("height", side)
                    .set("border-radius", "50%")
                    .set("background-color", tokens.resolve_color("background", Some("primary"))),
            )
        });

        let control = Element::new("span")
            .style(control_wrapper())
            .child(native)
            .child_opt(dot);

        Element::new("label")
            .class(self.class_name.clone().unwrap_or_default())
            .style(selectable_container(tokens, self.disabled, self.full_width).merge(&self.style))
            .child(control)
            .child_opt(self.render_text(tokens))
    }
}

/// Create a radio button for `value`
pub fn radio(value: impl Into<String>) -> RadioButton {
    RadioButton::new(value)
}

// ============================================================================
// RadioGroup
// ============================================================================

/// A set of radios sharing a name, with at most one selected
///
/// The group owns its radios and acts as their controlling owner: after a
/// radio is selected, every radio receives its new controlled value.
#[derive(Clone)]
pub struct RadioGroup {
    name: String,
    radios: Vec<RadioButton>,
    selected: Option<String>,
    size: RadioSize,
    layout: RadioLayout,
    label: Option<String>,
    disabled: bool,
    error: bool,
    on_change: Option<Arc<dyn Fn(&str) + Send + Sync>>,
}

impl RadioGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            radios: Vec::new(),
            selected: None,
            size: RadioSize::default(),
            layout: RadioLayout::default(),
            label: None,
            disabled: false,
            error: false,
            on_change: None,
        }
    }

    /// Add an option
    pub fn option(self, value: impl Into<String>, label: impl Into<String>) -> Self {
        let radio = radio(value).label(label);
        self.radio(radio)
    }

    /// Add a disabled option
    pub fn option_disabled(self, value: impl Into<String>, label: impl Into<String>) -> Self {
        let radio = radio(value).label(label).disabled(true);
        self.radio(radio)
    }

    /// Add a fully configured radio; it takes the group's name and size
    pub fn radio(mut self, radio: RadioButton) -> Self {
        let checked = self.selected.as_deref() == Some(radio.get_value());
        let radio = radio
            .name(self.name.clone())
            .size(self.size)
            .error(self.error)
            .checked(checked);
        let radio = if self.disabled { radio.disabled(true) } else { radio };
        self.radios.push(radio);
        self
    }

    /// Initial selection
    pub fn selected(mut self, value: impl Into<String>) -> Self {
        self.set_selected(Some(value.into()));
        self
    }

    pub fn size(mut self, size: RadioSize) -> Self {
        self.size = size;
        self.radios = std::mem::take(&mut self.radios)
            .into_iter()
            .map(|radio| radio.size(size))
            .collect();
        self
    }

    pub fn layout(mut self, layout: RadioLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn horizontal(self) -> Self {
        self.layout(RadioLayout::Horizontal)
    }

    pub fn vertical(self) -> Self {
        self.layout(RadioLayout::Vertical)
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self.radios = std::mem::take(&mut self.radios)
            .into_iter()
            .map(|radio| radio.disabled(disabled))
            .collect();
        self
    }

    pub fn error(mut self, error: bool) -> Self {
        self.error = error;
        self.radios = std::mem::take(&mut self.radios)
            .into_iter()
            .map(|radio| radio.error(error))
            .collect();
        self
    }

    /// Set the change callback
    ///
    /// Called when a different option is selected, with the new value.
    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.on_change = Some(Arc::new(callback));
        self
    }

    // =========================================================================
    // State
    // =========================================================================

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn radios(&self) -> &[RadioButton] {
        &self.radios
    }

    pub(crate) fn radio_mut(&mut self, value: &str) -> Option<&mut RadioButton> {
        self.radios.iter_mut().find(|radio| radio.get_value() == value)
    }

    /// Push a selection from outside; `None` clears it
    pub fn set_selected(&mut self, value: Option<String>) {
        self.selected = value;
        self.sync();
    }

    /// Force each radio's controlled value from the current selection
    ///
    /// Forced rather than change-triggered, so a radio whose own state drifted
    /// from its last controlled value is still brought back in line.
    fn sync(&mut self) {
        let selected = self.selected.clone();
        for radio in &mut self.radios {
            let checked = selected.as_deref() == Some(radio.get_value());
            radio.force_checked(checked);
        }
    }

    /// User activates the radio for `value`
    ///
    /// Returns whether the selection changed. `on_change` fires once per
    /// change.
    pub fn click(&mut self, value: &str) -> bool {
        let Some(radio) = self.radio_mut(value) else {
            tracing::debug!(value, "radio group has no such option");
            return false;
        };
        if radio.click().is_none() {
            return false;
        }

        self.selected = Some(value.to_string());
        self.sync();
        if let Some(callback) = &self.on_change {
            callback(value);
        }
        true
    }
}

impl Render for RadioGroup {
    fn render(&self, tokens: &TokenResolver) -> Element {
        let direction = match self.layout {
            RadioLayout::Vertical => "column",
            RadioLayout::Horizontal => "row",
        };

        let options = self.radios.iter().fold(
            Element::new("div").attr("data-part", "options").style(
                Style::new()
                    .set("display", "flex")
                    .set("flex-direction", direction)
                    .set("gap", tokens.resolve_spacing(2)),
            ),
            |options, radio| options.child(radio.render(tokens)),
        );

        let label = self.label.as_ref().map(|text| {
            Element::new("span")
                .attr("data-part", "group-label")
                .style(
                    Style::new()
                        .set("font-size", tokens.small_font_size())
                        .set("font-weight", "500")
                        .set("color", tokens.resolve_color("text", Some("primary"))),
                )
                .text(text.clone())
        });

        Element::new("div")
            .attr("role", "radiogroup")
            .attr("data-name", self.name.clone())
            .attr_opt("aria-disabled", self.disabled.then_some("true"))
            .style(
                Style::new()
                    .set("display", "flex")
                    .set("flex-direction", "column")
                    .set("gap", tokens.resolve_spacing(1)),
            )
            .child_opt(label)
            .child(options)
    }
}

/// Create a radio group; every option shares `name`
pub fn radio_group(name: impl Into<String>) -> RadioGroup {
    RadioGroup::new(name)
}
