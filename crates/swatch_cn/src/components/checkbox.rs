//! Checkbox component with an indeterminate state
//!
//! State is reconciled by [`ControlState`]: the owner's `checked` and
//! `indeterminate` values win whenever they change, clicks toggle the
//! control otherwise. The indeterminate bar takes precedence over the check
//! mark, and the next click always leaves the indeterminate state.
//!
//! # Example
//!
//! ```rust
//! use swatch_cn::prelude::*;
//!
//! let mut select_all = cn::checkbox()
//!     .label("Select all")
//!     .indeterminate(true)
//!     .on_change(|checked| println!("select all: {checked}"));
//!
//! assert_eq!(select_all.visual(), CheckState::Indeterminate);
//! assert_eq!(select_all.click(), Some(true));
//! assert_eq!(select_all.visual(), CheckState::Checked);
//! ```

use std::sync::Arc;

use swatch_core::{CheckState, ControlInit, ControlMachine, ControlState, ExternalValue};
use swatch_theme::TokenResolver;

use super::shared::{
    centered_overlay, control_wrapper, focus_outline, selectable_border, selectable_container,
    selectable_input, selectable_label, ChangeCallback,
};
use super::Render;
use crate::element::Element;
use crate::style::Style;

/// Checkbox size variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CheckboxSize {
    /// 16px box
    Small,
    /// 20px box
    #[default]
    Medium,
    /// 24px box
    Large,
}

impl CheckboxSize {
    fn box_size(&self) -> u32 {
        match self {
            CheckboxSize::Small => 16,
            CheckboxSize::Medium => 20,
            CheckboxSize::Large => 24,
        }
    }

    fn icon_size(&self) -> u32 {
        match self {
            CheckboxSize::Small => 10,
            CheckboxSize::Medium => 12,
            CheckboxSize::Large => 16,
        }
    }

    fn font_size(&self) -> &'static str {
        match self {
            CheckboxSize::Small => "sm",
            CheckboxSize::Medium => "base",
            CheckboxSize::Large => "lg",
        }
    }
}

/// Checkbox component
#[derive(Clone)]
pub struct Checkbox {
    init: ControlInit,
    machine: ControlMachine<ControlState>,
    size: CheckboxSize,
    label: Option<String>,
    name: Option<String>,
    value: Option<String>,
    error: bool,
    disabled: bool,
    full_width: bool,
    focused: bool,
    hovered: bool,
    class_name: Option<String>,
    style: Style,
    on_change: Option<ChangeCallback>,
}

impl Checkbox {
    pub fn new() -> Self {
        let init = ControlInit::new();
        Self {
            init,
            machine: ControlMachine::new(ControlState::new(init)),
            size: CheckboxSize::default(),
            label: None,
            name: None,
            value: None,
            error: false,
            disabled: false,
            full_width: false,
            focused: false,
            hovered: false,
            class_name: None,
            style: Style::new(),
            on_change: None,
        }
    }

    fn reinit(mut self, init: ControlInit) -> Self {
        self.init = init;
        self.machine = ControlMachine::new(ControlState::new(init));
        self
    }

    /// Controlled checked value
    pub fn checked(self, checked: bool) -> Self {
        let init = self.init.checked(checked);
        self.reinit(init)
    }

    /// Initial checked value when uncontrolled
    pub fn default_checked(self, checked: bool) -> Self {
        let init = self.init.default_checked(checked);
        self.reinit(init)
    }

    /// Controlled indeterminate value
    pub fn indeterminate(self, indeterminate: bool) -> Self {
        let init = self.init.indeterminate(indeterminate);
        self.reinit(init)
    }

    pub fn size(mut self, size: CheckboxSize) -> Self {
        self.size = size;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn error(mut self, error: bool) -> Self {
        self.error = error;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
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

    /// Set the change callback
    ///
    /// Called when the checkbox is toggled, with the new checked state.
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

    pub fn state(&self) -> ControlState {
        self.machine.state()
    }

    pub fn visual(&self) -> CheckState {
        self.machine.visual()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn machine(&self) -> &ControlMachine<ControlState> {
        &self.machine
    }

    /// Push a new controlled checked value
    ///
    /// Applied only when it differs from the previously supplied value, so
    /// re-supplying the same value does not undo user toggles.
    pub fn set_checked(&mut self, checked: bool) {
        if self.init.controlled_checked == Some(checked) {
            return;
        }
        self.init = self.init.checked(checked);
        self.machine.external(ExternalValue::checked(checked));
    }

    /// Push a new controlled indeterminate value
    pub fn set_indeterminate(&mut self, indeterminate: bool) {
        if self.init.controlled_indeterminate.unwrap_or(false) == indeterminate {
            return;
        }
        self.init = self.init.indeterminate(indeterminate);
        self.machine.external(ExternalValue::indeterminate(indeterminate));
    }

    /// User activation; returns the value `on_change` was notified with
    pub fn click(&mut self) -> Option<bool> {
        let checked = self.machine.interact(self.disabled)?;
        tracing::debug!(checked, "checkbox toggled");
        if let Some(callback) = &self.on_change {
            callback(checked);
        }
        Some(checked)
    }

    pub fn focus(&mut self) {
        if !self.disabled {
            self.focused = true;
        }
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Pointer entered or left; ignored while disabled
    pub fn hover(&mut self, hovered: bool) {
        if !self.disabled {
            self.hovered = hovered;
        }
    }

    fn render_check_mark(&self, tokens: &TokenResolver) -> Element {
        let icon = self.size.icon_size().to_string();
        let overlay = centered_overlay()
            .set("width", format!("{icon}px"))
            .set("height", format!("{icon}px"))
            .set("display", "flex")
            .set("align-items", "center")
            .set("justify-content", "center");

        Element::new("span")
            .attr("data-part", "check-mark")
            .style(overlay)
            .child(
                Element::new("svg")
                    .attr("width", icon.clone())
                    .attr("height", icon)
                    .attr("viewBox", "0 0 24 24")
                    .attr("fill", "none")
                    .child(
                        Element::new("path")
                            .attr("d", "M5 13l4 4L19 7")
                            .attr("stroke", tokens.resolve_color("background", Some("primary")))
                            .attr("stroke-width", "2")
                            .attr("stroke-linecap", "round")
                            .attr("stroke-linejoin", "round"),
                    ),
            )
    }

    fn render_indeterminate_bar(&self, tokens: &TokenResolver) -> Element {
        Element::new("span").attr("data-part", "indeterminate").style(
            centered_overlay()
                .set("width", "60%")
                .set("height", "2px")
                .set("background-color", tokens.resolve_color("background", Some("primary")))
                .set("border-radius", "1px"),
        )
    }
}

impl Default for Checkbox {
    fn default() -> Self {
        Self::new()
    }
}

impl Render for Checkbox {
    fn render(&self, tokens: &TokenResolver) -> Element {
        let state = self.state();
        let visual = state.visual();
        let filled = visual != CheckState::Unchecked;

        // Hover highlights the border only once the box is filled
        let highlighted = filled && self.hovered;
        let mut input_style = selectable_input(self.size.box_size(), self.disabled)
            .set("border", selectable_border(tokens, self.error, highlighted))
            .set("border-radius", tokens.resolve_border_radius("sm"))
            .set(
                "background-color",
                if filled {
                    tokens.primary_color(None)
                } else {
                    tokens.resolve_color("background", Some("primary"))
                },
            );
        if self.focused {
            input_style = input_style.merge(&focus_outline(tokens));
        }

        let data_state = match visual {
            CheckState::Checked => "checked",
            CheckState::Unchecked => "unchecked",
            CheckState::Indeterminate => "indeterminate",
        };

        let native = Element::new("input")
            .attr("data-part", "control")
            .attr("type", "checkbox")
            .attr("data-state", data_state)
            .attr_opt("name", self.name.clone())
            .attr_opt("value", self.value.clone())
            .flag("checked", state.checked())
            .flag("disabled", self.disabled)
            .attr_opt("aria-checked", visual.is_indeterminate().then_some("mixed"))
            .style(input_style);

        let control = Element::new("span")
            .style(control_wrapper())
            .child(native)
            .child_opt(state.shows_check_mark().then(|| self.render_check_mark(tokens)))
            .child_opt(visual.is_indeterminate().then(|| self.render_indeterminate_bar(tokens)));

        let label = self.label.as_ref().map(|text| {
            Element::new("span")
                .attr("data-part", "label")
                .style(selectable_label(tokens, self.size.font_size(), self.disabled))
                .text(text.clone())
        });

        Element::new("label")
            .class(self.class_name.clone().unwrap_or_default())
            .style(selectable_container(tokens, self.disabled, self.full_width).merge(&self.style))
            .child(control)
            .child_opt(label)
    }
}

/// Create an unchecked checkbox
pub fn checkbox() -> Checkbox {
    Checkbox::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;

    fn tokens() -> TokenResolver {
        TokenResolver::embedded()
    }

    fn recording() -> (Arc<Mutex<Vec<bool>>>, Checkbox) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = log.clone();
        let checkbox = checkbox().on_change(move |checked| sink.lock().unwrap().push(checked));
        (log, checkbox)
    }

    fn control_style(checkbox: &Checkbox) -> Style {
        checkbox
            .render(&tokens())
            .find_part("control")
            .map(|control| control.get_style().clone())
            .unwrap_or_default()
    }

    #[test]
    fn builder_initial_state() {
        assert_eq!(checkbox().visual(), CheckState::Unchecked);
        assert_eq!(checkbox().default_checked(true).visual(), CheckState::Checked);
        assert_eq!(
            checkbox().default_checked(true).checked(false).visual(),
            CheckState::Unchecked
        );
        assert_eq!(
            checkbox().checked(true).indeterminate(true).visual(),
            CheckState::Indeterminate
        );
    }

    #[test]
    fn same_controlled_value_does_not_undo_toggle() {
        let (log, mut checkbox) = recording();
        checkbox = checkbox.checked(false);

        checkbox.click();
        assert_eq!(checkbox.visual(), CheckState::Checked);

        // Owner re-supplies the value it already gave
        checkbox.set_checked(false);
        assert_eq!(checkbox.visual(), CheckState::Checked);

        checkbox.set_checked(true);
        checkbox.set_checked(false);
        assert_eq!(checkbox.visual(), CheckState::Unchecked);
        assert_eq!(*log.lock().unwrap(), vec![true]);
    }

    #[test]
    fn set_indeterminate_snaps() {
        let mut checkbox = checkbox().default_checked(true);
        checkbox.set_indeterminate(true);
        assert_eq!(checkbox.visual(), CheckState::Indeterminate);
        assert!(checkbox.state().checked());

        checkbox.set_indeterminate(false);
        assert_eq!(checkbox.visual(), CheckState::Checked);
    }

    #[test]
    fn styles_follow_state() {
        let unchecked = control_style(&checkbox());
        assert_eq!(unchecked.get("background-color"), Some("#ffffff"));
        assert_eq!(unchecked.get("border"), Some("2px solid #cbd5e1"));
        assert_eq!(unchecked.get("width"), Some("20px"));

        let checked = control_style(&checkbox().checked(true).size(CheckboxSize::Large));
        assert_eq!(checked.get("background-color"), Some("#3b82f6"));
        assert_eq!(checked.get("width"), Some("24px"));

        let errored = control_style(&checkbox().error(true));
        assert_eq!(errored.get("border"), Some("2px solid #ef4444"));
    }

    #[test]
    fn hover_highlights_only_filled_box() {
        let mut unchecked = checkbox();
        unchecked.hover(true);
        assert_eq!(control_style(&unchecked).get("border"), Some("2px solid #cbd5e1"));

        let mut checked = checkbox().checked(true);
        checked.hover(true);
        assert_eq!(control_style(&checked).get("border"), Some("2px solid #3b82f6"));
    }

    #[test]
    fn focus_adds_outline() {
        let mut checkbox = checkbox();
        checkbox.focus();
        assert_eq!(control_style(&checkbox).get("outline"), Some("2px solid #3b82f6"));
        checkbox.blur();
        assert_eq!(control_style(&checkbox).get("outline"), Some("none"));
    }

    #[test]
    fn label_and_container() {
        let element = checkbox()
            .label("Remember me")
            .disabled(true)
            .full_width(true)
            .class_name("login-remember")
            .render(&tokens());

        assert_eq!(element.tag(), "label");
        assert!(element.has_class("login-remember"));
        assert_eq!(element.get_style().get("opacity"), Some("0.6"));
        assert_eq!(element.get_style().get("width"), Some("100%"));

        let label = element.find_part("label").unwrap();
        assert_eq!(label.text_content(), "Remember me");
        assert_eq!(label.get_style().get("cursor"), Some("not-allowed"));
    }
}
