use std::sync::Arc;

use swatch_theme::{TokenResolver, TransitionFacet};

use crate::style::{compose, Style};

pub(crate) type ChangeCallback = Arc<dyn Fn(bool) + Send + Sync>;

pub(crate) const DISABLED_OPACITY: &str = "0.6";

pub(crate) fn cursor(disabled: bool) -> &'static str {
    if disabled {
        "not-allowed"
    } else {
        "pointer"
    }
}

pub(crate) fn opacity(disabled: bool) -> &'static str {
    if disabled {
        DISABLED_OPACITY
    } else {
        "1"
    }
}

pub(crate) fn width(full_width: bool) -> &'static str {
    if full_width {
        "100%"
    } else {
        "auto"
    }
}

/// `all <duration.200> ease`
pub(crate) fn transition_all(tokens: &TokenResolver) -> String {
    let duration = tokens.resolve_transition(TransitionFacet::Duration, "200");
    compose(&["all", &duration, "ease"])
}

/// Three-pixel translucent ring in the primary colour
pub(crate) fn focus_ring(tokens: &TokenResolver) -> String {
    let primary = tokens.primary_color(None);
    if primary.is_empty() {
        return String::new();
    }
    format!("0 0 0 3px {primary}20")
}

/// `<label>` wrapper shared by checkbox and radio
pub(crate) fn selectable_container(
    tokens: &TokenResolver,
    disabled: bool,
    full_width: bool,
) -> Style {
    Style::new()
        .set("display", "flex")
        .set("align-items", "center")
        .set("gap", tokens.resolve_spacing(2))
        .set("width", width(full_width))
        .set("opacity", opacity(disabled))
        .set("cursor", cursor(disabled))
        .set("padding", tokens.resolve_spacing(1))
        .set("border-radius", tokens.resolve_spacing(1))
        .set("transition", "background-color 0.2s ease")
}

/// Native input reset shared by checkbox and radio; `box` is the side in px
pub(crate) fn selectable_input(box_size: u32, disabled: bool) -> Style {
    let side = format!("{box_size}px");
    Style::new()
        .set("width", side.clone())
        .set("height", side.clone())
        .set("min-width", side.clone())
        .set("min-height", side)
        .set("appearance", "none")
        .set("cursor", cursor(disabled))
        .set("display", "inline-block")
        .set("position", "relative")
        .set("transition", "all 0.2s ease")
        .set("flex-shrink", "0")
        .set("margin", "0")
        .set("padding", "0")
        .set("vertical-align", "middle")
        .set("outline", "none")
}

/// Wrapper around the native input and its overlay
pub(crate) fn control_wrapper() -> Style {
    Style::new()
        .set("position", "relative")
        .set("display", "flex")
        .set("align-items", "center")
        .set("justify-content", "center")
}

/// Overlay centred on the control (check mark, bar, dot)
pub(crate) fn centered_overlay() -> Style {
    Style::new()
        .set("position", "absolute")
        .set("top", "50%")
        .set("left", "50%")
        .set("transform", "translate(-50%, -50%)")
        .set("pointer-events", "none")
}

pub(crate) fn selectable_label(tokens: &TokenResolver, font_size: &str, disabled: bool) -> Style {
    Style::new()
        .set("font-size", tokens.resolve_font_size(font_size))
        .set("color", tokens.resolve_color("text", Some("primary")))
        .set("cursor", cursor(disabled))
        .set("user-select", "none")
        .set("line-height", "1.2")
        .set("font-weight", "500")
        .set("margin", "0")
        .set("padding", "0")
        .set("display", "flex")
        .set("align-items", "center")
}

/// Border colour for checkbox/radio: error wins, then the highlight colour
pub(crate) fn selectable_border(tokens: &TokenResolver, error: bool, highlighted: bool) -> String {
    let color = if error {
        tokens.error_color(None)
    } else if highlighted {
        tokens.primary_color(None)
    } else {
        tokens.resolve_color("border", Some("primary"))
    };
    compose(&["2px", "solid", &color])
}

/// Focus outline applied to the native control
pub(crate) fn focus_outline(tokens: &TokenResolver) -> Style {
    let primary = tokens.primary_color(None);
    Style::new()
        .set("outline", compose(&["2px", "solid", &primary]))
        .set("outline-offset", "2px")
}
