//! Themed components built on design tokens
//!
//! Each component follows a consistent pattern:
//! - Builder function (e.g., `button("Label")`)
//! - Variant enum where it applies (e.g., `ButtonVariant`)
//! - Size enum (e.g., `ButtonSize`)
//! - Implements [`Render`] to produce an [`Element`] tree

pub mod button;
pub mod checkbox;
pub mod input;
pub mod radio;
mod shared;

pub use button::{button, Button, ButtonSize, ButtonType, ButtonVariant};
pub use checkbox::{checkbox, Checkbox, CheckboxSize};
pub use input::{input, Input, InputSize, InputVariant};
pub use radio::{radio, radio_group, RadioButton, RadioGroup, RadioLayout, RadioSize};

use swatch_theme::{TokenResolver, TokenState};

use crate::element::Element;

/// Render a component against a token resolver
pub trait Render {
    fn render(&self, tokens: &TokenResolver) -> Element;

    /// Render against the process-wide token set
    fn render_themed(&self) -> Element {
        self.render(&TokenState::get().resolver())
    }
}
