//! # Swatch Component Library (swatch_cn)
//!
//! Token-driven form components in the shadcn manner.
//!
//! - **Tokens**: `swatch_theme` resolves design tokens (colours, spacing,
//!   typography, radii, shadows, transitions) to CSS-ready strings
//! - **State**: `swatch_core` reconciles controlled values with user
//!   interaction for selectable controls
//! - **Components**: `swatch_cn` builds styled element trees from both
//!
//! ## Example
//!
//! ```rust
//! use swatch_cn::prelude::*;
//!
//! let tokens = TokenResolver::embedded();
//!
//! // Button with variants
//! let delete = cn::button("Delete").variant(ButtonVariant::Error);
//! assert!(delete.render(&tokens).has_class("swatch-button--error"));
//!
//! // Checkbox: Unchecked -> Checked -> Unchecked
//! let mut terms = cn::checkbox().label("I accept the terms");
//! assert_eq!(terms.click(), Some(true));
//! assert_eq!(terms.click(), Some(false));
//!
//! // Rendering never fails; unresolved tokens just add no style
//! let html = terms.render(&tokens).to_html();
//! assert!(html.starts_with("<label"));
//! ```
//!
//! ## Components
//!
//! - **Button** - Clickable button with variants (primary, secondary, success, warning,
//!   error, ghost)
//! - **Input** - Text field with label, helper text, icons and validation states
//! - **Checkbox** - Checked / unchecked / indeterminate toggle
//! - **RadioButton** / **RadioGroup** - Single selection from several options

pub mod components;
pub mod element;
pub mod style;

pub use components::*;
pub use element::{Element, Node};
pub use style::Style;

/// Convenience module for accessing components with `cn::` prefix
pub mod cn {
    pub use crate::components::button::button;
    pub use crate::components::checkbox::checkbox;
    pub use crate::components::input::input;
    pub use crate::components::radio::{radio, radio_group};
}

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::cn;
    pub use crate::components::button::{button, Button, ButtonSize, ButtonType, ButtonVariant};
    pub use crate::components::checkbox::{checkbox, Checkbox, CheckboxSize};
    pub use crate::components::input::{input, Input, InputSize, InputVariant};
    pub use crate::components::radio::{
        radio, radio_group, RadioButton, RadioGroup, RadioLayout, RadioSize,
    };
    pub use crate::components::Render;
    pub use crate::element::{Element, Node};
    pub use crate::style::Style;
    // Re-export commonly needed token and state types
    pub use swatch_core::CheckState;
    pub use swatch_theme::{TokenResolver, TokenState};
}
