//! Swatch Theme
//!
//! Design tokens for the Swatch component library: one immutable token
//! document and a resolver that turns dotted semantic paths into CSS values.
//!
//! # Overview
//!
//! - **Token document**: colours, typography, spacing, radii, border widths,
//!   shadows, z-index layers, breakpoints and transitions, loaded once from a
//!   JSON or TOML artifact (a default set is embedded)
//! - **Resolver**: `resolve_path`, `resolve_color` and the fixed-prefix
//!   accessors; misses degrade to an empty string
//! - **Diagnostics**: every miss is logged with `tracing` and recorded in a
//!   shared log that callers can inspect
//!
//! # Quick Start
//!
//! ```rust
//! use swatch_theme::TokenResolver;
//!
//! let tokens = TokenResolver::embedded();
//!
//! let primary = tokens.resolve_color("primary", None);
//! let padding = tokens.resolve_spacing(4);
//! let font = tokens.resolve_font_family("sans");
//!
//! assert_eq!(primary, "#3b82f6");
//! assert_eq!(padding, "1rem");
//! assert!(font.starts_with("Inter, "));
//! ```
//!
//! # Global State
//!
//! ```rust,ignore
//! use swatch_theme::{TokenDocument, TokenState};
//!
//! // At startup
//! TokenState::init(TokenDocument::load("design/tokens.toml")?);
//!
//! // Anywhere else
//! let tokens = TokenState::get().resolver();
//! ```

mod diagnostics;
mod document;
mod error;
mod resolver;
mod state;

pub use diagnostics::{Diagnostics, MissReason, TokenDiagnostic, MAX_DIAGNOSTICS};
pub use document::{TokenCategory, TokenDocument, TokenNode};
pub use error::TokenError;
pub use resolver::{TokenResolver, TransitionFacet, TypographyFacet, UnknownFacet, DEFAULT_SHADE};
pub use state::TokenState;

/// Resolver over the global [`TokenState`]
///
/// Initializes the state with the embedded tokens if the application has not
/// done so.
pub fn tokens() -> TokenResolver {
    TokenState::get().resolver()
}
