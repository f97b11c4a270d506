//! Token resolution
//!
//! [`TokenResolver`] maps dotted semantic paths such as `colors.primary.500`
//! onto a [`TokenDocument`]. Resolution never fails the caller: a path that
//! does not land on a value yields an empty string, which components treat as
//! "no style contribution", and the miss is recorded in the resolver's
//! [`Diagnostics`].
//!
//! # Example
//!
//! ```
//! use swatch_theme::TokenResolver;
//!
//! let tokens = TokenResolver::from_json_str(
//!     r##"{ "colors": { "primary": { "500": "#3b82f6" } } }"##,
//! )
//! .unwrap();
//!
//! assert_eq!(tokens.resolve_color("primary", None), "#3b82f6");
//! assert_eq!(tokens.resolve_color("primary", Some("700")), "");
//! assert_eq!(tokens.diagnostics().len(), 1);
//! ```

use std::fmt::Display;
use std::str::FromStr;
use std::sync::Arc;

use thiserror::Error;

use crate::diagnostics::{Diagnostics, MissReason, TokenDiagnostic};
use crate::document::{TokenDocument, TokenNode};
use crate::error::TokenError;

/// Shade used when a colour is requested without one
pub const DEFAULT_SHADE: &str = "500";

/// Typography sub-groups
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum TypographyFacet {
    FontFamily,
    FontSize,
    FontWeight,
    LineHeight,
}

impl TypographyFacet {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FontFamily => "fontFamily",
            Self::FontSize => "fontSize",
            Self::FontWeight => "fontWeight",
            Self::LineHeight => "lineHeight",
        }
    }
}

impl AsRef<str> for TypographyFacet {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for TypographyFacet {
    type Err = UnknownFacet;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fontFamily" => Ok(Self::FontFamily),
            "fontSize" => Ok(Self::FontSize),
            "fontWeight" => Ok(Self::FontWeight),
            "lineHeight" => Ok(Self::LineHeight),
            other => Err(UnknownFacet(other.to_string())),
        }
    }
}

/// Transition sub-groups
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum TransitionFacet {
    Duration,
    Easing,
}

impl TransitionFacet {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Duration => "duration",
            Self::Easing => "easing",
        }
    }
}

impl AsRef<str> for TransitionFacet {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for TransitionFacet {
    type Err = UnknownFacet;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "duration" => Ok(Self::Duration),
            "easing" => Ok(Self::Easing),
            other => Err(UnknownFacet(other.to_string())),
        }
    }
}

/// A facet name that is not part of the token schema
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown token facet `{0}`")]
pub struct UnknownFacet(pub String);

/// Strip structural punctuation left over from list serialisation
fn strip_structural(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, '[' | ']' | '"'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Resolves token paths against one document
///
/// Cheap to clone: clones share the document and the diagnostics log.
#[derive(Clone, Debug)]
pub struct TokenResolver {
    document: Arc<TokenDocument>,
    diagnostics: Diagnostics,
}

impl TokenResolver {
    /// Resolver over `document` with a fresh diagnostics log
    pub fn new(document: Arc<TokenDocument>) -> Self {
        Self::with_diagnostics(document, Diagnostics::new())
    }

    /// Resolver that records misses into an existing log
    pub fn with_diagnostics(document: Arc<TokenDocument>, diagnostics: Diagnostics) -> Self {
        Self {
            document,
            diagnostics,
        }
    }

    /// Resolver over the embedded default tokens
    pub fn embedded() -> Self {
        Self::new(TokenDocument::embedded())
    }

    /// Parse a JSON document and wrap it in a resolver
    pub fn from_json_str(src: &str) -> Result<Self, TokenError> {
        Ok(Self::new(Arc::new(TokenDocument::from_json_str(src)?)))
    }

    pub fn document(&self) -> &TokenDocument {
        &self.document
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    fn miss(&self, path: String, reason: MissReason) -> String {
        self.diagnostics.record(TokenDiagnostic { path, reason });
        String::new()
    }

    // ========== Generic Access ==========

    /// Resolve a dotted path to its value, or `""` on a miss
    pub fn resolve_path(&self, path: &str) -> String {
        match self.document.lookup(path) {
            Ok(node) => match node.to_token_string() {
                Some(value) => value,
                None => self.miss(path.to_string(), MissReason::NotALeaf),
            },
            Err(reason) => self.miss(path.to_string(), reason),
        }
    }

    /// Resolve a colour from a palette
    ///
    /// Without a shade the palette's `500` entry is used, falling back to its
    /// first entry in source order.
    pub fn resolve_color(&self, category: &str, shade: Option<&str>) -> String {
        if let Some(shade) = shade {
            return self.resolve_path(&format!("colors.{category}.{shade}"));
        }

        let path = format!("colors.{category}");
        let palette = match self.document.lookup(&path) {
            Ok(TokenNode::Group(palette)) => palette,
            Ok(_) => return self.miss(path, MissReason::NotAGroup),
            Err(reason) => return self.miss(path, reason),
        };

        let preferred = palette
            .get(DEFAULT_SHADE)
            .and_then(TokenNode::to_token_string)
            .filter(|value| !value.is_empty());
        let first = || {
            palette
                .values()
                .next()
                .and_then(TokenNode::to_token_string)
                .filter(|value| !value.is_empty())
        };

        match preferred.or_else(first) {
            Some(value) => value,
            None => self.miss(
                path,
                MissReason::MissingSegment {
                    segment: DEFAULT_SHADE.to_string(),
                },
            ),
        }
    }

    pub fn resolve_spacing(&self, size: impl Display) -> String {
        self.resolve_path(&format!("spacing.{size}"))
    }

    pub fn resolve_typography(&self, facet: impl AsRef<str>, key: &str) -> String {
        self.resolve_path(&format!("typography.{}.{key}", facet.as_ref()))
    }

    pub fn resolve_border_radius(&self, size: &str) -> String {
        self.resolve_path(&format!("borderRadius.{size}"))
    }

    pub fn resolve_border_width(&self, width: impl Display) -> String {
        self.resolve_path(&format!("borderWidth.{width}"))
    }

    pub fn resolve_shadow(&self, size: &str) -> String {
        self.resolve_path(&format!("shadows.{size}"))
    }

    pub fn resolve_transition(&self, facet: impl AsRef<str>, key: &str) -> String {
        self.resolve_path(&format!("transitions.{}.{key}", facet.as_ref()))
    }

    pub fn resolve_z_index(&self, index: &str) -> String {
        self.resolve_path(&format!("zIndex.{index}"))
    }

    pub fn resolve_breakpoint(&self, breakpoint: &str) -> String {
        self.resolve_path(&format!("breakpoints.{breakpoint}"))
    }

    // ========== Typography ==========

    /// Resolve a font stack as a CSS `font-family` value
    ///
    /// List entries are joined with `", "`; brackets and double quotes are
    /// removed.
    pub fn resolve_font_family(&self, family: &str) -> String {
        let path = format!("typography.fontFamily.{family}");
        match self.document.lookup(&path) {
            Ok(TokenNode::List(items)) => items
                .iter()
                .map(|item| strip_structural(item))
                .filter(|item| !item.is_empty())
                .collect::<Vec<_>>()
                .join(", "),
            Ok(TokenNode::Value(value)) => strip_structural(value),
            Ok(TokenNode::Group(_)) => self.miss(path, MissReason::NotALeaf),
            Err(reason) => self.miss(path, reason),
        }
    }

    pub fn resolve_font_size(&self, size: &str) -> String {
        self.resolve_typography(TypographyFacet::FontSize, size)
    }

    pub fn resolve_font_weight(&self, weight: &str) -> String {
        self.resolve_typography(TypographyFacet::FontWeight, weight)
    }

    pub fn resolve_line_height(&self, height: &str) -> String {
        self.resolve_typography(TypographyFacet::LineHeight, height)
    }

    pub fn small_font_size(&self) -> String {
        self.resolve_font_size("sm")
    }

    pub fn medium_font_size(&self) -> String {
        self.resolve_font_size("base")
    }

    pub fn large_font_size(&self) -> String {
        self.resolve_font_size("lg")
    }

    // ========== Palette Shortcuts ==========

    pub fn primary_color(&self, shade: Option<&str>) -> String {
        self.resolve_color("primary", shade)
    }

    pub fn secondary_color(&self, shade: Option<&str>) -> String {
        self.resolve_color("secondary", shade)
    }

    pub fn success_color(&self, shade: Option<&str>) -> String {
        self.resolve_color("success", shade)
    }

    pub fn warning_color(&self, shade: Option<&str>) -> String {
        self.resolve_color("warning", shade)
    }

    pub fn error_color(&self, shade: Option<&str>) -> String {
        self.resolve_color("error", shade)
    }
}

impl Default for TokenResolver {
    fn default() -> Self {
        Self::embedded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn resolver(src: &str) -> TokenResolver {
        TokenResolver::from_json_str(src).unwrap()
    }

    #[test]
    fn present_paths_resolve_to_their_leaf() {
        let tokens =
            resolver(r#"{ "spacing": { "4": "1rem" }, "shadows": { "sm": "0 1px 2px" } }"#);
        assert_eq!(tokens.resolve_path("spacing.4"), "1rem");
        assert_eq!(tokens.resolve_shadow("sm"), "0 1px 2px");
        assert!(tokens.diagnostics().is_empty());
    }

    #[test]
    fn absent_path_records_one_diagnostic() {
        let tokens = resolver(r#"{ "spacing": { "4": "1rem" } }"#);
        assert_eq!(tokens.resolve_path("spacing.5"), "");
        assert_eq!(tokens.resolve_path("nothing.at.all"), "");
        assert_eq!(tokens.resolve_path(""), "");

        let entries = tokens.diagnostics().entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].path, "spacing.5");
        assert_eq!(
            entries[0].reason,
            MissReason::MissingSegment {
                segment: "5".to_string()
            }
        );
    }

    #[test]
    fn group_paths_do_not_stringify() {
        let tokens = resolver(r##"{ "colors": { "primary": { "500": "#3b82f6" } } }"##);
        assert_eq!(tokens.resolve_path("colors.primary"), "");
        assert_eq!(tokens.diagnostics().entries()[0].reason, MissReason::NotALeaf);
    }

    #[test]
    fn resolution_is_deterministic() {
        let tokens = TokenResolver::embedded();
        let first = tokens.resolve_path("colors.primary.600");
        assert_eq!(first, tokens.resolve_path("colors.primary.600"));
        assert_eq!(tokens.resolve_path("colors.primary.650"), "");
        assert_eq!(tokens.resolve_path("colors.primary.650"), "");
        assert_eq!(tokens.diagnostics().count_for("colors.primary.650"), 2);
    }

    #[test]
    fn color_prefers_default_shade() {
        let tokens = resolver(
            r##"{ "colors": { "primary": { "100": "#dbeafe", "500": "#3b82f6" } } }"##,
        );
        assert_eq!(tokens.resolve_color("primary", None), "#3b82f6");
        assert_eq!(tokens.primary_color(Some("100")), "#dbeafe");
    }

    #[test]
    fn color_falls_back_to_first_inserted_shade() {
        let tokens = resolver(
            r##"{ "colors": { "accent": { "700": "#7e22ce", "100": "#f3e8ff" } } }"##,
        );
        assert_eq!(tokens.resolve_color("accent", None), "#7e22ce");
        assert!(tokens.diagnostics().is_empty());
    }

    #[test]
    fn color_misses_are_recorded() {
        let tokens = resolver(r##"{ "colors": { "white": "#fff", "empty": {} } }"##);
        assert_eq!(tokens.resolve_color("missing", None), "");
        assert_eq!(tokens.resolve_color("white", None), "");
        assert_eq!(tokens.resolve_color("empty", None), "");

        let reasons: Vec<MissReason> = tokens
            .diagnostics()
            .take()
            .into_iter()
            .map(|d| d.reason)
            .collect();
        assert_eq!(
            reasons,
            vec![
                MissReason::MissingSegment {
                    segment: "missing".to_string()
                },
                MissReason::NotAGroup,
                MissReason::MissingSegment {
                    segment: "500".to_string()
                },
            ]
        );
    }

    #[test]
    fn font_family_joins_the_stack() {
        let tokens = resolver(
            r#"{ "typography": { "fontFamily": {
                "sans": ["Inter", "Segoe UI", "sans-serif"],
                "quoted": "[\"Georgia\", serif]"
            } } }"#,
        );
        assert_eq!(tokens.resolve_font_family("sans"), "Inter, Segoe UI, sans-serif");
        assert_eq!(tokens.resolve_font_family("quoted"), "Georgia, serif");
        assert_eq!(tokens.resolve_font_family("display"), "");
        assert_eq!(tokens.diagnostics().len(), 1);
    }

    #[test]
    fn list_leaves_stringify_with_commas() {
        let tokens = resolver(
            r#"{ "typography": { "fontFamily": { "mono": ["Menlo", "monospace"] } } }"#,
        );
        assert_eq!(tokens.resolve_path("typography.fontFamily.mono"), "Menlo,monospace");
    }

    #[test]
    fn fixed_prefix_accessors() {
        let tokens = TokenResolver::embedded();
        assert_eq!(tokens.resolve_spacing(2), "0.5rem");
        assert_eq!(tokens.resolve_spacing("4"), "1rem");
        assert_eq!(tokens.resolve_typography("fontWeight", "medium"), "500");
        assert_eq!(tokens.resolve_typography(TypographyFacet::FontSize, "sm"), "0.875rem");
        assert_eq!(tokens.resolve_border_radius("md"), "0.375rem");
        assert_eq!(tokens.resolve_border_width(2), "2px");
        assert_eq!(tokens.resolve_transition(TransitionFacet::Duration, "200"), "200ms");
        assert_eq!(tokens.resolve_transition("easing", "linear"), "linear");
        assert_eq!(tokens.resolve_z_index("modal"), "1300");
        assert_eq!(tokens.resolve_breakpoint("md"), "768px");
        assert_eq!(tokens.medium_font_size(), "1rem");
        assert!(tokens.diagnostics().is_empty());
    }

    #[test]
    fn facets_parse_from_document_keys() {
        assert_eq!(
            "lineHeight".parse::<TypographyFacet>(),
            Ok(TypographyFacet::LineHeight)
        );
        assert_eq!(
            "easing".parse::<TransitionFacet>(),
            Ok(TransitionFacet::Easing)
        );
        assert_eq!(
            "letterSpacing".parse::<TypographyFacet>(),
            Err(UnknownFacet("letterSpacing".to_string()))
        );
    }

    #[test]
    fn unknown_facet_names_the_input() {
        let err = "weight".parse::<TypographyFacet>().unwrap_err();
        assert_eq!(err.to_string(), "unknown token facet `weight`");

        let err: Box<dyn std::error::Error> = Box::new(err);
        assert!(err.source().is_none());
    }
}
