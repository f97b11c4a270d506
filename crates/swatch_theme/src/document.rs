//! The token document: an immutable tree of design constants
//!
//! A document is a mapping of top-level [`TokenCategory`] keys to nested
//! groups. Leaves are either single values (`"#3b82f6"`, `"0.5rem"`) or value
//! lists (font fallback stacks). Group entries keep the order they had in the
//! source artifact, which the colour accessor relies on for its
//! "first shade" fallback.
//!
//! Documents are loaded once and shared behind an [`Arc`]; nothing mutates a
//! document after construction.

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::{Arc, OnceLock};

use indexmap::IndexMap;
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};

use crate::diagnostics::MissReason;
use crate::error::TokenError;

/// Default token set compiled into the crate
const EMBEDDED_TOKENS: &str = include_str!("../tokens/tokens.json");

static EMBEDDED: OnceLock<Arc<TokenDocument>> = OnceLock::new();

/// Top-level token categories
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum TokenCategory {
    Colors,
    Typography,
    Spacing,
    BorderRadius,
    BorderWidth,
    Shadows,
    ZIndex,
    Breakpoints,
    Transitions,
}

impl TokenCategory {
    /// Key of this category in the document root
    pub fn key(self) -> &'static str {
        match self {
            Self::Colors => "colors",
            Self::Typography => "typography",
            Self::Spacing => "spacing",
            Self::BorderRadius => "borderRadius",
            Self::BorderWidth => "borderWidth",
            Self::Shadows => "shadows",
            Self::ZIndex => "zIndex",
            Self::Breakpoints => "breakpoints",
            Self::Transitions => "transitions",
        }
    }

    /// Every category, in document order
    pub fn all() -> &'static [TokenCategory] {
        const CATEGORIES: [TokenCategory; 9] = [
            TokenCategory::Colors,
            TokenCategory::Typography,
            TokenCategory::Spacing,
            TokenCategory::BorderRadius,
            TokenCategory::BorderWidth,
            TokenCategory::Shadows,
            TokenCategory::ZIndex,
            TokenCategory::Breakpoints,
            TokenCategory::Transitions,
        ];
        &CATEGORIES
    }

    /// Look a category up by its document key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.key() == key)
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A node in the token tree
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenNode {
    /// A single CSS-compatible value
    Value(String),
    /// An ordered list of values, e.g. a font fallback stack
    List(Vec<String>),
    /// A nested group, in source order
    Group(IndexMap<String, TokenNode>),
}

impl TokenNode {
    /// Child node by key (groups only)
    pub fn get(&self, key: &str) -> Option<&TokenNode> {
        match self {
            TokenNode::Group(entries) => entries.get(key),
            _ => None,
        }
    }

    /// The value of a single-value leaf
    pub fn as_value(&self) -> Option<&str> {
        match self {
            TokenNode::Value(value) => Some(value),
            _ => None,
        }
    }

    /// The entries of a group
    pub fn as_group(&self) -> Option<&IndexMap<String, TokenNode>> {
        match self {
            TokenNode::Group(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        !matches!(self, TokenNode::Group(_))
    }

    /// Render a leaf as a plain string. Lists join with `,`.
    ///
    /// Returns `None` for groups, which have no string form.
    pub fn to_token_string(&self) -> Option<String> {
        match self {
            TokenNode::Value(value) => Some(value.clone()),
            TokenNode::List(items) => Some(items.join(",")),
            TokenNode::Group(_) => None,
        }
    }

    fn collect_leaves(&self, prefix: &str, out: &mut Vec<(String, String)>) {
        match self {
            TokenNode::Group(entries) => {
                for (key, child) in entries {
                    child.collect_leaves(&format!("{prefix}.{key}"), out);
                }
            }
            leaf => {
                if let Some(value) = leaf.to_token_string() {
                    out.push((prefix.to_string(), value));
                }
            }
        }
    }
}

/// Numbers render the way a stylesheet would write them (`2`, not `2.0`)
fn number_to_token(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

struct TokenNodeVisitor;

impl<'de> Visitor<'de> for TokenNodeVisitor {
    type Value = TokenNode;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a token value, a list of token values, or a token group")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<TokenNode, E> {
        Ok(TokenNode::Value(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<TokenNode, E> {
        Ok(TokenNode::Value(v))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<TokenNode, E> {
        Ok(TokenNode::Value(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<TokenNode, E> {
        Ok(TokenNode::Value(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<TokenNode, E> {
        Ok(TokenNode::Value(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<TokenNode, E> {
        Ok(TokenNode::Value(number_to_token(v)))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<TokenNode, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(node) = seq.next_element::<TokenNode>()? {
            match node {
                TokenNode::Value(value) => items.push(value),
                _ => {
                    return Err(de::Error::custom(
                        "token lists may only contain plain values",
                    ))
                }
            }
        }
        Ok(TokenNode::List(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<TokenNode, A::Error> {
        let mut entries = IndexMap::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, node)) = map.next_entry::<String, TokenNode>()? {
            entries.insert(key, node);
        }
        Ok(TokenNode::Group(entries))
    }
}

impl<'de> Deserialize<'de> for TokenNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(TokenNodeVisitor)
    }
}

/// Immutable design token dictionary
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenDocument {
    root: IndexMap<String, TokenNode>,
}

impl TokenDocument {
    /// Build a document from an already-assembled root mapping
    pub fn new(root: IndexMap<String, TokenNode>) -> Self {
        for key in root.keys() {
            if TokenCategory::from_key(key).is_none() {
                tracing::debug!(
                    category = %key,
                    "token document has an unknown top-level category"
                );
            }
        }
        Self { root }
    }

    /// Parse a JSON token document
    pub fn from_json_str(src: &str) -> Result<Self, TokenError> {
        let node: TokenNode = serde_json::from_str(src)?;
        Self::from_root_node(node)
    }

    /// Parse a TOML token document
    pub fn from_toml_str(src: &str) -> Result<Self, TokenError> {
        let node: TokenNode = toml::from_str(src)?;
        Self::from_root_node(node)
    }

    /// Read a token document from disk, picking the format from the extension
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TokenError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let read = || {
            std::fs::read_to_string(path).map_err(|source| TokenError::Io {
                path: path.to_path_buf(),
                source,
            })
        };

        let document = match extension.as_str() {
            "json" => Self::from_json_str(&read()?)?,
            "toml" => Self::from_toml_str(&read()?)?,
            other => return Err(TokenError::UnsupportedFormat(other.to_string())),
        };

        tracing::debug!(
            path = %path.display(),
            leaves = document.len(),
            "loaded token document"
        );
        Ok(document)
    }

    /// The default token set shipped with the crate
    ///
    /// Parsed on first use. If the embedded artifact ever fails to parse the
    /// error is logged and an empty document is returned, so every lookup
    /// degrades to a missing token instead of aborting.
    pub fn embedded() -> Arc<TokenDocument> {
        EMBEDDED
            .get_or_init(|| match Self::from_json_str(EMBEDDED_TOKENS) {
                Ok(document) => Arc::new(document),
                Err(err) => {
                    tracing::error!("embedded token document failed to parse: {err}");
                    Arc::new(TokenDocument::default())
                }
            })
            .clone()
    }

    fn from_root_node(node: TokenNode) -> Result<Self, TokenError> {
        match node {
            TokenNode::Group(root) => Ok(Self::new(root)),
            _ => Err(TokenError::InvalidRoot),
        }
    }

    /// Root entries, in source order
    pub fn root(&self) -> &IndexMap<String, TokenNode> {
        &self.root
    }

    /// The node of a top-level category
    pub fn category(&self, category: TokenCategory) -> Option<&TokenNode> {
        self.root.get(category.key())
    }

    /// Walk a dotted path from the root
    ///
    /// Returns the node the path lands on, which may still be a group. The
    /// error names the first segment that could not be followed.
    pub fn lookup(&self, path: &str) -> Result<&TokenNode, MissReason> {
        let mut segments = path.split('.');
        let first = segments.next().unwrap_or_default();
        let mut node = self
            .root
            .get(first)
            .ok_or_else(|| MissReason::MissingSegment {
                segment: first.to_string(),
            })?;

        for segment in segments {
            node = node.get(segment).ok_or_else(|| MissReason::MissingSegment {
                segment: segment.to_string(),
            })?;
        }
        Ok(node)
    }

    /// Every leaf as a `(dotted path, value)` pair, in source order
    pub fn entries(&self) -> Vec<(String, String)> {
        let mut out = Vec::new();
        for (key, node) in &self.root {
            node.collect_leaves(key, &mut out);
        }
        out
    }

    /// Number of leaves in the document
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
}

impl FromStr for TokenDocument {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_json_str(s)
    }
}
