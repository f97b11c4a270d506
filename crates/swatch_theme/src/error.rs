use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a token document.
///
/// Resolution itself never fails; only turning a source artifact into a
/// [`TokenDocument`](crate::TokenDocument) can.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("json token document error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("toml token document error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to read token document `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("token document root must be a mapping")]
    InvalidRoot,

    #[error("unsupported token document format `{0}` (expected .json or .toml)")]
    UnsupportedFormat(String),
}
