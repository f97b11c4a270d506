//! Process-wide token state
//!
//! Applications that do not thread a [`TokenResolver`] through their render
//! code can initialise one shared document at startup and fetch resolvers
//! from it. The document is set once and never replaced; the first
//! initialisation wins.

use std::sync::{Arc, OnceLock};

use crate::diagnostics::Diagnostics;
use crate::document::TokenDocument;
use crate::resolver::TokenResolver;

/// Global token state instance
static TOKEN_STATE: OnceLock<TokenState> = OnceLock::new();

/// Global token state - the document every component resolves against
#[derive(Debug)]
pub struct TokenState {
    /// The loaded token document
    document: Arc<TokenDocument>,

    /// Misses recorded by every resolver handed out by this state
    diagnostics: Diagnostics,
}

impl TokenState {
    /// Initialize the global token state (call once at app startup)
    ///
    /// Later calls are ignored; the document cannot change at runtime.
    pub fn init(document: TokenDocument) {
        Self::install(Arc::new(document));
    }

    /// Initialize with the embedded default tokens
    pub fn init_default() {
        Self::install(TokenDocument::embedded());
    }

    /// Returns whether this call installed the state
    fn install(document: Arc<TokenDocument>) -> bool {
        let state = TokenState {
            document,
            diagnostics: Diagnostics::new(),
        };

        let installed = TOKEN_STATE.set(state).is_ok();
        if !installed {
            tracing::debug!("TokenState initialized more than once; keeping the first document");
        }
        installed
    }

    /// Get the global token state, falling back to the embedded tokens if
    /// nothing was initialized
    pub fn get() -> &'static TokenState {
        TOKEN_STATE.get_or_init(|| {
            tracing::debug!("TokenState not initialized; using embedded tokens");
            TokenState {
                document: TokenDocument::embedded(),
                diagnostics: Diagnostics::new(),
            }
        })
    }

    /// Try to get the global token state (returns None if not initialized)
    pub fn try_get() -> Option<&'static TokenState> {
        TOKEN_STATE.get()
    }

    pub fn document(&self) -> Arc<TokenDocument> {
        self.document.clone()
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// A resolver over the shared document, recording into the shared log
    pub fn resolver(&self) -> TokenResolver {
        TokenResolver::with_diagnostics(self.document.clone(), self.diagnostics.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolvers_share_the_global_log() {
        let state = TokenState::get();
        let a = state.resolver();
        let b = state.resolver();

        assert!(a.diagnostics().same_log(b.diagnostics()));
        assert!(a.diagnostics().same_log(state.diagnostics()));
        assert!(TokenState::try_get().is_some());
    }

    #[test]
    fn reinitializing_keeps_the_first_document() {
        let first = TokenState::get().document();

        assert!(!TokenState::install(TokenDocument::embedded()));
        TokenState::init_default();
        TokenState::init(TokenDocument::default());

        assert!(Arc::ptr_eq(&first, &TokenState::get().document()));
    }
}
