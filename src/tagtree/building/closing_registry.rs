//! Closing-tag registry
//!
//! The set of names that some closer in the stream claims to close. An opener
//! is only treated as a possible container start when its name is registered
//! here; nothing checks that the closer actually sits at the right depth.

use crate::tagtree::lexing::{classify, normalized_name, Token, TokenKind};
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClosingTagRegistry {
    names: HashSet<String>,
    unnamed: usize,
}

impl ClosingTagRegistry {
    /// Collect the names of every closing tag in one pass.
    pub fn from_tokens(tokens: &[Token<'_>]) -> Self {
        let mut registry = Self::default();
        for token in tokens.iter().filter(|t| t.kind() == TokenKind::Closing) {
            match token.name() {
                Some(name) => {
                    registry.names.insert(name);
                }
                None => registry.unnamed += 1,
            }
        }
        tracing::debug!(
            names = registry.names.len(),
            unnamed = registry.unnamed,
            "built closing-tag registry"
        );
        registry
    }

    /// Whether a normalized name has a closer somewhere. `None` never does.
    pub fn contains(&self, name: Option<&str>) -> bool {
        name.is_some_and(|name| self.names.contains(name))
    }

    /// Whether a token is an opener with a registered closer.
    pub fn closes(&self, token: &str) -> bool {
        classify(token) == TokenKind::Opening
            && self.contains(normalized_name(token).as_deref())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Closers like `</>` that carry no name and so register nothing.
    pub fn unnamed_closers(&self) -> usize {
        self.unnamed
    }
}
