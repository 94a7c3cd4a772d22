//! Depth annotation
//!
//! One forward pass that turns the flat token stream into an implicit tree
//! shape before any opener is paired with a closer:
//!
//! - a registered opener is recorded at the current depth, then depth goes up
//! - a closer lowers depth first (never below zero) and is recorded there
//! - everything else is recorded at the current depth
//!
//! Closers are not checked against the most recent opener. Mismatches are left
//! for the tree builder to sort out.

use crate::tagtree::building::closing_registry::ClosingTagRegistry;
use crate::tagtree::lexing::{Token, TokenKind};

/// A token paired with its nesting depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthToken<'a> {
    pub token: Token<'a>,
    pub depth: usize,
}

impl<'a> DepthToken<'a> {
    pub fn as_str(&self) -> &'a str {
        self.token.as_str()
    }
}

pub fn annotate_depths<'a>(
    tokens: &[Token<'a>],
    registry: &ClosingTagRegistry,
) -> Vec<DepthToken<'a>> {
    let mut depth = 0usize;
    let mut deepest = 0usize;
    let annotated: Vec<DepthToken<'a>> = tokens
        .iter()
        .map(|&token| match token.kind() {
            TokenKind::Opening if registry.contains(token.name().as_deref()) => {
                let recorded = DepthToken { token, depth };
                depth += 1;
                deepest = deepest.max(depth);
                recorded
            }
            TokenKind::Closing => {
                depth = depth.saturating_sub(1);
                DepthToken { token, depth }
            }
            _ => DepthToken { token, depth },
        })
        .collect();

    tracing::debug!(
        tokens = annotated.len(),
        max_depth = deepest,
        unclosed = depth,
        "annotated token depths"
    );
    annotated
}
