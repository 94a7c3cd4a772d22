//! Tree builder
//!
//! Rebuilds containers from the depth-annotated stream, one depth band per
//! call. Each level scans its slice left to right, keeping a pending opener and
//! the segment of deeper tokens gathered since that opener:
//!
//! - a registered opener at this depth replaces whatever is pending
//! - a deeper token joins the pending segment
//! - a closer at this depth whose name matches the pending opener emits a
//!   container, its children built from the segment one level down
//! - anything else becomes a leaf at this level
//!
//! A pending opener that is replaced, or still pending when the slice ends,
//! is dropped together with its segment. Unterminated containers vanish from
//! the output instead of surfacing as leaves. Deeper tokens seen before any
//! opener at this depth are dropped the same way.

use crate::tagtree::ast::Node;
use crate::tagtree::building::closing_registry::ClosingTagRegistry;
use crate::tagtree::building::depth::DepthToken;
use crate::tagtree::lexing::tag_classification::tags_match;
use crate::tagtree::lexing::TokenKind;

pub fn build_level(
    tokens: &[DepthToken<'_>],
    registry: &ClosingTagRegistry,
    depth: usize,
) -> Vec<Node> {
    let mut nodes = Vec::new();
    let mut pending: Option<DepthToken<'_>> = None;
    let mut segment: Vec<DepthToken<'_>> = Vec::new();

    for &annotated in tokens {
        let text = annotated.as_str();
        let kind = annotated.token.kind();

        if annotated.depth == depth && kind == TokenKind::Opening && registry.closes(text) {
            if let Some(superseded) = pending.replace(annotated) {
                tracing::debug!(
                    opener = superseded.as_str(),
                    span = ?superseded.token.span(),
                    dropped = segment.len(),
                    depth,
                    "dropping unterminated opener"
                );
            }
            segment.clear();
        } else if annotated.depth > depth {
            segment.push(annotated);
        } else if annotated.depth == depth
            && kind == TokenKind::Closing
            && pending.is_some_and(|opener| tags_match(opener.as_str(), text))
        {
            if let Some(opener) = pending.take() {
                let children = build_level(&std::mem::take(&mut segment), registry, depth + 1);
                nodes.push(Node::container(opener.as_str(), children));
            }
        } else {
            nodes.push(Node::leaf(text));
        }
    }

    if let Some(unterminated) = pending {
        tracing::debug!(
            opener = unterminated.as_str(),
            span = ?unterminated.token.span(),
            dropped = segment.len(),
            depth,
            "dropping unterminated opener at end of level"
        );
    }

    nodes
}
