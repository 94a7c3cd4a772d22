//! Building
//!
//! Turns a token stream into a node tree in three steps:
//!
//! 1. [closing_registry]: collect the names of all closers
//! 2. [depth]: give every token a nesting depth in one forward pass
//! 3. [tree_builder]: pair openers with closers band by band, recursing into
//!    the tokens between them
//!
//! The registry is computed once and passed down explicitly; none of the steps
//! keep state between calls.

pub mod closing_registry;
pub mod depth;
pub mod tree_builder;

pub use closing_registry::ClosingTagRegistry;
pub use depth::{annotate_depths, DepthToken};
pub use tree_builder::build_level;

use crate::tagtree::ast::{self, Node};
use crate::tagtree::lexing::Token;

/// Rebuild the node tree for a token stream.
pub fn build_tree(tokens: &[Token<'_>]) -> Vec<Node> {
    let registry = ClosingTagRegistry::from_tokens(tokens);
    let annotated = annotate_depths(tokens, &registry);
    let nodes = build_level(&annotated, &registry, 0);
    tracing::debug!(
        roots = nodes.len(),
        nodes = ast::count(&nodes),
        height = ast::height(&nodes),
        "built node tree"
    );
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagtree::lexing::tokenize;
    use crate::tagtree::testing::{container, leaf};

    #[test]
    fn test_build_tree_runs_the_whole_pipeline() {
        let tokens = tokenize("<html>\n  <body>\n    <h1>Title</h1>\n    <p>Hi<br>there</p>\n  </body>\n</html>");
        assert_eq!(
            build_tree(&tokens),
            vec![container(
                "<html>",
                vec![container(
                    "<body>",
                    vec![
                        container("<h1>", vec![leaf("Title")]),
                        container("<p>", vec![leaf("Hi"), leaf("<br>"), leaf("there")]),
                    ]
                )]
            )]
        );
    }

    #[test]
    fn test_tree_height_is_bounded_by_annotated_depth() {
        let tokens = tokenize("<a><b><c>x</c></b></a><d>y</d>");
        let registry = ClosingTagRegistry::from_tokens(&tokens);
        let max_depth = annotate_depths(&tokens, &registry)
            .iter()
            .map(|t| t.depth)
            .max()
            .unwrap_or(0);
        let nodes = build_tree(&tokens);
        assert_eq!(max_depth, 3);
        assert!(ast::height(&nodes) <= max_depth);
    }
}
