//! Testing utilities
//!
//! Shorthand constructors for expected trees, the inverse of [escape], and
//! access to the sample markup under `tests/fixtures`.
//!
//! ```rust-example
//! use tagtree::tagtree::testing::{container, leaf};
//!
//! assert_eq!(
//!     tagtree::decompose("<p>hi</p>"),
//!     vec![container("<p>", vec![leaf("hi")])]
//! );
//! ```
//!
//! [escape]: crate::tagtree::formats::escape

use crate::tagtree::ast::Node;
use std::path::PathBuf;

pub fn container(tag: &str, children: Vec<Node>) -> Node {
    Node::container(tag, children)
}

pub fn leaf(content: &str) -> Node {
    Node::leaf(content)
}

/// Undo the entity escaping applied by the renderer.
pub fn unescape(text: &str) -> String {
    text.replace("&lt;", "<").replace("&gt;", ">")
}

/// Write a tree back out as markup, closing every container with its
/// synthesized closer. Siblings are separated by a single space.
pub fn to_markup(nodes: &[Node]) -> String {
    let mut parts = Vec::new();
    push_markup(nodes, &mut parts);
    parts.join(" ")
}

fn push_markup(nodes: &[Node], parts: &mut Vec<String>) {
    for node in nodes {
        parts.push(node.text().to_string());
        if let Some(closer) = node.closing_tag() {
            push_markup(node.children(), parts);
            parts.push(closer);
        }
    }
}

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Load a sample file from `tests/fixtures`. Panics if it is missing.
pub fn fixture_source(name: &str) -> String {
    let path = fixture_path(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}
