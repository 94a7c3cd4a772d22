//! Node tree
//!
//! The rebuilt structure of a markup stream. A [Node::Container] stands for a
//! matched opener/closer pair and owns everything between them; a [Node::Leaf]
//! is any token that did not take part in a match, emitted verbatim.
//!
//! Matched closers are not stored. They are synthesized from the opener's name
//! when the tree is rendered (see [Node::closing_tag]).

use crate::tagtree::lexing::tag_classification::{closing_tag_for, normalized_name};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    Container { tag: String, children: Vec<Node> },
    Leaf { content: String },
}

impl Node {
    pub fn container(tag: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Container {
            tag: tag.into(),
            children,
        }
    }

    pub fn leaf(content: impl Into<String>) -> Self {
        Node::Leaf {
            content: content.into(),
        }
    }

    /// Raw token text carried by this node: the opening tag or the leaf content.
    pub fn text(&self) -> &str {
        match self {
            Node::Container { tag, .. } => tag,
            Node::Leaf { content } => content,
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Container { children, .. } => children,
            Node::Leaf { .. } => &[],
        }
    }

    /// Normalized tag name of a container.
    pub fn name(&self) -> Option<String> {
        match self {
            Node::Container { tag, .. } => normalized_name(tag),
            Node::Leaf { .. } => None,
        }
    }

    /// The synthesized closer of a container (`</name>`).
    pub fn closing_tag(&self) -> Option<String> {
        match self {
            Node::Container { tag, .. } => Some(closing_tag_for(tag)),
            Node::Leaf { .. } => None,
        }
    }

    /// Number of container levels from this node down, 0 for a leaf.
    pub fn height(&self) -> usize {
        match self {
            Node::Container { children, .. } => 1 + height(children),
            Node::Leaf { .. } => 0,
        }
    }
}

/// Tallest container chain in a node sequence.
pub fn height(nodes: &[Node]) -> usize {
    nodes.iter().map(Node::height).max().unwrap_or(0)
}

/// Every token text reachable in pre-order: container tags and leaf contents.
pub fn token_texts(nodes: &[Node]) -> Vec<&str> {
    let mut texts = Vec::new();
    collect_texts(nodes, &mut texts);
    texts
}

fn collect_texts<'a>(nodes: &'a [Node], texts: &mut Vec<&'a str>) {
    for node in nodes {
        texts.push(node.text());
        collect_texts(node.children(), texts);
    }
}

/// Total number of nodes, containers included.
pub fn count(nodes: &[Node]) -> usize {
    nodes.iter().map(|node| 1 + count(node.children())).sum()
}
