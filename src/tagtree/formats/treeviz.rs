//! Treeviz formatter for node trees
//!
//! A one line per node view that draws the structure with box connectors
//! instead of indentation markup, which makes it handy for inspecting what the
//! builder did with a messy input:
//!
//! ```text
//! └─ <html>
//!   ├─ <head>
//!   │ └─ <title>
//!   │   └─ Example
//!   └─ <body>
//!     └─ Hello
//! ```
//!
//! Labels are the raw token text with whitespace runs collapsed, truncated to
//! 40 characters. Nothing is escaped, and closers are not shown.

use super::registry::{FormatError, Formatter};
use crate::tagtree::ast::Node;

const MAX_LABEL_CHARS: usize = 40;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn label(node: &Node) -> String {
    let collapsed = node.text().split_whitespace().collect::<Vec<_>>().join(" ");
    truncate(&collapsed, MAX_LABEL_CHARS)
}

pub fn to_treeviz_str(nodes: &[Node]) -> String {
    let mut result = String::new();
    append_children(&mut result, nodes, "");
    result
}

fn append_node(result: &mut String, node: &Node, prefix: &str, is_last: bool) {
    let connector = if is_last { "└─" } else { "├─" };
    result.push_str(&format!("{}{} {}\n", prefix, connector, label(node)));

    let new_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    append_children(result, node.children(), &new_prefix);
}

fn append_children(result: &mut String, children: &[Node], prefix: &str) {
    for (i, child) in children.iter().enumerate() {
        let is_last = i == children.len() - 1;
        append_node(result, child, prefix, is_last);
    }
}

pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, nodes: &[Node]) -> Result<String, FormatError> {
        Ok(to_treeviz_str(nodes))
    }

    fn description(&self) -> &str {
        "Box-drawing tree view of the nodes"
    }
}
