//! Line renderer
//!
//! Serializes a node tree into printable lines. A container contributes its
//! opening tag, its children one indent deeper, then `</name>` rebuilt from the
//! opener; a leaf contributes its content. Only the token text is escaped, so
//! an indent unit may itself be markup (such as `&nbsp;`).

use crate::tagtree::ast::Node;
use crate::tagtree::lexing::tag_classification::closing_tag_for;

/// Replace angle brackets with entity references.
pub fn escape(text: &str) -> String {
    text.replace('<', "&lt;").replace('>', "&gt;")
}

pub fn render(nodes: &[Node], indent_unit: &str) -> Vec<String> {
    let mut lines = Vec::new();
    render_into(&mut lines, nodes, indent_unit, 0);
    lines
}

fn render_into(lines: &mut Vec<String>, nodes: &[Node], indent_unit: &str, depth: usize) {
    let indent = indent_unit.repeat(depth);
    for node in nodes {
        match node {
            Node::Container { tag, children } => {
                lines.push(format!("{}{}", indent, escape(tag)));
                render_into(lines, children, indent_unit, depth + 1);
                lines.push(format!("{}{}", indent, escape(&closing_tag_for(tag))));
            }
            Node::Leaf { content } => lines.push(format!("{}{}", indent, escape(content))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagtree::testing::{container, leaf};

    #[test]
    fn test_escape() {
        assert_eq!(escape("<a href=\"x\">"), "&lt;a href=\"x\"&gt;");
        assert_eq!(escape("a & b"), "a & b");
    }

    #[test]
    fn test_render_nested() {
        let nodes = vec![container("<a>", vec![container("<b>", vec![leaf("x")])])];
        assert_eq!(
            render(&nodes, "  "),
            vec![
                "&lt;a&gt;",
                "  &lt;b&gt;",
                "    x",
                "  &lt;/b&gt;",
                "&lt;/a&gt;"
            ]
        );
    }

    #[test]
    fn test_closer_uses_normalized_name() {
        let nodes = vec![container("<DIV class=\"x\">", vec![])];
        assert_eq!(
            render(&nodes, "\t"),
            vec!["&lt;DIV class=\"x\"&gt;", "&lt;/div&gt;"]
        );
    }

    #[test]
    fn test_leaves_are_escaped_but_indent_is_not() {
        let nodes = vec![container("<p>", vec![leaf("</b>")])];
        assert_eq!(
            render(&nodes, "&nbsp;"),
            vec!["&lt;p&gt;", "&nbsp;&lt;/b&gt;", "&lt;/p&gt;"]
        );
    }

    #[test]
    fn test_render_empty() {
        assert!(render(&[], "  ").is_empty());
    }
}
