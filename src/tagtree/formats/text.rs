//! Plain text output: the rendered lines, one per line.

use super::lines::render;
use super::registry::{FormatError, Formatter};
use crate::tagtree::ast::Node;
use crate::tagtree::config::TextConfig;

pub const DEFAULT_INDENT_UNIT: &str = "    ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFormatter {
    indent_unit: String,
}

impl TextFormatter {
    pub fn new(indent_unit: impl Into<String>) -> Self {
        TextFormatter {
            indent_unit: indent_unit.into(),
        }
    }

    pub fn from_config(config: &TextConfig) -> Self {
        Self::new(config.indent_unit.clone())
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_INDENT_UNIT)
    }
}

impl Formatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn serialize(&self, nodes: &[Node]) -> Result<String, FormatError> {
        let mut out = String::new();
        for line in render(nodes, &self.indent_unit) {
            out.push_str(&line);
            out.push('\n');
        }
        Ok(out)
    }

    fn description(&self) -> &str {
        "Indented, escaped tree as plain text"
    }
}
