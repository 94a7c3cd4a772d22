//! JSON output of the node tree.

use super::registry::{FormatError, Formatter};
use crate::tagtree::ast::Node;

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, nodes: &[Node]) -> Result<String, FormatError> {
        let mut json = serde_json::to_string_pretty(nodes)
            .map_err(|e| FormatError::SerializationError(e.to_string()))?;
        json.push('\n');
        Ok(json)
    }

    fn description(&self) -> &str {
        "Node tree as JSON"
    }
}
