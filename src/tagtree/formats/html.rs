//! HTML page output
//!
//! Wraps the rendered lines in a minimal HTML document so the tree can be
//! viewed in a browser. Every line ends with `<br>`; indentation uses
//! non-breaking spaces by default so it survives whitespace collapsing.

use super::lines::{escape, render};
use super::registry::{FormatError, Formatter};
use crate::tagtree::ast::Node;
use crate::tagtree::config::HtmlConfig;

pub const DEFAULT_TITLE: &str = "HTML Output";
pub const DEFAULT_FONT_FAMILY: &str = "courier,courier new,serif";
pub const DEFAULT_INDENT_UNIT: &str = "&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlFormatter {
    title: String,
    font_family: String,
    indent_unit: String,
}

impl HtmlFormatter {
    pub fn from_config(config: &HtmlConfig) -> Self {
        HtmlFormatter {
            title: config.title.clone(),
            font_family: config.font_family.clone(),
            indent_unit: config.indent_unit.clone(),
        }
    }

    pub fn to_html(&self, nodes: &[Node]) -> String {
        let mut out = String::new();
        out.push_str("<!DOCTYPE html>\n");
        out.push_str("<html>\n");
        out.push_str("<head>\n");
        out.push_str(&format!("<title>{}</title>\n", escape(&self.title)));
        out.push_str("<style type='text/css'>\n");
        out.push_str(&format!(
            "body {{font-family:{};}}</style>",
            escape(&self.font_family)
        ));
        out.push_str("</head>\n");
        out.push_str("<body>\n");
        for line in render(nodes, &self.indent_unit) {
            out.push_str(&line);
            out.push_str("<br>\n");
        }
        out.push_str("</body>\n");
        out.push_str("</html>\n");
        out
    }
}

impl Default for HtmlFormatter {
    fn default() -> Self {
        HtmlFormatter {
            title: DEFAULT_TITLE.to_string(),
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            indent_unit: DEFAULT_INDENT_UNIT.to_string(),
        }
    }
}

impl Formatter for HtmlFormatter {
    fn name(&self) -> &str {
        "html"
    }

    fn serialize(&self, nodes: &[Node]) -> Result<String, FormatError> {
        Ok(self.to_html(nodes))
    }

    fn description(&self) -> &str {
        "Indented, escaped tree inside an HTML page"
    }
}
