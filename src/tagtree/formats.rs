//! Output format implementations for node trees
//!
//! [lines] holds the core renderer: one escaped, indented line per node, with
//! synthesized closers. The formatters wrap it (or the tree itself) into
//! complete outputs:
//!
//! - html: the rendered lines inside a minimal HTML page
//! - text: the rendered lines as plain text
//! - json: the tree as JSON
//! - treeviz: a box-drawing tree view for debugging

pub mod html;
pub mod json;
pub mod lines;
pub mod registry;
pub mod text;
pub mod treeviz;

pub use html::HtmlFormatter;
pub use json::JsonFormatter;
pub use lines::{escape, render};
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use text::TextFormatter;
pub use treeviz::{to_treeviz_str, TreevizFormatter};
