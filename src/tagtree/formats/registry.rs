//! Format registry for node tree serialization
//!
//! Each output format implements [Formatter] and is looked up by name in a
//! [FormatRegistry]. The registry built from a [TagtreeConfig] carries the
//! configured title, fonts and indent units into the formatters.

use crate::tagtree::ast::Node;
use crate::tagtree::config::TagtreeConfig;
use std::collections::HashMap;
use std::fmt;

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Format not found in registry
    FormatNotFound(String),
    /// Error during serialization
    SerializationError(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}

/// Trait for node tree formatters
pub trait Formatter: Send + Sync {
    /// The name of this format (e.g., "html", "json")
    fn name(&self) -> &str;

    /// Serialize a node sequence to this format
    fn serialize(&self, nodes: &[Node]) -> Result<String, FormatError>;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }
}

pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter, replacing any existing one with the same name.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    /// Like [get](Self::get), but failing with [FormatError::FormatNotFound].
    pub fn require(&self, name: &str) -> Result<&dyn Formatter, FormatError> {
        self.get(name)
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Serialize nodes using the specified format
    pub fn serialize(&self, nodes: &[Node], format: &str) -> Result<String, FormatError> {
        self.require(format)?.serialize(nodes)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Create a registry with the built-in formatters and their default settings
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(super::HtmlFormatter::default());
        registry.register(super::TextFormatter::default());
        registry.register(super::JsonFormatter);
        registry.register(super::TreevizFormatter);
        registry
    }

    /// Create a registry with the built-in formatters configured from `config`
    pub fn from_config(config: &TagtreeConfig) -> Self {
        let mut registry = Self::with_defaults();
        registry.register(super::HtmlFormatter::from_config(&config.html));
        registry.register(super::TextFormatter::from_config(&config.text));
        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagtree::config::Loader;
    use crate::tagtree::testing::leaf;

    struct TestFormatter;
    impl Formatter for TestFormatter {
        fn name(&self) -> &str {
            "test"
        }
        fn serialize(&self, nodes: &[Node]) -> Result<String, FormatError> {
            Ok(format!("{} nodes", nodes.len()))
        }
        fn description(&self) -> &str {
            "Test formatter"
        }
    }

    #[test]
    fn test_registry_creation() {
        let registry = FormatRegistry::new();
        assert!(registry.list_formats().is_empty());
    }

    #[test]
    fn test_registry_register_and_get() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormatter);

        assert!(registry.has("test"));
        assert_eq!(registry.get("test").map(|f| f.description()), Some("Test formatter"));
        assert!(registry.get("nonexistent").is_none());
    }

    #[test]
    fn test_registry_serialize() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormatter);

        let result = registry.serialize(&[leaf("a"), leaf("b")], "test");
        assert_eq!(result, Ok("2 nodes".to_string()));
    }

    #[test]
    fn test_registry_serialize_not_found() {
        let registry = FormatRegistry::new();
        match registry.serialize(&[], "nonexistent") {
            Err(FormatError::FormatNotFound(name)) => assert_eq!(name, "nonexistent"),
            other => panic!("Expected FormatNotFound error, got {other:?}"),
        }
    }

    #[test]
    fn test_registry_with_defaults() {
        let registry = FormatRegistry::default();
        assert_eq!(
            registry.list_formats(),
            vec!["html", "json", "text", "treeviz"]
        );
    }

    #[test]
    fn test_registry_from_config_applies_settings() {
        let config = Loader::new()
            .set_override("text.indent_unit", "--")
            .expect("override to apply")
            .build()
            .expect("config to build");
        let registry = FormatRegistry::from_config(&config);
        let nodes = vec![crate::tagtree::testing::container("<p>", vec![leaf("x")])];
        assert_eq!(
            registry.serialize(&nodes, "text"),
            Ok("&lt;p&gt;\n--x\n&lt;/p&gt;\n".to_string())
        );
    }

    #[test]
    fn test_format_error_display() {
        let err1 = FormatError::FormatNotFound("test".to_string());
        assert_eq!(format!("{err1}"), "Format 'test' not found");

        let err2 = FormatError::SerializationError("error".to_string());
        assert_eq!(format!("{err2}"), "Serialization error: error");
    }

    #[test]
    fn test_registry_replace_formatter() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormatter);
        registry.register(TestFormatter);

        assert_eq!(registry.list_formats().len(), 1);
    }
}
