//! Formatter registry

use std::sync::Arc;

use super::HtmlFormatter;
use super::MarkdownFormatter;
use super::ReleaseFormatter;

/// Registry of available release formatters
pub struct FormatterRegistry {
    formatters: Vec<Arc<dyn ReleaseFormatter>>,
}

impl FormatterRegistry {
    /// Create a new registry with all built-in formatters
    pub fn new() -> Self {
        Self {
            formatters: vec![
                Arc::new(HtmlFormatter::new()),
                Arc::new(MarkdownFormatter::new()),
            ],
        }
    }

    /// Create an empty registry
    pub fn empty() -> Self {
        Self {
            formatters: Vec::new(),
        }
    }

    /// Register a formatter
    pub fn register<F: ReleaseFormatter + 'static>(&mut self, formatter: F) {
        self.formatters.push(Arc::new(formatter));
    }

    /// Get formatter by file extension
    pub fn get(&self, extension: &str) -> Option<Arc<dyn ReleaseFormatter>> {
        self.formatters
            .iter()
            .find(|f| f.extension() == extension)
            .cloned()
    }

    /// Get all registered formatters
    pub fn all(&self) -> &[Arc<dyn ReleaseFormatter>] {
        &self.formatters
    }

    /// Get all supported file extensions
    pub fn extensions(&self) -> Vec<&'static str> {
        self.formatters.iter().map(|f| f.extension()).collect()
    }
}

impl Default for FormatterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_creation() {
        let registry = FormatterRegistry::new();
        assert_eq!(registry.formatters.len(), 2);
    }

    #[test]
    fn test_get_by_extension() {
        let registry = FormatterRegistry::new();
        assert!(registry.get("html").is_some());
        assert!(registry.get("md").is_some());
        assert!(registry.get("rst").is_none());
    }

    #[test]
    fn test_extensions() {
        let registry = FormatterRegistry::new();
        let exts = registry.extensions();
        assert!(exts.contains(&"html"));
        assert!(exts.contains(&"md"));
    }

    #[test]
    fn test_empty_registry() {
        let registry = FormatterRegistry::empty();
        assert!(registry.all().is_empty());
    }
}
