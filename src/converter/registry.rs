//! Converter Registry
//!
//! Per-run snapshot of discovered converters. The registry is populated fresh
//! by each discovery pass, read-only once built, and discarded at run end; it
//! carries no state between passes.

use crate::converter::traits::ImageConverter;

/// Read-only-after-discovery collection of converter descriptors
pub struct ConverterRegistry {
    converters: Vec<Box<dyn ImageConverter>>,
}

impl std::fmt::Debug for ConverterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConverterRegistry")
            .field("converters", &self.names())
            .finish()
    }
}

impl ConverterRegistry {
    /// Create a new empty converter registry
    pub fn new() -> Self {
        Self {
            converters: Vec::new(),
        }
    }

    /// Build a registry from an already-discovered converter set
    pub fn from_converters(converters: Vec<Box<dyn ImageConverter>>) -> Self {
        Self { converters }
    }

    /// Add a converter to the registry.
    ///
    /// Name uniqueness is desirable but not enforced; two converters sharing
    /// a name are both kept and both validated.
    pub fn register(&mut self, converter: Box<dyn ImageConverter>) {
        self.converters.push(converter);
    }

    /// Names of all registered converters, in discovery order
    pub fn names(&self) -> Vec<String> {
        self.converters.iter().map(|c| c.name().to_string()).collect()
    }

    /// Iterate the registered converters.
    ///
    /// Iteration order is whatever discovery yielded; consumers must not
    /// read priority into it.
    pub fn iter(&self) -> impl Iterator<Item = &dyn ImageConverter> {
        self.converters.iter().map(|c| c.as_ref())
    }

    /// Total count of registered converters
    pub fn len(&self) -> usize {
        self.converters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }
}

impl Default for ConverterRegistry {
    fn default() -> Self {
        Self::new()
    }
}
