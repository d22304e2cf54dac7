//! Converter Validation Harness
//!
//! Confirms that every discovered converter satisfies its contract - a
//! non-empty name and a constructible configuration panel - before any
//! converter reaches an end user. The run is a gate, not a diagnostic
//! report: it stops at the first failure and the verdict is binary.

use crate::converter::discovery::ConverterDiscovery;
use crate::converter::error::{ConverterError, ConverterResult};
use crate::locale::api::Translator;

/// One-shot contract validation over the full discovered converter set
pub struct ValidationHarness {
    discovery: ConverterDiscovery,
}

impl ValidationHarness {
    /// Harness over the link-time registered converter set
    pub fn new() -> Self {
        Self {
            discovery: ConverterDiscovery::new(),
        }
    }

    /// Harness over a specific discovery, used to validate fixed sets
    pub fn with_discovery(discovery: ConverterDiscovery) -> Self {
        Self { discovery }
    }

    /// Run one validation pass.
    ///
    /// The translator handle is required up front: panel construction renders
    /// localized text, so initialisation ordering is explicit in the
    /// signature rather than left to call-order convention.
    ///
    /// Returns the number of converters validated. Any contract violation is
    /// fatal to the run and identifies the offending converter by name when
    /// obtainable, otherwise by position. Violations are deterministic
    /// packaging defects and are never retried.
    pub fn run(&self, translator: &Translator) -> ConverterResult<usize> {
        log::info!("Converter validation started");

        let registry = self.discovery.discover_registry()?;

        for (position, converter) in registry.iter().enumerate() {
            let name = converter.name();
            if name.trim().is_empty() {
                return Err(ConverterError::ContractViolation {
                    converter: format!("#{}", position),
                    operation: "name".to_string(),
                    cause: "converter reported an empty name".to_string(),
                });
            }

            log::info!("Creating panel for {}", name);
            converter.panel(translator).map_err(|e| match e {
                // Keep attribution a converter already supplied
                violation @ ConverterError::ContractViolation { .. } => violation,
                other => ConverterError::ContractViolation {
                    converter: name.to_string(),
                    operation: "panel".to_string(),
                    cause: other.to_string(),
                },
            })?;
        }

        log::info!(
            "Converter validation complete: {} converters passed",
            registry.len()
        );
        Ok(registry.len())
    }
}

impl Default for ValidationHarness {
    fn default() -> Self {
        Self::new()
    }
}
