//! Converter Discovery System
//!
//! Enumerates all converters present in the running process without the
//! caller knowing their concrete identities. Discovery is cheap: converter
//! instances are constructed with their parameter defaults, but no panel is
//! built here. Order of the discovered set is unspecified.
//!
//! The discovery source is injectable so tests can supply a fixed,
//! deterministic converter set instead of depending on whatever converters
//! are linked into the process.

use crate::converter::builtin::api::get_all_builtin_converters;
use crate::converter::error::ConverterResult;
use crate::converter::registry::ConverterRegistry;
use crate::converter::traits::ImageConverter;

/// Source function yielding the raw converter set for one discovery pass
pub type DiscoverySource = fn() -> ConverterResult<Vec<Box<dyn ImageConverter>>>;

/// Configuration for converter discovery
#[derive(Debug, Clone, Default)]
pub(crate) struct DiscoveryConfig {
    /// Converters to exclude from discovery, by name
    pub excluded_converters: Vec<String>,
}

/// Converter discovery over an injectable source
pub struct ConverterDiscovery {
    config: DiscoveryConfig,
    source: DiscoverySource,
}

fn builtin_source() -> ConverterResult<Vec<Box<dyn ImageConverter>>> {
    Ok(get_all_builtin_converters())
}

impl ConverterDiscovery {
    /// Create discovery over the link-time registered converter set
    pub fn new() -> Self {
        Self {
            config: DiscoveryConfig::default(),
            source: builtin_source,
        }
    }

    /// Create discovery with exclusions
    pub fn with_excludes(excludes: Vec<&str>) -> Self {
        let mut config = DiscoveryConfig::default();
        config.excluded_converters = excludes.iter().map(|s| s.to_string()).collect();

        Self {
            config,
            source: builtin_source,
        }
    }

    /// Create discovery over a fixed source, for deterministic tests
    pub fn with_source(source: DiscoverySource) -> Self {
        Self {
            config: DiscoveryConfig::default(),
            source,
        }
    }

    /// Discover all currently available converters.
    ///
    /// Tolerates an empty set (a valid, if unusual, state) and never builds
    /// panels. A converter that cannot be enumerated surfaces as an error
    /// rather than being dropped silently.
    pub fn discover(&self) -> ConverterResult<Vec<Box<dyn ImageConverter>>> {
        let mut converters = (self.source)()?;
        log::debug!("Discovered {} converters", converters.len());

        if !self.config.excluded_converters.is_empty() {
            log::debug!("Applying exclusions: {:?}", self.config.excluded_converters);
            converters.retain(|c| {
                !self
                    .config
                    .excluded_converters
                    .iter()
                    .any(|excluded| excluded == c.name())
            });
        }

        Ok(converters)
    }

    /// Run one discovery pass and snapshot the result into a fresh registry
    pub fn discover_registry(&self) -> ConverterResult<ConverterRegistry> {
        Ok(ConverterRegistry::from_converters(self.discover()?))
    }
}

impl Default for ConverterDiscovery {
    fn default() -> Self {
        Self::new()
    }
}
