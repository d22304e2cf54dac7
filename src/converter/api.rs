//! Public API for the converter system
//!
//! This module provides the complete public API for the converter system.
//! External modules should import from here rather than directly from
//! internal modules.

// Contract every converter implements
pub use crate::converter::traits::ImageConverter;

// Error handling
pub use crate::converter::error::{ConverterError, ConverterResult};

// Converter metadata and panel structures
pub use crate::converter::types::{ConfigPanel, ConverterInfo, FieldKind, FieldValue, PanelField};

// Registry and discovery
pub use crate::converter::discovery::{ConverterDiscovery, DiscoverySource};
pub use crate::converter::registry::ConverterRegistry;

// Contract validation
pub use crate::converter::harness::ValidationHarness;
