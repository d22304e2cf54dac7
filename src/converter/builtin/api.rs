//! API for builtin converter registration and discovery
//!
//! Link-time registration for converters compiled into the host. Converters
//! use the `register_converter!` macro to submit themselves for automatic
//! discovery, so the host never enumerates concrete kinds by name.

use crate::converter::traits::ImageConverter;
use inventory;

/// Entry for a builtin converter in the dynamic registry
pub struct ConverterEntry {
    pub factory: fn() -> Box<dyn ImageConverter>,
}

// Collect all builtin converter entries
inventory::collect!(ConverterEntry);

/// Macro for registering builtin converters
#[macro_export]
macro_rules! register_converter {
    ($factory_expr:expr) => {
        inventory::submit!($crate::converter::builtin::api::ConverterEntry {
            factory: $factory_expr
        });
    };
}

/// Instantiate all registered builtin converters.
///
/// Construction here is cheap (parameter defaults only); configuration
/// panels are built later, on demand.
pub fn get_all_builtin_converters() -> Vec<Box<dyn ImageConverter>> {
    inventory::iter::<ConverterEntry>()
        .map(|entry| (entry.factory)())
        .collect()
}
