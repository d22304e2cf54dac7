//! Converter System Module
//!
//! Pluggable image-to-toolpath converters. Converters register themselves at
//! link time and are discovered at runtime without the host enumerating
//! concrete implementations; a validation harness confirms every discovered
//! converter honors its contract before it is exposed to users.

// Internal modules - all access should go through api module
pub(crate) mod builtin;
pub(crate) mod discovery;
pub(crate) mod error;
pub(crate) mod harness;
pub(crate) mod registry;
pub(crate) mod traits;
pub(crate) mod types;

// Public API module - the only public interface for the converter system
pub mod api;
