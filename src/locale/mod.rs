//! Localization Module
//!
//! Key-to-string translation backed by TOML bundles. Panel construction
//! renders localized text, so the translator must be initialised before any
//! converter panel is built.

// Internal modules - all access should go through api module
pub(crate) mod translator;

// Public API module - the only public interface for the locale system
pub mod api;
