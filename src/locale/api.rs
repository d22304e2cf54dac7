//! Public API for the locale system
//!
//! This module provides the complete public API for localization.
//! External modules should import from here rather than directly from
//! internal modules.

pub use crate::locale::translator::{LocaleError, LocaleResult, Translator};

pub use crate::locale::translator::get_translation_service;
