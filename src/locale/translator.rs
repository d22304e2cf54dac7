//! Translator service
//!
//! Loads a key/string table from a TOML bundle and serves lookups for panel
//! labels and titles. An English bundle is embedded as the default; alternate
//! bundles can be loaded from disk.

use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Result type alias for locale operations
pub type LocaleResult<T> = std::result::Result<T, LocaleError>;

/// Error types for locale bundle loading
#[derive(Debug, thiserror::Error)]
pub enum LocaleError {
    #[error("Failed to read locale bundle '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse locale bundle: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Locale bundle declares an empty language code")]
    EmptyLanguage,
}

/// On-disk shape of a locale bundle
#[derive(Debug, Deserialize)]
struct LocaleBundle {
    language: String,
    #[serde(default)]
    strings: HashMap<String, String>,
}

/// Key-to-string translator for one language
#[derive(Debug, Clone)]
pub struct Translator {
    language: String,
    strings: HashMap<String, String>,
}

/// Embedded default bundle, always available without filesystem access
const DEFAULT_BUNDLE: &str = include_str!("bundles/en.toml");

// Process-wide translator, initialised once on first use
static TRANSLATOR: OnceCell<Translator> = OnceCell::new();

/// Get the process-wide translator, initialising it from the embedded
/// default bundle on first call. Idempotent: later calls return the same
/// instance regardless of arguments elsewhere.
pub fn get_translation_service() -> LocaleResult<&'static Translator> {
    TRANSLATOR.get_or_try_init(|| Translator::from_bundle_str(DEFAULT_BUNDLE))
}

impl Translator {
    /// Parse a translator from TOML bundle content
    pub fn from_bundle_str(content: &str) -> LocaleResult<Self> {
        let bundle: LocaleBundle = toml::from_str(content)?;
        if bundle.language.trim().is_empty() {
            return Err(LocaleError::EmptyLanguage);
        }
        Ok(Self {
            language: bundle.language,
            strings: bundle.strings,
        })
    }

    /// Load a translator from a TOML bundle file
    pub fn from_file(path: &Path) -> LocaleResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| LocaleError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_bundle_str(&content)
    }

    /// Language code this translator serves
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Look up a localized string. Unknown keys fall back to the key itself
    /// so a missing translation never blocks panel construction.
    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        self.strings.get(key).map(String::as_str).unwrap_or(key)
    }

    /// Check whether a key has an explicit translation
    pub fn contains(&self, key: &str) -> bool {
        self.strings.contains_key(key)
    }

    /// Number of translated strings in the bundle
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}
