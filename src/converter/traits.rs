//! Converter Trait System
//!
//! The contract every image-to-toolpath converter implements. The host never
//! names concrete converter kinds; it only works against this trait, which is
//! why the validation harness can gate arbitrary third-party converters.

use crate::converter::error::ConverterResult;
use crate::converter::types::{ConfigPanel, ConverterInfo};
use crate::locale::api::Translator;

/// Contract implemented by every converter
///
/// Two capabilities make a converter usable by the host: a stable display
/// name and a factory for its configuration panel. Name retrieval is called
/// frequently (UI listings) and must stay cheap and infallible. Panel
/// construction may do moderate setup work (reading default parameter
/// values) but a failure there is a packaging defect in the converter, not a
/// recoverable runtime condition.
pub trait ImageConverter: Send + Sync {
    /// Stable, non-empty, human-readable converter name
    fn name(&self) -> &str;

    /// Converter metadata for listings that should not construct panels
    fn info(&self) -> ConverterInfo;

    /// Construct a fresh configuration panel for this converter's tunable
    /// parameters. Panels render localized text, so the translator must be
    /// initialised before this is called.
    fn panel(&self, translator: &Translator) -> ConverterResult<ConfigPanel>;
}
