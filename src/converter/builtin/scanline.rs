//! Scanline converter - horizontal sweep with brightness-modulated line weight

use crate::converter::error::ConverterResult;
use crate::converter::traits::ImageConverter;
use crate::converter::types::{ConfigPanel, ConverterInfo, FieldKind, FieldValue, PanelField};
use crate::locale::api::Translator;
use crate::register_converter;

register_converter!(|| Box::new(ScanlineConverter::new()));

/// Scanline toolpath converter
#[derive(Debug)]
pub struct ScanlineConverter {
    sample_size: i64,
    single_direction: bool,
}

impl ScanlineConverter {
    pub fn new() -> Self {
        Self {
            sample_size: 3,
            single_direction: false,
        }
    }
}

impl Default for ScanlineConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageConverter for ScanlineConverter {
    fn name(&self) -> &str {
        "Scanline"
    }

    fn info(&self) -> ConverterInfo {
        ConverterInfo {
            name: "Scanline".to_string(),
            version: "1.0.0".to_string(),
            description: "Sweep the image row by row".to_string(),
            api_version: crate::core::version::get_api_version(),
        }
    }

    fn panel(&self, translator: &Translator) -> ConverterResult<ConfigPanel> {
        Ok(ConfigPanel::new(translator.get("scanline.title"))
            .with_field(PanelField::new(
                "sampling",
                translator.get("scanline.sampling"),
                FieldKind::Slider { min: 1, max: 10 },
                FieldValue::Int(self.sample_size),
            ))
            .with_field(PanelField::new(
                "single_direction",
                translator.get("scanline.single_direction"),
                FieldKind::Checkbox,
                FieldValue::Bool(self.single_direction),
            )))
    }
}
