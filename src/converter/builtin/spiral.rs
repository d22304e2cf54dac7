//! Spiral converter - draws the image as a single spiral from the center outward

use crate::converter::error::ConverterResult;
use crate::converter::traits::ImageConverter;
use crate::converter::types::{ConfigPanel, ConverterInfo, FieldKind, FieldValue, PanelField};
use crate::locale::api::Translator;
use crate::register_converter;

// Register this builtin converter for automatic discovery
register_converter!(|| Box::new(SpiralConverter::new()));

/// Spiral toolpath converter
#[derive(Debug)]
pub struct SpiralConverter {
    to_corners: bool,
    line_spacing_mm: i64,
}

impl SpiralConverter {
    pub fn new() -> Self {
        Self {
            to_corners: false,
            line_spacing_mm: 2,
        }
    }
}

impl Default for SpiralConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageConverter for SpiralConverter {
    fn name(&self) -> &str {
        "Spiral"
    }

    fn info(&self) -> ConverterInfo {
        ConverterInfo {
            name: "Spiral".to_string(),
            version: "1.0.0".to_string(),
            description: "Draw the image as one continuous spiral".to_string(),
            api_version: crate::core::version::get_api_version(),
        }
    }

    fn panel(&self, translator: &Translator) -> ConverterResult<ConfigPanel> {
        Ok(ConfigPanel::new(translator.get("spiral.title"))
            .with_field(PanelField::new(
                "to_corners",
                translator.get("spiral.to_corners"),
                FieldKind::Checkbox,
                FieldValue::Bool(self.to_corners),
            ))
            .with_field(PanelField::new(
                "line_spacing",
                translator.get("spiral.line_spacing"),
                FieldKind::Slider { min: 1, max: 10 },
                FieldValue::Int(self.line_spacing_mm),
            )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::api::get_translation_service;

    #[test]
    fn test_spiral_panel_localized() {
        let translator = get_translation_service().unwrap();
        let converter = SpiralConverter::new();

        let panel = converter.panel(translator).unwrap();
        assert_eq!(panel.title, "Spiral");
        assert_eq!(panel.fields.len(), 2);
        assert_eq!(panel.fields[0].key, "to_corners");
        assert_eq!(panel.fields[0].label, "Fill to corners");
    }

    #[test]
    fn test_spiral_name_is_stable() {
        let converter = SpiralConverter::new();
        assert_eq!(converter.name(), "Spiral");
        assert_eq!(converter.info().name, "Spiral");
    }
}
