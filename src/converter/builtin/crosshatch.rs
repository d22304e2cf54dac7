//! Crosshatch converter - layered straight-line passes at alternating angles

use crate::converter::error::ConverterResult;
use crate::converter::traits::ImageConverter;
use crate::converter::types::{ConfigPanel, ConverterInfo, FieldKind, FieldValue, PanelField};
use crate::locale::api::Translator;
use crate::register_converter;

register_converter!(|| Box::new(CrosshatchConverter::new()));

/// Crosshatch toolpath converter
#[derive(Debug)]
pub struct CrosshatchConverter {
    passes: i64,
    first_pass_angle: i64,
    intensity_cutoff: i64,
}

impl CrosshatchConverter {
    pub fn new() -> Self {
        Self {
            passes: 2,
            first_pass_angle: 45,
            intensity_cutoff: 127,
        }
    }
}

impl Default for CrosshatchConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageConverter for CrosshatchConverter {
    fn name(&self) -> &str {
        "Crosshatch"
    }

    fn info(&self) -> ConverterInfo {
        ConverterInfo {
            name: "Crosshatch".to_string(),
            version: "1.0.0".to_string(),
            description: "Shade the image with layered hatching passes".to_string(),
            api_version: crate::core::version::get_api_version(),
        }
    }

    fn panel(&self, translator: &Translator) -> ConverterResult<ConfigPanel> {
        Ok(ConfigPanel::new(translator.get("crosshatch.title"))
            .with_field(PanelField::new(
                "passes",
                translator.get("crosshatch.passes"),
                FieldKind::Slider { min: 1, max: 4 },
                FieldValue::Int(self.passes),
            ))
            .with_field(PanelField::new(
                "angle",
                translator.get("crosshatch.angle"),
                FieldKind::Slider { min: 0, max: 180 },
                FieldValue::Int(self.first_pass_angle),
            ))
            .with_field(PanelField::new(
                "intensity",
                translator.get("crosshatch.intensity"),
                FieldKind::Slider { min: 0, max: 255 },
                FieldValue::Int(self.intensity_cutoff),
            )))
    }
}
