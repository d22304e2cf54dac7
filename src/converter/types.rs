//! Type definitions for the converter system
//!
//! Core data structures for converter metadata and configuration panels.

use strum::Display;

/// Converter metadata information
#[derive(Debug, Clone, PartialEq)]
pub struct ConverterInfo {
    pub name: String,
    pub version: String,
    pub description: String,
    pub api_version: u32,
}

/// A ready-to-render configuration surface for one converter's tunable
/// parameters. The host treats it as opaque beyond construction success;
/// rendering happens elsewhere.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigPanel {
    /// Localized panel title
    pub title: String,
    /// Parameter fields in render order
    pub fields: Vec<PanelField>,
}

impl ConfigPanel {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            fields: Vec::new(),
        }
    }

    pub fn with_field(mut self, field: PanelField) -> Self {
        self.fields.push(field);
        self
    }
}

/// One tunable parameter on a configuration panel
#[derive(Debug, Clone, PartialEq)]
pub struct PanelField {
    /// Stable parameter key, independent of locale
    pub key: String,
    /// Localized label shown next to the control
    pub label: String,
    /// Control kind used to render the field
    pub kind: FieldKind,
    /// Default value shown before the user changes anything
    pub default: FieldValue,
}

impl PanelField {
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        kind: FieldKind,
        default: FieldValue,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind,
            default,
        }
    }
}

/// Control kind for a panel field
#[derive(Debug, Clone, PartialEq, Display)]
pub enum FieldKind {
    /// Bounded numeric control
    Slider { min: i64, max: i64 },
    Checkbox,
    /// Fixed option list
    Select { options: Vec<String> },
    Text,
}

/// Default value carried by a panel field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_builder() {
        let panel = ConfigPanel::new("Spiral")
            .with_field(PanelField::new(
                "to_corners",
                "Fill to corners",
                FieldKind::Checkbox,
                FieldValue::Bool(false),
            ))
            .with_field(PanelField::new(
                "line_spacing",
                "Line spacing (mm)",
                FieldKind::Slider { min: 1, max: 10 },
                FieldValue::Int(2),
            ));

        assert_eq!(panel.title, "Spiral");
        assert_eq!(panel.fields.len(), 2);
        assert_eq!(panel.fields[0].key, "to_corners");
        assert_eq!(panel.fields[1].kind, FieldKind::Slider { min: 1, max: 10 });
    }

    #[test]
    fn test_field_kind_display() {
        assert_eq!(FieldKind::Checkbox.to_string(), "Checkbox");
        assert_eq!(FieldKind::Slider { min: 0, max: 5 }.to_string(), "Slider");
    }

    #[test]
    fn test_converter_info_equality() {
        let info = ConverterInfo {
            name: "Spiral".to_string(),
            version: "1.0.0".to_string(),
            description: "Single spiral from center outward".to_string(),
            api_version: 20260824,
        };
        assert_eq!(info, info.clone());
    }
}
