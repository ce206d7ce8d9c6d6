//! Extraction templates: a named set of field definitions plus the settings
//! they are run with.

use std::collections::HashSet;

use pdfanchor_core::{FieldDefinition, IntersectMode, LayoutError, LayoutOptions};

use crate::error::ExtractError;

/// How a template locates its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ExtractionMode {
    /// Find each field's anchor label and read the text that follows it.
    #[default]
    Relative,
    /// Read the text inside each field's stored box on the first page.
    Region,
}

/// A reusable extraction template.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Template {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub mode: ExtractionMode,
    /// Layout thresholds used for relative fields.
    #[cfg_attr(feature = "serde", serde(default))]
    pub layout: LayoutOptions,
    /// Fragment selection used for region fields.
    #[cfg_attr(feature = "serde", serde(default))]
    pub intersect: IntersectMode,
    pub fields: Vec<FieldDefinition>,
}

impl Template {
    /// A relative-mode template with default settings.
    pub fn new(name: impl Into<String>, fields: Vec<FieldDefinition>) -> Self {
        Self {
            name: name.into(),
            mode: ExtractionMode::Relative,
            layout: LayoutOptions::default(),
            intersect: IntersectMode::Overlap,
            fields,
        }
    }

    pub fn with_mode(mut self, mode: ExtractionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_layout(mut self, layout: LayoutOptions) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_intersect(mut self, intersect: IntersectMode) -> Self {
        self.intersect = intersect;
        self
    }

    /// Field names in template order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    /// Check that the template can be run.
    ///
    /// Field names must be non-blank and unique, since records are keyed by
    /// name. Relative fields need an anchor; region fields need a box with
    /// a positive area.
    pub fn validate(&self) -> Result<(), ExtractError> {
        let mut seen = HashSet::new();
        for field in &self.fields {
            let name = field.name.trim();
            if name.is_empty() {
                return Err(ExtractError::InvalidTemplate(format!(
                    "field '{}' has a blank name",
                    field.id
                )));
            }
            if !seen.insert(name) {
                return Err(ExtractError::InvalidTemplate(format!(
                    "duplicate field name '{name}'"
                )));
            }

            match self.mode {
                ExtractionMode::Relative => {
                    if field.anchor_text.trim().is_empty() {
                        return Err(ExtractError::InvalidTemplate(format!(
                            "field '{name}' has no anchor text"
                        )));
                    }
                }
                ExtractionMode::Region => {
                    let Some(bbox) = field.relative_bbox else {
                        return Err(ExtractError::InvalidTemplate(format!(
                            "field '{name}' has no selection box"
                        )));
                    };
                    if bbox.is_degenerate() {
                        return Err(LayoutError::DegenerateRegion(bbox).into());
                    }
                }
            }
        }
        Ok(())
    }

    /// Parse a template from JSON.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, ExtractError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON template from disk.
    #[cfg(feature = "serde")]
    pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self, ExtractError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serialize to pretty-printed JSON.
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String, ExtractError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdfanchor_core::PercentBBox;

    fn field(id: &str, name: &str, anchor: &str) -> FieldDefinition {
        FieldDefinition::new(id, name, anchor)
    }

    #[test]
    fn test_valid_relative_template() {
        let template = Template::new("invoice", vec![field("1", "Number", "Invoice #")]);
        assert!(template.validate().is_ok());
        assert_eq!(template.field_names(), vec!["Number"]);
    }

    #[test]
    fn test_rejects_blank_and_duplicate_names() {
        let template = Template::new("t", vec![field("1", "  ", "A")]);
        assert!(matches!(template.validate(), Err(ExtractError::InvalidTemplate(_))));

        let template = Template::new("t", vec![field("1", "Total", "A"), field("2", " Total ", "B")]);
        let err = template.validate().unwrap_err();
        assert_eq!(err.to_string(), "invalid template: duplicate field name 'Total'");
    }

    #[test]
    fn test_rejects_blank_anchor_in_relative_mode() {
        let template = Template::new("t", vec![field("1", "Total", " ")]);
        assert!(matches!(template.validate(), Err(ExtractError::InvalidTemplate(_))));
    }

    #[test]
    fn test_region_mode_needs_boxes() {
        let template =
            Template::new("t", vec![field("1", "Total", "")]).with_mode(ExtractionMode::Region);
        assert!(matches!(template.validate(), Err(ExtractError::InvalidTemplate(_))));

        let degenerate = Template::new(
            "t",
            vec![field("1", "Total", "").with_relative_bbox(PercentBBox::new(10.0, 10.0, 10.0, 20.0))],
        )
        .with_mode(ExtractionMode::Region);
        assert!(matches!(
            degenerate.validate(),
            Err(ExtractError::Layout(LayoutError::DegenerateRegion(_)))
        ));

        let ok = Template::new(
            "t",
            vec![field("1", "Total", "").with_relative_bbox(PercentBBox::new(10.0, 10.0, 30.0, 20.0))],
        )
        .with_mode(ExtractionMode::Region);
        assert!(ok.validate().is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_roundtrip_and_defaults() {
        let json = r#"{
            "name": "invoice",
            "fields": [
                {"id": "1", "name": "Number", "anchorText": "Invoice #", "stopRules": {"stopAtEmptyGap": true}}
            ]
        }"#;
        let template = Template::from_json(json).unwrap();
        assert_eq!(template.mode, ExtractionMode::Relative);
        assert_eq!(template.layout, LayoutOptions::default());
        assert!(template.fields[0].stop_rules.stop_at_empty_gap);

        let back = Template::from_json(&template.to_json().unwrap()).unwrap();
        assert_eq!(back, template);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_region_mode() {
        let json = r#"{"name": "r", "mode": "region", "intersect": {"center": {"tolerance": 2.0}}, "fields": []}"#;
        let template = Template::from_json(json).unwrap();
        assert_eq!(template.mode, ExtractionMode::Region);
        assert_eq!(template.intersect, IntersectMode::Center { tolerance: 2.0 });
    }
}
