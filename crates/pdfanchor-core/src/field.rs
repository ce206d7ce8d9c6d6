use crate::geometry::PercentBBox;

/// Boundary conditions for a relative field. Each flag opts into one check;
/// several may be active at once and the first to fire ends the field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct StopRules {
    /// Stop at the first heading paragraph.
    pub stop_at_heading: bool,
    /// Stop at the first separator paragraph.
    pub stop_at_separator: bool,
    /// Stop at a large vertical gap.
    pub stop_at_empty_gap: bool,
    /// Stop at a paragraph that is exactly another field's anchor.
    pub stop_at_next_field: bool,
    /// Cap on the number of lines in the value.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub max_lines: Option<usize>,
}

impl StopRules {
    /// Every flag on, no line cap.
    pub fn all() -> Self {
        Self {
            stop_at_heading: true,
            stop_at_separator: true,
            stop_at_empty_gap: true,
            stop_at_next_field: true,
            max_lines: None,
        }
    }
}

/// A named field anchored to a label on the page.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct FieldDefinition {
    pub id: String,
    pub name: String,
    /// Label text whose paragraph marks the start of the value region.
    pub anchor_text: String,
    /// Where the field sat on the authoring page. Not used to pick between
    /// several matching anchors.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "relativeBBox", default, skip_serializing_if = "Option::is_none")
    )]
    pub relative_bbox: Option<PercentBBox>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stop_rules: StopRules,
    /// Text that ends the field wherever it appears, regardless of the stop rules.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub stop_marker: Option<String>,
}

impl FieldDefinition {
    pub fn new(id: impl Into<String>, name: impl Into<String>, anchor_text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            anchor_text: anchor_text.into(),
            relative_bbox: None,
            stop_rules: StopRules::default(),
            stop_marker: None,
        }
    }

    pub fn with_stop_rules(mut self, stop_rules: StopRules) -> Self {
        self.stop_rules = stop_rules;
        self
    }

    pub fn with_stop_marker(mut self, marker: impl Into<String>) -> Self {
        self.stop_marker = Some(marker.into());
        self
    }

    pub fn with_relative_bbox(mut self, bbox: PercentBBox) -> Self {
        self.relative_bbox = Some(bbox);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_rules_default_all_off() {
        let rules = StopRules::default();
        assert!(!rules.stop_at_heading);
        assert!(!rules.stop_at_separator);
        assert!(!rules.stop_at_empty_gap);
        assert!(!rules.stop_at_next_field);
        assert_eq!(rules.max_lines, None);
    }

    #[test]
    fn test_stop_rules_all() {
        let rules = StopRules::all();
        assert!(rules.stop_at_heading && rules.stop_at_separator);
        assert!(rules.stop_at_empty_gap && rules.stop_at_next_field);
    }

    #[test]
    fn test_field_builder() {
        let field = FieldDefinition::new("f1", "Total", "Total:")
            .with_stop_rules(StopRules {
                stop_at_heading: true,
                ..StopRules::default()
            })
            .with_stop_marker("IVA")
            .with_relative_bbox(PercentBBox::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(field.anchor_text, "Total:");
        assert!(field.stop_rules.stop_at_heading);
        assert_eq!(field.stop_marker.as_deref(), Some("IVA"));
        assert!(field.relative_bbox.is_some());
    }
}
