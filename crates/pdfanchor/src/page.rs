//! The positioned text of one rendered page.

use pdfanchor_core::{
    DocumentLayout, FieldDefinition, IntersectMode, LayoutError, LayoutOptions, Line, Paragraph,
    PercentBBox, TextFragment, classify_paragraphs, group_lines_into_paragraphs,
    group_text_into_lines, process_text_intersection_with, split_paragraphs_at_anchors,
    validate_fragments, validate_page_size,
};

/// Text fragments of a single page, as produced by a PDF renderer.
///
/// Coordinates are top-left origin pixels at the scale `width` and `height`
/// were measured at.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct PageText {
    /// Page number (1-based).
    #[cfg_attr(feature = "serde", serde(default))]
    pub page_number: usize,
    /// Rendered page width.
    pub width: f64,
    /// Rendered page height.
    pub height: f64,
    /// Text fragments in renderer order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub fragments: Vec<TextFragment>,
}

impl PageText {
    pub fn new(page_number: usize, width: f64, height: f64, fragments: Vec<TextFragment>) -> Self {
        Self {
            page_number,
            width,
            height,
            fragments,
        }
    }

    /// Check the page size and every fragment.
    pub fn validate(&self) -> Result<(), LayoutError> {
        validate_page_size(self.width, self.height)?;
        validate_fragments(&self.fragments)
    }

    /// Visual lines, top to bottom.
    pub fn lines(&self, options: &LayoutOptions) -> Vec<Line> {
        group_text_into_lines(&self.fragments, options)
    }

    /// Classified paragraphs in document order.
    pub fn paragraphs(&self, known_anchors: &[String], options: &LayoutOptions) -> Vec<Paragraph> {
        let paragraphs = group_lines_into_paragraphs(self.lines(options), options);
        let paragraphs = split_paragraphs_at_anchors(paragraphs, known_anchors, options);
        classify_paragraphs(paragraphs, known_anchors, options)
    }

    /// Layout of this page with every field's anchor known.
    pub fn layout_for(&self, fields: &[FieldDefinition], options: &LayoutOptions) -> DocumentLayout {
        DocumentLayout::for_fields(&self.fragments, fields, self.width, self.height, options)
    }

    /// Text inside a percentage box.
    pub fn extract_region(&self, bbox: &PercentBBox, mode: IntersectMode) -> String {
        process_text_intersection_with(&self.fragments, bbox, self.width, self.height, mode)
    }
}
