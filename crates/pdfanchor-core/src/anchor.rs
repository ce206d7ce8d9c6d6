//! Anchor resolution and content-column estimation.

use crate::field::FieldDefinition;
use crate::options::LayoutOptions;
use crate::paragraph::{Paragraph, normalize_label};

/// Horizontal bounds of the content that belongs to an anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContentColumn {
    pub left: f64,
    pub right: f64,
}

impl ContentColumn {
    /// Whether a paragraph may contribute to the field. Only paragraphs that
    /// start well right of the column are excluded.
    pub fn admits(&self, paragraph: &Paragraph, options: &LayoutOptions) -> bool {
        paragraph.bbox.x0 <= self.right + options.column_slack
    }
}

/// Every paragraph containing the anchor text, case-insensitively, in document order.
pub fn find_anchor_candidates<'a>(
    paragraphs: &'a [Paragraph],
    definition: &FieldDefinition,
) -> Vec<&'a Paragraph> {
    let target = normalize_label(&definition.anchor_text);
    if target.is_empty() {
        return Vec::new();
    }
    paragraphs
        .iter()
        .filter(|p| p.text.to_lowercase().contains(&target))
        .collect()
}

/// Find the paragraph holding a field's anchor.
///
/// With several matches the first in document order wins; `relative_bbox`
/// is not consulted.
pub fn find_anchor<'a>(
    paragraphs: &'a [Paragraph],
    definition: &FieldDefinition,
) -> Option<&'a Paragraph> {
    find_anchor_index(paragraphs, definition).map(|i| &paragraphs[i])
}

/// Position of the anchor paragraph in `paragraphs`.
pub fn find_anchor_index(paragraphs: &[Paragraph], definition: &FieldDefinition) -> Option<usize> {
    let target = normalize_label(&definition.anchor_text);
    if target.is_empty() {
        return None;
    }
    paragraphs
        .iter()
        .position(|p| p.text.to_lowercase().contains(&target))
}

/// Estimate the column of content under an anchor.
///
/// The left bound allows a `column_indent` hanging indent; the right bound is
/// the page edge. No multi-column detection is attempted.
pub fn get_content_column(
    anchor: &Paragraph,
    _paragraphs: &[Paragraph],
    page_width: f64,
    options: &LayoutOptions,
) -> ContentColumn {
    ContentColumn {
        left: (anchor.bbox.x0 - options.column_indent).max(0.0),
        right: page_width,
    }
}
