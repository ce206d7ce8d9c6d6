//! Relative-field extraction: walk the paragraphs after an anchor until a
//! stop rule fires.

use std::fmt;

use crate::anchor::{find_anchor_index, get_content_column};
use crate::classify::classify_paragraphs;
use crate::field::FieldDefinition;
use crate::fragment::TextFragment;
use crate::line::group_text_into_lines;
use crate::options::LayoutOptions;
use crate::paragraph::{
    Paragraph, ParagraphId, group_lines_into_paragraphs, normalize_label,
    split_paragraphs_at_anchors,
};

/// Why a field's span ended before the end of the page.
///
/// Variants are listed in the order the rules are checked; the first one
/// that fires wins. `MaxLines` is checked last, after a paragraph passed
/// every other rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopReason {
    /// Heading paragraph, with `stop_at_heading`.
    Heading,
    /// Separator rule, with `stop_at_separator`.
    Separator,
    /// Paragraph containing the field's stop marker. Always active.
    StopMarker,
    /// Note or footer paragraph. Always active.
    Footer,
    /// Paragraph equal to another field's anchor, with `stop_at_next_field`.
    NextField,
    /// Large vertical gap after the previous paragraph, with `stop_at_empty_gap`.
    EmptyGap,
    /// The `max_lines` cap was reached.
    MaxLines,
}

impl StopReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            StopReason::Heading => "heading",
            StopReason::Separator => "separator",
            StopReason::StopMarker => "stop_marker",
            StopReason::Footer => "footer",
            StopReason::NextField => "next_field",
            StopReason::EmptyGap => "empty_gap",
            StopReason::MaxLines => "max_lines",
        }
    }
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of extracting one field from one page.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldExtraction {
    /// Collected paragraph texts joined by blank lines.
    pub value: String,
    /// The anchor paragraph, or `None` if the anchor text was not on the page.
    pub anchor: Option<ParagraphId>,
    /// The rule that ended the span, or `None` if it ran to the end of the page.
    pub stop: Option<StopReason>,
    /// Number of paragraphs that contributed to the value.
    pub paragraphs: usize,
}

impl FieldExtraction {
    /// Whether the anchor was found. Distinguishes "absent" from "blank".
    pub fn is_found(&self) -> bool {
        self.anchor.is_some()
    }
}

/// Anchors that act as boundaries while extracting `definition`: its own
/// anchor followed by every field's anchor, blanks removed.
pub fn known_anchors(definition: &FieldDefinition, all_field_defs: &[FieldDefinition]) -> Vec<String> {
    std::iter::once(definition)
        .chain(all_field_defs)
        .map(|d| d.anchor_text.clone())
        .filter(|a| !a.trim().is_empty())
        .collect()
}

/// The reconstructed, classified structure of one page.
///
/// Build it once per page and call [`DocumentLayout::extract`] for every
/// field of a template; the layout depends only on the page and the set of
/// anchors.
#[derive(Debug, Clone)]
pub struct DocumentLayout {
    paragraphs: Vec<Paragraph>,
    page_width: f64,
    page_height: f64,
    options: LayoutOptions,
}

impl DocumentLayout {
    /// Reconstruct lines and paragraphs from fragments and classify them.
    pub fn build(
        fragments: &[TextFragment],
        known_anchors: &[String],
        page_width: f64,
        page_height: f64,
        options: &LayoutOptions,
    ) -> Self {
        let lines = group_text_into_lines(fragments, options);
        let paragraphs = group_lines_into_paragraphs(lines, options);
        let paragraphs = split_paragraphs_at_anchors(paragraphs, known_anchors, options);
        let paragraphs = classify_paragraphs(paragraphs, known_anchors, options);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            fragments = fragments.len(),
            paragraphs = paragraphs.len(),
            "layout built"
        );

        Self::from_paragraphs(paragraphs, page_width, page_height, options)
    }

    /// Build a layout whose known anchors are every field's anchor.
    pub fn for_fields(
        fragments: &[TextFragment],
        fields: &[FieldDefinition],
        page_width: f64,
        page_height: f64,
        options: &LayoutOptions,
    ) -> Self {
        let anchors: Vec<String> = fields
            .iter()
            .map(|f| f.anchor_text.clone())
            .filter(|a| !a.trim().is_empty())
            .collect();
        Self::build(fragments, &anchors, page_width, page_height, options)
    }

    /// Wrap paragraphs that are already built and classified, in document order.
    pub fn from_paragraphs(
        paragraphs: Vec<Paragraph>,
        page_width: f64,
        page_height: f64,
        options: &LayoutOptions,
    ) -> Self {
        Self {
            paragraphs,
            page_width,
            page_height,
            options: options.clone(),
        }
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    pub fn page_width(&self) -> f64 {
        self.page_width
    }

    pub fn page_height(&self) -> f64 {
        self.page_height
    }

    /// Extract one field.
    ///
    /// Paragraphs strictly after the anchor are visited in document order.
    /// Paragraphs right of the content column are skipped. The first stop
    /// condition that fires ends the span without including its paragraph;
    /// see [`StopReason`] for the order in which they are checked.
    pub fn extract(
        &self,
        definition: &FieldDefinition,
        all_field_defs: &[FieldDefinition],
    ) -> FieldExtraction {
        let Some(anchor_index) = find_anchor_index(&self.paragraphs, definition) else {
            #[cfg(feature = "tracing")]
            tracing::debug!(field = %definition.name, "anchor not found");
            return FieldExtraction::default();
        };
        let anchor = &self.paragraphs[anchor_index];
        let column = get_content_column(anchor, &self.paragraphs, self.page_width, &self.options);
        let walker = SpanWalker::new(definition, all_field_defs, &self.options);

        let mut parts: Vec<String> = Vec::new();
        let mut lines_taken = 0usize;
        let mut stop = None;

        for i in anchor_index + 1..self.paragraphs.len() {
            let candidate = &self.paragraphs[i];
            if !column.admits(candidate, &self.options) {
                continue;
            }

            let previous = &self.paragraphs[i - 1];
            if let Some(reason) = walker.stop_reason(candidate, previous) {
                stop = Some(reason);
                break;
            }

            match definition.stop_rules.max_lines {
                Some(max) if lines_taken >= max => {
                    stop = Some(StopReason::MaxLines);
                    break;
                }
                Some(max) if lines_taken + candidate.line_count() > max => {
                    parts.push(candidate.text_of_first_lines(max - lines_taken));
                    stop = Some(StopReason::MaxLines);
                    break;
                }
                _ => {
                    lines_taken += candidate.line_count();
                    parts.push(candidate.text.clone());
                }
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            field = %definition.name,
            anchor = %anchor.id,
            paragraphs = parts.len(),
            stop = ?stop,
            "field extracted"
        );

        FieldExtraction {
            paragraphs: parts.len(),
            value: parts.join("\n\n"),
            anchor: Some(anchor.id),
            stop,
        }
    }
}

/// Stop-rule evaluation for one field.
struct SpanWalker<'a> {
    definition: &'a FieldDefinition,
    options: &'a LayoutOptions,
    marker: Option<String>,
    other_anchors: Vec<String>,
}

impl<'a> SpanWalker<'a> {
    fn new(
        definition: &'a FieldDefinition,
        all_field_defs: &[FieldDefinition],
        options: &'a LayoutOptions,
    ) -> Self {
        let other_anchors = all_field_defs
            .iter()
            .filter(|f| f.anchor_text != definition.anchor_text)
            .map(|f| normalize_label(&f.anchor_text))
            .filter(|a| !a.is_empty())
            .collect();
        let marker = definition
            .stop_marker
            .as_deref()
            .map(normalize_label)
            .filter(|m| !m.is_empty());

        Self {
            definition,
            options,
            marker,
            other_anchors,
        }
    }

    /// First stop condition that fires for `candidate`, in fixed precedence:
    /// heading, separator, stop marker, footer, next-field anchor, empty gap.
    fn stop_reason(&self, candidate: &Paragraph, previous: &Paragraph) -> Option<StopReason> {
        let rules = &self.definition.stop_rules;

        if rules.stop_at_heading && candidate.is_heading {
            return Some(StopReason::Heading);
        }
        if rules.stop_at_separator && candidate.is_separator {
            return Some(StopReason::Separator);
        }
        if let Some(marker) = &self.marker {
            if candidate.text.to_lowercase().contains(marker.as_str()) {
                return Some(StopReason::StopMarker);
            }
        }
        if candidate.is_footer {
            return Some(StopReason::Footer);
        }
        if rules.stop_at_next_field {
            let text = normalize_label(&candidate.text);
            if self.other_anchors.contains(&text) {
                return Some(StopReason::NextField);
            }
        }
        if rules.stop_at_empty_gap {
            let gap = candidate.bbox.top - previous.bbox.bottom;
            if gap > previous.bbox.height() * self.options.empty_gap {
                return Some(StopReason::EmptyGap);
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(paragraph = %candidate.id, "paragraph accepted");

        None
    }
}

/// Extract a relative field straight from a page's fragments.
///
/// Rebuilds the layout for this one call. When extracting several fields
/// from the same page, build a [`DocumentLayout`] once instead.
pub fn extract_relative_field(
    fragments: &[TextFragment],
    definition: &FieldDefinition,
    all_field_defs: &[FieldDefinition],
    page_width: f64,
    page_height: f64,
    options: &LayoutOptions,
) -> String {
    let anchors = known_anchors(definition, all_field_defs);
    DocumentLayout::build(fragments, &anchors, page_width, page_height, options)
        .extract(definition, all_field_defs)
        .value
}
