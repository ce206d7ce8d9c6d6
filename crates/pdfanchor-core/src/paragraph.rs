use std::fmt;

use crate::geometry::BBox;
use crate::line::{Line, StyleKey};
use crate::options::LayoutOptions;

/// Identifier of a paragraph: its position in document order within one layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParagraphId(pub usize);

impl fmt::Display for ParagraphId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p{}", self.0)
    }
}

/// A block of contiguous, style-homogeneous lines.
///
/// The classification flags are independent: the structural passes each set
/// their own flag and never clear another's.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Paragraph {
    /// Position of this paragraph in document order.
    pub id: ParagraphId,
    /// Lines in this paragraph, top-to-bottom.
    pub lines: Vec<Line>,
    /// Bounding box of this paragraph.
    pub bbox: BBox,
    /// Style key from the mean height of every fragment in the paragraph.
    pub style_key: StyleKey,
    /// Line texts joined by newlines.
    pub text: String,
    pub is_heading: bool,
    pub is_separator: bool,
    pub is_footer: bool,
}

impl Paragraph {
    /// Build an unclassified paragraph from its lines.
    pub fn from_lines(id: ParagraphId, lines: Vec<Line>) -> Self {
        let bbox = lines
            .iter()
            .map(|l| l.bbox)
            .reduce(|acc, b| acc.union(&b))
            .unwrap_or(BBox::new(0.0, 0.0, 0.0, 0.0));
        let style_key = StyleKey::from_fragments(lines.iter().flat_map(|l| &l.fragments));
        let text = lines
            .iter()
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        Self {
            id,
            lines,
            bbox,
            style_key,
            text,
            is_heading: false,
            is_separator: false,
            is_footer: false,
        }
    }

    /// Number of lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Text of the first `n` lines.
    pub fn text_of_first_lines(&self, n: usize) -> String {
        self.lines
            .iter()
            .take(n)
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Trim and case-fold a label for comparison.
pub fn normalize_label(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Group lines into paragraphs.
///
/// A new paragraph starts when the gap between a line's top and the previous
/// line's bottom exceeds `paragraph_gap` times the previous line's height, or
/// when the two lines have different style keys. Ids follow output order.
pub fn group_lines_into_paragraphs(lines: Vec<Line>, options: &LayoutOptions) -> Vec<Paragraph> {
    let mut groups: Vec<Vec<Line>> = Vec::new();
    let mut current: Vec<Line> = Vec::new();

    for line in lines {
        if let Some(prev) = current.last() {
            let gap = line.bbox.top - prev.bbox.bottom;
            let big_gap = gap > prev.bbox.height() * options.paragraph_gap;
            let same_style = line.style_key() == prev.style_key();
            if big_gap || !same_style {
                groups.push(std::mem::take(&mut current));
            }
        }
        current.push(line);
    }

    if !current.is_empty() {
        groups.push(current);
    }

    number_paragraphs(groups)
}

/// Give every line that matches a known anchor a paragraph of its own.
///
/// A matching line is cut out of its paragraph, and the line after it opens a
/// new paragraph, so a label sitting directly above its value still marks a
/// boundary. Paragraphs are renumbered. Returns the input unchanged when
/// `isolate_anchor_lines` is off or there are no anchors.
pub fn split_paragraphs_at_anchors(
    paragraphs: Vec<Paragraph>,
    known_anchors: &[String],
    options: &LayoutOptions,
) -> Vec<Paragraph> {
    let anchors: Vec<String> = known_anchors
        .iter()
        .map(|a| normalize_label(a))
        .filter(|a| !a.is_empty())
        .collect();
    if !options.isolate_anchor_lines || anchors.is_empty() {
        return paragraphs;
    }

    let mut groups: Vec<Vec<Line>> = Vec::new();
    for paragraph in paragraphs {
        let mut current: Vec<Line> = Vec::new();
        for line in paragraph.lines {
            if anchors.contains(&normalize_label(&line.text)) {
                if !current.is_empty() {
                    groups.push(std::mem::take(&mut current));
                }
                groups.push(vec![line]);
            } else {
                current.push(line);
            }
        }
        if !current.is_empty() {
            groups.push(current);
        }
    }

    number_paragraphs(groups)
}

fn number_paragraphs(groups: Vec<Vec<Line>>) -> Vec<Paragraph> {
    groups
        .into_iter()
        .enumerate()
        .map(|(i, lines)| Paragraph::from_lines(ParagraphId(i), lines))
        .collect()
}
