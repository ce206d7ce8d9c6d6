use std::fmt;

use crate::fragment::{TextFragment, sort_reading_order};
use crate::geometry::BBox;
use crate::options::LayoutOptions;

/// Coarse font-size class: the rounded mean height of a run of fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleKey(pub i64);

impl StyleKey {
    /// Bucket a mean height.
    pub fn from_height(height: f64) -> Self {
        StyleKey(height.round() as i64)
    }

    /// Bucket the mean height of the given fragments.
    pub fn from_fragments<'a>(fragments: impl IntoIterator<Item = &'a TextFragment>) -> Self {
        let (sum, count) = fragments
            .into_iter()
            .fold((0.0, 0usize), |(sum, n), f| (sum + f.h, n + 1));
        if count == 0 {
            return StyleKey(0);
        }
        Self::from_height(sum / count as f64)
    }

    /// The size this key stands for.
    pub fn size(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "h-{}", self.0)
    }
}

/// A visual line: fragments judged co-linear, ordered left-to-right.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    /// Fragments in this line, sorted left-to-right.
    pub fragments: Vec<TextFragment>,
    /// Bounding box of this line.
    pub bbox: BBox,
    /// Fragment texts joined by a single space.
    pub text: String,
}

impl Line {
    /// Build a line from its fragments. The fragments are put in left-to-right order.
    pub fn from_fragments(mut fragments: Vec<TextFragment>) -> Self {
        fragments.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));

        let bbox = fragments
            .iter()
            .map(TextFragment::bbox)
            .reduce(|acc, b| acc.union(&b))
            .unwrap_or(BBox::new(0.0, 0.0, 0.0, 0.0));
        let text = fragments
            .iter()
            .map(|f| f.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        Self {
            fragments,
            bbox,
            text,
        }
    }

    /// Style key from the mean fragment height.
    pub fn style_key(&self) -> StyleKey {
        StyleKey::from_fragments(&self.fragments)
    }
}

/// Group positioned fragments into visual lines.
///
/// Fragments are visited in reading order. A fragment joins the current line
/// while its y stays within `line_tolerance * min(h, previous h)` of the
/// line's first fragment; the anchor y is not updated as the line grows, so
/// a slowly drifting baseline cannot drag the line along. Lines come out
/// top-to-bottom. A lone fragment becomes a one-fragment line.
pub fn group_text_into_lines(fragments: &[TextFragment], options: &LayoutOptions) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut current: Vec<TextFragment> = Vec::new();
    let mut anchor_y = 0.0;

    for frag in sort_reading_order(fragments) {
        if let Some(last) = current.last() {
            let tolerance = frag.h.min(last.h) * options.line_tolerance;
            if (frag.y - anchor_y).abs() >= tolerance {
                lines.push(Line::from_fragments(std::mem::take(&mut current)));
            }
        }
        if current.is_empty() {
            anchor_y = frag.y;
        }
        current.push(frag.clone());
    }

    if !current.is_empty() {
        lines.push(Line::from_fragments(current));
    }

    lines
}
