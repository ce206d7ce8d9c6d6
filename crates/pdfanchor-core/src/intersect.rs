//! Absolute-region text selection.

use crate::fragment::{TextFragment, sort_reading_order};
use crate::geometry::{BBox, PercentBBox};

/// Tolerance, in pixels, used by [`IntersectMode::center`].
pub const DEFAULT_CENTER_TOLERANCE: f64 = 3.0;

/// How fragments are matched against a selection box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum IntersectMode {
    /// Fragment rectangle overlaps the box. Touching edges do not count.
    #[default]
    Overlap,
    /// Fragment center lies inside the box grown by `tolerance` pixels.
    Center { tolerance: f64 },
}

impl IntersectMode {
    /// Center mode with the default tolerance.
    pub fn center() -> Self {
        IntersectMode::Center {
            tolerance: DEFAULT_CENTER_TOLERANCE,
        }
    }

    fn selects(&self, fragment: &TextFragment, region: &BBox) -> bool {
        match *self {
            IntersectMode::Overlap => fragment.bbox().overlaps(region),
            IntersectMode::Center { tolerance } => {
                let (cx, cy) = fragment.center();
                region.expand(tolerance).contains_point(cx, cy)
            }
        }
    }
}

/// Fragments selected by `bbox`, in reading order.
///
/// The box is not checked for sanity; an inverted or empty box selects
/// nothing in overlap mode.
pub fn fragments_in_region(
    fragments: &[TextFragment],
    bbox: &PercentBBox,
    page_width: f64,
    page_height: f64,
    mode: IntersectMode,
) -> Vec<TextFragment> {
    let region = bbox.to_pixels(page_width, page_height);
    let selected: Vec<TextFragment> = fragments
        .iter()
        .filter(|f| mode.selects(f, &region))
        .cloned()
        .collect();
    sort_reading_order(&selected).into_iter().cloned().collect()
}

/// Text inside a percentage box, using strict overlap.
pub fn process_text_intersection(
    fragments: &[TextFragment],
    bbox: &PercentBBox,
    page_width: f64,
    page_height: f64,
) -> String {
    process_text_intersection_with(fragments, bbox, page_width, page_height, IntersectMode::Overlap)
}

/// Text inside a percentage box: selected fragments in reading order, blank
/// fragments dropped, joined by single spaces.
pub fn process_text_intersection_with(
    fragments: &[TextFragment],
    bbox: &PercentBBox,
    page_width: f64,
    page_height: f64,
    mode: IntersectMode,
) -> String {
    let selected = fragments_in_region(fragments, bbox, page_width, page_height, mode);

    #[cfg(feature = "tracing")]
    tracing::trace!(selected = selected.len(), ?mode, "region intersected");

    selected
        .iter()
        .map(|f| f.text.trim())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}
