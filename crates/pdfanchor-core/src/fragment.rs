use crate::error::LayoutError;
use crate::geometry::BBox;

/// A positioned run of text from a page's text layer.
///
/// Coordinates are top-left origin pixels of one rendered page. The text
/// layer producer guarantees `w >= 0` and `h > 0`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextFragment {
    /// The text content of this fragment.
    pub text: String,
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub w: f64,
    /// Height (used as the font-size proxy).
    pub h: f64,
}

impl TextFragment {
    pub fn new(text: impl Into<String>, x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            w,
            h,
        }
    }

    /// Bounding box of this fragment.
    pub fn bbox(&self) -> BBox {
        BBox::from_xywh(self.x, self.y, self.w, self.h)
    }

    /// Center point `(x, y)`.
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Check the geometry invariant. `index` is only used for the error message.
    pub fn validate(&self, index: usize) -> Result<(), LayoutError> {
        let invalid = |reason: &str| LayoutError::InvalidFragment {
            index,
            reason: reason.to_string(),
        };
        if ![self.x, self.y, self.w, self.h].iter().all(|v| v.is_finite()) {
            return Err(invalid("coordinates must be finite"));
        }
        if self.w < 0.0 {
            return Err(invalid("width must not be negative"));
        }
        if self.h <= 0.0 {
            return Err(invalid("height must be positive"));
        }
        Ok(())
    }
}

/// Validate every fragment of a page, reporting the first offender.
pub fn validate_fragments(fragments: &[TextFragment]) -> Result<(), LayoutError> {
    fragments
        .iter()
        .enumerate()
        .try_for_each(|(i, f)| f.validate(i))
}

/// Sort fragments into natural reading order.
///
/// Fragments are ordered top-to-bottom; fragments whose y differs from the
/// first fragment of their band by less than half the smaller height share a
/// band and are ordered left-to-right within it. Bands are formed over a
/// total `(y, x)` ordering, so the result depends only on the fragment set and
/// equal positions keep their input order.
pub fn sort_reading_order(fragments: &[TextFragment]) -> Vec<&TextFragment> {
    let mut sorted: Vec<&TextFragment> = fragments.iter().collect();
    sorted.sort_by(|a, b| a.y.total_cmp(&b.y).then(a.x.total_cmp(&b.x)));

    let mut ordered = Vec::with_capacity(sorted.len());
    let mut band: Vec<&TextFragment> = Vec::new();

    for frag in sorted {
        if let Some(first) = band.first() {
            let tolerance = first.h.min(frag.h) / 2.0;
            if (frag.y - first.y).abs() >= tolerance {
                flush_band(&mut band, &mut ordered);
            }
        }
        band.push(frag);
    }
    flush_band(&mut band, &mut ordered);

    ordered
}

fn flush_band<'a>(band: &mut Vec<&'a TextFragment>, out: &mut Vec<&'a TextFragment>) {
    band.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    out.append(band);
}
