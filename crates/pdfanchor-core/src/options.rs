/// Thresholds for layout reconstruction and relative-field extraction.
///
/// All distances are ratios of a text height unless noted, so the same
/// options work at any render scale.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct LayoutOptions {
    /// A fragment joins the current line if its y is within this fraction of
    /// the smaller of its own height and the previous fragment's height.
    pub line_tolerance: f64,
    /// A vertical gap larger than this multiple of the previous line's height
    /// starts a new paragraph.
    pub paragraph_gap: f64,
    /// A paragraph whose style size exceeds the body size by this ratio is a heading.
    pub heading_size_ratio: f64,
    /// All-caps paragraphs shorter than this many characters are headings.
    pub heading_max_chars: usize,
    /// All-caps paragraphs must be longer than this many characters.
    pub heading_min_caps_chars: usize,
    /// A gap larger than this multiple of the previous paragraph's height
    /// ends a field when `stop_at_empty_gap` is set.
    pub empty_gap: f64,
    /// Hanging-indent tolerance (pixels) subtracted from the anchor's left edge.
    pub column_indent: f64,
    /// Paragraphs starting more than this many pixels right of the column are skipped.
    pub column_slack: f64,
    /// Split lines matching a known anchor into their own paragraph.
    pub isolate_anchor_lines: bool,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            line_tolerance: 0.6,
            paragraph_gap: 1.5,
            heading_size_ratio: 1.1,
            heading_max_chars: 100,
            heading_min_caps_chars: 4,
            empty_gap: 4.0,
            column_indent: 20.0,
            column_slack: 50.0,
            isolate_anchor_lines: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_options_default() {
        let opts = LayoutOptions::default();
        assert_eq!(opts.line_tolerance, 0.6);
        assert_eq!(opts.paragraph_gap, 1.5);
        assert_eq!(opts.heading_size_ratio, 1.1);
        assert_eq!(opts.heading_max_chars, 100);
        assert_eq!(opts.empty_gap, 4.0);
        assert_eq!(opts.column_indent, 20.0);
        assert_eq!(opts.column_slack, 50.0);
        assert!(opts.isolate_anchor_lines);
    }

    #[test]
    fn test_layout_options_override() {
        let opts = LayoutOptions {
            paragraph_gap: 2.0,
            ..LayoutOptions::default()
        };
        assert_eq!(opts.paragraph_gap, 2.0);
        assert_eq!(opts.line_tolerance, 0.6);
    }
}
