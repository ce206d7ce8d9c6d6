//! pdfanchor-core: Backend-independent layout reconstruction and field extraction.
//!
//! This crate turns the positioned text of one rendered page into lines and
//! paragraphs, classifies the paragraphs, and extracts template fields that
//! are anchored to labels on the page. It performs no I/O.
//!
//! The pipeline is:
//!
//! - [`group_text_into_lines`]: fragments to lines in reading order
//! - [`group_lines_into_paragraphs`] and [`split_paragraphs_at_anchors`]
//! - [`classify_paragraphs`]: heading, separator and footer flags
//! - [`DocumentLayout::extract`]: anchor, content column and value span
//!
//! [`process_text_intersection`] selects text by absolute region instead.

mod anchor;
mod classify;
mod error;
mod extract;
mod field;
mod fragment;
mod geometry;
mod intersect;
mod line;
mod options;
mod paragraph;

pub use anchor::{
    ContentColumn, find_anchor, find_anchor_candidates, find_anchor_index, get_content_column,
};
pub use classify::{
    analyze_headings, body_style, classify_paragraphs, detect_footers, detect_separators,
};
pub use error::{LayoutError, validate_page_size};
pub use extract::{
    DocumentLayout, FieldExtraction, StopReason, extract_relative_field, known_anchors,
};
pub use field::{FieldDefinition, StopRules};
pub use fragment::{TextFragment, sort_reading_order, validate_fragments};
pub use geometry::{BBox, PercentBBox};
pub use intersect::{
    DEFAULT_CENTER_TOLERANCE, IntersectMode, fragments_in_region, process_text_intersection,
    process_text_intersection_with,
};
pub use line::{Line, StyleKey, group_text_into_lines};
pub use options::LayoutOptions;
pub use paragraph::{
    Paragraph, ParagraphId, group_lines_into_paragraphs, normalize_label,
    split_paragraphs_at_anchors,
};
