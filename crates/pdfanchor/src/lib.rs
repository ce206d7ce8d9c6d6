//! pdfanchor: Template-driven field extraction from rendered PDF pages.
//!
//! This is the public API facade. It re-exports the layout and extraction
//! algorithms from pdfanchor-core and adds documents, templates and batch
//! processing on top.
//!
//! # Architecture
//!
//! - **pdfanchor-core**: Fragment, line and paragraph types plus the
//!   layout, classification and extraction algorithms
//! - **pdfanchor** (this crate): Page text input, templates, per-document
//!   extraction and batches
//!
//! # Example
//!
//! ```
//! use pdfanchor::{Document, Extractor, FieldDefinition, PageText, Template, TextFragment};
//!
//! let page = PageText::new(1, 612.0, 792.0, vec![
//!     TextFragment::new("Invoice #", 10.0, 0.0, 60.0, 10.0),
//!     TextFragment::new("12345", 10.0, 12.0, 35.0, 10.0),
//! ]);
//! let template = Template::new("invoice", vec![
//!     FieldDefinition::new("f1", "Number", "Invoice #"),
//! ]);
//!
//! let extractor = Extractor::new(template).unwrap();
//! let record = extractor.extract_document(&Document::new("invoice.json", vec![page]));
//! assert_eq!(record.get("Number"), Some("12345"));
//! ```

mod batch;
mod document;
mod error;
mod extractor;
mod label;
mod page;
mod record;
mod template;

pub use pdfanchor_core;

pub use batch::Records;
pub use document::Document;
pub use error::ExtractError;
pub use extractor::Extractor;
pub use label::strip_field_label;
pub use page::PageText;
pub use record::{FieldValue, Record, RecordStatus};
pub use template::{ExtractionMode, Template};

pub use pdfanchor_core::{
    BBox, DocumentLayout, FieldDefinition, FieldExtraction, IntersectMode, LayoutError,
    LayoutOptions, Line, Paragraph, ParagraphId, PercentBBox, StopReason, StopRules, StyleKey,
    TextFragment,
};
