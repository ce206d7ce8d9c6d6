//! Error types for documents, templates and extraction runs.

use pdfanchor_core::LayoutError;
use thiserror::Error;

/// Errors from loading documents or templates, or from extracting a document.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// A page or selection box failed validation.
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// The template cannot be run as written.
    #[error("invalid template: {0}")]
    InvalidTemplate(String),

    /// The document has no pages to extract from.
    #[error("document has no pages")]
    EmptyDocument,

    /// Reading a document or template from disk failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A document or template was not valid JSON.
    #[cfg(feature = "serde")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
