//! Multi-page documents of page text.

#[cfg(feature = "serde")]
use std::path::Path;

use crate::error::ExtractError;
use crate::page::PageText;

/// A named document: the page texts of one PDF, in page order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Document {
    /// Name used to label the document's record, usually the file name.
    pub name: String,
    /// Pages in order. Page numbers follow position, starting at 1.
    pub pages: Vec<PageText>,
}

/// Accepted on-disk shapes: a full document or a single bare page.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum DocumentJson {
    Pages { pages: Vec<PageText> },
    Page(PageText),
}

impl Document {
    /// Create a document, numbering its pages from 1.
    pub fn new(name: impl Into<String>, mut pages: Vec<PageText>) -> Self {
        for (i, page) in pages.iter_mut().enumerate() {
            page.page_number = i + 1;
        }
        Self {
            name: name.into(),
            pages,
        }
    }

    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Access a page by 1-based number.
    pub fn page(&self, number: usize) -> Option<&PageText> {
        number.checked_sub(1).and_then(|i| self.pages.get(i))
    }

    /// Check that there is something to extract from and that every page is well formed.
    pub fn validate(&self) -> Result<(), ExtractError> {
        if self.pages.is_empty() {
            return Err(ExtractError::EmptyDocument);
        }
        for page in &self.pages {
            page.validate()?;
        }
        Ok(())
    }

    /// Parse a document from JSON.
    ///
    /// The JSON is either `{"pages": [...]}` or a single page object
    /// (`{"width": .., "height": .., "fragments": [...]}`), which becomes a
    /// one-page document.
    #[cfg(feature = "serde")]
    pub fn from_json(name: impl Into<String>, json: &str) -> Result<Self, ExtractError> {
        let pages = match serde_json::from_str(json)? {
            DocumentJson::Pages { pages } => pages,
            DocumentJson::Page(page) => vec![page],
        };
        Ok(Self::new(name, pages))
    }

    /// Read a JSON document from disk, named after its file name.
    #[cfg(feature = "serde")]
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ExtractError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self::from_json(name, &json)
    }
}
