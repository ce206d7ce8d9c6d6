//! Running a template over documents.

use std::cell::OnceCell;

use pdfanchor_core::DocumentLayout;

use crate::document::Document;
use crate::error::ExtractError;
use crate::label::strip_field_label;
use crate::page::PageText;
use crate::record::{FieldValue, Record};
use crate::template::{ExtractionMode, Template};

/// Applies a validated template to documents.
///
/// Each document is processed on its own: results depend only on that
/// document and the template.
#[derive(Debug, Clone)]
pub struct Extractor {
    template: Template,
}

impl Extractor {
    /// Validate the template and wrap it.
    pub fn new(template: Template) -> Result<Self, ExtractError> {
        template.validate()?;
        Ok(Self { template })
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    /// Extract every field of the template from a document.
    ///
    /// A document that cannot be processed yields a record with
    /// [`RecordStatus::Error`](crate::RecordStatus::Error) instead of an error.
    pub fn extract_document(&self, document: &Document) -> Record {
        match self.try_extract(document) {
            Ok(fields) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    document = %document.name,
                    found = fields.iter().filter(|f| f.found).count(),
                    fields = fields.len(),
                    "document extracted"
                );
                Record::success(document.name.clone(), fields)
            }
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(document = %document.name, error = %err, "document failed");
                Record::failure(document.name.clone(), err.to_string())
            }
        }
    }

    /// Extract a document, surfacing failures as errors.
    pub fn try_extract(&self, document: &Document) -> Result<Vec<FieldValue>, ExtractError> {
        document.validate()?;
        let fields = match self.template.mode {
            ExtractionMode::Relative => self.extract_relative(document),
            ExtractionMode::Region => match document.page(1) {
                Some(page) => self.extract_region(page),
                None => return Err(ExtractError::EmptyDocument),
            },
        };
        Ok(fields)
    }

    /// Each field takes its value from the first page holding its anchor.
    /// Page layouts are built on first use and shared by all fields.
    fn extract_relative(&self, document: &Document) -> Vec<FieldValue> {
        let defs = &self.template.fields;
        let layouts: Vec<OnceCell<DocumentLayout>> =
            document.pages.iter().map(|_| OnceCell::new()).collect();

        defs.iter()
            .map(|def| {
                for (page, cell) in document.pages.iter().zip(&layouts) {
                    let layout = cell.get_or_init(|| page.layout_for(defs, &self.template.layout));
                    let result = layout.extract(def, defs);
                    if result.is_found() {
                        return FieldValue::found(def.name.clone(), result.value, page.page_number);
                    }
                }
                FieldValue::missing(def.name.clone())
            })
            .collect()
    }

    fn extract_region(&self, page: &PageText) -> Vec<FieldValue> {
        self.template
            .fields
            .iter()
            .map(|def| {
                let Some(bbox) = def.relative_bbox else {
                    return FieldValue::missing(def.name.clone());
                };
                let raw = page.extract_region(&bbox, self.template.intersect);
                if raw.is_empty() {
                    return FieldValue::missing(def.name.clone());
                }
                FieldValue::found(
                    def.name.clone(),
                    strip_field_label(&raw, &def.name),
                    page.page_number,
                )
            })
            .collect()
    }
}
