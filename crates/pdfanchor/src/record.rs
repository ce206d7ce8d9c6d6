//! Extraction results.

/// The value extracted for one template field.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldValue {
    pub name: String,
    /// Extracted text; empty when nothing was found.
    pub value: String,
    /// Whether the anchor (relative mode) or any text (region mode) was found.
    pub found: bool,
    /// Page the value came from (1-based).
    pub page: Option<usize>,
}

impl FieldValue {
    pub fn found(name: impl Into<String>, value: impl Into<String>, page: usize) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            found: true,
            page: Some(page),
        }
    }

    pub fn missing(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: String::new(),
            found: false,
            page: None,
        }
    }
}

/// Outcome of extracting a document.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum RecordStatus {
    Success,
    /// The document could not be processed; carries the reason.
    Error(String),
}

/// One document's row of field values.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    /// Document name.
    pub document: String,
    /// Values in template field order. Empty when the document failed.
    pub fields: Vec<FieldValue>,
    pub status: RecordStatus,
}

impl Record {
    pub fn success(document: impl Into<String>, fields: Vec<FieldValue>) -> Self {
        Self {
            document: document.into(),
            fields,
            status: RecordStatus::Success,
        }
    }

    pub fn failure(document: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            document: document.into(),
            fields: Vec::new(),
            status: RecordStatus::Error(reason.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == RecordStatus::Success
    }

    /// Value of a field by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }
}
