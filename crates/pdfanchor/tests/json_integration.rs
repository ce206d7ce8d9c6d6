#![cfg(feature = "serde")]

//! Loading documents and templates from JSON files and serializing records.

use std::fs;

use pdfanchor::{Document, ExtractError, Extractor, RecordStatus, Template};

const TEMPLATE: &str = r#"{
    "name": "receipt",
    "layout": {"emptyGap": 3.0},
    "fields": [
        {"id": "f1", "name": "Store", "anchorText": "Store", "stopRules": {"stopAtNextField": true}},
        {"id": "f2", "name": "Amount", "anchorText": "Amount"}
    ]
}"#;

const RECEIPT: &str = r#"{
    "width": 300, "height": 400,
    "fragments": [
        {"text": "Store", "x": 10, "y": 10, "w": 30, "h": 10},
        {"text": "Corner Shop", "x": 10, "y": 22, "w": 66, "h": 10},
        {"text": "Amount", "x": 10, "y": 34, "w": 36, "h": 10},
        {"text": "7.25", "x": 10, "y": 46, "w": 24, "h": 10}
    ]
}"#;

#[test]
fn test_template_and_document_files() {
    let dir = tempfile::tempdir().unwrap();
    let template_path = dir.path().join("receipt.template.json");
    let doc_path = dir.path().join("receipt-001.json");
    fs::write(&template_path, TEMPLATE).unwrap();
    fs::write(&doc_path, RECEIPT).unwrap();

    let template = Template::open(&template_path).unwrap();
    assert_eq!(template.layout.empty_gap, 3.0);

    let document = Document::open(&doc_path).unwrap();
    assert_eq!(document.name, "receipt-001.json");

    let record = Extractor::new(template).unwrap().extract_document(&document);
    assert_eq!(record.status, RecordStatus::Success);
    assert_eq!(record.get("Store"), Some("Corner Shop"));
    assert_eq!(record.get("Amount"), Some("7.25"));
}

#[test]
fn test_record_json_shape() {
    let template = Template::from_json(TEMPLATE).unwrap();
    let extractor = Extractor::new(template).unwrap();
    let ok = extractor.extract_document(&Document::from_json("r.json", RECEIPT).unwrap());
    let failed = extractor.extract_document(&Document::new("empty.json", Vec::new()));

    let json = serde_json::to_value(&ok).unwrap();
    assert_eq!(json["document"], "r.json");
    assert_eq!(json["status"], "success");
    assert_eq!(json["fields"][1]["value"], "7.25");
    assert_eq!(json["fields"][1]["page"], 1);

    let json = serde_json::to_value(&failed).unwrap();
    assert_eq!(json["status"]["error"], "document has no pages");
}

#[test]
fn test_invalid_template_file() {
    let err = Template::from_json(r#"{"name": "x"}"#).unwrap_err();
    assert!(matches!(err, ExtractError::Json(_)));

    let template = Template::from_json(
        r#"{"name": "x", "fields": [{"id": "1", "name": "A", "anchorText": ""}]}"#,
    )
    .unwrap();
    assert!(matches!(
        Extractor::new(template),
        Err(ExtractError::InvalidTemplate(_))
    ));
}
