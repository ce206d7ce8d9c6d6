//! Batch processing of many documents with one template.

use crate::document::Document;
use crate::extractor::Extractor;
use crate::record::Record;

/// Iterator over the records of a batch, extracting each document on demand.
///
/// Created by [`Extractor::records()`]. Dropping the iterator early cancels
/// the rest of the batch.
pub struct Records<'a> {
    extractor: &'a Extractor,
    documents: std::slice::Iter<'a, Document>,
}

impl Iterator for Records<'_> {
    type Item = Record;

    fn next(&mut self) -> Option<Self::Item> {
        self.documents
            .next()
            .map(|doc| self.extractor.extract_document(doc))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.documents.size_hint()
    }
}

impl ExactSizeIterator for Records<'_> {}

impl Extractor {
    /// Extract every document in order.
    pub fn extract_batch(&self, documents: &[Document]) -> Vec<Record> {
        self.records(documents).collect()
    }

    /// Lazily extract documents in order.
    pub fn records<'a>(&'a self, documents: &'a [Document]) -> Records<'a> {
        Records {
            extractor: self,
            documents: documents.iter(),
        }
    }

    /// Extract documents in parallel using rayon.
    ///
    /// Records are returned in input order.
    #[cfg(feature = "parallel")]
    pub fn extract_batch_parallel(&self, documents: &[Document]) -> Vec<Record> {
        use rayon::prelude::*;

        documents
            .par_iter()
            .map(|doc| self.extract_document(doc))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::PageText;
    use crate::template::Template;
    use pdfanchor_core::{FieldDefinition, TextFragment};

    fn make_doc(name: &str, value: &str) -> Document {
        Document::new(
            name,
            vec![PageText::new(
                0,
                612.0,
                792.0,
                vec![
                    TextFragment::new("Total", 10.0, 0.0, 35.0, 10.0),
                    TextFragment::new(value, 10.0, 20.0, 35.0, 10.0),
                ],
            )],
        )
    }

    fn extractor() -> Extractor {
        Extractor::new(Template::new(
            "t",
            vec![FieldDefinition::new("1", "Total", "Total")],
        ))
        .unwrap()
    }

    #[test]
    fn test_batch_keeps_order_and_isolates_failures() {
        let docs = vec![
            make_doc("a", "1.00"),
            Document::new("broken", Vec::new()),
            make_doc("c", "3.00"),
        ];
        let records = extractor().extract_batch(&docs);
        let names: Vec<&str> = records.iter().map(|r| r.document.as_str()).collect();
        assert_eq!(names, vec!["a", "broken", "c"]);
        assert_eq!(records[0].get("Total"), Some("1.00"));
        assert!(!records[1].is_success());
        assert_eq!(records[2].get("Total"), Some("3.00"));
    }

    #[test]
    fn test_records_is_lazy_and_sized() {
        let docs = vec![make_doc("a", "1"), make_doc("b", "2"), make_doc("c", "3")];
        let extractor = extractor();
        let mut records = extractor.records(&docs);
        assert_eq!(records.len(), 3);
        let first = records.next().unwrap();
        assert_eq!(first.document, "a");
        assert_eq!(records.len(), 2);
    }

    #[cfg(feature = "parallel")]
    mod parallel_tests {
        use super::*;

        #[test]
        fn test_parallel_matches_sequential() {
            let docs: Vec<Document> = (0..16)
                .map(|i| make_doc(&format!("doc-{i}"), &format!("{i}.00")))
                .collect();
            let extractor = extractor();
            assert_eq!(
                extractor.extract_batch_parallel(&docs),
                extractor.extract_batch(&docs)
            );
        }
    }
}
