use std::path::{Path, PathBuf};

use pdfanchor::{Document, Extractor, Record, RecordStatus, Template};

use crate::cli::OutputFormat;
use crate::shared::{ProgressReporter, csv_escape, one_line};

pub fn run(template: &Path, files: &[PathBuf], format: &OutputFormat) -> Result<(), i32> {
    let template = Template::open(template).map_err(|e| {
        eprintln!("Error: failed to load template {}: {e}", template.display());
        1
    })?;
    let extractor = Extractor::new(template).map_err(|e| {
        eprintln!("Error: {e}");
        1
    })?;

    tracing::debug!(
        template = %extractor.template().name,
        files = files.len(),
        "running template"
    );

    let progress = ProgressReporter::new(files.len());
    let mut records = Vec::with_capacity(files.len());
    for (i, file) in files.iter().enumerate() {
        progress.report(i + 1);
        records.push(extract_file(&extractor, file));
    }
    progress.finish();

    match format {
        OutputFormat::Text => write_text(&records),
        OutputFormat::Json => write_json(&records),
        OutputFormat::Csv => write_csv(&extractor, &records),
    }
}

/// A file that cannot be read becomes an error record like any other failed document.
fn extract_file(extractor: &Extractor, file: &Path) -> Record {
    match Document::open(file) {
        Ok(document) => extractor.extract_document(&document),
        Err(e) => {
            tracing::warn!(file = %file.display(), error = %e, "could not read document");
            Record::failure(file.display().to_string(), e.to_string())
        }
    }
}

fn status_str(status: &RecordStatus) -> &'static str {
    match status {
        RecordStatus::Success => "success",
        RecordStatus::Error(_) => "error",
    }
}

fn write_text(records: &[Record]) -> Result<(), i32> {
    for record in records {
        println!("--- {} ({}) ---", record.document, status_str(&record.status));
        match &record.status {
            RecordStatus::Success => {
                for field in &record.fields {
                    println!("{}\t{}", field.name, one_line(&field.value));
                }
            }
            RecordStatus::Error(reason) => println!("error\t{reason}"),
        }
    }
    Ok(())
}

fn write_json(records: &[Record]) -> Result<(), i32> {
    let json_str = serde_json::to_string(records).map_err(|e| {
        eprintln!("Error: failed to serialize records: {e}");
        1
    })?;
    println!("{json_str}");
    Ok(())
}

fn write_csv(extractor: &Extractor, records: &[Record]) -> Result<(), i32> {
    let names = extractor.template().field_names();
    let header: Vec<String> = std::iter::once("file")
        .chain(names.iter().copied())
        .chain(std::iter::once("status"))
        .map(csv_escape)
        .collect();
    println!("{}", header.join(","));

    for record in records {
        let row: Vec<String> = std::iter::once(csv_escape(&record.document))
            .chain(names.iter().map(|name| csv_escape(record.get(name).unwrap_or(""))))
            .chain(std::iter::once(status_str(&record.status).to_string()))
            .collect();
        println!("{}", row.join(","));
    }
    Ok(())
}
