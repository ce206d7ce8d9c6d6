use std::path::Path;

use pdfanchor::{LayoutOptions, PageText};

use crate::cli::OutputFormat;
use crate::shared::{csv_escape, open_document, resolve_pages};

pub fn run(file: &Path, pages: Option<&str>, format: &OutputFormat) -> Result<(), i32> {
    let document = open_document(file)?;
    let pages = resolve_pages(pages, &document)?;
    let opts = LayoutOptions::default();

    match format {
        OutputFormat::Text => write_text(&pages, &opts),
        OutputFormat::Json => write_json(&pages, &opts),
        OutputFormat::Csv => write_csv(&pages, &opts),
    }
}

fn write_text(pages: &[&PageText], opts: &LayoutOptions) -> Result<(), i32> {
    for page in pages {
        println!("--- Page {} ---", page.page_number);
        for line in page.lines(opts) {
            println!("{}", line.text);
        }
    }
    Ok(())
}

fn write_json(pages: &[&PageText], opts: &LayoutOptions) -> Result<(), i32> {
    let mut all_lines = Vec::new();

    for page in pages {
        for line in page.lines(opts) {
            all_lines.push(serde_json::json!({
                "page": page.page_number,
                "text": line.text,
                "x0": line.bbox.x0,
                "top": line.bbox.top,
                "x1": line.bbox.x1,
                "bottom": line.bbox.bottom,
                "style": line.style_key().to_string(),
            }));
        }
    }

    let json_str = serde_json::to_string(&all_lines).map_err(|e| {
        eprintln!("Error: failed to serialize lines: {e}");
        1
    })?;
    println!("{json_str}");
    Ok(())
}

fn write_csv(pages: &[&PageText], opts: &LayoutOptions) -> Result<(), i32> {
    println!("page,text,x0,top,x1,bottom");

    for page in pages {
        for line in page.lines(opts) {
            println!(
                "{},{},{:.2},{:.2},{:.2},{:.2}",
                page.page_number,
                csv_escape(&line.text),
                line.bbox.x0,
                line.bbox.top,
                line.bbox.x1,
                line.bbox.bottom,
            );
        }
    }
    Ok(())
}
