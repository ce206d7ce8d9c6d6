use std::path::Path;

use pdfanchor::{LayoutOptions, PageText, Paragraph};

use crate::cli::OutputFormat;
use crate::shared::{csv_escape, one_line, open_document, paragraph_flags, resolve_pages};

pub fn run(
    file: &Path,
    pages: Option<&str>,
    anchors: &[String],
    format: &OutputFormat,
) -> Result<(), i32> {
    let document = open_document(file)?;
    let pages = resolve_pages(pages, &document)?;
    let opts = LayoutOptions::default();

    let classified: Vec<(&PageText, Vec<Paragraph>)> = pages
        .into_iter()
        .map(|page| (page, page.paragraphs(anchors, &opts)))
        .collect();

    match format {
        OutputFormat::Text => {
            println!("page\tid\tstyle\tflags\ttext");
            for (page, paragraphs) in &classified {
                for p in paragraphs {
                    println!(
                        "{}\t{}\t{}\t{}\t{}",
                        page.page_number,
                        p.id,
                        p.style_key,
                        paragraph_flags(p),
                        one_line(&p.text),
                    );
                }
            }
        }
        OutputFormat::Json => {
            let mut all = Vec::new();
            for (page, paragraphs) in &classified {
                for p in paragraphs {
                    all.push(serde_json::json!({
                        "page": page.page_number,
                        "id": p.id.to_string(),
                        "style": p.style_key.to_string(),
                        "text": p.text,
                        "lines": p.line_count(),
                        "x0": p.bbox.x0,
                        "top": p.bbox.top,
                        "x1": p.bbox.x1,
                        "bottom": p.bbox.bottom,
                        "isHeading": p.is_heading,
                        "isSeparator": p.is_separator,
                        "isFooter": p.is_footer,
                    }));
                }
            }
            let json_str = serde_json::to_string(&all).map_err(|e| {
                eprintln!("Error: failed to serialize paragraphs: {e}");
                1
            })?;
            println!("{json_str}");
        }
        OutputFormat::Csv => {
            println!("page,id,style,heading,separator,footer,text");
            for (page, paragraphs) in &classified {
                for p in paragraphs {
                    println!(
                        "{},{},{},{},{},{},{}",
                        page.page_number,
                        p.id,
                        p.style_key,
                        p.is_heading,
                        p.is_separator,
                        p.is_footer,
                        csv_escape(&p.text),
                    );
                }
            }
        }
    }

    Ok(())
}
