use std::path::Path;

use pdfanchor::{IntersectMode, LayoutError, PercentBBox, strip_field_label};

use crate::shared::open_document;

pub fn run(
    file: &Path,
    bbox: &str,
    page: usize,
    center: bool,
    tolerance: f64,
    label: Option<&str>,
) -> Result<(), i32> {
    let bbox = parse_bbox(bbox).map_err(|e| {
        eprintln!("Error: {e}");
        1
    })?;
    let document = open_document(file)?;
    let Some(page_text) = document.page(page) else {
        eprintln!(
            "Error: page {page} does not exist (document has {} pages)",
            document.page_count()
        );
        return Err(1);
    };

    let mode = if center {
        IntersectMode::Center { tolerance }
    } else {
        IntersectMode::Overlap
    };
    let text = page_text.extract_region(&bbox, mode);
    let text = match label {
        Some(name) => strip_field_label(&text, name),
        None => text,
    };

    println!("{text}");
    Ok(())
}

/// Parse `xmin,ymin,xmax,ymax` (percent of the page) and reject boxes with no area.
fn parse_bbox(input: &str) -> Result<PercentBBox, String> {
    let values = input
        .split(',')
        .map(|v| {
            let v = v.trim();
            v.parse::<f64>()
                .map_err(|_| format!("invalid bbox coordinate: '{v}'"))
        })
        .collect::<Result<Vec<f64>, String>>()?;

    let [xmin, ymin, xmax, ymax] = values[..] else {
        return Err(format!(
            "bbox needs 4 values (xmin,ymin,xmax,ymax), got {}",
            values.len()
        ));
    };

    let bbox = PercentBBox::new(xmin, ymin, xmax, ymax);
    if bbox.is_degenerate() {
        return Err(LayoutError::DegenerateRegion(bbox).to_string());
    }
    Ok(bbox)
}
