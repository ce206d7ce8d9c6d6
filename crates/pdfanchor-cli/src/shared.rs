use std::io::{self, IsTerminal, Write};
use std::path::Path;

use pdfanchor::{Document, PageText, Paragraph};
use tracing_subscriber::EnvFilter;

use crate::page_range::parse_page_range;

/// Install the stderr log subscriber.
///
/// `-v` selects debug and `-vv` trace; without it `RUST_LOG` applies,
/// falling back to warnings only.
pub fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

/// Open a page-text JSON document with user-friendly error messages.
///
/// Returns `Err(1)` with a message printed to stderr if the file is not found
/// or cannot be parsed.
pub fn open_document(file: &Path) -> Result<Document, i32> {
    if !file.exists() {
        eprintln!("Error: file not found: {}", file.display());
        return Err(1);
    }

    Document::open(file).map_err(|e| {
        eprintln!("Error: failed to read {}: {e}", file.display());
        1
    })
}

/// Resolve an optional page range against a document, in page order.
pub fn resolve_pages<'a>(pages: Option<&str>, document: &'a Document) -> Result<Vec<&'a PageText>, i32> {
    let numbers = match pages {
        Some(range) => parse_page_range(range, document.page_count()).map_err(|e| {
            eprintln!("Error: {e}");
            1
        })?,
        None => (1..=document.page_count()).collect(),
    };
    Ok(numbers.into_iter().filter_map(|n| document.page(n)).collect())
}

/// Classification flags as a comma-separated list, or `-` when none are set.
pub fn paragraph_flags(paragraph: &Paragraph) -> String {
    let flags: Vec<&str> = [
        (paragraph.is_heading, "heading"),
        (paragraph.is_separator, "separator"),
        (paragraph.is_footer, "footer"),
    ]
    .into_iter()
    .filter_map(|(set, name)| set.then_some(name))
    .collect();

    if flags.is_empty() {
        "-".to_string()
    } else {
        flags.join(",")
    }
}

/// Escape a string for CSV output.
///
/// If the text contains commas, double quotes, or newlines, wraps it in
/// double quotes and escapes any internal double quotes by doubling them.
pub fn csv_escape(text: &str) -> String {
    if text.contains(',') || text.contains('"') || text.contains('\n') {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text.to_string()
    }
}

/// Show multi-line text on one line of tab-separated output.
pub fn one_line(text: &str) -> String {
    text.replace('\n', "\\n")
}

/// A progress reporter that prints "Processing file N/M..." to stderr,
/// but only when stderr is connected to a TTY (terminal).
pub struct ProgressReporter {
    total: usize,
    is_tty: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter for `total` files.
    pub fn new(total: usize) -> Self {
        Self {
            total,
            is_tty: io::stderr().is_terminal(),
        }
    }

    /// Report progress for file `current` (1-indexed).
    pub fn report(&self, current: usize) {
        if self.is_tty {
            eprint!("\rProcessing file {}/{}...", current, self.total);
            let _ = io::stderr().flush();
        }
    }

    /// Clear the progress line (if TTY).
    pub fn finish(&self) {
        if self.is_tty {
            eprint!("\r{}\r", " ".repeat(40));
            let _ = io::stderr().flush();
        }
    }
}
