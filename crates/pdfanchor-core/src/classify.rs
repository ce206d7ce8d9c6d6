//! Structural classification passes: headings, separators and footers.
//!
//! Each pass takes the paragraph list and returns it with one kind of flag
//! set. Passes only ever set their own flag, so they can run in any order;
//! document order is never changed.

use std::sync::LazyLock;

use regex::Regex;

use crate::line::StyleKey;
use crate::options::LayoutOptions;
use crate::paragraph::{Paragraph, normalize_label};

static SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[_\-=*]{3,}$").expect("separator pattern is valid"));

const FOOTER_PREFIXES: [&str; 2] = ["nota:", "note:"];
const FOOTER_WORDS: [&str; 2] = ["nota", "note"];

/// The dominant body style: the style key carrying the most characters.
/// Ties go to the style seen first in document order.
pub fn body_style(paragraphs: &[Paragraph]) -> Option<StyleKey> {
    let mut totals: Vec<(StyleKey, usize)> = Vec::new();
    for p in paragraphs {
        let chars = p.text.chars().count();
        match totals.iter_mut().find(|(key, _)| *key == p.style_key) {
            Some((_, total)) => *total += chars,
            None => totals.push((p.style_key, chars)),
        }
    }

    let mut best: Option<(StyleKey, usize)> = None;
    for (key, total) in totals {
        if best.is_none_or(|(_, max)| total > max) {
            best = Some((key, total));
        }
    }
    best.map(|(key, _)| key)
}

/// True if the text has at least one cased letter and no lower-case letters.
fn is_all_caps(text: &str) -> bool {
    let mut has_upper = false;
    for c in text.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_upper = true;
        }
    }
    has_upper
}

/// Flag headings.
///
/// A paragraph is a heading when its trimmed, case-folded text equals one of
/// `known_anchors` (always, whatever its style), when its style size exceeds
/// the body size by more than `heading_size_ratio`, or when it is short and
/// fully upper-case.
pub fn analyze_headings(
    mut paragraphs: Vec<Paragraph>,
    known_anchors: &[String],
    options: &LayoutOptions,
) -> Vec<Paragraph> {
    let Some(body) = body_style(&paragraphs) else {
        return paragraphs;
    };
    let anchors: Vec<String> = known_anchors
        .iter()
        .map(|a| normalize_label(a))
        .filter(|a| !a.is_empty())
        .collect();
    let body_size = body.size() as f64;

    for p in &mut paragraphs {
        if anchors.contains(&normalize_label(&p.text)) {
            p.is_heading = true;
            continue;
        }

        let is_larger = p.style_key.size() as f64 > body_size * options.heading_size_ratio;
        let len = p.text.chars().count();
        let is_short_caps = len < options.heading_max_chars
            && len > options.heading_min_caps_chars
            && is_all_caps(&p.text);

        p.is_heading = p.is_heading || is_larger || is_short_caps;
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(
        body = %body,
        headings = paragraphs.iter().filter(|p| p.is_heading).count(),
        "headings analyzed"
    );

    paragraphs
}

/// Flag horizontal rules rendered as text (`---`, `___`, `===`, `***`).
pub fn detect_separators(mut paragraphs: Vec<Paragraph>) -> Vec<Paragraph> {
    for p in &mut paragraphs {
        if SEPARATOR_RE.is_match(p.text.trim()) {
            p.is_separator = true;
        }
    }
    paragraphs
}

/// Flag note/footer paragraphs (`Nota:`, `Note:`, or the bare word).
pub fn detect_footers(mut paragraphs: Vec<Paragraph>) -> Vec<Paragraph> {
    for p in &mut paragraphs {
        let clean = normalize_label(&p.text);
        let is_footer = FOOTER_PREFIXES.iter().any(|prefix| clean.starts_with(prefix))
            || FOOTER_WORDS.contains(&clean.as_str());
        if is_footer {
            p.is_footer = true;
        }
    }
    paragraphs
}

/// Run all three passes.
pub fn classify_paragraphs(
    paragraphs: Vec<Paragraph>,
    known_anchors: &[String],
    options: &LayoutOptions,
) -> Vec<Paragraph> {
    let paragraphs = analyze_headings(paragraphs, known_anchors, options);
    let paragraphs = detect_separators(paragraphs);
    detect_footers(paragraphs)
}
