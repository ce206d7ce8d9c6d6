//! End-to-end layout and extraction scenarios over hand-built pages.

use pdfanchor_core::{
    DocumentLayout, FieldDefinition, LayoutOptions, StopReason, StopRules, TextFragment,
    extract_relative_field, known_anchors,
};

const PAGE_W: f64 = 612.0;
const PAGE_H: f64 = 792.0;

fn make_line(text: &str, y: f64) -> TextFragment {
    TextFragment::new(text, 10.0, y, 7.0 * text.len() as f64, 10.0)
}

fn layout(fragments: &[TextFragment], fields: &[FieldDefinition]) -> DocumentLayout {
    DocumentLayout::for_fields(fragments, fields, PAGE_W, PAGE_H, &LayoutOptions::default())
}

// --- invoice number above a note ---

fn invoice_page() -> Vec<TextFragment> {
    vec![
        make_line("INVOICE #", 0.0),
        make_line("12345", 12.0),
        make_line("NOTE:", 40.0),
    ]
}

#[test]
fn test_invoice_number_stops_before_note() {
    let def = FieldDefinition::new("f1", "Invoice", "INVOICE #").with_stop_rules(StopRules {
        stop_at_empty_gap: true,
        ..StopRules::default()
    });
    let all = vec![def.clone()];

    let value = extract_relative_field(
        &invoice_page(),
        &def,
        &all,
        PAGE_W,
        PAGE_H,
        &LayoutOptions::default(),
    );
    assert_eq!(value, "12345");

    let result = layout(&invoice_page(), &all).extract(&def, &all);
    assert_eq!(result.stop, Some(StopReason::Footer));
    assert_eq!(result.paragraphs, 1);
}

#[test]
fn test_invoice_layout_structure() {
    let def = FieldDefinition::new("f1", "Invoice", "INVOICE #");
    let layout = layout(&invoice_page(), &[def]);
    let texts: Vec<&str> = layout.paragraphs().iter().map(|p| p.text.as_str()).collect();
    assert_eq!(texts, vec!["INVOICE #", "12345", "NOTE:"]);

    let p = layout.paragraphs();
    assert!(p[0].is_heading);
    assert!(!p[1].is_heading);
    assert!(p[2].is_footer);
}

// --- Subtotal and Total ---

fn totals_page() -> Vec<TextFragment> {
    vec![
        make_line("Subtotal", 0.0),
        make_line("100.00", 20.0),
        make_line("Total", 40.0),
        make_line("110.00", 60.0),
    ]
}

#[test]
fn test_subtotal_stops_at_total() {
    let subtotal = FieldDefinition::new("f1", "Subtotal", "Subtotal").with_stop_rules(StopRules {
        stop_at_next_field: true,
        ..StopRules::default()
    });
    let total = FieldDefinition::new("f2", "Total", "Total");
    let all = vec![subtotal.clone(), total];

    let result = layout(&totals_page(), &all).extract(&subtotal, &all);
    assert_eq!(result.value, "100.00");
    assert_eq!(result.stop, Some(StopReason::NextField));
}

#[test]
fn test_subtotal_without_rule_runs_on() {
    let subtotal = FieldDefinition::new("f1", "Subtotal", "Subtotal");
    let total = FieldDefinition::new("f2", "Total", "Total");
    let all = vec![subtotal.clone(), total];

    let result = layout(&totals_page(), &all).extract(&subtotal, &all);
    assert_eq!(result.value, "100.00\n\nTotal\n\n110.00");
    assert_eq!(result.stop, None);
}

#[test]
fn test_known_anchors_lists_own_first() {
    let subtotal = FieldDefinition::new("f1", "Subtotal", "Subtotal");
    let blank = FieldDefinition::new("f3", "Blank", " ");
    let total = FieldDefinition::new("f2", "Total", "Total");
    let anchors = known_anchors(&total, &[subtotal, blank, total.clone()]);
    assert_eq!(anchors, vec!["Total", "Subtotal", "Total"]);
}

// --- separators ---

#[test]
fn test_separator_stops_field() {
    let fragments = vec![
        make_line("Address", 0.0),
        make_line("1 Main St", 30.0),
        make_line("----------", 60.0),
        make_line("--", 90.0),
    ];
    let def = FieldDefinition::new("f1", "Address", "Address").with_stop_rules(StopRules {
        stop_at_separator: true,
        ..StopRules::default()
    });
    let layout = layout(&fragments, std::slice::from_ref(&def));

    let flags: Vec<bool> = layout.paragraphs().iter().map(|p| p.is_separator).collect();
    assert_eq!(flags, vec![false, false, true, false]);

    let result = layout.extract(&def, std::slice::from_ref(&def));
    assert_eq!(result.value, "1 Main St");
    assert_eq!(result.stop, Some(StopReason::Separator));
}

// --- heading override ---

#[test]
fn test_known_anchor_is_heading_regardless_of_size() {
    let fragments = vec![
        TextFragment::new("a body paragraph that sets the dominant style", 10.0, 0.0, 300.0, 12.0),
        TextFragment::new("ship to", 10.0, 100.0, 40.0, 6.0),
        TextFragment::new("another stretch of body text", 10.0, 200.0, 200.0, 12.0),
    ];
    let def = FieldDefinition::new("f1", "Ship", "Ship To");
    let layout = layout(&fragments, &[def]);
    let headings: Vec<bool> = layout.paragraphs().iter().map(|p| p.is_heading).collect();
    assert_eq!(headings, vec![false, true, false]);
}

// --- stop precedence ---

#[test]
fn test_heading_wins_over_next_field_and_gap() {
    let fragments = vec![
        make_line("Name", 0.0),
        make_line("Jane Doe", 20.0),
        make_line("Date", 200.0),
        make_line("2024-01-01", 220.0),
    ];
    let name = FieldDefinition::new("f1", "Name", "Name").with_stop_rules(StopRules::all());
    let date = FieldDefinition::new("f2", "Date", "Date");
    let all = vec![name.clone(), date];

    let result = layout(&fragments, &all).extract(&name, &all);
    assert_eq!(result.value, "Jane Doe");
    assert_eq!(result.stop, Some(StopReason::Heading));
}

#[test]
fn test_next_field_wins_over_gap() {
    let fragments = vec![
        make_line("Name", 0.0),
        make_line("Jane Doe", 20.0),
        make_line("Date", 200.0),
    ];
    let name = FieldDefinition::new("f1", "Name", "Name").with_stop_rules(StopRules {
        stop_at_next_field: true,
        stop_at_empty_gap: true,
        ..StopRules::default()
    });
    let date = FieldDefinition::new("f2", "Date", "Date");
    let all = vec![name.clone(), date];

    let result = layout(&fragments, &all).extract(&name, &all);
    assert_eq!(result.stop, Some(StopReason::NextField));
}

// --- missing anchor ---

#[test]
fn test_missing_anchor_returns_empty() {
    let def = FieldDefinition::new("f1", "Due", "Due date");
    let value = extract_relative_field(
        &totals_page(),
        &def,
        std::slice::from_ref(&def),
        PAGE_W,
        PAGE_H,
        &LayoutOptions::default(),
    );
    assert_eq!(value, "");

    let result = layout(&totals_page(), std::slice::from_ref(&def)).extract(&def, &[]);
    assert!(!result.is_found());
}

#[test]
fn test_empty_page() {
    let def = FieldDefinition::new("f1", "Any", "Any");
    let layout = layout(&[], std::slice::from_ref(&def));
    assert!(layout.paragraphs().is_empty());
    assert_eq!(layout.extract(&def, &[]).value, "");
}

// --- one layout, many fields ---

#[test]
fn test_layout_reused_for_every_field() {
    let fragments = vec![
        make_line("Bill to", 0.0),
        make_line("ACME Corp", 20.0),
        make_line("Ship to", 40.0),
        make_line("Warehouse 9", 60.0),
    ];
    let rules = StopRules {
        stop_at_next_field: true,
        ..StopRules::default()
    };
    let bill = FieldDefinition::new("f1", "Bill", "Bill to").with_stop_rules(rules.clone());
    let ship = FieldDefinition::new("f2", "Ship", "Ship to").with_stop_rules(rules);
    let all = vec![bill.clone(), ship.clone()];

    let layout = layout(&fragments, &all);
    assert_eq!(layout.extract(&bill, &all).value, "ACME Corp");
    assert_eq!(layout.extract(&ship, &all).value, "Warehouse 9");
}
