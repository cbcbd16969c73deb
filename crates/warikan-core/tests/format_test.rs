//! Rendering checks: the plain-text report carries every amount, and a
//! reloaded result renders identically to a fresh one.

use warikan_core::{ReportStyle, compute, plain_text_report, roster_view, schedule_view, validate};
use warikan_types::{PaymentResult, Role, SplitConfig};

fn worked_example() -> PaymentResult {
    let roles = vec![
        Role::new(1, "A", 1.0, 3),
        Role::new(2, "B", 1.2, 1),
    ];
    let input = validate(&roles, &SplitConfig::new(10000.0, 100)).expect("valid input");
    compute(&input)
}

#[test]
fn report_contains_every_role_and_summary_amount() {
    let report = plain_text_report(&worked_example(), &ReportStyle::default());
    assert!(report.contains("A (3 people)"));
    assert!(report.contains("B (1 person)"));
    assert!(report.contains("per person:  \u{a5}2,400"));
    assert!(report.contains("per person:  \u{a5}2,900"));
    assert!(report.contains("group total: \u{a5}7,200"));
    assert!(report.contains("Collected total: \u{a5}10,100"));
    assert!(report.contains("Original total:  \u{a5}10,000"));
    assert!(report.contains("Collector keeps: \u{a5}100"));
}

#[test]
fn report_header_counts_every_payer() {
    let report = plain_text_report(&worked_example(), &ReportStyle::default());
    assert!(report.contains("Split of \u{a5}10,000 among 4 people"));
}

#[test]
fn report_respects_a_custom_currency_marker() {
    let style = ReportStyle {
        currency: "$".to_string(),
    };
    let report = plain_text_report(&worked_example(), &style);
    assert!(report.contains("$2,400"));
    assert!(!report.contains('\u{a5}'));
}

#[test]
fn a_reloaded_result_renders_identically() {
    let result = worked_example();
    let json = serde_json::to_string(&result).expect("serializable");
    let reloaded: PaymentResult = serde_json::from_str(&json).expect("deserializable");
    let style = ReportStyle::default();
    assert_eq!(
        plain_text_report(&result, &style),
        plain_text_report(&reloaded, &style)
    );
}

#[test]
fn schedule_view_preformats_lines_and_summary() {
    let view = schedule_view(&worked_example(), &ReportStyle::default());
    assert_eq!(view.lines.len(), 2);
    assert_eq!(view.lines[0].name, "A");
    assert_eq!(view.lines[0].count, 3);
    assert_eq!(view.lines[0].individual, "\u{a5}2,400");
    assert_eq!(view.lines[0].group, "\u{a5}7,200");
    assert_eq!(view.collected_total, "\u{a5}10,100");
    assert_eq!(view.original_total, "\u{a5}10,000");
    assert_eq!(view.excess, "\u{a5}100");
    assert_eq!(view.head_count, 4);
}

#[test]
fn roster_view_lists_every_role_with_its_id() {
    let roles = vec![
        Role::new(1, "organizer", 1.5, 2),
        Role::new(2, "member", 1.0, 3),
    ];
    let table = roster_view(&roles);
    let lines: Vec<_> = table.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("ID"));
    assert!(lines[0].contains("NAME"));
    assert!(lines[1].contains("organizer"));
    assert!(lines[2].contains("member"));
    assert!(lines[2].starts_with("   2"));
}
