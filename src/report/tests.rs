#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;

fn configured() -> Vec<String> {
    ["food", "cafe", "shopping"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

// ── pivot ─────────────────────────────────────────────────────

#[test]
fn test_pivot_is_dense_and_ordered() {
    let ledger = vec![
        SpendingRecord::new(Month::Mar, "food", 300),
        SpendingRecord::new(Month::Jan, "food", 100),
        SpendingRecord::new(Month::Jan, "cafe", 10),
        SpendingRecord::new(Month::Jan, "food", 50),
    ];
    let report = Report::build(&[], &ledger, &configured()).unwrap();

    assert_eq!(report.categories, configured());
    assert_eq!(report.months, vec![Month::Jan, Month::Mar]);
    assert_eq!(report.pivot, vec![vec![150, 300], vec![10, 0], vec![0, 0]]);
}

#[test]
fn test_extra_ledger_categories_follow_configured() {
    let ledger = vec![
        SpendingRecord::new(Month::Jan, "zoo", 1),
        SpendingRecord::new(Month::Jan, "books", 2),
    ];
    let report = Report::build(&[], &ledger, &configured()).unwrap();
    assert_eq!(
        report.categories,
        vec!["food", "cafe", "shopping", "books", "zoo"]
    );
}

#[test]
fn test_empty_ledger() {
    let report = Report::build(&[], &[], &configured()).unwrap();
    assert!(report.is_empty());
    assert_eq!(report.pivot, vec![Vec::<u64>::new(); 3]);
    assert_eq!(report.averages, vec![Decimal::ZERO; 3]);
}

// ── averages ──────────────────────────────────────────────────

#[test]
fn test_absent_categories_average_zero() {
    let ledger = vec![
        SpendingRecord::new(Month::Jan, "food", 100),
        SpendingRecord::new(Month::Feb, "food", 200),
    ];
    let report = Report::build(&[], &ledger, &configured()).unwrap();
    assert_eq!(report.averages, vec![dec!(150), Decimal::ZERO, Decimal::ZERO]);
}

// ── proportions ───────────────────────────────────────────────

#[test]
fn test_proportions_skip_zero_amounts() {
    let current = vec![
        SpendingRecord::new(Month::Jan, "food", 75_000),
        SpendingRecord::new(Month::Jan, "cafe", 0),
        SpendingRecord::new(Month::Jan, "shopping", 25_000),
    ];
    let report = Report::build(&current, &current, &configured()).unwrap();
    assert_eq!(report.total, 100_000);
    assert_eq!(report.proportions.len(), 2);
    assert_eq!(report.proportions[0].category, "food");
    assert_eq!(report.proportions[0].percent, dec!(75));
    assert_eq!(report.proportions[1].percent, dec!(25));
}

#[test]
fn test_proportions_round_to_one_decimal() {
    let current = vec![
        SpendingRecord::new(Month::Jan, "food", 1),
        SpendingRecord::new(Month::Jan, "cafe", 2),
    ];
    let report = Report::build(&current, &[], &configured()).unwrap();
    assert_eq!(report.proportions[0].percent, dec!(33.3));
    assert_eq!(report.proportions[1].percent, dec!(66.7));
}

#[test]
fn test_proportions_all_zero() {
    let current = vec![SpendingRecord::new(Month::Jan, "food", 0)];
    let report = Report::build(&current, &[], &configured()).unwrap();
    assert_eq!(report.total, 0);
    assert!(report.proportions.is_empty());
}
