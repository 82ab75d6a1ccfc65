#![allow(clippy::unwrap_used)]

use super::*;

// ── Month ─────────────────────────────────────────────────────

#[test]
fn test_month_parse_label() {
    assert_eq!(Month::parse("Jan"), Some(Month::Jan));
    assert_eq!(Month::parse("jan"), Some(Month::Jan));
    assert_eq!(Month::parse("DEC"), Some(Month::Dec));
}

#[test]
fn test_month_parse_full_name() {
    assert_eq!(Month::parse("September"), Some(Month::Sep));
    assert_eq!(Month::parse("may"), Some(Month::May));
}

#[test]
fn test_month_parse_number() {
    assert_eq!(Month::parse("1"), Some(Month::Jan));
    assert_eq!(Month::parse("12"), Some(Month::Dec));
    assert_eq!(Month::parse(" 7 "), Some(Month::Jul));
}

#[test]
fn test_month_parse_korean_suffix() {
    assert_eq!(Month::parse("3월"), Some(Month::Mar));
    assert_eq!(Month::parse("11월"), Some(Month::Nov));
}

#[test]
fn test_month_parse_invalid() {
    assert_eq!(Month::parse("0"), None);
    assert_eq!(Month::parse("13"), None);
    assert_eq!(Month::parse("Ja"), None);
    assert_eq!(Month::parse(""), None);
}

#[test]
fn test_month_label_roundtrip() {
    for m in Month::all() {
        assert_eq!(Month::parse(m.label()), Some(*m), "Roundtrip failed for {m}");
    }
}

#[test]
fn test_month_all_in_calendar_order() {
    let all = Month::all();
    assert_eq!(all.len(), 12);
    for (i, m) in all.iter().enumerate() {
        assert_eq!(m.number(), i as u32 + 1);
    }
}

#[test]
fn test_month_next_prev_wrap() {
    assert_eq!(Month::Dec.next(), Month::Jan);
    assert_eq!(Month::Jan.prev(), Month::Dec);
    assert_eq!(Month::Jun.next(), Month::Jul);
    assert_eq!(Month::Jun.prev(), Month::May);
}

// ── BudgetConfig ──────────────────────────────────────────────

#[test]
fn test_budget_rejects_zero() {
    assert!(BudgetConfig::new(Month::Jan, 0).is_err());
}

#[test]
fn test_budget_accepts_positive() {
    let budget = BudgetConfig::new(Month::Mar, 300_000).unwrap();
    assert_eq!(budget.month, Month::Mar);
    assert_eq!(budget.limit, 300_000);
}

// ── SpendingRecord ────────────────────────────────────────────

#[test]
fn test_record_duplicates_are_equal() {
    let a = SpendingRecord::new(Month::Jan, "food", 1000);
    let b = SpendingRecord::new(Month::Jan, "food", 1000);
    assert_eq!(a, b);
}
