#![allow(clippy::unwrap_used)]

use super::*;

fn store_in(dir: &tempfile::TempDir) -> LedgerStore {
    LedgerStore::new(dir.path().join("monthly_spending.csv"))
}

fn sample(month: Month) -> Vec<SpendingRecord> {
    vec![
        SpendingRecord::new(month, "food", 120_000),
        SpendingRecord::new(month, "cafe", 0),
        SpendingRecord::new(month, "shopping", 45_000),
    ]
}

// ── load ──────────────────────────────────────────────────────

#[test]
fn test_load_missing_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    assert!(store_in(&dir).load().unwrap().is_empty());
}

#[test]
fn test_load_empty_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    std::fs::write(store.path(), "").unwrap();
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_load_header_only() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    std::fs::write(store.path(), "month,category,amount\n").unwrap();
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_load_accepts_numeric_and_korean_months() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    std::fs::write(
        store.path(),
        "month,category,amount\n3월,식비,120000\n4,cafe,5000\nMay,other,0\n",
    )
    .unwrap();
    let records = store.load().unwrap();
    assert_eq!(
        records,
        vec![
            SpendingRecord::new(Month::Mar, "식비", 120_000),
            SpendingRecord::new(Month::Apr, "cafe", 5_000),
            SpendingRecord::new(Month::May, "other", 0),
        ]
    );
}

#[test]
fn test_load_wrong_columns() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    std::fs::write(store.path(), "date,description,amount\nJan,food,100\n").unwrap();
    assert!(matches!(store.load(), Err(Error::StorageRead { .. })));
}

#[test]
fn test_load_negative_amount() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    std::fs::write(store.path(), "month,category,amount\nJan,food,-100\n").unwrap();
    assert!(matches!(store.load(), Err(Error::StorageRead { .. })));
}

#[test]
fn test_load_fractional_amount() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    std::fs::write(store.path(), "month,category,amount\nJan,food,10.5\n").unwrap();
    assert!(matches!(store.load(), Err(Error::StorageRead { .. })));
}

#[test]
fn test_load_amount_above_limit() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    std::fs::write(
        store.path(),
        "month,category,amount\nJan,food,18446744073709551615\nJan,cafe,1\n",
    )
    .unwrap();
    assert!(matches!(store.load(), Err(Error::StorageRead { .. })));
}

#[test]
fn test_load_amount_at_limit() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    std::fs::write(
        store.path(),
        format!("month,category,amount\nJan,food,{MAX_AMOUNT}\nJan,cafe,1\n"),
    )
    .unwrap();
    let records = store.load().unwrap();
    assert_eq!(records[0].amount, MAX_AMOUNT);
}

#[test]
fn test_load_unknown_month() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    std::fs::write(store.path(), "month,category,amount\nSmarch,food,100\n").unwrap();
    let err = store.load().unwrap_err();
    assert!(err.to_string().contains("line 2"));
}

#[test]
fn test_load_extra_field_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    std::fs::write(store.path(), "month,category,amount\nJan,food,100,oops\n").unwrap();
    assert!(matches!(store.load(), Err(Error::StorageRead { .. })));
}

// ── append ────────────────────────────────────────────────────

#[test]
fn test_append_to_empty_ledger() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    let written = store.append(&sample(Month::Jan)).unwrap();
    assert_eq!(written, sample(Month::Jan));
    assert_eq!(store.load().unwrap(), sample(Month::Jan));
}

#[test]
fn test_append_preserves_order() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    store.append(&sample(Month::Jan)).unwrap();
    let before = store.load().unwrap();
    store.append(&sample(Month::Feb)).unwrap();

    let mut expected = before;
    expected.extend(sample(Month::Feb));
    assert_eq!(store.load().unwrap(), expected);
}

#[test]
fn test_append_keeps_duplicates() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    store.append(&sample(Month::Jan)).unwrap();
    store.append(&sample(Month::Jan)).unwrap();
    assert_eq!(store.load().unwrap().len(), 6);
}

#[test]
fn test_append_writes_header_and_labels() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    store
        .append(&[SpendingRecord::new(Month::Dec, "cafe", 4_500)])
        .unwrap();
    let contents = std::fs::read_to_string(store.path()).unwrap();
    assert_eq!(contents, "month,category,amount\nDec,cafe,4500\n");
}

#[test]
fn test_append_creates_parent_dir() {
    let dir = tempfile::tempdir().unwrap();
    let store = LedgerStore::new(dir.path().join("a").join("b").join("ledger.csv"));
    store.append(&sample(Month::Jan)).unwrap();
    assert_eq!(store.load().unwrap().len(), 3);
}

#[test]
fn test_append_leaves_no_temp_files() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    store.append(&sample(Month::Jan)).unwrap();
    store.append(&sample(Month::Feb)).unwrap();
    let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn test_append_to_corrupt_ledger_fails_without_overwriting() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    std::fs::write(store.path(), "bogus\n").unwrap();
    assert!(matches!(
        store.append(&sample(Month::Jan)),
        Err(Error::StorageRead { .. })
    ));
    assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "bogus\n");
}

#[test]
fn test_append_write_failure() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, "").unwrap();
    let store = LedgerStore::new(blocker.join("ledger.csv"));
    assert!(matches!(
        store.append(&sample(Month::Jan)),
        Err(Error::StorageWrite { .. })
    ));
}

// ── reset ─────────────────────────────────────────────────────

#[test]
fn test_reset_clears_ledger() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    store.append(&sample(Month::Jan)).unwrap();
    store.reset().unwrap();
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_reset_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    store.append(&sample(Month::Jan)).unwrap();
    store.reset().unwrap();
    store.reset().unwrap();
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_reset_without_data_is_noop() {
    let dir = tempfile::tempdir().unwrap();
    store_in(&dir).reset().unwrap();
}
