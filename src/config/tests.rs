#![allow(clippy::unwrap_used)]

use super::*;

// ── Defaults ──────────────────────────────────────────────────

#[test]
fn test_default_config_is_valid() {
    AppConfig::default().validate().unwrap();
}

#[test]
fn test_default_categories_in_input_order() {
    let names = AppConfig::default().category_names();
    assert_eq!(
        names,
        vec!["food", "cafe", "shopping", "transport", "leisure", "other"]
    );
}

#[test]
fn test_default_thresholds() {
    let thresholds = AppConfig::default().thresholds();
    assert_eq!(thresholds.get("cafe"), Some(70_000));
    assert_eq!(thresholds.get("shopping"), Some(100_000));
    assert_eq!(thresholds.get("food"), Some(200_000));
    assert_eq!(thresholds.get("leisure"), Some(100_000));
    assert_eq!(thresholds.get("transport"), Some(100_000));
    assert_eq!(thresholds.get("other"), Some(150_000));
    assert_eq!(thresholds.get("rent"), None);
}

#[test]
fn test_default_budget_range() {
    let range = AppConfig::default().budget;
    assert_eq!(range.min, 100_000);
    assert_eq!(range.max, 1_000_000);
    assert_eq!(range.step, 50_000);
    assert_eq!(range.clamp(5_000_000), 1_000_000);
    assert_eq!(range.clamp(0), 100_000);
}

// ── Validation ────────────────────────────────────────────────

#[test]
fn test_validate_rejects_empty_categories() {
    let config = AppConfig {
        categories: Vec::new(),
        ..AppConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_duplicate_categories() {
    let mut config = AppConfig::default();
    config.categories.push(CategoryConfig {
        name: "Cafe".into(),
        threshold: None,
    });
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_inverted_budget_range() {
    let mut config = AppConfig::default();
    config.budget.min = 2_000_000;
    assert!(config.validate().is_err());
}

#[test]
fn test_find_category_case_insensitive() {
    let config = AppConfig::default();
    assert_eq!(config.find_category("CAFE"), Some("cafe"));
    assert_eq!(config.find_category(" food "), Some("food"));
    assert_eq!(config.find_category("rent"), None);
}

#[test]
fn test_category_without_threshold_not_in_thresholds() {
    let mut config = AppConfig::default();
    config.categories.push(CategoryConfig {
        name: "gifts".into(),
        threshold: None,
    });
    assert_eq!(config.thresholds().get("gifts"), None);
    assert_eq!(config.thresholds().get("other"), Some(150_000));
}

// ── load_or_create ────────────────────────────────────────────

#[test]
fn test_load_or_create_writes_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let load = load_or_create(&path, dir.path()).unwrap();
    assert!(load.created);
    assert!(path.exists());
    assert_eq!(load.config.data_file, dir.path().join("monthly_spending.csv"));

    let again = load_or_create(&path, dir.path()).unwrap();
    assert!(!again.created);
    assert_eq!(again.config, load.config);
}

#[test]
fn test_load_custom_categories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
data_file = "/tmp/ledger.csv"

[[categories]]
name = "식비"
threshold = 200000

[[categories]]
name = "카페"
threshold = 70000
"#,
    )
    .unwrap();

    let load = load_or_create(&path, dir.path()).unwrap();
    assert_eq!(load.config.category_names(), vec!["식비", "카페"]);
    assert_eq!(load.config.data_file, PathBuf::from("/tmp/ledger.csv"));
    assert_eq!(load.config.budget, BudgetRange::default());
}

#[test]
fn test_load_malformed_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "categories = 12").unwrap();
    assert!(matches!(
        load_or_create(&path, dir.path()),
        Err(Error::Config(_))
    ));
}
