use crate::advice::{generate_advice, Advice};
use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::ledger::LedgerStore;
use crate::models::{BudgetConfig, Month, SpendingRecord};
use crate::report::Report;

/// Result of one analysis run. Recomputed on every request.
#[derive(Debug, Clone)]
pub(crate) struct Analysis {
    pub(crate) budget: BudgetConfig,
    pub(crate) current: Vec<SpendingRecord>,
    pub(crate) report: Report,
    pub(crate) advice: Advice,
    /// Number of records in the ledger the report was built from.
    pub(crate) ledger_len: usize,
}

/// One record per configured category, in configured order. Categories not
/// listed in `amounts` get 0; names outside the configured set are rejected.
pub(crate) fn build_records(
    config: &AppConfig,
    month: Month,
    amounts: &[(String, u64)],
) -> Result<Vec<SpendingRecord>> {
    let mut resolved: Vec<(&str, u64)> = Vec::new();
    for (name, amount) in amounts {
        let category = config.find_category(name).ok_or_else(|| {
            tracing::warn!(category = %name, "rejected unknown category");
            Error::Validation(format!(
                "unknown category '{name}' (expected one of: {})",
                config.category_names().join(", ")
            ))
        })?;
        if resolved.iter().any(|(c, _)| *c == category) {
            return Err(Error::Validation(format!(
                "category '{category}' given more than once"
            )));
        }
        resolved.push((category, *amount));
    }

    Ok(config
        .categories
        .iter()
        .map(|c| {
            let amount = resolved
                .iter()
                .find(|(name, _)| *name == c.name)
                .map(|(_, a)| *a)
                .unwrap_or(0);
            SpendingRecord::new(month, c.name.clone(), amount)
        })
        .collect())
}

/// Analyse `current` against `ledger` without touching storage.
pub(crate) fn analyze(
    config: &AppConfig,
    budget: BudgetConfig,
    current: Vec<SpendingRecord>,
    ledger: &[SpendingRecord],
) -> Result<Analysis> {
    let advice = generate_advice(&current, budget.limit, &config.thresholds())?;
    let report = Report::build(&current, ledger, &config.category_names())?;
    Ok(Analysis {
        budget,
        current,
        report,
        advice,
        ledger_len: ledger.len(),
    })
}

/// Append `current` to the ledger, then analyse it against the combined history.
pub(crate) fn save_and_analyze(
    store: &LedgerStore,
    config: &AppConfig,
    budget: BudgetConfig,
    current: Vec<SpendingRecord>,
) -> Result<Analysis> {
    let ledger = store.append(&current)?;
    analyze(config, budget, current, &ledger)
}
