//! Dense tables derived from the ledger, shaped for the chart and table renderers.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::advice::{average_by_category, compute_totals, pivot_by_category_and_month};
use crate::error::Result;
use crate::models::{Month, SpendingRecord};

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Slice {
    pub(crate) category: String,
    pub(crate) amount: u64,
    /// Share of the current total, one decimal place.
    pub(crate) percent: Decimal,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) struct Report {
    pub(crate) total: u64,
    /// Row labels for `pivot` and `averages`.
    pub(crate) categories: Vec<String>,
    /// Months that occur in the ledger, calendar order.
    pub(crate) months: Vec<Month>,
    /// `pivot[row][col]` is the sum for `categories[row]` in `months[col]`, 0 when absent.
    pub(crate) pivot: Vec<Vec<u64>>,
    /// Mean per category; categories with no ledger records show 0.
    pub(crate) averages: Vec<Decimal>,
    pub(crate) proportions: Vec<Slice>,
}

impl Report {
    /// `configured` fixes the row order; ledger categories outside it follow alphabetically.
    pub(crate) fn build(
        current: &[SpendingRecord],
        ledger: &[SpendingRecord],
        configured: &[String],
    ) -> Result<Self> {
        let pivot_map = pivot_by_category_and_month(ledger)?;
        let avg_map = average_by_category(ledger);

        let mut categories: Vec<String> = configured.to_vec();
        for category in avg_map.keys() {
            if !categories.contains(category) {
                categories.push(category.clone());
            }
        }

        let mut months: Vec<Month> = pivot_map.keys().map(|(_, m)| *m).collect();
        months.sort();
        months.dedup();

        let pivot = categories
            .iter()
            .map(|cat| {
                months
                    .iter()
                    .map(|m| pivot_map.get(&(cat.clone(), *m)).copied().unwrap_or(0))
                    .collect()
            })
            .collect();

        let averages = categories
            .iter()
            .map(|cat| avg_map.get(cat).copied().unwrap_or(Decimal::ZERO))
            .collect();

        let total = compute_totals(current)?;

        Ok(Self {
            total,
            categories,
            months,
            pivot,
            averages,
            proportions: proportions(current, total),
        })
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.months.is_empty()
    }
}

/// Non-zero records of the current input with their share of `total`.
fn proportions(current: &[SpendingRecord], total: u64) -> Vec<Slice> {
    current
        .iter()
        .filter(|r| r.amount > 0)
        .map(|r| {
            let percent = (Decimal::from(r.amount) * Decimal::ONE_HUNDRED / Decimal::from(total))
                .round_dp_with_strategy(1, RoundingStrategy::MidpointNearestEven);
            Slice {
                category: r.category.clone(),
                amount: r.amount,
                percent,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests;
