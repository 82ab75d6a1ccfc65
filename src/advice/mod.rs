//! Aggregation and rule-based budgeting advice.
//!
//! Everything here is a pure function of its inputs; nothing is cached
//! between analysis runs.

use std::collections::{BTreeMap, HashMap};

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{Error, Result};
use crate::models::{Month, SpendingRecord};
use crate::util::format_amount;

/// Per-category caution thresholds. A category with no entry never triggers a caution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Thresholds {
    limits: HashMap<String, u64>,
}

impl Thresholds {
    pub(crate) fn get(&self, category: &str) -> Option<u64> {
        self.limits.get(category).copied()
    }
}

impl FromIterator<(String, u64)> for Thresholds {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        Self {
            limits: iter.into_iter().collect(),
        }
    }
}

/// One advisory line. Consumers display these in the order produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Message {
    OverBudget { overage: u64 },
    NearLimit,
    UnderSpending,
    OnTrack,
    CategoryCaution {
        category: String,
        amount: u64,
        threshold: u64,
    },
    SavingScore(u8),
    RecommendedSaving(u64),
}

impl Message {
    pub(crate) fn is_warning(&self) -> bool {
        matches!(
            self,
            Self::OverBudget { .. } | Self::NearLimit | Self::CategoryCaution { .. }
        )
    }

    pub(crate) fn text(&self, currency: &str) -> String {
        match self {
            Self::OverBudget { overage } => format!(
                "Over budget by {}. Cut back on discretionary spending.",
                format_amount(*overage, currency)
            ),
            Self::NearLimit => {
                "Over 90% of the budget is used. Watch spending for the rest of the month."
                    .into()
            }
            Self::UnderSpending => {
                "Spending is under half of the budget. Check that nothing essential was skipped."
                    .into()
            }
            Self::OnTrack => "Spending is on track with the budget.".into(),
            Self::CategoryCaution {
                category,
                amount,
                threshold,
            } => format!(
                "{category} spending of {} is above the {} guideline.",
                format_amount(*amount, currency),
                format_amount(*threshold, currency)
            ),
            Self::SavingScore(score) => format!("Saving score: {score}/100"),
            Self::RecommendedSaving(amount) => format!(
                "Recommended saving this month: {} (20% of budget)",
                format_amount(*amount, currency)
            ),
        }
    }
}

impl std::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text(""))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Advice {
    pub(crate) total: u64,
    pub(crate) score: u8,
    pub(crate) recommended_saving: u64,
    pub(crate) messages: Vec<Message>,
}

pub(crate) fn compute_totals(records: &[SpendingRecord]) -> Result<u64> {
    records
        .iter()
        .try_fold(0u64, |acc, r| acc.checked_add(r.amount))
        .ok_or_else(|| Error::Validation("total spending exceeds the representable range".into()))
}

/// Sum of amounts per (category, month). Combinations with no records are absent.
pub(crate) fn pivot_by_category_and_month(
    ledger: &[SpendingRecord],
) -> Result<BTreeMap<(String, Month), u64>> {
    let mut pivot = BTreeMap::new();
    for record in ledger {
        let cell = pivot
            .entry((record.category.clone(), record.month))
            .or_insert(0u64);
        *cell = cell.checked_add(record.amount).ok_or_else(|| {
            Error::Validation(format!(
                "{} spending in {} exceeds the representable range",
                record.category, record.month
            ))
        })?;
    }
    Ok(pivot)
}

/// Mean amount per category across all months. Categories absent from the ledger are absent here.
pub(crate) fn average_by_category(ledger: &[SpendingRecord]) -> BTreeMap<String, Decimal> {
    let mut sums: BTreeMap<String, (Decimal, u64)> = BTreeMap::new();
    for record in ledger {
        let entry = sums
            .entry(record.category.clone())
            .or_insert((Decimal::ZERO, 0));
        entry.0 += Decimal::from(record.amount);
        entry.1 += 1;
    }
    sums.into_iter()
        .map(|(category, (sum, count))| (category, sum / Decimal::from(count)))
        .collect()
}

pub(crate) fn generate_advice(
    records: &[SpendingRecord],
    budget: u64,
    thresholds: &Thresholds,
) -> Result<Advice> {
    if budget == 0 {
        return Err(Error::Validation("budget must be greater than zero".into()));
    }

    let total = compute_totals(records)?;
    let mut messages = vec![budget_adherence(total, budget)];

    for record in records {
        if let Some(threshold) = thresholds.get(&record.category) {
            if record.amount > threshold {
                messages.push(Message::CategoryCaution {
                    category: record.category.clone(),
                    amount: record.amount,
                    threshold,
                });
            }
        }
    }

    let score = saving_score(total, budget);
    let recommended_saving = recommended_saving(budget);
    messages.push(Message::SavingScore(score));
    messages.push(Message::RecommendedSaving(recommended_saving));

    tracing::debug!(
        total,
        budget,
        score,
        cautions = messages.len() - 3,
        "generated advice"
    );

    Ok(Advice {
        total,
        score,
        recommended_saving,
        messages,
    })
}

fn budget_adherence(total: u64, budget: u64) -> Message {
    let (total_w, budget_w) = (u128::from(total), u128::from(budget));
    if total > budget {
        Message::OverBudget {
            overage: total - budget,
        }
    } else if total_w * 10 > budget_w * 9 {
        Message::NearLimit
    } else if total_w * 2 < budget_w {
        Message::UnderSpending
    } else {
        Message::OnTrack
    }
}

/// `clamp(0, 100, round((1 - total/budget) * 100))`, ties to even. `budget` must be non-zero.
fn saving_score(total: u64, budget: u64) -> u8 {
    let ratio = Decimal::from(total) / Decimal::from(budget);
    let raw = ((Decimal::ONE - ratio) * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven);
    raw.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
        .to_u8()
        .unwrap_or(0)
}

fn recommended_saving(budget: u64) -> u64 {
    (Decimal::from(budget) * Decimal::new(2, 1))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
        .to_u64()
        .unwrap_or(0)
}
