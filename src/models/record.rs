use super::Month;

/// Largest amount accepted for a single record. Keeps ledger-wide sums far from `u64::MAX`.
pub(crate) const MAX_AMOUNT: u64 = 1_000_000_000_000_000;

/// A single (month, category, amount) observation. Identity is positional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SpendingRecord {
    pub(crate) month: Month,
    pub(crate) category: String,
    pub(crate) amount: u64,
}

impl SpendingRecord {
    pub(crate) fn new(month: Month, category: impl Into<String>, amount: u64) -> Self {
        Self {
            month,
            category: category.into(),
            amount,
        }
    }
}
