use crate::error::{Error, Result};

use super::Month;

/// Budget for one analysis run. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BudgetConfig {
    pub(crate) month: Month,
    pub(crate) limit: u64,
}

impl BudgetConfig {
    pub(crate) fn new(month: Month, limit: u64) -> Result<Self> {
        if limit == 0 {
            return Err(Error::Validation("budget must be greater than zero".into()));
        }
        Ok(Self { month, limit })
    }
}
