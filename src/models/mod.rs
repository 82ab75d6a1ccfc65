mod budget;
mod month;
mod record;

pub(crate) use budget::BudgetConfig;
pub(crate) use month::Month;
pub(crate) use record::{SpendingRecord, MAX_AMOUNT};

#[cfg(test)]
mod tests;
