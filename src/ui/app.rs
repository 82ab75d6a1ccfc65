use crate::advice::Advice;
use crate::analysis;
use crate::config::AppConfig;
use crate::error::Result;
use crate::ledger::LedgerStore;
use crate::models::{BudgetConfig, Month, SpendingRecord, MAX_AMOUNT};
use crate::report::Report;
use crate::util::format_amount;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Editing,
    Confirm,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Editing => write!(f, "EDIT"),
            Self::Confirm => write!(f, "CONFIRM"),
        }
    }
}

/// Pending action that requires user confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PendingAction {
    ResetLedger,
}

/// A row of the input form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    Month,
    Budget,
    Amount(usize),
}

impl Field {
    /// Prompt shown in the command bar while typing a value for this field.
    pub(crate) fn prompt(self) -> &'static str {
        match self {
            Self::Month => "month (1-12)> ",
            Self::Budget => "budget> ",
            Self::Amount(_) => "amount> ",
        }
    }
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) edit_buffer: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,

    pub(crate) config: AppConfig,
    pub(crate) store: LedgerStore,

    // Form
    pub(crate) month: Month,
    pub(crate) budget: u64,
    pub(crate) amounts: Vec<u64>,
    pub(crate) field_index: usize,

    // Results
    pub(crate) ledger_len: usize,
    pub(crate) report: Report,
    pub(crate) advice: Option<Advice>,

    // Confirmation
    pub(crate) pending_action: Option<PendingAction>,
    pub(crate) confirm_message: String,
}

impl App {
    pub(crate) fn new(config: AppConfig, store: LedgerStore) -> Self {
        let amounts = vec![0; config.categories.len()];
        let budget = config.budget.default;
        Self {
            running: true,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            edit_buffer: String::new(),
            status_message: String::new(),
            show_help: false,

            config,
            store,

            month: Month::current(),
            budget,
            amounts,
            field_index: 0,

            ledger_len: 0,
            report: Report::default(),
            advice: None,

            pending_action: None,
            confirm_message: String::new(),
        }
    }

    /// Reload the history charts from the ledger. Advice is cleared.
    pub(crate) fn refresh_history(&mut self) -> Result<()> {
        let ledger = self.store.load()?;
        self.ledger_len = ledger.len();
        self.report = Report::build(&[], &ledger, &self.config.category_names())?;
        self.advice = None;
        Ok(())
    }

    pub(crate) fn field_count(&self) -> usize {
        2 + self.amounts.len()
    }

    pub(crate) fn field(&self) -> Field {
        match self.field_index {
            0 => Field::Month,
            1 => Field::Budget,
            n => Field::Amount(n - 2),
        }
    }

    pub(crate) fn move_field(&mut self, delta: isize) {
        let count = self.field_count() as isize;
        self.field_index = (self.field_index as isize + delta).rem_euclid(count) as usize;
    }

    /// Step the selected field by `delta` notches: one month, one budget step, or one amount step.
    pub(crate) fn adjust_field(&mut self, delta: i64) {
        match self.field() {
            Field::Month => {
                self.month = if delta > 0 {
                    self.month.next()
                } else {
                    self.month.prev()
                };
            }
            Field::Budget => {
                let range = self.config.budget;
                self.budget = range.clamp(step_by(self.budget, range.step, delta));
            }
            Field::Amount(i) => {
                let step = self.config.amount_step;
                if let Some(amount) = self.amounts.get_mut(i) {
                    *amount = step_by(*amount, step, delta);
                }
            }
        }
    }

    /// Store a typed value into the selected field. Budgets are clamped to the configured range.
    pub(crate) fn set_field_value(&mut self, value: u64) {
        match self.field() {
            Field::Month => match u32::try_from(value).ok().and_then(Month::from_number) {
                Some(m) => self.month = m,
                None => self.set_status("Month must be 1-12"),
            },
            Field::Budget => self.set_budget(value),
            Field::Amount(_) if value > MAX_AMOUNT => self.set_status("Amount too large"),
            Field::Amount(i) => {
                if let Some(amount) = self.amounts.get_mut(i) {
                    *amount = value;
                }
            }
        }
    }

    /// Clamp `value` into the configured budget range, saying so when it moved.
    pub(crate) fn set_budget(&mut self, value: u64) {
        let range = self.config.budget;
        self.budget = range.clamp(value);
        if self.budget != value {
            let currency = &self.config.currency;
            self.status_message = format!(
                "Budget clamped to {}..{}",
                format_amount(range.min, currency),
                format_amount(range.max, currency)
            );
        }
    }

    pub(crate) fn set_amount(&mut self, category: &str, value: u64) -> bool {
        let Some(name) = self.config.find_category(category) else {
            return false;
        };
        let idx = self.config.categories.iter().position(|c| c.name == name);
        match idx.and_then(|i| self.amounts.get_mut(i)) {
            Some(amount) => {
                *amount = value;
                true
            }
            None => false,
        }
    }

    pub(crate) fn current_records(&self) -> Vec<SpendingRecord> {
        self.config
            .categories
            .iter()
            .zip(&self.amounts)
            .map(|(c, a)| SpendingRecord::new(self.month, c.name.clone(), *a))
            .collect()
    }

    pub(crate) fn save_and_analyze(&mut self) -> Result<()> {
        let budget = BudgetConfig::new(self.month, self.budget)?;
        let result =
            analysis::save_and_analyze(&self.store, &self.config, budget, self.current_records())?;
        self.ledger_len = result.ledger_len;
        self.report = result.report;
        self.advice = Some(result.advice);
        self.set_status(format!("{} data saved", self.month));
        Ok(())
    }

    pub(crate) fn reset_ledger(&mut self) -> Result<()> {
        self.store.reset()?;
        self.refresh_history()?;
        self.set_status("Data has been reset");
        Ok(())
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}

fn step_by(value: u64, step: u64, delta: i64) -> u64 {
    let change = step.saturating_mul(delta.unsigned_abs());
    if delta >= 0 {
        value.saturating_add(change)
    } else {
        value.saturating_sub(change)
    }
}
