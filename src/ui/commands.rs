use std::collections::HashMap;
use std::sync::LazyLock;

use super::app::{App, InputMode, PendingAction};
use crate::models::Month;
use crate::util::parse_amount;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit SpendTUI", cmd_quit, r);
    register_command!("quit", "Quit SpendTUI", cmd_quit, r);
    register_command!("w", "Save and analyse", cmd_save, r);
    register_command!("save", "Save and analyse", cmd_save, r);
    register_command!("reset", "Delete all saved spending", cmd_reset, r);
    register_command!("reload", "Reload charts from the ledger", cmd_reload, r);
    register_command!("m", "Set month (e.g. :m 3)", cmd_month, r);
    register_command!("month", "Set month (e.g. :month Mar)", cmd_month, r);
    register_command!("b", "Set budget (e.g. :b 400000)", cmd_budget, r);
    register_command!("budget", "Set budget (e.g. :budget 400000)", cmd_budget, r);
    register_command!(
        "set",
        "Set a category amount (e.g. :set cafe 45000)",
        cmd_set,
        r
    );
    register_command!("clear", "Zero every category amount", cmd_clear, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!("help", "Show available commands", cmd_help, r);

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App) -> anyhow::Result<()> {
    let input = input.trim();
    let (name, args) = input.split_once(' ').unwrap_or((input, ""));
    if name.is_empty() {
        return Ok(());
    }
    match COMMANDS.get(name) {
        Some(cmd) => (cmd.run)(args.trim(), app),
        None => {
            app.set_status(format!("Unknown command: {name}"));
            Ok(())
        }
    }
}

fn cmd_quit(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_save(_args: &str, app: &mut App) -> anyhow::Result<()> {
    if let Err(e) = app.save_and_analyze() {
        app.set_status(format!("Error: {e}"));
    }
    Ok(())
}

fn cmd_reset(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.confirm_message = "Delete all saved spending?".into();
    app.pending_action = Some(PendingAction::ResetLedger);
    app.input_mode = InputMode::Confirm;
    Ok(())
}

fn cmd_reload(_args: &str, app: &mut App) -> anyhow::Result<()> {
    match app.refresh_history() {
        Ok(()) => app.set_status(format!("Loaded {} records", app.ledger_len)),
        Err(e) => app.set_status(format!("Error: {e}")),
    }
    Ok(())
}

fn cmd_month(args: &str, app: &mut App) -> anyhow::Result<()> {
    match Month::parse(args) {
        Some(m) => {
            app.month = m;
            app.set_status(format!("Month: {m}"));
        }
        None => app.set_status(format!("Unknown month: {args}")),
    }
    Ok(())
}

fn cmd_budget(args: &str, app: &mut App) -> anyhow::Result<()> {
    match parse_amount(args) {
        Ok(value) => app.set_budget(value),
        Err(e) => app.set_status(format!("{e}")),
    }
    Ok(())
}

fn cmd_set(args: &str, app: &mut App) -> anyhow::Result<()> {
    let Some((category, raw)) = args.rsplit_once(' ') else {
        app.set_status("Usage: :set <category> <amount>");
        return Ok(());
    };
    let value = match parse_amount(raw) {
        Ok(v) => v,
        Err(e) => {
            app.set_status(format!("{e}"));
            return Ok(());
        }
    };
    if !app.set_amount(category.trim(), value) {
        app.set_status(format!(
            "Unknown category '{}' (expected one of: {})",
            category.trim(),
            app.config.category_names().join(", ")
        ));
    }
    Ok(())
}

fn cmd_clear(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.amounts.iter_mut().for_each(|a| *a = 0);
    app.set_status("Amounts cleared");
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
