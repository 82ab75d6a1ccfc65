use anyhow::{Context, Result};

use crate::analysis::{self, Analysis};
use crate::config::ConfigLoad;
use crate::ledger::LedgerStore;
use crate::models::{BudgetConfig, Month};
use crate::report::Report;
use crate::util::{format_amount, parse_amount};

pub(crate) fn as_cli(args: &[String], loaded: &ConfigLoad) -> Result<()> {
    let store = LedgerStore::new(&loaded.config.data_file);
    match args[0].as_str() {
        "add" | "a" => cli_add(&args[1..], loaded, &store, true),
        "advise" => cli_add(&args[1..], loaded, &store, false),
        "report" | "r" => cli_report(loaded, &store),
        "reset" => cli_reset(&store),
        "config" => cli_config(loaded),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("spendtui {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("SpendTUI — monthly spending tracker with budgeting advice");
    println!();
    println!("Usage: spendtui [--verbose] [--config <path>] [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive TUI");
    println!("  add <month> [cat=amount ...]  Save spending for a month and print advice");
    println!("    --budget <amount>           Monthly budget (default from config)");
    println!("  advise <month> [cat=amount]   Print advice without saving");
    println!("  report                        Print monthly totals and averages per category");
    println!("  reset                         Delete all saved spending");
    println!("  config                        Show config and ledger locations");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
}

/// Split `[--budget <amount>] [cat=amount ...]` into the budget override and the amounts.
fn parse_add_args(args: &[String]) -> Result<(Option<u64>, Vec<(String, u64)>)> {
    let mut budget = None;
    let mut amounts = Vec::new();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--budget" {
            let raw = iter
                .next()
                .ok_or_else(|| anyhow::anyhow!("--budget requires a value"))?;
            budget = Some(parse_amount(raw).with_context(|| format!("Invalid budget: {raw}"))?);
            continue;
        }
        let (name, raw) = arg
            .split_once('=')
            .ok_or_else(|| anyhow::anyhow!("Expected <category>=<amount>, got '{arg}'"))?;
        let amount = parse_amount(raw).with_context(|| format!("Invalid amount for {name}"))?;
        amounts.push((name.to_string(), amount));
    }
    Ok((budget, amounts))
}

fn cli_add(args: &[String], loaded: &ConfigLoad, store: &LedgerStore, save: bool) -> Result<()> {
    let config = &loaded.config;
    let verb = if save { "add" } else { "advise" };
    let month_arg = args
        .first()
        .filter(|a| !a.starts_with('-'))
        .ok_or_else(|| anyhow::anyhow!("Usage: spendtui {verb} <month> [cat=amount ...]"))?;
    let month =
        Month::parse(month_arg).ok_or_else(|| anyhow::anyhow!("Unknown month: {month_arg}"))?;

    let (limit, amounts) = parse_add_args(&args[1..])?;
    let limit = limit.unwrap_or(config.budget.default);
    if !(config.budget.min..=config.budget.max).contains(&limit) {
        tracing::warn!(limit, "budget outside configured range");
    }
    let budget = BudgetConfig::new(month, limit)?;

    let current = analysis::build_records(config, month, &amounts)?;
    let result = if save {
        let result = analysis::save_and_analyze(store, config, budget, current)?;
        println!("Saved {month} spending to {}", store.path().display());
        result
    } else {
        let ledger = store.load()?;
        analysis::analyze(config, budget, current, &ledger)?
    };

    print_analysis(&result, &config.currency);
    Ok(())
}

fn cli_report(loaded: &ConfigLoad, store: &LedgerStore) -> Result<()> {
    let ledger = store.load()?;
    if ledger.is_empty() {
        println!("No spending saved yet");
        return Ok(());
    }
    let report = Report::build(&[], &ledger, &loaded.config.category_names())?;
    print_report(&report, &loaded.config.currency);
    Ok(())
}

fn cli_reset(store: &LedgerStore) -> Result<()> {
    store.reset()?;
    println!("Spending data reset ({})", store.path().display());
    Ok(())
}

fn cli_config(loaded: &ConfigLoad) -> Result<()> {
    let config = &loaded.config;
    println!("Config:  {}", loaded.file.display());
    println!("Ledger:  {}", config.data_file.display());
    println!(
        "Budget:  {} .. {} (step {}, default {})",
        format_amount(config.budget.min, &config.currency),
        format_amount(config.budget.max, &config.currency),
        format_amount(config.budget.step, &config.currency),
        format_amount(config.budget.default, &config.currency),
    );
    println!();
    println!("{:<16} Caution above", "Category");
    println!("{}", "─".repeat(34));
    for cat in &config.categories {
        let threshold = cat
            .threshold
            .map(|t| format_amount(t, &config.currency))
            .unwrap_or_else(|| "-".into());
        println!("{:<16} {threshold}", cat.name);
    }
    Ok(())
}

fn print_analysis(result: &Analysis, currency: &str) {
    println!();
    println!(
        "{} budget: {}",
        result.budget.month,
        format_amount(result.budget.limit, currency)
    );
    println!("{}", "─".repeat(40));
    for slice in &result.report.proportions {
        println!(
            "  {:<16} {:>14} {:>6}%",
            slice.category,
            format_amount(slice.amount, currency),
            slice.percent.to_string()
        );
    }
    println!("  {:<16} {:>14}", "Total", format_amount(result.advice.total, currency));

    println!();
    println!("Advice:");
    for msg in &result.advice.messages {
        let marker = if msg.is_warning() { "!" } else { "-" };
        println!("  {marker} {}", msg.text(currency));
    }

    println!();
    print_report(&result.report, currency);
}

fn print_report(report: &Report, currency: &str) {
    print!("{:<16}", "Category");
    for m in &report.months {
        print!(" {:>12}", m.label());
    }
    println!(" {:>12}", "Average");
    println!("{}", "─".repeat(16 + 13 * (report.months.len() + 1)));

    for (row, category) in report.categories.iter().enumerate() {
        print!("{category:<16}");
        for cell in &report.pivot[row] {
            print!(" {:>12}", format_amount(*cell, currency));
        }
        println!(" {:>12}", format!("{:.0}{currency}", report.averages[row]));
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_add_args_budget_and_amounts() {
        let (budget, amounts) =
            parse_add_args(&args(&["food=120,000", "--budget", "400000", "cafe=5000"])).unwrap();
        assert_eq!(budget, Some(400_000));
        assert_eq!(
            amounts,
            vec![("food".to_string(), 120_000), ("cafe".to_string(), 5_000)]
        );
    }

    #[test]
    fn test_add_args_without_budget() {
        let (budget, amounts) = parse_add_args(&args(&["food=1"])).unwrap();
        assert_eq!(budget, None);
        assert_eq!(amounts.len(), 1);
    }

    #[test]
    fn test_add_args_trailing_budget_flag_is_error() {
        let err = parse_add_args(&args(&["food=1", "--budget"])).unwrap_err();
        assert!(err.to_string().contains("--budget requires a value"));
    }

    #[test]
    fn test_add_args_rejects_bare_word() {
        assert!(parse_add_args(&args(&["food"])).is_err());
    }
}
