mod advice;
mod analysis;
mod config;
mod error;
mod ledger;
mod models;
mod report;
mod run;
mod ui;
mod util;

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let verbose = take_flag(&mut args, &["--verbose", "-v"]);
    let config_override = take_option(&mut args, "--config")?;

    let dirs = project_dirs()?;
    let data_dir = dirs.data_dir().to_path_buf();
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;

    let interactive = args.is_empty();
    init_logging(verbose, interactive, &data_dir)?;

    let config_path = config_override
        .map(PathBuf::from)
        .unwrap_or_else(|| config::default_config_path(dirs.config_dir()));
    let loaded = config::load_or_create(&config_path, &data_dir)?;
    if loaded.created {
        tracing::info!(path = %loaded.file.display(), "created default config");
    }

    if interactive {
        run::as_tui(&loaded)
    } else {
        run::as_cli(&args, &loaded)
    }
}

/// `RUST_LOG` wins, then `--verbose`, else warnings only. The TUI logs to a
/// file so output does not land on the alternate screen.
fn init_logging(verbose: bool, interactive: bool, data_dir: &Path) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    if interactive {
        let log_path = data_dir.join("spendtui.log");
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
            .with_context(|| format!("Failed to open log file: {}", log_path.display()))?;
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).compact().with_writer(std::io::stderr))
            .init();
    }
    Ok(())
}

fn project_dirs() -> Result<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "spendtui", "SpendTUI")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
}

fn take_flag(args: &mut Vec<String>, names: &[&str]) -> bool {
    let before = args.len();
    args.retain(|a| !names.contains(&a.as_str()));
    args.len() != before
}

fn take_option(args: &mut Vec<String>, name: &str) -> Result<Option<String>> {
    let Some(pos) = args.iter().position(|a| a == name) else {
        return Ok(None);
    };
    if pos + 1 >= args.len() {
        anyhow::bail!("{name} requires a value");
    }
    let value = args.remove(pos + 1);
    args.remove(pos);
    Ok(Some(value))
}
