use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::advice::Thresholds;
use crate::error::{Error, Result};

const CONFIG_FILE_NAME: &str = "config.toml";
const LEDGER_FILE_NAME: &str = "monthly_spending.csv";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct CategoryConfig {
    pub(crate) name: String,
    /// Single-record amount above which a caution is emitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) threshold: Option<u64>,
}

impl CategoryConfig {
    fn new(name: &str, threshold: u64) -> Self {
        Self {
            name: name.into(),
            threshold: Some(threshold),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct BudgetRange {
    pub(crate) min: u64,
    pub(crate) max: u64,
    pub(crate) step: u64,
    pub(crate) default: u64,
}

impl Default for BudgetRange {
    fn default() -> Self {
        Self {
            min: 100_000,
            max: 1_000_000,
            step: 50_000,
            default: 300_000,
        }
    }
}

impl BudgetRange {
    pub(crate) fn clamp(&self, value: u64) -> u64 {
        value.clamp(self.min, self.max)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub(crate) data_file: PathBuf,
    pub(crate) currency: String,
    pub(crate) amount_step: u64,
    pub(crate) budget: BudgetRange,
    pub(crate) categories: Vec<CategoryConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(LEDGER_FILE_NAME),
            currency: "원".into(),
            amount_step: 1_000,
            budget: BudgetRange::default(),
            categories: vec![
                CategoryConfig::new("food", 200_000),
                CategoryConfig::new("cafe", 70_000),
                CategoryConfig::new("shopping", 100_000),
                CategoryConfig::new("transport", 100_000),
                CategoryConfig::new("leisure", 100_000),
                CategoryConfig::new("other", 150_000),
            ],
        }
    }
}

impl AppConfig {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.categories.is_empty() {
            return Err(Error::Config("at least one category is required".into()));
        }
        let mut seen = HashSet::new();
        for cat in &self.categories {
            if cat.name.trim().is_empty() {
                return Err(Error::Config("category names cannot be empty".into()));
            }
            if !seen.insert(cat.name.to_lowercase()) {
                return Err(Error::Config(format!("duplicate category '{}'", cat.name)));
            }
        }
        let b = &self.budget;
        if b.min == 0 || b.min > b.max || b.step == 0 {
            return Err(Error::Config(format!(
                "budget range must satisfy 0 < min <= max and step > 0 (got {}..{} step {})",
                b.min, b.max, b.step
            )));
        }
        if !(b.min..=b.max).contains(&b.default) {
            return Err(Error::Config(format!(
                "default budget {} is outside {}..{}",
                b.default, b.min, b.max
            )));
        }
        if self.amount_step == 0 {
            return Err(Error::Config("amount_step must be greater than zero".into()));
        }
        Ok(())
    }

    pub(crate) fn category_names(&self) -> Vec<String> {
        self.categories.iter().map(|c| c.name.clone()).collect()
    }

    /// Case-insensitive lookup returning the configured spelling.
    pub(crate) fn find_category(&self, name: &str) -> Option<&str> {
        let lower = name.trim().to_lowercase();
        self.categories
            .iter()
            .find(|c| c.name.to_lowercase() == lower)
            .map(|c| c.name.as_str())
    }

    pub(crate) fn thresholds(&self) -> Thresholds {
        self.categories
            .iter()
            .filter_map(|c| c.threshold.map(|t| (c.name.clone(), t)))
            .collect()
    }

    /// Resolve a relative `data_file` against `base`.
    fn resolve_data_file(&mut self, base: &Path) {
        if self.data_file.is_relative() {
            self.data_file = base.join(&self.data_file);
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct ConfigLoad {
    pub(crate) config: AppConfig,
    pub(crate) file: PathBuf,
    pub(crate) created: bool,
}

/// Load the config at `path`, writing defaults there first if it does not exist.
/// A relative `data_file` is resolved against `data_dir`.
pub(crate) fn load_or_create(path: &Path, data_dir: &Path) -> Result<ConfigLoad> {
    let created = !path.exists();
    let mut config = if created {
        let config = AppConfig::default();
        write_config(path, &config)?;
        tracing::debug!(path = %path.display(), "wrote default config");
        config
    } else {
        let contents = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("read {}: {e}", path.display())))?;
        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("parse {}: {e}", path.display())))?
    };

    config.validate()?;
    config.resolve_data_file(data_dir);
    Ok(ConfigLoad {
        config,
        file: path.to_path_buf(),
        created,
    })
}

fn write_config(path: &Path, config: &AppConfig) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| Error::Config(format!("create {}: {e}", parent.display())))?;
    }
    let contents =
        toml::to_string_pretty(config).map_err(|e| Error::Config(format!("serialize: {e}")))?;
    fs::write(path, contents).map_err(|e| Error::Config(format!("write {}: {e}", path.display())))
}

pub(crate) fn default_config_path(config_dir: &Path) -> PathBuf {
    config_dir.join(CONFIG_FILE_NAME)
}

#[cfg(test)]
mod tests;
