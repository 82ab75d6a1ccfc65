use std::fs;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{Error, Result};
use crate::models::{Month, SpendingRecord, MAX_AMOUNT};

const COLUMNS: [&str; 3] = ["month", "category", "amount"];

/// Flat-file ledger of spending records. Append-only apart from [`LedgerStore::reset`].
#[derive(Debug, Clone)]
pub(crate) struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Read every persisted record in file order. A missing file is an empty ledger.
    pub(crate) fn load(&self) -> Result<Vec<SpendingRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_path(&self.path)
            .map_err(|e| self.read_error(e))?;

        let mut rows = rdr.records();
        let header = match rows.next() {
            None => return Ok(Vec::new()),
            Some(row) => row.map_err(|e| self.read_error(e))?,
        };
        let columns: Vec<&str> = header.iter().map(str::trim).collect();
        if columns != COLUMNS {
            return Err(self.read_error(format!(
                "expected columns {}, found {}",
                COLUMNS.join(","),
                columns.join(",")
            )));
        }

        let mut records = Vec::new();
        for (i, row) in rows.enumerate() {
            let row = row.map_err(|e| self.read_error(e))?;
            let line = i + 2;
            let record = parse_row(&row)
                .map_err(|reason| self.read_error(format!("line {line}: {reason}")))?;
            records.push(record);
        }

        tracing::debug!(path = %self.path.display(), count = records.len(), "loaded ledger");
        Ok(records)
    }

    /// Persist `new_records` after the existing ledger and return the combined ledger.
    /// The backing file is replaced as a whole.
    pub(crate) fn append(&self, new_records: &[SpendingRecord]) -> Result<Vec<SpendingRecord>> {
        let mut all = self.load()?;
        all.extend_from_slice(new_records);
        self.write_all(&all)?;
        tracing::debug!(
            path = %self.path.display(),
            appended = new_records.len(),
            total = all.len(),
            "appended to ledger"
        );
        Ok(all)
    }

    /// Delete all persisted records. Nothing to delete is not an error.
    pub(crate) fn reset(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), "ledger reset");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.write_error(e)),
        }
    }

    fn write_all(&self, records: &[SpendingRecord]) -> Result<()> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).map_err(|e| self.write_error(e))?;

        // Written beside the target so the rename stays on one filesystem.
        let mut tmp = NamedTempFile::new_in(&dir).map_err(|e| self.write_error(e))?;
        {
            let mut wtr = csv::Writer::from_writer(tmp.as_file_mut());
            wtr.write_record(COLUMNS).map_err(|e| self.write_error(e))?;
            for r in records {
                let amount = r.amount.to_string();
                wtr.write_record([r.month.label(), r.category.as_str(), amount.as_str()])
                    .map_err(|e| self.write_error(e))?;
            }
            wtr.flush().map_err(|e| self.write_error(e))?;
        }
        tmp.as_file_mut()
            .sync_all()
            .map_err(|e| self.write_error(e))?;
        tmp.persist(&self.path)
            .map_err(|e| self.write_error(e.error))?;
        Ok(())
    }

    fn read_error(&self, reason: impl ToString) -> Error {
        Error::StorageRead {
            path: self.path.clone(),
            reason: reason.to_string(),
        }
    }

    fn write_error(&self, reason: impl ToString) -> Error {
        Error::StorageWrite {
            path: self.path.clone(),
            reason: reason.to_string(),
        }
    }
}

fn parse_row(row: &csv::StringRecord) -> std::result::Result<SpendingRecord, String> {
    if row.len() != COLUMNS.len() {
        return Err(format!("expected {} fields, found {}", COLUMNS.len(), row.len()));
    }
    let month_raw = row.get(0).unwrap_or("").trim();
    let month = Month::parse(month_raw).ok_or_else(|| format!("unknown month '{month_raw}'"))?;

    let category = row.get(1).unwrap_or("").trim();
    if category.is_empty() {
        return Err("empty category".into());
    }

    let amount_raw = row.get(2).unwrap_or("").trim();
    let amount = amount_raw
        .parse::<u64>()
        .map_err(|_| format!("amount '{amount_raw}' is not a non-negative integer"))?;
    if amount > MAX_AMOUNT {
        return Err(format!("amount {amount} exceeds the {MAX_AMOUNT} limit"));
    }

    Ok(SpendingRecord::new(month, category, amount))
}

#[cfg(test)]
#[path = "ledger_tests.rs"]
mod tests;
