// File: crates/demo/src/holdings.rs
// Summary: Share holdings persistence: merge purchases per (user, ticker) and record the total.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Stored record, keyed by `"{username}-{ticker}"`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub username: String,
    pub ticker: String,
    pub num_shares: u64,
}

pub fn record_key(username: &str, ticker: &str) -> String {
    format!("{username}-{ticker}")
}

pub trait HoldingsStore {
    fn get(&self, username: &str, ticker: &str) -> Result<Option<Holding>>;
    fn put(&mut self, holding: Holding) -> Result<()>;

    /// Add `shares` to whatever is stored for (user, ticker) and persist the total.
    fn record_purchase(&mut self, username: &str, ticker: &str, shares: u64) -> Result<u64> {
        let owned = self.get(username, ticker)?.map(|h| h.num_shares).unwrap_or(0);
        let total = owned.checked_add(shares).ok_or_else(|| {
            anyhow::anyhow!("share count overflow for {}", record_key(username, ticker))
        })?;
        self.put(Holding {
            username: username.to_string(),
            ticker: ticker.to_string(),
            num_shares: total,
        })?;
        info!("{} now holds {} shares of {}", username, total, ticker);
        Ok(total)
    }
}

/// Records held in memory only. Used to preview a purchase without touching disk.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    records: BTreeMap<String, Holding>,
}

impl HoldingsStore for MemoryStore {
    fn get(&self, username: &str, ticker: &str) -> Result<Option<Holding>> {
        Ok(self.records.get(&record_key(username, ticker)).cloned())
    }

    fn put(&mut self, holding: Holding) -> Result<()> {
        self.records.insert(record_key(&holding.username, &holding.ticker), holding);
        Ok(())
    }
}

/// JSON document on disk; rewritten in full on every `put`.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    records: BTreeMap<String, Holding>,
}

impl JsonFileStore {
    /// Open `path`, starting empty if it does not exist yet.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let records = read_json_or_default(&path)?;
        Ok(Self { path, records })
    }

    /// In-memory copy of the current records; writes to it never reach the file.
    pub fn snapshot(&self) -> MemoryStore {
        MemoryStore { records: self.records.clone() }
    }
}

impl HoldingsStore for JsonFileStore {
    fn get(&self, username: &str, ticker: &str) -> Result<Option<Holding>> {
        Ok(self.records.get(&record_key(username, ticker)).cloned())
    }

    fn put(&mut self, holding: Holding) -> Result<()> {
        self.records.insert(record_key(&holding.username, &holding.ticker), holding);
        write_json(&self.path, &self.records)
    }
}

/// Per-ticker share totals kept on this machine, next to the shared records.
/// Not keyed by user: it tracks whatever was last bought here.
#[derive(Debug, Default)]
pub struct LocalShares {
    path: Option<PathBuf>,
    by_ticker: BTreeMap<String, u64>,
}

impl LocalShares {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let by_ticker = read_json_or_default(&path)?;
        Ok(Self { path: Some(path), by_ticker })
    }

    /// Same totals, no longer written back to disk.
    pub fn detached(self) -> Self {
        Self { path: None, ..self }
    }

    pub fn get(&self, ticker: &str) -> Option<u64> {
        self.by_ticker.get(ticker).copied()
    }

    pub fn set(&mut self, ticker: &str, shares: u64) -> Result<()> {
        self.by_ticker.insert(ticker.to_string(), shares);
        match &self.path {
            Some(path) => write_json(path, &self.by_ticker),
            None => Ok(()),
        }
    }
}

/// Merge a purchase into `records` and mirror the new total into `local`.
pub fn buy(
    records: &mut dyn HoldingsStore,
    local: &mut LocalShares,
    username: &str,
    ticker: &str,
    shares: u64,
) -> Result<u64> {
    let total = records.record_purchase(username, ticker, shares)?;
    if let Some(previous) = local.get(ticker) {
        debug!("local {} total {} -> {}", ticker, previous, total);
    }
    local.set(ticker, total)?;
    Ok(total)
}

fn read_json_or_default<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Ok(T::default());
    }
    let text =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Write through a temp file so a failed write leaves the old document intact.
fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, serde_json::to_string_pretty(value)?)
        .with_context(|| format!("writing {}", tmp.display()))?;
    std::fs::rename(&tmp, path).with_context(|| format!("replacing {}", path.display()))?;
    Ok(())
}
