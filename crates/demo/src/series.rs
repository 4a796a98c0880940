// File: crates/demo/src/series.rs
// Summary: Date-keyed price history loaded from CSV and flattened into chart points.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use clap::ValueEnum;
use log::{debug, warn};
use ticker_chart_core::Point;

/// Order in which samples are laid out along x (index 0 first).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum SampleOrder {
    /// Most recent price at x = 0, as the stock details screen shows it.
    #[default]
    NewestFirst,
    Chronological,
}

#[derive(Clone, Debug, Default)]
pub struct PriceHistory {
    pub ticker: String,
    prices: BTreeMap<NaiveDate, f64>,
}

impl PriceHistory {
    pub fn new(ticker: impl Into<String>) -> Self {
        Self { ticker: ticker.into(), prices: BTreeMap::new() }
    }

    /// Later inserts for the same date replace earlier ones.
    pub fn insert(&mut self, date: NaiveDate, price: f64) {
        self.prices.insert(date, price);
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    pub fn prices(&self, order: SampleOrder) -> Vec<f64> {
        match order {
            SampleOrder::Chronological => self.prices.values().copied().collect(),
            SampleOrder::NewestFirst => self.prices.values().rev().copied().collect(),
        }
    }

    /// One point per sample: x is the position in `order`, y the price.
    pub fn points(&self, order: SampleOrder) -> Vec<Point> {
        self.prices(order)
            .into_iter()
            .enumerate()
            .map(|(i, p)| Point::new(i as f64, p))
            .collect()
    }

    pub fn from_csv(path: &Path, ticker: impl Into<String>) -> Result<Self> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("opening {}", path.display()))?;
        Self::from_reader(file, ticker).with_context(|| format!("reading {}", path.display()))
    }

    /// Parse a CSV with a date column and a price column (close preferred).
    pub fn from_reader<R: Read>(reader: R, ticker: impl Into<String>) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
        debug!("price csv headers: {:?}", headers);
        let idx = |names: &[&str]| -> Option<usize> {
            names.iter().find_map(|want| headers.iter().position(|h| h == want))
        };
        let i_date = idx(&["date", "day", "datetime", "timestamp", "time"])
            .ok_or_else(|| anyhow::anyhow!("no date column in {:?}", headers))?;
        let i_price = idx(&["close", "adj_close", "adj close", "price", "sma"])
            .ok_or_else(|| anyhow::anyhow!("no price column in {:?}", headers))?;

        let mut history = Self::new(ticker);
        for (row, rec) in rdr.records().enumerate() {
            let rec = rec?;
            let date = rec.get(i_date).and_then(parse_date);
            let price = rec
                .get(i_price)
                .and_then(|s| s.parse::<f64>().ok())
                .filter(|p| p.is_finite());
            match (date, price) {
                (Some(d), Some(p)) => history.insert(d, p),
                _ => warn!("skipping row {}: {:?}", row + 1, rec),
            }
        }
        Ok(history)
    }
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.date());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    let n = s.parse::<i64>().ok()?;
    // epoch ms -> sec
    let secs = if n > 10_i64.pow(12) { n / 1000 } else { n };
    DateTime::from_timestamp(secs, 0).map(|dt| dt.date_naive())
}
