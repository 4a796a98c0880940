// File: crates/demo/src/quote.rs
// Summary: Latest-price summary (change in dollars/percent, open/high/low) over a price history.

use std::fmt;

use crate::series::{PriceHistory, SampleOrder};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quote {
    pub last: f64,
    pub change: f64,
    pub change_pct: f64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
}

impl Quote {
    /// Summarize `history`; `None` when it has no samples.
    pub fn from_history(history: &PriceHistory) -> Option<Self> {
        let prices = history.prices(SampleOrder::Chronological);
        let (&last, _) = prices.split_last()?;
        let prev = if prices.len() > 1 { prices[prices.len() - 2] } else { last };
        let change = last - prev;
        let change_pct = if prev != 0.0 { change / prev * 100.0 } else { 0.0 };
        let high = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let low = prices.iter().copied().fold(f64::INFINITY, f64::min);
        Some(Self { last, change, change_pct, open: prices[0], high, low })
    }

    pub fn is_down(&self) -> bool {
        self.change < 0.0
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "${} {}${:.2} ({:.5}%)  Open: {}  High: {}  Low: {}",
            self.last,
            if self.is_down() { "-" } else { "+" },
            self.change.abs(),
            self.change_pct,
            self.open,
            self.high,
            self.low
        )
    }
}
