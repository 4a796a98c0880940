// File: crates/demo/src/main.rs
// Summary: Stock details host: plots a ticker's price history to PNG and records share purchases.

mod holdings;
mod quote;
mod series;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use ticker_chart_core::{theme, types, ChartConfig, ChartView, RenderOptions, Size, TextShaper};

use crate::holdings::{JsonFileStore, LocalShares};
use crate::quote::Quote;
use crate::series::{PriceHistory, SampleOrder};

#[derive(Parser)]
#[command(name = "ticker-chart", about = "Plot a stock's price history and track share purchases")]
struct Cli {
    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Render a price history CSV as a line chart PNG.
    Plot {
        /// CSV with a date column and a close/price column.
        #[arg(long)]
        prices: PathBuf,
        /// Ticker symbol; defaults to the file stem.
        #[arg(long)]
        ticker: Option<String>,
        /// JSON chart configuration (style, tick spacing, baseline, bounds),
        /// e.g. data/chart_config.json.
        #[arg(long)]
        config: Option<PathBuf>,
        /// Named style preset, applied over the config's style.
        #[arg(long)]
        theme: Option<String>,
        #[arg(long, default_value_t = types::WIDTH)]
        width: f64,
        #[arg(long, default_value_t = types::HEIGHT)]
        height: f64,
        #[arg(long, value_enum, default_value_t = SampleOrder::NewestFirst)]
        order: SampleOrder,
        /// Also render after resizing to WIDTHxHEIGHT, keeping the axis range.
        #[arg(long, value_parser = parse_size)]
        resize: Option<Size>,
        #[arg(long)]
        no_labels: bool,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Add shares to a user's holding and print the new total.
    Buy {
        /// Shared records keyed by user and ticker.
        #[arg(long, default_value = "target/out/holdings.json")]
        store: PathBuf,
        /// Per-ticker totals for purchases made on this machine.
        #[arg(long, default_value = "target/out/user_stocks.json")]
        local: PathBuf,
        #[arg(long)]
        user: String,
        #[arg(long)]
        ticker: String,
        #[arg(long)]
        shares: u64,
        /// Print the resulting total without writing either file.
        #[arg(long)]
        dry_run: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(cli.log_level.to_level_filter())
        .format_module_path(false)
        .init();

    match cli.command {
        Commands::Plot {
            prices,
            ticker,
            config,
            theme: theme_name,
            width,
            height,
            order,
            resize,
            no_labels,
            out,
        } => {
            let ticker = ticker.unwrap_or_else(|| {
                prices.file_stem().and_then(|s| s.to_str()).unwrap_or("chart").to_uppercase()
            });
            let mut config = match config {
                Some(path) => load_config(&path)?,
                None => ChartConfig::default(),
            };
            if let Some(name) = theme_name {
                config.style = theme::find(&name).ok_or_else(|| {
                    let known =
                        theme::presets().iter().map(|(n, _)| *n).collect::<Vec<_>>().join(", ");
                    anyhow::anyhow!("unknown theme '{}' (known: {})", name, known)
                })?;
            }
            let out = out.unwrap_or_else(|| out_name(&ticker));
            plot(&prices, &ticker, config, Size::new(width, height), order, resize, no_labels, &out)
        }
        Commands::Buy { store, local, user, ticker, shares, dry_run } => {
            let mut records = JsonFileStore::open(&store)?;
            let local = LocalShares::open(&local)?;
            if dry_run {
                let (mut preview, mut local) = (records.snapshot(), local.detached());
                let total = holdings::buy(&mut preview, &mut local, &user, &ticker, shares)?;
                println!("{} would own {} shares of {}", user, total, ticker);
            } else {
                let mut local = local;
                let total = holdings::buy(&mut records, &mut local, &user, &ticker, shares)?;
                println!("{} owns {} shares of {}", user, total, ticker);
            }
            Ok(())
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn plot(
    prices: &Path,
    ticker: &str,
    config: ChartConfig,
    size: Size,
    order: SampleOrder,
    resize: Option<Size>,
    no_labels: bool,
    out: &Path,
) -> Result<()> {
    let history = PriceHistory::from_csv(prices, ticker)?;
    info!("Loaded {} prices for {}", history.len(), history.ticker);
    if history.is_empty() {
        anyhow::bail!("no prices loaded from {} -- check headers", prices.display());
    }
    if let Some(q) = Quote::from_history(&history) {
        println!("{}: {}", history.ticker, q);
    }

    let mut view = ChartView::with_metrics(config, size, TextShaper::new())?;
    view.plot(&history.points(order)).with_context(|| format!("plotting {}", history.ticker))?;

    let opts = RenderOptions { draw_labels: !no_labels, ..RenderOptions::default() };
    view.render_to_png(&opts, out)?;
    println!("Wrote {}", out.display());

    if let Some(new_size) = resize {
        view.resize(new_size)?;
        let stem = out.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
        let name = format!("{}_{}x{}.png", stem, new_size.width, new_size.height);
        let resized = out.with_file_name(name);
        view.render_to_png(&opts, &resized)?;
        println!("Wrote {}", resized.display());
    }
    Ok(())
}

fn load_config(path: &Path) -> Result<ChartConfig> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let config: ChartConfig =
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

fn parse_size(s: &str) -> Result<Size, String> {
    let (w, h) =
        s.split_once(['x', 'X']).ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let w = w.trim().parse::<f64>().map_err(|e| format!("width: {e}"))?;
    let h = h.trim().parse::<f64>().map_err(|e| format!("height: {e}"))?;
    if !(w > 0.0 && h > 0.0) {
        return Err(format!("size must be positive, got {w}x{h}"));
    }
    Ok(Size::new(w, h))
}

/// Output file like target/out/chart_<ticker>.png
fn out_name(ticker: &str) -> PathBuf {
    let mut out = PathBuf::from("target/out");
    out.push(format!("chart_{}.png", ticker));
    out
}
