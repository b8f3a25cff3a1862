use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tokenfolio::config::{default_config_path, ResolvedConfig};
use tokenfolio::format::format_usd_display;
use tokenfolio::holdings::load_holdings;
use tokenfolio::market_data::{FilePriceSource, HttpPriceSource, PriceFeed, PriceSource};
use tokenfolio::models::{PriceSnapshot, RankedHolding};
use tokenfolio::valuation::{total_usd_value, ValuationEngine};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "tokenfolio")]
#[command(about = "Token prices, wallet ranking and swap quotes")]
struct Cli {
    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Read prices from a saved JSON snapshot instead of the price endpoint
    #[arg(long)]
    prices_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch and print the current price snapshot
    Prices,
    /// List the swap token catalogue with current prices
    Tokens,
    /// Rank wallet holdings by chain priority and value them in USD
    Rank {
        /// Holdings file (.json or .toml); defaults to `holdings_file` from config
        holdings: Option<PathBuf>,
    },
    /// Quote a swap between two tokens
    Quote {
        from: String,
        to: String,
        /// Amount of the `from` token
        amount: String,
    },
    /// Show current configuration
    Config,
}

#[derive(Serialize)]
struct TokenOutput<'a> {
    symbol: &'a str,
    name: &'a str,
    price: Option<f64>,
}

#[derive(Serialize)]
struct RankOutput {
    rows: Vec<RankedHolding>,
    total_usd_value: String,
}

fn price_source(cli: &Cli, config: &ResolvedConfig) -> Result<Arc<dyn PriceSource>> {
    if let Some(path) = &cli.prices_file {
        return Ok(Arc::new(FilePriceSource::new(path.clone())));
    }
    let source = HttpPriceSource::with_timeout(config.price_url.clone(), config.fetch_timeout)?;
    Ok(Arc::new(source))
}

async fn fetch_prices(cli: &Cli, config: &ResolvedConfig) -> Result<Arc<PriceSnapshot>> {
    let feed = PriceFeed::new(price_source(cli, config)?);
    feed.refresh()
        .await
        .context("Failed to fetch token prices. Please try again later.")
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true)
                .json(),
        )
        .init();

    let cli = Cli::parse();
    let config_path = cli.config.clone().unwrap_or_else(default_config_path);
    let config = ResolvedConfig::load_or_default(&config_path)
        .with_context(|| format!("Failed to load config: {}", config_path.display()))?;
    let engine = ValuationEngine::new(config.priority.clone());

    match &cli.command {
        Command::Prices => {
            let prices = fetch_prices(&cli, &config).await?;
            print_json(&prices.sorted())?;
        }
        Command::Tokens => {
            let prices = fetch_prices(&cli, &config).await?;
            let tokens: Vec<_> = config
                .tokens
                .iter()
                .map(|token| TokenOutput {
                    symbol: &token.symbol,
                    name: &token.name,
                    price: prices.get(&token.symbol),
                })
                .collect();
            print_json(&tokens)?;
        }
        Command::Rank { holdings } => {
            let path = holdings
                .clone()
                .or_else(|| config.holdings_file.clone())
                .context("No holdings file given and none configured")?;
            let holdings = load_holdings(&path)?;
            let prices = fetch_prices(&cli, &config).await?;

            let rows = engine.rank(&holdings, &prices);
            let total = total_usd_value(&rows);
            print_json(&RankOutput {
                rows,
                total_usd_value: format_usd_display(
                    total,
                    config.display.currency_grouping,
                    config.display.currency_symbol.as_deref(),
                ),
            })?;
        }
        Command::Quote { from, to, amount } => {
            let prices = fetch_prices(&cli, &config).await?;
            let quote = engine
                .quote_from_input(from, to, amount, &prices)
                .context("Please fill in all fields correctly.")?;
            print_json(&quote)?;
        }
        Command::Config => {
            println!("Config file: {}", config_path.display());
            println!("Fetch timeout: {:?}", config.fetch_timeout);
            print_json(&config)?;
        }
    }

    Ok(())
}
