use anyhow::{Context, Result};
use chrono::Utc;
use opinet_price_scraper::{fetch_prices, run, Config};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    println!("Fetching prices from {}...", config.endpoint);

    let xml = fetch_prices(&config).context("Failed to fetch price data")?;
    let outcome =
        run(&xml, Utc::now(), &config.output_dir).context("Failed to save price data")?;

    println!("{}", outcome);

    Ok(())
}
