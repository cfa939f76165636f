//! Scans open markets for quotes wider than three ticks.
//!
//! Pages through `GET /markets` with a fixed page size and a bounded number of
//! pages, then logs the first few matches with their prices and dates.
//!
//! ```sh
//! RUST_LOG=info cargo run --example wide_spread_markets --features tracing
//! ```

use polymarket_gamma_client::Client;
use polymarket_gamma_client::types::request::MarketsRequest;
use polymarket_gamma_client::types::response::Market;
use polymarket_gamma_client::types::{Decimal, dec};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const PAGE_SIZE: i32 = 100;
const MAX_PAGES: i32 = 10;
const TARGET_COUNT: usize = 3;
const MIN_RATIO: Decimal = dec!(3);

/// Markets reporting a spread of about 1.0 are usually closed ones with a stale
/// book that the API still lists as open.
fn is_stale_spread(spread: Decimal) -> bool {
    (dec!(0.99)..=dec!(1.01)).contains(&spread)
}

fn wide_spread_ratio(market: &Market) -> Option<Decimal> {
    let spread = market.spread.filter(|s| s.is_sign_positive() && !s.is_zero())?;
    if is_stale_spread(spread) {
        return None;
    }

    market.spread_ratio().filter(|ratio| *ratio > MIN_RATIO)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let client = Client::default();
    let mut found: Vec<(Market, Decimal)> = Vec::new();

    for page in 0..MAX_PAGES {
        let request = MarketsRequest::builder()
            .limit(PAGE_SIZE)
            .offset(page * PAGE_SIZE)
            .closed(false)
            .build();

        let markets = client.markets(&request).await?;
        if markets.is_empty() {
            info!(page, "no more markets");
            break;
        }

        info!(page, count = markets.len(), "fetched markets");

        for market in markets {
            if let Some(ratio) = wide_spread_ratio(&market) {
                info!(id = %market.id, question = ?market.question, %ratio, "wide spread");
                found.push((market, ratio));
                if found.len() >= TARGET_COUNT {
                    break;
                }
            }
        }

        if found.len() >= TARGET_COUNT {
            break;
        }
    }

    if found.is_empty() {
        warn!("no wide spread markets found");
        return Ok(());
    }

    for (market, ratio) in &found {
        let outcomes = market.priced_outcomes().unwrap_or_default();

        info!(
            id = %market.id,
            slug = ?market.slug,
            %ratio,
            spread = ?market.spread,
            tick_size = ?market.order_price_min_tick_size,
            best_bid = ?market.best_bid,
            best_ask = ?market.best_ask,
            last_trade_price = ?market.last_trade_price,
            liquidity = ?market.liquidity_num,
            volume = ?market.volume_num,
            start_date = %market.start_date,
            end_date = %market.end_date,
            outcomes = ?outcomes,
            "market summary"
        );
    }

    Ok(())
}
