//! Smoke test against a real price feed. Runs only when `PRICEFEED_BASE_URL`
//! points at a live deployment; otherwise the test skips.

use pricefeed_http::PriceFeedClient;

fn load_live_target() -> Result<(String, String), String> {
    let base_url = std::env::var("PRICEFEED_BASE_URL")
        .map_err(|_| "PRICEFEED_BASE_URL is required for the live test".to_owned())?;
    if base_url.trim().is_empty() {
        return Err("PRICEFEED_BASE_URL is set but empty".to_owned());
    }
    let symbol = std::env::var("PRICEFEED_LIVE_SYMBOL").unwrap_or_else(|_| "AAPL".to_owned());
    Ok((base_url, symbol))
}

#[tokio::test]
async fn live_fetch_decodes_quote_series() {
    let (base_url, symbol) = match load_live_target() {
        Ok(values) => values,
        Err(_) => {
            eprintln!("skipping live test: PRICEFEED_BASE_URL not set");
            return;
        }
    };

    let feed = PriceFeedClient::new(base_url);
    let quotes = feed
        .prices_for(&symbol)
        .await
        .expect("live fetch must succeed");

    for quote in quotes {
        assert!(quote.price.is_finite());
        assert!(!quote.symbol.is_empty());
    }
}
