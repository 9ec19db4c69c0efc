use std::time::Duration;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use tokio::time::sleep;

use crate::{decode::decode_quote, wire, ClientOptions, PriceFeedError, PriceQuote, Result};

/// Characters kept verbatim when a symbol is embedded as a URL path segment.
/// Everything outside the RFC 3986 unreserved set is percent-encoded.
const SYMBOL_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Formats the quote endpoint URL for a stock symbol.
///
/// Example: `("http://localhost:8080", "AAPL")` → `"http://localhost:8080/stocks/AAPL"`
pub fn quotes_url(base_url: &str, symbol: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let symbol = utf8_percent_encode(symbol, SYMBOL_SEGMENT);
    format!("{base}/stocks/{symbol}")
}

#[derive(Clone, Debug)]
/// HTTP client for a stock price-quote feed.
pub struct PriceFeedClient {
    http: reqwest::Client,
    base_url: String,
    options: ClientOptions,
}

impl PriceFeedClient {
    /// Creates a client for the feed at `base_url`, e.g. `http://localhost:8080`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            options: ClientOptions::default(),
        }
    }

    /// Creates a client from the `PRICEFEED_BASE_URL` environment variable.
    ///
    /// Returns an error if the variable is missing or empty.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pricefeed_http::PriceFeedClient;
    ///
    /// let feed = PriceFeedClient::from_env().expect("missing PRICEFEED_BASE_URL");
    /// ```
    pub fn from_env() -> std::result::Result<Self, String> {
        let base_url = std::env::var("PRICEFEED_BASE_URL")
            .map_err(|_| "missing PRICEFEED_BASE_URL environment variable".to_owned())?;
        if base_url.trim().is_empty() {
            return Err("PRICEFEED_BASE_URL is set but empty".to_owned());
        }
        Ok(Self::new(base_url))
    }

    /// Applies client options such as timeout and retry behavior.
    pub fn with_options(mut self, opts: ClientOptions) -> Self {
        self.options = opts;
        self
    }

    /// Fetches the series of price quotes for `symbol`.
    ///
    /// Quotes are returned in the order the server lists them, taken from
    /// exactly one successful attempt. Failed attempts — transport errors,
    /// timeouts, non-2xx statuses, and undecodable bodies alike — are retried
    /// with exponential backoff until the retry budget is spent, after which
    /// the call fails with [`PriceFeedError::RetriesExhausted`]. Nothing from
    /// a failed attempt ever reaches the caller.
    ///
    /// `symbol` must be non-empty; it is percent-escaped into the request
    /// path, so reserved URL characters are safe.
    pub async fn prices_for(&self, symbol: &str) -> Result<Vec<PriceQuote>> {
        if symbol.trim().is_empty() {
            return Err(PriceFeedError::Decode(
                "stock symbol cannot be empty".to_owned(),
            ));
        }

        let url = quotes_url(&self.base_url, symbol);
        self.fetch_quotes_with_retry(&url).await
    }

    async fn fetch_quotes_with_retry(&self, url: &str) -> Result<Vec<PriceQuote>> {
        let mut attempt = 0usize;
        loop {
            let error = match self.fetch_quotes_once(url).await {
                Ok(quotes) => return Ok(quotes),
                Err(error) => error,
            };

            // Every attempt-level failure is retriable; only a spent retry
            // budget is terminal.
            if attempt < self.options.max_retries {
                #[cfg(feature = "tracing")]
                tracing::debug!("quote request attempt {} failed: {}", attempt + 1, error);

                self.wait_before_retry(attempt).await;
                attempt += 1;
                continue;
            }

            return Err(PriceFeedError::RetriesExhausted {
                retries: self.options.max_retries,
                last_error: Box::new(error),
            });
        }
    }

    async fn fetch_quotes_once(&self, url: &str) -> Result<Vec<PriceQuote>> {
        let response = self
            .http
            .get(url)
            .timeout(Duration::from_millis(self.options.timeout_ms))
            .send()
            .await
            .map_err(|err| self.classify_request_error(err))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| self.classify_request_error(err))?;

        if !status.is_success() {
            return Err(PriceFeedError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let quotes = serde_json::from_str::<Vec<wire::Quote>>(&body).map_err(|err| {
            PriceFeedError::Decode(format!("invalid quote array JSON: {err}; body: {body}"))
        })?;
        quotes.into_iter().map(decode_quote).collect()
    }

    fn classify_request_error(&self, err: reqwest::Error) -> PriceFeedError {
        if err.is_timeout() {
            PriceFeedError::Timeout {
                budget_ms: self.options.timeout_ms,
            }
        } else {
            PriceFeedError::Transport(err)
        }
    }

    /// Waits before the next retry attempt: exponential backoff from the
    /// configured base, clamped to the configured cap.
    async fn wait_before_retry(&self, attempt: usize) {
        let delay = retry_delay(&self.options, attempt);

        #[cfg(feature = "tracing")]
        tracing::debug!("retrying quote request after {} ms", delay.as_millis());

        sleep(delay).await;
    }
}

/// Computes the backoff delay that precedes retry number `attempt + 1`.
fn retry_delay(options: &ClientOptions, attempt: usize) -> Duration {
    let exp = attempt.min(16) as u32;
    let multiplier = 1u64 << exp;
    let delay_ms = options
        .backoff_base_ms
        .saturating_mul(multiplier)
        .min(options.backoff_cap_ms);
    Duration::from_millis(delay_ms)
}
