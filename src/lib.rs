//! `pricefeed-http` is an async HTTP client for stock price-quote feeds.
//!
//! The crate wraps a `GET /stocks/<symbol>` endpoint with one ergonomic
//! method, [`PriceFeedClient::prices_for`], which returns the decoded quote
//! series for a symbol. Every call applies a per-attempt timeout and a capped
//! exponential-backoff retry policy; the caller observes either the quotes of
//! exactly one successful attempt or a single terminal error once the retry
//! budget is spent.
//!
//! ```no_run
//! use pricefeed_http::PriceFeedClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let feed = PriceFeedClient::new("http://localhost:8080");
//!     for quote in feed.prices_for("AAPL").await? {
//!         println!("{} {} @ {}", quote.symbol, quote.price, quote.time);
//!     }
//!     Ok(())
//! }
//! ```

mod client;
mod decode;
mod error;
mod options;
mod types;
mod wire;

pub use client::PriceFeedClient;
pub use error::PriceFeedError;
pub use options::ClientOptions;
pub use types::PriceQuote;

pub type Result<T> = std::result::Result<T, PriceFeedError>;
