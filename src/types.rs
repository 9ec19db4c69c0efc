use chrono::NaiveDateTime;

/// One decoded price observation from the feed's JSON array.
#[derive(Clone, Debug, PartialEq)]
pub struct PriceQuote {
    /// Ticker symbol as echoed by the server.
    pub symbol: String,
    /// Quoted price; always a finite float.
    pub price: f64,
    /// Quote timestamp, a local date-time with no offset.
    pub time: NaiveDateTime,
}
