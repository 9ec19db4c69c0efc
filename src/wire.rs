use serde::Deserialize;

/// One element of the feed's quote array, exactly as sent on the wire.
/// The `time` string is parsed into a calendar value in `decode`.
#[derive(Debug, Deserialize)]
pub struct Quote {
    pub symbol: String,
    pub time: String,
    pub price: PriceField,
}

/// Wire form of a price: feeds emit either a JSON string or a bare number.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PriceField {
    Number(f64),
    Text(String),
}
