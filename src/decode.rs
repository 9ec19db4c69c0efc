use chrono::NaiveDateTime;

use crate::{wire, PriceFeedError, PriceQuote};

/// Accepted `time` layouts: ISO local date-time with seconds and an optional
/// fractional part, or truncated to whole minutes.
const TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

pub(crate) fn decode_quote(quote: wire::Quote) -> Result<PriceQuote, PriceFeedError> {
    let price = decode_price(quote.price)?;
    let time = decode_time(&quote.time)?;

    Ok(PriceQuote {
        symbol: quote.symbol,
        price,
        time,
    })
}

fn decode_price(price: wire::PriceField) -> Result<f64, PriceFeedError> {
    let value = match price {
        wire::PriceField::Number(value) => value,
        wire::PriceField::Text(text) => text.trim().parse::<f64>().map_err(|err| {
            PriceFeedError::Decode(format!("invalid price value '{text}': {err}"))
        })?,
    };

    if value.is_finite() {
        Ok(value)
    } else {
        Err(PriceFeedError::Decode(format!(
            "non-finite price value '{value}' is unsupported"
        )))
    }
}

fn decode_time(text: &str) -> Result<NaiveDateTime, PriceFeedError> {
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .ok_or_else(|| PriceFeedError::Decode(format!("invalid local date-time value '{text}'")))
}
