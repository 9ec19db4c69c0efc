/// Error type returned by this crate.
///
/// Transport, timeout, HTTP-status, and decode failures are all
/// attempt-level: the retry loop consumes them internally. A caller of
/// [`crate::PriceFeedClient::prices_for`] only ever sees `RetriesExhausted`
/// (or `Decode`, for a symbol that violates the input contract before any
/// request is sent).
#[derive(Debug, thiserror::Error)]
pub enum PriceFeedError {
    /// Network or request execution error from `reqwest`.
    #[error("transport error: {0}")]
    Transport(reqwest::Error),
    /// Attempt did not complete within the per-attempt time budget.
    #[error("timed out after {budget_ms} ms")]
    Timeout {
        /// Configured per-attempt budget, request send through full body receipt.
        budget_ms: u64,
    },
    /// Non-success HTTP status code with raw response body.
    #[error("http error {status}: {body}")]
    Http { status: u16, body: String },
    /// Response decoding or quote field parsing error.
    #[error("decode error: {0}")]
    Decode(String),
    /// Terminal failure: the initial attempt and every configured retry failed.
    #[error("Retries exhausted: {retries}/{retries}")]
    RetriesExhausted {
        /// Configured retry budget that was fully consumed.
        retries: usize,
        /// Failure from the final attempt.
        #[source]
        last_error: Box<PriceFeedError>,
    },
}
