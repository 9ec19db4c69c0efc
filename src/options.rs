/// Configures HTTP timeout and retry behavior.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClientOptions {
    /// Per-attempt timeout in milliseconds, covering request send through
    /// full body receipt.
    pub timeout_ms: u64,
    /// Maximum number of retries after the initial attempt.
    pub max_retries: usize,
    /// Delay before the first retry in milliseconds; doubles on each
    /// subsequent retry.
    pub backoff_base_ms: u64,
    /// Upper bound in milliseconds applied to every retry delay.
    pub backoff_cap_ms: u64,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout_ms: 2_000,
            max_retries: 3,
            backoff_base_ms: 2_000,
            backoff_cap_ms: 5_000,
        }
    }
}
