use thiserror::Error;

/// Unified error type for the entire crypto-watcher-core library.
/// Every fallible operation returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── API / Network ───────────────────────────────────────────────
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // ── Business Logic ──────────────────────────────────────────────
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unsupported quote currency: {0}")]
    UnsupportedCurrency(String),
}

impl CoreError {
    /// The text shown to the user, without the variant prefix.
    ///
    /// A structured API `detail` message is used verbatim, transport and
    /// decoding failures fall back to their underlying message, and the
    /// remaining variants to their full Display form.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            CoreError::Api { message, .. } => message.clone(),
            CoreError::Network(msg) | CoreError::Deserialization(msg) => msg.clone(),
            CoreError::Validation(msg) => msg.clone(),
            CoreError::UnsupportedCurrency(_) => self.to_string(),
        }
    }
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // Sanitize error message: strip query parameters from URLs.
        // reqwest errors often contain full request URLs.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        CoreError::Network(sanitized)
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}
