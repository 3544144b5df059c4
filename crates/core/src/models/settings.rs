use serde::{Deserialize, Serialize};

/// Client configuration: where the backend lives and which quote
/// currencies it accepts.
///
/// The supported set is configuration, not an algorithmic constant —
/// adding a currency here is all it takes to extend the UI selector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Base URL of the dashboard backend, without a trailing slash.
    pub api_base_url: String,

    /// Closed set of quote-currency codes the backend accepts (lowercase).
    pub quote_currencies: Vec<String>,

    /// Quote currency used where the UI does not offer a choice,
    /// e.g. the portfolio coin selector.
    pub default_quote: String,
}

impl Settings {
    /// Whether `code` is one of the supported quote currencies
    /// (case-insensitive).
    #[must_use]
    pub fn supports(&self, code: &str) -> bool {
        self.quote_currencies
            .iter()
            .any(|c| c.eq_ignore_ascii_case(code))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000".to_string(),
            quote_currencies: vec!["usd".to_string(), "eur".to_string()],
            default_quote: "usd".to_string(),
        }
    }
}
