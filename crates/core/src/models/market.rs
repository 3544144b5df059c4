use serde::{Deserialize, Serialize};

/// A single tracked cryptocurrency as returned by the market endpoint,
/// priced in whatever quote currency the fetch asked for.
///
/// The whole collection is replaced wholesale on every fetch — entries are
/// never patched individually, so a quote can never mix prices from one
/// currency with membership from another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyQuote {
    /// Backend identifier, e.g. "bitcoin". Unique within one fetch.
    pub id: String,

    /// Human-readable name, e.g. "Bitcoin".
    pub name: String,

    /// Ticker symbol as the backend sends it (lowercase), e.g. "btc".
    pub symbol: String,

    /// Logo URL.
    #[serde(default)]
    pub image: String,

    /// Latest price in the quote currency. `None` when the backend has no
    /// live price — distinct from a price of 0.
    #[serde(default)]
    pub current_price: Option<f64>,

    /// 24h price change in percent. `None` when unavailable.
    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,
}
