use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::market::CurrencyQuote;
use crate::models::portfolio::{NewPortfolioItem, PortfolioSummary};

/// Trait abstraction over the dashboard backend (SOLID: Dependency Inversion).
///
/// The stores only ever talk to this trait, so tests substitute a scripted
/// fake and the real HTTP client can be swapped without touching them.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait MarketBackend: Send + Sync {
    /// Human-readable name of this backend (for logs/errors).
    fn name(&self) -> &str;

    /// Fetch all tracked currencies priced in `vs_currency`.
    async fn list_currencies(&self, vs_currency: &str) -> Result<Vec<CurrencyQuote>, CoreError>;

    /// Fetch the current portfolio summary with server-computed aggregates.
    async fn fetch_portfolio(&self) -> Result<PortfolioSummary, CoreError>;

    /// Create a new holding. Only the success status matters — the caller
    /// re-fetches the summary for fresh aggregates.
    async fn create_item(&self, item: &NewPortfolioItem) -> Result<(), CoreError>;

    /// Delete a holding by its server-assigned id.
    async fn remove_item(&self, item_id: &str) -> Result<(), CoreError>;
}
