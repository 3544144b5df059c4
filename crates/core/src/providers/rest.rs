use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;

use super::traits::MarketBackend;
use crate::errors::CoreError;
use crate::models::market::CurrencyQuote;
use crate::models::portfolio::{NewPortfolioItem, PortfolioSummary};

/// REST implementation of [`MarketBackend`] against the dashboard API
/// under `/api/v1`.
///
/// No request timeout is configured: a hung request simply keeps the
/// issuing store's loading flag open until it resolves.
pub struct RestBackend {
    client: Client,
    base_url: String,
}

impl RestBackend {
    /// Build a client for the given base URL. A trailing slash is trimmed
    /// so endpoint paths can be appended uniformly.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check the status of a settled response, converting any non-success
    /// status into a [`CoreError::Api`] with the body's `detail` message.
    async fn ensure_success(resp: Response) -> Result<Response, CoreError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().await.unwrap_or_default();
        Err(error_from_response(status, &body))
    }
}

// ── API error body ──────────────────────────────────────────────────

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Convert a non-success HTTP response into a [`CoreError::Api`].
///
/// The backend wraps failures as `{"detail": "..."}`; when that message is
/// present it is surfaced verbatim, otherwise the HTTP reason phrase (or a
/// generic fallback) stands in.
#[must_use]
pub fn error_from_response(status: StatusCode, body: &str) -> CoreError {
    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail);
    let message = match detail {
        Some(d) if !d.is_empty() => d,
        _ => status
            .canonical_reason()
            .unwrap_or("Unknown error occurred")
            .to_string(),
    };
    CoreError::Api {
        status: status.as_u16(),
        message,
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl MarketBackend for RestBackend {
    fn name(&self) -> &str {
        "REST"
    }

    async fn list_currencies(&self, vs_currency: &str) -> Result<Vec<CurrencyQuote>, CoreError> {
        let url = format!(
            "{}/api/v1/cryptocurrencies?vs_currency={vs_currency}",
            self.base_url
        );
        log::debug!("GET {url}");

        let resp = Self::ensure_success(self.client.get(&url).send().await?).await?;
        let quotes: Vec<CurrencyQuote> = resp.json().await.map_err(|e| {
            CoreError::Deserialization(format!("Invalid market data payload: {e}"))
        })?;
        Ok(quotes)
    }

    async fn fetch_portfolio(&self) -> Result<PortfolioSummary, CoreError> {
        let url = format!("{}/api/v1/portfolio", self.base_url);
        log::debug!("GET {url}");

        let resp = Self::ensure_success(self.client.get(&url).send().await?).await?;
        let summary: PortfolioSummary = resp.json().await.map_err(|e| {
            CoreError::Deserialization(format!("Invalid portfolio payload: {e}"))
        })?;
        Ok(summary)
    }

    async fn create_item(&self, item: &NewPortfolioItem) -> Result<(), CoreError> {
        let url = format!("{}/api/v1/portfolio", self.base_url);
        log::debug!("POST {url} ({})", item.coin_id);

        let resp = self.client.post(&url).json(item).send().await?;
        Self::ensure_success(resp).await?;
        Ok(())
    }

    async fn remove_item(&self, item_id: &str) -> Result<(), CoreError> {
        let url = format!("{}/api/v1/portfolio/{item_id}", self.base_url);
        log::debug!("DELETE {url}");

        let resp = self.client.delete(&url).send().await?;
        Self::ensure_success(resp).await?;
        Ok(())
    }
}
