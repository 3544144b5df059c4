use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Payload for adding a holding to the portfolio (POST body).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPortfolioItem {
    /// Identifier of the coin being held, e.g. "bitcoin".
    pub coin_id: String,

    /// Amount of the coin owned. Must be strictly positive.
    pub quantity: f64,

    /// Price paid per unit at purchase time. Must be non-negative.
    pub entry_price: f64,
}

impl NewPortfolioItem {
    pub fn new(coin_id: impl Into<String>, quantity: f64, entry_price: f64) -> Self {
        Self {
            coin_id: coin_id.into(),
            quantity,
            entry_price,
        }
    }

    /// Client-side validation, run before any network call.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.coin_id.trim().is_empty() {
            return Err(CoreError::Validation("Please select a coin".into()));
        }
        if !self.quantity.is_finite() || self.quantity <= 0.0 {
            return Err(CoreError::Validation(
                "Quantity must be greater than zero".into(),
            ));
        }
        if !self.entry_price.is_finite() || self.entry_price < 0.0 {
            return Err(CoreError::Validation(
                "Entry price must not be negative".into(),
            ));
        }
        Ok(())
    }
}

/// One holding as the backend reports it, already enriched with the
/// server-computed market fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioItem {
    /// Server-assigned identifier, unique within a summary.
    pub id: String,

    pub coin_id: String,
    pub quantity: f64,
    pub entry_price: f64,

    /// Current price per unit. `None` when no live price exists.
    #[serde(default)]
    pub current_price: Option<f64>,

    /// quantity × current_price, computed server-side.
    #[serde(default)]
    pub current_value: Option<f64>,

    /// Absolute profit or loss, computed server-side.
    #[serde(default)]
    pub profit_loss: Option<f64>,

    /// Percentage profit or loss, computed server-side.
    #[serde(default)]
    pub profit_loss_percent: Option<f64>,
}

/// The derived market fields of a priced holding, available as a unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemPricing {
    pub current_price: f64,
    pub current_value: f64,
    pub profit_loss: f64,
    pub profit_loss_percent: f64,
}

impl PortfolioItem {
    /// The server-derived fields, or `None` unless every one of them is
    /// present. An item without a live price never yields a partial set,
    /// so callers cannot render half a profit/loss line.
    #[must_use]
    pub fn pricing(&self) -> Option<ItemPricing> {
        Some(ItemPricing {
            current_price: self.current_price?,
            current_value: self.current_value?,
            profit_loss: self.profit_loss?,
            profit_loss_percent: self.profit_loss_percent?,
        })
    }
}

/// Server-computed aggregate view over all holdings.
///
/// The totals are authoritative: the client never sums `items` itself, so
/// itemized and summary figures cannot drift apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    /// Total value of all assets at purchase time.
    #[serde(default)]
    pub total_entry_value: f64,

    /// Total current value of all assets.
    #[serde(default)]
    pub total_current_value: f64,

    /// Total profit or loss across the portfolio.
    #[serde(default)]
    pub total_profit_loss: f64,

    /// Percentage profit or loss across the portfolio.
    #[serde(default)]
    pub total_profit_loss_percent: f64,

    /// All holdings, in the order the backend reports them.
    #[serde(default)]
    pub items: Vec<PortfolioItem>,
}

impl Default for PortfolioSummary {
    fn default() -> Self {
        Self {
            total_entry_value: 0.0,
            total_current_value: 0.0,
            total_profit_loss: 0.0,
            total_profit_loss_percent: 0.0,
            items: Vec::new(),
        }
    }
}
