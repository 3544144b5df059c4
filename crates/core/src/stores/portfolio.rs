use std::sync::{Arc, Mutex, MutexGuard};

use super::notice::Notice;
use crate::models::market::CurrencyQuote;
use crate::models::portfolio::{NewPortfolioItem, PortfolioSummary};
use crate::models::settings::Settings;
use crate::providers::traits::MarketBackend;
use crate::search;

/// Staged values for the add-holding form. Lives in the store so the
/// "clear only on a successful add" rule is enforced here, not in the UI.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryForm {
    pub coin_id: String,
    pub quantity: f64,
    pub entry_price: f64,
}

impl Default for EntryForm {
    fn default() -> Self {
        Self {
            coin_id: String::new(),
            quantity: 1.0,
            entry_price: 0.0,
        }
    }
}

/// Cloned snapshot of the portfolio store's visible state.
#[derive(Debug, Clone)]
pub struct PortfolioView {
    /// Last summary the backend reported, if any ever loaded.
    pub summary: Option<PortfolioSummary>,
    pub loading: bool,
    pub error: Option<String>,
    /// Coins offered by the add-item selector.
    pub available_coins: Vec<CurrencyQuote>,
    pub loading_coins: bool,
    /// Selector-only failure, distinct from the portfolio-load error.
    pub coins_error: Option<String>,
    pub form: EntryForm,
}

struct PortfolioState {
    summary: Option<PortfolioSummary>,
    loading: bool,
    error: Option<String>,
    available_coins: Vec<CurrencyQuote>,
    loading_coins: bool,
    coins_error: Option<String>,
    form: EntryForm,
    notices: Vec<Notice>,
}

/// View-model store for the user's holdings.
///
/// All aggregates come from the backend: after every mutation the full
/// summary is re-fetched rather than patched locally, so displayed totals
/// can never drift from the server-computed ones. Mutation → resync
/// chains are serialized per store instance; independent reads are not.
pub struct PortfolioStore {
    backend: Arc<dyn MarketBackend>,
    settings: Settings,
    state: Mutex<PortfolioState>,
    /// Held across each mutation and its resync, so two rapid user
    /// actions cannot interleave a stale resync over a newer mutation.
    mutation_lock: tokio::sync::Mutex<()>,
}

impl PortfolioStore {
    pub fn new(backend: Arc<dyn MarketBackend>, settings: Settings) -> Self {
        Self {
            backend,
            settings,
            state: Mutex::new(PortfolioState {
                summary: None,
                loading: false,
                error: None,
                available_coins: Vec::new(),
                loading_coins: false,
                coins_error: None,
                form: EntryForm::default(),
                notices: Vec::new(),
            }),
            mutation_lock: tokio::sync::Mutex::new(()),
        }
    }

    /// Fetch the currency list (priced in the configured default quote)
    /// for the add-item coin selector. Failure is non-fatal: it sets the
    /// selector's own error and leaves the portfolio untouched.
    pub async fn load_available_coins(&self) {
        {
            let mut st = self.lock();
            st.loading_coins = true;
            st.coins_error = None;
        }

        let result = self
            .backend
            .list_currencies(&self.settings.default_quote)
            .await;

        let mut st = self.lock();
        match result {
            Ok(coins) => st.available_coins = coins,
            Err(e) => {
                log::warn!("coin list fetch failed: {e}");
                st.coins_error = Some("Could not load coin list for selection.".to_string());
            }
        }
        st.loading_coins = false;
    }

    /// Fetch the current summary. On failure the error field is set while
    /// any previously loaded summary stays visible — the failure state is
    /// explicit, never hidden behind stale data.
    pub async fn load_portfolio(&self) {
        {
            let mut st = self.lock();
            st.loading = true;
            st.error = None;
        }

        let result = self.backend.fetch_portfolio().await;

        let mut st = self.lock();
        match result {
            Ok(summary) => st.summary = Some(summary),
            Err(e) => {
                log::warn!("portfolio fetch failed: {e}");
                st.error = Some(format!("Failed to load portfolio: {}", e.user_message()));
            }
        }
        st.loading = false;
    }

    /// Add a holding. Validation failures are caught before any network
    /// call. On success the entry form is cleared and the summary
    /// re-fetched for fresh aggregates; on failure the form keeps its
    /// values so the user can retry, and displayed data is untouched.
    pub async fn add_item(&self, coin_id: &str, quantity: f64, entry_price: f64) {
        let item = NewPortfolioItem::new(coin_id, quantity, entry_price);
        if let Err(e) = item.validate() {
            self.lock().notices.push(Notice::error(e.user_message()));
            return;
        }

        let _mutation = self.mutation_lock.lock().await;
        self.lock().loading = true;

        match self.backend.create_item(&item).await {
            Ok(()) => {
                {
                    let mut st = self.lock();
                    st.notices
                        .push(Notice::success("Portfolio item added successfully!"));
                    st.form = EntryForm::default();
                }
                self.load_portfolio().await;
            }
            Err(e) => {
                let mut st = self.lock();
                st.notices
                    .push(Notice::error(format!("Failed to add item: {}", e.user_message())));
                st.loading = false;
            }
        }
    }

    /// Delete a holding by id. The summary is re-fetched whether or not
    /// the delete succeeded — a failed call may still have taken effect
    /// server-side, and the backend's state is authoritative.
    pub async fn delete_item(&self, item_id: &str) {
        let _mutation = self.mutation_lock.lock().await;
        self.lock().loading = true;

        match self.backend.remove_item(item_id).await {
            Ok(()) => self
                .lock()
                .notices
                .push(Notice::success("Portfolio item deleted successfully!")),
            Err(e) => {
                log::warn!("delete of {item_id} failed: {e}");
                self.lock().notices.push(Notice::error(format!(
                    "Failed to delete item: {}",
                    e.user_message()
                )));
            }
        }

        self.load_portfolio().await;
    }

    /// Submit the staged entry form through [`Self::add_item`].
    pub async fn submit_form(&self) {
        let form = self.lock().form.clone();
        self.add_item(&form.coin_id, form.quantity, form.entry_price)
            .await;
    }

    // ── Entry form ──────────────────────────────────────────────────

    pub fn set_form_coin(&self, coin_id: &str) {
        self.lock().form.coin_id = coin_id.to_string();
    }

    pub fn set_form_quantity(&self, quantity: f64) {
        self.lock().form.quantity = quantity;
    }

    pub fn set_form_entry_price(&self, entry_price: f64) {
        self.lock().form.entry_price = entry_price;
    }

    // ── Views ───────────────────────────────────────────────────────

    /// Selector options matching `query` by name or symbol, in source
    /// order. Same projection rule as the market search.
    #[must_use]
    pub fn selectable_coins(&self, query: &str) -> Vec<CurrencyQuote> {
        search::filter(&self.lock().available_coins, query)
    }

    /// Drain queued transient notices for the UI toast layer.
    #[must_use]
    pub fn take_notices(&self) -> Vec<Notice> {
        std::mem::take(&mut self.lock().notices)
    }

    #[must_use]
    pub fn snapshot(&self) -> PortfolioView {
        let st = self.lock();
        PortfolioView {
            summary: st.summary.clone(),
            loading: st.loading,
            error: st.error.clone(),
            available_coins: st.available_coins.clone(),
            loading_coins: st.loading_coins,
            coins_error: st.coins_error.clone(),
            form: st.form.clone(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, PortfolioState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}
