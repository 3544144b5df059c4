use std::sync::{Arc, Mutex, MutexGuard};

use crate::errors::CoreError;
use crate::models::market::CurrencyQuote;
use crate::models::settings::Settings;
use crate::providers::traits::MarketBackend;
use crate::search;

/// Why the visible (filtered) market list is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    /// The last fetch produced no data at all (or failed).
    NoData,
    /// Data exists, but nothing matches the current search term.
    NoMatch,
}

impl EmptyReason {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            EmptyReason::NoData => "No data available.",
            EmptyReason::NoMatch => "No currencies match your search.",
        }
    }
}

/// Cloned snapshot of the market store's visible state, taken by the
/// rendering layer on each frame.
#[derive(Debug, Clone)]
pub struct MarketView {
    /// The search-filtered projection, in source order.
    pub currencies: Vec<CurrencyQuote>,
    /// Size of the full (unfiltered) list behind the projection.
    pub total_count: usize,
    /// Quote currency of the most recently requested fetch.
    pub quote: String,
    pub search_term: String,
    pub loading: bool,
    pub error: Option<String>,
}

impl MarketView {
    /// Which empty-state message to show, if any. Distinguishes "no data"
    /// from "no match" so a fruitless search is never mistaken for an
    /// empty market.
    #[must_use]
    pub fn empty_reason(&self) -> Option<EmptyReason> {
        if !self.currencies.is_empty() {
            None
        } else if self.total_count == 0 {
            Some(EmptyReason::NoData)
        } else {
            Some(EmptyReason::NoMatch)
        }
    }
}

struct MarketState {
    /// Last successfully fetched full list; replaced wholesale per fetch.
    all: Vec<CurrencyQuote>,
    /// Filtered projection of `all` under `search_term` — never mutated
    /// independently.
    filtered: Vec<CurrencyQuote>,
    search_term: String,
    quote: String,
    loading: bool,
    error: Option<String>,
    /// Fetch tag: a response is applied only while its tag is current,
    /// so the latest requested currency always wins over late responses.
    generation: u64,
}

/// View-model store for the market overview: owns the fetched currency
/// list and its search-filtered projection.
///
/// Independently constructible with an injected backend. Methods take
/// `&self`; state lives behind a mutex that is never held across an
/// await, so a UI may share the store between spawned tasks.
pub struct MarketDataStore {
    backend: Arc<dyn MarketBackend>,
    settings: Settings,
    state: Mutex<MarketState>,
}

impl MarketDataStore {
    pub fn new(backend: Arc<dyn MarketBackend>, settings: Settings) -> Self {
        let quote = settings.default_quote.clone();
        Self {
            backend,
            settings,
            state: Mutex::new(MarketState {
                all: Vec::new(),
                filtered: Vec::new(),
                search_term: String::new(),
                quote,
                loading: false,
                error: None,
                generation: 0,
            }),
        }
    }

    /// Fetch all tracked currencies priced in `quote` and replace the
    /// full list. The current search filter is re-applied to the new
    /// list, so membership and prices always come from the same fetch.
    ///
    /// A code outside the configured set is rejected without a network
    /// call. On failure both lists are cleared and a user-readable error
    /// is recorded. The loading flag brackets the call and is cleared on
    /// both paths — unless a newer fetch has superseded this one, in
    /// which case the late response is discarded untouched.
    pub async fn load_market(&self, quote: &str) {
        let code = quote.to_lowercase();
        if !self.settings.supports(&code) {
            self.lock().error = Some(CoreError::UnsupportedCurrency(code).to_string());
            return;
        }

        let generation = {
            let mut st = self.lock();
            st.generation += 1;
            st.loading = true;
            st.error = None;
            st.quote = code.clone();
            st.generation
        };

        let result = self.backend.list_currencies(&code).await;

        let mut st = self.lock();
        if st.generation != generation {
            log::debug!("discarding stale market response for {code}");
            return;
        }
        match result {
            Ok(list) => {
                st.filtered = search::filter(&list, &st.search_term);
                st.all = list;
            }
            Err(e) => {
                log::warn!("market fetch for {code} failed: {e}");
                st.all.clear();
                st.filtered.clear();
                st.error = Some(format!(
                    "Failed to load market data: {}",
                    e.user_message()
                ));
            }
        }
        st.loading = false;
    }

    /// Update the search term and recompute the filtered projection from
    /// the last fetched list. Purely local — no network call.
    pub fn set_search_term(&self, term: &str) {
        let mut st = self.lock();
        st.search_term = term.to_string();
        st.filtered = search::filter(&st.all, term);
    }

    #[must_use]
    pub fn snapshot(&self) -> MarketView {
        let st = self.lock();
        MarketView {
            currencies: st.filtered.clone(),
            total_count: st.all.len(),
            quote: st.quote.clone(),
            search_term: st.search_term.clone(),
            loading: st.loading,
            error: st.error.clone(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, MarketState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}
