pub mod display;
pub mod errors;
pub mod models;
pub mod providers;
pub mod search;
pub mod stores;

pub use errors::CoreError;
pub use models::market::CurrencyQuote;
pub use models::portfolio::{ItemPricing, NewPortfolioItem, PortfolioItem, PortfolioSummary};
pub use models::settings::Settings;
pub use providers::rest::RestBackend;
pub use providers::traits::MarketBackend;
pub use stores::market::{EmptyReason, MarketDataStore, MarketView};
pub use stores::notice::{Notice, NoticeKind};
pub use stores::portfolio::{EntryForm, PortfolioStore, PortfolioView};
