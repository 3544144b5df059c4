// ═══════════════════════════════════════════════════════════════════
// Model Tests — CurrencyQuote, PortfolioItem, PortfolioSummary,
// NewPortfolioItem validation, Settings
// ═══════════════════════════════════════════════════════════════════

use crypto_watcher_core::models::market::CurrencyQuote;
use crypto_watcher_core::models::portfolio::{
    NewPortfolioItem, PortfolioItem, PortfolioSummary,
};
use crypto_watcher_core::models::settings::Settings;

// ═══════════════════════════════════════════════════════════════════
//  CurrencyQuote
// ═══════════════════════════════════════════════════════════════════

mod currency_quote {
    use super::*;

    #[test]
    fn deserialize_full() {
        let json = r#"{
            "id": "bitcoin",
            "name": "Bitcoin",
            "symbol": "btc",
            "image": "https://example.com/btc.png",
            "current_price": 65000.0,
            "price_change_percentage_24h": 2.5
        }"#;
        let q: CurrencyQuote = serde_json::from_str(json).unwrap();
        assert_eq!(q.id, "bitcoin");
        assert_eq!(q.name, "Bitcoin");
        assert_eq!(q.symbol, "btc");
        assert_eq!(q.current_price, Some(65000.0));
        assert_eq!(q.price_change_percentage_24h, Some(2.5));
    }

    #[test]
    fn absent_price_is_none_not_zero() {
        let json = r#"{"id": "obscurecoin", "name": "Obscure", "symbol": "obs"}"#;
        let q: CurrencyQuote = serde_json::from_str(json).unwrap();
        assert_eq!(q.current_price, None);
        assert_eq!(q.price_change_percentage_24h, None);
        assert!(q.image.is_empty());
    }

    #[test]
    fn null_price_is_none() {
        let json = r#"{"id": "x", "name": "X", "symbol": "x", "current_price": null}"#;
        let q: CurrencyQuote = serde_json::from_str(json).unwrap();
        assert_eq!(q.current_price, None);
    }

    #[test]
    fn zero_price_stays_zero() {
        let json = r#"{"id": "x", "name": "X", "symbol": "x", "current_price": 0.0}"#;
        let q: CurrencyQuote = serde_json::from_str(json).unwrap();
        assert_eq!(q.current_price, Some(0.0));
    }

    #[test]
    fn unknown_backend_fields_are_ignored() {
        let json = r#"{
            "id": "bitcoin", "name": "Bitcoin", "symbol": "btc",
            "market_cap": 1200000000000.0, "market_cap_rank": 1
        }"#;
        let q: CurrencyQuote = serde_json::from_str(json).unwrap();
        assert_eq!(q.id, "bitcoin");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  NewPortfolioItem
// ═══════════════════════════════════════════════════════════════════

mod new_portfolio_item {
    use super::*;

    #[test]
    fn valid_item_passes() {
        assert!(NewPortfolioItem::new("bitcoin", 0.5, 60000.0).validate().is_ok());
    }

    #[test]
    fn zero_entry_price_is_allowed() {
        assert!(NewPortfolioItem::new("bitcoin", 1.0, 0.0).validate().is_ok());
    }

    #[test]
    fn zero_quantity_rejected() {
        assert!(NewPortfolioItem::new("bitcoin", 0.0, 100.0).validate().is_err());
    }

    #[test]
    fn negative_quantity_rejected() {
        assert!(NewPortfolioItem::new("bitcoin", -1.0, 100.0).validate().is_err());
    }

    #[test]
    fn nan_quantity_rejected() {
        assert!(NewPortfolioItem::new("bitcoin", f64::NAN, 100.0)
            .validate()
            .is_err());
    }

    #[test]
    fn negative_entry_price_rejected() {
        assert!(NewPortfolioItem::new("bitcoin", 1.0, -0.01).validate().is_err());
    }

    #[test]
    fn infinite_entry_price_rejected() {
        assert!(NewPortfolioItem::new("bitcoin", 1.0, f64::INFINITY)
            .validate()
            .is_err());
    }

    #[test]
    fn empty_coin_id_rejected() {
        assert!(NewPortfolioItem::new("  ", 1.0, 100.0).validate().is_err());
    }

    #[test]
    fn serializes_to_post_body_fields() {
        let item = NewPortfolioItem::new("bitcoin", 0.5, 60000.0);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["coin_id"], "bitcoin");
        assert_eq!(json["quantity"], 0.5);
        assert_eq!(json["entry_price"], 60000.0);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  PortfolioItem — the all-or-none derived triple
// ═══════════════════════════════════════════════════════════════════

mod portfolio_item {
    use super::*;

    fn base_item() -> PortfolioItem {
        serde_json::from_str(
            r#"{"id": "i1", "coin_id": "bitcoin", "quantity": 0.5, "entry_price": 60000.0}"#,
        )
        .unwrap()
    }

    #[test]
    fn pricing_present_when_all_fields_present() {
        let mut item = base_item();
        item.current_price = Some(65000.0);
        item.current_value = Some(32500.0);
        item.profit_loss = Some(2500.0);
        item.profit_loss_percent = Some(8.33);

        let p = item.pricing().unwrap();
        assert_eq!(p.current_price, 65000.0);
        assert_eq!(p.current_value, 32500.0);
        assert_eq!(p.profit_loss, 2500.0);
    }

    #[test]
    fn pricing_absent_when_no_market_price() {
        assert!(base_item().pricing().is_none());
    }

    #[test]
    fn partial_fields_never_yield_partial_pricing() {
        let mut item = base_item();
        item.current_price = Some(65000.0);
        // value/pl/pl% missing: the whole group reads as unavailable
        assert!(item.pricing().is_none());

        let mut item = base_item();
        item.current_value = Some(32500.0);
        item.profit_loss = Some(2500.0);
        item.profit_loss_percent = Some(8.33);
        assert!(item.pricing().is_none());
    }

    #[test]
    fn deserializes_server_enriched_fields() {
        let json = r#"{
            "id": "a7f3", "coin_id": "bitcoin", "quantity": 0.5, "entry_price": 60000.0,
            "current_price": 65000.0, "current_value": 32500.0,
            "profit_loss": 2500.0, "profit_loss_percent": 8.33
        }"#;
        let item: PortfolioItem = serde_json::from_str(json).unwrap();
        assert!(item.pricing().is_some());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  PortfolioSummary
// ═══════════════════════════════════════════════════════════════════

mod portfolio_summary {
    use super::*;

    #[test]
    fn default_is_empty() {
        let s = PortfolioSummary::default();
        assert!(s.items.is_empty());
        assert_eq!(s.total_entry_value, 0.0);
        assert_eq!(s.total_current_value, 0.0);
    }

    #[test]
    fn deserializes_with_items_in_order() {
        let json = r#"{
            "total_entry_value": 31000.0,
            "total_current_value": 33800.0,
            "total_profit_loss": 2800.0,
            "total_profit_loss_percent": 9.03,
            "items": [
                {"id": "i1", "coin_id": "bitcoin", "quantity": 0.5, "entry_price": 60000.0},
                {"id": "i2", "coin_id": "ethereum", "quantity": 0.4, "entry_price": 2500.0}
            ]
        }"#;
        let s: PortfolioSummary = serde_json::from_str(json).unwrap();
        assert_eq!(s.items.len(), 2);
        assert_eq!(s.items[0].id, "i1");
        assert_eq!(s.items[1].id, "i2");
        assert_eq!(s.total_profit_loss, 2800.0);
    }

    #[test]
    fn item_ids_unique_within_summary() {
        let json = r#"{"items": [
            {"id": "i1", "coin_id": "bitcoin", "quantity": 1.0, "entry_price": 1.0},
            {"id": "i2", "coin_id": "bitcoin", "quantity": 2.0, "entry_price": 2.0}
        ]}"#;
        let s: PortfolioSummary = serde_json::from_str(json).unwrap();
        let mut ids: Vec<&str> = s.items.iter().map(|i| i.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), s.items.len());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Settings
// ═══════════════════════════════════════════════════════════════════

mod settings {
    use super::*;

    #[test]
    fn default_values() {
        let s = Settings::default();
        assert_eq!(s.api_base_url, "http://localhost:8000");
        assert_eq!(s.quote_currencies, vec!["usd", "eur"]);
        assert_eq!(s.default_quote, "usd");
    }

    #[test]
    fn supports_is_case_insensitive() {
        let s = Settings::default();
        assert!(s.supports("usd"));
        assert!(s.supports("USD"));
        assert!(s.supports("Eur"));
        assert!(!s.supports("gbp"));
    }

    #[test]
    fn extending_the_set_is_pure_configuration() {
        let mut s = Settings::default();
        s.quote_currencies.push("pln".to_string());
        assert!(s.supports("PLN"));
    }
}
