// ═══════════════════════════════════════════════════════════════════
// Error Tests — CoreError variants, Display formatting, From impls,
// user_message extraction
// ═══════════════════════════════════════════════════════════════════

use crypto_watcher_core::errors::CoreError;

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn api() {
        let err = CoreError::Api {
            status: 503,
            message: "Market data unavailable".into(),
        };
        assert_eq!(
            err.to_string(),
            "API error (HTTP 503): Market data unavailable"
        );
    }

    #[test]
    fn network() {
        let err = CoreError::Network("connection refused".into());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }

    #[test]
    fn deserialization() {
        let err = CoreError::Deserialization("expected value at line 1".into());
        assert_eq!(
            err.to_string(),
            "Deserialization error: expected value at line 1"
        );
    }

    #[test]
    fn validation() {
        let err = CoreError::Validation("Quantity must be greater than zero".into());
        assert_eq!(
            err.to_string(),
            "Validation failed: Quantity must be greater than zero"
        );
    }

    #[test]
    fn unsupported_currency() {
        let err = CoreError::UnsupportedCurrency("gbp".into());
        assert_eq!(err.to_string(), "Unsupported quote currency: gbp");
    }
}

// ── user_message ────────────────────────────────────────────────────

mod user_message {
    use super::*;

    #[test]
    fn api_detail_is_verbatim() {
        let err = CoreError::Api {
            status: 503,
            message: "Please try again shortly.".into(),
        };
        assert_eq!(err.user_message(), "Please try again shortly.");
    }

    #[test]
    fn network_message_drops_the_prefix() {
        let err = CoreError::Network("connection refused".into());
        assert_eq!(err.user_message(), "connection refused");
    }

    #[test]
    fn validation_message_drops_the_prefix() {
        let err = CoreError::Validation("Quantity must be greater than zero".into());
        assert_eq!(err.user_message(), "Quantity must be greater than zero");
    }

    #[test]
    fn unsupported_currency_keeps_the_full_form() {
        let err = CoreError::UnsupportedCurrency("gbp".into());
        assert_eq!(err.user_message(), "Unsupported quote currency: gbp");
    }
}

// ── From impls ──────────────────────────────────────────────────────

mod conversions {
    use super::*;

    #[test]
    fn serde_json_error_becomes_deserialization() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: CoreError = json_err.into();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn deserialization_carries_the_original_message() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let msg = json_err.to_string();
        let err: CoreError = json_err.into();
        assert_eq!(err.to_string(), format!("Deserialization error: {msg}"));
    }
}
