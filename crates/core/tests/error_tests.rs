// ═══════════════════════════════════════════════════════════════════
// Error Tests — CoreError variants, Display formatting, From impls
// ═══════════════════════════════════════════════════════════════════

use finance_tracker_core::errors::CoreError;
use finance_tracker_core::models::currency::CurrencyCode;

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn unsupported_currency() {
        let err = CoreError::UnsupportedCurrency(CurrencyCode::Chf);
        assert_eq!(
            err.to_string(),
            "Unsupported currency: no conversion rate from CHF into the reporting currency"
        );
    }

    #[test]
    fn validation_error() {
        let err = CoreError::ValidationError("zones are not contiguous".into());
        assert_eq!(err.to_string(), "Validation failed: zones are not contiguous");
    }

    #[test]
    fn validation_error_empty_message() {
        let err = CoreError::ValidationError(String::new());
        assert_eq!(err.to_string(), "Validation failed: ");
    }

    #[test]
    fn data_source() {
        let err = CoreError::DataSource {
            source_name: "Sync".into(),
            message: "timeout".into(),
        };
        assert_eq!(err.to_string(), "Data source error (Sync): timeout");
    }

    #[test]
    fn serialization() {
        let err = CoreError::Serialization("buffer overflow".into());
        assert_eq!(err.to_string(), "Serialization error: buffer overflow");
    }

    #[test]
    fn deserialization() {
        let err = CoreError::Deserialization("unexpected EOF".into());
        assert_eq!(err.to_string(), "Deserialization error: unexpected EOF");
    }
}

// ── From impls ──────────────────────────────────────────────────────

mod conversions {
    use super::*;

    #[test]
    fn serde_json_error_becomes_deserialization() {
        let parse_err = serde_json::from_str::<CurrencyCode>("not json").unwrap_err();
        let err: CoreError = parse_err.into();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }
}

// ── Error trait ─────────────────────────────────────────────────────

mod error_trait {
    use super::*;

    #[test]
    fn is_a_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&CoreError::UnsupportedCurrency(CurrencyCode::Eur));
    }
}
