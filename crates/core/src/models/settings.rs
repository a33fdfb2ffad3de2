use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::errors::CoreError;

use super::currency::CurrencyCode;

/// Conversion configuration for one computation session.
///
/// Holds the single reporting currency and the static rate table into it.
/// Injected once at engine construction and passed explicitly from there —
/// never read from mutable global state, so aggregations stay reproducible.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// The currency every metric is reported in
    pub reporting_currency: CurrencyCode,

    /// Multiplicative factor from a source currency into the reporting one.
    /// The reporting currency itself needs no entry (identity).
    pub rates: HashMap<CurrencyCode, Decimal>,
}

impl Settings {
    /// An empty table reporting in `reporting_currency`. Only amounts
    /// already in that currency will convert until rates are added.
    pub fn new(reporting_currency: CurrencyCode) -> Self {
        Self {
            reporting_currency,
            rates: HashMap::new(),
        }
    }

    /// Add or replace one conversion factor.
    #[must_use]
    pub fn with_rate(mut self, currency: CurrencyCode, factor: Decimal) -> Self {
        self.rates.insert(currency, factor);
        self
    }

    /// Check the table for nonsense factors.
    /// A factor must be strictly positive; an identity entry for the
    /// reporting currency is allowed only if it is exactly 1.
    pub fn validate(&self) -> Result<(), CoreError> {
        for (currency, factor) in &self.rates {
            if *factor <= Decimal::ZERO {
                return Err(CoreError::ValidationError(format!(
                    "Conversion factor for {currency} must be positive, got {factor}"
                )));
            }
            if *currency == self.reporting_currency && *factor != Decimal::ONE {
                return Err(CoreError::ValidationError(format!(
                    "Conversion factor for the reporting currency {currency} must be 1, got {factor}"
                )));
            }
        }
        Ok(())
    }

    /// Load settings from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Serialize settings to a JSON string.
    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize settings: {e}")))
    }
}

impl Default for Settings {
    /// CZK reporting with a shipped static table for the other currencies.
    fn default() -> Self {
        Self::new(CurrencyCode::Czk)
            .with_rate(CurrencyCode::Eur, dec!(24.75))
            .with_rate(CurrencyCode::Usd, dec!(23.20))
            .with_rate(CurrencyCode::Gbp, dec!(29.40))
            .with_rate(CurrencyCode::Pln, dec!(5.85))
            .with_rate(CurrencyCode::Chf, dec!(25.90))
    }
}
