use rust_decimal::Decimal;

use crate::errors::CoreError;
use crate::models::currency::CurrencyCode;
use crate::models::settings::Settings;

/// Converts monetary amounts into the single reporting currency.
///
/// Uses the static rate table from `Settings`. Pure and deterministic:
/// the same amount and currency always produce the same result, so every
/// aggregation built on top is reproducible regardless of record order.
pub struct CurrencyService {
    settings: Settings,
}

impl CurrencyService {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// The currency everything is reported in.
    #[must_use]
    pub fn reporting_currency(&self) -> CurrencyCode {
        self.settings.reporting_currency
    }

    /// Whether amounts in `currency` can be converted.
    #[must_use]
    pub fn supports(&self, currency: CurrencyCode) -> bool {
        currency == self.settings.reporting_currency || self.settings.rates.contains_key(&currency)
    }

    /// Convert `amount` from `source` into the reporting currency.
    ///
    /// Amounts already in the reporting currency are returned unchanged —
    /// no multiplication, so no rounding drift on the identity path.
    pub fn to_reporting(&self, amount: Decimal, source: CurrencyCode) -> Result<Decimal, CoreError> {
        if source == self.settings.reporting_currency {
            return Ok(amount);
        }

        let rate = self
            .settings
            .rates
            .get(&source)
            .copied()
            .ok_or(CoreError::UnsupportedCurrency(source))?;

        Ok(amount * rate)
    }
}
