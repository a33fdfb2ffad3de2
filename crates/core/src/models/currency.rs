use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::CoreError;

/// A supported currency, identified by its ISO-4217 code.
///
/// Every monetary amount in the tracker is paired with exactly one
/// `CurrencyCode`; amounts are never combined across currencies without
/// going through the currency service first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    /// Czech koruna
    Czk,
    /// Euro
    Eur,
    /// US dollar
    Usd,
    /// British pound
    Gbp,
    /// Polish złoty
    Pln,
    /// Swiss franc
    Chf,
}

impl CurrencyCode {
    /// The uppercase ISO-4217 code (e.g., "CZK").
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            CurrencyCode::Czk => "CZK",
            CurrencyCode::Eur => "EUR",
            CurrencyCode::Usd => "USD",
            CurrencyCode::Gbp => "GBP",
            CurrencyCode::Pln => "PLN",
            CurrencyCode::Chf => "CHF",
        }
    }

    /// All supported currencies, in a fixed order.
    #[must_use]
    pub fn all() -> [CurrencyCode; 6] {
        [
            CurrencyCode::Czk,
            CurrencyCode::Eur,
            CurrencyCode::Usd,
            CurrencyCode::Gbp,
            CurrencyCode::Pln,
            CurrencyCode::Chf,
        ]
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CurrencyCode {
    type Err = CoreError;

    /// Parse a currency code, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "CZK" => Ok(CurrencyCode::Czk),
            "EUR" => Ok(CurrencyCode::Eur),
            "USD" => Ok(CurrencyCode::Usd),
            "GBP" => Ok(CurrencyCode::Gbp),
            "PLN" => Ok(CurrencyCode::Pln),
            "CHF" => Ok(CurrencyCode::Chf),
            other => Err(CoreError::ValidationError(format!(
                "Unknown currency code '{other}'"
            ))),
        }
    }
}
