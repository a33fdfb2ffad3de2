use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::CoreError;

use super::currency::CurrencyCode;

/// The type/category of a bank account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Interest-bearing savings account
    Savings,
    /// Everyday checking account
    Checking,
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountType::Savings => write!(f, "Savings"),
            AccountType::Checking => write!(f, "Checking"),
        }
    }
}

/// One bracket of a tiered interest schedule.
///
/// The lower bound is inclusive, the upper bound is exclusive — a balance
/// equal to `upper_bound` fills this zone completely and starts earning in
/// the next one. `upper_bound: None` marks the unbounded top zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateZone {
    /// Start of the bracket (inclusive), in the account's own currency
    pub lower_bound: Decimal,

    /// End of the bracket (exclusive); `None` = no upper limit
    #[serde(default)]
    pub upper_bound: Option<Decimal>,

    /// Annual interest rate for this bracket, in percent
    pub annual_rate_pct: Decimal,
}

impl RateZone {
    /// A bracket covering `[lower_bound, upper_bound)`.
    pub fn bounded(lower_bound: Decimal, upper_bound: Decimal, annual_rate_pct: Decimal) -> Self {
        Self {
            lower_bound,
            upper_bound: Some(upper_bound),
            annual_rate_pct,
        }
    }

    /// A top bracket covering `[lower_bound, ∞)`.
    pub fn unbounded(lower_bound: Decimal, annual_rate_pct: Decimal) -> Self {
        Self {
            lower_bound,
            upper_bound: None,
            annual_rate_pct,
        }
    }

    /// Validate a whole tiered schedule.
    ///
    /// Rules:
    /// - at least one zone
    /// - sorted by lower bound, the zones are contiguous and non-overlapping
    /// - the first zone starts at 0
    /// - at most one unbounded zone, and it must be the last
    /// - rates are non-negative
    ///
    /// The interest calculator tolerates malformed schedules; this check is
    /// for the write path, so bad data is rejected where it is produced.
    pub fn validate_schedule(zones: &[RateZone]) -> Result<(), CoreError> {
        if zones.is_empty() {
            return Err(CoreError::ValidationError(
                "Tiered schedule must contain at least one zone".into(),
            ));
        }

        let mut sorted: Vec<&RateZone> = zones.iter().collect();
        sorted.sort_by_key(|z| z.lower_bound);

        if sorted[0].lower_bound != Decimal::ZERO {
            return Err(CoreError::ValidationError(format!(
                "First zone must start at 0, starts at {}",
                sorted[0].lower_bound
            )));
        }

        for (i, zone) in sorted.iter().enumerate() {
            if zone.annual_rate_pct < Decimal::ZERO {
                return Err(CoreError::ValidationError(format!(
                    "Zone starting at {} has negative rate {}",
                    zone.lower_bound, zone.annual_rate_pct
                )));
            }

            match zone.upper_bound {
                Some(upper) => {
                    if upper <= zone.lower_bound {
                        return Err(CoreError::ValidationError(format!(
                            "Zone [{}, {}) is empty or inverted",
                            zone.lower_bound, upper
                        )));
                    }
                    if let Some(next) = sorted.get(i + 1) {
                        if next.lower_bound != upper {
                            return Err(CoreError::ValidationError(format!(
                                "Zones are not contiguous: one ends at {}, the next starts at {}",
                                upper, next.lower_bound
                            )));
                        }
                    }
                }
                None => {
                    if i + 1 != sorted.len() {
                        return Err(CoreError::ValidationError(
                            "Only the last zone may be unbounded".into(),
                        ));
                    }
                }
            }
        }

        Ok(())
    }
}

/// A bank account snapshot as delivered by the data source.
///
/// For accounts flagged `has_zone_designation`, the tiered schedule lives
/// in the snapshot's side-channel zone map (keyed by `id`) and effective
/// interest is always derived from it — `interest_rate` is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier
    pub id: Uuid,

    /// Human-readable account name (e.g., "Main savings")
    pub name: String,

    /// Savings or Checking — drives the balance partition in metrics
    pub account_type: AccountType,

    /// Currency the balance is denominated in
    pub currency: CurrencyCode,

    /// Current balance, in the account's own currency
    pub balance: Decimal,

    /// Flat annual interest rate in percent, if the account has one
    #[serde(default)]
    pub interest_rate: Option<Decimal>,

    /// True when interest follows a tiered schedule instead of a flat rate
    #[serde(default)]
    pub has_zone_designation: bool,

    /// Excluded accounts are counted but never summed into balances
    #[serde(default)]
    pub exclude_from_balance: bool,
}

impl Account {
    pub fn new(
        name: impl Into<String>,
        account_type: AccountType,
        currency: CurrencyCode,
        balance: Decimal,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            account_type,
            currency,
            balance,
            interest_rate: None,
            has_zone_designation: false,
            exclude_from_balance: false,
        }
    }

    /// Convenience constructors for common account types
    pub fn savings(name: impl Into<String>, currency: CurrencyCode, balance: Decimal) -> Self {
        Self::new(name, AccountType::Savings, currency, balance)
    }

    pub fn checking(name: impl Into<String>, currency: CurrencyCode, balance: Decimal) -> Self {
        Self::new(name, AccountType::Checking, currency, balance)
    }

    /// Set a flat annual interest rate (percent).
    #[must_use]
    pub fn with_interest_rate(mut self, rate: Decimal) -> Self {
        self.interest_rate = Some(rate);
        self
    }

    /// Mark the account as earning tiered interest.
    #[must_use]
    pub fn with_zone_designation(mut self) -> Self {
        self.has_zone_designation = true;
        self
    }

    /// Keep the account out of all balance sums.
    #[must_use]
    pub fn excluded_from_balance(mut self) -> Self {
        self.exclude_from_balance = true;
        self
    }
}
