use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

use super::currency::CurrencyCode;

/// Aggregated metrics over all bank accounts.
/// All monetary values are in the reporting currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountMetrics {
    /// Sum of all included account balances
    pub total_balance: Decimal,

    /// Included balance held in savings accounts
    pub savings_balance: Decimal,

    /// Included balance held in checking accounts
    pub checking_balance: Decimal,

    /// Number of accounts in the input, including excluded ones
    pub account_count: usize,

    /// Balance-weighted mean interest rate (percent) across accounts that
    /// earn interest; 0 when none do
    pub average_interest_rate: Decimal,

    /// Projected interest earned over one year
    pub expected_yearly_interest: Decimal,
}

impl AccountMetrics {
    /// All-zero metrics (the defined degenerate result).
    #[must_use]
    pub fn empty() -> Self {
        Self {
            total_balance: Decimal::ZERO,
            savings_balance: Decimal::ZERO,
            checking_balance: Decimal::ZERO,
            account_count: 0,
            average_interest_rate: Decimal::ZERO,
            expected_yearly_interest: Decimal::ZERO,
        }
    }
}

/// Aggregated metrics over all investment holdings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentMetrics {
    /// Current market value: Σ quantity × current price
    pub total_value: Decimal,

    /// Acquisition cost: Σ quantity × average price
    pub total_cost: Decimal,

    /// Absolute gain/loss: total_value - total_cost
    pub total_gain: Decimal,

    /// Percentage gain: (total_gain / total_cost) × 100, 0 for zero cost
    pub total_gain_percent: Decimal,

    /// Projected annual dividend income: Σ quantity × per-share dividend
    pub total_dividends: Decimal,
}

impl InvestmentMetrics {
    /// All-zero metrics (the defined degenerate result).
    #[must_use]
    pub fn empty() -> Self {
        Self {
            total_value: Decimal::ZERO,
            total_cost: Decimal::ZERO,
            total_gain: Decimal::ZERO,
            total_gain_percent: Decimal::ZERO,
            total_dividends: Decimal::ZERO,
        }
    }
}

/// Aggregated metrics over all loans.
/// Monetary values are in the reporting currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanMetrics {
    /// Sum of outstanding principals
    pub total_principal: Decimal,

    /// Sum of monthly payments
    pub total_monthly_payment: Decimal,

    /// Principal-weighted mean interest rate (percent); 0 for no principal
    pub average_interest_rate: Decimal,

    /// Number of loans in the input
    pub count: usize,
}

impl LoanMetrics {
    /// All-zero metrics (the defined degenerate result).
    #[must_use]
    pub fn empty() -> Self {
        Self {
            total_principal: Decimal::ZERO,
            total_monthly_payment: Decimal::ZERO,
            average_interest_rate: Decimal::ZERO,
            count: 0,
        }
    }
}

/// Combined dashboard view over one portfolio snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioOverview {
    /// Date the underlying snapshot was taken
    pub as_of_date: NaiveDate,

    /// Currency all monetary values are reported in
    pub currency: CurrencyCode,

    /// Bank-account aggregates
    pub accounts: AccountMetrics,

    /// Investment aggregates
    pub investments: InvestmentMetrics,

    /// Loan aggregates
    pub loans: LoanMetrics,

    /// total_balance + total_value - total_principal
    pub net_worth: Decimal,
}

impl PortfolioOverview {
    /// Serialize the overview for the dashboard layer.
    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize overview: {e}")))
    }
}
