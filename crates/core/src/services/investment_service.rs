use rust_decimal::Decimal;

use crate::models::holding::Holding;
use crate::models::metrics::InvestmentMetrics;

/// Aggregates investment holdings into gain/loss metrics.
///
/// Holdings are assumed to be priced in the reporting currency already, so
/// no conversion is applied here — a known scope limitation of the current
/// data contract, kept as-is.
pub struct InvestmentService;

impl InvestmentService {
    pub fn new() -> Self {
        Self
    }

    /// Aggregate `holdings` into totals, gain/loss and projected dividends.
    ///
    /// `total_gain_percent` degrades to 0 when the total cost is zero.
    /// `dividend_yield` is a per-share annual amount, so projected income
    /// is quantity × yield with no percent scaling.
    #[must_use]
    pub fn aggregate(&self, holdings: &[Holding]) -> InvestmentMetrics {
        let mut total_value = Decimal::ZERO;
        let mut total_cost = Decimal::ZERO;
        let mut total_dividends = Decimal::ZERO;

        for holding in holdings {
            total_value += holding.quantity * holding.current_price;
            total_cost += holding.quantity * holding.average_price;
            if let Some(per_share) = holding.dividend_yield {
                total_dividends += holding.quantity * per_share;
            }
        }

        let total_gain = total_value - total_cost;
        let total_gain_percent = if total_cost > Decimal::ZERO {
            total_gain / total_cost * Decimal::ONE_HUNDRED
        } else {
            Decimal::ZERO
        };

        InvestmentMetrics {
            total_value,
            total_cost,
            total_gain,
            total_gain_percent,
            total_dividends,
        }
    }
}

impl Default for InvestmentService {
    fn default() -> Self {
        Self::new()
    }
}
