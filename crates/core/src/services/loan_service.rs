use rust_decimal::Decimal;

use crate::errors::CoreError;
use crate::models::loan::Loan;
use crate::models::metrics::LoanMetrics;
use crate::services::currency_service::CurrencyService;

/// Aggregates loans into liability metrics.
///
/// Mirrors the account aggregator on the liability side: principal and
/// monthly payment are converted to the reporting currency before summing,
/// and the average rate weights each loan by its converted principal.
pub struct LoanService;

impl LoanService {
    pub fn new() -> Self {
        Self
    }

    /// Aggregate `loans`. Zero total principal degrades the average rate
    /// to 0. Fails on the first loan whose currency has no conversion
    /// rate; use [`aggregate_lenient`](Self::aggregate_lenient) to skip
    /// such records instead.
    pub fn aggregate(
        &self,
        currency_service: &CurrencyService,
        loans: &[Loan],
    ) -> Result<LoanMetrics, CoreError> {
        let mut total_principal = Decimal::ZERO;
        let mut total_monthly_payment = Decimal::ZERO;
        let mut weighted_rate_sum = Decimal::ZERO;

        for loan in loans {
            let principal_rep = currency_service.to_reporting(loan.principal, loan.currency)?;
            let payment_rep = currency_service.to_reporting(loan.monthly_payment, loan.currency)?;

            total_principal += principal_rep;
            total_monthly_payment += payment_rep;
            weighted_rate_sum += principal_rep * loan.interest_rate;
        }

        let average_interest_rate = if total_principal > Decimal::ZERO {
            weighted_rate_sum / total_principal
        } else {
            Decimal::ZERO
        };

        Ok(LoanMetrics {
            total_principal,
            total_monthly_payment,
            average_interest_rate,
            count: loans.len(),
        })
    }

    /// Like [`aggregate`](Self::aggregate), but a loan with an unsupported
    /// currency is skipped and logged instead of failing the whole
    /// aggregation. `count` still reflects the raw input length.
    pub fn aggregate_lenient(
        &self,
        currency_service: &CurrencyService,
        loans: &[Loan],
    ) -> LoanMetrics {
        let kept: Vec<Loan> = loans
            .iter()
            .filter(|loan| {
                let supported = currency_service.supports(loan.currency);
                if !supported {
                    log::warn!(
                        "Skipping loan '{}' ({}): unsupported currency {}",
                        loan.name,
                        loan.id,
                        loan.currency
                    );
                }
                supported
            })
            .cloned()
            .collect();

        match self.aggregate(currency_service, &kept) {
            Ok(mut metrics) => {
                metrics.count = loans.len();
                metrics
            }
            Err(err) => {
                log::error!("Loan aggregation failed: {err}");
                LoanMetrics {
                    count: loans.len(),
                    ..LoanMetrics::empty()
                }
            }
        }
    }
}

impl Default for LoanService {
    fn default() -> Self {
        Self::new()
    }
}
