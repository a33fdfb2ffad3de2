use rust_decimal::Decimal;
use std::collections::HashMap;
use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::account::{Account, AccountType, RateZone};
use crate::models::metrics::AccountMetrics;
use crate::services::currency_service::CurrencyService;
use crate::services::interest_service::InterestService;

/// Aggregates bank accounts into portfolio-level metrics.
///
/// All balances are converted to the reporting currency before summing.
/// Interest comes from the tiered calculator for zoned accounts and from
/// the stated flat rate otherwise; the average rate weights each account
/// by its reporting-currency balance.
pub struct AccountService {
    interest_service: InterestService,
}

impl AccountService {
    pub fn new() -> Self {
        Self {
            interest_service: InterestService::new(),
        }
    }

    /// Aggregate `accounts` against the side-channel zone map.
    ///
    /// Rules:
    /// - `exclude_from_balance` accounts contribute to nothing except
    ///   `account_count`; the count always reflects the raw input length.
    /// - An account earns interest if it has a positive flat rate or a
    ///   zone designation.
    /// - A zoned account whose schedule is missing from `zones` has not
    ///   resolved this cycle: it contributes zero interest and stays out
    ///   of the weighted average until a fresher snapshot arrives.
    /// - Zero total weight degrades the average rate to 0, never NaN.
    ///
    /// Fails on the first account whose currency has no conversion rate;
    /// use [`aggregate_lenient`](Self::aggregate_lenient) to skip such
    /// records instead.
    pub fn aggregate(
        &self,
        currency_service: &CurrencyService,
        accounts: &[Account],
        zones: &HashMap<Uuid, Vec<RateZone>>,
    ) -> Result<AccountMetrics, CoreError> {
        let mut total_balance = Decimal::ZERO;
        let mut savings_balance = Decimal::ZERO;
        let mut checking_balance = Decimal::ZERO;
        let mut expected_yearly_interest = Decimal::ZERO;

        // Weighted-average accumulators: Σ(balance × rate) and Σ(balance),
        // both in the reporting currency.
        let mut weighted_rate_sum = Decimal::ZERO;
        let mut weight_sum = Decimal::ZERO;

        for account in accounts {
            if account.exclude_from_balance {
                continue;
            }

            let balance_rep = currency_service.to_reporting(account.balance, account.currency)?;
            total_balance += balance_rep;
            match account.account_type {
                AccountType::Savings => savings_balance += balance_rep,
                AccountType::Checking => checking_balance += balance_rep,
            }

            if account.has_zone_designation {
                let Some(schedule) = zones.get(&account.id) else {
                    continue; // unresolved this cycle
                };
                let interest_own = self.interest_service.zoned_interest(account.balance, schedule);
                expected_yearly_interest +=
                    currency_service.to_reporting(interest_own, account.currency)?;

                let effective = self.interest_service.effective_rate(account.balance, schedule);
                weighted_rate_sum += balance_rep * effective;
                weight_sum += balance_rep;
            } else if let Some(rate) = account.interest_rate.filter(|r| *r > Decimal::ZERO) {
                expected_yearly_interest += balance_rep * rate / Decimal::ONE_HUNDRED;
                weighted_rate_sum += balance_rep * rate;
                weight_sum += balance_rep;
            }
        }

        let average_interest_rate = if weight_sum > Decimal::ZERO {
            weighted_rate_sum / weight_sum
        } else {
            Decimal::ZERO
        };

        Ok(AccountMetrics {
            total_balance,
            savings_balance,
            checking_balance,
            account_count: accounts.len(),
            average_interest_rate,
            expected_yearly_interest,
        })
    }

    /// Like [`aggregate`](Self::aggregate), but a record with an
    /// unsupported currency is skipped and logged instead of failing the
    /// whole aggregation. `account_count` still reflects the raw input
    /// length.
    pub fn aggregate_lenient(
        &self,
        currency_service: &CurrencyService,
        accounts: &[Account],
        zones: &HashMap<Uuid, Vec<RateZone>>,
    ) -> AccountMetrics {
        let kept: Vec<Account> = accounts
            .iter()
            .filter(|account| {
                let supported = currency_service.supports(account.currency);
                if !supported {
                    log::warn!(
                        "Skipping account '{}' ({}): unsupported currency {}",
                        account.name,
                        account.id,
                        account.currency
                    );
                }
                supported
            })
            .cloned()
            .collect();

        match self.aggregate(currency_service, &kept, zones) {
            Ok(mut metrics) => {
                metrics.account_count = accounts.len();
                metrics
            }
            // Unreachable once unsupported currencies are filtered out,
            // but a dashboard must never crash on metric display.
            Err(err) => {
                log::error!("Account aggregation failed: {err}");
                AccountMetrics {
                    account_count: accounts.len(),
                    ..AccountMetrics::empty()
                }
            }
        }
    }
}

impl Default for AccountService {
    fn default() -> Self {
        Self::new()
    }
}
