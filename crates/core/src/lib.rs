pub mod errors;
pub mod models;
pub mod services;
pub mod sources;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::HashMap;
use uuid::Uuid;

use errors::CoreError;
use models::{
    account::{Account, RateZone},
    currency::CurrencyCode,
    holding::Holding,
    loan::Loan,
    metrics::{AccountMetrics, InvestmentMetrics, LoanMetrics, PortfolioOverview},
    settings::Settings,
    snapshot::PortfolioSnapshot,
};
use services::{
    account_service::AccountService, currency_service::CurrencyService,
    investment_service::InvestmentService, loan_service::LoanService,
};
use sources::traits::PortfolioSource;

/// Main entry point for the Finance Tracker core library.
///
/// Holds the conversion settings and the metric services. The engine is
/// stateless between calls: every aggregation is a pure function of the
/// records passed in, so identical snapshots always produce identical
/// metrics and the three aggregate families can run concurrently without
/// locking.
#[must_use]
pub struct MetricsEngine {
    currency_service: CurrencyService,
    account_service: AccountService,
    investment_service: InvestmentService,
    loan_service: LoanService,
}

impl std::fmt::Debug for MetricsEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetricsEngine")
            .field("reporting_currency", &self.currency_service.reporting_currency())
            .finish()
    }
}

impl MetricsEngine {
    /// Build an engine from validated settings.
    pub fn new(settings: Settings) -> Result<Self, CoreError> {
        settings.validate()?;
        Ok(Self::build(settings))
    }

    /// Build an engine with the shipped default rate table (CZK reporting).
    pub fn with_defaults() -> Self {
        Self::build(Settings::default())
    }

    // ── Currency ────────────────────────────────────────────────────

    /// The currency every metric is reported in.
    #[must_use]
    pub fn reporting_currency(&self) -> CurrencyCode {
        self.currency_service.reporting_currency()
    }

    /// Convert a single amount into the reporting currency.
    pub fn convert_to_reporting(
        &self,
        amount: Decimal,
        currency: CurrencyCode,
    ) -> Result<Decimal, CoreError> {
        self.currency_service.to_reporting(amount, currency)
    }

    // ── Account Metrics ─────────────────────────────────────────────

    /// Aggregate bank accounts against the side-channel zone map.
    /// Fails on the first unsupported currency.
    pub fn account_metrics(
        &self,
        accounts: &[Account],
        zones: &HashMap<Uuid, Vec<RateZone>>,
    ) -> Result<AccountMetrics, CoreError> {
        self.account_service
            .aggregate(&self.currency_service, accounts, zones)
    }

    /// Aggregate bank accounts, skipping (and logging) records with
    /// unsupported currencies instead of failing.
    #[must_use]
    pub fn account_metrics_lenient(
        &self,
        accounts: &[Account],
        zones: &HashMap<Uuid, Vec<RateZone>>,
    ) -> AccountMetrics {
        self.account_service
            .aggregate_lenient(&self.currency_service, accounts, zones)
    }

    // ── Investment Metrics ──────────────────────────────────────────

    /// Aggregate investment holdings. Infallible: holdings carry no
    /// currency of their own in the current data contract.
    #[must_use]
    pub fn investment_metrics(&self, holdings: &[Holding]) -> InvestmentMetrics {
        self.investment_service.aggregate(holdings)
    }

    // ── Loan Metrics ────────────────────────────────────────────────

    /// Aggregate loans. Fails on the first unsupported currency.
    pub fn loan_metrics(&self, loans: &[Loan]) -> Result<LoanMetrics, CoreError> {
        self.loan_service.aggregate(&self.currency_service, loans)
    }

    /// Aggregate loans, skipping (and logging) records with unsupported
    /// currencies instead of failing.
    #[must_use]
    pub fn loan_metrics_lenient(&self, loans: &[Loan]) -> LoanMetrics {
        self.loan_service
            .aggregate_lenient(&self.currency_service, loans)
    }

    // ── Combined Overview ───────────────────────────────────────────

    /// Compute the full dashboard overview for one snapshot.
    pub fn portfolio_overview(
        &self,
        snapshot: &PortfolioSnapshot,
    ) -> Result<PortfolioOverview, CoreError> {
        let accounts = self.account_metrics(&snapshot.accounts, &snapshot.zones)?;
        let investments = self.investment_metrics(&snapshot.holdings);
        let loans = self.loan_metrics(&snapshot.loans)?;

        Ok(Self::assemble_overview(
            snapshot.as_of_date,
            self.reporting_currency(),
            accounts,
            investments,
            loans,
        ))
    }

    /// Compute the overview with the skip-and-log policy: one malformed
    /// record must not blank out the entire dashboard.
    #[must_use]
    pub fn portfolio_overview_lenient(&self, snapshot: &PortfolioSnapshot) -> PortfolioOverview {
        let accounts = self.account_metrics_lenient(&snapshot.accounts, &snapshot.zones);
        let investments = self.investment_metrics(&snapshot.holdings);
        let loans = self.loan_metrics_lenient(&snapshot.loans);

        Self::assemble_overview(
            snapshot.as_of_date,
            self.reporting_currency(),
            accounts,
            investments,
            loans,
        )
    }

    // ── Snapshot Join ───────────────────────────────────────────────

    /// Fetch a full snapshot from a data source.
    ///
    /// Zone schedules are joined in per account: a failed or empty zone
    /// fetch leaves that account unresolved (logged, not fatal), so the
    /// aggregators run over the subset whose tier data has arrived. The
    /// caller re-invokes with a fresher snapshot once the data resolves.
    pub async fn fetch_snapshot(
        &self,
        source: &dyn PortfolioSource,
        as_of_date: NaiveDate,
    ) -> Result<PortfolioSnapshot, CoreError> {
        let accounts = source.fetch_accounts().await?;

        let mut zones = HashMap::new();
        for account in accounts.iter().filter(|a| a.has_zone_designation) {
            match source.fetch_zones(account.id).await {
                Ok(schedule) if !schedule.is_empty() => {
                    zones.insert(account.id, schedule);
                }
                Ok(_) => {
                    log::warn!(
                        "Zone data for account '{}' ({}) not published yet; \
                         treating as unresolved this cycle",
                        account.name,
                        account.id
                    );
                }
                Err(err) => {
                    log::warn!(
                        "Zone fetch for account '{}' ({}) failed via {}: {err}; \
                         treating as unresolved this cycle",
                        account.name,
                        account.id,
                        source.name()
                    );
                }
            }
        }

        let holdings = source.fetch_holdings().await?;
        let loans = source.fetch_loans().await?;

        Ok(PortfolioSnapshot {
            as_of_date,
            accounts,
            zones,
            holdings,
            loans,
        })
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(settings: Settings) -> Self {
        Self {
            currency_service: CurrencyService::new(settings),
            account_service: AccountService::new(),
            investment_service: InvestmentService::new(),
            loan_service: LoanService::new(),
        }
    }

    fn assemble_overview(
        as_of_date: NaiveDate,
        currency: CurrencyCode,
        accounts: AccountMetrics,
        investments: InvestmentMetrics,
        loans: LoanMetrics,
    ) -> PortfolioOverview {
        let net_worth =
            accounts.total_balance + investments.total_value - loans.total_principal;

        PortfolioOverview {
            as_of_date,
            currency,
            accounts,
            investments,
            loans,
            net_worth,
        }
    }
}
