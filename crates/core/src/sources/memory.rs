use async_trait::async_trait;
use std::collections::HashMap;
use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::account::{Account, RateZone};
use crate::models::holding::Holding;
use crate::models::loan::Loan;
use crate::sources::traits::PortfolioSource;

/// An in-memory portfolio backend.
///
/// Useful for tests and for offline callers that assemble records
/// themselves. Zone schedules are validated on insertion, so malformed
/// tier data is rejected at the write path instead of surfacing as odd
/// numbers on the dashboard.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    accounts: Vec<Account>,
    zones: HashMap<Uuid, Vec<RateZone>>,
    holdings: Vec<Holding>,
    loans: Vec<Loan>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one account.
    #[must_use]
    pub fn with_account(mut self, account: Account) -> Self {
        self.accounts.push(account);
        self
    }

    /// Attach a tiered schedule for an account id.
    /// Rejects malformed schedules (gap, overlap, missing zero bound).
    pub fn with_zones(
        mut self,
        account_id: Uuid,
        zones: Vec<RateZone>,
    ) -> Result<Self, CoreError> {
        RateZone::validate_schedule(&zones)?;
        self.zones.insert(account_id, zones);
        Ok(self)
    }

    /// Add one holding.
    #[must_use]
    pub fn with_holding(mut self, holding: Holding) -> Self {
        self.holdings.push(holding);
        self
    }

    /// Add one loan.
    #[must_use]
    pub fn with_loan(mut self, loan: Loan) -> Self {
        self.loans.push(loan);
        self
    }
}

#[async_trait]
impl PortfolioSource for InMemorySource {
    fn name(&self) -> &str {
        "InMemory"
    }

    async fn fetch_accounts(&self) -> Result<Vec<Account>, CoreError> {
        Ok(self.accounts.clone())
    }

    async fn fetch_zones(&self, account_id: Uuid) -> Result<Vec<RateZone>, CoreError> {
        Ok(self.zones.get(&account_id).cloned().unwrap_or_default())
    }

    async fn fetch_holdings(&self) -> Result<Vec<Holding>, CoreError> {
        Ok(self.holdings.clone())
    }

    async fn fetch_loans(&self) -> Result<Vec<Loan>, CoreError> {
        Ok(self.loans.clone())
    }
}
