use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::account::{Account, RateZone};
use crate::models::holding::Holding;
use crate::models::loan::Loan;

/// Trait abstraction for portfolio data backends.
///
/// The engine itself performs no I/O; a backend (local store, remote sync)
/// implements this trait and the engine consumes plain records from it. If
/// a backend changes, only that one implementation is replaced.
///
/// Zone schedules are fetched per account, independently of the account
/// list — they may lag behind it or fail on their own, which is why the
/// snapshot join treats them as a side channel.
#[async_trait]
pub trait PortfolioSource: Send + Sync {
    /// Human-readable name of this source (for logs/errors).
    fn name(&self) -> &str;

    /// All bank accounts.
    async fn fetch_accounts(&self) -> Result<Vec<Account>, CoreError>;

    /// The tiered schedule for one zoned account.
    /// An empty Vec means the schedule has not been published yet.
    async fn fetch_zones(&self, account_id: Uuid) -> Result<Vec<RateZone>, CoreError>;

    /// All investment holdings.
    async fn fetch_holdings(&self) -> Result<Vec<Holding>, CoreError>;

    /// All loans.
    async fn fetch_loans(&self) -> Result<Vec<Loan>, CoreError>;
}
