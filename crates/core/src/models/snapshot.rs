use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use super::account::{Account, RateZone};
use super::holding::Holding;
use super::loan::Loan;

/// Everything the metrics engine consumes for one computation cycle.
///
/// A snapshot is read-only input: the engine never mutates it and holds no
/// state between cycles. Zone schedules arrive through an independent side
/// channel, so a zoned account may be present while its schedule is not —
/// such an account is "unresolved" until a fresher snapshot carries its
/// zones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioSnapshot {
    /// Date the snapshot was taken
    pub as_of_date: NaiveDate,

    /// All bank accounts
    pub accounts: Vec<Account>,

    /// Side-channel tiered schedules, keyed by account id.
    /// A zoned account missing here has not resolved this cycle.
    pub zones: HashMap<Uuid, Vec<RateZone>>,

    /// All investment holdings
    pub holdings: Vec<Holding>,

    /// All loans
    pub loans: Vec<Loan>,
}

impl PortfolioSnapshot {
    /// A snapshot with no records.
    #[must_use]
    pub fn empty(as_of_date: NaiveDate) -> Self {
        Self {
            as_of_date,
            accounts: Vec::new(),
            zones: HashMap::new(),
            holdings: Vec::new(),
            loans: Vec::new(),
        }
    }

    /// Whether a zoned account's schedule has arrived.
    /// Accounts without a zone designation are trivially resolved.
    #[must_use]
    pub fn zones_resolved(&self, account: &Account) -> bool {
        !account.has_zone_designation || self.zones.contains_key(&account.id)
    }
}
