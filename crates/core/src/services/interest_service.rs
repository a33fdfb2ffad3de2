use rust_decimal::Decimal;

use crate::models::account::RateZone;

/// Computes yearly interest for accounts with a tiered rate schedule.
///
/// Tiers combine progressively, like tax brackets: each zone earns its own
/// rate on the slice of the balance that falls inside it, never on the
/// whole balance. Pure business logic — no I/O, no state.
pub struct InterestService;

impl InterestService {
    pub fn new() -> Self {
        Self
    }

    /// Yearly interest earned by `balance` under a tiered schedule,
    /// in the account's own currency.
    ///
    /// Zone bounds are lower-inclusive, upper-exclusive: a balance equal to
    /// an upper bound fills that zone completely and earns nothing in the
    /// next.
    ///
    /// Malformed schedules are tolerated rather than rejected — stale zone
    /// data must not blank out the dashboard. The sum covers whatever zones
    /// legitimately overlap the balance: a gap earns nothing, overlapping
    /// zones each earn on their own slice, and balance above the last
    /// bounded zone earns nothing.
    #[must_use]
    pub fn zoned_interest(&self, balance: Decimal, zones: &[RateZone]) -> Decimal {
        if balance <= Decimal::ZERO || zones.is_empty() {
            return Decimal::ZERO;
        }

        // Callers are expected to supply zones sorted by lower bound,
        // but stale side-channel data may not be.
        let mut sorted: Vec<&RateZone> = zones.iter().collect();
        sorted.sort_by_key(|z| z.lower_bound);

        let mut total = Decimal::ZERO;
        for zone in sorted {
            let capped = match zone.upper_bound {
                Some(upper) => balance.min(upper),
                None => balance,
            };
            let portion = capped - zone.lower_bound;
            if portion <= Decimal::ZERO {
                continue;
            }
            total += portion * zone.annual_rate_pct / Decimal::ONE_HUNDRED;
        }
        total
    }

    /// The flat rate implied by a tiered schedule: yearly zoned interest
    /// divided back by the balance, in percent. 0 for a zero or negative
    /// balance. Makes zoned accounts comparable to flat-rate accounts in a
    /// weighted average.
    #[must_use]
    pub fn effective_rate(&self, balance: Decimal, zones: &[RateZone]) -> Decimal {
        if balance <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        self.zoned_interest(balance, zones) / balance * Decimal::ONE_HUNDRED
    }
}

impl Default for InterestService {
    fn default() -> Self {
        Self::new()
    }
}
