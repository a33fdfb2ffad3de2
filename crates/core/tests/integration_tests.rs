// ═══════════════════════════════════════════════════════════════════
// Integration Tests — MetricsEngine facade end-to-end: settings
// validation, snapshot fetch, combined overview, lenient policy
// ═══════════════════════════════════════════════════════════════════

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use finance_tracker_core::errors::CoreError;
use finance_tracker_core::models::account::{Account, RateZone};
use finance_tracker_core::models::currency::CurrencyCode;
use finance_tracker_core::models::holding::Holding;
use finance_tracker_core::models::loan::Loan;
use finance_tracker_core::models::settings::Settings;
use finance_tracker_core::models::snapshot::PortfolioSnapshot;
use finance_tracker_core::sources::memory::InMemorySource;
use finance_tracker_core::MetricsEngine;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

// ═══════════════════════════════════════════════════════════════════
//  Construction
// ═══════════════════════════════════════════════════════════════════

mod construction {
    use super::*;

    #[test]
    fn default_engine_reports_in_czk() {
        let engine = MetricsEngine::with_defaults();
        assert_eq!(engine.reporting_currency(), CurrencyCode::Czk);
    }

    #[test]
    fn custom_settings_are_validated() {
        let bad = Settings::new(CurrencyCode::Czk).with_rate(CurrencyCode::Eur, dec!(-1));
        assert!(matches!(
            MetricsEngine::new(bad),
            Err(CoreError::ValidationError(_))
        ));
    }

    #[test]
    fn valid_settings_accepted() {
        let settings = Settings::new(CurrencyCode::Eur).with_rate(CurrencyCode::Czk, dec!(0.04));
        let engine = MetricsEngine::new(settings).unwrap();
        assert_eq!(engine.reporting_currency(), CurrencyCode::Eur);
    }

    #[test]
    fn convert_to_reporting_identity() {
        let engine = MetricsEngine::with_defaults();
        assert_eq!(
            engine.convert_to_reporting(dec!(42.42), CurrencyCode::Czk).unwrap(),
            dec!(42.42)
        );
    }

    #[test]
    fn convert_to_reporting_uses_table() {
        let engine = MetricsEngine::new(
            Settings::new(CurrencyCode::Czk).with_rate(CurrencyCode::Eur, dec!(25)),
        )
        .unwrap();
        assert_eq!(
            engine.convert_to_reporting(dec!(4), CurrencyCode::Eur).unwrap(),
            dec!(100)
        );
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Full dashboard scenario
// ═══════════════════════════════════════════════════════════════════

mod overview {
    use super::*;

    /// Two savings accounts (one zoned, one flat), one holding with a
    /// dividend, one mortgage.
    async fn scenario_snapshot(engine: &MetricsEngine) -> PortfolioSnapshot {
        let zoned = Account::savings("A", CurrencyCode::Czk, dec!(50000)).with_zone_designation();
        let flat =
            Account::savings("B", CurrencyCode::Czk, dec!(100000)).with_interest_rate(dec!(1));

        let source = InMemorySource::new()
            .with_account(zoned.clone())
            .with_account(flat)
            .with_zones(
                zoned.id,
                vec![RateZone::bounded(dec!(0), dec!(50000), dec!(3))],
            )
            .unwrap()
            .with_holding(
                Holding::new("VWCE", "All-World", dec!(10), dec!(2000), dec!(2500))
                    .with_dividend_yield(dec!(50)),
            )
            .with_loan(Loan::new(
                "Mortgage",
                CurrencyCode::Czk,
                dec!(600000),
                dec!(5500),
                dec!(5),
            ));

        engine.fetch_snapshot(&source, d(2025, 6, 30)).await.unwrap()
    }

    #[tokio::test]
    async fn computes_full_dashboard_metrics() {
        let engine = MetricsEngine::with_defaults();
        let snapshot = scenario_snapshot(&engine).await;
        let overview = engine.portfolio_overview(&snapshot).unwrap();

        assert_eq!(overview.as_of_date, d(2025, 6, 30));
        assert_eq!(overview.currency, CurrencyCode::Czk);

        // Accounts: 1500 zoned interest + 1000 flat interest.
        assert_eq!(overview.accounts.total_balance, dec!(150000));
        assert_eq!(overview.accounts.savings_balance, dec!(150000));
        assert_eq!(overview.accounts.expected_yearly_interest, dec!(2500));
        assert_eq!(
            overview.accounts.average_interest_rate,
            dec!(250000) / dec!(150000)
        );
        assert_eq!(overview.accounts.account_count, 2);

        // Investments: 10 × 2500 vs 10 × 2000.
        assert_eq!(overview.investments.total_value, dec!(25000));
        assert_eq!(overview.investments.total_cost, dec!(20000));
        assert_eq!(overview.investments.total_gain, dec!(5000));
        assert_eq!(overview.investments.total_gain_percent, dec!(25));
        assert_eq!(overview.investments.total_dividends, dec!(500));

        // Loans.
        assert_eq!(overview.loans.total_principal, dec!(600000));
        assert_eq!(overview.loans.total_monthly_payment, dec!(5500));
        assert_eq!(overview.loans.average_interest_rate, dec!(5));
        assert_eq!(overview.loans.count, 1);

        // Net worth: 150000 + 25000 - 600000.
        assert_eq!(overview.net_worth, dec!(-425000));
    }

    #[tokio::test]
    async fn overview_is_reproducible() {
        let engine = MetricsEngine::with_defaults();
        let snapshot = scenario_snapshot(&engine).await;
        let first = engine.portfolio_overview(&snapshot).unwrap();
        let second = engine.portfolio_overview(&snapshot).unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn overview_exports_to_json() {
        let engine = MetricsEngine::with_defaults();
        let snapshot = scenario_snapshot(&engine).await;
        let overview = engine.portfolio_overview(&snapshot).unwrap();

        let json = overview.to_json().unwrap();
        assert!(json.contains("net_worth"));
        assert!(json.contains("expected_yearly_interest"));
        assert!(json.contains("\"CZK\""));
    }

    #[test]
    fn empty_snapshot_yields_zero_overview() {
        let engine = MetricsEngine::with_defaults();
        let overview = engine
            .portfolio_overview(&PortfolioSnapshot::empty(d(2025, 1, 1)))
            .unwrap();
        assert_eq!(overview.net_worth, Decimal::ZERO);
        assert_eq!(overview.accounts.account_count, 0);
        assert_eq!(overview.loans.count, 0);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Lenient policy
// ═══════════════════════════════════════════════════════════════════

mod lenient {
    use super::*;

    /// A rate table that only knows EUR, so CHF records are malformed
    /// from the engine's point of view.
    fn narrow_engine() -> MetricsEngine {
        MetricsEngine::new(
            Settings::new(CurrencyCode::Czk).with_rate(CurrencyCode::Eur, dec!(25)),
        )
        .unwrap()
    }

    #[test]
    fn strict_overview_fails_on_unsupported_currency() {
        let engine = narrow_engine();
        let mut snapshot = PortfolioSnapshot::empty(d(2025, 1, 1));
        snapshot
            .accounts
            .push(Account::savings("CHF", CurrencyCode::Chf, dec!(100)));

        assert!(matches!(
            engine.portfolio_overview(&snapshot),
            Err(CoreError::UnsupportedCurrency(CurrencyCode::Chf))
        ));
    }

    #[test]
    fn lenient_overview_skips_offending_records() {
        let engine = narrow_engine();
        let mut snapshot = PortfolioSnapshot::empty(d(2025, 1, 1));
        snapshot
            .accounts
            .push(Account::savings("CHF", CurrencyCode::Chf, dec!(100)));
        snapshot
            .accounts
            .push(Account::savings("EUR", CurrencyCode::Eur, dec!(10)));
        snapshot.loans.push(Loan::new(
            "CHF loan",
            CurrencyCode::Chf,
            dec!(1000),
            dec!(100),
            dec!(3),
        ));

        let overview = engine.portfolio_overview_lenient(&snapshot);

        // One malformed record must not blank out the dashboard.
        assert_eq!(overview.accounts.total_balance, dec!(250));
        assert_eq!(overview.accounts.account_count, 2);
        assert_eq!(overview.loans.total_principal, Decimal::ZERO);
        assert_eq!(overview.loans.count, 1);
        assert_eq!(overview.net_worth, dec!(250));
    }
}
