use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An investment position snapshot (stock, ETF, fund).
///
/// Prices are assumed to be in the reporting currency already; investment
/// metrics apply no conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Holding {
    /// Unique identifier
    pub id: Uuid,

    /// Ticker symbol, uppercased (e.g., "VWCE")
    pub symbol: String,

    /// Human-readable name (e.g., "Vanguard FTSE All-World")
    pub name: String,

    /// Number of units held (non-negative)
    pub quantity: Decimal,

    /// Average purchase price per unit
    pub average_price: Decimal,

    /// Current market price per unit
    pub current_price: Decimal,

    /// Annual dividend per share as an absolute amount, not a percent.
    /// The field name is historical; projected income is quantity × this.
    #[serde(default)]
    pub dividend_yield: Option<Decimal>,
}

impl Holding {
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        quantity: Decimal,
        average_price: Decimal,
        current_price: Decimal,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            symbol: symbol.into().to_uppercase(),
            name: name.into(),
            quantity,
            average_price,
            current_price,
            dividend_yield: None,
        }
    }

    /// Set the annual per-share dividend amount.
    #[must_use]
    pub fn with_dividend_yield(mut self, per_share: Decimal) -> Self {
        self.dividend_yield = Some(per_share);
        self
    }
}
