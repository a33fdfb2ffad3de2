use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::currency::CurrencyCode;

/// A loan snapshot (mortgage, consumer credit, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Loan {
    /// Unique identifier
    pub id: Uuid,

    /// Human-readable loan name (e.g., "Mortgage")
    pub name: String,

    /// Currency the loan is denominated in
    pub currency: CurrencyCode,

    /// Outstanding principal, in the loan's own currency
    pub principal: Decimal,

    /// Monthly payment, in the loan's own currency
    pub monthly_payment: Decimal,

    /// Annual interest rate in percent
    pub interest_rate: Decimal,
}

impl Loan {
    pub fn new(
        name: impl Into<String>,
        currency: CurrencyCode,
        principal: Decimal,
        monthly_payment: Decimal,
        interest_rate: Decimal,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            currency,
            principal,
            monthly_payment,
            interest_rate,
        }
    }
}
