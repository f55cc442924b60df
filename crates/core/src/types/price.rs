//! Type-safe price representation using decimal arithmetic.
//!
//! Prices never touch floating point: amounts are `rust_decimal::Decimal`
//! in the currency's standard unit (dollars, not cents), paired with an
//! ISO 4217 currency code.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    amount: Decimal,
    /// ISO 4217 currency code.
    currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a price from the smallest currency unit (e.g., cents for USD).
    #[must_use]
    pub fn from_cents(cents: i64, currency_code: CurrencyCode) -> Self {
        Self {
            amount: Decimal::new(cents, 2),
            currency_code,
        }
    }

    /// A zero amount in the given currency.
    #[must_use]
    pub const fn zero(currency_code: CurrencyCode) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency_code,
        }
    }

    /// The decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// The currency code.
    #[must_use]
    pub const fn currency_code(&self) -> CurrencyCode {
        self.currency_code
    }

    /// Whether this price is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Multiply by a unit count (line totals).
    #[must_use]
    pub fn times(&self, quantity: u32) -> Self {
        Self {
            amount: self.amount * Decimal::from(quantity),
            currency_code: self.currency_code,
        }
    }

    /// Add another amount.
    ///
    /// The store is single-currency; the left-hand currency code is kept.
    #[must_use]
    pub fn plus(&self, other: &Self) -> Self {
        Self {
            amount: self.amount + other.amount,
            currency_code: self.currency_code,
        }
    }

    /// Subtract another amount.
    #[must_use]
    pub fn minus(&self, other: &Self) -> Self {
        Self {
            amount: self.amount - other.amount,
            currency_code: self.currency_code,
        }
    }

    /// Format for display (e.g., "$19.99").
    ///
    /// Rounds to two decimal places; this is the only place display
    /// rounding happens.
    #[must_use]
    pub fn display(&self) -> String {
        format!("{}{:.2}", self.currency_code.symbol(), self.amount)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{:.2}", self.currency_code.symbol(), self.amount)
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
}

impl CurrencyCode {
    /// The display symbol for this currency.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::USD | Self::CAD | Self::AUD => "$",
            Self::EUR => "\u{20ac}",
            Self::GBP => "\u{a3}",
        }
    }

    /// The ISO 4217 code string.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
            Self::CAD => "CAD",
            Self::AUD => "AUD",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let price = Price::from_cents(19999, CurrencyCode::USD);
        assert_eq!(price.amount(), Decimal::new(19999, 2));
        assert_eq!(price.display(), "$199.99");
    }

    #[test]
    fn test_display_rounds_to_two_places() {
        let price = Price::new(Decimal::new(123456, 4), CurrencyCode::USD); // 12.3456
        assert_eq!(price.display(), "$12.35");
    }

    #[test]
    fn test_times_and_plus() {
        let unit = Price::from_cents(2999, CurrencyCode::USD);
        let line = unit.times(3);
        assert_eq!(line.amount(), Decimal::new(8997, 2));

        let total = line.plus(&Price::from_cents(3, CurrencyCode::USD));
        assert_eq!(total.amount(), Decimal::new(9000, 2));
    }

    #[test]
    fn test_zero() {
        let zero = Price::zero(CurrencyCode::USD);
        assert!(zero.is_zero());
        assert_eq!(zero.display(), "$0.00");
    }

    #[test]
    fn test_currency_symbols() {
        assert_eq!(CurrencyCode::USD.symbol(), "$");
        assert_eq!(CurrencyCode::EUR.symbol(), "€");
        assert_eq!(CurrencyCode::GBP.code(), "GBP");
    }

    #[test]
    fn test_serde_decimal_as_string() {
        let price = Price::from_cents(4999, CurrencyCode::USD);
        let json = serde_json::to_string(&price).unwrap();
        let back: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(back, price);
    }
}
