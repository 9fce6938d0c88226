//! Money as an integer amount of minor units plus a currency.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// ISO currency code.
///
/// A closed enum rather than a free-form string: every Money carries one, and
/// mixed-currency arithmetic must fail loudly instead of silently combining.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Eur,
    Gbp,
    Aed,
    Sar,
    Inr,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Aed => "AED",
            Currency::Sar => "SAR",
            Currency::Inr => "INR",
        }
    }
}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

/// A monetary amount in the smallest currency unit (e.g. cents).
///
/// Never a floating-point major-unit value. Amounts are non-negative except
/// when a row explicitly represents a negative adjustment (e.g. a rendered
/// discount line).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    pub amount: i64,
    pub currency: Currency,
}

impl ValueObject for Money {}

impl Money {
    pub fn new(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: 0,
            currency,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Add two amounts of the same currency.
    ///
    /// Mixed currencies are a caller error, never auto-converted.
    pub fn checked_add(self, other: Money) -> DomainResult<Money> {
        if self.currency != other.currency {
            return Err(DomainError::currency_mismatch(format!(
                "{} + {}",
                self.currency, other.currency
            )));
        }
        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or_else(|| DomainError::invalid_input("money amount overflow"))?;
        Ok(Money {
            amount,
            currency: self.currency,
        })
    }

    /// Render as `"{CODE} {major}.{minor:02}"` with thousands separators,
    /// e.g. `amount=100000000, USD` → `"USD 1,000,000.00"`.
    ///
    /// This is the exact formatting contract the document renderer relies on.
    pub fn display(&self) -> String {
        let sign = if self.amount < 0 { "-" } else { "" };
        let abs = self.amount.unsigned_abs();
        let major = abs / 100;
        let minor = abs % 100;
        format!(
            "{} {}{}.{:02}",
            self.currency.code(),
            sign,
            group_thousands(major),
            minor
        )
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.display())
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (idx, ch) in digits.chars().enumerate() {
        if idx != 0 && (idx + 3 - offset) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_thousands_separators_and_two_decimals() {
        let m = Money::new(100_000_000, Currency::Usd);
        assert_eq!(m.display(), "USD 1,000,000.00");
    }

    #[test]
    fn formats_small_and_negative_amounts() {
        assert_eq!(Money::new(5, Currency::Eur).display(), "EUR 0.05");
        assert_eq!(Money::new(950, Currency::Eur).display(), "EUR 9.50");
        assert_eq!(Money::new(-123_450, Currency::Gbp).display(), "GBP -1,234.50");
        assert_eq!(Money::new(123_456_789, Currency::Usd).display(), "USD 1,234,567.89");
    }

    #[test]
    fn checked_add_rejects_mixed_currencies() {
        let usd = Money::new(100, Currency::Usd);
        let eur = Money::new(100, Currency::Eur);
        let err = usd.checked_add(eur).unwrap_err();
        assert!(matches!(err, DomainError::CurrencyMismatch(_)));
    }

    #[test]
    fn checked_add_accumulates_same_currency() {
        let a = Money::new(150_000, Currency::Usd);
        let b = Money::new(50_000, Currency::Usd);
        assert_eq!(a.checked_add(b).unwrap().amount, 200_000);
    }
}
