use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

/// A receipt amount: fixed-point, two fractional digits, rounded half-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(Decimal);

impl Money {
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, 2))
    }

    pub fn from_decimal(decimal: Decimal) -> Self {
        let mut rounded = decimal.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(2);
        Money(rounded)
    }

    /// Read an amount out of raw OCR text.
    ///
    /// Everything except ASCII digits, `.` and `-` is discarded before
    /// parsing, so `"$1,234.56"` reads as `1234.56`. A lone trailing minus
    /// (`"12.50-"`) is treated as a sign. Anything that still fails to parse
    /// yields zero.
    pub fn parse_lenient(text: &str) -> Self {
        let kept: String = text
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
            .collect();

        let normalized = match kept.strip_suffix('-') {
            Some(body) if !body.is_empty() && !body.contains('-') => format!("-{body}"),
            _ => kept,
        };

        Decimal::from_str(&normalized)
            .map(Money::from_decimal)
            .unwrap_or_else(|_| Money::zero())
    }

    pub fn zero() -> Self {
        Money(Decimal::new(0, 2))
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    pub fn as_decimal(self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_sign_negative() && !self.0.is_zero() {
            write!(f, "-${:.2}", self.0.abs())
        } else {
            write!(f, "${:.2}", self.0.abs())
        }
    }
}

impl Add for Money {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Money(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Money(self.0 - rhs.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |a, b| a + b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_dollar_amount() {
        assert_eq!(Money::parse_lenient("$3.99"), Money::from_cents(399));
        assert_eq!(Money::parse_lenient("$1,234.56"), Money::from_cents(123456));
    }

    #[test]
    fn parse_trailing_minus_is_negative() {
        let m = Money::parse_lenient("$1,234.5-");
        assert_eq!(m, Money::from_cents(-123450));
        assert_eq!(m.as_decimal().to_string(), "-1234.50");
    }

    #[test]
    fn parse_leading_minus() {
        assert_eq!(Money::parse_lenient("-2.00"), Money::from_cents(-200));
    }

    #[test]
    fn unparseable_is_zero() {
        assert!(Money::parse_lenient("TOTAL").is_zero());
        assert!(Money::parse_lenient("").is_zero());
        assert!(Money::parse_lenient("-").is_zero());
        assert!(Money::parse_lenient("1.2.3").is_zero());
        assert!(Money::parse_lenient("1-2").is_zero());
        assert_eq!(Money::parse_lenient("n/a").as_decimal().to_string(), "0.00");
    }

    #[test]
    fn rounds_half_up() {
        assert_eq!(Money::parse_lenient("2.675"), Money::from_cents(268));
        assert_eq!(Money::parse_lenient("2.674"), Money::from_cents(267));
        assert_eq!(Money::parse_lenient("-2.675"), Money::from_cents(-268));
    }

    #[test]
    fn always_two_fractional_digits() {
        assert_eq!(Money::parse_lenient("7").as_decimal().to_string(), "7.00");
        assert_eq!(Money::parse_lenient("7.5").as_decimal().to_string(), "7.50");
    }

    #[test]
    fn display_format() {
        assert_eq!(Money::from_cents(649).to_string(), "$6.49");
        assert_eq!(Money::from_cents(-50).to_string(), "-$0.50");
        assert_eq!(Money::zero().to_string(), "$0.00");
    }

    #[test]
    fn sum_of_amounts() {
        let total: Money = [399, 250].into_iter().map(Money::from_cents).sum();
        assert_eq!(total, Money::from_cents(649));
    }

    #[test]
    fn serializes_as_decimal_string() {
        let json = serde_json::to_string(&Money::from_cents(650)).unwrap();
        assert_eq!(json, "\"6.50\"");
    }
}
