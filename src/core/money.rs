//! Non-negative currency amounts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;

/// A non-negative US dollar amount held as whole cents.
///
/// Negativity is unrepresentable; arithmetic saturates rather than wrapping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Usd(u64);

impl Usd {
    pub const ZERO: Usd = Usd(0);

    pub const fn from_cents(cents: u64) -> Self {
        Usd(cents)
    }

    pub const fn from_dollars(dollars: u64) -> Self {
        Usd(dollars.saturating_mul(100))
    }

    /// Convert a floating dollar amount, rounding to the nearest cent.
    ///
    /// Returns `None` for negative, NaN or infinite input.
    pub fn try_from_dollars_f64(dollars: f64) -> Option<Self> {
        if !dollars.is_finite() || dollars < 0.0 {
            return None;
        }
        // `as` saturates at u64::MAX for oversized values
        Some(Usd((dollars * 100.0).round() as u64))
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    pub const fn saturating_add(self, other: Usd) -> Usd {
        Usd(self.0.saturating_add(other.0))
    }
}

impl Sum for Usd {
    fn sum<I: Iterator<Item = Usd>>(iter: I) -> Self {
        iter.fold(Usd::ZERO, Usd::saturating_add)
    }
}

impl fmt::Display for Usd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dollars = self.0 / 100;
        let cents = self.0 % 100;

        let digits = dollars.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        if cents == 0 {
            write!(f, "${grouped}")
        } else {
            write!(f, "${grouped}.{cents:02}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_conversion_rounds_to_cents() {
        assert_eq!(Usd::try_from_dollars_f64(50_000.0), Some(Usd::from_dollars(50_000)));
        assert_eq!(Usd::try_from_dollars_f64(0.125), Some(Usd::from_cents(13)));
        assert_eq!(Usd::try_from_dollars_f64(-0.01), None);
        assert_eq!(Usd::try_from_dollars_f64(f64::NAN), None);
        assert_eq!(Usd::try_from_dollars_f64(f64::INFINITY), None);
    }

    #[test]
    fn sum_saturates() {
        let total: Usd = [Usd::from_cents(u64::MAX), Usd::from_cents(1)]
            .into_iter()
            .sum();
        assert_eq!(total, Usd::from_cents(u64::MAX));
    }

    #[test]
    fn display_groups_thousands() {
        assert_eq!(Usd::from_dollars(100_000).to_string(), "$100,000");
        assert_eq!(Usd::from_dollars(999).to_string(), "$999");
        assert_eq!(Usd::from_cents(123_456_78).to_string(), "$123,456.78");
        assert_eq!(Usd::ZERO.to_string(), "$0");
    }

    #[test]
    fn serializes_as_cents() {
        let json = serde_json::to_string(&Usd::from_dollars(12)).unwrap();
        assert_eq!(json, "1200");
    }
}
