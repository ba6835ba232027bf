//! Money value object.
//!
//! All monetary values are integer paise, never floats. Cylinder prices and
//! payment amounts stay exact under addition, and revenue totals are plain
//! integer sums.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// An amount of money in paise (1/100 rupee).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// The zero amount.
    pub const ZERO: Money = Money(0);

    /// Creates an amount from paise.
    pub fn from_paise(paise: i64) -> Self {
        Self(paise)
    }

    /// Creates an amount from whole rupees.
    pub fn from_rupees(rupees: i64) -> Self {
        Self(rupees * 100)
    }

    /// Returns the amount in paise.
    pub fn as_paise(&self) -> i64 {
        self.0
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rupees = self.0 / 100;
        let paise = (self.0 % 100).abs();
        write!(f, "₹{}.{:02}", rupees, paise)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn from_rupees_scales_to_paise() {
        assert_eq!(Money::from_rupees(903).as_paise(), 90_300);
    }

    #[test]
    fn display_formats_rupees_and_paise() {
        assert_eq!(Money::from_paise(90_300).to_string(), "₹903.00");
        assert_eq!(Money::from_paise(34_950).to_string(), "₹349.50");
        assert_eq!(Money::ZERO.to_string(), "₹0.00");
    }

    #[test]
    fn sum_of_empty_iterator_is_zero() {
        let total: Money = std::iter::empty::<Money>().sum();
        assert_eq!(total, Money::ZERO);
    }

    #[test]
    fn addition_is_exact() {
        let total = Money::from_paise(90_300) + Money::from_paise(34_900);
        assert_eq!(total, Money::from_paise(125_200));
    }

    proptest! {
        #[test]
        fn addition_commutes(a in -1_000_000_000i64..1_000_000_000, b in -1_000_000_000i64..1_000_000_000) {
            let x = Money::from_paise(a);
            let y = Money::from_paise(b);
            prop_assert_eq!(x + y, y + x);
        }

        #[test]
        fn sum_matches_integer_sum(amounts in proptest::collection::vec(0i64..10_000_000, 0..20)) {
            let total: Money = amounts.iter().copied().map(Money::from_paise).sum();
            prop_assert_eq!(total.as_paise(), amounts.iter().sum::<i64>());
        }
    }
}
