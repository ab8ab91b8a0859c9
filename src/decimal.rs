use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};
use std::str::FromStr;

/// Money type carrying full decimal precision
///
/// Arithmetic never rounds. Rounding to currency precision is explicit and
/// goes through [`crate::rounding::RoundingPolicy`], so interest can accrue
/// unrounded between crediting events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// create from decimal
    pub fn from_decimal(d: Decimal) -> Self {
        Money(d)
    }

    /// create from string with exact parsing
    pub fn from_str_exact(s: &str) -> Result<Self, rust_decimal::Error> {
        Ok(Money(Decimal::from_str(s)?))
    }

    /// create from integer amount (pounds, dollars, euros)
    pub fn from_major(amount: i64) -> Self {
        Money(Decimal::from(amount))
    }

    /// create from minor amount (pence, cents)
    pub fn from_minor(amount: i64) -> Self {
        Money(Decimal::new(amount, 2))
    }

    /// get underlying decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    pub fn max(self, other: Self) -> Self {
        Money(self.0.max(other.0))
    }

    /// None when the sum leaves decimal range
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    pub fn checked_mul(self, factor: Decimal) -> Option<Money> {
        self.0.checked_mul(factor).map(Money)
    }

    /// interest on this balance for a number of periods at a periodic rate
    pub fn interest_for(&self, periodic_rate: Rate, periods: u32) -> Option<Money> {
        self.checked_mul(periodic_rate.as_decimal())?
            .checked_mul(Decimal::from(periods))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::from_str_exact(s)
    }
}

impl From<Decimal> for Money {
    fn from(d: Decimal) -> Self {
        Money::from_decimal(d)
    }
}

impl From<i64> for Money {
    fn from(i: i64) -> Self {
        Money::from_major(i)
    }
}

impl From<u32> for Money {
    fn from(i: u32) -> Self {
        Money::from_major(i as i64)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Money) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money(self.0 - other.0)
    }
}

impl Mul<Decimal> for Money {
    type Output = Money;

    fn mul(self, other: Decimal) -> Money {
        Money(self.0 * other)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

/// rate type for interest rates, stored as a fraction (0.05 for 5%)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Rate(Decimal);

impl Rate {
    pub const ZERO: Rate = Rate(Decimal::ZERO);

    /// create from decimal fraction (e.g., 0.05 for 5%)
    pub fn from_decimal(d: Decimal) -> Self {
        Rate(d)
    }

    /// create from percentage (e.g., 5.5 for 5.5%)
    pub fn from_percentage(p: Decimal) -> Self {
        Rate(p / Decimal::ONE_HUNDRED)
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    pub fn as_percentage(&self) -> Decimal {
        self.0 * Decimal::ONE_HUNDRED
    }

    /// daily rate from annual rate over a fixed year basis
    pub fn daily_rate(&self, year_basis: u32) -> Rate {
        Rate(self.0 / Decimal::from(year_basis))
    }

    /// monthly rate from annual rate
    pub fn monthly_rate(&self) -> Rate {
        Rate(self.0 / Decimal::from(12))
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percentage())
    }
}

impl From<Decimal> for Rate {
    fn from(d: Decimal) -> Self {
        Rate::from_decimal(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_keeps_full_precision() {
        let m = Money::from_str_exact("100.123456789").unwrap();
        assert_eq!(m.to_string(), "100.123456789");

        let sum = m + Money::from_str_exact("0.000000001").unwrap();
        assert_eq!(sum.as_decimal(), dec!(100.12345679));
    }

    #[test]
    fn test_minor_units() {
        assert_eq!(Money::from_minor(12_345), Money::from_decimal(dec!(123.45)));
        assert_eq!(Money::from_minor(100), Money::from_major(1));
    }

    #[test]
    fn test_checked_arithmetic_reports_overflow() {
        let max = Money::from_decimal(Decimal::MAX);

        assert_eq!(max.checked_add(Money::from_major(1)), None);
        assert_eq!(max.checked_mul(dec!(2)), None);
        assert_eq!(
            Money::from_major(2).checked_add(Money::from_minor(50)),
            Some(Money::from_decimal(dec!(2.50)))
        );

        let doubling = Rate::from_percentage(dec!(100));
        assert_eq!(max.interest_for(doubling, 2), None);
    }

    #[test]
    fn test_interest_for_days() {
        let balance = Money::from_major(10_000);
        let daily = Rate::from_percentage(dec!(5)).daily_rate(365);

        let interest = balance.interest_for(daily, 30).unwrap();
        assert_eq!(interest.as_decimal().round_dp(2), dec!(41.10));

        let year = balance.interest_for(daily, 365).unwrap();
        assert_eq!(year.as_decimal().round_dp(2), dec!(500.00));
    }

    #[test]
    fn test_rate_conversions() {
        let rate = Rate::from_percentage(dec!(5.5));
        assert_eq!(rate.as_decimal(), dec!(0.055));
        assert_eq!(rate.as_percentage(), dec!(5.5));
        assert_eq!(Rate::from_percentage(dec!(12)).monthly_rate().as_decimal(), dec!(0.01));
    }

    #[test]
    fn test_sign_checks() {
        assert!(!Money::ZERO.is_negative());
        assert!(Money::from_major(-1).is_negative());
        assert!(!Money::from_minor(1).is_negative());
    }

    #[test]
    fn test_sum() {
        let total: Money = [Money::from_major(1), Money::from_minor(50), Money::from_minor(25)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::from_decimal(dec!(1.75)));
    }
}
