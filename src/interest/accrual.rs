use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{ProjectionError, Result};

/// rate model used to compute one month of interest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccrualStrategy {
    /// annual / 365 applied per actual day of the month ("banking")
    DailyActual,
    /// annual / 12 applied once per month regardless of length ("nominal")
    FlatMonthly,
}

impl AccrualStrategy {
    /// year basis for daily accrual, leap years included
    pub const DAILY_YEAR_BASIS: u32 = 365;

    pub fn periodic_rate(&self, annual_rate: Rate) -> Rate {
        match self {
            AccrualStrategy::DailyActual => annual_rate.daily_rate(Self::DAILY_YEAR_BASIS),
            AccrualStrategy::FlatMonthly => annual_rate.monthly_rate(),
        }
    }

    /// rate periods that elapse in a month of the given length
    pub fn periods_in_month(&self, days_in_month: u32) -> u32 {
        match self {
            AccrualStrategy::DailyActual => days_in_month,
            AccrualStrategy::FlatMonthly => 1,
        }
    }
}

/// engine for accruing interest month by month
#[derive(Debug, Clone, Copy)]
pub struct AccrualEngine {
    pub strategy: AccrualStrategy,
    periodic_rate: Rate,
}

impl AccrualEngine {
    pub fn new(strategy: AccrualStrategy, annual_rate: Rate) -> Self {
        Self {
            strategy,
            periodic_rate: strategy.periodic_rate(annual_rate),
        }
    }

    pub fn periodic_rate(&self) -> Rate {
        self.periodic_rate
    }

    /// unrounded interest earned by `balance` over one month
    pub fn accrue_month(&self, balance: Money, days_in_month: u32) -> Result<MonthlyAccrual> {
        let periods = self.strategy.periods_in_month(days_in_month);
        let interest_amount = balance
            .interest_for(self.periodic_rate, periods)
            .ok_or(ProjectionError::overflow("interest accrual"))?;

        Ok(MonthlyAccrual {
            principal_base: balance,
            periodic_rate: self.periodic_rate,
            periods,
            interest_amount,
        })
    }
}

/// one month of accrued, not yet credited, interest
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyAccrual {
    pub principal_base: Money,
    pub periodic_rate: Rate,
    pub periods: u32,
    pub interest_amount: Money,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_daily_actual_depends_on_month_length() {
        let engine = AccrualEngine::new(AccrualStrategy::DailyActual, Rate::from_percentage(dec!(5)));
        let balance = Money::from_major(10_000);

        let january = engine.accrue_month(balance, 31).unwrap();
        let february = engine.accrue_month(balance, 28).unwrap();
        let leap_february = engine.accrue_month(balance, 29).unwrap();

        assert_eq!(january.periods, 31);
        assert_eq!(january.interest_amount.as_decimal().round_dp(2), dec!(42.47));
        assert_eq!(february.interest_amount.as_decimal().round_dp(2), dec!(38.36));
        assert!(leap_february.interest_amount > february.interest_amount);
        assert!(january.interest_amount > leap_february.interest_amount);
    }

    #[test]
    fn test_flat_monthly_ignores_month_length() {
        let engine = AccrualEngine::new(AccrualStrategy::FlatMonthly, Rate::from_percentage(dec!(12)));
        let balance = Money::from_major(10_000);

        let long = engine.accrue_month(balance, 31).unwrap();
        let short = engine.accrue_month(balance, 28).unwrap();

        assert_eq!(long.periods, 1);
        assert_eq!(long.interest_amount, short.interest_amount);
        assert_eq!(long.interest_amount, Money::from_major(100));
    }

    #[test]
    fn test_accrual_is_not_rounded() {
        let engine = AccrualEngine::new(AccrualStrategy::DailyActual, Rate::from_percentage(dec!(5)));
        let accrual = engine.accrue_month(Money::from_major(10_000), 30).unwrap();

        assert!(accrual.interest_amount.as_decimal().scale() > 2);
        assert_eq!(accrual.principal_base, Money::from_major(10_000));
    }

    #[test]
    fn test_zero_rate_accrues_nothing() {
        let engine = AccrualEngine::new(AccrualStrategy::DailyActual, Rate::ZERO);
        let accrual = engine.accrue_month(Money::from_major(5_000), 31).unwrap();
        assert!(accrual.interest_amount.is_zero());
    }

    #[test]
    fn test_accrual_overflow_is_an_error() {
        let engine = AccrualEngine::new(AccrualStrategy::DailyActual, Rate::from_percentage(dec!(2000)));
        let err = engine
            .accrue_month(Money::from_decimal(rust_decimal::Decimal::MAX), 31)
            .unwrap_err();

        assert_eq!(err, ProjectionError::overflow("interest accrual"));
    }
}
