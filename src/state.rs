use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{ProjectionError, Result};
use crate::rounding::RoundingPolicy;

/// running state of a savings account during a projection
///
/// `accrued_interest` holds interest earned but not yet paid in. It is kept
/// at full precision and only rounded when [`SaverState::credit`] folds it
/// into the balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaverState {
    pub principal: Money,
    pub balance: Money,
    pub accrued_interest: Money,
    pub total_contributions: Money,
    pub total_interest_credited: Money,
    pub months_elapsed: u32,
    pub credit_count: u32,
}

impl SaverState {
    pub fn new(principal: Money) -> Self {
        Self {
            principal,
            balance: principal,
            accrued_interest: Money::ZERO,
            total_contributions: Money::ZERO,
            total_interest_credited: Money::ZERO,
            months_elapsed: 0,
            credit_count: 0,
        }
    }

    /// add a contribution to the balance
    pub fn deposit(&mut self, amount: Money) -> Result<()> {
        self.balance = checked_add(self.balance, amount, "contribution")?;
        self.total_contributions = checked_add(self.total_contributions, amount, "contribution")?;
        Ok(())
    }

    /// add unrounded interest to the accrual pot
    pub fn accrue(&mut self, interest: Money) -> Result<()> {
        self.accrued_interest = checked_add(self.accrued_interest, interest, "interest accrual")?;
        Ok(())
    }

    /// round the accrual pot once, pay it into the balance and reset it
    ///
    /// Returns the amount credited. Sub-unit remainders are dropped along with
    /// the pot, matching how interest is paid out in whole currency units.
    ///
    /// The state is left untouched when the credit would overflow.
    pub fn credit(&mut self, rounding: &RoundingPolicy) -> Result<Money> {
        let amount = rounding.round(self.accrued_interest);
        let balance = checked_add(self.balance, amount, "interest credit")?;
        let total = checked_add(self.total_interest_credited, amount, "interest credit")?;

        self.balance = balance;
        self.total_interest_credited = total;
        self.accrued_interest = Money::ZERO;
        self.credit_count += 1;

        Ok(amount)
    }

    pub fn close_month(&mut self) {
        self.months_elapsed += 1;
    }
}

fn checked_add(a: Money, b: Money, operation: &'static str) -> Result<Money> {
    a.checked_add(b).ok_or(ProjectionError::overflow(operation))
}
