use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{ProjectionError, Result};

/// midpoint handling when rounding to currency precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundingMode {
    /// midpoint away from zero, 0.125 -> 0.13
    HalfUp,
    /// banker's rounding, 0.125 -> 0.12
    HalfEven,
}

impl RoundingMode {
    fn strategy(&self) -> RoundingStrategy {
        match self {
            RoundingMode::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }
}

/// when and how money is rounded
///
/// The policy is applied at exactly two places: when accrued interest is
/// credited to the balance, and when values leave the engine for display
/// (chart points, final totals). Accrual itself is never rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundingPolicy {
    pub scale: u32,
    pub mode: RoundingMode,
}

impl Default for RoundingPolicy {
    fn default() -> Self {
        Self::currency()
    }
}

impl RoundingPolicy {
    /// largest scale rust_decimal can represent
    pub const MAX_SCALE: u32 = 28;

    /// two decimal places, half-up
    pub fn currency() -> Self {
        Self {
            scale: 2,
            mode: RoundingMode::HalfUp,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.scale > Self::MAX_SCALE {
            return Err(ProjectionError::InvalidConfiguration {
                message: format!(
                    "rounding scale {} exceeds maximum of {}",
                    self.scale,
                    Self::MAX_SCALE
                ),
            });
        }
        Ok(())
    }

    pub fn round_decimal(&self, value: Decimal) -> Decimal {
        value.round_dp_with_strategy(self.scale, self.mode.strategy())
    }

    pub fn round(&self, amount: Money) -> Money {
        Money::from_decimal(self.round_decimal(amount.as_decimal()))
    }
}
