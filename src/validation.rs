use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{ProjectionError, Result};
use crate::interest::CreditingFrequency;
use crate::types::ProjectionInput;

/// input as collected from a form, before any checks
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawProjectionInput {
    pub principal: f64,
    pub monthly_contribution: f64,
    pub years: i64,
    pub annual_rate_percent: f64,
    pub crediting_frequency: CreditingFrequency,
}

/// optional ceilings applied to raw input before validation
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Limits {
    pub principal: Option<f64>,
    pub monthly_contribution: Option<f64>,
    pub annual_rate_percent: Option<f64>,
    pub years: Option<i64>,
}

impl Limits {
    /// ceilings for an interactive calculator form
    pub fn ui_defaults() -> Self {
        Self {
            principal: Some(10_000_000.0),
            monthly_contribution: Some(1_000_000.0),
            annual_rate_percent: Some(100.0),
            years: Some(100),
        }
    }

    /// clamp every field that has a limit
    pub fn apply(&self, raw: &RawProjectionInput) -> RawProjectionInput {
        fn limit<T: PartialOrd + Copy>(value: T, ceiling: Option<T>) -> T {
            match ceiling {
                Some(ceiling) => clamp(value, ceiling),
                None => value,
            }
        }

        RawProjectionInput {
            principal: limit(raw.principal, self.principal),
            monthly_contribution: limit(raw.monthly_contribution, self.monthly_contribution),
            years: limit(raw.years, self.years),
            annual_rate_percent: limit(raw.annual_rate_percent, self.annual_rate_percent),
            crediting_frequency: raw.crediting_frequency,
        }
    }

    pub fn validate(&self) -> Result<()> {
        let ceilings = [
            ("principal", self.principal),
            ("monthly_contribution", self.monthly_contribution),
            ("annual_rate_percent", self.annual_rate_percent),
        ];

        for (field, ceiling) in ceilings {
            if let Some(ceiling) = ceiling {
                if !ceiling.is_finite() {
                    return Err(ProjectionError::InvalidConfiguration {
                        message: format!("limit for {field} must be finite"),
                    });
                }
            }
        }
        Ok(())
    }
}

/// reduce a value to `limit` when it exceeds it
///
/// Values that do not compare (NaN) pass through untouched so that
/// validation still rejects them.
pub fn clamp<T: PartialOrd + Copy>(value: T, limit: T) -> T {
    if value > limit {
        limit
    } else {
        value
    }
}

fn finite_decimal(field: &'static str, value: f64) -> Result<Decimal> {
    if !value.is_finite() {
        return Err(ProjectionError::invalid_input(field, "must be a finite number"));
    }
    Decimal::from_f64(value)
        .ok_or_else(|| ProjectionError::invalid_input(field, "out of decimal range"))
}

/// turn raw form input into a typed projection input, rejecting rather than fixing
pub fn validate(raw: &RawProjectionInput) -> Result<ProjectionInput> {
    let principal = finite_decimal("principal", raw.principal)?;
    let monthly_contribution = finite_decimal("monthly_contribution", raw.monthly_contribution)?;
    let annual_rate_percent = finite_decimal("annual_rate_percent", raw.annual_rate_percent)?;

    let years = match raw.years {
        0 => return Err(ProjectionError::EmptyHorizon),
        y if y < 0 => return Err(ProjectionError::invalid_input("years", "must not be negative")),
        y => u32::try_from(y)
            .map_err(|_| ProjectionError::invalid_input("years", "too many years"))?,
    };

    let input = ProjectionInput {
        principal: Money::from_decimal(principal),
        monthly_contribution: Money::from_decimal(monthly_contribution),
        years,
        annual_rate_percent,
        crediting_frequency: raw.crediting_frequency,
    };
    input.validate()?;
    Ok(input)
}
