use rust_decimal::Decimal;

use crate::decimal::{Money, Rate};
use crate::errors::{ProjectionError, Result};

const OPERATION: &str = "closed-form estimate";

fn overflow() -> ProjectionError {
    ProjectionError::overflow(OPERATION)
}

/// growth factor (1 + r)^n using iteration
fn growth_factor(periodic_rate: Rate, periods: u32) -> Result<Decimal> {
    let base = Decimal::ONE + periodic_rate.as_decimal();
    let mut factor = Decimal::ONE;
    for _ in 0..periods {
        factor = factor.checked_mul(base).ok_or_else(overflow)?;
    }
    Ok(factor)
}

/// future value of a principal plus contributions paid at the start of each period
///
/// `FV = P(1 + r)^n + C(1 + r)((1 + r)^n - 1) / r`, and `P + C n` when r is zero.
/// This is the unrounded counterpart of a flat-monthly, monthly-credited
/// simulation; it never credits in whole cents, so the two differ by a few
/// cents over long horizons.
pub fn annuity_due_future_value(
    principal: Money,
    contribution: Money,
    periodic_rate: Rate,
    periods: u32,
) -> Result<Money> {
    let r = periodic_rate.as_decimal();

    if r.is_zero() {
        return contribution
            .checked_mul(Decimal::from(periods))
            .and_then(|paid_in| principal.checked_add(paid_in))
            .ok_or_else(overflow);
    }

    let factor = growth_factor(periodic_rate, periods)?;
    let principal_growth = principal.checked_mul(factor).ok_or_else(overflow)?;
    let annuity_factor = (factor - Decimal::ONE)
        .checked_div(r)
        .and_then(|f| f.checked_mul(Decimal::ONE + r))
        .ok_or_else(overflow)?;
    let contribution_growth = contribution.checked_mul(annuity_factor).ok_or_else(overflow)?;

    principal_growth
        .checked_add(contribution_growth)
        .ok_or_else(overflow)
}
