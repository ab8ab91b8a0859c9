use tracing::{debug, trace};

use crate::calendar::{ProjectionCalendar, MONTHS_PER_CYCLE};
use crate::decimal::Money;
use crate::errors::{ProjectionError, Result};
use crate::events::{EventStore, Period, ProjectionEvent};
use crate::interest::{AccrualEngine, AccrualStrategy};
use crate::ledger::{Ledger, YearBalances};
use crate::rounding::RoundingPolicy;
use crate::state::SaverState;
use crate::types::ProjectionInput;

/// full month-by-month history of one projection
#[derive(Debug, Clone)]
pub struct Simulation {
    pub ledger: Ledger,
    pub state: SaverState,
    pub events: EventStore,
}

impl Simulation {
    /// balance after the final month
    pub fn final_balance(&self) -> Result<Money> {
        self.ledger.final_balance().ok_or(ProjectionError::EmptyHorizon)
    }

    /// sum of every rounded credit
    pub fn total_interest_earned(&self) -> Money {
        self.state.total_interest_credited
    }
}

/// run the accrual and crediting state machine over `input.years * 12` months
///
/// Each month the contribution lands first, then a month of interest accrues
/// on the new balance. Interest is credited (rounded once) when the crediting
/// frequency says so.
pub fn simulate(
    input: &ProjectionInput,
    strategy: AccrualStrategy,
    calendar: &ProjectionCalendar,
    rounding: &RoundingPolicy,
) -> Result<Simulation> {
    input.validate()?;

    let engine = AccrualEngine::new(strategy, input.annual_rate());
    let frequency = input.crediting_frequency;

    debug!(
        years = input.years,
        ?strategy,
        ?frequency,
        periodic_rate = %engine.periodic_rate().as_decimal(),
        "starting projection"
    );

    let mut state = SaverState::new(input.principal);
    let mut ledger = Ledger::with_capacity(input.years as usize);
    let mut events = EventStore::with_capacity(input.months() as usize * 3);

    for year in 0..input.years {
        let mut balances: YearBalances = [Money::ZERO; 12];

        for (month, slot) in (0..MONTHS_PER_CYCLE).zip(balances.iter_mut()) {
            let period = Period { year, month };

            state.deposit(input.monthly_contribution)?;
            events.emit(ProjectionEvent::ContributionApplied {
                period,
                amount: input.monthly_contribution,
                new_balance: state.balance,
            });

            let days = calendar.days_in_month(month, year);
            let accrual = engine.accrue_month(state.balance, days)?;
            state.accrue(accrual.interest_amount)?;
            events.emit(ProjectionEvent::InterestAccrued {
                period,
                amount: accrual.interest_amount,
                days,
                accrued_total: state.accrued_interest,
            });

            if frequency.credits_after(month) {
                let accrued = state.accrued_interest;
                let amount = state.credit(rounding)?;
                trace!(year, month, %accrued, %amount, "interest credited");
                events.emit(ProjectionEvent::InterestCredited {
                    period,
                    accrued,
                    amount,
                    new_balance: state.balance,
                });
            }

            state.close_month();
            *slot = state.balance;
        }

        ledger.push_year(balances);
    }

    debug!(
        months = state.months_elapsed,
        credits = state.credit_count,
        balance = %state.balance,
        interest = %state.total_interest_credited,
        "projection finished"
    );

    Ok(Simulation {
        ledger,
        state,
        events,
    })
}
