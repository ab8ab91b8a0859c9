use chrono::NaiveDate;
use hourglass_rs::SafeTimeProvider;
use tracing::{debug, warn};

use crate::calendar::ProjectionCalendar;
use crate::config::ProjectionConfig;
use crate::decimal::Money;
use crate::errors::Result;
use crate::interest::{annuity_due_future_value, AccrualStrategy, CreditingFrequency};
use crate::series;
use crate::simulation::{simulate, Simulation};
use crate::types::{ProjectionInput, ProjectionResult};
use crate::validation::{validate, RawProjectionInput};

/// balance projection facade
///
/// Holds only immutable configuration, so one projector can serve any number
/// of concurrent callers. "Today" is always passed in.
#[derive(Debug, Clone)]
pub struct Projector {
    config: ProjectionConfig,
}

impl Default for Projector {
    fn default() -> Self {
        Self {
            config: ProjectionConfig::default(),
        }
    }
}

impl Projector {
    pub fn new(config: ProjectionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    pub fn calendar(&self, today: NaiveDate) -> ProjectionCalendar {
        ProjectionCalendar::new(self.config.start_policy, today)
    }

    /// run the simulation and keep the full ledger and event history
    pub fn simulate(&self, input: &ProjectionInput, today: NaiveDate) -> Result<Simulation> {
        simulate(
            input,
            self.config.accrual,
            &self.calendar(today),
            &self.config.rounding,
        )
    }

    /// project final balance, interest earned and chart series
    pub fn calculate(&self, input: &ProjectionInput, today: NaiveDate) -> Result<ProjectionResult> {
        input.validate()?;

        let calendar = self.calendar(today);
        let simulation = simulate(input, self.config.accrual, &calendar, &self.config.rounding)?;

        let final_balance = simulation.final_balance()?;
        let series = series::reduce(&simulation.ledger, self.config.reducer, &self.config.rounding);
        let period_labels = series::period_labels(&simulation.ledger, &calendar)?;

        let result = ProjectionResult {
            final_balance: self.config.rounding.round(final_balance),
            total_interest_earned: self.config.rounding.round(simulation.total_interest_earned()),
            series,
            period_labels,
        };

        debug!(
            final_balance = %result.final_balance,
            interest = %result.total_interest_earned,
            points = result.series.len(),
            "projection calculated"
        );

        Ok(result)
    }

    /// calculate with "today" taken from a time provider
    pub fn calculate_with_time(
        &self,
        input: &ProjectionInput,
        time_provider: &SafeTimeProvider,
    ) -> Result<ProjectionResult> {
        self.calculate(input, time_provider.now().date_naive())
    }

    /// clamp (when configured), validate and calculate raw form input
    pub fn calculate_raw(&self, raw: &RawProjectionInput, today: NaiveDate) -> Result<ProjectionResult> {
        let raw = match (&self.config.limits, self.config.clamp_inputs) {
            (Some(limits), true) => {
                let clamped = limits.apply(raw);
                if clamped != *raw {
                    warn!(?raw, ?clamped, "input clamped to limits");
                }
                clamped
            }
            _ => *raw,
        };

        let input = validate(&raw)?;
        self.calculate(&input, today)
    }

    /// closed-form estimate of the final balance, flat-monthly monthly-credited inputs only
    ///
    /// The estimate never rounds credits, so it differs from
    /// [`Projector::calculate`] by at most a few cents.
    pub fn estimate_final_balance(&self, input: &ProjectionInput) -> Result<Option<Money>> {
        input.validate()?;

        if self.config.accrual != AccrualStrategy::FlatMonthly
            || input.crediting_frequency != CreditingFrequency::Monthly
        {
            return Ok(None);
        }

        let monthly_rate = self.config.accrual.periodic_rate(input.annual_rate());
        let estimate = annuity_due_future_value(
            input.principal,
            input.monthly_contribution,
            monthly_rate,
            input.months(),
        )?;
        Ok(Some(self.config.rounding.round(estimate)))
    }
}
