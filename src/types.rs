use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{ProjectionError, Result};
use crate::interest::CreditingFrequency;
use crate::series::{ChartPoint, PeriodLabel};

/// inputs to a balance projection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionInput {
    pub principal: Money,
    /// added once at the start of every month
    pub monthly_contribution: Money,
    /// number of 12-month cycles simulated
    pub years: u32,
    /// e.g. 5.5 for 5.5%
    pub annual_rate_percent: Decimal,
    pub crediting_frequency: CreditingFrequency,
}

impl ProjectionInput {
    pub fn builder() -> ProjectionInputBuilder {
        ProjectionInputBuilder::new()
    }

    pub fn annual_rate(&self) -> Rate {
        Rate::from_percentage(self.annual_rate_percent)
    }

    pub fn months(&self) -> u32 {
        self.years.saturating_mul(12)
    }

    /// check a typed input before any simulation work
    pub fn validate(&self) -> Result<()> {
        if self.years == 0 {
            return Err(ProjectionError::EmptyHorizon);
        }
        if self.principal.is_negative() {
            return Err(ProjectionError::invalid_input("principal", "must not be negative"));
        }
        if self.monthly_contribution.is_negative() {
            return Err(ProjectionError::invalid_input(
                "monthly_contribution",
                "must not be negative",
            ));
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// builder for projection inputs
#[derive(Debug, Clone)]
pub struct ProjectionInputBuilder {
    principal: Money,
    monthly_contribution: Money,
    years: u32,
    annual_rate_percent: Decimal,
    crediting_frequency: CreditingFrequency,
}

impl Default for ProjectionInputBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectionInputBuilder {
    pub fn new() -> Self {
        Self {
            principal: Money::ZERO,
            monthly_contribution: Money::ZERO,
            years: 1,
            annual_rate_percent: Decimal::ZERO,
            crediting_frequency: CreditingFrequency::Monthly,
        }
    }

    pub fn principal(mut self, principal: Money) -> Self {
        self.principal = principal;
        self
    }

    pub fn monthly_contribution(mut self, contribution: Money) -> Self {
        self.monthly_contribution = contribution;
        self
    }

    pub fn years(mut self, years: u32) -> Self {
        self.years = years;
        self
    }

    pub fn annual_rate_percent(mut self, percent: Decimal) -> Self {
        self.annual_rate_percent = percent;
        self
    }

    pub fn crediting(mut self, frequency: CreditingFrequency) -> Self {
        self.crediting_frequency = frequency;
        self
    }

    pub fn build(self) -> Result<ProjectionInput> {
        let input = ProjectionInput {
            principal: self.principal,
            monthly_contribution: self.monthly_contribution,
            years: self.years,
            annual_rate_percent: self.annual_rate_percent,
            crediting_frequency: self.crediting_frequency,
        };
        input.validate()?;
        Ok(input)
    }
}

/// outcome of one projection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub final_balance: Money,
    pub total_interest_earned: Money,
    pub series: Vec<ChartPoint>,
    pub period_labels: Vec<PeriodLabel>,
}

impl ProjectionResult {
    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_builder_defaults_to_one_year_monthly() {
        let input = ProjectionInput::builder()
            .principal(Money::from_major(1_000))
            .build()
            .unwrap();

        assert_eq!(input.years, 1);
        assert_eq!(input.months(), 12);
        assert_eq!(input.crediting_frequency, CreditingFrequency::Monthly);
        assert!(input.annual_rate().is_zero());
    }

    #[test]
    fn test_builder_rejects_zero_years() {
        let result = ProjectionInput::builder().years(0).build();
        assert_eq!(result, Err(ProjectionError::EmptyHorizon));
    }

    #[test]
    fn test_negative_amounts_rejected() {
        let result = ProjectionInput::builder()
            .principal(Money::from_major(-5))
            .build();
        assert!(matches!(
            result,
            Err(ProjectionError::InvalidInput { field: "principal", .. })
        ));

        let result = ProjectionInput::builder()
            .monthly_contribution(Money::from_minor(-1))
            .build();
        assert!(matches!(
            result,
            Err(ProjectionError::InvalidInput { field: "monthly_contribution", .. })
        ));
    }

    #[test]
    fn test_input_json() {
        let json = r#"{
            "principal": "10000",
            "monthly_contribution": "100",
            "years": 2,
            "annual_rate_percent": "5.5",
            "crediting_frequency": "Annually"
        }"#;

        let input = ProjectionInput::from_json(json).unwrap();
        assert_eq!(input.principal, Money::from_major(10_000));
        assert_eq!(input.annual_rate_percent, dec!(5.5));
        assert_eq!(input.crediting_frequency, CreditingFrequency::Annually);
        assert_eq!(input.annual_rate().as_decimal(), dec!(0.055));
    }
}
