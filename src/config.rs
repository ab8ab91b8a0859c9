use serde::{Deserialize, Serialize};

use crate::calendar::StartPolicy;
use crate::errors::{ProjectionError, Result};
use crate::interest::AccrualStrategy;
use crate::rounding::RoundingPolicy;
use crate::series::PeriodReducer;
use crate::validation::Limits;

/// projection engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    pub accrual: AccrualStrategy,
    pub start_policy: StartPolicy,
    pub rounding: RoundingPolicy,
    pub reducer: PeriodReducer,
    pub limits: Option<Limits>,
    /// clamp raw input to `limits` before validating it
    pub clamp_inputs: bool,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self::banking()
    }
}

impl ProjectionConfig {
    /// daily accrual over actual month lengths, starting next month
    pub fn banking() -> Self {
        Self {
            accrual: AccrualStrategy::DailyActual,
            start_policy: StartPolicy::NextMonth,
            rounding: RoundingPolicy::currency(),
            reducer: PeriodReducer::Max,
            limits: None,
            clamp_inputs: false,
        }
    }

    /// flat annual / 12 rate, calendar only used for labels
    pub fn nominal() -> Self {
        Self {
            accrual: AccrualStrategy::FlatMonthly,
            start_policy: StartPolicy::Immediate,
            ..Self::banking()
        }
    }

    /// form-facing configuration that clamps input to ui ceilings
    pub fn with_ui_limits(mut self) -> Self {
        self.limits = Some(Limits::ui_defaults());
        self.clamp_inputs = true;
        self
    }

    pub fn with_accrual(mut self, accrual: AccrualStrategy) -> Self {
        self.accrual = accrual;
        self
    }

    pub fn with_start_policy(mut self, start_policy: StartPolicy) -> Self {
        self.start_policy = start_policy;
        self
    }

    pub fn with_reducer(mut self, reducer: PeriodReducer) -> Self {
        self.reducer = reducer;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.rounding.validate()?;

        match (&self.limits, self.clamp_inputs) {
            (Some(limits), _) => limits.validate(),
            (None, true) => Err(ProjectionError::InvalidConfiguration {
                message: "clamp_inputs requires limits".to_string(),
            }),
            (None, false) => Ok(()),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: ProjectionConfig =
            serde_json::from_str(json).map_err(|e| ProjectionError::InvalidConfiguration {
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rounding::RoundingMode;

    #[test]
    fn test_presets() {
        let banking = ProjectionConfig::banking();
        assert_eq!(banking.accrual, AccrualStrategy::DailyActual);
        assert_eq!(banking.start_policy, StartPolicy::NextMonth);
        assert_eq!(banking.rounding.mode, RoundingMode::HalfUp);
        assert!(!banking.clamp_inputs);

        let nominal = ProjectionConfig::nominal();
        assert_eq!(nominal.accrual, AccrualStrategy::FlatMonthly);
        assert_eq!(nominal.start_policy, StartPolicy::Immediate);
        assert_eq!(nominal.rounding.scale, 2);

        assert_eq!(ProjectionConfig::default(), banking);
    }

    #[test]
    fn test_ui_limits_toggle() {
        let config = ProjectionConfig::nominal().with_ui_limits();
        assert!(config.clamp_inputs);
        assert_eq!(config.limits, Some(Limits::ui_defaults()));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_clamp_without_limits_is_invalid() {
        let config = ProjectionConfig {
            clamp_inputs: true,
            ..ProjectionConfig::banking()
        };
        assert!(matches!(
            config.validate(),
            Err(ProjectionError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_json_roundtrip_through_file_format() {
        let json = ProjectionConfig::banking().with_ui_limits().to_json_pretty().unwrap();
        let parsed = ProjectionConfig::from_json(&json).unwrap();
        assert_eq!(parsed, ProjectionConfig::banking().with_ui_limits());
    }

    #[test]
    fn test_json_errors_are_configuration_errors() {
        let err = ProjectionConfig::from_json("{\"accrual\": \"Weekly\"}").unwrap_err();
        assert!(matches!(err, ProjectionError::InvalidConfiguration { .. }));
    }
}
