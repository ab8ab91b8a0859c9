use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProjectionError {
    #[error("invalid input for {field}: {reason}")]
    InvalidInput {
        field: &'static str,
        reason: String,
    },

    #[error("empty horizon: at least one year must be projected")]
    EmptyHorizon,

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("arithmetic overflow during {operation}: projection exceeds decimal range")]
    Overflow {
        operation: &'static str,
    },
}

impl ProjectionError {
    pub fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        ProjectionError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    pub fn overflow(operation: &'static str) -> Self {
        ProjectionError::Overflow { operation }
    }

    /// true for every rejection of caller input, including an empty horizon
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            ProjectionError::InvalidInput { .. } | ProjectionError::EmptyHorizon
        )
    }
}

pub type Result<T> = std::result::Result<T, ProjectionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_horizon_is_invalid_input() {
        assert!(ProjectionError::EmptyHorizon.is_invalid_input());
        assert!(ProjectionError::invalid_input("principal", "not finite").is_invalid_input());

        let config = ProjectionError::InvalidConfiguration {
            message: "bad".to_string(),
        };
        assert!(!config.is_invalid_input());
        assert!(!ProjectionError::overflow("contribution").is_invalid_input());
    }

    #[test]
    fn test_error_messages() {
        let err = ProjectionError::invalid_input("years", "must not be negative");
        assert_eq!(err.to_string(), "invalid input for years: must not be negative");

        let err = ProjectionError::overflow("interest credit");
        assert_eq!(
            err.to_string(),
            "arithmetic overflow during interest credit: projection exceeds decimal range"
        );
    }
}
