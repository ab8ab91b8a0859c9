use serde::{Deserialize, Serialize};

use crate::calendar::MONTHS_PER_CYCLE;

/// how often accrued interest is paid into the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CreditingFrequency {
    #[default]
    Monthly,
    Annually,
}

impl CreditingFrequency {
    /// whether interest is credited after the given month of a cycle
    pub fn credits_after(&self, month_index: u32) -> bool {
        match self {
            CreditingFrequency::Monthly => true,
            CreditingFrequency::Annually => month_index == MONTHS_PER_CYCLE - 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_credits_every_month() {
        let credited = (0..12)
            .filter(|m| CreditingFrequency::Monthly.credits_after(*m))
            .count();
        assert_eq!(credited, 12);
    }

    #[test]
    fn test_annual_credits_only_at_cycle_end() {
        let credited: Vec<u32> = (0..12)
            .filter(|m| CreditingFrequency::Annually.credits_after(*m))
            .collect();
        assert_eq!(credited, vec![11]);
    }
}
