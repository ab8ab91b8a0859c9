use serde::{Deserialize, Serialize};

use crate::decimal::Money;

/// balances of one 12-month cycle, one per month
pub type YearBalances = [Money; 12];

/// per-month balance history of one projection, grouped by year
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    years: Vec<YearBalances>,
}

impl Ledger {
    pub fn new() -> Self {
        Self { years: Vec::new() }
    }

    pub fn with_capacity(years: usize) -> Self {
        Self {
            years: Vec::with_capacity(years),
        }
    }

    pub fn push_year(&mut self, balances: YearBalances) {
        self.years.push(balances);
    }

    pub fn years(&self) -> &[YearBalances] {
        &self.years
    }

    pub fn year_count(&self) -> usize {
        self.years.len()
    }

    pub fn month_count(&self) -> usize {
        self.years.len() * 12
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// every balance in chronological order
    pub fn months(&self) -> impl Iterator<Item = Money> + '_ {
        self.years.iter().flat_map(|year| year.iter().copied())
    }

    /// balance after the last simulated month, None for an empty ledger
    pub fn final_balance(&self) -> Option<Money> {
        self.years.last().map(|year| year[11])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn year_of(start: i64) -> YearBalances {
        let mut year = [Money::ZERO; 12];
        for (i, slot) in year.iter_mut().enumerate() {
            *slot = Money::from_major(start + i as i64);
        }
        year
    }

    #[test]
    fn test_empty_ledger_has_no_final_balance() {
        let ledger = Ledger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.final_balance(), None);
        assert_eq!(ledger.months().count(), 0);
    }

    #[test]
    fn test_months_are_chronological() {
        let mut ledger = Ledger::with_capacity(2);
        ledger.push_year(year_of(0));
        ledger.push_year(year_of(12));

        assert_eq!(ledger.year_count(), 2);
        assert_eq!(ledger.month_count(), 24);

        let months: Vec<Money> = ledger.months().collect();
        assert_eq!(months.len(), 24);
        assert_eq!(months[0], Money::from_major(0));
        assert_eq!(months[23], Money::from_major(23));
        assert_eq!(ledger.final_balance(), Some(Money::from_major(23)));
    }
}
