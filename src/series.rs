use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::calendar::ProjectionCalendar;
use crate::decimal::Money;
use crate::errors::{ProjectionError, Result};
use crate::ledger::{Ledger, YearBalances};
use crate::rounding::RoundingPolicy;

/// how a year of monthly balances collapses to one chart value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PeriodReducer {
    /// largest balance seen during the year
    #[default]
    Max,
    /// balance at the end of the year
    Last,
}

impl PeriodReducer {
    pub fn reduce(&self, year: &YearBalances) -> Money {
        match self {
            PeriodReducer::Max => year.iter().copied().fold(year[0], Money::max),
            PeriodReducer::Last => year[11],
        }
    }
}

/// what one chart point represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeriesResolution {
    Monthly,
    Yearly,
}

impl SeriesResolution {
    /// monthly points for a single year, yearly points beyond that
    pub fn for_ledger(ledger: &Ledger) -> Self {
        if ledger.year_count() > 1 {
            SeriesResolution::Yearly
        } else {
            SeriesResolution::Monthly
        }
    }
}

/// display-ready sample of the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub index: u32,
    pub value: Money,
}

/// calendar period a chart point stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodLabel {
    pub index: u32,
    pub starts_on: NaiveDate,
    pub resolution: SeriesResolution,
}

impl fmt::Display for PeriodLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.resolution {
            SeriesResolution::Monthly => write!(f, "{}", self.starts_on.format("%Y-%m")),
            SeriesResolution::Yearly => write!(f, "{}", self.starts_on.format("%Y")),
        }
    }
}

/// compress a ledger into chart points
///
/// Values are rounded here, independently of the unrounded ledger.
pub fn reduce(ledger: &Ledger, reducer: PeriodReducer, rounding: &RoundingPolicy) -> Vec<ChartPoint> {
    let values: Vec<Money> = match SeriesResolution::for_ledger(ledger) {
        SeriesResolution::Yearly => ledger.years().iter().map(|y| reducer.reduce(y)).collect(),
        SeriesResolution::Monthly => ledger.months().collect(),
    };

    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| ChartPoint {
            index: index as u32,
            value: rounding.round(value),
        })
        .collect()
}

/// labels matching the points produced by [`reduce`] for the same ledger
pub fn period_labels(ledger: &Ledger, calendar: &ProjectionCalendar) -> Result<Vec<PeriodLabel>> {
    let resolution = SeriesResolution::for_ledger(ledger);

    let periods: Vec<(u32, u32)> = match resolution {
        SeriesResolution::Yearly => (0..ledger.year_count() as u32).map(|y| (0, y)).collect(),
        SeriesResolution::Monthly => (0..ledger.month_count() as u32).map(|m| (m, 0)).collect(),
    };

    periods
        .into_iter()
        .enumerate()
        .map(|(index, (month, year))| {
            let starts_on = calendar.period_start(month, year).ok_or_else(|| {
                ProjectionError::invalid_input("years", "horizon exceeds the supported calendar range")
            })?;

            Ok(PeriodLabel {
                index: index as u32,
                starts_on,
                resolution,
            })
        })
        .collect()
}
