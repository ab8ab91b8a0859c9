use chrono::{Datelike, NaiveDate};
use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};

/// gregorian month lengths starting january, february in a common year
const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// months in one simulated cycle
pub const MONTHS_PER_CYCLE: u32 = 12;

/// check if year is a leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// days in a gregorian month, `month0` is 0 for january
pub fn days_in_gregorian_month(month0: u32, year: i32) -> u32 {
    if month0 == 1 && is_leap_year(year) {
        29
    } else {
        DAYS_IN_MONTH[month0 as usize]
    }
}

/// where the first simulated month sits relative to "today"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StartPolicy {
    /// the current calendar month is month 0
    Immediate,
    /// the first day of the next calendar month, skipping the partial current month
    NextMonth,
}

/// maps simulated (month index, year offset) pairs onto the gregorian calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionCalendar {
    policy: StartPolicy,
    start_year: i32,
    start_month0: u32,
}

impl ProjectionCalendar {
    pub fn new(policy: StartPolicy, today: NaiveDate) -> Self {
        let year = today.year();
        let month0 = today.month0();

        let (start_year, start_month0) = match policy {
            StartPolicy::Immediate => (year, month0),
            StartPolicy::NextMonth if month0 == 11 => (year + 1, 0),
            StartPolicy::NextMonth => (year, month0 + 1),
        };

        Self {
            policy,
            start_year,
            start_month0,
        }
    }

    /// resolve "today" from a time provider
    pub fn from_time_provider(policy: StartPolicy, time_provider: &SafeTimeProvider) -> Self {
        Self::new(policy, time_provider.now().date_naive())
    }

    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    /// 0 for january
    pub fn start_month0(&self) -> u32 {
        self.start_month0
    }

    /// calendar (year, month0) of a simulated month
    ///
    /// The cycle is rotated by the start month, so a february that follows a
    /// march-or-later start lands in the following calendar year.
    pub fn locate(&self, month_index: u32, year_offset: u32) -> (i32, u32) {
        debug_assert!(month_index < MONTHS_PER_CYCLE, "month index out of range: {month_index}");

        let absolute = self.start_month0 + month_index;
        let year = self.start_year + year_offset as i32 + (absolute / MONTHS_PER_CYCLE) as i32;
        (year, absolute % MONTHS_PER_CYCLE)
    }

    /// day count of a simulated month
    ///
    /// Immediate start takes february's length from `start_year + year_offset`.
    /// Next-month start takes it from the calendar year the rotated february
    /// falls in.
    pub fn days_in_month(&self, month_index: u32, year_offset: u32) -> u32 {
        let (calendar_year, month0) = self.locate(month_index, year_offset);
        let leap_lookup_year = match self.policy {
            StartPolicy::Immediate => self.start_year + year_offset as i32,
            StartPolicy::NextMonth => calendar_year,
        };
        days_in_gregorian_month(month0, leap_lookup_year)
    }

    /// first day of a simulated month, None past chrono's supported range
    pub fn period_start(&self, month_index: u32, year_offset: u32) -> Option<NaiveDate> {
        let (year, month0) = self.locate(month_index, year_offset);
        NaiveDate::from_ymd_opt(year, month0 + 1, 1)
    }
}
