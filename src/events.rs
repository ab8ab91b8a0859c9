use serde::{Deserialize, Serialize};

use crate::decimal::Money;

/// position of a simulated month within the horizon
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Period {
    pub year: u32,
    pub month: u32,
}

/// all events that can be emitted while projecting a balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ProjectionEvent {
    ContributionApplied {
        period: Period,
        amount: Money,
        new_balance: Money,
    },
    InterestAccrued {
        period: Period,
        amount: Money,
        days: u32,
        accrued_total: Money,
    },
    InterestCredited {
        period: Period,
        /// accrued interest before rounding
        accrued: Money,
        /// amount actually paid in, rounded once
        amount: Money,
        new_balance: Money,
    },
}

impl ProjectionEvent {
    pub fn period(&self) -> Period {
        match self {
            ProjectionEvent::ContributionApplied { period, .. }
            | ProjectionEvent::InterestAccrued { period, .. }
            | ProjectionEvent::InterestCredited { period, .. } => *period,
        }
    }
}

/// event store for collecting events during a simulation
#[derive(Debug, Default, Clone)]
pub struct EventStore {
    events: Vec<ProjectionEvent>,
}

impl EventStore {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: Vec::with_capacity(capacity),
        }
    }

    pub fn emit(&mut self, event: ProjectionEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[ProjectionEvent] {
        &self.events
    }

    /// credit events in chronological order
    pub fn credits(&self) -> impl Iterator<Item = &ProjectionEvent> {
        self.events
            .iter()
            .filter(|e| matches!(e, ProjectionEvent::InterestCredited { .. }))
    }

}
