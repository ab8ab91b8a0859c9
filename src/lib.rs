pub mod calendar;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod events;
pub mod interest;
pub mod ledger;
pub mod projection;
pub mod rounding;
pub mod series;
pub mod simulation;
pub mod state;
pub mod types;
pub mod validation;

// re-export key types
pub use calendar::{is_leap_year, ProjectionCalendar, StartPolicy};
pub use config::ProjectionConfig;
pub use decimal::{Money, Rate};
pub use errors::{ProjectionError, Result};
pub use events::{EventStore, Period, ProjectionEvent};
pub use interest::{AccrualEngine, AccrualStrategy, CreditingFrequency};
pub use ledger::Ledger;
pub use projection::Projector;
pub use rounding::{RoundingMode, RoundingPolicy};
pub use series::{ChartPoint, PeriodLabel, PeriodReducer, SeriesResolution};
pub use simulation::Simulation;
pub use state::SaverState;
pub use types::{ProjectionInput, ProjectionInputBuilder, ProjectionResult};
pub use validation::{clamp, validate, Limits, RawProjectionInput};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
