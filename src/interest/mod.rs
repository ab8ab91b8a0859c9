pub mod accrual;
pub mod compound;
pub mod crediting;

pub use accrual::{AccrualEngine, AccrualStrategy, MonthlyAccrual};
pub use compound::annuity_due_future_value;
pub use crediting::CreditingFrequency;
