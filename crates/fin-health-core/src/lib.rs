pub mod arithmetic;
pub mod error;
pub mod period;
pub mod types;

#[cfg(feature = "ratios")]
pub mod ratios;

#[cfg(feature = "scores")]
pub mod scores;

#[cfg(feature = "engine")]
pub mod engine;

#[cfg(feature = "justified")]
pub mod justified;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::MetricsError;
pub use period::{FinancialPeriod, RawRecord};
pub use types::*;

#[cfg(feature = "engine")]
pub use engine::{calculate_all_metrics, ExternalAssumptions, FinancialMetrics, MetricsInput};

#[cfg(feature = "parallel")]
pub use engine::calculate_batch;

/// Standard result type for all fin-health operations
pub type MetricsResult<T> = Result<T, MetricsError>;
