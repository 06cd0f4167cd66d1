use thiserror::Error;

/// Failures that cross the crate boundary.
///
/// An undefined metric (zero denominator, missing optional input) is never an
/// error; it is a `None` in the metric output.
#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Date error: {0}")]
    DateError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for MetricsError {
    fn from(e: serde_json::Error) -> Self {
        MetricsError::SerializationError(e.to_string())
    }
}
