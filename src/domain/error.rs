// Error taxonomy for the forecast chart pipeline
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ForecastError {
    /// The hourly payload was not a JSON array of `{time, temp_c}` objects,
    /// or a forecast document did not match the expected shape.
    #[error("malformed forecast payload: {0}")]
    MalformedInput(#[from] serde_json::Error),

    /// A chart was requested with a target point count of zero.
    #[error("chart target point count must be positive")]
    InvalidTargetCount,

    #[error("unknown city: {0}")]
    UnknownCity(String),

    /// The requested day carries no hourly records, so no chart exists.
    #[error("no hourly data for day {0}")]
    NoHourlyData(usize),

    #[error("search query is empty")]
    EmptyQuery,

    /// Failure in the underlying data source (I/O, not data shape).
    #[error(transparent)]
    Source(#[from] anyhow::Error),
}
