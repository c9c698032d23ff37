// Repository trait for forecast data access
use crate::domain::error::ForecastError;
use async_trait::async_trait;

/// The external data layer that supplies forecast JSON. Fetching and
/// caching strategy belong to the implementation, not to the core.
#[async_trait]
pub trait ForecastRepository: Send + Sync {
    /// List all city ids the source has forecasts for.
    async fn list_city_ids(&self) -> Result<Vec<String>, ForecastError>;

    /// The city's daily-forecast document: a JSON array of day objects.
    async fn daily_forecast_json(&self, city: &str) -> Result<String, ForecastError>;

    /// One day's hourly records as a raw JSON array of
    /// `{time, temp_c}` objects, exactly as supplied by the source.
    async fn hourly_records_json(&self, city: &str, day: usize) -> Result<String, ForecastError>;
}
