// Chart service - Use case for building plottable temperature series
use crate::application::forecast_repository::ForecastRepository;
use crate::domain::error::ForecastError;
use crate::domain::hour::parse_hours;
use crate::domain::series::{build_series, downsample, Point};
use std::sync::Arc;

#[derive(Clone)]
pub struct ChartService {
    repository: Arc<dyn ForecastRepository>,
    target_points: usize,
}

impl ChartService {
    pub fn new(repository: Arc<dyn ForecastRepository>, target_points: usize) -> Self {
        Self {
            repository,
            target_points,
        }
    }

    /// Build the downsampled temperature series for one forecast day.
    ///
    /// Runs the full pipeline: fetch the raw hourly JSON, decode it into
    /// hourly records, map them to (index, temperature) points, then reduce
    /// to `target_points` (or the configured default) axis points.
    pub async fn temperature_series(
        &self,
        city: &str,
        day: usize,
        target_points: Option<usize>,
    ) -> Result<Vec<Point>, ForecastError> {
        let json = self.repository.hourly_records_json(city, day).await?;
        let records = parse_hours(&json)?;

        // A day without hourly records has no chart (mirrors the day list,
        // where such entries are not selectable).
        if records.is_empty() {
            return Err(ForecastError::NoHourlyData(day));
        }

        tracing::debug!("building chart for {city} day {day} from {} records", records.len());

        let series = build_series(&records);
        downsample(&series, target_points.unwrap_or(self.target_points))
    }
}
