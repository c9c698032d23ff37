// Forecast service - Use case for listing cities and day summaries
use crate::application::forecast_repository::ForecastRepository;
use crate::domain::error::ForecastError;
use crate::domain::forecast::DayForecast;
use std::sync::Arc;

#[derive(Clone)]
pub struct ForecastService {
    repository: Arc<dyn ForecastRepository>,
}

impl ForecastService {
    pub fn new(repository: Arc<dyn ForecastRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_cities(&self) -> Result<Vec<String>, ForecastError> {
        self.repository.list_city_ids().await
    }

    /// Decode a city's daily-forecast document into day summaries,
    /// preserving the source's day order.
    pub async fn daily_forecast(&self, city: &str) -> Result<Vec<DayForecast>, ForecastError> {
        let json = self.repository.daily_forecast_json(city).await?;
        Ok(serde_json::from_str::<Vec<DayForecast>>(&json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct StubRepository {
        days_json: String,
    }

    #[async_trait]
    impl ForecastRepository for StubRepository {
        async fn list_city_ids(&self) -> Result<Vec<String>, ForecastError> {
            Ok(vec!["london".to_string(), "oslo".to_string()])
        }

        async fn daily_forecast_json(&self, city: &str) -> Result<String, ForecastError> {
            if city == "london" {
                Ok(self.days_json.clone())
            } else {
                Err(ForecastError::UnknownCity(city.to_string()))
            }
        }

        async fn hourly_records_json(&self, _city: &str, _day: usize) -> Result<String, ForecastError> {
            Ok("[]".to_string())
        }
    }

    fn service(days_json: &str) -> ForecastService {
        ForecastService::new(Arc::new(StubRepository { days_json: days_json.to_string() }))
    }

    #[tokio::test]
    async fn test_daily_forecast_decodes_summaries() {
        let json = r#"[
            {"date":"2026-08-28","condition":"Sunny","icon":"//img/113.png",
             "min_temp_c":11.0,"max_temp_c":21.0,"current_temp_c":18.5,
             "hour":[{"time":"00:00","temp_c":12.0}]},
            {"date":"2026-08-29","condition":"Rain","icon":"//img/296.png",
             "min_temp_c":9.0,"max_temp_c":15.0}
        ]"#;

        let days = service(json).daily_forecast("london").await.unwrap();

        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, "2026-08-28");
        assert_eq!(days[0].current_temp_c, Some(18.5));
        assert_eq!(days[1].current_temp_c, None);
        assert_eq!(days[1].condition, "Rain");
    }

    #[tokio::test]
    async fn test_unknown_city_propagates() {
        let result = service("[]").daily_forecast("atlantis").await;
        assert!(matches!(result, Err(ForecastError::UnknownCity(_))));
    }

    #[tokio::test]
    async fn test_malformed_document_is_rejected() {
        let result = service(r#"{"days":[]}"#).daily_forecast("london").await;
        assert!(matches!(result, Err(ForecastError::MalformedInput(_))));
    }
}
