// Fixture-backed forecast repository
//
// Stands in for the real weather-API data layer: each city is a single
// `<city>.json` document in the fixture directory, shaped as an array of
// day objects whose `hour` field carries the raw hourly records.
use crate::application::forecast_repository::ForecastRepository;
use crate::domain::error::ForecastError;
use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FixtureRepository {
    root: PathBuf,
}

/// The slice of a fixture day the repository itself needs. The hourly
/// records stay opaque JSON so they reach the parser byte-faithful.
#[derive(Debug, Deserialize)]
struct FixtureDay {
    #[serde(default)]
    hour: Vec<serde_json::Value>,
}

impl FixtureRepository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn is_valid_city_id(city: &str) -> bool {
        !city.is_empty()
            && city
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    }

    async fn load_document(&self, city: &str) -> Result<String, ForecastError> {
        // City ids come straight from the request path; anything that
        // could escape the fixture directory is treated as unknown.
        if !Self::is_valid_city_id(city) {
            return Err(ForecastError::UnknownCity(city.to_string()));
        }

        let path = self.root.join(format!("{city}.json"));
        match tokio::fs::read_to_string(&path).await {
            Ok(document) => Ok(document),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(ForecastError::UnknownCity(city.to_string()))
            }
            Err(e) => Err(ForecastError::Source(
                anyhow::Error::new(e).context(format!("failed to read {}", path.display())),
            )),
        }
    }
}

#[async_trait]
impl ForecastRepository for FixtureRepository {
    async fn list_city_ids(&self) -> Result<Vec<String>, ForecastError> {
        let mut entries = tokio::fs::read_dir(&self.root)
            .await
            .with_context(|| format!("failed to list {}", self.root.display()))
            .map_err(ForecastError::Source)?;

        let mut cities = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .context("failed to read fixture directory entry")
            .map_err(ForecastError::Source)?
        {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    cities.push(stem.to_string());
                }
            }
        }

        cities.sort();
        tracing::debug!("found {} forecast fixtures", cities.len());
        Ok(cities)
    }

    async fn daily_forecast_json(&self, city: &str) -> Result<String, ForecastError> {
        self.load_document(city).await
    }

    async fn hourly_records_json(&self, city: &str, day: usize) -> Result<String, ForecastError> {
        let document = self.load_document(city).await?;
        let days: Vec<FixtureDay> = serde_json::from_str(&document)?;

        let fixture_day = days
            .get(day)
            .ok_or(ForecastError::NoHourlyData(day))?;

        Ok(serde_json::to_string(&fixture_day.hour)?)
    }
}
