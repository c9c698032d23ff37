// HTTP request handlers
use crate::application::search;
use crate::domain::error::ForecastError;
use crate::domain::forecast::DayForecast;
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Deserialize)]
pub struct ChartQuery {
    pub day: Option<usize>,
    pub points: Option<usize>,
}

#[derive(Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub query: String,
}

/// One row of the day list as the client renders it.
#[derive(Serialize)]
pub struct DaySummary {
    pub date: String,
    pub condition: String,
    pub icon: String,
    pub temperature: String,
    pub min_temp_c: f64,
    pub max_temp_c: f64,
}

impl From<DayForecast> for DaySummary {
    fn from(day: DayForecast) -> Self {
        let temperature = day.temperature_label();
        Self {
            date: day.date,
            condition: day.condition,
            icon: day.icon,
            temperature,
            min_temp_c: day.min_temp_c,
            max_temp_c: day.max_temp_c,
        }
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// List all cities with forecast data
pub async fn list_cities(State(state): State<Arc<AppState>>) -> Response {
    match state.forecast_service.list_cities().await {
        Ok(cities) => Json(cities).into_response(),
        Err(e) => error_response(e),
    }
}

/// Day summaries for one city
pub async fn city_forecast(
    Path(city): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Response {
    match state.forecast_service.daily_forecast(&city).await {
        Ok(days) => {
            let summaries: Vec<DaySummary> = days.into_iter().map(DaySummary::from).collect();
            Json(summaries).into_response()
        }
        Err(e) => error_response(e),
    }
}

/// Downsampled temperature series for one forecast day
pub async fn city_chart(
    Path(city): Path<String>,
    Query(query): Query<ChartQuery>,
    State(state): State<Arc<AppState>>,
) -> Response {
    let day = query.day.unwrap_or(0);
    match state
        .chart_service
        .temperature_series(&city, day, query.points)
        .await
    {
        Ok(series) => Json(series).into_response(),
        Err(e) => error_response(e),
    }
}

/// Accept a city-search submission
pub async fn submit_search(Json(request): Json<SearchRequest>) -> Response {
    match search::submit(&request.query) {
        Ok(query) => Json(SearchResponse { query }).into_response(),
        Err(e) => error_response(e),
    }
}

fn error_response(error: ForecastError) -> Response {
    let status = match &error {
        ForecastError::UnknownCity(_) | ForecastError::NoHourlyData(_) => StatusCode::NOT_FOUND,
        ForecastError::MalformedInput(_) => StatusCode::BAD_GATEWAY,
        ForecastError::InvalidTargetCount => StatusCode::BAD_REQUEST,
        ForecastError::EmptyQuery => StatusCode::UNPROCESSABLE_ENTITY,
        ForecastError::Source(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status.is_server_error() {
        tracing::error!("request failed: {error}");
    } else {
        tracing::debug!("request rejected: {error}");
    }

    (status, error.to_string()).into_response()
}
