// Main entry point - Dependency injection and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::application::chart_service::ChartService;
use crate::application::forecast_service::ForecastService;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::fixture_repository::FixtureRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    city_chart, city_forecast, health_check, list_cities, submit_search,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let app_config = load_app_config()?;

    // Create repository (infrastructure layer)
    let repository = Arc::new(FixtureRepository::new(&app_config.forecast.fixture_dir));

    // Create services (application layer)
    let forecast_service = ForecastService::new(repository.clone());
    let chart_service = ChartService::new(repository, app_config.chart.target_points);

    // Create application state
    let state = Arc::new(AppState {
        forecast_service,
        chart_service,
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/cities", get(list_cities))
        .route("/forecast/:city", get(city_forecast))
        .route("/forecast/:city/chart", get(city_chart))
        .route("/search", post(submit_search))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = app_config.server.bind.parse()?;
    tracing::info!("starting forecast-charts service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
