// Application state for HTTP handlers
use crate::application::chart_service::ChartService;
use crate::application::forecast_service::ForecastService;

#[derive(Clone)]
pub struct AppState {
    pub forecast_service: ForecastService,
    pub chart_service: ChartService,
}
