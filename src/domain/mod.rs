// Domain layer - Forecast and chart models
pub mod error;
pub mod forecast;
pub mod hour;
pub mod series;
