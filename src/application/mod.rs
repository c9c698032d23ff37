// Application layer - Use cases over the forecast repository
pub mod chart_service;
pub mod forecast_repository;
pub mod forecast_service;
pub mod search;
