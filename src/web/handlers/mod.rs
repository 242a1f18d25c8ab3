pub mod agronomy_handlers;
pub mod auth_handlers;
pub mod monitoring_handlers;
pub mod weather_handlers;
