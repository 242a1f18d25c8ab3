use actix_web::web;
use chrono::Utc;
use serde_json::json;

use crate::web::handlers::{agronomy_handlers, auth_handlers, monitoring_handlers, weather_handlers};

/// Liveness probe; deliberately does not touch the database.
async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(json!({
    "status": "online",
    "service": "Crop Health Monitoring System",
    "version": env!("CARGO_PKG_VERSION"),
    "timestamp": Utc::now().to_rfc3339(),
  }))
}

/// Route table; called from `main` to configure the Actix App. The dashboard
/// talks to these paths directly, so they live at the root rather than under
/// an /api prefix.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .route("/health", web::get().to(health_check_handler))
    // Authentication & profile
    .route("/register", web::post().to(auth_handlers::register_handler))
    .route("/login", web::post().to(auth_handlers::login_handler))
    .route("/logout", web::post().to(auth_handlers::logout_handler))
    .route("/session", web::get().to(auth_handlers::session_handler))
    .route("/profile", web::get().to(auth_handlers::profile_get_handler))
    .route("/profile", web::put().to(auth_handlers::profile_update_handler))
    // Simulated sensing & detection
    .route("/ndvi", web::post().to(monitoring_handlers::ndvi_handler))
    .route("/disease-detect", web::post().to(monitoring_handlers::disease_detect_handler))
    .route("/satellite", web::get().to(monitoring_handlers::satellite_handler))
    .route("/history", web::get().to(monitoring_handlers::history_handler))
    // Weather
    .route("/weather", web::get().to(weather_handlers::weather_handler))
    .route("/weather-forecast", web::get().to(weather_handlers::forecast_handler))
    // Agronomy reference data
    .route("/crop-database", web::get().to(agronomy_handlers::crop_database_handler))
    .route("/crop-recommendations", web::post().to(agronomy_handlers::crop_recommendations_handler))
    .route("/maintenance-guide/{crop_name}", web::get().to(agronomy_handlers::maintenance_guide_handler))
    .route("/soil-health", web::post().to(agronomy_handlers::soil_health_handler));
}
