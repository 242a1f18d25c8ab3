//! Weather lookups, proxied to Open-Meteo through the weather service.

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use crate::errors::AppError;
use crate::services::weather;
use crate::state::AppState;

const MAX_FORECAST_DAYS: u8 = 16; // Open-Meteo's limit

#[derive(Deserialize, Debug)]
pub struct WeatherQuery {
  pub lat: f64,
  pub lon: f64,
}

#[derive(Deserialize, Debug)]
pub struct ForecastQuery {
  pub lat: f64,
  pub lon: f64,
  pub days: Option<u8>,
}

fn validate(lat: f64, lon: f64) -> Result<(), AppError> {
  if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
    return Err(AppError::Validation(format!("Invalid latitude: {}", lat)));
  }
  if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
    return Err(AppError::Validation(format!("Invalid longitude: {}", lon)));
  }
  Ok(())
}

#[instrument(name = "handler::weather", skip(state))]
pub async fn weather_handler(
  state: web::Data<AppState>,
  query: web::Query<WeatherQuery>,
) -> Result<HttpResponse, AppError> {
  validate(query.lat, query.lon)?;
  let report = weather::current_report(&state.http_client, query.lat, query.lon).await?;
  Ok(HttpResponse::Ok().json(json!({
    "status": "success",
    "current": report.current,
    "daily": report.daily,
  })))
}

#[instrument(name = "handler::weather_forecast", skip(state))]
pub async fn forecast_handler(
  state: web::Data<AppState>,
  query: web::Query<ForecastQuery>,
) -> Result<HttpResponse, AppError> {
  validate(query.lat, query.lon)?;
  let days = query.days.unwrap_or(7).clamp(1, MAX_FORECAST_DAYS);
  let forecast = weather::daily_forecast(&state.http_client, query.lat, query.lon, days).await?;
  Ok(HttpResponse::Ok().json(json!({"status": "success", "forecast": forecast})))
}
