//! Crop reference endpoints: database, recommendations, guides, soil health.
//!
//! All of these serve static reference data and deliberately take no
//! application state, which also keeps them trivially testable.

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tracing::instrument;

use crate::errors::AppError;
use crate::services::agronomy;

#[derive(Deserialize, Debug)]
pub struct CropDatabaseQuery {
  pub season: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct RecommendationPayload {
  pub latitude: f64,
  pub longitude: f64,
}

#[derive(Deserialize, Debug)]
pub struct SoilHealthPayload {
  pub ph_value: f64,
}

#[instrument(name = "handler::crop_database")]
pub async fn crop_database_handler(query: web::Query<CropDatabaseQuery>) -> Result<HttpResponse, AppError> {
  let crops = agronomy::crop_database(query.season.as_deref());

  // Keyed-by-name object, matching the dashboard's expectations.
  let mut by_name = Map::new();
  for crop in crops {
    by_name.insert(crop.name.to_string(), serde_json::to_value(&crop).unwrap_or(Value::Null));
  }

  Ok(HttpResponse::Ok().json(json!({"status": "success", "crops": by_name})))
}

#[instrument(name = "handler::crop_recommendations", skip(payload))]
pub async fn crop_recommendations_handler(
  payload: web::Json<RecommendationPayload>,
) -> Result<HttpResponse, AppError> {
  if !payload.latitude.is_finite() || !(-90.0..=90.0).contains(&payload.latitude) {
    return Err(AppError::Validation(format!("Invalid latitude: {}", payload.latitude)));
  }

  let (suitable_crops, recommendation) = agronomy::recommended_crops(payload.latitude);

  Ok(HttpResponse::Ok().json(json!({
    "status": "success",
    "location": {"latitude": payload.latitude, "longitude": payload.longitude},
    "suitable_crops": suitable_crops,
    "recommendation": recommendation,
  })))
}

#[instrument(name = "handler::maintenance_guide")]
pub async fn maintenance_guide_handler(path: web::Path<String>) -> Result<HttpResponse, AppError> {
  let crop_name = path.into_inner();
  match agronomy::maintenance_guide(&crop_name) {
    Some(guide) => Ok(HttpResponse::Ok().json(json!({"status": "success", "guide": guide}))),
    None => Err(AppError::NotFound(format!("No guide found for {}", crop_name))),
  }
}

#[instrument(name = "handler::soil_health", skip(payload))]
pub async fn soil_health_handler(payload: web::Json<SoilHealthPayload>) -> Result<HttpResponse, AppError> {
  if !payload.ph_value.is_finite() || !(0.0..=14.0).contains(&payload.ph_value) {
    return Err(AppError::Validation(format!(
      "ph_value must be between 0 and 14, got {}",
      payload.ph_value
    )));
  }

  let recommendations = agronomy::soil_health(payload.ph_value);
  Ok(HttpResponse::Ok().json(json!({"status": "success", "recommendations": recommendations})))
}
