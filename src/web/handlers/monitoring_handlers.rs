//! Simulated sensing and disease detection endpoints, plus record history.

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{CropHealthRecord, DiseaseRecord};
use crate::services::{alerts, classifier, sensing};
use crate::state::AppState;

#[derive(Deserialize, Debug)]
pub struct NdviPayload {
  pub latitude: f64,
  pub longitude: f64,
  pub email: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct DiseaseDetectPayload {
  pub image: String,
  pub email: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct CoordinateQuery {
  pub lat: f64,
  pub lon: f64,
}

#[derive(Deserialize, Debug)]
pub struct HistoryQuery {
  pub email: String,
}

fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), AppError> {
  if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
    return Err(AppError::Validation(format!("Invalid latitude: {}", latitude)));
  }
  if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
    return Err(AppError::Validation(format!("Invalid longitude: {}", longitude)));
  }
  Ok(())
}

/// Records only reference existing users; anything else is computed but not stored.
async fn user_exists(state: &AppState, email: &str) -> Result<bool, AppError> {
  let row: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM users WHERE email = $1")
    .bind(email)
    .fetch_optional(&state.db_pool)
    .await?;
  Ok(row.is_some())
}

#[instrument(name = "handler::ndvi", skip(state, payload))]
pub async fn ndvi_handler(
  state: web::Data<AppState>,
  payload: web::Json<NdviPayload>,
) -> Result<HttpResponse, AppError> {
  validate_coordinates(payload.latitude, payload.longitude)?;

  let ndvi = sensing::simulated_ndvi(payload.latitude, payload.longitude, state.config.sensing_seed);
  let health = sensing::health_assessment(ndvi);

  let known_user = match payload.email.as_deref() {
    Some(email) => user_exists(&state, email).await?,
    None => false,
  };

  if known_user {
    let email = payload.email.as_deref().unwrap_or_default();
    let insert = sqlx::query(
      "INSERT INTO crop_health_records (id, email, latitude, longitude, ndvi, health_status) \
       VALUES ($1, $2, $3, $4, $5, $6)",
    )
    .bind(Uuid::new_v4())
    .bind(email)
    .bind(payload.latitude)
    .bind(payload.longitude)
    .bind(ndvi)
    .bind(health.score)
    .execute(&state.db_pool)
    .await;
    if let Err(e) = insert {
      // A failed write must not fail the health check itself.
      warn!(error = %e, "Could not save crop health record.");
    }

    if ndvi < sensing::ALERT_NDVI {
      if let Err(e) = alerts::send_health_alert(&state.config, health.score, ndvi, email).await {
        warn!(error = %e, "Could not send health alert.");
      }
    }
  }

  info!(ndvi, score = health.score, "Crop health check completed.");

  Ok(HttpResponse::Ok().json(json!({
    "status": "success",
    "ndvi": ndvi,
    "latitude": payload.latitude,
    "longitude": payload.longitude,
    "health": health,
  })))
}

#[instrument(name = "handler::disease_detect", skip(state, payload))]
pub async fn disease_detect_handler(
  state: web::Data<AppState>,
  payload: web::Json<DiseaseDetectPayload>,
) -> Result<HttpResponse, AppError> {
  let image = classifier::decode_image(&payload.image)?;
  let prediction = classifier::classify(&image, state.config.sensing_seed);

  let known_user = match payload.email.as_deref() {
    Some(email) => user_exists(&state, email).await?,
    None => false,
  };

  if known_user {
    let email = payload.email.as_deref().unwrap_or_default();
    let insert = sqlx::query(
      "INSERT INTO disease_records (id, email, disease, confidence) VALUES ($1, $2, $3, $4)",
    )
    .bind(Uuid::new_v4())
    .bind(email)
    .bind(prediction.disease)
    .bind(prediction.confidence)
    .execute(&state.db_pool)
    .await;
    if let Err(e) = insert {
      warn!(error = %e, "Could not save disease record.");
    }

    if prediction.disease != "Healthy" {
      if let Err(e) =
        alerts::send_disease_alert(&state.config, prediction.disease, prediction.confidence, email).await
      {
        warn!(error = %e, "Could not send disease alert.");
      }
    }
  }

  info!(disease = prediction.disease, confidence = prediction.confidence, "Disease detection completed.");

  Ok(HttpResponse::Ok().json(json!({
    "status": "success",
    "disease": prediction.disease,
    "confidence": prediction.confidence,
    "recommendations": prediction.recommendations,
  })))
}

#[instrument(name = "handler::satellite", skip(state))]
pub async fn satellite_handler(
  state: web::Data<AppState>,
  query: web::Query<CoordinateQuery>,
) -> Result<HttpResponse, AppError> {
  validate_coordinates(query.lat, query.lon)?;
  let imagery = sensing::band_readings(query.lat, query.lon, state.config.sensing_seed);
  Ok(HttpResponse::Ok().json(json!({"status": "success", "imagery": imagery})))
}

/// Full history for a user's email, newest first. A user with no records gets
/// empty lists, never an error.
#[instrument(name = "handler::history", skip(state), fields(email = %query.email))]
pub async fn history_handler(
  state: web::Data<AppState>,
  query: web::Query<HistoryQuery>,
) -> Result<HttpResponse, AppError> {
  if query.email.trim().is_empty() {
    return Err(AppError::Validation("Missing required parameter: email".to_string()));
  }

  let crop_data: Vec<CropHealthRecord> =
    sqlx::query_as("SELECT * FROM crop_health_records WHERE email = $1 ORDER BY recorded_at DESC")
      .bind(&query.email)
      .fetch_all(&state.db_pool)
      .await?;

  let disease_records: Vec<DiseaseRecord> =
    sqlx::query_as("SELECT * FROM disease_records WHERE email = $1 ORDER BY recorded_at DESC")
      .bind(&query.email)
      .fetch_all(&state.db_pool)
      .await?;

  Ok(HttpResponse::Ok().json(json!({
    "status": "success",
    "crop_data": crop_data,
    "disease_records": disease_records,
  })))
}
