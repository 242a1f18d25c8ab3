use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// One simulated satellite health check. Append-only.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CropHealthRecord {
  pub id: Uuid,
  #[serde(skip_serializing)]
  pub email: String,
  pub latitude: f64,
  pub longitude: f64,
  pub ndvi: f64,
  pub health_status: String,
  pub recorded_at: DateTime<Utc>,
}
