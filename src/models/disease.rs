use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// One simulated disease detection. Append-only.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct DiseaseRecord {
  pub id: Uuid,
  #[serde(skip_serializing)]
  pub email: String,
  pub disease: String,
  pub confidence: f64,
  pub recorded_at: DateTime<Utc>,
}
