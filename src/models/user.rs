use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// A registered farmer account. Referenced by email from the crop-health and
/// disease records. Request payloads use dedicated DTOs; this struct is only
/// ever read from the database and serialized outward.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
  pub id: Uuid,
  pub username: String,
  pub email: String,
  #[serde(skip_serializing)] // Never send password hash to client
  pub password_hash: String,
  pub first_name: Option<String>,
  pub last_name: Option<String>,
  pub location: Option<String>,
  pub phone: Option<String>,
  pub crop_type: Option<String>,
  pub field_area: Option<f64>,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}
