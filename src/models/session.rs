use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Server-side login session. The browser holds only the opaque `token` in an
/// HttpOnly cookie; everything else stays in the database.
#[derive(Debug, Clone, FromRow)]
pub struct Session {
  pub token: Uuid,
  pub user_id: Uuid,
  pub created_at: DateTime<Utc>,
  pub expires_at: DateTime<Utc>,
}
