//! Database-backed session store.
//!
//! A login inserts a row keyed by a random UUID token; the browser carries the
//! token in an HttpOnly cookie and everything else stays server-side. Expired
//! rows are purged lazily whenever a lookup runs.

use crate::errors::Result;
use crate::models::{Session, User};
use chrono::{Duration, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

/// Name of the cookie carrying the opaque session token.
pub const SESSION_COOKIE: &str = "cropwatch_session";

/// Create a new session for `user_id`, valid for `ttl_days`.
#[instrument(name = "sessions::create", skip(pool))]
pub async fn create(pool: &PgPool, user_id: Uuid, ttl_days: i64) -> Result<Session> {
  let session = Session {
    token: Uuid::new_v4(),
    user_id,
    created_at: Utc::now(),
    expires_at: Utc::now() + Duration::days(ttl_days),
  };

  sqlx::query("INSERT INTO sessions (token, user_id, created_at, expires_at) VALUES ($1, $2, $3, $4)")
    .bind(session.token)
    .bind(session.user_id)
    .bind(session.created_at)
    .bind(session.expires_at)
    .execute(pool)
    .await?;

  Ok(session)
}

/// Resolve a session token to its user, if the session is still live.
#[instrument(name = "sessions::resolve_user", skip(pool))]
pub async fn resolve_user(pool: &PgPool, token: Uuid) -> Result<Option<User>> {
  purge_expired(pool).await?;

  let user: Option<User> = sqlx::query_as(
    "SELECT u.* FROM users u \
     JOIN sessions s ON s.user_id = u.id \
     WHERE s.token = $1 AND s.expires_at > now()",
  )
  .bind(token)
  .fetch_optional(pool)
  .await?;

  Ok(user)
}

/// Tear down a session. Deleting an unknown token is not an error.
#[instrument(name = "sessions::destroy", skip(pool))]
pub async fn destroy(pool: &PgPool, token: Uuid) -> Result<()> {
  sqlx::query("DELETE FROM sessions WHERE token = $1")
    .bind(token)
    .execute(pool)
    .await?;
  Ok(())
}

async fn purge_expired(pool: &PgPool) -> Result<()> {
  sqlx::query("DELETE FROM sessions WHERE expires_at <= now()")
    .execute(pool)
    .await?;
  Ok(())
}
