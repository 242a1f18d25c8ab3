//! Schema bootstrap and demo seeding.
//!
//! The schema is small enough that a handful of idempotent DDL statements at
//! startup beats a migration framework for this demo deployment.

use crate::errors::Result;
use crate::services::auth;
use sqlx::PgPool;
use tracing::info;

const SCHEMA_DDL: &[&str] = &[
  r#"
  CREATE TABLE IF NOT EXISTS users (
    id            UUID PRIMARY KEY,
    username      VARCHAR(80)  NOT NULL UNIQUE,
    email         VARCHAR(100) NOT NULL UNIQUE,
    password_hash VARCHAR(255) NOT NULL,
    first_name    VARCHAR(100),
    last_name     VARCHAR(100),
    location      VARCHAR(200),
    phone         VARCHAR(15),
    crop_type     VARCHAR(100),
    field_area    DOUBLE PRECISION,
    created_at    TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at    TIMESTAMPTZ NOT NULL DEFAULT now()
  )
  "#,
  r#"
  CREATE TABLE IF NOT EXISTS crop_health_records (
    id            UUID PRIMARY KEY,
    email         VARCHAR(100) NOT NULL,
    latitude      DOUBLE PRECISION NOT NULL,
    longitude     DOUBLE PRECISION NOT NULL,
    ndvi          DOUBLE PRECISION NOT NULL,
    health_status VARCHAR(50) NOT NULL,
    recorded_at   TIMESTAMPTZ NOT NULL DEFAULT now()
  )
  "#,
  r#"
  CREATE TABLE IF NOT EXISTS disease_records (
    id          UUID PRIMARY KEY,
    email       VARCHAR(100) NOT NULL,
    disease     VARCHAR(100) NOT NULL,
    confidence  DOUBLE PRECISION NOT NULL,
    recorded_at TIMESTAMPTZ NOT NULL DEFAULT now()
  )
  "#,
  r#"
  CREATE TABLE IF NOT EXISTS sessions (
    token      UUID PRIMARY KEY,
    user_id    UUID NOT NULL REFERENCES users (id) ON DELETE CASCADE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    expires_at TIMESTAMPTZ NOT NULL
  )
  "#,
];

const DROP_DDL: &[&str] = &[
  "DROP TABLE IF EXISTS sessions",
  "DROP TABLE IF EXISTS disease_records",
  "DROP TABLE IF EXISTS crop_health_records",
  "DROP TABLE IF EXISTS users",
];

/// Create all tables, optionally dropping them first (RESET_DB).
pub async fn init_schema(pool: &PgPool, reset: bool) -> Result<()> {
  if reset {
    for stmt in DROP_DDL {
      sqlx::query(stmt).execute(pool).await?;
    }
    info!("Existing tables dropped (RESET_DB=true).");
  }
  for stmt in SCHEMA_DDL {
    sqlx::query(stmt).execute(pool).await?;
  }
  info!("Database schema initialized.");
  Ok(())
}

/// Insert the `demo` account if it does not exist yet. Username `demo`,
/// password `demo123` — matches the original demo deployment.
pub async fn seed_demo_user(pool: &PgPool) -> Result<()> {
  let exists: Option<(uuid::Uuid,)> = sqlx::query_as("SELECT id FROM users WHERE username = $1")
    .bind("demo")
    .fetch_optional(pool)
    .await?;

  if exists.is_some() {
    return Ok(());
  }

  let password_hash = auth::hash_password("demo123")?;
  sqlx::query(
    "INSERT INTO users (id, username, email, password_hash, first_name, last_name, crop_type) \
     VALUES ($1, $2, $3, $4, $5, $6, $7)",
  )
  .bind(uuid::Uuid::new_v4())
  .bind("demo")
  .bind("demo@farm.com")
  .bind(password_hash)
  .bind("Demo")
  .bind("Farmer")
  .bind("Wheat")
  .execute(pool)
  .await?;

  info!("Demo user created (username: demo).");
  Ok(())
}
