//! Registration, login, logout, session check and profile CRUD.

use actix_web::cookie::{time::Duration as CookieDuration, Cookie};
use actix_web::{web, HttpRequest, HttpResponse};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::User;
use crate::services::sessions::{self, SESSION_COOKIE};
use crate::services::auth;
use crate::state::AppState;
use crate::web::auth::{user_from_request, CurrentUser};

const MIN_PASSWORD_LEN: usize = 6;

/// The pre-insert uniqueness checks race with concurrent registrations; when a
/// duplicate slips through and trips the UNIQUE constraint, that is still a
/// validation failure, not a server error.
fn map_registration_error(e: sqlx::Error) -> AppError {
  match &e {
    sqlx::Error::Database(db) if matches!(db.kind(), sqlx::error::ErrorKind::UniqueViolation) => {
      AppError::Validation("Username or email already registered".to_string())
    }
    _ => AppError::from(e),
  }
}

// --- Request DTOs ---

#[derive(Deserialize, Debug)]
pub struct RegisterPayload {
  pub username: String,
  pub email: String,
  pub password: String,
  pub first_name: Option<String>,
  pub last_name: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct LoginPayload {
  pub username: String,
  pub password: String,
}

#[derive(Deserialize, Debug)]
pub struct ProfileUpdatePayload {
  pub first_name: Option<String>,
  pub last_name: Option<String>,
  pub location: Option<String>,
  pub phone: Option<String>,
  pub crop_type: Option<String>,
  pub field_area: Option<f64>,
}

// --- Handlers ---

#[instrument(name = "handler::register", skip(state, payload), fields(username = %payload.username))]
pub async fn register_handler(
  state: web::Data<AppState>,
  payload: web::Json<RegisterPayload>,
) -> Result<HttpResponse, AppError> {
  let username = payload.username.trim().to_string();
  let email = payload.email.trim().to_string();

  if username.is_empty() || email.is_empty() || payload.password.is_empty() {
    return Err(AppError::Validation(
      "Username, email, and password cannot be empty".to_string(),
    ));
  }
  if payload.password.len() < MIN_PASSWORD_LEN {
    return Err(AppError::Validation(format!(
      "Password must be at least {} characters",
      MIN_PASSWORD_LEN
    )));
  }

  let username_taken: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM users WHERE username = $1")
    .bind(&username)
    .fetch_optional(&state.db_pool)
    .await?;
  if username_taken.is_some() {
    return Err(AppError::Validation("Username already exists".to_string()));
  }

  let email_taken: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM users WHERE email = $1")
    .bind(&email)
    .fetch_optional(&state.db_pool)
    .await?;
  if email_taken.is_some() {
    return Err(AppError::Validation("Email already registered".to_string()));
  }

  let password_hash = auth::hash_password(&payload.password)?;
  let user: User = sqlx::query_as(
    "INSERT INTO users (id, username, email, password_hash, first_name, last_name) \
     VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
  )
  .bind(Uuid::new_v4())
  .bind(&username)
  .bind(&email)
  .bind(&password_hash)
  .bind(payload.first_name.as_deref().map(str::trim))
  .bind(payload.last_name.as_deref().map(str::trim))
  .fetch_one(&state.db_pool)
  .await
  .map_err(map_registration_error)?;

  info!("New user registered: {}", user.username);

  Ok(HttpResponse::Created().json(json!({
    "status": "success",
    "message": "Registration successful!",
    "user": user,
  })))
}

#[instrument(name = "handler::login", skip(state, payload), fields(username = %payload.username))]
pub async fn login_handler(
  state: web::Data<AppState>,
  payload: web::Json<LoginPayload>,
) -> Result<HttpResponse, AppError> {
  let username = payload.username.trim();
  if username.is_empty() || payload.password.is_empty() {
    return Err(AppError::Validation("Missing username or password".to_string()));
  }

  let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE username = $1")
    .bind(username)
    .fetch_optional(&state.db_pool)
    .await?;

  // One error message for both unknown user and bad password; no account probing.
  let user = user.ok_or_else(|| AppError::Auth("Invalid username or password".to_string()))?;
  if !auth::verify_password(&user.password_hash, &payload.password)? {
    return Err(AppError::Auth("Invalid username or password".to_string()));
  }

  let session = sessions::create(&state.db_pool, user.id, state.config.session_ttl_days).await?;
  let cookie = Cookie::build(SESSION_COOKIE, session.token.to_string())
    .path("/")
    .http_only(true)
    .max_age(CookieDuration::days(state.config.session_ttl_days))
    .finish();

  info!("User logged in: {}", user.username);

  Ok(
    HttpResponse::Ok().cookie(cookie).json(json!({
      "status": "success",
      "message": "Login successful!",
      "user": user,
    })),
  )
}

#[instrument(name = "handler::logout", skip_all)]
pub async fn logout_handler(state: web::Data<AppState>, req: HttpRequest) -> Result<HttpResponse, AppError> {
  if let Some(token) = req.cookie(SESSION_COOKIE).and_then(|c| Uuid::parse_str(c.value()).ok()) {
    sessions::destroy(&state.db_pool, token).await?;
  }

  let mut removal = Cookie::new(SESSION_COOKIE, "");
  removal.set_path("/");

  let mut response = HttpResponse::Ok().json(json!({"status": "success", "message": "Logout successful"}));
  response
    .add_removal_cookie(&removal)
    .map_err(|e| AppError::Internal(format!("Failed to clear session cookie: {}", e)))?;
  Ok(response)
}

/// Anonymous-tolerant session check: always 200, with a `logged_in` flag.
#[instrument(name = "handler::session_check", skip_all)]
pub async fn session_handler(state: web::Data<AppState>, req: HttpRequest) -> Result<HttpResponse, AppError> {
  match user_from_request(&req, &state).await? {
    Some(user) => Ok(HttpResponse::Ok().json(json!({
      "status": "authenticated",
      "logged_in": true,
      "user": user,
    }))),
    None => Ok(HttpResponse::Ok().json(json!({
      "status": "not_authenticated",
      "logged_in": false,
    }))),
  }
}

#[instrument(name = "handler::profile_get", skip_all, fields(username = %current.0.username))]
pub async fn profile_get_handler(current: CurrentUser) -> Result<HttpResponse, AppError> {
  Ok(HttpResponse::Ok().json(json!({"status": "success", "user": current.0})))
}

#[instrument(name = "handler::profile_update", skip_all, fields(username = %current.0.username))]
pub async fn profile_update_handler(
  state: web::Data<AppState>,
  current: CurrentUser,
  payload: web::Json<ProfileUpdatePayload>,
) -> Result<HttpResponse, AppError> {
  let mut user = current.0;

  // Only supplied fields are touched; everything else round-trips untouched.
  if let Some(v) = &payload.first_name {
    user.first_name = Some(v.trim().to_string());
  }
  if let Some(v) = &payload.last_name {
    user.last_name = Some(v.trim().to_string());
  }
  if let Some(v) = &payload.location {
    user.location = Some(v.trim().to_string());
  }
  if let Some(v) = &payload.phone {
    user.phone = Some(v.trim().to_string());
  }
  if let Some(v) = &payload.crop_type {
    user.crop_type = Some(v.trim().to_string());
  }
  if let Some(v) = payload.field_area {
    if !v.is_finite() || v < 0.0 {
      return Err(AppError::Validation("field_area must be a non-negative number".to_string()));
    }
    user.field_area = Some(v);
  }
  user.updated_at = Utc::now();

  sqlx::query(
    "UPDATE users SET first_name = $1, last_name = $2, location = $3, phone = $4, \
     crop_type = $5, field_area = $6, updated_at = $7 WHERE id = $8",
  )
  .bind(&user.first_name)
  .bind(&user.last_name)
  .bind(&user.location)
  .bind(&user.phone)
  .bind(&user.crop_type)
  .bind(user.field_area)
  .bind(user.updated_at)
  .bind(user.id)
  .execute(&state.db_pool)
  .await?;

  info!("Profile updated: {}", user.username);

  Ok(HttpResponse::Ok().json(json!({
    "status": "success",
    "message": "Profile updated!",
    "user": user,
  })))
}
