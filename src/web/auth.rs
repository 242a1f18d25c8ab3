//! Session-cookie authentication extractor.

use crate::errors::AppError;
use crate::models::User;
use crate::services::sessions::{self, SESSION_COOKIE};
use crate::state::AppState;
use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;
use uuid::Uuid;

/// The authenticated user for the current request, resolved from the session
/// cookie. Handlers that take this as a parameter reject unauthenticated
/// requests with a 401 before their body runs.
pub struct CurrentUser(pub User);

/// Resolve the session cookie on `req` to a user, if any. Shared between the
/// extractor and the anonymous-tolerant `GET /session` handler.
pub async fn user_from_request(req: &HttpRequest, state: &AppState) -> Result<Option<User>, AppError> {
  let Some(token) = req.cookie(SESSION_COOKIE).and_then(|c| Uuid::parse_str(c.value()).ok()) else {
    return Ok(None);
  };
  sessions::resolve_user(&state.db_pool, token).await
}

impl FromRequest for CurrentUser {
  type Error = AppError;
  type Future = LocalBoxFuture<'static, Result<Self, AppError>>;

  fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
    let req = req.clone();
    Box::pin(async move {
      let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| AppError::Internal("Application state is not configured.".to_string()))?
        .get_ref()
        .clone();

      user_from_request(&req, &state)
        .await?
        .map(CurrentUser)
        .ok_or_else(|| AppError::Auth("Not authenticated".to_string()))
    })
  }
}
