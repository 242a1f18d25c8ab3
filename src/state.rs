use crate::config::AppConfig;
use sqlx::PgPool;
use std::sync::Arc;

/// Shared per-process state, cloned into every worker and handed to handlers
/// through `actix_web::web::Data`.
#[derive(Clone)]
pub struct AppState {
  pub db_pool: PgPool,
  /// Reused client for the weather upstream; reqwest clients pool connections.
  pub http_client: reqwest::Client,
  pub config: Arc<AppConfig>,
}
