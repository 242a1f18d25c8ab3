use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub database_url: String,

  /// Lifetime of a login session, in days.
  pub session_ttl_days: i64,

  /// Seed mixed into the simulated sensing/classifier functions. A fixed seed
  /// makes NDVI and disease outputs reproducible across runs.
  pub sensing_seed: u64,

  /// Sender address for crop alerts. `None` disables alerting entirely;
  /// every other endpoint is unaffected.
  pub alert_sender: Option<String>,

  /// Drop and recreate all tables on startup.
  pub reset_db: bool,
  /// Seed the demo account on startup (also done when the account is missing).
  pub seed_db: bool,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| {
      env::var(var_name).map_err(|e| AppError::Config(format!("Missing environment variable '{}': {}", var_name, e)))
    };

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let server_port = get_env("SERVER_PORT")
      .unwrap_or_else(|_| "8080".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;
    let database_url = get_env("DATABASE_URL")?;

    let session_ttl_days = get_env("SESSION_TTL_DAYS")
      .unwrap_or_else(|_| "30".to_string())
      .parse::<i64>()
      .map_err(|e| AppError::Config(format!("Invalid SESSION_TTL_DAYS: {}", e)))?;

    let sensing_seed = get_env("SENSING_SEED")
      .unwrap_or_else(|_| "0".to_string())
      .parse::<u64>()
      .map_err(|e| AppError::Config(format!("Invalid SENSING_SEED: {}", e)))?;

    let alert_sender = env::var("ALERT_SENDER_EMAIL").ok().filter(|s| !s.is_empty());

    let reset_db = get_env("RESET_DB")
      .unwrap_or_else(|_| "false".to_string())
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid RESET_DB value: {}", e)))?;
    let seed_db = get_env("SEED_DB")
      .unwrap_or_else(|_| "false".to_string())
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid SEED_DB value: {}", e)))?;

    tracing::info!(
      alerting_enabled = alert_sender.is_some(),
      "Application configuration loaded successfully."
    );

    Ok(Self {
      server_host,
      server_port,
      database_url,
      session_ttl_days,
      sensing_seed,
      alert_sender,
      reset_db,
      seed_db,
    })
  }
}
