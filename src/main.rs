use cropwatch::web::routes::configure_app_routes;
use cropwatch::{db, AppConfig, AppState};

use actix_web::{web as actix_data, App, HttpServer};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO)
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE)
    .init();

  tracing::info!("Starting crop monitoring server...");

  let app_config = match AppConfig::from_env() {
    Ok(cfg) => Arc::new(cfg),
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      panic!("Configuration error: {}", e);
    }
  };

  let db_pool = match PgPool::connect(&app_config.database_url).await {
    Ok(pool) => {
      tracing::info!("Successfully connected to the database.");
      pool
    }
    Err(e) => {
      tracing::error!(error = %e, "Failed to connect to the database.");
      panic!("Database connection error: {}", e);
    }
  };

  if let Err(e) = db::init_schema(&db_pool, app_config.reset_db).await {
    tracing::error!(error = %e, "Failed to initialize database schema.");
    panic!("Database initialization error: {}", e);
  }
  if app_config.seed_db || app_config.reset_db {
    if let Err(e) = db::seed_demo_user(&db_pool).await {
      tracing::error!(error = %e, "Failed to seed demo user.");
    }
  }

  // The weather upstream answers quickly or not at all; keep the timeout short.
  let http_client = reqwest::Client::builder()
    .timeout(Duration::from_secs(5))
    .build()
    .expect("reqwest client construction cannot fail with these options");

  let app_state = AppState {
    db_pool: db_pool.clone(),
    http_client,
    config: app_config.clone(),
  };

  let server_address = format!("{}:{}", app_config.server_host, app_config.server_port);
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone()))
      .wrap(tracing_actix_web::TracingLogger::default())
      .configure(configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await
}
