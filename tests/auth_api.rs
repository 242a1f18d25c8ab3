//! Route-level tests for the database-backed flows: registration uniqueness,
//! login/session lifecycle, history and the profile round-trip.
//!
//! These need a live Postgres, so they are `#[ignore]`d by default; point
//! `DATABASE_URL` at a scratch database and run `cargo test -- --ignored`.

use actix_web::cookie::Cookie;
use actix_web::http::{header, StatusCode};
use actix_web::test::{call_service, init_service, read_body_json, TestRequest};
use actix_web::{web, App};
use serde_json::{json, Value};
use std::sync::Arc;
use uuid::Uuid;

use cropwatch::web::routes::configure_app_routes;
use cropwatch::{db, AppConfig, AppState};

async fn test_state() -> AppState {
  let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must point at a scratch database");
  let db_pool = sqlx::PgPool::connect(&database_url).await.expect("database connection");
  db::init_schema(&db_pool, false).await.expect("schema bootstrap");

  AppState {
    db_pool,
    http_client: reqwest::Client::new(),
    config: Arc::new(AppConfig {
      server_host: "127.0.0.1".to_string(),
      server_port: 0,
      database_url,
      session_ttl_days: 1,
      sensing_seed: 0,
      alert_sender: None,
      reset_db: false,
      seed_db: false,
    }),
  }
}

/// Fresh credentials per test run so reruns never collide on uniqueness.
fn fresh_credentials() -> (String, String) {
  let tag = Uuid::new_v4().simple().to_string();
  (format!("farmer_{}", tag), format!("farmer_{}@example.com", tag))
}

fn session_cookie<B>(resp: &actix_web::dev::ServiceResponse<B>) -> Cookie<'static> {
  let raw = resp
    .headers()
    .get(header::SET_COOKIE)
    .expect("login should set the session cookie")
    .to_str()
    .expect("cookie header is ascii")
    .to_string();
  Cookie::parse_encoded(raw).expect("session cookie parses")
}

#[actix_web::test]
#[ignore = "requires DATABASE_URL"]
async fn duplicate_username_registration_is_a_validation_error() {
  let state = test_state().await;
  let app = init_service(
    App::new().app_data(web::Data::new(state)).configure(configure_app_routes),
  )
  .await;
  let (username, email) = fresh_credentials();

  let req = TestRequest::post()
    .uri("/register")
    .set_json(json!({"username": username, "email": email, "password": "hunter22"}))
    .to_request();
  assert_eq!(call_service(&app, req).await.status(), StatusCode::CREATED);

  // Same username, different email: must be rejected as a validation error.
  let req = TestRequest::post()
    .uri("/register")
    .set_json(json!({"username": username, "email": format!("other_{}", email), "password": "hunter22"}))
    .to_request();
  let resp = call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  let body: Value = read_body_json(resp).await;
  assert_eq!(body["error"], "Username already exists");
}

#[actix_web::test]
#[ignore = "requires DATABASE_URL"]
async fn login_then_session_reports_the_logged_in_identity() {
  let state = test_state().await;
  let app = init_service(
    App::new().app_data(web::Data::new(state)).configure(configure_app_routes),
  )
  .await;
  let (username, email) = fresh_credentials();

  let req = TestRequest::post()
    .uri("/register")
    .set_json(json!({"username": username, "email": email, "password": "hunter22"}))
    .to_request();
  assert_eq!(call_service(&app, req).await.status(), StatusCode::CREATED);

  // Wrong password first: auth error, no cookie.
  let req = TestRequest::post()
    .uri("/login")
    .set_json(json!({"username": username, "password": "wrong-password"}))
    .to_request();
  assert_eq!(call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);

  let req = TestRequest::post()
    .uri("/login")
    .set_json(json!({"username": username, "password": "hunter22"}))
    .to_request();
  let resp = call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let cookie = session_cookie(&resp);

  let req = TestRequest::get().uri("/session").cookie(cookie).to_request();
  let resp = call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let body: Value = read_body_json(resp).await;
  assert_eq!(body["logged_in"], true);
  assert_eq!(body["user"]["username"], username.as_str());
  assert_eq!(body["user"]["email"], email.as_str());

  // Without the cookie the same endpoint reports anonymous, still 200.
  let resp = call_service(&app, TestRequest::get().uri("/session").to_request()).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let body: Value = read_body_json(resp).await;
  assert_eq!(body["logged_in"], false);
}

#[actix_web::test]
#[ignore = "requires DATABASE_URL"]
async fn history_for_a_user_with_no_records_is_empty_not_an_error() {
  let state = test_state().await;
  let app = init_service(
    App::new().app_data(web::Data::new(state)).configure(configure_app_routes),
  )
  .await;
  let (_, email) = fresh_credentials();

  let req = TestRequest::get().uri(&format!("/history?email={}", email)).to_request();
  let resp = call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::OK);

  let body: Value = read_body_json(resp).await;
  assert_eq!(body["status"], "success");
  assert_eq!(body["crop_data"], json!([]));
  assert_eq!(body["disease_records"], json!([]));
}

#[actix_web::test]
#[ignore = "requires DATABASE_URL"]
async fn profile_update_then_read_reflects_every_field() {
  let state = test_state().await;
  let app = init_service(
    App::new().app_data(web::Data::new(state)).configure(configure_app_routes),
  )
  .await;
  let (username, email) = fresh_credentials();

  let req = TestRequest::post()
    .uri("/register")
    .set_json(json!({"username": username, "email": email, "password": "hunter22"}))
    .to_request();
  assert_eq!(call_service(&app, req).await.status(), StatusCode::CREATED);

  let req = TestRequest::post()
    .uri("/login")
    .set_json(json!({"username": username, "password": "hunter22"}))
    .to_request();
  let cookie = session_cookie(&call_service(&app, req).await);

  // Unauthenticated profile reads are rejected.
  let resp = call_service(&app, TestRequest::get().uri("/profile").to_request()).await;
  assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

  let update = json!({
    "first_name": "Asha",
    "last_name": "Patel",
    "location": "Nashik, Maharashtra",
    "phone": "+91-9876543210",
    "crop_type": "Soybean",
    "field_area": 12.5,
  });
  let req = TestRequest::put()
    .uri("/profile")
    .cookie(cookie.clone())
    .set_json(&update)
    .to_request();
  assert_eq!(call_service(&app, req).await.status(), StatusCode::OK);

  let req = TestRequest::get().uri("/profile").cookie(cookie).to_request();
  let resp = call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let body: Value = read_body_json(resp).await;

  let user = &body["user"];
  for (field, expected) in update.as_object().unwrap() {
    assert_eq!(&user[field], expected, "field {} did not round-trip", field);
  }
  assert_eq!(user["username"], username.as_str());
  assert!(user.get("password_hash").is_none(), "password hash must never be serialized");
}
