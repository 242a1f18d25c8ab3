//! Route-level tests for the endpoints that serve static reference data.
//! These go through the real route table but need no database or upstream.

use actix_web::http::StatusCode;
use actix_web::test::{call_service, init_service, read_body_json, TestRequest};
use actix_web::App;
use serde_json::{json, Value};

use cropwatch::web::routes::configure_app_routes;

macro_rules! test_app {
  () => {
    init_service(App::new().configure(configure_app_routes)).await
  };
}

#[actix_web::test]
async fn health_endpoint_reports_online() {
  let app = test_app!();
  let resp = call_service(&app, TestRequest::get().uri("/health").to_request()).await;
  assert_eq!(resp.status(), StatusCode::OK);

  let body: Value = read_body_json(resp).await;
  assert_eq!(body["status"], "online");
  assert_eq!(body["service"], "Crop Health Monitoring System");
}

#[actix_web::test]
async fn crop_database_returns_all_crops_without_filter() {
  let app = test_app!();
  let resp = call_service(&app, TestRequest::get().uri("/crop-database").to_request()).await;
  assert_eq!(resp.status(), StatusCode::OK);

  let body: Value = read_body_json(resp).await;
  let crops = body["crops"].as_object().unwrap();
  assert_eq!(crops.len(), 8);
  assert_eq!(crops["Wheat"]["season"], "Winter");
  assert_eq!(crops["Rice"]["yield"], "4-6 tons/hectare");
}

#[actix_web::test]
async fn crop_database_season_filter_is_a_substring_match() {
  let app = test_app!();
  let resp = call_service(&app, TestRequest::get().uri("/crop-database?season=summer").to_request()).await;
  assert_eq!(resp.status(), StatusCode::OK);

  let body: Value = read_body_json(resp).await;
  let crops = body["crops"].as_object().unwrap();
  assert!(crops.contains_key("Rice"), "Summer/Monsoon should match 'summer'");
  assert!(crops.contains_key("Maize"));
  assert!(!crops.contains_key("Wheat"));
}

#[actix_web::test]
async fn soil_health_classifies_the_documented_ph_bands() {
  let app = test_app!();

  for (ph, expected_status) in [
    (7.0, "Neutral to Slightly Alkaline (Ideal)"),
    (4.0, "Very Acidic"),
    (9.0, "Alkaline"),
  ] {
    let req = TestRequest::post()
      .uri("/soil-health")
      .set_json(json!({"ph_value": ph}))
      .to_request();
    let resp = call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = read_body_json(resp).await;
    assert_eq!(body["recommendations"]["ph_status"], expected_status, "pH {}", ph);
    assert!(!body["recommendations"]["actions"].as_array().unwrap().is_empty());
    assert!(!body["recommendations"]["suitable_crops"].as_array().unwrap().is_empty());
  }
}

#[actix_web::test]
async fn acidic_soil_gets_lime_corrections() {
  let app = test_app!();
  let req = TestRequest::post()
    .uri("/soil-health")
    .set_json(json!({"ph_value": 4.0}))
    .to_request();
  let body: Value = read_body_json(call_service(&app, req).await).await;

  let actions = body["recommendations"]["actions"].as_array().unwrap();
  assert!(actions.iter().any(|a| a.as_str().unwrap().contains("lime")));
}

#[actix_web::test]
async fn out_of_range_ph_is_a_validation_error() {
  let app = test_app!();
  let req = TestRequest::post()
    .uri("/soil-health")
    .set_json(json!({"ph_value": 19.5}))
    .to_request();
  let resp = call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn crop_recommendations_follow_latitude() {
  let app = test_app!();
  let req = TestRequest::post()
    .uri("/crop-recommendations")
    .set_json(json!({"latitude": 45.0, "longitude": 2.0}))
    .to_request();
  let resp = call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::OK);

  let body: Value = read_body_json(resp).await;
  assert_eq!(body["suitable_crops"], json!(["Wheat", "Potato", "Barley", "Maize"]));
  assert!(body["recommendation"].as_str().unwrap().starts_with("Based on your location"));
}

#[actix_web::test]
async fn maintenance_guide_is_served_and_unknown_crop_is_404() {
  let app = test_app!();

  let resp = call_service(&app, TestRequest::get().uri("/maintenance-guide/Wheat").to_request()).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let body: Value = read_body_json(resp).await;
  assert_eq!(body["guide"]["name"], "Wheat");
  assert_eq!(body["guide"]["stages"].as_array().unwrap().len(), 4);
  assert!(body["guide"]["harvest_time"].as_str().unwrap().contains("140-150"));

  let resp = call_service(&app, TestRequest::get().uri("/maintenance-guide/Dragonfruit").to_request()).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
