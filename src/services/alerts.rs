//! Crop alerts, delivered through a simulated email transport.
//!
//! Alerting is enabled by setting `ALERT_SENDER_EMAIL`; without it every send
//! is a no-op. Delivery failures are logged and swallowed by the callers so an
//! alert can never fail the request that triggered it.

use crate::config::AppConfig;
use crate::errors::Result;
use chrono::Utc;
use tracing::info;

#[derive(Debug)]
pub struct SentAlertInfo {
  pub to: String,
  pub from: String,
  pub subject: String,
  pub message_id: String,
}

async fn send_mock_email(to: &str, from: &str, subject: &str, body: &str) -> Result<SentAlertInfo> {
  info!("Simulating alert email: To='{}', From='{}', Subject='{}'", to, from, subject);
  tokio::time::sleep(std::time::Duration::from_millis(20)).await; // Simulate transport latency

  let message_id = format!("mock_alert_{}", uuid::Uuid::new_v4());
  info!(preview = %body.chars().take(50).collect::<String>(), %message_id, "Mock alert email sent.");

  Ok(SentAlertInfo {
    to: to.to_string(),
    from: from.to_string(),
    subject: subject.to_string(),
    message_id,
  })
}

/// Alert a farmer that a disease was detected in their upload. Returns
/// `Ok(None)` when alerting is not configured.
pub async fn send_disease_alert(
  config: &AppConfig,
  disease: &str,
  confidence: f64,
  recipient: &str,
) -> Result<Option<SentAlertInfo>> {
  let Some(sender) = config.alert_sender.as_deref() else {
    return Ok(None);
  };

  let subject = format!("Crop Disease Alert: {} Detected", disease);
  let body = format!(
    "A potential crop disease has been detected in your field.\n\n\
     Disease: {}\nConfidence: {:.1}%\nDetected: {}\n\n\
     Please take necessary action or contact an agricultural expert.",
    disease,
    confidence * 100.0,
    Utc::now().format("%Y-%m-%d %H:%M:%S"),
  );

  send_mock_email(recipient, sender, &subject, &body).await.map(Some)
}

/// Alert a farmer that their field's health dropped into the alert band.
pub async fn send_health_alert(
  config: &AppConfig,
  health_score: &str,
  ndvi: f64,
  recipient: &str,
) -> Result<Option<SentAlertInfo>> {
  let Some(sender) = config.alert_sender.as_deref() else {
    return Ok(None);
  };

  let subject = format!("Crop Health Report: {}", health_score);
  let body = format!(
    "Crop Health Report\n\nHealth Score: {}\nNDVI Value: {:.2}\nTimestamp: {}",
    health_score,
    ndvi,
    Utc::now().format("%Y-%m-%d %H:%M:%S"),
  );

  send_mock_email(recipient, sender, &subject, &body).await.map(Some)
}
