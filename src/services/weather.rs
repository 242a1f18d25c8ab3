//! Weather adapter over the Open-Meteo forecast API (free, no API key).
//!
//! The upstream response is reshaped into a fixed contract; missing upstream
//! fields become `null` rather than an error, but an unreachable upstream is
//! surfaced as an upstream error with no partial data.

use crate::errors::{AppError, Result};
use serde::{Deserialize, Serialize};
use tracing::instrument;

const OPEN_METEO_URL: &str = "https://api.open-meteo.com/v1/forecast";

#[derive(Debug, Default, Deserialize)]
struct UpstreamCurrent {
  temperature_2m: Option<f64>,
  relative_humidity_2m: Option<f64>,
  precipitation: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct UpstreamDaily {
  #[serde(default)]
  temperature_2m_max: Vec<Option<f64>>,
  #[serde(default)]
  temperature_2m_min: Vec<Option<f64>>,
  #[serde(default)]
  precipitation_sum: Vec<Option<f64>>,
}

#[derive(Debug, Deserialize)]
struct UpstreamForecast {
  current: Option<UpstreamCurrent>,
  daily: Option<UpstreamDaily>,
}

/// Current conditions as exposed by `GET /weather`.
#[derive(Debug, Serialize, PartialEq)]
pub struct CurrentConditions {
  pub temperature: Option<f64>,
  pub humidity: Option<f64>,
  pub precipitation: Option<f64>,
}

/// Today's aggregates as exposed by `GET /weather`.
#[derive(Debug, Serialize, PartialEq)]
pub struct DailyAggregates {
  pub max_temp: Option<f64>,
  pub min_temp: Option<f64>,
  pub precipitation: Option<f64>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct WeatherReport {
  pub current: CurrentConditions,
  pub daily: DailyAggregates,
}

fn reshape(upstream: UpstreamForecast) -> WeatherReport {
  let current = upstream.current.unwrap_or_default();
  let daily = upstream.daily.unwrap_or_default();
  WeatherReport {
    current: CurrentConditions {
      temperature: current.temperature_2m,
      humidity: current.relative_humidity_2m,
      precipitation: current.precipitation,
    },
    daily: DailyAggregates {
      max_temp: daily.temperature_2m_max.first().copied().flatten(),
      min_temp: daily.temperature_2m_min.first().copied().flatten(),
      precipitation: daily.precipitation_sum.first().copied().flatten(),
    },
  }
}

/// Fetch and reshape current conditions plus today's aggregates.
#[instrument(name = "weather::current_report", skip(client), err(Display))]
pub async fn current_report(client: &reqwest::Client, latitude: f64, longitude: f64) -> Result<WeatherReport> {
  let response = client
    .get(OPEN_METEO_URL)
    .query(&[
      ("latitude", latitude.to_string()),
      ("longitude", longitude.to_string()),
      ("current", "temperature_2m,relative_humidity_2m,precipitation,weather_code".to_string()),
      ("daily", "temperature_2m_max,temperature_2m_min,precipitation_sum".to_string()),
      ("timezone", "auto".to_string()),
    ])
    .send()
    .await?
    .error_for_status()
    .map_err(|e| AppError::Upstream(format!("Weather API returned an error status: {}", e)))?;

  let upstream: UpstreamForecast = response.json().await?;
  Ok(reshape(upstream))
}

/// Fetch the multi-day daily forecast arrays as provided upstream.
#[instrument(name = "weather::daily_forecast", skip(client), err(Display))]
pub async fn daily_forecast(
  client: &reqwest::Client,
  latitude: f64,
  longitude: f64,
  days: u8,
) -> Result<serde_json::Value> {
  let response = client
    .get(OPEN_METEO_URL)
    .query(&[
      ("latitude", latitude.to_string()),
      ("longitude", longitude.to_string()),
      ("daily", "temperature_2m_max,temperature_2m_min,precipitation_sum".to_string()),
      ("forecast_days", days.to_string()),
      ("timezone", "auto".to_string()),
    ])
    .send()
    .await?
    .error_for_status()
    .map_err(|e| AppError::Upstream(format!("Weather API returned an error status: {}", e)))?;

  let body: serde_json::Value = response.json().await?;
  Ok(body.get("daily").cloned().unwrap_or(serde_json::Value::Null))
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn reshape_picks_first_daily_entries() {
    let upstream: UpstreamForecast = serde_json::from_value(json!({
      "current": {"temperature_2m": 21.4, "relative_humidity_2m": 63.0, "precipitation": 0.2},
      "daily": {
        "temperature_2m_max": [27.1, 25.0],
        "temperature_2m_min": [14.3, 13.9],
        "precipitation_sum": [1.5, 0.0]
      }
    }))
    .unwrap();

    let report = reshape(upstream);
    assert_eq!(report.current.temperature, Some(21.4));
    assert_eq!(report.current.humidity, Some(63.0));
    assert_eq!(report.daily.max_temp, Some(27.1));
    assert_eq!(report.daily.min_temp, Some(14.3));
    assert_eq!(report.daily.precipitation, Some(1.5));
  }

  #[test]
  fn reshape_tolerates_missing_upstream_blocks() {
    let upstream: UpstreamForecast = serde_json::from_value(json!({})).unwrap();
    let report = reshape(upstream);
    assert_eq!(report.current.temperature, None);
    assert_eq!(report.daily.max_temp, None);
  }
}
