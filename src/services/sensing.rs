//! Simulated satellite sensing.
//!
//! No real imagery is fetched: the NDVI value is a pure function of the
//! coordinates and a configurable seed, drawn from the practical range
//! [0.3, 0.9]. Only the documented threshold bands carry meaning; the
//! formula itself claims no agronomic accuracy. A production deployment
//! would integrate Sentinel Hub, USGS Earth Explorer or similar.

use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::Serialize;

/// NDVI values below this are considered an alert condition.
pub const ALERT_NDVI: f64 = 0.2;
/// NDVI at or above this counts as the healthy tier.
pub const HEALTHY_NDVI: f64 = 0.6;

/// Categorical health tier derived from an NDVI value.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HealthAssessment {
  pub score: &'static str,
  pub color: &'static str,
  pub action: &'static str,
}

/// Simulated band readings for the dashboard imagery widget.
#[derive(Debug, Clone, Serialize)]
pub struct BandReadings {
  pub red_band: f64,
  pub green_band: f64,
  pub blue_band: f64,
  pub nir_band: f64,
}

/// Fold coordinates and the configured seed into a single RNG seed. Equal
/// inputs always produce equal outputs, which is what the tests rely on.
fn coordinate_seed(latitude: f64, longitude: f64, seed: u64) -> u64 {
  latitude.to_bits() ^ longitude.to_bits().rotate_left(17) ^ seed.wrapping_mul(0x9e3779b97f4a7c15)
}

fn round2(value: f64) -> f64 {
  (value * 100.0).round() / 100.0
}

/// Simulated NDVI for a coordinate pair, rounded to two decimals.
pub fn simulated_ndvi(latitude: f64, longitude: f64, seed: u64) -> f64 {
  let mut rng = StdRng::seed_from_u64(coordinate_seed(latitude, longitude, seed));
  round2(rng.gen_range(0.3..=0.9))
}

/// Map an NDVI value onto the documented health tiers.
pub fn health_assessment(ndvi: f64) -> HealthAssessment {
  if ndvi < 0.2 {
    HealthAssessment { score: "Poor", color: "red", action: "Immediate intervention required" }
  } else if ndvi < 0.4 {
    HealthAssessment { score: "Fair", color: "orange", action: "Monitor and treat" }
  } else if ndvi < HEALTHY_NDVI {
    HealthAssessment { score: "Good", color: "yellow", action: "Continue monitoring" }
  } else {
    HealthAssessment { score: "Excellent", color: "green", action: "Maintain current practices" }
  }
}

/// Simulated visible/NIR band readings for a coordinate pair.
pub fn band_readings(latitude: f64, longitude: f64, seed: u64) -> BandReadings {
  // Offset the seed so the bands do not correlate with the NDVI draw.
  let mut rng = StdRng::seed_from_u64(coordinate_seed(latitude, longitude, seed).wrapping_add(1));
  BandReadings {
    red_band: round2(rng.gen_range(50.0..=200.0)),
    green_band: round2(rng.gen_range(50.0..=200.0)),
    blue_band: round2(rng.gen_range(50.0..=200.0)),
    nir_band: round2(rng.gen_range(100.0..=250.0)),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn ndvi_stays_in_documented_range() {
    for lat in [-89.9, -45.0, 0.0, 23.4567, 51.5, 89.9] {
      for lon in [-179.9, -0.1, 0.0, 77.2, 179.9] {
        let ndvi = simulated_ndvi(lat, lon, 42);
        assert!((0.3..=0.9).contains(&ndvi), "ndvi {} out of range for ({}, {})", ndvi, lat, lon);
        // Rounded to two decimals.
        assert!((ndvi * 100.0 - (ndvi * 100.0).round()).abs() < 1e-9);
      }
    }
  }

  #[test]
  fn ndvi_is_deterministic_per_input_and_seed() {
    assert_eq!(simulated_ndvi(12.5, 77.6, 7), simulated_ndvi(12.5, 77.6, 7));
    // A different seed should be able to move the value for at least one input.
    let moved = (0..20).any(|i| {
      let lat = 10.0 + f64::from(i);
      simulated_ndvi(lat, 20.0, 1) != simulated_ndvi(lat, 20.0, 2)
    });
    assert!(moved);
  }

  #[test]
  fn health_tiers_follow_thresholds() {
    assert_eq!(health_assessment(0.1).score, "Poor");
    assert_eq!(health_assessment(0.2).score, "Fair");
    assert_eq!(health_assessment(0.39).score, "Fair");
    assert_eq!(health_assessment(0.4).score, "Good");
    assert_eq!(health_assessment(0.59).score, "Good");
    assert_eq!(health_assessment(0.6).score, "Excellent");
    assert_eq!(health_assessment(0.9).score, "Excellent");
  }

  #[test]
  fn every_tier_carries_an_action() {
    for ndvi in [0.0, 0.3, 0.5, 0.8] {
      assert!(!health_assessment(ndvi).action.is_empty());
    }
  }

  #[test]
  fn band_readings_stay_in_range() {
    let bands = band_readings(48.85, 2.35, 0);
    assert!((50.0..=200.0).contains(&bands.red_band));
    assert!((50.0..=200.0).contains(&bands.green_band));
    assert!((50.0..=200.0).contains(&bands.blue_band));
    assert!((100.0..=250.0).contains(&bands.nir_band));
  }
}
