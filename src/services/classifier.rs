//! Simulated crop-disease classification.
//!
//! Explicitly not a trained model: the label and confidence are pure functions
//! of the image digest and the configured seed. Only the label set, the
//! confidence range [0.7, 0.99] and the treatment-tip table are contractual.

use crate::errors::AppError;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::Serialize;

/// The fixed label set the simulated model can produce.
pub const DISEASES: &[&str] = &["Healthy", "Powdery Mildew", "Leaf Spot", "Rust", "Blight", "Septoria"];

#[derive(Debug, Clone, Serialize)]
pub struct Prediction {
  pub disease: &'static str,
  pub confidence: f64,
  pub recommendations: Vec<&'static str>,
}

/// Decode an uploaded image payload. Accepts a raw base64 string or a data URL
/// (`data:image/png;base64,...`). An undecodable or empty payload is a
/// validation error, never a crash.
pub fn decode_image(payload: &str) -> Result<Vec<u8>, AppError> {
  let encoded = payload.rsplit(',').next().unwrap_or(payload).trim();
  let bytes = BASE64
    .decode(encoded)
    .map_err(|_| AppError::Validation("Could not process image".to_string()))?;
  if bytes.is_empty() {
    return Err(AppError::Validation("Could not process image".to_string()));
  }
  Ok(bytes)
}

/// SHA-1 digest of the image bytes folded into a u64 RNG seed.
fn image_seed(image: &[u8], seed: u64) -> u64 {
  let digest = sha1_smol::Sha1::from(image).digest().bytes();
  let mut folded = [0u8; 8];
  folded.copy_from_slice(&digest[..8]);
  u64::from_le_bytes(folded) ^ seed.wrapping_mul(0x9e3779b97f4a7c15)
}

/// Classify decoded image bytes into a disease label with a confidence score
/// and the matching treatment tips.
pub fn classify(image: &[u8], seed: u64) -> Prediction {
  let mut rng = StdRng::seed_from_u64(image_seed(image, seed));
  let disease = DISEASES[rng.gen_range(0..DISEASES.len())];
  let confidence = (rng.gen_range(0.7f64..=0.99) * 1000.0).round() / 1000.0;

  Prediction {
    disease,
    confidence,
    recommendations: treatments(disease).to_vec(),
  }
}

/// Treatment and prevention tips keyed by disease label. Unrecognised labels
/// fall back to the generic "Unknown" advice.
pub fn treatments(disease: &str) -> &'static [&'static str] {
  match disease {
    "Healthy" => &["Continue regular maintenance", "Monitor crop regularly"],
    "Powdery Mildew" => &["Apply fungicide spray", "Improve air circulation", "Reduce humidity"],
    "Leaf Spot" => &["Remove affected leaves", "Apply copper fungicide", "Ensure proper spacing"],
    "Rust" => &["Use sulfur-based treatments", "Improve air drainage", "Remove infected leaves"],
    "Blight" => &["Apply systemic fungicide immediately", "Increase drainage", "Isolate infected plants"],
    "Septoria" => &["Remove infected foliage", "Apply fungicide", "Reduce leaf wetness"],
    _ => &["Consult agricultural expert", "Take multiple photos from different angles"],
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn classification_is_deterministic_for_equal_bytes() {
    let image = vec![0x89, 0x50, 0x4e, 0x47, 1, 2, 3, 4, 5];
    let a = classify(&image, 11);
    let b = classify(&image, 11);
    assert_eq!(a.disease, b.disease);
    assert_eq!(a.confidence, b.confidence);
  }

  #[test]
  fn confidence_stays_in_documented_range() {
    for len in [1usize, 16, 257, 4096] {
      let image = vec![0xabu8; len];
      let p = classify(&image, 0);
      assert!((0.7..=0.99).contains(&p.confidence), "confidence {} out of range", p.confidence);
      assert!(DISEASES.contains(&p.disease));
      assert!(!p.recommendations.is_empty());
    }
  }

  #[test]
  fn decode_accepts_data_urls_and_raw_base64() {
    assert_eq!(decode_image("data:image/png;base64,AQID").unwrap(), vec![1, 2, 3]);
    assert_eq!(decode_image("AQID").unwrap(), vec![1, 2, 3]);
  }

  #[test]
  fn undecodable_payload_is_a_validation_error() {
    assert!(matches!(decode_image("!!not base64!!"), Err(AppError::Validation(_))));
    assert!(matches!(decode_image("data:image/png;base64,"), Err(AppError::Validation(_))));
  }

  #[test]
  fn unknown_label_gets_generic_advice() {
    assert_eq!(treatments("Unknown")[0], "Consult agricultural expert");
    assert_eq!(treatments("Anthracnose"), treatments("Unknown"));
  }
}
