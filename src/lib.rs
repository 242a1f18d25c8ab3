//! CropWatch: a demonstration crop-monitoring backend.
//!
//! Exposes REST endpoints for simulated satellite health checks, simulated
//! disease detection, weather lookups and agronomy reference data, with
//! session-cookie authentication over a Postgres store. The sensing and
//! classification outputs are documented simulations, not real remote sensing
//! or machine learning.

pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod services;
pub mod state;
pub mod web;

pub use config::AppConfig;
pub use errors::{AppError, Result};
pub use state::AppState;
