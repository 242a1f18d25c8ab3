//! Domain services. Pure or near-pure logic lives here; handlers stay thin.

pub mod agronomy;
pub mod alerts;
pub mod auth;
pub mod classifier;
pub mod sensing;
pub mod sessions;
pub mod weather;
