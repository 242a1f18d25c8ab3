//! Data structures representing database entities.

pub mod crop_health;
pub mod disease;
pub mod session;
pub mod user;

pub use crop_health::CropHealthRecord;
pub use disease::DiseaseRecord;
pub use session::Session;
pub use user::User;
