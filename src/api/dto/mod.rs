//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for (de)serialization and validator for input checks.

pub mod health;
pub mod resolve;
pub mod shorten;
pub mod stats;
