//! HTTP request handlers.
//!
//! Each handler module maps one endpoint onto a [`crate::application::services::LinkService`]
//! operation.

pub mod health;
pub mod redirect;
pub mod resolve;
pub mod shorten;
pub mod stats;

pub use health::health_handler;
pub use redirect::redirect_handler;
pub use resolve::resolve_handler;
pub use shorten::shorten_handler;
pub use stats::stats_handler;
