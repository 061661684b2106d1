//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`Link`] - A stored short link with its hit counter
//! - [`NewLink`] - Insert payload for a link that does not exist yet
//! - [`LinkStats`] - Point-in-time statistics view of a link

pub mod link;
pub mod link_stats;

pub use link::{Link, NewLink};
pub use link_stats::LinkStats;
