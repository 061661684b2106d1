//! HTTP layer translating requests into link service operations.
//!
//! - [`dto`] - Request/response bodies
//! - [`extract`] - Body extractor accepting JSON or form data
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - `/api` route table

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
