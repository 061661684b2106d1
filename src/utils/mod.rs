//! Utility functions for code generation, URL validation, and request handling.
//!
//! - [`code_generator`] - Random short code generation
//! - [`url_validator`] - Target URL validation
//! - [`request_origin`] - Public origin resolution for building short URLs

pub mod code_generator;
pub mod request_origin;
pub mod url_validator;
