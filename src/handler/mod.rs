//! Request handler module
//!
//! Responsible for request routing dispatch, validation, and fixture
//! lookup for the recorded catalog endpoints.

pub mod fixtures;
pub mod router;
pub mod routes;
pub mod validate;

// Re-export main entry point
pub use router::handle_request;
