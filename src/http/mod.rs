//! HTTP protocol layer module
//!
//! Provides HTTP protocol-related base functionality, decoupled from the
//! fixture-lookup business logic.

pub mod gzip;
pub mod query;
pub mod response;

// Re-export commonly used types
pub use gzip::accepts_gzip;
pub use query::QueryParams;
pub use response::{build_405_response, build_error_response, build_fixture_response};
