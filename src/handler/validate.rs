//! Request validation module
//!
//! String-equality checks over headers and query arguments. A missing
//! header or argument compares as the empty string, so "absent" and
//! "wrong value" fail through the same path.

use crate::error::FixtureError;
use crate::handler::router::FixtureRequest;

/// Require a header to equal `expected` exactly.
pub fn header(
    req: &FixtureRequest<'_>,
    name: &'static str,
    expected: &'static str,
) -> Result<(), FixtureError> {
    let actual = req.header(name);
    if actual == expected {
        Ok(())
    } else {
        Err(FixtureError::HeaderMismatch {
            name,
            actual: actual.to_string(),
            expected,
        })
    }
}

/// Require a query argument to equal `expected` exactly.
pub fn argument(
    req: &FixtureRequest<'_>,
    name: &'static str,
    expected: &'static str,
) -> Result<(), FixtureError> {
    let actual = req.argument(name);
    if actual == expected {
        Ok(())
    } else {
        Err(FixtureError::ArgumentMismatch {
            name,
            actual: actual.to_string(),
            expected,
        })
    }
}

/// Every route requires the client to ask for gzip transport encoding.
pub fn gzip_encoding(req: &FixtureRequest<'_>) -> Result<(), FixtureError> {
    header(req, "Accept-Encoding", "gzip")
}
