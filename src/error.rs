// Fixture error types
// Every validation or lookup failure collapses into one enum, mapped once
// at the router boundary to a JSON error payload.

use thiserror::Error;

/// Errors raised while handling a fixture request.
///
/// Message text mirrors the fake upstream server this replaces, so existing
/// test suites keep matching on the same strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FixtureError {
    #[error("Header '{name}' == '{actual}' != '{expected}'")]
    HeaderMismatch {
        name: &'static str,
        actual: String,
        expected: &'static str,
    },

    #[error("Argument '{name}' == '{actual}' != '{expected}'")]
    ArgumentMismatch {
        name: &'static str,
        actual: String,
        expected: &'static str,
    },

    #[error("Unknown query '{0}'")]
    UnknownQuery(String),

    #[error("Missing argument '{0}'")]
    MissingArgument(&'static str),

    #[error("No fixture for '{0}'")]
    FixtureNotFound(String),

    #[error("Unknown route '{0}'")]
    UnknownRoute(String),
}

impl FixtureError {
    /// HTTP status the fault boundary assigns to this error.
    ///
    /// Only unknown routes get 404; everything else surfaces as the
    /// generic 500 the original server produced for any handler failure.
    pub const fn status(&self) -> u16 {
        match self {
            Self::UnknownRoute(_) => 404,
            _ => 500,
        }
    }
}
