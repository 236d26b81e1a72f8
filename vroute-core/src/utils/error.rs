#[cfg(test)]
#[path = "../../tests/unit/utils/error_test.rs"]
mod error_test;

use std::fmt;

/// An error raised while building the problem model.
///
/// The overwhelming majority of failures are `Input` ones: a malformed or internally inconsistent
/// problem definition. `Routing` covers failures to establish a routing engine for the instance.
/// Every message is human readable and names the offending field and entity id where applicable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A malformed or inconsistent problem definition.
    Input(String),
    /// A failure to establish a routing engine.
    Routing(String),
}

/// A type alias for result type with model [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns the human readable message without the error kind.
    pub fn message(&self) -> &str {
        match self {
            Error::Input(message) | Error::Routing(message) => message,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Input(message) => write!(f, "input error: {message}"),
            Error::Routing(message) => write!(f, "routing error: {message}"),
        }
    }
}

impl std::error::Error for Error {}
