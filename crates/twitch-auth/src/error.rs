//! Error types for OAuth operations
//!
//! A provider answering with a non-200 status is not an error here: that is
//! an `Outcome::Failure` the caller inspects. These variants cover the cases
//! where no well-formed answer was obtained at all.

use crate::scope::UnknownScope;

/// Errors from OAuth operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Connection failure, timeout, or the body could not be read.
    #[error("HTTP transport failed: {0}")]
    Transport(String),

    /// The body did not match the shape expected for its status class.
    #[error("response decode failed: {0}")]
    Decode(String),

    #[error("invalid endpoint configuration: {0}")]
    InvalidEndpoint(String),

    /// The HTTP client could not be constructed. Raised before any request.
    #[error("HTTP client setup failed: {0}")]
    ClientSetup(String),

    #[error(transparent)]
    UnknownScope(#[from] UnknownScope),
}

/// Result alias for OAuth operations.
pub type Result<T> = std::result::Result<T, Error>;
