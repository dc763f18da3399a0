//! Boundary error type
//!
//! The scoring core is total and has no error path; everything that can
//! fail lives at the network boundary and surfaces here.

use thiserror::Error;

/// Errors from the Bluesky client boundary
#[derive(Debug, Error)]
pub enum BotError {
    /// Transport-level failure
    #[error("transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// XRPC-level error response
    #[error("xrpc error {status}: {error}: {message}")]
    Xrpc {
        status: u16,
        error: String,
        message: String,
    },

    /// Credentials not supplied
    #[error("missing credentials: set BSKY_IDENTIFIER and BSKY_APP_PASSWORD")]
    MissingCredentials,

    /// Authenticated endpoint called before login
    #[error("not authenticated: call login first")]
    NotAuthenticated,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xrpc_error_display() {
        let err = BotError::Xrpc {
            status: 400,
            error: "InvalidRequest".to_string(),
            message: "bad cursor".to_string(),
        };
        assert_eq!(err.to_string(), "xrpc error 400: InvalidRequest: bad cursor");
    }
}
