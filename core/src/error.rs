//! Errors introduced by the wrapper itself.
//!
//! Transport failures (DNS, refused connections, timeouts) are never wrapped
//! here; they reach the caller as the transport's own error type.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// A constructor argument cannot produce a usable base URL.
    InvalidArgument(String),

    /// A `ClientConfig` document could not be deserialized.
    InvalidConfig(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            ClientError::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ClientError {}
