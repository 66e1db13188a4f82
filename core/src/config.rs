//! Serializable client configuration.

use std::time::Duration;

use serde::Deserialize;

use crate::error::ClientError;

/// Settings for `RestClient::from_config`.
///
/// ```json
/// { "host": "localhost:8080", "insecure": true, "timeout": "30s" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    pub host: String,
    #[serde(default)]
    pub insecure: bool,
    #[serde(default, with = "humantime_serde")]
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn from_json(raw: &str) -> Result<Self, ClientError> {
        serde_json::from_str(raw).map_err(|e| ClientError::InvalidConfig(e.to_string()))
    }
}
