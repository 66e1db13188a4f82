//! Base and full URL construction.
//!
//! Both functions are plain string concatenation. Hosts are not validated and
//! paths are not normalized: a host that already carries a scheme, or a path
//! with a leading `/`, produces exactly the string you would expect from
//! gluing the pieces together.

use crate::error::ClientError;

/// `http://{host}/` when `insecure`, `https://{host}/` otherwise.
pub fn base_url(insecure: bool, host: &str) -> String {
    let scheme = if insecure { "http://" } else { "https://" };
    format!("{scheme}{host}/")
}

pub fn full_url(base_url: &str, path: &str) -> String {
    format!("{base_url}{path}")
}

/// Host string for a localhost client. Accepts `"8080"` and `":8080"` alike.
pub fn localhost_host(port: &str) -> Result<String, ClientError> {
    if port.is_empty() {
        return Err(ClientError::InvalidArgument(
            "localhost port must not be empty".to_string(),
        ));
    }
    let port = port.strip_prefix(':').unwrap_or(port);
    Ok(format!("localhost:{port}"))
}
