//! Base-URL wrapper that forwards requests to a shared transport.
//!
//! # Design
//! `RestClient` holds a fully formed base URL (`scheme://host/`) and an
//! `Arc` to its transport. Nothing is mutated after construction, so a client
//! can be shared across threads whenever the transport can. Each request
//! method builds `base_url + path` and returns the transport's result as is.

use std::io::Read;
use std::sync::Arc;
use std::time::Duration;

use log::{debug, trace};

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::form::FormValues;
use crate::transport::{HttpTransport, Transport};
use crate::url;

/// HTTP client bound to a single host.
#[derive(Debug)]
pub struct RestClient<T: Transport = HttpTransport> {
    base_url: String,
    transport: Arc<T>,
}

impl<T: Transport> Clone for RestClient<T> {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            transport: Arc::clone(&self.transport),
        }
    }
}

impl RestClient<HttpTransport> {
    /// `https://{host}/` over the shared default transport.
    pub fn new(host: &str) -> Self {
        Self::with_transport(host, HttpTransport::shared())
    }

    /// `http://{host}/` over the shared default transport.
    pub fn insecure(host: &str) -> Self {
        Self::with_transport_insecure(host, HttpTransport::shared())
    }

    /// `http://localhost:{port}/`. The port may be given as `"8080"` or `":8080"`.
    pub fn localhost(port: &str) -> Result<Self, ClientError> {
        let host = url::localhost_host(port)?;
        Ok(Self::insecure(&host))
    }

    /// `https://{host}/` over a fresh transport bounded by `timeout`.
    pub fn with_timeout(host: &str, timeout: Duration) -> Self {
        Self::with_transport(host, Arc::new(HttpTransport::with_timeout(timeout)))
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        let transport = match config.timeout {
            Some(timeout) => Arc::new(HttpTransport::with_timeout(timeout)),
            None => HttpTransport::shared(),
        };
        Self::build(config.insecure, &config.host, transport)
    }
}

impl<T: Transport> RestClient<T> {
    pub fn with_transport(host: &str, transport: Arc<T>) -> Self {
        Self::build(false, host, transport)
    }

    pub fn with_transport_insecure(host: &str, transport: Arc<T>) -> Self {
        Self::build(true, host, transport)
    }

    fn build(insecure: bool, host: &str, transport: Arc<T>) -> Self {
        let base_url = url::base_url(insecure, host);
        trace!("rest client created for {base_url}");
        Self {
            base_url,
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &Arc<T> {
        &self.transport
    }

    /// Full request URL for `path`. No slash handling is applied.
    pub fn url(&self, path: &str) -> String {
        url::full_url(&self.base_url, path)
    }

    pub fn get(&self, path: &str) -> Result<T::Response, T::Error> {
        let url = self.url(path);
        debug!("GET {url}");
        self.transport.get(&url)
    }

    pub fn post(
        &self,
        path: &str,
        content_type: &str,
        body: &mut dyn Read,
    ) -> Result<T::Response, T::Error> {
        let url = self.url(path);
        debug!("POST {url} ({content_type})");
        self.transport.post(&url, content_type, body)
    }

    pub fn post_form(&self, path: &str, form: &FormValues) -> Result<T::Response, T::Error> {
        let url = self.url(path);
        debug!("POST {url} (form, {} fields)", form.len());
        self.transport.post_form(&url, form)
    }
}
