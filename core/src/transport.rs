//! The HTTP calling capability a `RestClient` forwards to.
//!
//! # Design
//! `Transport` names only the three calls the client forwards. Response and
//! error types are associated types, so whatever the implementation returns
//! reaches the caller untouched. `HttpTransport` is the ureq-backed
//! implementation used by the default constructors.

use std::fmt;
use std::io::Read;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use ureq::http::Response;
use ureq::{Agent, Body, SendBody};

use crate::form::FormValues;

pub trait Transport {
    type Response;
    type Error;

    fn get(&self, url: &str) -> Result<Self::Response, Self::Error>;

    fn post(
        &self,
        url: &str,
        content_type: &str,
        body: &mut dyn Read,
    ) -> Result<Self::Response, Self::Error>;

    fn post_form(&self, url: &str, form: &FormValues) -> Result<Self::Response, Self::Error>;
}

static SHARED: OnceLock<Arc<HttpTransport>> = OnceLock::new();

/// Blocking transport on top of a `ureq::Agent`.
///
/// Status codes are never turned into errors: a 404 or 500 comes back as an
/// ordinary `Response`, leaving interpretation to the caller.
#[derive(Clone)]
pub struct HttpTransport {
    agent: Agent,
    timeout: Option<Duration>,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::build(None)
    }

    /// Transport whose every call is bounded by `timeout` end to end.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::build(Some(timeout))
    }

    /// The process-wide default transport, created on first use.
    pub fn shared() -> Arc<HttpTransport> {
        Arc::clone(SHARED.get_or_init(|| Arc::new(HttpTransport::new())))
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    fn build(timeout: Option<Duration>) -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(timeout)
            .build()
            .new_agent();
        Self { agent, timeout }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl Transport for HttpTransport {
    type Response = Response<Body>;
    type Error = ureq::Error;

    fn get(&self, url: &str) -> Result<Self::Response, Self::Error> {
        self.agent.get(url).call()
    }

    fn post(
        &self,
        url: &str,
        content_type: &str,
        body: &mut dyn Read,
    ) -> Result<Self::Response, Self::Error> {
        self.agent
            .post(url)
            .content_type(content_type)
            .send(SendBody::from_reader(body))
    }

    fn post_form(&self, url: &str, form: &FormValues) -> Result<Self::Response, Self::Error> {
        self.agent.post(url).send_form(form.iter())
    }
}
