//! Base-URL convenience wrapper around an HTTP transport.
//!
//! # Overview
//! A `RestClient` remembers a scheme and host (`https://api.example.com/`) and
//! forwards `get` / `post` / `post_form` calls to its transport with the
//! request path appended. Responses and errors come back exactly as the
//! transport produced them.
//!
//! # Design
//! - The base URL is fixed at construction and never normalized afterwards:
//!   full URLs are always `base_url + path`.
//! - The transport is an injected capability (`Transport`) held behind an
//!   `Arc`, so one connection pool can serve many clients and tests can
//!   substitute a recording transport.
//! - The process-wide default transport is an explicit `Arc` obtained from
//!   `HttpTransport::shared()`; the client type holds no global state.

pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod transport;
pub mod url;

pub use client::RestClient;
pub use config::ClientConfig;
pub use error::ClientError;
pub use form::FormValues;
pub use transport::{HttpTransport, Transport};
