//! Thin SOAP client plumbing around [`ironsoap_xml::NamespaceRewriter`].
//!
//! Everything here is deliberately shallow: envelope wrapping, endpoint
//! configuration and sans-io HTTP request construction. The namespace
//! correction itself lives in `ironsoap-xml`; actually sending the request
//! is the caller's transport's job.

pub mod client;
pub mod envelope;
pub mod namespace;

pub use client::{SoapClient, SoapVersion};
pub use envelope::SoapEnvelope;

#[derive(Debug, thiserror::Error)]
pub enum SoapClientError {
    #[error("Rewrite error: {0}")]
    Rewrite(#[from] ironsoap_xml::RewriteError),

    #[error("HTTP error: {0}")]
    Http(#[from] hyper::http::Error),

    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
}
