use std::collections::HashMap;

use ironsoap_xml::{Marshal, NamespaceRewriter};
use tracing::debug;
use typed_builder::TypedBuilder;
use url::Url;

use crate::SoapClientError;
use crate::envelope::SoapEnvelope;
use crate::namespace::{SOAP_11_ENVELOPE_NAMESPACE_URI, SOAP_12_ENVELOPE_NAMESPACE_URI};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoapVersion {
    Soap11,
    Soap12,
}

impl SoapVersion {
    pub fn envelope_uri(self) -> &'static str {
        match self {
            SoapVersion::Soap11 => SOAP_11_ENVELOPE_NAMESPACE_URI,
            SoapVersion::Soap12 => SOAP_12_ENVELOPE_NAMESPACE_URI,
        }
    }
}

/// A WSDL-style SOAP client. All the interesting work happens in the
/// namespace rewriter; this type only wires endpoint, namespace table and
/// envelope together into an HTTP request.
#[derive(Debug, Clone, TypedBuilder)]
pub struct SoapClient {
    endpoint: Url,
    #[builder(default = SoapVersion::Soap11)]
    version: SoapVersion,
    #[builder(default)]
    namespaces: HashMap<String, String>,
    #[builder(default, setter(into, strip_option))]
    default_prefix: Option<String>,
}

impl SoapClient {
    pub fn new(endpoint: &str) -> Result<Self, SoapClientError> {
        let endpoint = Url::parse(endpoint)
            .map_err(|error| SoapClientError::InvalidEndpoint(error.to_string()))?;
        Ok(Self {
            endpoint,
            version: SoapVersion::Soap11,
            namespaces: HashMap::new(),
            default_prefix: None,
        })
    }

    /// Replaces the namespace table declared on every request's root element.
    pub fn set_namespaces(&mut self, namespaces: HashMap<String, String>) {
        self.namespaces = namespaces;
    }

    /// Builds the HTTP request for one SOAP call. Sending it is the
    /// caller's transport's job, not ours.
    pub fn request(
        &self,
        action: &str,
        body: &impl Marshal,
    ) -> Result<hyper::Request<String>, SoapClientError> {
        let envelope = SoapEnvelope::new(self.version.envelope_uri(), body);

        let mut corrected = Vec::new();
        let mut rewriter = NamespaceRewriter::new(
            &mut corrected,
            self.namespaces.clone(),
            self.default_prefix.clone(),
        );
        rewriter.encode(&envelope)?;
        rewriter.flush()?;
        let xml = String::from_utf8_lossy(&corrected).into_owned();

        debug!(endpoint = %self.endpoint, action, bytes = xml.len(), "built SOAP request");

        let builder = hyper::Request::post(self.endpoint.as_str());
        let builder = match self.version {
            SoapVersion::Soap11 => builder
                .header(hyper::header::CONTENT_TYPE, "text/xml; charset=utf-8")
                .header("SOAPAction", format!("\"{action}\"")),
            SoapVersion::Soap12 => builder.header(
                hyper::header::CONTENT_TYPE,
                format!("application/soap+xml; charset=utf-8; action=\"{action}\""),
            ),
        };
        Ok(builder.body(xml)?)
    }
}
