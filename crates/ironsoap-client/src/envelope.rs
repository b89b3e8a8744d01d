use ironsoap_xml::{Marshal, MarshalError};

use crate::namespace::SOAP_ENVELOPE_NAMESPACE_ALIAS;

/// A SOAP envelope around a marshalled body.
///
/// Implements [`Marshal`] so the whole envelope flows through the namespace
/// rewriter in one encode call. The `soap` prefix is declared on the
/// envelope itself, so the default-prefix pass skips these tags and the
/// root-declaration pass appends the caller's table next to it.
#[derive(Debug, Clone)]
pub struct SoapEnvelope<'a, B> {
    envelope_uri: &'a str,
    body: &'a B,
}

impl<'a, B: Marshal> SoapEnvelope<'a, B> {
    pub fn new(envelope_uri: &'a str, body: &'a B) -> Self {
        Self { envelope_uri, body }
    }
}

impl<B: Marshal> Marshal for SoapEnvelope<'_, B> {
    fn marshal(&self, out: &mut Vec<u8>) -> Result<(), MarshalError> {
        let alias = SOAP_ENVELOPE_NAMESPACE_ALIAS;
        out.extend_from_slice(
            format!(
                "<{alias}:Envelope xmlns:{alias}=\"{}\"><{alias}:Body>",
                self.envelope_uri
            )
            .as_bytes(),
        );
        self.body.marshal(out)?;
        out.extend_from_slice(format!("</{alias}:Body></{alias}:Envelope>").as_bytes());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namespace::SOAP_12_ENVELOPE_NAMESPACE_URI;
    use ironsoap_xml::RawXml;

    #[test]
    fn wraps_the_body_in_envelope_and_body_tags() {
        let body = RawXml("<CreateCart/>");
        let envelope = SoapEnvelope::new(SOAP_12_ENVELOPE_NAMESPACE_URI, &body);

        let mut out = Vec::new();
        envelope.marshal(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            r#"<soap:Envelope xmlns:soap="http://www.w3.org/2003/05/soap-envelope"><soap:Body><CreateCart/></soap:Body></soap:Envelope>"#
        );
    }
}
