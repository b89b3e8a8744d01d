pub const SOAP_11_ENVELOPE_NAMESPACE_URI: &str = "http://schemas.xmlsoap.org/soap/envelope/";
pub const SOAP_12_ENVELOPE_NAMESPACE_URI: &str = "http://www.w3.org/2003/05/soap-envelope";
pub const SOAP_ENVELOPE_NAMESPACE_ALIAS: &str = "soap";

pub const XML_SCHEMA_INSTANCE_NAMESPACE_URI: &str = "http://www.w3.org/2001/XMLSchema-instance";
pub const XML_SCHEMA_INSTANCE_NAMESPACE_ALIAS: &str = "xsi";

pub const XML_SCHEMA_NAMESPACE_URI: &str = "http://www.w3.org/2001/XMLSchema";
pub const XML_SCHEMA_NAMESPACE_ALIAS: &str = "xsd";
