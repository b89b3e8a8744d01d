//! Post-processing namespace injection for marshalled XML.
//!
//! Generic marshallers cannot express custom namespace prefixes, and they
//! never declare the namespace behind `xsi:type`-style attributes.
//! [`NamespaceRewriter`] wraps such a marshaller, captures its output into a
//! buffer, and patches the raw text before it reaches the wire: namespace
//! declarations on the root element, an optional default prefix on
//! unqualified element names, and `xmlns:xsi` declarations on every tag that
//! carries an `xsi:` attribute without one.
//!
//! The rewrite is a bounded sequence of forward-only textual passes over a
//! well-formed, marshaller-produced document. It is not an XML parser and
//! does not validate its input.

pub mod marshal;
pub mod rewriter;
pub mod tokenizer;

pub use marshal::{Marshal, MarshalError, RawXml};
pub use rewriter::{NamespaceRewriter, RewriteError, RewritePolicy};
