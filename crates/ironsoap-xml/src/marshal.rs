/// Error surfaced verbatim from the wrapped marshaller.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct MarshalError(Box<dyn std::error::Error + Send + Sync>);

impl MarshalError {
    pub fn new(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self(source.into())
    }
}

/// The consumed collaborator: anything that can serialize itself into XML
/// text using its own tag-to-element mapping.
///
/// The rewriter never introspects the value's shape; it only edits the
/// textual output produced here.
pub trait Marshal {
    fn marshal(&self, out: &mut Vec<u8>) -> Result<(), MarshalError>;
}

/// Pre-serialized XML text, passed through as-is.
#[derive(Debug, Clone)]
pub struct RawXml<'a>(pub &'a str);

impl Marshal for RawXml<'_> {
    fn marshal(&self, out: &mut Vec<u8>) -> Result<(), MarshalError> {
        out.extend_from_slice(self.0.as_bytes());
        Ok(())
    }
}
