//! The namespace rewriter and its three passes.
//!
//! Pass order is fixed: root declarations, then the optional default prefix,
//! then the `xmlns:xsi` correction. Each pass is a total function over the
//! segment sequence; a malformed buffer produces best-effort output, never an
//! error.

use std::borrow::Cow;
use std::collections::HashMap;
use std::io;

use tracing::trace;

use crate::marshal::{Marshal, MarshalError};
use crate::tokenizer::{self, Segment, TagParts};

#[derive(Debug, thiserror::Error)]
pub enum RewriteError {
    #[error("Marshal error: {0}")]
    Marshal(#[from] MarshalError),

    #[error("Write error: {0}")]
    Write(#[from] io::Error),
}

/// Prefixes that never trigger the default-prefix pass.
pub const RESERVED_PREFIXES: &[&str] = &["soap", "xsi", "xsd", "xml"];

/// Policy knobs of the rewrite, kept explicit so tests can exercise both the
/// default and an overridden set.
#[derive(Debug, Clone)]
pub struct RewritePolicy {
    pub reserved_prefixes: &'static [&'static str],
}

impl Default for RewritePolicy {
    fn default() -> Self {
        Self {
            reserved_prefixes: RESERVED_PREFIXES,
        }
    }
}

impl RewritePolicy {
    fn is_reserved(&self, prefix: &str) -> bool {
        self.reserved_prefixes.contains(&prefix)
    }
}

/// Wraps a byte-producing marshaller and corrects its namespace handling
/// before the document reaches the sink.
///
/// The sink is borrowed, only written to and never closed. The namespace
/// table and default prefix are fixed for the lifetime of the rewriter; the
/// buffer is produced fresh per encode/flush cycle.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use ironsoap_xml::{NamespaceRewriter, RawXml};
///
/// let mut out = Vec::new();
/// let mut namespaces = HashMap::new();
/// namespaces.insert(
///     "xsi".to_string(),
///     "http://www.w3.org/2001/XMLSchema-instance".to_string(),
/// );
/// let mut rewriter = NamespaceRewriter::new(&mut out, namespaces, None);
/// rewriter.encode(&RawXml(r#"<Item xsi:type="Item"/>"#)).unwrap();
/// rewriter.flush().unwrap();
/// assert!(String::from_utf8(out).unwrap().contains("xmlns:xsi"));
/// ```
pub struct NamespaceRewriter<W> {
    writer: W,
    buffer: Vec<u8>,
    namespaces: HashMap<String, String>,
    default_prefix: Option<String>,
    policy: RewritePolicy,
}

impl<W: io::Write> NamespaceRewriter<W> {
    /// `namespaces` may be empty; `default_prefix` of `None` (or an empty
    /// string) skips the default-prefix pass while the xsi correction still
    /// runs.
    pub fn new(
        writer: W,
        namespaces: HashMap<String, String>,
        default_prefix: Option<String>,
    ) -> Self {
        Self {
            writer,
            buffer: Vec::new(),
            namespaces,
            default_prefix,
            policy: RewritePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: RewritePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Serializes `value` through the wrapped marshaller into the internal
    /// buffer. A marshaller failure surfaces verbatim and leaves the buffer
    /// untouched.
    pub fn encode(&mut self, value: &impl Marshal) -> Result<(), RewriteError> {
        let mut out = Vec::new();
        value.marshal(&mut out)?;
        self.buffer.extend_from_slice(&out);
        Ok(())
    }

    /// Applies the namespace corrections and writes the final document once
    /// to the sink. The buffer is kept on a write failure so the caller can
    /// still inspect it.
    pub fn flush(&mut self) -> Result<(), RewriteError> {
        let doc = String::from_utf8_lossy(&self.buffer);
        let corrected = self.apply_namespaces(&doc);
        self.writer.write_all(corrected.as_bytes())?;
        self.buffer.clear();
        Ok(())
    }

    /// The raw marshalled text as buffered so far, before any correction.
    pub fn buffered(&self) -> &[u8] {
        &self.buffer
    }

    fn apply_namespaces(&self, doc: &str) -> String {
        trace!(
            namespaces = self.namespaces.len(),
            default_prefix = ?self.default_prefix,
            "rewriting marshalled document"
        );

        let mut segments = tokenizer::segments(doc);

        declare_root_namespaces(&mut segments, &self.namespaces);

        if let Some(prefix) = self.default_prefix.as_deref() {
            if !prefix.is_empty() && !self.policy.is_reserved(prefix) {
                apply_default_prefix(&mut segments, prefix);
            }
        }

        declare_xsi(&mut segments, &self.namespaces);

        tokenizer::reassemble(&segments)
    }
}

/// Pass 1: appends one ` xmlns:<prefix>="<uri>"` per table entry to the first
/// element tag. Markup segments are skipped when locating it. Iteration
/// order over the table is unspecified.
pub fn declare_root_namespaces(segments: &mut [Segment<'_>], namespaces: &HashMap<String, String>) {
    if namespaces.is_empty() {
        return;
    }
    let Some(root) = segments.iter_mut().find_map(|segment| match segment {
        Segment::Tag(tag) => Some(tag),
        _ => None,
    }) else {
        return;
    };

    let mut declarations = String::new();
    for (prefix, uri) in namespaces {
        declarations.push_str(&format!(" xmlns:{prefix}=\"{uri}\""));
    }

    // A self-closing root keeps its trailing slash after the declarations.
    let rebuilt = match root.strip_suffix('/') {
        Some(body) => format!("{body}{declarations}/"),
        None => format!("{root}{declarations}"),
    };
    *root = Cow::Owned(rebuilt);
}

/// Pass 2: qualifies every unprefixed element name with `prefix` on opening,
/// self-closing and closing tags, and turns a bare `xmlns="…"` declaration on
/// a rewritten tag into `xmlns:prefix="…"`. Tags already carrying a prefix
/// are left alone.
pub fn apply_default_prefix(segments: &mut [Segment<'_>], prefix: &str) {
    for segment in segments.iter_mut() {
        let Segment::Tag(tag) = segment else {
            continue;
        };
        let parts = TagParts::parse(tag);
        if parts.is_prefixed() {
            continue;
        }

        let rebuilt = if parts.closing {
            format!("/{prefix}:{}", parts.name)
        } else if let Some(attrs) = parts.attrs {
            let slash = if parts.self_closing { "/" } else { "" };
            let full = format!("{prefix}:{} {attrs}{slash}", parts.name);
            full.replacen(" xmlns=\"", &format!(" xmlns:{prefix}=\""), 1)
        } else if parts.self_closing {
            format!("{prefix}:{}/", parts.name)
        } else {
            format!("{prefix}:{}", parts.name)
        };

        *tag = Cow::Owned(rebuilt);
    }
}

/// Pass 3: inserts ` xmlns:xsi="<uri>"` right after the element name of any
/// tag whose attribute text mentions `xsi:` without declaring it, provided
/// the table knows the `xsi` URI. Idempotent on its own output.
///
/// A bare tag has no attribute text to search, so it cannot receive the
/// correction; this is a known boundary limitation of the textual rewrite.
pub fn declare_xsi(segments: &mut [Segment<'_>], namespaces: &HashMap<String, String>) {
    let Some(uri) = namespaces.get("xsi") else {
        return;
    };

    for segment in segments.iter_mut() {
        let Segment::Tag(tag) = segment else {
            continue;
        };
        let parts = TagParts::parse(tag);
        if parts.closing {
            continue;
        }
        let Some(attrs) = parts.attrs else {
            continue;
        };
        if !attrs.contains("xsi:") || attrs.contains("xmlns:xsi=") {
            continue;
        }

        let slash = if parts.self_closing { "/" } else { "" };
        let rebuilt = format!("{} xmlns:xsi=\"{uri}\" {attrs}{slash}", parts.name);
        *tag = Cow::Owned(rebuilt);
    }
}
