//! Forward-only tag scanner.
//!
//! Splits a marshalled document into tag and text segments so each rewrite
//! pass can transform tags independently and reassemble the document. The
//! scan only looks for `<`/`>` pairs; unbalanced input degrades to text
//! segments instead of an error.

use std::borrow::Cow;

/// One piece of the document, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Character data between tags.
    Text(&'a str),
    /// Element tag content, without the surrounding `<` and `>`.
    Tag(Cow<'a, str>),
    /// Declarations, comments and CDATA markers (`<?…>`, `<!…>`); never
    /// rewritten by any pass.
    Markup(&'a str),
}

/// Scans `doc` into a lossless segment sequence.
///
/// A trailing `<` without a matching `>` is surfaced as [`Segment::Text`] so
/// [`reassemble`] reproduces the input byte for byte.
pub fn segments(doc: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut rest = doc;

    loop {
        let Some(start) = rest.find('<') else {
            if !rest.is_empty() {
                out.push(Segment::Text(rest));
            }
            return out;
        };
        let Some(len) = rest[start..].find('>') else {
            out.push(Segment::Text(rest));
            return out;
        };
        let end = start + len;

        if start > 0 {
            out.push(Segment::Text(&rest[..start]));
        }

        let tag = &rest[start + 1..end];
        if tag.starts_with('?') || tag.starts_with('!') {
            out.push(Segment::Markup(tag));
        } else {
            out.push(Segment::Tag(Cow::Borrowed(tag)));
        }

        rest = &rest[end + 1..];
    }
}

/// Rebuilds the document text from a segment sequence.
pub fn reassemble(segments: &[Segment<'_>]) -> String {
    let mut out = String::new();
    for segment in segments {
        match segment {
            Segment::Text(text) => out.push_str(text),
            Segment::Tag(tag) => {
                out.push('<');
                out.push_str(tag);
                out.push('>');
            }
            Segment::Markup(markup) => {
                out.push('<');
                out.push_str(markup);
                out.push('>');
            }
        }
    }
    out
}

/// An element tag decomposed for rewriting.
///
/// The element name token ends at the first space; a trailing `/` right
/// before `>` marks the tag self-closing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagParts<'a> {
    pub closing: bool,
    pub name: &'a str,
    /// Attribute text after the first space, with the trailing `/` of a
    /// self-closing tag stripped. `None` when the tag is bare.
    pub attrs: Option<&'a str>,
    pub self_closing: bool,
}

impl<'a> TagParts<'a> {
    pub fn parse(tag: &'a str) -> Self {
        if let Some(name) = tag.strip_prefix('/') {
            return Self {
                closing: true,
                name,
                attrs: None,
                self_closing: false,
            };
        }

        let (body, self_closing) = match tag.strip_suffix('/') {
            Some(body) => (body, true),
            None => (tag, false),
        };

        match body.split_once(' ') {
            Some((name, attrs)) => Self {
                closing: false,
                name,
                attrs: Some(attrs),
                self_closing,
            },
            None => Self {
                closing: false,
                name: body,
                attrs: None,
                self_closing,
            },
        }
    }

    /// A name token counts as prefixed when it contains a colon. Nothing is
    /// checked against the namespace table.
    pub fn is_prefixed(&self) -> bool {
        self.name.contains(':')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_text_and_tags() {
        let segs = segments("<a>hi<b/></a>");
        assert_eq!(
            segs,
            vec![
                Segment::Tag(Cow::Borrowed("a")),
                Segment::Text("hi"),
                Segment::Tag(Cow::Borrowed("b/")),
                Segment::Tag(Cow::Borrowed("/a")),
            ]
        );
    }

    #[test]
    fn declarations_and_comments_are_markup() {
        let segs = segments(r#"<?xml version="1.0"?><!-- note --><root/>"#);
        assert!(matches!(segs[0], Segment::Markup(_)));
        assert!(matches!(segs[1], Segment::Markup(_)));
        assert!(matches!(segs[2], Segment::Tag(_)));
    }

    #[test]
    fn reassemble_is_lossless() {
        let doc = r#"<?xml version="1.0"?><a x="1">text<b/> tail</a>"#;
        assert_eq!(reassemble(&segments(doc)), doc);
    }

    #[test]
    fn unclosed_tag_falls_back_to_text() {
        let doc = "<a>oops<b";
        let segs = segments(doc);
        assert_eq!(segs.last(), Some(&Segment::Text("oops<b")));
        assert_eq!(reassemble(&segs), doc);
    }

    #[test]
    fn parses_opening_tag_with_attributes() {
        let parts = TagParts::parse(r#"Item xsi:type="Item""#);
        assert!(!parts.closing);
        assert!(!parts.self_closing);
        assert_eq!(parts.name, "Item");
        assert_eq!(parts.attrs, Some(r#"xsi:type="Item""#));
        assert!(!parts.is_prefixed());
    }

    #[test]
    fn parses_closing_and_self_closing_tags() {
        let closing = TagParts::parse("/ns1:Item");
        assert!(closing.closing);
        assert_eq!(closing.name, "ns1:Item");
        assert!(closing.is_prefixed());

        let bare = TagParts::parse("Item/");
        assert!(bare.self_closing);
        assert_eq!(bare.name, "Item");
        assert_eq!(bare.attrs, None);

        let with_attrs = TagParts::parse(r#"Item id="1"/"#);
        assert!(with_attrs.self_closing);
        assert_eq!(with_attrs.attrs, Some(r#"id="1""#));
    }
}
