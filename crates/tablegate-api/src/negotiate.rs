//! Content negotiation
//!
//! Maps an `Accept` or `Content-Type` header value to a [`Representation`].
//! Unsupported values are an ordinary outcome; the router turns them into
//! 406 responses.

use std::fmt;

/// Wire encoding of a schema document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Representation {
    /// `text/xml`
    Xml,
    /// `text/plain`
    PlainText,
    /// `multipart/related`, recognised but not supported
    MultipartNotSupported,
    Unrecognized,
}

/// Media-type tokens checked in order against the lower-cased header.
const MEDIA_TYPES: [(&str, Representation); 3] = [
    ("text/xml", Representation::Xml),
    ("text/plain", Representation::PlainText),
    ("multipart/related", Representation::MultipartNotSupported),
];

impl Representation {
    /// Media type written as the response `Content-Type`, for encodable kinds.
    pub fn media_type(&self) -> Option<&'static str> {
        match self {
            Representation::Xml => Some("text/xml"),
            Representation::PlainText => Some("text/plain"),
            Representation::MultipartNotSupported | Representation::Unrecognized => None,
        }
    }

    pub fn is_supported(&self) -> bool {
        self.media_type().is_some()
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Representation::Xml => f.write_str("text/xml"),
            Representation::PlainText => f.write_str("text/plain"),
            Representation::MultipartNotSupported => f.write_str("multipart/related"),
            Representation::Unrecognized => f.write_str("unrecognized"),
        }
    }
}

/// Header text is limited to visible ASCII, spaces and tabs.
fn is_header_text(value: &str) -> bool {
    value.chars().all(|c| c == '\t' || c == ' ' || c.is_ascii_graphic())
}

/// Select the representation named by a header value.
///
/// A missing header or `*/*` selects XML. A value carrying anything other
/// than visible ASCII is unrecognized. Otherwise the first media type
/// contained (case-insensitively) in the value wins.
pub fn negotiate(header: Option<&str>) -> Representation {
    let value = match header.map(str::trim) {
        None | Some("") | Some("*/*") => return Representation::Xml,
        Some(v) if !is_header_text(v) => return Representation::Unrecognized,
        Some(v) => v.to_ascii_lowercase(),
    };

    MEDIA_TYPES
        .iter()
        .find(|(token, _)| value.contains(token))
        .map(|(_, repr)| *repr)
        .unwrap_or(Representation::Unrecognized)
}
