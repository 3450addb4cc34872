//! Schema codec
//!
//! Converts between the schema model and its wire representations:
//! XML in both directions, plain text for responses only.
//!
//! ## XML shapes
//!
//! Table metadata response:
//! ```xml
//! <table>
//!   <name>orders</name>
//!   <columnfamilies>
//!     <columnfamily>
//!       <name>cf:</name>
//!       <compression>NONE</compression>
//!       <bloomfilter>false</bloomfilter>
//!       <max-versions>3</max-versions>
//!       <maximum-cell-size>2147483647</maximum-cell-size>
//!     </columnfamily>
//!   </columnfamilies>
//! </table>
//! ```
//!
//! Region list response: `<regions><region>start-key</region>...</regions>`.
//!
//! Create / alter request: any root element holding a `name` (create only)
//! and repeated `columnfamily` elements.

mod plain;
mod xml;

use tablegate_commons::{ColumnFamilyDescriptor, TableDescriptor};
use thiserror::Error;

use crate::negotiate::Representation;

pub use xml::normalize_family_name;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Body is not a well-formed document or lacks mandatory fields
    #[error("{0}")]
    Malformed(String),

    #[error("Failed to encode response: {0}")]
    Encode(String),

    #[error("Unsupported representation: {0}")]
    Unsupported(Representation),
}

impl CodecError {
    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }
}

/// Encoded response body with its media type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

fn encoded(repr: Representation, body: Vec<u8>) -> Result<Encoded, CodecError> {
    let content_type = repr.media_type().ok_or(CodecError::Unsupported(repr))?;
    Ok(Encoded { content_type, body })
}

/// Encode a table's metadata.
pub fn encode_table(
    descriptor: &TableDescriptor,
    repr: Representation,
) -> Result<Encoded, CodecError> {
    match repr {
        Representation::Xml => encoded(repr, xml::encode_table(descriptor)?),
        Representation::PlainText => encoded(repr, plain::encode_table(descriptor).into_bytes()),
        other => Err(CodecError::Unsupported(other)),
    }
}

/// Encode region start keys.
pub fn encode_regions(start_keys: &[Vec<u8>], repr: Representation) -> Result<Encoded, CodecError> {
    match repr {
        Representation::Xml => encoded(repr, xml::encode_regions(start_keys)?),
        Representation::PlainText => encoded(repr, plain::encode_regions(start_keys).into_bytes()),
        other => Err(CodecError::Unsupported(other)),
    }
}

/// Decode a create-table document.
pub fn decode_table(body: &[u8], repr: Representation) -> Result<TableDescriptor, CodecError> {
    match repr {
        Representation::Xml => xml::decode_table(body),
        other => Err(CodecError::Unsupported(other)),
    }
}

/// Decode the column families of an alter-table document.
pub fn decode_column_families(
    body: &[u8],
    repr: Representation,
) -> Result<Vec<ColumnFamilyDescriptor>, CodecError> {
    match repr {
        Representation::Xml => xml::decode_column_families(body),
        other => Err(CodecError::Unsupported(other)),
    }
}
