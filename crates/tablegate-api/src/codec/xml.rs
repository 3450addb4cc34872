//! XML encoding and decoding
//!
//! Responses are written with `quick_xml::Writer`. Requests are parsed into
//! a `roxmltree` document and every attribute is read from the first element
//! with the matching tag anywhere below the searched node, in document
//! order. Duplicate tags therefore resolve to their first occurrence.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use roxmltree::{Document, Node};
use std::fmt;
use std::str::FromStr;
use tablegate_commons::schemas::FAMILY_DELIMITER;
use tablegate_commons::{ColumnFamilyDescriptor, Compression, TableDescriptor};

use super::CodecError;

const TABLE: &str = "table";
const NAME: &str = "name";
const COLUMN_FAMILIES: &str = "columnfamilies";
const COLUMN_FAMILY: &str = "columnfamily";
const COMPRESSION: &str = "compression";
const BLOOM_FILTER: &str = "bloomfilter";
const MAX_VERSIONS: &str = "max-versions";
const MAXIMUM_CELL_SIZE: &str = "maximum-cell-size";
const MAX_CELL_SIZE: &str = "max-cell-size";
const IN_MEMORY: &str = "in-memory";
const BLOCK_CACHE: &str = "block-cache";
const TIME_TO_LIVE: &str = "time-to-live";
const REGIONS: &str = "regions";
const REGION: &str = "region";

// ---------------------------------------------------------------------------
// Encoding
// ---------------------------------------------------------------------------

fn encode_error<E: fmt::Display>(err: E) -> CodecError {
    CodecError::Encode(err.to_string())
}

/// Thin element-oriented wrapper over `quick_xml::Writer`.
struct XmlOutput {
    writer: Writer<Vec<u8>>,
}

impl XmlOutput {
    fn new() -> Result<Self, CodecError> {
        let mut writer = Writer::new(Vec::new());
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(encode_error)?;
        Ok(Self { writer })
    }

    fn start(&mut self, tag: &str) -> Result<(), CodecError> {
        self.writer.write_event(Event::Start(BytesStart::new(tag))).map_err(encode_error)
    }

    fn end(&mut self, tag: &str) -> Result<(), CodecError> {
        self.writer.write_event(Event::End(BytesEnd::new(tag))).map_err(encode_error)
    }

    /// `<tag>text</tag>`, with the text escaped
    fn element(&mut self, tag: &str, text: &str) -> Result<(), CodecError> {
        self.start(tag)?;
        self.writer.write_event(Event::Text(BytesText::new(text))).map_err(encode_error)?;
        self.end(tag)
    }

    fn finish(self) -> Vec<u8> {
        self.writer.into_inner()
    }
}

pub(super) fn encode_table(descriptor: &TableDescriptor) -> Result<Vec<u8>, CodecError> {
    let mut out = XmlOutput::new()?;
    out.start(TABLE)?;
    out.element(NAME, &descriptor.name)?;
    out.start(COLUMN_FAMILIES)?;
    for family in &descriptor.column_families {
        out.start(COLUMN_FAMILY)?;
        out.element(NAME, &family.name)?;
        out.element(COMPRESSION, family.compression.as_str())?;
        out.element(BLOOM_FILTER, &family.bloom_filter.to_string())?;
        out.element(MAX_VERSIONS, &family.max_versions.to_string())?;
        out.element(MAXIMUM_CELL_SIZE, &family.max_cell_size.to_string())?;
        out.end(COLUMN_FAMILY)?;
    }
    out.end(COLUMN_FAMILIES)?;
    out.end(TABLE)?;
    Ok(out.finish())
}

/// Characters allowed in an XML 1.0 document (`Char` production).
fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}')
}

/// Lossy UTF-8 text of a region start key with characters XML cannot carry,
/// such as C0 controls, replaced by U+FFFD.
fn region_key_text(key: &[u8]) -> String {
    String::from_utf8_lossy(key)
        .chars()
        .map(|c| if is_xml_char(c) { c } else { char::REPLACEMENT_CHARACTER })
        .collect()
}

pub(super) fn encode_regions(start_keys: &[Vec<u8>]) -> Result<Vec<u8>, CodecError> {
    let mut out = XmlOutput::new()?;
    out.start(REGIONS)?;
    for key in start_keys {
        out.element(REGION, &region_key_text(key))?;
    }
    out.end(REGIONS)?;
    Ok(out.finish())
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

fn parse_document(body: &[u8]) -> Result<Document<'_>, CodecError> {
    let text = std::str::from_utf8(body)
        .map_err(|e| CodecError::malformed(format!("Request body is not valid UTF-8: {}", e)))?;
    Document::parse(text)
        .map_err(|e| CodecError::malformed(format!("Invalid XML document: {}", e)))
}

/// First element named `tag` at or below `node`, in document order.
fn first_element<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.descendants().find(|n| n.is_element() && n.has_tag_name(tag))
}

/// Text of the element's first non-comment child, trimmed.
fn element_text<'a>(element: Node<'a, '_>) -> Option<&'a str> {
    element
        .children()
        .find(|c| !c.is_comment())
        .filter(|c| c.is_text())
        .and_then(|c| c.text())
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

fn required_text<'a>(node: Node<'a, '_>, tag: &str) -> Result<&'a str, CodecError> {
    let element = first_element(node, tag)
        .ok_or_else(|| CodecError::malformed(format!("Missing mandatory element <{}>", tag)))?;
    element_text(element)
        .ok_or_else(|| CodecError::malformed(format!("Element <{}> has no text content", tag)))
}

/// Parse the first `tag` element below `node`, or `None` when it is absent.
fn optional_value<T, F>(node: Node<'_, '_>, tag: &str, parse: F) -> Result<Option<T>, CodecError>
where
    F: FnOnce(&str) -> Option<T>,
{
    let Some(element) = first_element(node, tag) else {
        return Ok(None);
    };
    let text = element_text(element)
        .ok_or_else(|| CodecError::malformed(format!("Element <{}> has no text content", tag)))?;
    parse(text)
        .map(Some)
        .ok_or_else(|| CodecError::malformed(format!("Invalid value for <{}>: {}", tag, text)))
}

fn parse_bool(text: &str) -> Option<bool> {
    match text {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

fn parse_positive(text: &str) -> Option<i32> {
    text.parse::<i32>().ok().filter(|v| *v > 0)
}

/// Append the family delimiter to names that lack it.
pub fn normalize_family_name(name: &str) -> String {
    if name.contains(FAMILY_DELIMITER) {
        name.to_string()
    } else {
        format!("{}{}", name, FAMILY_DELIMITER)
    }
}

/// Build a column family from a `columnfamily` element. Absent attributes
/// keep their system defaults.
fn decode_family(element: Node<'_, '_>) -> Result<ColumnFamilyDescriptor, CodecError> {
    let name = normalize_family_name(required_text(element, NAME)?);
    let mut family = ColumnFamilyDescriptor::new(name);

    if let Some(v) = optional_value(element, MAX_VERSIONS, parse_positive)? {
        family.max_versions = v;
    }
    if let Some(v) = optional_value(element, COMPRESSION, |t| Compression::from_str(t).ok())? {
        family.compression = v;
    }
    if let Some(v) = optional_value(element, IN_MEMORY, parse_bool)? {
        family.in_memory = v;
    }
    if let Some(v) = optional_value(element, BLOCK_CACHE, parse_bool)? {
        family.block_cache = v;
    }
    // Responses name this element maximum-cell-size; accept both spellings.
    let max_cell_size = match optional_value(element, MAX_CELL_SIZE, parse_positive)? {
        Some(v) => Some(v),
        None => optional_value(element, MAXIMUM_CELL_SIZE, parse_positive)?,
    };
    if let Some(v) = max_cell_size {
        family.max_cell_size = v;
    }
    if let Some(v) = optional_value(element, TIME_TO_LIVE, |t| t.parse::<i32>().ok())? {
        family.time_to_live = v;
    }
    if let Some(v) = optional_value(element, BLOOM_FILTER, parse_bool)? {
        family.bloom_filter = v;
    }

    Ok(family)
}

fn decode_families(doc: &Document<'_>) -> Result<Vec<ColumnFamilyDescriptor>, CodecError> {
    doc.root()
        .descendants()
        .filter(|n| n.is_element() && n.has_tag_name(COLUMN_FAMILY))
        .map(decode_family)
        .collect()
}

/// Decode a create-table document. The table name is the first `name`
/// element of the whole document.
pub(super) fn decode_table(body: &[u8]) -> Result<TableDescriptor, CodecError> {
    let doc = parse_document(body)?;
    let name = required_text(doc.root(), NAME)?;

    let mut table = TableDescriptor::new(name);
    for family in decode_families(&doc)? {
        table.add_family(family);
    }
    Ok(table)
}

pub(super) fn decode_column_families(
    body: &[u8],
) -> Result<Vec<ColumnFamilyDescriptor>, CodecError> {
    let doc = parse_document(body)?;
    decode_families(&doc)
}
