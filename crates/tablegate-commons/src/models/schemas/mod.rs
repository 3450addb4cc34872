//! Table schema model
//!
//! A [`TableDescriptor`] names a table and lists its column families in
//! declaration order. Descriptors are plain values: they are built per
//! request (parsed from a body or fetched from the administration client)
//! and dropped once the response is written.

mod column_family;
mod compression;
mod table_descriptor;

pub use column_family::{
    ColumnFamilyDescriptor, DEFAULT_BLOCK_CACHE, DEFAULT_BLOOM_FILTER, DEFAULT_COMPRESSION,
    DEFAULT_IN_MEMORY, DEFAULT_MAX_CELL_SIZE, DEFAULT_TTL, DEFAULT_VERSIONS, FAMILY_DELIMITER,
    FOREVER,
};
pub use compression::{Compression, UnknownCompression};
pub use table_descriptor::TableDescriptor;
