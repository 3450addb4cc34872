//! Column family descriptor and its system default attribute values

use std::fmt;

use super::Compression;

/// Separator every column family name ends with (`info:`).
pub const FAMILY_DELIMITER: char = ':';

/// Time-to-live sentinel meaning cells never expire.
pub const FOREVER: i32 = -1;

pub const DEFAULT_VERSIONS: i32 = 3;
pub const DEFAULT_COMPRESSION: Compression = Compression::None;
pub const DEFAULT_IN_MEMORY: bool = false;
pub const DEFAULT_BLOCK_CACHE: bool = false;
pub const DEFAULT_MAX_CELL_SIZE: i32 = i32::MAX;
pub const DEFAULT_TTL: i32 = FOREVER;
pub const DEFAULT_BLOOM_FILTER: bool = false;

/// Storage and versioning attributes of one column family.
///
/// The name is stored exactly as given; the XML decoder is responsible for
/// appending [`FAMILY_DELIMITER`] to names that lack it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnFamilyDescriptor {
    pub name: String,

    /// Number of cell versions retained
    pub max_versions: i32,

    pub compression: Compression,

    /// Keep the family's blocks pinned in memory
    pub in_memory: bool,

    pub block_cache: bool,

    /// Maximum cell value length in bytes
    pub max_cell_size: i32,

    /// Cell time-to-live in seconds ([`FOREVER`] disables expiry)
    pub time_to_live: i32,

    pub bloom_filter: bool,
}

impl ColumnFamilyDescriptor {
    /// Create a descriptor with every attribute at its system default.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            max_versions: DEFAULT_VERSIONS,
            compression: DEFAULT_COMPRESSION,
            in_memory: DEFAULT_IN_MEMORY,
            block_cache: DEFAULT_BLOCK_CACHE,
            max_cell_size: DEFAULT_MAX_CELL_SIZE,
            time_to_live: DEFAULT_TTL,
            bloom_filter: DEFAULT_BLOOM_FILTER,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ColumnFamilyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{NAME => '{}', VERSIONS => '{}', COMPRESSION => '{}', IN_MEMORY => '{}', \
             BLOCKCACHE => '{}', LENGTH => '{}', TTL => '",
            self.name,
            self.max_versions,
            self.compression,
            self.in_memory,
            self.block_cache,
            self.max_cell_size,
        )?;
        if self.time_to_live == FOREVER {
            f.write_str("FOREVER")?;
        } else {
            write!(f, "{}", self.time_to_live)?;
        }
        write!(f, "', BLOOMFILTER => '{}'}}", self.bloom_filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_system_defaults() {
        let cf = ColumnFamilyDescriptor::new("info:");
        assert_eq!(cf.max_versions, 3);
        assert_eq!(cf.compression, Compression::None);
        assert!(!cf.in_memory);
        assert!(!cf.block_cache);
        assert_eq!(cf.max_cell_size, i32::MAX);
        assert_eq!(cf.time_to_live, FOREVER);
        assert!(!cf.bloom_filter);
    }

    #[test]
    fn test_new_keeps_name_verbatim() {
        let cf = ColumnFamilyDescriptor::new("info");
        assert_eq!(cf.name(), "info");
    }

    #[test]
    fn test_display_renders_forever_ttl() {
        let cf = ColumnFamilyDescriptor::new("info:");
        let text = cf.to_string();
        assert!(text.starts_with("{NAME => 'info:'"));
        assert!(text.contains("TTL => 'FOREVER'"));

        let cf = ColumnFamilyDescriptor { time_to_live: 86400, ..cf };
        assert!(cf.to_string().contains("TTL => '86400'"));
    }
}
