//! Column family compression type

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Compression applied to a column family's store files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Compression {
    /// No compression
    #[default]
    None,
    /// Compress each record individually
    Record,
    /// Compress whole blocks of records
    Block,
}

impl Compression {
    pub const ALL: [Compression; 3] = [Compression::None, Compression::Record, Compression::Block];

    pub fn as_str(&self) -> &'static str {
        match self {
            Compression::None => "NONE",
            Compression::Record => "RECORD",
            Compression::Block => "BLOCK",
        }
    }
}

impl fmt::Display for Compression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name that matches no [`Compression`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown compression type: {0}")]
pub struct UnknownCompression(pub String);

/// Parses the exact upper-case variant name; `"none"` is rejected.
impl FromStr for Compression {
    type Err = UnknownCompression;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Compression::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCompression(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!("BLOCK".parse::<Compression>().unwrap(), Compression::Block);
        assert_eq!("NONE".parse::<Compression>().unwrap(), Compression::None);
        assert_eq!(
            "block".parse::<Compression>(),
            Err(UnknownCompression("block".to_string()))
        );
        assert!("GZ".parse::<Compression>().is_err());
    }

    #[test]
    fn test_display_matches_parse() {
        for c in Compression::ALL {
            assert_eq!(c.to_string().parse::<Compression>().unwrap(), c);
        }
    }
}
