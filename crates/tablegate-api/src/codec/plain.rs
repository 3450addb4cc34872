//! Plain text encoding

use tablegate_commons::TableDescriptor;

pub(super) fn encode_table(descriptor: &TableDescriptor) -> String {
    descriptor.to_string()
}

/// One start key per line, lossily decoded as UTF-8.
pub(super) fn encode_regions(start_keys: &[Vec<u8>]) -> String {
    start_keys
        .iter()
        .map(|key| String::from_utf8_lossy(key))
        .collect::<Vec<_>>()
        .join("\n")
}
