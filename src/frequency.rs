use std::collections::BTreeMap;

/// Occurrence count per byte value. Bytes that never occur are absent, so
/// every recorded count is at least 1.
///
/// An ordered map, so iteration (and therefore tree construction, which
/// seeds its queue from it) is deterministic.
pub type FrequencyTable = BTreeMap<u8, usize>;

/// Counts how often each byte value occurs in `input`.
///
/// Operates on raw bytes: a multi-byte encoded character contributes one
/// count per byte. Empty input yields an empty table.
pub fn build_frequency_table(input: &[u8]) -> FrequencyTable {
    let mut table = FrequencyTable::new();

    for &byte in input {
        table
            .entry(byte)
            .and_modify(|count| *count += 1)
            .or_insert(1);
    }

    table
}
