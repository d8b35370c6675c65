//! CRC32 checksums for school records

use crc32fast::Hasher;

/// Computes a CRC32 (IEEE) checksum over `data`.
pub fn compute_checksum(data: &[u8]) -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(data);
    hasher.finalize()
}
