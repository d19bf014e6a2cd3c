//! Digest-based hash sources
//!
//! Provides:
//! - Keyed BLAKE3 MAC reduced to the sum of its hex digits
//! - SHA-256 truncated to a signed 32-bit code
//! - FNV multiply-then-xor over the key bytes

use sha2::{Digest, Sha256};

/// Fixed MAC key so the keyed digest is reproducible across runs
pub const MAC_KEY: [u8; 32] = *b"hashdict.keyed-digest.source.v01";

/// 32-bit FNV prime
pub const FNV_PRIME: u32 = 16_777_619;

/// Keyed digest of `data`, as raw bytes
pub fn keyed_digest<T: AsRef<[u8]>>(data: T) -> [u8; 32] {
    *blake3::keyed_hash(&MAC_KEY, data.as_ref()).as_bytes()
}

/// Sum of the hex digit values of the keyed digest
///
/// Each byte contributes its high and low nibble, which is exactly the digit sum
/// of its two-character hex rendering.
pub fn keyed_digit_sum<T: AsRef<[u8]>>(data: T) -> i64 {
    keyed_digest(data)
        .iter()
        .map(|byte| i64::from(byte >> 4) + i64::from(byte & 0x0F))
        .sum()
}

/// First four bytes of the SHA-256 digest as a little-endian `i32`
pub fn sha256_prefix<T: AsRef<[u8]>>(data: T) -> i32 {
    let digest = Sha256::digest(data.as_ref());
    i32::from_le_bytes([digest[0], digest[1], digest[2], digest[3]])
}

/// FNV over `data` starting from a zero basis
pub fn fnv<T: AsRef<[u8]>>(data: T) -> u32 {
    data.as_ref()
        .iter()
        .fold(0u32, |hash, &byte| hash.wrapping_mul(FNV_PRIME) ^ u32::from(byte))
}
