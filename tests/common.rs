//! tests/common.rs
//! Shared constants and helpers for the integration tests.

use acrypt::{derive_key, SecretKey};

/// Standard test password used across test files.
pub const TEST_PASSWORD: &[u8] = b"Hello";

/// Small buffer size (the enforced minimum) to force many refill passes.
#[allow(dead_code)] // Used across multiple test files
pub const SMALL_BUFFER: usize = 256;

/// A buffer size that is deliberately not a multiple of the block size.
#[allow(dead_code)] // Used across multiple test files
pub const UNALIGNED_BUFFER: usize = 300;

/// Deterministic pseudo-random plaintext of the given length.
#[allow(dead_code)] // Used across multiple test files
pub fn patterned(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i.wrapping_mul(31) % 251) as u8).collect()
}

#[allow(dead_code)] // Used across multiple test files
pub fn test_key() -> SecretKey {
    derive_key(TEST_PASSWORD)
}
