//! src/crypto/rng.rs
//! OS-backed randomness for IV generation.

use crate::consts::BLOCK_SIZE;
use rand::rngs::OsRng;
use rand::TryRngCore;

/// Generate a fresh 16-byte IV from the operating system RNG.
///
/// One IV per encrypted file is what upholds the (key, counter)
/// non-repetition invariant, so a failing OS RNG is unrecoverable here:
/// there is no fallback source worth encrypting with.
pub fn generate_iv() -> [u8; BLOCK_SIZE] {
    let mut iv = [0u8; BLOCK_SIZE];
    OsRng
        .try_fill_bytes(&mut iv)
        .expect("operating system RNG failed");
    iv
}
