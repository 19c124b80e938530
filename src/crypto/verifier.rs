//! src/crypto/verifier.rs
//! Password verification token: the key hashed three times in succession.
//!
//! Stored CTR-encrypted right after the IV. On decrypt it is recomputed
//! from the supplied key and compared before any plaintext is emitted;
//! it also seeds the content checksum on both sides. Always SHA-256
//! based, independent of the checksum choice for the file body.

use crate::consts::VERIFIER_SIZE;
use crate::key::SecretKey;
use sha2::{Digest, Sha256};

/// `hash³(key)` — the 32-byte plaintext verifier.
pub fn key_verifier(key: &SecretKey) -> [u8; VERIFIER_SIZE] {
    let mut verifier: [u8; VERIFIER_SIZE] = Sha256::digest(key.as_bytes()).into();
    verifier = Sha256::digest(verifier).into();
    verifier = Sha256::digest(verifier).into();
    verifier
}
