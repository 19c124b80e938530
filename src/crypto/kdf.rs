//! src/crypto/kdf.rs
//! Iterated-SHA-256 password stretching.

use crate::consts::{BLOCK_SIZE, KDF_ITERATIONS, KEY_SIZE};
use crate::key::SecretKey;
use sha2::{Digest, Sha256};
use zeroize::Zeroize;

/// Stretch a password into a 256-bit key: SHA-256 of the password, then
/// re-hash the running 32-byte digest until 8192 hash evaluations have
/// been performed.
///
/// This is a deliberate work-factor KDF. It is not memory-hard; swapping
/// in a stronger construction would change every container ever written,
/// so it must only happen together with a format version bump.
pub fn derive_key(password: &[u8]) -> SecretKey {
    let mut digest: [u8; KEY_SIZE] = Sha256::digest(password).into();
    for _ in 1..KDF_ITERATIONS {
        digest = Sha256::digest(digest).into();
    }
    SecretKey::new(digest)
}

/// Salted variant: hashes `salt ‖ password`, padded with `'#'` up to a
/// 32-byte minimum, before the same iteration loop. Callers that persist
/// the salt next to the container (the original CLI reuses the IV) get
/// per-file keys from one password.
pub fn derive_key_salted(password: &[u8], salt: &[u8; BLOCK_SIZE]) -> SecretKey {
    let mut salted = Vec::with_capacity((salt.len() + password.len()).max(KEY_SIZE));
    salted.extend_from_slice(salt);
    salted.extend_from_slice(password);
    while salted.len() < KEY_SIZE {
        salted.push(b'#');
    }

    let mut digest: [u8; KEY_SIZE] = Sha256::digest(&salted).into();
    salted.zeroize();

    for _ in 1..KDF_ITERATIONS {
        digest = Sha256::digest(digest).into();
    }
    SecretKey::new(digest)
}
