//! src/key.rs
//! Secret key material — zeroized on drop
//!
//! Both types wrap plain fixed-size byte arrays so the cipher core can
//! operate on them without copies, but scrub their contents once the
//! owning session ends.

use crate::consts::{EXP_KEY_SIZE, KEY_SIZE};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A 256-bit AES key, produced by the KDF or supplied directly.
///
/// Exclusively owned by one cryptographic session and scrubbed from
/// memory on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SecretKey([u8; KEY_SIZE]);

impl SecretKey {
    #[inline]
    pub fn new(bytes: [u8; KEY_SIZE]) -> Self {
        Self(bytes)
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }
}

impl From<[u8; KEY_SIZE]> for SecretKey {
    #[inline]
    fn from(bytes: [u8; KEY_SIZE]) -> Self {
        Self(bytes)
    }
}

/// The expanded AES-256 round key schedule: 60 32-bit words (240 bytes),
/// stored in natural byte order so the table-driven and AES-NI expansions
/// produce byte-identical schedules.
///
/// Immutable once computed; owned by the session for its lifetime and
/// zeroized on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct RoundKeySchedule(pub(crate) [u8; EXP_KEY_SIZE]);

impl RoundKeySchedule {
    #[inline]
    pub(crate) fn zeroed() -> Self {
        Self([0u8; EXP_KEY_SIZE])
    }

    /// Raw schedule bytes, round key `r` at `bytes[16 * r..16 * (r + 1)]`.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; EXP_KEY_SIZE] {
        &self.0
    }
}
