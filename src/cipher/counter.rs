//! src/cipher/counter.rs
//! CTR counter arithmetic shared by both cipher implementations.

use crate::consts::BLOCK_SIZE;

/// Advance the counter by `blocks`.
///
/// The low 8 bytes are treated as a big-endian unsigned 64-bit integer
/// with wrapping addition. The high 8 bytes are the per-file nonce prefix
/// established when the IV was generated; they are never modified here.
/// Full 128-bit carry-over is deliberately not performed — widening the
/// increment would change how existing containers decrypt.
#[inline]
pub(crate) fn advance_counter(counter: &mut [u8; BLOCK_SIZE], blocks: u64) {
    let mut low = [0u8; 8];
    low.copy_from_slice(&counter[8..]);
    let value = u64::from_be_bytes(low).wrapping_add(blocks);
    counter[8..].copy_from_slice(&value.to_be_bytes());
}
