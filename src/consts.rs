//! # Constants
//!
//! Fixed sizes of the AES-256 cipher and the container format, plus the
//! buffer-size limits enforced by the stream codec.

/// AES block size in bytes; also the size of the IV / CTR counter.
pub const BLOCK_SIZE: usize = 16;

/// AES-256 key size in bytes.
pub const KEY_SIZE: usize = 32;

/// Expanded key schedule size in bytes (60 32-bit words: 14 rounds + whitening).
pub const EXP_KEY_SIZE: usize = 240;

/// Size of the encrypted key verifier stored right after the IV.
///
/// The verifier is always SHA-256 based (32 bytes), independent of the
/// checksum choice for the file body.
pub const VERIFIER_SIZE: usize = 32;

/// Total SHA-256 evaluations performed by the password KDF.
pub const KDF_ITERATIONS: u32 = 8192;

/// Minimum accepted I/O buffer size.
///
/// Must hold the verifier, the trailer group (sub-block remainder plus
/// digest) and at least one full block; 256 bytes covers all checksum
/// choices with room to spare.
pub const MIN_BUFFER_SIZE: usize = 256;

/// Default I/O buffer size used by [`encrypt_file`](crate::encrypt_file) /
/// [`decrypt_file`](crate::decrypt_file) convenience callers: 1000 blocks.
pub const DEFAULT_BUFFER_SIZE: usize = 1000 * BLOCK_SIZE;
