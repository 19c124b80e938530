//! # Error Types
//!
//! This module defines the error type used throughout the library.
//! All stream operations return [`Result<T, AcryptError>`](AcryptError);
//! the cipher and hash primitives are non-failing transforms over
//! fixed-size buffers and never produce errors themselves.

use thiserror::Error;

/// The error type for all acrypt container operations.
///
/// Errors are fail-fast: there are no retries and no rollback of bytes
/// already written to the output. The caller decides whether to discard
/// partial output after a failure.
#[derive(Error, Debug)]
pub enum AcryptError {
    /// I/O error propagated from the underlying reader or writer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The container is shorter than the minimum of IV + verifier + trailer.
    #[error("insufficient data: container is truncated")]
    InsufficientData,

    /// The decrypted verifier block does not match `hash³(key)`.
    ///
    /// Returned before any plaintext has been written to the output.
    #[error("invalid password or compromised IV")]
    InvalidPassword,

    /// The recomputed content digest disagrees with the container trailer.
    ///
    /// Indicates corruption or tampering of the ciphertext body. Plaintext
    /// written up to this point must be considered untrusted.
    #[error("checksum mismatch: file may be corrupted")]
    ChecksumMismatch,

    /// A caller-supplied parameter is outside the accepted range
    /// (e.g. a buffer size below [`MIN_BUFFER_SIZE`](crate::consts::MIN_BUFFER_SIZE)).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}
