//! src/checksum.rs
//! Streaming content-digest facade over the external hash primitives.
//!
//! The container stores a digest of the full plaintext in its encrypted
//! trailer. SHA-1 trades security for throughput, SHA-256 the reverse,
//! and `None` disables integrity checking entirely (zero-length digest).
//! The same choice must be passed to encryption and decryption: the
//! digest size determines how many trailer bytes decryption holds back.

use sha1::Sha1;
use sha2::{Digest as _, Sha256};

const SHA1_DIGEST_SIZE: usize = 20;
const SHA256_DIGEST_SIZE: usize = 32;

/// Checksum algorithm for the container trailer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HashKind {
    /// No integrity checking; the trailer carries no digest.
    None,
    /// 20-byte SHA-1 digest.
    Sha1,
    /// 32-byte SHA-256 digest.
    Sha256,
}

impl HashKind {
    /// Size in bytes of the digest this algorithm appends to the trailer.
    #[inline]
    pub const fn digest_size(self) -> usize {
        match self {
            HashKind::None => 0,
            HashKind::Sha1 => SHA1_DIGEST_SIZE,
            HashKind::Sha256 => SHA256_DIGEST_SIZE,
        }
    }
}

/// Running hash state over plaintext content.
///
/// Created at stream-codec start, updated once per committed block group,
/// finalized exactly once after all plaintext has been processed.
pub struct Checksum {
    inner: Inner,
}

enum Inner {
    None,
    Sha1(Sha1),
    Sha256(Sha256),
}

impl Checksum {
    pub fn new(kind: HashKind) -> Self {
        let inner = match kind {
            HashKind::None => Inner::None,
            HashKind::Sha1 => Inner::Sha1(Sha1::new()),
            HashKind::Sha256 => Inner::Sha256(Sha256::new()),
        };
        Self { inner }
    }

    pub fn update(&mut self, data: &[u8]) {
        match &mut self.inner {
            Inner::None => {}
            Inner::Sha1(ctx) => ctx.update(data),
            Inner::Sha256(ctx) => ctx.update(data),
        }
    }

    pub fn finalize(self) -> ContentDigest {
        let mut digest = ContentDigest {
            bytes: [0u8; SHA256_DIGEST_SIZE],
            len: 0,
        };
        match self.inner {
            Inner::None => {}
            Inner::Sha1(ctx) => {
                digest.bytes[..SHA1_DIGEST_SIZE].copy_from_slice(ctx.finalize().as_slice());
                digest.len = SHA1_DIGEST_SIZE;
            }
            Inner::Sha256(ctx) => {
                digest.bytes.copy_from_slice(ctx.finalize().as_slice());
                digest.len = SHA256_DIGEST_SIZE;
            }
        }
        digest
    }
}

/// A finalized content digest, at most 32 bytes.
pub struct ContentDigest {
    bytes: [u8; 32],
    len: usize,
}

impl ContentDigest {
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
