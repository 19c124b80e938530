// src/lib.rs

//! Password-based AES-256-CTR file encryption.
//!
//! The cipher core ships two interchangeable implementations — a portable
//! table-driven one and an AES-NI one selected by a one-time CPU probe —
//! that produce bit-identical output. On top of it, a streaming container
//! codec encrypts arbitrary-length input while embedding a password
//! verifier and a content digest:
//!
//! `[16 B IV][32 B encrypted verifier][CTR body][encrypted trailer]`
//!
//! ```no_run
//! use acrypt::{decrypt_file, derive_key, encrypt_file, HashKind};
//! use acrypt::consts::DEFAULT_BUFFER_SIZE;
//! use std::io::Cursor;
//!
//! let key = derive_key(b"correct horse battery staple");
//! let mut container = Vec::new();
//! encrypt_file(
//!     &key,
//!     Cursor::new(b"attack at dawn".to_vec()),
//!     &mut container,
//!     HashKind::Sha1,
//!     DEFAULT_BUFFER_SIZE,
//! )?;
//!
//! let mut plaintext = Vec::new();
//! decrypt_file(
//!     &key,
//!     Cursor::new(container),
//!     &mut plaintext,
//!     HashKind::Sha1,
//!     DEFAULT_BUFFER_SIZE,
//! )?;
//! # Ok::<(), acrypt::AcryptError>(())
//! ```

pub mod checksum;
pub mod cipher;
pub mod consts;
pub mod crypto;
pub mod decryptor;
pub mod encryptor;
pub mod error;
pub mod key;
mod utils;

// High-level API — this is what most users import
pub use decryptor::decrypt_file;
pub use encryptor::encrypt_file;
pub use error::AcryptError;

pub use checksum::{Checksum, ContentDigest, HashKind};
pub use key::{RoundKeySchedule, SecretKey};

// Low-level primitives — public for custom flows (raw CTR transforms,
// external key management) and for equivalence testing of the two
// cipher paths
pub use cipher::{ctr_transform, expand_key, has_hardware_support};
pub use crypto::kdf::{derive_key, derive_key_salted};
pub use crypto::rng::generate_iv;
pub use crypto::verifier::key_verifier;
