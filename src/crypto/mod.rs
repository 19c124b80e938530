// src/crypto/mod.rs

//! Low-level crypto helpers: KDF, IV generation, key verifier.
//!
//! Sub-modules only; see the crate root for re-exports.

pub mod kdf;
pub mod rng;
pub mod verifier;
