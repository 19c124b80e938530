// src/decryptor/mod.rs

//! High-level decryption facade.
//!
//! Core API: `decrypt_file(&key, input, output, hash, buffer_size)?`.

pub(crate) mod decrypt;
pub(crate) mod read;

pub use decrypt::decrypt_file;
