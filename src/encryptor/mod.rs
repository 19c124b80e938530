// src/encryptor/mod.rs

//! High-level encryption facade.
//!
//! Core API: `encrypt_file(&key, input, output, hash, buffer_size)?`.

pub(crate) mod encrypt;
pub(crate) mod write;

pub use encrypt::encrypt_file;
