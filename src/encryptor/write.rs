//! src/encryptor/write.rs
//! Container write helpers.

use crate::consts::BLOCK_SIZE;
use crate::error::AcryptError;
use std::io::Write;

/// Write the 16-byte IV header.
#[inline]
pub(crate) fn write_iv<W: Write>(writer: &mut W, iv: &[u8; BLOCK_SIZE]) -> Result<(), AcryptError> {
    writer.write_all(iv).map_err(AcryptError::Io)
}
