//! src/decryptor/read.rs
//! Container read helpers.

use crate::error::AcryptError;
use std::io::{self, Read};

/// Read exactly `N` bytes into a stack-allocated `[u8; N]`.
///
/// A short read here means the container is missing its fixed leading
/// fields, which is an [`AcryptError::InsufficientData`] rather than a
/// plain I/O failure.
#[inline]
pub(crate) fn read_exact_span<R, const N: usize>(reader: &mut R) -> Result<[u8; N], AcryptError>
where
    R: Read,
{
    let mut buf = [0u8; N];
    reader.read_exact(&mut buf).map_err(|e| {
        if e.kind() == io::ErrorKind::UnexpectedEof {
            AcryptError::InsufficientData
        } else {
            AcryptError::Io(e)
        }
    })?;
    Ok(buf)
}
