//! Utility helpers shared by the encryptor and decryptor.

use crate::consts::MIN_BUFFER_SIZE;
use crate::error::AcryptError;
use std::io::{self, Read};

/// Read from `reader` until `buf` is full or EOF is reached.
///
/// Returns the number of bytes read; a return value shorter than `buf`
/// means the stream is exhausted.
pub(crate) fn read_fill<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Enforce the buffer-size floor shared by both codec entry points.
///
/// The buffer must hold the verifier and trailer groups plus at least one
/// block; 256 bytes covers every checksum choice.
pub(crate) fn validate_buffer_size(buffer_size: usize) -> Result<(), AcryptError> {
    if buffer_size < MIN_BUFFER_SIZE {
        return Err(AcryptError::InvalidConfiguration(format!(
            "buffer size {buffer_size} is below the {MIN_BUFFER_SIZE}-byte minimum"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn read_fill_reports_short_reads_at_eof() {
        let mut reader = Cursor::new(vec![7u8; 10]);
        let mut buf = [0u8; 32];
        assert_eq!(read_fill(&mut reader, &mut buf).unwrap(), 10);
        assert_eq!(&buf[..10], &[7u8; 10]);
    }

    #[test]
    fn buffer_floor_is_enforced() {
        assert!(validate_buffer_size(255).is_err());
        assert!(validate_buffer_size(256).is_ok());
    }
}
