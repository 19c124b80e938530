//! src/decryptor/decrypt.rs
//! Container decryption — the exact mirror of the encrypt path.

use crate::checksum::{Checksum, HashKind};
use crate::cipher::{ctr_transform, expand_key};
use crate::consts::{BLOCK_SIZE, VERIFIER_SIZE};
use crate::crypto::verifier::key_verifier;
use crate::decryptor::read::read_exact_span;
use crate::error::AcryptError;
use crate::key::SecretKey;
use crate::utils::{read_fill, validate_buffer_size};
use std::io::{Read, Write};

/// Decrypt an acrypt container.
///
/// The verifier is checked before a single plaintext byte is written;
/// a mismatch yields [`AcryptError::InvalidPassword`]. During body
/// streaming the last `digest_size` buffered bytes are always held back,
/// since until EOF is confirmed they may be the encrypted digest rather
/// than content. After EOF the recomputed digest is compared against the
/// trailer; a mismatch yields [`AcryptError::ChecksumMismatch`], with any
/// already-written plaintext left for the caller to discard.
///
/// `hash` must equal the value used at encryption time — the digest size
/// is not recorded in the container.
pub fn decrypt_file<R, W>(
    key: &SecretKey,
    mut input: R,
    mut output: W,
    hash: HashKind,
    buffer_size: usize,
) -> Result<(), AcryptError>
where
    R: Read,
    W: Write,
{
    validate_buffer_size(buffer_size)?;

    let schedule = expand_key(key);

    let iv = read_exact_span::<_, BLOCK_SIZE>(&mut input)?;
    let mut counter = iv;

    let mut verifier = read_exact_span::<_, VERIFIER_SIZE>(&mut input)?;
    ctr_transform(&schedule, &mut counter, &mut verifier);
    let expected = key_verifier(key);
    if verifier != expected {
        return Err(AcryptError::InvalidPassword);
    }

    // seed the checksum with the plaintext verifier, as encryption did
    let mut checksum = Checksum::new(hash);
    checksum.update(&expected);
    let digest_size = hash.digest_size();

    let mut buffer = vec![0u8; buffer_size];
    let mut buffered = 0usize;

    loop {
        let n = read_fill(&mut input, &mut buffer[buffered..])?;
        let at_eof = buffered + n < buffer.len();
        buffered += n;

        if at_eof {
            break;
        }

        // hold back the digest-size tail; it may be trailer, not content
        let held = buffered - digest_size;
        let aligned = held - held % BLOCK_SIZE;
        ctr_transform(&schedule, &mut counter, &mut buffer[..aligned]);
        checksum.update(&buffer[..aligned]);
        output.write_all(&buffer[..aligned])?;

        buffer.copy_within(aligned..buffered, 0);
        buffered -= aligned;
    }

    // what remains is the final content remainder plus the digest
    if buffered < digest_size {
        return Err(AcryptError::InsufficientData);
    }
    ctr_transform(&schedule, &mut counter, &mut buffer[..buffered]);
    let content = buffered - digest_size;
    checksum.update(&buffer[..content]);
    output.write_all(&buffer[..content])?;
    output.flush()?;

    let digest = checksum.finalize();
    if digest.as_slice() != &buffer[content..buffered] {
        return Err(AcryptError::ChecksumMismatch);
    }

    Ok(())
}
