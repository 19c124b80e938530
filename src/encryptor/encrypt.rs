//! src/encryptor/encrypt.rs
//! Container encryption: `[IV][encrypted verifier][CTR body][encrypted trailer]`.

use crate::checksum::{Checksum, HashKind};
use crate::cipher::{ctr_transform, expand_key};
use crate::consts::BLOCK_SIZE;
use crate::crypto::rng::generate_iv;
use crate::crypto::verifier::key_verifier;
use crate::encryptor::write::write_iv;
use crate::error::AcryptError;
use crate::key::SecretKey;
use crate::utils::{read_fill, validate_buffer_size};
use std::io::{Read, Write};

/// Encrypt `input` into the acrypt container format.
///
/// The IV doubles as the initial CTR counter and is written as the
/// 16-byte header. The verifier (`hash³(key)`) seeds the running content
/// checksum in plaintext form and is written CTR-encrypted right after
/// the header. The body is then streamed: each pass commits only the
/// whole-block-aligned prefix of the buffered plaintext and carries the
/// sub-block remainder into the next pass, so the counter sequence is
/// independent of `buffer_size`. At EOF the remainder and the finalized
/// digest form the trailer, encrypted as one final group.
///
/// `hash` must match the value later passed to
/// [`decrypt_file`](crate::decrypt_file).
pub fn encrypt_file<R, W>(
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
    let iv = generate_iv();
    let mut counter = iv;
    write_iv(&mut output, &iv)?;

    let mut checksum = Checksum::new(hash);

    let mut verifier = key_verifier(key);
    checksum.update(&verifier);
    ctr_transform(&schedule, &mut counter, &mut verifier);
    output.write_all(&verifier)?;

    let mut buffer = vec![0u8; buffer_size];
    let mut buffered = 0usize;

    loop {
        let n = read_fill(&mut input, &mut buffer[buffered..])?;
        let at_eof = buffered + n < buffer.len();
        buffered += n;

        let aligned = buffered - buffered % BLOCK_SIZE;
        checksum.update(&buffer[..aligned]);
        ctr_transform(&schedule, &mut counter, &mut buffer[..aligned]);
        output.write_all(&buffer[..aligned])?;

        // carry the sub-block remainder to the front for the next pass
        buffer.copy_within(aligned..buffered, 0);
        buffered -= aligned;

        if at_eof {
            break;
        }
    }

    // trailer: plaintext remainder followed by the content digest,
    // encrypted together as the final (possibly partial) block group
    checksum.update(&buffer[..buffered]);
    let digest = checksum.finalize();
    let trailer_len = buffered + digest.len();
    buffer[buffered..trailer_len].copy_from_slice(digest.as_slice());
    ctr_transform(&schedule, &mut counter, &mut buffer[..trailer_len]);
    output.write_all(&buffer[..trailer_len])?;
    output.flush()?;

    Ok(())
}
