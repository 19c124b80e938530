//! tests/roundtrip_tests.rs
//! End-to-end container round trips across input lengths, buffer sizes
//! and checksum choices.

mod common;

use acrypt::consts::DEFAULT_BUFFER_SIZE;
use acrypt::{decrypt_file, encrypt_file, HashKind};
use common::{patterned, test_key, SMALL_BUFFER, UNALIGNED_BUFFER};
use std::io::Cursor;

fn roundtrip(plain: &[u8], hash: HashKind, enc_buffer: usize, dec_buffer: usize) -> Vec<u8> {
    let key = test_key();

    let mut container = Vec::new();
    encrypt_file(&key, Cursor::new(plain), &mut container, hash, enc_buffer)
        .expect("encryption failed");

    let mut recovered = Vec::new();
    decrypt_file(
        &key,
        Cursor::new(&container),
        &mut recovered,
        hash,
        dec_buffer,
    )
    .expect("decryption failed");
    recovered
}

#[test]
fn roundtrip_boundary_lengths() {
    // sub-block, exact-block and off-by-one lengths around the 16-byte unit
    for len in [0usize, 1, 15, 16, 17, 255, 256, 4095, 4096, 4097] {
        let plain = patterned(len);
        let recovered = roundtrip(&plain, HashKind::Sha1, DEFAULT_BUFFER_SIZE, DEFAULT_BUFFER_SIZE);
        assert_eq!(recovered, plain, "mismatch at length {len}");
    }
}

#[test]
fn roundtrip_all_hash_kinds() {
    let plain = patterned(10_000);
    for hash in [HashKind::None, HashKind::Sha1, HashKind::Sha256] {
        let recovered = roundtrip(&plain, hash, DEFAULT_BUFFER_SIZE, DEFAULT_BUFFER_SIZE);
        assert_eq!(recovered, plain, "mismatch with {hash:?}");
    }
}

#[test]
fn roundtrip_minimum_and_unaligned_buffers() {
    // small buffers force many refill passes and remainder carries;
    // an unaligned buffer keeps a remainder alive on every pass
    let plain = patterned(5000);
    for buffer in [SMALL_BUFFER, UNALIGNED_BUFFER, 257, 1024] {
        let recovered = roundtrip(&plain, HashKind::Sha256, buffer, buffer);
        assert_eq!(recovered, plain, "mismatch with buffer size {buffer}");
    }
}

#[test]
fn buffer_sizes_may_differ_between_directions() {
    // the counter sequence is block-aligned, so the decrypt buffer need
    // not match the encrypt buffer
    let plain = patterned(3000);
    let recovered = roundtrip(&plain, HashKind::Sha1, UNALIGNED_BUFFER, DEFAULT_BUFFER_SIZE);
    assert_eq!(recovered, plain);
    let recovered = roundtrip(&plain, HashKind::Sha1, DEFAULT_BUFFER_SIZE, SMALL_BUFFER);
    assert_eq!(recovered, plain);
}

#[test]
fn roundtrip_multi_megabyte() {
    let plain = patterned(3 * 1024 * 1024 + 7);
    let recovered = roundtrip(&plain, HashKind::Sha1, DEFAULT_BUFFER_SIZE, DEFAULT_BUFFER_SIZE);
    assert_eq!(recovered, plain);
}

#[test]
fn container_layout_has_expected_size() {
    let key = test_key();
    for (len, hash) in [(0usize, HashKind::Sha1), (100, HashKind::Sha256), (16, HashKind::None)] {
        let plain = patterned(len);
        let mut container = Vec::new();
        encrypt_file(
            &key,
            Cursor::new(&plain),
            &mut container,
            hash,
            DEFAULT_BUFFER_SIZE,
        )
        .unwrap();
        // IV + verifier + body + digest
        assert_eq!(container.len(), 16 + 32 + len + hash.digest_size());
    }
}

#[test]
fn fresh_iv_per_encryption() {
    let key = test_key();
    let plain = patterned(64);

    let mut first = Vec::new();
    encrypt_file(&key, Cursor::new(&plain), &mut first, HashKind::Sha1, SMALL_BUFFER).unwrap();
    let mut second = Vec::new();
    encrypt_file(&key, Cursor::new(&plain), &mut second, HashKind::Sha1, SMALL_BUFFER).unwrap();

    assert_ne!(&first[..16], &second[..16], "IV must be fresh per file");
    assert_ne!(first, second, "same plaintext must never reuse keystream");
}
