//! src/cipher/generic.rs
//! Table-driven AES-256, portable to every target.
//!
//! Block encryption fuses SubBytes, ShiftRows and MixColumns into four
//! 256-entry forward tables built at compile time from the S-box. Only
//! the encryption direction exists: CTR mode never decrypts a block.
//!
//! Schedule bytes are stored in natural (big-endian word) order, so this
//! expansion and the AES-NI one in [`super::aesni`] are byte-identical.

use crate::consts::{BLOCK_SIZE, EXP_KEY_SIZE, KEY_SIZE};
use crate::key::RoundKeySchedule;

use super::counter::advance_counter;

/// Round constants for the 256-bit key schedule (7 groups used).
const RCON: [u32; 10] = [
    0x0100_0000,
    0x0200_0000,
    0x0400_0000,
    0x0800_0000,
    0x1000_0000,
    0x2000_0000,
    0x4000_0000,
    0x8000_0000,
    0x1B00_0000,
    0x3600_0000,
];

/// The AES forward S-box.
const FSB: [u8; 256] = [
    0x63, 0x7C, 0x77, 0x7B, 0xF2, 0x6B, 0x6F, 0xC5, 0x30, 0x01, 0x67, 0x2B, 0xFE, 0xD7, 0xAB, 0x76,
    0xCA, 0x82, 0xC9, 0x7D, 0xFA, 0x59, 0x47, 0xF0, 0xAD, 0xD4, 0xA2, 0xAF, 0x9C, 0xA4, 0x72, 0xC0,
    0xB7, 0xFD, 0x93, 0x26, 0x36, 0x3F, 0xF7, 0xCC, 0x34, 0xA5, 0xE5, 0xF1, 0x71, 0xD8, 0x31, 0x15,
    0x04, 0xC7, 0x23, 0xC3, 0x18, 0x96, 0x05, 0x9A, 0x07, 0x12, 0x80, 0xE2, 0xEB, 0x27, 0xB2, 0x75,
    0x09, 0x83, 0x2C, 0x1A, 0x1B, 0x6E, 0x5A, 0xA0, 0x52, 0x3B, 0xD6, 0xB3, 0x29, 0xE3, 0x2F, 0x84,
    0x53, 0xD1, 0x00, 0xED, 0x20, 0xFC, 0xB1, 0x5B, 0x6A, 0xCB, 0xBE, 0x39, 0x4A, 0x4C, 0x58, 0xCF,
    0xD0, 0xEF, 0xAA, 0xFB, 0x43, 0x4D, 0x33, 0x85, 0x45, 0xF9, 0x02, 0x7F, 0x50, 0x3C, 0x9F, 0xA8,
    0x51, 0xA3, 0x40, 0x8F, 0x92, 0x9D, 0x38, 0xF5, 0xBC, 0xB6, 0xDA, 0x21, 0x10, 0xFF, 0xF3, 0xD2,
    0xCD, 0x0C, 0x13, 0xEC, 0x5F, 0x97, 0x44, 0x17, 0xC4, 0xA7, 0x7E, 0x3D, 0x64, 0x5D, 0x19, 0x73,
    0x60, 0x81, 0x4F, 0xDC, 0x22, 0x2A, 0x90, 0x88, 0x46, 0xEE, 0xB8, 0x14, 0xDE, 0x5E, 0x0B, 0xDB,
    0xE0, 0x32, 0x3A, 0x0A, 0x49, 0x06, 0x24, 0x5C, 0xC2, 0xD3, 0xAC, 0x62, 0x91, 0x95, 0xE4, 0x79,
    0xE7, 0xC8, 0x37, 0x6D, 0x8D, 0xD5, 0x4E, 0xA9, 0x6C, 0x56, 0xF4, 0xEA, 0x65, 0x7A, 0xAE, 0x08,
    0xBA, 0x78, 0x25, 0x2E, 0x1C, 0xA6, 0xB4, 0xC6, 0xE8, 0xDD, 0x74, 0x1F, 0x4B, 0xBD, 0x8B, 0x8A,
    0x70, 0x3E, 0xB5, 0x66, 0x48, 0x03, 0xF6, 0x0E, 0x61, 0x35, 0x57, 0xB9, 0x86, 0xC1, 0x1D, 0x9E,
    0xE1, 0xF8, 0x98, 0x11, 0x69, 0xD9, 0x8E, 0x94, 0x9B, 0x1E, 0x87, 0xE9, 0xCE, 0x55, 0x28, 0xDF,
    0x8C, 0xA1, 0x89, 0x0D, 0xBF, 0xE6, 0x42, 0x68, 0x41, 0x99, 0x2D, 0x0F, 0xB0, 0x54, 0xBB, 0x16,
];

/// Multiply by x in GF(2^8) modulo the AES polynomial.
const fn xtime(x: u8) -> u8 {
    (x << 1) ^ (((x >> 7) & 1) * 0x1B)
}

/// Build one forward table. Entry `i` of the unrotated table packs
/// `(2·S[i], S[i], S[i], 3·S[i])` big-endian; the three sibling tables
/// are byte rotations of it.
const fn forward_table(rot: u32) -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut i = 0;
    while i < 256 {
        let s = FSB[i] as u32;
        let s2 = xtime(FSB[i]) as u32;
        let s3 = s2 ^ s;
        table[i] = ((s2 << 24) | (s << 16) | (s << 8) | s3).rotate_right(rot);
        i += 1;
    }
    table
}

const FT0: [u32; 256] = forward_table(0);
const FT1: [u32; 256] = forward_table(8);
const FT2: [u32; 256] = forward_table(16);
const FT3: [u32; 256] = forward_table(24);

#[inline(always)]
fn sub_word(w: u32) -> u32 {
    ((FSB[(w >> 24) as u8 as usize] as u32) << 24)
        | ((FSB[(w >> 16) as u8 as usize] as u32) << 16)
        | ((FSB[(w >> 8) as u8 as usize] as u32) << 8)
        | (FSB[w as u8 as usize] as u32)
}

/// Rijndael key expansion for a 256-bit key.
///
/// The first 8 words are the key; every 8th word mixes in
/// `SubWord(RotWord(prev)) ^ RCON`, and the mid-group word gets a pure
/// `SubWord` with no rotation. 60 words are kept (14 rounds + whitening).
pub(crate) fn expand_key(key: &[u8; KEY_SIZE], schedule: &mut RoundKeySchedule) {
    // the recurrence naturally produces a full 8th group; the last four
    // words of it fall outside the 60-word schedule and are discarded
    let mut rk = [0u32; 64];

    for (i, word) in rk.iter_mut().take(8).enumerate() {
        *word = u32::from_be_bytes([key[4 * i], key[4 * i + 1], key[4 * i + 2], key[4 * i + 3]]);
    }

    for i in 0..7 {
        let o = i * 8;
        rk[o + 8] = rk[o] ^ RCON[i] ^ sub_word(rk[o + 7].rotate_left(8));
        rk[o + 9] = rk[o + 1] ^ rk[o + 8];
        rk[o + 10] = rk[o + 2] ^ rk[o + 9];
        rk[o + 11] = rk[o + 3] ^ rk[o + 10];
        rk[o + 12] = rk[o + 4] ^ sub_word(rk[o + 11]);
        rk[o + 13] = rk[o + 5] ^ rk[o + 12];
        rk[o + 14] = rk[o + 6] ^ rk[o + 13];
        rk[o + 15] = rk[o + 7] ^ rk[o + 14];
    }

    for (i, word) in rk.iter().take(EXP_KEY_SIZE / 4).enumerate() {
        schedule.0[4 * i..4 * i + 4].copy_from_slice(&word.to_be_bytes());
    }
}

#[inline(always)]
fn schedule_words(schedule: &RoundKeySchedule) -> [u32; EXP_KEY_SIZE / 4] {
    let bytes = schedule.as_bytes();
    let mut words = [0u32; EXP_KEY_SIZE / 4];
    for (i, word) in words.iter_mut().enumerate() {
        *word = u32::from_be_bytes([
            bytes[4 * i],
            bytes[4 * i + 1],
            bytes[4 * i + 2],
            bytes[4 * i + 3],
        ]);
    }
    words
}

/// One fused table round: `x[i]` combines column bytes of `y` shifted by
/// the ShiftRows offsets, already multiplied through MixColumns.
#[inline(always)]
fn table_round(rk: &[u32], y: &[u32; 4]) -> [u32; 4] {
    let mut x = [0u32; 4];
    for i in 0..4 {
        x[i] = rk[i]
            ^ FT0[(y[i] >> 24) as u8 as usize]
            ^ FT1[(y[(i + 1) % 4] >> 16) as u8 as usize]
            ^ FT2[(y[(i + 2) % 4] >> 8) as u8 as usize]
            ^ FT3[y[(i + 3) % 4] as u8 as usize];
    }
    x
}

/// Encrypt one 16-byte block in place: whitening, 13 table rounds, and a
/// final round that swaps the MixColumns tables for the plain S-box.
pub(crate) fn encrypt_block(rk: &[u32; EXP_KEY_SIZE / 4], block: &mut [u8; BLOCK_SIZE]) {
    let mut state = [0u32; 4];
    for (i, word) in state.iter_mut().enumerate() {
        *word = u32::from_be_bytes([
            block[4 * i],
            block[4 * i + 1],
            block[4 * i + 2],
            block[4 * i + 3],
        ]) ^ rk[i];
    }

    for round in 1..14 {
        state = table_round(&rk[4 * round..4 * round + 4], &state);
    }

    let last = &rk[56..60];
    let mut out = [0u32; 4];
    for i in 0..4 {
        out[i] = last[i]
            ^ ((FSB[(state[i] >> 24) as u8 as usize] as u32) << 24)
            ^ ((FSB[(state[(i + 1) % 4] >> 16) as u8 as usize] as u32) << 16)
            ^ ((FSB[(state[(i + 2) % 4] >> 8) as u8 as usize] as u32) << 8)
            ^ (FSB[state[(i + 3) % 4] as u8 as usize] as u32);
    }

    for (i, word) in out.iter().enumerate() {
        block[4 * i..4 * i + 4].copy_from_slice(&word.to_be_bytes());
    }
}

/// Portable CTR transform: encrypt successive counter values and XOR them
/// over `data` in place. The counter advances once per full 16-byte chunk;
/// a trailing sub-block chunk consumes keystream without committing an
/// increment (see [`advance_counter`]).
pub(crate) fn ctr_transform(
    schedule: &RoundKeySchedule,
    counter: &mut [u8; BLOCK_SIZE],
    data: &mut [u8],
) {
    let words = schedule_words(schedule);

    for chunk in data.chunks_mut(BLOCK_SIZE) {
        let mut keystream = *counter;
        encrypt_block(&words, &mut keystream);
        for (byte, pad) in chunk.iter_mut().zip(keystream.iter()) {
            *byte ^= pad;
        }
        if chunk.len() == BLOCK_SIZE {
            advance_counter(counter, 1);
        }
    }
}
