//! src/cipher/aesni.rs
//! Hardware-accelerated AES-256 using the x86_64 AES-NI instruction set.
//!
//! Key expansion follows Intel's published AESKEYGENASSIST sequence and
//! produces a schedule byte-identical to the table-driven one. The CTR
//! loop keeps two independent counter blocks in flight per iteration so
//! the AESENC latency of one block overlaps the other; this is pure
//! instruction-level pipelining and the output equals one-at-a-time
//! processing.
//!
//! Every function here is only reachable through the dispatcher after
//! [`super::has_hardware_support`] reported the `aes` and `ssse3`
//! capability bits.

use core::arch::x86_64::*;

use crate::consts::{BLOCK_SIZE, KEY_SIZE};
use crate::key::RoundKeySchedule;

use super::counter::advance_counter;

const NUM_ROUNDS: usize = 14;

/// Fold the keygen-assist result into the even (full-key-word) half.
#[inline]
#[target_feature(enable = "aes")]
unsafe fn assist_even(temp1: __m128i, temp2: __m128i) -> __m128i {
    unsafe {
        let temp2 = _mm_shuffle_epi32::<0xFF>(temp2);
        let mut temp4 = _mm_slli_si128::<4>(temp1);
        let mut temp1 = _mm_xor_si128(temp1, temp4);
        temp4 = _mm_slli_si128::<4>(temp4);
        temp1 = _mm_xor_si128(temp1, temp4);
        temp4 = _mm_slli_si128::<4>(temp4);
        temp1 = _mm_xor_si128(temp1, temp4);
        _mm_xor_si128(temp1, temp2)
    }
}

/// Derive the odd half of a key group from the freshly computed even half.
#[inline]
#[target_feature(enable = "aes")]
unsafe fn assist_odd(temp1: __m128i, temp3: __m128i) -> __m128i {
    unsafe {
        let temp4 = _mm_aeskeygenassist_si128::<0x00>(temp1);
        let temp2 = _mm_shuffle_epi32::<0xAA>(temp4);
        let mut temp4 = _mm_slli_si128::<4>(temp3);
        let mut temp3 = _mm_xor_si128(temp3, temp4);
        temp4 = _mm_slli_si128::<4>(temp4);
        temp3 = _mm_xor_si128(temp3, temp4);
        temp4 = _mm_slli_si128::<4>(temp4);
        temp3 = _mm_xor_si128(temp3, temp4);
        _mm_xor_si128(temp3, temp2)
    }
}

/// AES-256 key expansion via AESKEYGENASSIST.
///
/// # Safety
///
/// Requires the `aes` CPU feature; callers go through the dispatcher.
#[target_feature(enable = "aes")]
pub(crate) unsafe fn expand_key(key: &[u8; KEY_SIZE], schedule: &mut RoundKeySchedule) {
    unsafe {
        let ks = schedule.0.as_mut_ptr() as *mut __m128i;

        let mut temp1 = _mm_loadu_si128(key.as_ptr() as *const __m128i);
        let mut temp3 = _mm_loadu_si128(key.as_ptr().add(16) as *const __m128i);
        _mm_storeu_si128(ks, temp1);
        _mm_storeu_si128(ks.add(1), temp3);

        macro_rules! key_group {
            ($rcon:literal, $even:expr) => {
                temp1 = assist_even(temp1, _mm_aeskeygenassist_si128::<$rcon>(temp3));
                _mm_storeu_si128(ks.add($even), temp1);
                temp3 = assist_odd(temp1, temp3);
                _mm_storeu_si128(ks.add($even + 1), temp3);
            };
        }

        key_group!(0x01, 2);
        key_group!(0x02, 4);
        key_group!(0x04, 6);
        key_group!(0x08, 8);
        key_group!(0x10, 10);
        key_group!(0x20, 12);

        // the 15th round key has no odd sibling
        temp1 = assist_even(temp1, _mm_aeskeygenassist_si128::<0x40>(temp3));
        _mm_storeu_si128(ks.add(14), temp1);
    }
}

#[inline]
#[target_feature(enable = "aes")]
unsafe fn load_round_keys(schedule: &RoundKeySchedule) -> [__m128i; NUM_ROUNDS + 1] {
    unsafe {
        let bytes = schedule.as_bytes().as_ptr();
        let mut rk = [_mm_setzero_si128(); NUM_ROUNDS + 1];
        for (i, key) in rk.iter_mut().enumerate() {
            *key = _mm_loadu_si128(bytes.add(i * BLOCK_SIZE) as *const __m128i);
        }
        rk
    }
}

#[inline]
#[target_feature(enable = "aes")]
unsafe fn encrypt1(rk: &[__m128i; NUM_ROUNDS + 1], block: __m128i) -> __m128i {
    unsafe {
        let mut state = _mm_xor_si128(block, rk[0]);
        for key in &rk[1..NUM_ROUNDS] {
            state = _mm_aesenc_si128(state, *key);
        }
        _mm_aesenclast_si128(state, rk[NUM_ROUNDS])
    }
}

#[inline]
#[target_feature(enable = "aes")]
unsafe fn encrypt2(
    rk: &[__m128i; NUM_ROUNDS + 1],
    b0: __m128i,
    b1: __m128i,
) -> (__m128i, __m128i) {
    unsafe {
        let mut s0 = _mm_xor_si128(b0, rk[0]);
        let mut s1 = _mm_xor_si128(b1, rk[0]);
        for key in &rk[1..NUM_ROUNDS] {
            s0 = _mm_aesenc_si128(s0, *key);
            s1 = _mm_aesenc_si128(s1, *key);
        }
        (
            _mm_aesenclast_si128(s0, rk[NUM_ROUNDS]),
            _mm_aesenclast_si128(s1, rk[NUM_ROUNDS]),
        )
    }
}

/// Accelerated CTR transform, two blocks in flight per iteration.
///
/// Identical contract to the portable path: the counter advances once per
/// full 16-byte chunk and a trailing sub-block chunk consumes keystream
/// without committing an increment.
///
/// # Safety
///
/// Requires the `aes` and `ssse3` CPU features; callers go through the
/// dispatcher.
#[target_feature(enable = "aes", enable = "ssse3")]
pub(crate) unsafe fn ctr_transform(
    schedule: &RoundKeySchedule,
    counter: &mut [u8; BLOCK_SIZE],
    data: &mut [u8],
) {
    unsafe {
        let rk = load_round_keys(schedule);

        // byte-reverse each 64-bit lane so _mm_add_epi64 on the high lane
        // increments the big-endian low counter half
        let bswap64 = _mm_setr_epi8(7, 6, 5, 4, 3, 2, 1, 0, 15, 14, 13, 12, 11, 10, 9, 8);
        let one = _mm_set_epi32(0, 1, 0, 0);

        let mut ctr =
            _mm_shuffle_epi8(_mm_loadu_si128(counter.as_ptr() as *const __m128i), bswap64);

        let full_blocks = data.len() / BLOCK_SIZE;
        let ptr = data.as_mut_ptr();
        let mut i = 0;

        while i + 2 <= full_blocks {
            let c0 = _mm_shuffle_epi8(ctr, bswap64);
            ctr = _mm_add_epi64(ctr, one);
            let c1 = _mm_shuffle_epi8(ctr, bswap64);
            ctr = _mm_add_epi64(ctr, one);

            let (k0, k1) = encrypt2(&rk, c0, c1);

            let p0 = ptr.add(i * BLOCK_SIZE) as *mut __m128i;
            let p1 = ptr.add((i + 1) * BLOCK_SIZE) as *mut __m128i;
            _mm_storeu_si128(p0, _mm_xor_si128(k0, _mm_loadu_si128(p0)));
            _mm_storeu_si128(p1, _mm_xor_si128(k1, _mm_loadu_si128(p1)));

            i += 2;
        }

        if i < full_blocks {
            let keystream = encrypt1(&rk, _mm_shuffle_epi8(ctr, bswap64));
            ctr = _mm_add_epi64(ctr, one);

            let p = ptr.add(i * BLOCK_SIZE) as *mut __m128i;
            _mm_storeu_si128(p, _mm_xor_si128(keystream, _mm_loadu_si128(p)));
        }

        let tail = data.len() % BLOCK_SIZE;
        if tail > 0 {
            let keystream = encrypt1(&rk, _mm_shuffle_epi8(ctr, bswap64));
            let mut pad = [0u8; BLOCK_SIZE];
            _mm_storeu_si128(pad.as_mut_ptr() as *mut __m128i, keystream);
            for (byte, k) in data[full_blocks * BLOCK_SIZE..].iter_mut().zip(pad.iter()) {
                *byte ^= k;
            }
        }

        advance_counter(counter, full_blocks as u64);
    }
}
