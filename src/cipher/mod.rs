//! src/cipher/mod.rs
//! AES-256-CTR engine with one-time hardware dispatch.
//!
//! Two interchangeable block-cipher implementations live below this
//! module: a portable table-driven one ([`generic`]) and an AES-NI one
//! ([`aesni`], x86_64 only). The CPU capability probe runs once per
//! process; everything above this layer calls the dispatching
//! [`expand_key`] / [`ctr_transform`] pair and can never observe which
//! path was taken — both produce bit-identical output.

#[cfg(target_arch = "x86_64")]
pub(crate) mod aesni;
pub(crate) mod counter;
pub(crate) mod generic;

use std::sync::OnceLock;

use crate::consts::BLOCK_SIZE;
use crate::key::{RoundKeySchedule, SecretKey};

static HW_AES: OnceLock<bool> = OnceLock::new();

/// Whether the running CPU offers the AES-NI instruction set.
///
/// Probed once via `is_x86_feature_detected!` and cached for the process
/// lifetime; always `false` off x86_64.
#[inline]
pub fn has_hardware_support() -> bool {
    *HW_AES.get_or_init(|| {
        #[cfg(target_arch = "x86_64")]
        {
            is_x86_feature_detected!("aes") && is_x86_feature_detected!("ssse3")
        }
        #[cfg(not(target_arch = "x86_64"))]
        {
            false
        }
    })
}

/// Expand a 256-bit key into the 60-word round key schedule.
///
/// Both implementations produce byte-identical schedules, so a container
/// encrypted on AES-NI hardware decrypts on a machine without it.
pub fn expand_key(key: &SecretKey) -> RoundKeySchedule {
    let mut schedule = RoundKeySchedule::zeroed();

    #[cfg(target_arch = "x86_64")]
    if has_hardware_support() {
        // capability bit verified by the probe above
        unsafe { aesni::expand_key(key.as_bytes(), &mut schedule) };
        return schedule;
    }

    generic::expand_key(key.as_bytes(), &mut schedule);
    schedule
}

/// Counter-mode transform over `data` in place.
///
/// Encrypts `ceil(data.len() / 16)` successive counter values and XORs
/// each against the corresponding 16-byte chunk; the last chunk may be
/// shorter and consumes only that many keystream bytes. `counter`
/// advances by the number of full chunks consumed, in its low 64 bits
/// only (see [`counter::advance_counter`]).
///
/// Encryption and decryption are the same operation from the same
/// starting counter value. A given (key, counter value) pair must be
/// used at most once across both directions of a file's processing;
/// the stream codec guarantees this by deriving every counter from a
/// freshly generated IV.
pub fn ctr_transform(
    schedule: &RoundKeySchedule,
    counter: &mut [u8; BLOCK_SIZE],
    data: &mut [u8],
) {
    #[cfg(target_arch = "x86_64")]
    if has_hardware_support() {
        // capability bit verified by the probe above
        unsafe { aesni::ctr_transform(schedule, counter, data) };
        return;
    }

    generic::ctr_transform(schedule, counter, data);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_keys() -> Vec<[u8; 32]> {
        vec![
            [0u8; 32],
            [0xFF; 32],
            core::array::from_fn(|i| i as u8),
            core::array::from_fn(|i| (31 - i) as u8 ^ 0xA5),
        ]
    }

    #[cfg(target_arch = "x86_64")]
    #[test]
    fn schedules_are_byte_identical_across_implementations() {
        if !has_hardware_support() {
            eprintln!("AES-NI not available, skipping");
            return;
        }
        for key in test_keys() {
            let mut portable = RoundKeySchedule::zeroed();
            generic::expand_key(&key, &mut portable);

            let mut accelerated = RoundKeySchedule::zeroed();
            unsafe { aesni::expand_key(&key, &mut accelerated) };

            assert_eq!(portable.as_bytes()[..], accelerated.as_bytes()[..]);
        }
    }

    #[cfg(target_arch = "x86_64")]
    #[test]
    fn ctr_streams_match_across_implementations() {
        if !has_hardware_support() {
            eprintln!("AES-NI not available, skipping");
            return;
        }
        let key = SecretKey::new(core::array::from_fn(|i| (i * 7) as u8));
        let schedule = expand_key(&key);

        // odd and even block counts plus sub-block tails exercise the
        // pipelined pair loop, the single-block path and the partial chunk
        for len in [0usize, 1, 15, 16, 17, 31, 32, 33, 48, 100, 1000] {
            let plain: Vec<u8> = (0..len).map(|i| (i * 13 % 251) as u8).collect();

            let mut ctr_a = [0x42u8; BLOCK_SIZE];
            let mut data_a = plain.clone();
            generic::ctr_transform(&schedule, &mut ctr_a, &mut data_a);

            let mut ctr_b = [0x42u8; BLOCK_SIZE];
            let mut data_b = plain.clone();
            unsafe { aesni::ctr_transform(&schedule, &mut ctr_b, &mut data_b) };

            assert_eq!(data_a, data_b, "keystream diverged at length {len}");
            assert_eq!(ctr_a, ctr_b, "counter diverged at length {len}");
        }
    }

    #[test]
    fn pipelined_blocks_equal_one_at_a_time() {
        // one transform over 5 blocks vs five single-block transforms
        let key = SecretKey::new([0x5A; 32]);
        let schedule = expand_key(&key);
        let plain = vec![0xC3u8; 5 * BLOCK_SIZE];

        let mut ctr_bulk = [1u8; BLOCK_SIZE];
        let mut bulk = plain.clone();
        ctr_transform(&schedule, &mut ctr_bulk, &mut bulk);

        let mut ctr_single = [1u8; BLOCK_SIZE];
        let mut single = plain;
        for block in single.chunks_mut(BLOCK_SIZE) {
            ctr_transform(&schedule, &mut ctr_single, block);
        }

        assert_eq!(bulk, single);
        assert_eq!(ctr_bulk, ctr_single);
    }
}
