//! String hash functions under comparison.
//!
//! Every function maps a key and a bucket count to a bucket index in
//! `0..buckets`. The weak ones are kept on purpose: their skewed
//! distributions are what the plots are meant to show.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Initial value of the djb2 accumulator.
const DJB2_SEED: u64 = 5381;

/// Reflected CRC-32 (IEEE 802.3) polynomial.
const CRC32_POLYNOMIAL: u32 = 0xEDB8_8320;

/// Byte-at-a-time CRC-32 lookup table.
static CRC32_TABLE: [u32; 256] = crc32_table();

const fn crc32_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut i = 0;
    while i < 256 {
        #[allow(clippy::cast_possible_truncation)]
        let mut crc = i as u32;
        let mut bit = 0;
        while bit < 8 {
            crc = if crc & 1 == 1 {
                (crc >> 1) ^ CRC32_POLYNOMIAL
            } else {
                crc >> 1
            };
            bit += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
}

/// A named hash function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum HashFunction {
    /// Always bucket 0.
    Zero,
    /// Code of the first byte.
    FirstAscii,
    /// Length of the key in bytes.
    StringLength,
    /// Sum of all byte codes.
    SumAscii,
    /// Rotate left by one, then xor the next byte.
    Rol,
    /// Rotate right by one, then xor the next byte.
    Ror,
    /// Bernstein's `h * 33 + c`.
    Djb2,
    /// CRC-32 of the key bytes.
    Crc32,
}

impl HashFunction {
    /// Every function, weakest first.
    pub const ALL: [Self; 8] = [
        Self::Zero,
        Self::FirstAscii,
        Self::StringLength,
        Self::SumAscii,
        Self::Rol,
        Self::Ror,
        Self::Djb2,
        Self::Crc32,
    ];

    /// Name used on the command line and as the output file stem.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::FirstAscii => "first-ascii",
            Self::StringLength => "string-length",
            Self::SumAscii => "sum-ascii",
            Self::Rol => "rol",
            Self::Ror => "ror",
            Self::Djb2 => "djb2",
            Self::Crc32 => "crc32",
        }
    }

    /// Full-width hash of `key`, before reduction to a bucket.
    pub fn raw(self, key: &[u8]) -> u64 {
        match self {
            Self::Zero => 0,
            Self::FirstAscii => key.first().map_or(0, |&b| u64::from(b)),
            Self::StringLength => key.len() as u64,
            Self::SumAscii => key.iter().fold(0u64, |h, &b| h.wrapping_add(u64::from(b))),
            Self::Rol => key.iter().fold(0u64, |h, &b| h.rotate_left(1) ^ u64::from(b)),
            Self::Ror => key.iter().fold(0u64, |h, &b| h.rotate_right(1) ^ u64::from(b)),
            Self::Djb2 => key
                .iter()
                .fold(DJB2_SEED, |h, &b| h.wrapping_mul(33).wrapping_add(u64::from(b))),
            Self::Crc32 => u64::from(crc32(key)),
        }
    }

    /// Bucket index of `key` in a table of `buckets` buckets.
    ///
    /// `buckets` must be non-zero; [`crate::ChainedHashTable`] guarantees it.
    #[allow(clippy::cast_possible_truncation)]
    pub fn bucket(self, key: &[u8], buckets: usize) -> usize {
        debug_assert!(buckets > 0);
        (self.raw(key) % buckets as u64) as usize
    }
}

impl fmt::Display for HashFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// CRC-32 with the usual `0xFFFFFFFF` preset and final inversion.
pub fn crc32(bytes: &[u8]) -> u32 {
    !bytes.iter().fold(u32::MAX, |crc, &b| {
        CRC32_TABLE[((crc ^ u32::from(b)) & 0xFF) as usize] ^ (crc >> 8)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crc32_check_value() {
        assert_eq!(crc32(b"123456789"), 0xCBF4_3926);
        assert_eq!(crc32(b""), 0);
    }

    #[test]
    fn test_djb2_known_values() {
        assert_eq!(HashFunction::Djb2.raw(b""), 5381);
        assert_eq!(HashFunction::Djb2.raw(b"a"), 5381 * 33 + 97);
    }

    #[test]
    fn test_trivial_functions() {
        assert_eq!(HashFunction::Zero.raw(b"anything"), 0);
        assert_eq!(HashFunction::FirstAscii.raw(b"Hash"), u64::from(b'H'));
        assert_eq!(HashFunction::FirstAscii.raw(b""), 0);
        assert_eq!(HashFunction::StringLength.raw(b"table"), 5);
        assert_eq!(HashFunction::SumAscii.raw(b"ab"), 97 + 98);
    }

    #[test]
    fn test_rotations() {
        // 'a' = 0x61, 'b' = 0x62
        assert_eq!(HashFunction::Rol.raw(b"ab"), (0x61 << 1) ^ 0x62);
        assert_eq!(HashFunction::Ror.raw(b"a"), 0x61);
        assert_eq!(HashFunction::Ror.raw(b"ab"), 0x61u64.rotate_right(1) ^ 0x62);
    }

    #[test]
    fn test_anagrams_collide_for_sum() {
        let buckets = 1021;
        assert_eq!(
            HashFunction::SumAscii.bucket(b"listen", buckets),
            HashFunction::SumAscii.bucket(b"silent", buckets)
        );
        assert_ne!(HashFunction::Crc32.raw(b"listen"), HashFunction::Crc32.raw(b"silent"));
    }

    #[test]
    fn test_names_round_trip_through_clap() {
        for function in HashFunction::ALL {
            let parsed = HashFunction::from_str(function.name(), false).unwrap();
            assert_eq!(parsed, function);
            assert_eq!(function.to_string(), function.name());
        }
    }
}
