// crates/engine/src/fingerprint.rs
use std::fmt;

use xxhash_rust::xxh3::xxh3_64;

/// 64-bit identity of a line's content.
///
/// Two lines with the same fingerprint are counted as the same line. With a
/// well-distributed 64-bit hash collisions are negligible at realistic input
/// sizes, but when one happens the counts merge and the first sample wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Fingerprint(pub u64);

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

pub trait LineHasher: Send + Sync {
    fn fingerprint(&self, line: &[u8]) -> Fingerprint;
}

/// Default hasher, XXH3 with the default seed.
#[derive(Debug, Clone, Copy, Default)]
pub struct Xxh3Hasher;

impl LineHasher for Xxh3Hasher {
    #[inline]
    fn fingerprint(&self, line: &[u8]) -> Fingerprint {
        Fingerprint(xxh3_64(line))
    }
}
