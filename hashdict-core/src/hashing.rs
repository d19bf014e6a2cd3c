//! Key → slot index reduction
//!
//! A `HashFunction` pairs a `HashSource`, which turns a key into a signed code,
//! with a `Reduction`, which maps the code into `[0, size)`. The named
//! `HashMethod`s cover the combinations the tables are usually built with.
//!
//! Every function here is pure. `size` must be positive; the tables reject a zero
//! capacity before any reduction runs.

use crate::digest;
use crate::key::TableKey;
use std::fmt;
use std::hash::{Hash, Hasher};
use xxhash_rust::xxh3::Xxh3;

/// Fractional part of the golden ratio, (√5 − 1) / 2
pub const GOLDEN_RATIO_FRACTION: f64 = 0.618_033_988_749_894_9;

/// Seed for the intrinsic hash, fixed so indices are stable across processes
pub const INTRINSIC_SEED: u64 = 0x6861_7368_6469_6374;

/// Where a key's integer code comes from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HashSource {
    /// The key's `Hash` impl through seeded xxHash3, folded to 32 bits
    Intrinsic,
    /// Hex digit sum of a keyed BLAKE3 MAC
    Hmac,
    /// Leading four bytes of SHA-256
    Sha256,
    /// Zero-basis FNV over the key bytes
    Fnv,
}

impl HashSource {
    /// Signed code for `key`
    pub fn code<K: TableKey + ?Sized>(self, key: &K) -> i64 {
        match self {
            HashSource::Intrinsic => i64::from(intrinsic_code(key)),
            HashSource::Hmac => digest::keyed_digit_sum(key.key_bytes()),
            HashSource::Sha256 => i64::from(digest::sha256_prefix(key.key_bytes())),
            HashSource::Fnv => i64::from(digest::fnv(key.key_bytes())),
        }
    }
}

/// How a code becomes an index
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reduction {
    /// `|code| mod size`
    Division,
    /// `floor(size · frac(code · A))` with `A` the golden ratio fraction
    Multiplicative,
}

impl Reduction {
    #[inline]
    pub fn reduce(self, code: i64, size: usize) -> usize {
        debug_assert!(size > 0, "size must be positive");
        match self {
            Reduction::Division => (code.unsigned_abs() % size as u64) as usize,
            Reduction::Multiplicative => {
                let product = code as f64 * GOLDEN_RATIO_FRACTION;
                let frac = product - product.floor();
                // frac < 1, but size * frac can still round up to size
                ((size as f64 * frac).floor() as usize).min(size - 1)
            }
        }
    }
}

/// Named hash methods
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HashMethod {
    Division,
    Multiplicative,
    Hmac,
    Sha256,
    Fnv,
}

impl HashMethod {
    pub const ALL: [HashMethod; 5] = [
        HashMethod::Division,
        HashMethod::Multiplicative,
        HashMethod::Hmac,
        HashMethod::Sha256,
        HashMethod::Fnv,
    ];

    pub fn source(self) -> HashSource {
        match self {
            HashMethod::Division | HashMethod::Multiplicative => HashSource::Intrinsic,
            HashMethod::Hmac => HashSource::Hmac,
            HashMethod::Sha256 => HashSource::Sha256,
            HashMethod::Fnv => HashSource::Fnv,
        }
    }

    pub fn reduction(self) -> Reduction {
        match self {
            HashMethod::Multiplicative => Reduction::Multiplicative,
            _ => Reduction::Division,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            HashMethod::Division => "division",
            HashMethod::Multiplicative => "multiplicative",
            HashMethod::Hmac => "hmac",
            HashMethod::Sha256 => "sha256",
            HashMethod::Fnv => "fnv",
        }
    }

    #[inline]
    pub fn index<K: TableKey + ?Sized>(self, key: &K, size: usize) -> usize {
        HashFunction::from(self).index(key, size)
    }
}

impl fmt::Display for HashMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A source/reduction pair, stored by value in each table
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HashFunction {
    pub source: HashSource,
    pub reduction: Reduction,
}

impl HashFunction {
    pub const fn new(source: HashSource, reduction: Reduction) -> Self {
        HashFunction { source, reduction }
    }

    /// Index of `key` in a table of `size` slots
    #[inline]
    pub fn index<K: TableKey + ?Sized>(&self, key: &K, size: usize) -> usize {
        self.reduction.reduce(self.source.code(key), size)
    }
}

impl From<HashMethod> for HashFunction {
    fn from(method: HashMethod) -> Self {
        HashFunction::new(method.source(), method.reduction())
    }
}

impl fmt::Display for HashFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}/{:?}", self.source, self.reduction)
    }
}

/// Equality-consistent 32-bit code from the key's `Hash` impl
pub fn intrinsic_code<K: Hash + ?Sized>(key: &K) -> i32 {
    let mut hasher = Xxh3::with_seed(INTRINSIC_SEED);
    key.hash(&mut hasher);
    let hash = hasher.finish();
    ((hash >> 32) ^ hash) as u32 as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_golden_ratio_constant() {
        let expected = (5f64.sqrt() - 1.0) / 2.0;
        assert!((GOLDEN_RATIO_FRACTION - expected).abs() < 1e-15);
    }

    #[test]
    fn test_deterministic() {
        for method in HashMethod::ALL {
            let a = method.index("Little Prince", 97);
            let b = method.index("Little Prince", 97);
            assert_eq!(a, b, "{} is not deterministic", method);
        }
    }

    #[test]
    fn test_equal_keys_equal_index() {
        let owned = String::from("Fox");
        for method in HashMethod::ALL {
            assert_eq!(method.index(&owned, 1000), method.index(&owned.clone(), 1000));
        }
    }

    #[test]
    fn test_division_negative_code() {
        assert_eq!(Reduction::Division.reduce(-7, 5), 2);
        assert_eq!(Reduction::Division.reduce(i64::from(i32::MIN), 10), 8);
    }

    #[test]
    fn test_multiplicative_known_values() {
        // frac(1 · A) = 0.618…, floor(10 · 0.618…) = 6
        assert_eq!(Reduction::Multiplicative.reduce(1, 10), 6);
        assert_eq!(Reduction::Multiplicative.reduce(0, 10), 0);
        // negative codes still land in range: frac(-A) = 0.381…
        assert_eq!(Reduction::Multiplicative.reduce(-1, 10), 3);
    }

    #[test]
    fn test_size_one() {
        for method in HashMethod::ALL {
            assert_eq!(method.index("anything", 1), 0);
        }
    }

    #[test]
    fn test_random_keys_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        for size in [1usize, 7, 97, 1000, 10_007] {
            for _ in 0..10_000 {
                let key = format!("key{}", rng.gen::<u64>());
                for method in [HashMethod::Division, HashMethod::Multiplicative] {
                    assert!(method.index(&key, size) < size);
                }
            }
        }
    }

    #[test]
    fn test_digest_sources_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(54321);
        for _ in 0..2_000 {
            let key: u64 = rng.gen();
            for method in [HashMethod::Hmac, HashMethod::Sha256, HashMethod::Fnv] {
                assert!(method.index(&key, 101) < 101);
            }
        }
    }

    #[test]
    fn test_composed_function() {
        let f = HashFunction::new(HashSource::Sha256, Reduction::Multiplicative);
        let code = HashSource::Sha256.code("Rose");
        assert_eq!(f.index("Rose", 50), Reduction::Multiplicative.reduce(code, 50));
        assert_eq!(HashFunction::from(HashMethod::Fnv).to_string(), "Fnv/Division");
    }
}
