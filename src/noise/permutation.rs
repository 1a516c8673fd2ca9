//! Hash permutation table for gradient noise

use std::collections::hash_map::RandomState;
use std::hash::BuildHasher;

use crate::core::{Error, Result};

/// Number of distinct lattice hashes
pub const TABLE_SIZE: usize = 256;

/// Mask applied to lattice coordinates before lookup
pub const PERM_MASK: i32 = 255;

/// Simple deterministic RNG driving the shuffle
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        Self { state: seed.wrapping_add(1) }
    }

    /// Advance state and return next u32
    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let mut h = (self.state >> 32) as u32;
        h = h.wrapping_mul(0x45d9f3b);
        h ^= h >> 16;
        h = h.wrapping_mul(0x45d9f3b);
        h ^= h >> 16;
        h
    }

    /// Uniform-ish integer in `0..=max`
    fn below_inclusive(&mut self, max: usize) -> usize {
        self.next_u32() as usize % (max + 1)
    }
}

/// 256-entry permutation, stored twice so `perm[perm[x] + y]` never wraps.
#[derive(Clone)]
pub struct PermutationTable {
    perm: [u8; TABLE_SIZE * 2],
}

impl PermutationTable {
    /// Unshuffled table (`perm[i] == i`)
    pub fn identity() -> Self {
        let mut values = [0u8; TABLE_SIZE];
        for (i, v) in values.iter_mut().enumerate() {
            *v = i as u8;
        }
        Self::doubled(&values)
    }

    /// Fisher-Yates shuffle of the identity sequence driven by `seed`.
    ///
    /// The same seed always yields the same table.
    pub fn from_seed(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed as u64);
        let mut values = [0u8; TABLE_SIZE];
        for (i, v) in values.iter_mut().enumerate() {
            *v = i as u8;
        }

        for i in (1..TABLE_SIZE).rev() {
            let j = rng.below_inclusive(i);
            values.swap(i, j);
        }

        Self::doubled(&values)
    }

    /// Shuffle seeded from the process-wide random source.
    pub fn random() -> Self {
        Self::from_seed(random_seed())
    }

    /// Build from explicit values, which must be a permutation of 0..=255.
    pub fn from_values(values: [u8; TABLE_SIZE]) -> Result<Self> {
        let mut seen = [false; TABLE_SIZE];
        for &v in &values {
            if seen[v as usize] {
                return Err(Error::InvalidPermutation(format!("value {} appears more than once", v)));
            }
            seen[v as usize] = true;
        }
        Ok(Self::doubled(&values))
    }

    fn doubled(values: &[u8; TABLE_SIZE]) -> Self {
        let mut perm = [0u8; TABLE_SIZE * 2];
        perm[..TABLE_SIZE].copy_from_slice(values);
        perm[TABLE_SIZE..].copy_from_slice(values);
        Self { perm }
    }

    /// Lookup in the doubled table. `index` must be below 512.
    #[inline]
    pub fn get(&self, index: usize) -> usize {
        self.perm[index] as usize
    }

    /// Two-level lattice hash `perm[perm[x & 255] + (y & 255)]`
    #[inline]
    pub fn hash2(&self, x: i32, y: i32) -> usize {
        let xi = (x & PERM_MASK) as usize;
        let yi = (y & PERM_MASK) as usize;
        self.get(self.get(xi) + yi)
    }

    /// All 512 entries
    pub fn as_slice(&self) -> &[u8] {
        &self.perm
    }
}

impl std::fmt::Debug for PermutationTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PermutationTable")
            .field("head", &&self.perm[..8])
            .finish_non_exhaustive()
    }
}

/// Seed from std's per-process random hasher keys
pub fn random_seed() -> u32 {
    let bits = RandomState::new().hash_one(std::time::SystemTime::now());
    (bits ^ (bits >> 32)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_is_doubled_permutation(table: &PermutationTable) {
        let perm = table.as_slice();
        assert_eq!(perm.len(), 512);

        let mut counts = [0u32; TABLE_SIZE];
        for &v in perm {
            counts[v as usize] += 1;
        }
        assert!(counts.iter().all(|&c| c == 2), "each value must appear exactly twice");
        assert_eq!(&perm[..TABLE_SIZE], &perm[TABLE_SIZE..]);
    }

    #[test]
    fn test_from_seed_is_permutation() {
        for seed in [0, 1, 12345, u32::MAX] {
            assert_is_doubled_permutation(&PermutationTable::from_seed(seed));
        }
    }

    #[test]
    fn test_from_seed_deterministic() {
        let a = PermutationTable::from_seed(42);
        let b = PermutationTable::from_seed(42);
        assert_eq!(a.as_slice(), b.as_slice());
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = PermutationTable::from_seed(1);
        let b = PermutationTable::from_seed(2);
        assert_ne!(a.as_slice(), b.as_slice());
    }

    #[test]
    fn test_shuffle_changes_order() {
        let shuffled = PermutationTable::from_seed(7);
        assert_ne!(shuffled.as_slice(), PermutationTable::identity().as_slice());
    }

    #[test]
    fn test_random_is_permutation() {
        assert_is_doubled_permutation(&PermutationTable::random());
    }

    #[test]
    fn test_identity() {
        let table = PermutationTable::identity();
        assert_is_doubled_permutation(&table);
        assert_eq!(table.get(0), 0);
        assert_eq!(table.get(255), 255);
        assert_eq!(table.get(256), 0);
        assert_eq!(table.hash2(3, 4), 7);
    }

    #[test]
    fn test_from_values_rejects_duplicates() {
        let mut values = [0u8; TABLE_SIZE];
        for (i, v) in values.iter_mut().enumerate() {
            *v = i as u8;
        }
        assert!(PermutationTable::from_values(values).is_ok());

        values[10] = 11;
        let err = PermutationTable::from_values(values).unwrap_err();
        assert!(matches!(err, Error::InvalidPermutation(_)));
    }

    #[test]
    fn test_hash2_wraps_coordinates() {
        let table = PermutationTable::from_seed(99);
        assert_eq!(table.hash2(0, 0), table.hash2(256, 0));
        assert_eq!(table.hash2(0, 0), table.hash2(0, 256));
        assert_eq!(table.hash2(-1, 5), table.hash2(255, 5));
    }
}
