//! Gradient noise synthesis
//!
//! A [`NoiseContext`] owns the permutation table used for lattice hashing;
//! there is no global noise state.

pub mod permutation;
pub mod perlin;

pub use permutation::{PermutationTable, TABLE_SIZE};
pub use perlin::{fade, max_amplitude, FbmParams, NoiseContext};
