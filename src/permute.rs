// Copyright (C) 2026 pixveil developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Lesser General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Lesser General Public License for more details.
//
// You should have received a copy of the GNU Lesser General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Deterministic index permutations.
//!
//! The permutation is regenerated independently on the decode side rather
//! than stored alongside the image, so the scheme here is frozen:
//!
//! * RNG: [`Xoshiro256StarStar`] seeded with `Sha256(seed.to_le_bytes())`.
//! * Shuffle: Fisher-Yates over `0..n`, high index to low, with
//!   `j = gen_range(0..=i as u64) as usize`.
//!
//! The `u64` draw keeps the permutation identical on 32- and 64-bit targets;
//! `gen_range` over `usize` consumes different amounts of RNG output per
//! step depending on pointer width and would produce different shuffles.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use sha2::{Digest, Sha256};

fn seeded_rng(seed: u64) -> Xoshiro256StarStar {
    let mut hasher = Sha256::new();
    hasher.update(seed.to_le_bytes());
    Xoshiro256StarStar::from_seed(hasher.finalize().into())
}

/// Generate the permutation of `[0, n)` for `seed`.
///
/// Deterministic: the same `(n, seed)` pair always yields the same
/// permutation.
pub fn generate_permutation(n: usize, seed: u64) -> Vec<usize> {
    let mut rng = seeded_rng(seed);
    let mut perm: Vec<usize> = (0..n).collect();
    for i in (1..n).rev() {
        let j = rng.gen_range(0..=i as u64) as usize;
        perm.swap(i, j);
    }
    perm
}

/// Invert a permutation: `inv[p[i]] == i` for all `i`.
pub fn invert_permutation(perm: &[usize]) -> Vec<usize> {
    let mut inv = vec![0; perm.len()];
    for (i, &pi) in perm.iter().enumerate() {
        inv[pi] = i;
    }
    inv
}
