//! Stable hash codes for key types
//!
//! `std::collections::HashMap` seeds its hasher randomly per process, so the
//! digest of a value changes between runs. Keys also expose a 32-bit
//! `hash_code` that must stay fixed for the lifetime of the program. It is
//! built from `FxHasher`, which has no random state.
//!
//! ```
//! use flowkey_core::hash::{mix, stable_hash};
//!
//! let a = mix(3, 53, 7);
//! assert_eq!(a, 3 * 53 + 7);
//! assert_eq!(stable_hash("X"), stable_hash("X"));
//! ```

use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};

/// Hash a value to 32 bits with a deterministic hasher
///
/// The 64-bit digest is folded so both halves contribute.
pub fn stable_hash<T: Hash + ?Sized>(value: &T) -> i32 {
    let mut hasher = FxHasher::default();
    value.hash(&mut hasher);
    let h = hasher.finish();
    (h ^ (h >> 32)) as i32
}

/// One mixing step: `seed * prime + value`, wrapping on overflow
#[inline]
pub fn mix(seed: i32, prime: i32, value: i32) -> i32 {
    seed.wrapping_mul(prime).wrapping_add(value)
}
