//! Hash states used by the bean caches.
//!
//! [`FixedHashState`] hashes through `foldhash` with a constant seed, so two
//! runs over the same keys produce the same table layout. [`NoOpHashState`]
//! passes a single `u64` straight through and is meant for keys that already
//! carry a good hash, such as [`TypeId`](core::any::TypeId).

use core::hash::{BuildHasher, Hasher};

use foldhash::fast::{FixedState, FoldHasher};

// -----------------------------------------------------------------------------
// FixedHasher

const BEAN_HASH_SEED: FixedState = FixedState::with_seed(0x5EED_B3A4_C0DE_2D17);

/// The hasher built by [`FixedHashState`].
pub type FixedHasher = FoldHasher<'static>;

/// A `foldhash` state with a fixed seed.
///
/// Property names and type paths are hashed with it.
///
/// # Examples
///
/// ```
/// use core::hash::BuildHasher;
/// use bean_utils::hash::FixedHashState;
///
/// let a = FixedHashState.hash_one("studentId");
/// let b = FixedHashState.hash_one("studentId");
/// assert_eq!(a, b);
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct FixedHashState;

impl BuildHasher for FixedHashState {
    type Hasher = FixedHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        BEAN_HASH_SEED.build_hasher()
    }
}

// -----------------------------------------------------------------------------
// NoOpHasher

/// Hasher that keeps the last `u64` written to it.
///
/// Byte writes are folded in with a left rotation so that a lone integer
/// written through `write` or `write_u64` gives the same result.
#[derive(Copy, Clone, Default, Debug)]
pub struct NoOpHasher {
    hash: u64,
}

impl Hasher for NoOpHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.hash
    }

    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes.iter().rev() {
            self.hash = self.hash.rotate_left(8).wrapping_add(u64::from(*byte));
        }
    }

    #[inline]
    fn write_u64(&mut self, i: u64) {
        self.hash = i;
    }
}

/// Builds [`NoOpHasher`]s.
///
/// # Examples
///
/// ```
/// use core::hash::BuildHasher;
/// use bean_utils::hash::NoOpHashState;
///
/// assert_eq!(NoOpHashState.hash_one(42_u64), 42);
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct NoOpHashState;

impl BuildHasher for NoOpHashState {
    type Hasher = NoOpHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        NoOpHasher { hash: 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::{FixedHashState, NoOpHashState};
    use core::hash::BuildHasher;

    #[test]
    fn byte_and_word_writes_agree() {
        assert_eq!(NoOpHashState.hash_one(1234_u64), 1234);
        assert_eq!(NoOpHashState.hash_one(1234_u32), 1234);
    }

    #[test]
    fn fixed_state_is_deterministic() {
        let first = FixedHashState.hash_one(("Demo", "name"));
        let second = FixedHashState.hash_one(("Demo", "name"));
        assert_eq!(first, second);
        assert_ne!(first, FixedHashState.hash_one(("Demo", "code")));
    }
}
