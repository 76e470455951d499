use core::fmt;
use core::hash::{BuildHasher, Hash};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use bean_utils::hash::{Equivalent, FixedHashState, HashMap};

// -----------------------------------------------------------------------------
// SharedCache

/// A build-once, read-many map shared between threads.
///
/// Values are built outside of any lock. Two threads missing the same key at
/// the same time both build, and the later insert replaces the earlier one.
/// Builders are pure functions of the key, so the result is the same either
/// way. Entries are never evicted, only [`clear`](Self::clear)ed.
///
/// A poisoned lock is recovered, the map never holds a half-written entry.
pub struct SharedCache<K, V, S = FixedHashState> {
    map: RwLock<HashMap<K, Arc<V>, S>>,
}

impl<K, V, S: Default> Default for SharedCache<K, V, S> {
    fn default() -> Self {
        Self {
            map: RwLock::new(HashMap::with_hasher(S::default())),
        }
    }
}

impl<K, V, S: Default> SharedCache<K, V, S> {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<K: Eq + Hash, V, S: BuildHasher> SharedCache<K, V, S> {
    #[inline]
    fn read(&self) -> RwLockReadGuard<'_, HashMap<K, Arc<V>, S>> {
        self.map.read().unwrap_or_else(PoisonError::into_inner)
    }

    #[inline]
    fn write(&self) -> RwLockWriteGuard<'_, HashMap<K, Arc<V>, S>> {
        self.map.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the cached value for `key`.
    pub fn get<Q: Hash + Equivalent<K> + ?Sized>(&self, key: &Q) -> Option<Arc<V>> {
        self.read().get(key).cloned()
    }

    /// Inserts or replaces the value for `key`.
    pub fn insert(&self, key: K, value: V) -> Arc<V> {
        let value = Arc::new(value);
        self.write().insert(key, Arc::clone(&value));
        value
    }

    /// Returns the cached value for `key`, running `build` on a miss.
    pub fn get_or_build(&self, key: K, build: impl FnOnce(&K) -> V) -> Arc<V> {
        if let Some(value) = self.get(&key) {
            return value;
        }
        let value = build(&key);
        self.insert(key, value)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Drops every entry. Values already handed out stay alive.
    pub fn clear(&self) {
        self.write().clear();
    }
}

impl<K, V, S> fmt::Debug for SharedCache<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = self
            .map
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len();
        f.debug_struct("SharedCache").field("len", &len).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::SharedCache;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn builds_once_when_warm() {
        let cache: SharedCache<String, usize> = SharedCache::new();
        let calls = AtomicUsize::new(0);
        let build = |key: &String| {
            calls.fetch_add(1, Ordering::Relaxed);
            key.len()
        };

        assert_eq!(*cache.get_or_build("abc".to_owned(), build), 3);
        assert_eq!(*cache.get_or_build("abc".to_owned(), build), 3);
        assert_eq!(calls.load(Ordering::Relaxed), 1);
        assert_eq!(cache.get("abc").as_deref(), Some(&3));

        cache.clear();
        assert!(cache.is_empty());
    }
}
