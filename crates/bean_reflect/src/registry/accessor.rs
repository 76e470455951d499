use core::any::TypeId;
use std::sync::Arc;

use bean_utils::hash::Equivalent;

use crate::info::{BeanInfo, Type};
use crate::registry::{PropertyDescriptor, PropertyMetadataCache, SharedCache};

// -----------------------------------------------------------------------------
// AccessorKey

/// Cache key of an [`AccessorPair`]: owning type and property name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccessorKey {
    type_id: TypeId,
    name: Box<str>,
}

impl AccessorKey {
    #[inline]
    pub fn new(type_id: TypeId, name: &str) -> Self {
        Self {
            type_id,
            name: name.into(),
        }
    }
}

// Hashes exactly like `AccessorKey`, so lookups need no allocation.
#[derive(Hash)]
struct AccessorKeyRef<'a> {
    type_id: TypeId,
    name: &'a str,
}

impl Equivalent<AccessorKey> for AccessorKeyRef<'_> {
    #[inline]
    fn equivalent(&self, key: &AccessorKey) -> bool {
        self.type_id == key.type_id && self.name == &*key.name
    }
}

// -----------------------------------------------------------------------------
// AccessorPair

/// The getter and setter of one property of one type.
#[derive(Debug, Clone, Copy)]
pub struct AccessorPair {
    owner: Type,
    property: PropertyDescriptor,
}

impl AccessorPair {
    #[inline]
    pub const fn new(owner: Type, property: PropertyDescriptor) -> Self {
        Self { owner, property }
    }

    /// The type the pair was resolved for.
    #[inline]
    pub const fn owner(&self) -> Type {
        self.owner
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.property.name()
    }

    #[inline]
    pub const fn property(&self) -> &PropertyDescriptor {
        &self.property
    }
}

// -----------------------------------------------------------------------------
// AccessorCache

/// `(type, property name)` to [`AccessorPair`] cache.
///
/// Names that resolve to no property are not cached.
#[derive(Debug, Default)]
pub struct AccessorCache {
    pairs: SharedCache<AccessorKey, AccessorPair>,
}

impl AccessorCache {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the accessor pair of `name` on `info`.
    pub fn resolve(
        &self,
        metadata: &PropertyMetadataCache,
        info: &'static BeanInfo,
        name: &str,
    ) -> Option<Arc<AccessorPair>> {
        let type_id = info.ty().id();
        if let Some(pair) = self.pairs.get(&AccessorKeyRef { type_id, name }) {
            return Some(pair);
        }
        let property = *metadata.get(info).get(name)?;
        log::debug!("caching accessors of `{}.{name}`", info.ty());
        Some(self.pairs.insert(
            AccessorKey::new(type_id, name),
            AccessorPair::new(info.ty(), property),
        ))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn clear(&self) {
        self.pairs.clear();
    }
}

// -----------------------------------------------------------------------------
// StringAccessorCache

/// Type path to the accessor pairs of its text properties.
///
/// A text property is a `String` or `Option<String>` property with both a
/// getter and a setter.
#[derive(Debug, Default)]
pub struct StringAccessorCache {
    pairs: SharedCache<&'static str, Box<[AccessorPair]>>,
}

impl StringAccessorCache {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the text properties of `info`, in property order.
    pub fn get(
        &self,
        metadata: &PropertyMetadataCache,
        info: &'static BeanInfo,
    ) -> Arc<Box<[AccessorPair]>> {
        self.pairs.get_or_build(info.ty().path(), |path| {
            log::debug!("caching text accessors of `{path}`");
            metadata
                .get(info)
                .iter()
                .filter(|p| is_text(p.ty()) && p.is_readable() && p.is_writable())
                .map(|p| AccessorPair::new(info.ty(), *p))
                .collect()
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn clear(&self) {
        self.pairs.clear();
    }
}

#[inline]
pub(crate) fn is_text(ty: Type) -> bool {
    ty.is::<String>() || ty.is::<Option<String>>()
}

#[cfg(test)]
mod tests {
    use core::any::TypeId;
    use core::hash::BuildHasher;

    use bean_utils::hash::{Equivalent, FixedHashState};

    use super::{AccessorKey, AccessorKeyRef};

    #[test]
    fn borrowed_key_matches_owned() {
        let owned = AccessorKey::new(TypeId::of::<u8>(), "studentId");
        let borrowed = AccessorKeyRef {
            type_id: TypeId::of::<u8>(),
            name: "studentId",
        };
        assert!(borrowed.equivalent(&owned));
        assert_eq!(FixedHashState.hash_one(&owned), FixedHashState.hash_one(&borrowed));

        let other = AccessorKeyRef {
            type_id: TypeId::of::<u16>(),
            name: "studentId",
        };
        assert!(!other.equivalent(&owned));
    }
}
