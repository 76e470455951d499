use core::any::TypeId;
use core::fmt;
use std::sync::Arc;

use bean_utils::hash::{FixedHashState, HashMap, NoOpHashState};

use crate::info::{BeanInfo, PropertyInfo, ReadFn, Type, WriteFn};
use crate::registry::SharedCache;
use crate::{AccessError, Bean, TypeIntrospector, Typed, Value};

// -----------------------------------------------------------------------------
// PropertyDescriptor

/// One property as seen from a concrete bean type.
///
/// Carries the accessor pair of the declaring level and how many parent
/// links separate the declaring level from the owning type.
#[derive(Clone, Copy)]
pub struct PropertyDescriptor {
    name: &'static str,
    ty: Type,
    declaring: Type,
    getter: Option<ReadFn>,
    setter: Option<WriteFn>,
    owner: &'static BeanInfo,
    depth: usize,
}

impl PropertyDescriptor {
    pub(crate) fn new(
        owner: &'static BeanInfo,
        level: &'static BeanInfo,
        property: &PropertyInfo,
        depth: usize,
    ) -> Self {
        Self {
            name: property.name(),
            ty: property.ty(),
            declaring: level.ty(),
            getter: property.getter(),
            setter: property.setter(),
            owner,
            depth,
        }
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The declared property type.
    #[inline]
    pub const fn ty(&self) -> Type {
        self.ty
    }

    /// The type that declares the property.
    #[inline]
    pub const fn declaring_type(&self) -> Type {
        self.declaring
    }

    /// The type this descriptor was resolved for.
    #[inline]
    pub const fn owner(&self) -> &'static BeanInfo {
        self.owner
    }

    /// Number of parent links from the owner to the declaring type.
    #[inline]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    pub const fn is_readable(&self) -> bool {
        self.getter.is_some()
    }

    #[inline]
    pub const fn is_writable(&self) -> bool {
        self.setter.is_some()
    }

    /// Reads the property from `bean`, an instance of the owner type.
    pub fn read(&self, bean: &dyn Bean) -> Result<Value, AccessError> {
        let getter = self
            .getter
            .ok_or(AccessError::NotReadable { property: self.name })?;
        getter(self.owner.upcast(bean, self.depth)?)
    }

    /// Writes the property of `bean`, an instance of the owner type.
    pub fn write(&self, bean: &mut dyn Bean, value: Value) -> Result<(), AccessError> {
        let setter = self
            .setter
            .ok_or(AccessError::NotWritable { property: self.name })?;
        setter(self.owner.upcast_mut(bean, self.depth)?, value)
    }
}

impl fmt::Debug for PropertyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyDescriptor")
            .field("name", &self.name)
            .field("ty", &self.ty)
            .field("declaring", &self.declaring)
            .field("readable", &self.is_readable())
            .field("writable", &self.is_writable())
            .field("depth", &self.depth)
            .finish()
    }
}

// -----------------------------------------------------------------------------
// TypeDescriptor

/// The ordered, immutable property list of one bean type.
pub struct TypeDescriptor {
    info: &'static BeanInfo,
    properties: Box<[PropertyDescriptor]>,
    indices: HashMap<&'static str, usize, FixedHashState>,
}

impl TypeDescriptor {
    /// Introspects `info`. Prefer [`PropertyMetadataCache::get`].
    pub fn build(info: &'static BeanInfo) -> Self {
        let properties = TypeIntrospector::properties(info).into_boxed_slice();
        let indices = properties
            .iter()
            .enumerate()
            .map(|(index, property)| (property.name(), index))
            .collect();
        Self {
            info,
            properties,
            indices,
        }
    }

    #[inline]
    pub const fn info(&self) -> &'static BeanInfo {
        self.info
    }

    #[inline]
    pub fn ty(&self) -> Type {
        self.info.ty()
    }

    /// Returns the property called `name`.
    pub fn get(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.indices.get(name).map(|&index| &self.properties[index])
    }

    /// Iterates in introspection order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, PropertyDescriptor> {
        self.properties.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[PropertyDescriptor] {
        &self.properties
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl<'a> IntoIterator for &'a TypeDescriptor {
    type Item = &'a PropertyDescriptor;
    type IntoIter = core::slice::Iter<'a, PropertyDescriptor>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.properties.iter()
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("ty", &self.info.ty())
            .field("properties", &self.properties)
            .finish()
    }
}

// -----------------------------------------------------------------------------
// PropertyMetadataCache

/// Type to [`TypeDescriptor`] cache.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use bean_reflect::{derive::Bean, registry::PropertyMetadataCache};
///
/// #[derive(Bean)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let cache = PropertyMetadataCache::new();
/// let cold = cache.get_of::<Point>();
/// let warm = cache.get_of::<Point>();
///
/// assert!(Arc::ptr_eq(&cold, &warm));
/// assert_eq!(cold.iter().map(|p| p.name()).collect::<Vec<_>>(), ["x", "y"]);
/// ```
#[derive(Debug, Default)]
pub struct PropertyMetadataCache {
    descriptors: SharedCache<TypeId, TypeDescriptor, NoOpHashState>,
}

impl PropertyMetadataCache {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the descriptor of `info`, introspecting it on first use.
    pub fn get(&self, info: &'static BeanInfo) -> Arc<TypeDescriptor> {
        self.descriptors.get_or_build(info.ty().id(), |_| {
            log::debug!("building property descriptors of `{}`", info.ty());
            TypeDescriptor::build(info)
        })
    }

    #[inline]
    pub fn get_of<T: Typed>(&self) -> Arc<TypeDescriptor> {
        self.get(T::bean_info())
    }

    /// Number of cached types.
    #[inline]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn clear(&self) {
        self.descriptors.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::PropertyMetadataCache;
    use crate::fixtures::{Demo, Dog};
    use crate::info::Type;

    #[test]
    fn leaf_first_with_depths() {
        let cache = PropertyMetadataCache::new();
        let descriptor = cache.get_of::<Demo>();

        let names: Vec<_> = descriptor.iter().map(|p| p.name()).collect();
        assert_eq!(names, ["code", "name", "age", "studentId", "id"]);

        let id = descriptor.get("id").unwrap();
        assert_eq!(id.depth(), 1);
        assert_eq!(id.declaring_type().name(), "BaseEntity");
        assert!(id.ty().is::<Option<i64>>());
        assert!(descriptor.get("student_id").is_none());
    }

    #[test]
    fn shadowed_property_resolves_to_leaf() {
        let cache = PropertyMetadataCache::new();
        let descriptor = cache.get_of::<Dog>();

        let names: Vec<_> = descriptor.iter().map(|p| p.name()).collect();
        assert_eq!(names, ["name", "legs"]);
        assert_eq!(descriptor.get("name").unwrap().depth(), 0);
    }

    #[test]
    fn concurrent_first_access() {
        let cache = PropertyMetadataCache::new();

        let built: Vec<_> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8).map(|_| scope.spawn(|| cache.get_of::<Demo>())).collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(cache.len(), 1);
        let warm = cache.get_of::<Demo>();
        for descriptor in &built {
            let a: Vec<(&str, Type)> = descriptor.iter().map(|p| (p.name(), p.ty())).collect();
            let b: Vec<(&str, Type)> = warm.iter().map(|p| (p.name(), p.ty())).collect();
            assert_eq!(a, b);
        }
        assert!(Arc::ptr_eq(&warm, &cache.get_of::<Demo>()));
    }
}
