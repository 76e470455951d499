use core::any::TypeId;
use core::fmt;

use bean_utils::hash::{HashSet, NoOpHashState};

use crate::info::{BeanInfo, ReadFn, Type};
use crate::registry::SharedCache;
use crate::{AccessError, Bean, TypeIntrospector, Value};

/// Name of the serialization marker field that field resolution always
/// leaves out. Fields flagged with [`FieldInfo::is_version_marker`] are left
/// out under any name.
///
/// [`FieldInfo::is_version_marker`]: crate::info::FieldInfo::is_version_marker
pub const VERSION_MARKER_FIELD: &str = "serial_version_uid";

// -----------------------------------------------------------------------------
// FieldDescriptor

/// A raw field declared on one level of a bean hierarchy.
#[derive(Clone, Copy)]
pub struct FieldDescriptor {
    name: &'static str,
    ty: Type,
    declaring: Type,
    reader: ReadFn,
    version_marker: bool,
}

impl FieldDescriptor {
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The declared field type.
    #[inline]
    pub const fn ty(&self) -> Type {
        self.ty
    }

    #[inline]
    pub const fn declaring_type(&self) -> Type {
        self.declaring
    }

    /// Whether this is the serialization version marker.
    #[inline]
    pub fn is_version_marker(&self) -> bool {
        self.version_marker || self.name == VERSION_MARKER_FIELD
    }
}

impl fmt::Debug for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("ty", &self.ty)
            .field("declaring", &self.declaring)
            .finish()
    }
}

// -----------------------------------------------------------------------------
// ResolvedField

/// A [`FieldDescriptor`] placed in the hierarchy of a concrete type.
#[derive(Clone, Copy)]
pub struct ResolvedField {
    descriptor: FieldDescriptor,
    owner: &'static BeanInfo,
    depth: usize,
}

impl ResolvedField {
    #[inline]
    pub const fn descriptor(&self) -> &FieldDescriptor {
        &self.descriptor
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.descriptor.name
    }

    #[inline]
    pub const fn ty(&self) -> Type {
        self.descriptor.ty
    }

    /// Number of parent links from the resolved type to the declaring one.
    #[inline]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Reads the field from `bean`, an instance of the resolved type.
    pub fn read(&self, bean: &dyn Bean) -> Result<Value, AccessError> {
        (self.descriptor.reader)(self.owner.upcast(bean, self.depth)?)
    }
}

impl fmt::Debug for ResolvedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedField")
            .field("descriptor", &self.descriptor)
            .field("depth", &self.depth)
            .finish()
    }
}

// -----------------------------------------------------------------------------
// FieldFilter

/// Which fields [`FieldResolver::get_fields`] returns.
///
/// # Examples
///
/// ```
/// use bean_reflect::registry::FieldFilter;
///
/// let all = FieldFilter::all();
/// assert!(!all.is_include() && all.properties().is_empty());
///
/// let some = FieldFilter::include(&["name", "age"]).ignore_superclass();
/// assert!(some.is_include() && some.is_ignore_superclass());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FieldFilter<'a> {
    ignore_superclass: bool,
    include: bool,
    properties: &'a [&'a str],
}

impl<'a> FieldFilter<'a> {
    /// Every field of every level.
    #[inline]
    pub const fn all() -> Self {
        Self {
            ignore_superclass: false,
            include: false,
            properties: &[],
        }
    }

    /// Only the named fields.
    #[inline]
    pub const fn include(properties: &'a [&'a str]) -> Self {
        Self {
            ignore_superclass: false,
            include: true,
            properties,
        }
    }

    /// Every field except the named ones.
    #[inline]
    pub const fn exclude(properties: &'a [&'a str]) -> Self {
        Self {
            ignore_superclass: false,
            include: false,
            properties,
        }
    }

    /// Restricts the filter to fields declared on the type itself.
    #[inline]
    pub const fn ignore_superclass(mut self) -> Self {
        self.ignore_superclass = true;
        self
    }

    #[inline]
    pub const fn is_ignore_superclass(&self) -> bool {
        self.ignore_superclass
    }

    #[inline]
    pub const fn is_include(&self) -> bool {
        self.include
    }

    #[inline]
    pub const fn properties(&self) -> &'a [&'a str] {
        self.properties
    }
}

impl Default for FieldFilter<'_> {
    #[inline]
    fn default() -> Self {
        Self::all()
    }
}

// -----------------------------------------------------------------------------
// FieldResolver

/// Resolves the ordered raw field list of a bean hierarchy.
///
/// The per-level field lists are cached by declaring type and shared by every
/// filter and every subtype.
#[derive(Debug, Default)]
pub struct FieldResolver {
    declared: SharedCache<TypeId, Box<[FieldDescriptor]>, NoOpHashState>,
}

impl FieldResolver {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// The fields declared on `level` itself.
    fn declared(&self, level: &'static BeanInfo) -> std::sync::Arc<Box<[FieldDescriptor]>> {
        self.declared.get_or_build(level.ty().id(), |_| {
            log::debug!("building field descriptors of `{}`", level.ty());
            TypeIntrospector::declared_fields(level)
                .iter()
                .map(|field| FieldDescriptor {
                    name: field.name(),
                    ty: field.ty(),
                    declaring: level.ty(),
                    reader: field.reader(),
                    version_marker: field.is_version_marker(),
                })
                .collect()
        })
    }

    /// Returns the fields of `info` selected by `filter`, leaf level first.
    ///
    /// In exclude mode a field hides every field of the same name declared
    /// further up the hierarchy. In include mode the most derived field of
    /// each listed name is kept. The version marker field is never returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bean_reflect::{Typed, derive::Bean};
    /// use bean_reflect::registry::{FieldFilter, FieldResolver};
    ///
    /// #[derive(Bean, Default)]
    /// struct Animal {
    ///     name: String,
    ///     legs: u8,
    /// }
    ///
    /// #[derive(Bean, Default)]
    /// struct Dog {
    ///     #[bean(parent)]
    ///     animal: Animal,
    ///     name: String,
    /// }
    ///
    /// let resolver = FieldResolver::new();
    /// let names = |filter| {
    ///     resolver
    ///         .get_fields(Dog::bean_info(), filter)
    ///         .iter()
    ///         .map(|f| (f.name(), f.depth()))
    ///         .collect::<Vec<_>>()
    /// };
    ///
    /// assert_eq!(names(FieldFilter::all()), [("name", 0), ("legs", 1)]);
    /// assert_eq!(names(FieldFilter::exclude(&["legs"])), [("name", 0)]);
    /// assert_eq!(names(FieldFilter::all().ignore_superclass()), [("name", 0)]);
    /// assert_eq!(names(FieldFilter::include(&["legs"])), [("legs", 1)]);
    /// ```
    pub fn get_fields(&self, info: &'static BeanInfo, filter: FieldFilter<'_>) -> Vec<ResolvedField> {
        let levels = info
            .lineage()
            .take(if filter.ignore_superclass { 1 } else { usize::MAX })
            .enumerate();
        let mut out = Vec::new();

        if filter.include {
            let mut seen: HashSet<&str> = HashSet::default();
            for (depth, level) in levels {
                for descriptor in self.declared(level).iter() {
                    if descriptor.is_version_marker() {
                        continue;
                    }
                    if seen.insert(descriptor.name) && filter.properties.contains(&descriptor.name) {
                        out.push(ResolvedField {
                            descriptor: *descriptor,
                            owner: info,
                            depth,
                        });
                    }
                }
            }
        } else {
            let mut excluded: HashSet<&str> = HashSet::default();
            excluded.extend(filter.properties.iter().copied());
            for (depth, level) in levels {
                let declared = self.declared(level);
                for descriptor in declared.iter() {
                    if !descriptor.is_version_marker() && !excluded.contains(descriptor.name) {
                        out.push(ResolvedField {
                            descriptor: *descriptor,
                            owner: info,
                            depth,
                        });
                    }
                }
                excluded.extend(declared.iter().map(|d| d.name));
            }
        }
        out
    }

    /// Positional form of [`get_fields`](Self::get_fields).
    #[inline]
    pub fn get_fields_with(
        &self,
        info: &'static BeanInfo,
        ignore_superclass: bool,
        include: bool,
        properties: &[&str],
    ) -> Vec<ResolvedField> {
        self.get_fields(
            info,
            FieldFilter {
                ignore_superclass,
                include,
                properties,
            },
        )
    }

    /// Number of cached declaring types.
    #[inline]
    pub fn len(&self) -> usize {
        self.declared.len()
    }

    pub fn clear(&self) {
        self.declared.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::{FieldFilter, FieldResolver, ResolvedField};
    use crate::Typed;
    use crate::fixtures::{Demo, Dog, Versioned};
    use crate::info::BeanInfo;

    fn resolve(
        resolver: &FieldResolver,
        info: &'static BeanInfo,
        filter: FieldFilter<'_>,
    ) -> Vec<(&'static str, usize)> {
        resolver
            .get_fields(info, filter)
            .iter()
            .map(|field: &ResolvedField| (field.name(), field.depth()))
            .collect()
    }

    #[test]
    fn include_keeps_most_derived_field() {
        let resolver = FieldResolver::new();
        let dog = Dog::bean_info();

        assert_eq!(resolve(&resolver, dog, FieldFilter::include(&["name"])), [("name", 0)]);
        assert_eq!(
            resolve(&resolver, dog, FieldFilter::include(&["legs", "name"])),
            [("name", 0), ("legs", 1)]
        );
        let fields = resolver.get_fields(dog, FieldFilter::include(&["name"]));
        assert!(fields[0].descriptor().declaring_type().is::<Dog>());
    }

    #[test]
    fn exclude_with_ignore_superclass() {
        let resolver = FieldResolver::new();
        let demo = Demo::bean_info();

        assert_eq!(
            resolve(&resolver, demo, FieldFilter::exclude(&["code"]).ignore_superclass()),
            [("name", 0), ("age", 0), ("studentId", 0)]
        );
        assert_eq!(
            resolve(&resolver, demo, FieldFilter::exclude(&["code", "name"])),
            [("age", 0), ("studentId", 0), ("id", 1)]
        );
        assert!(resolve(&resolver, demo, FieldFilter::include(&["id"]).ignore_superclass()).is_empty());
    }

    #[test]
    fn levels_cached_once_across_filters() {
        let resolver = FieldResolver::new();
        let demo = Demo::bean_info();

        resolver.get_fields(demo, FieldFilter::all());
        resolver.get_fields(demo, FieldFilter::include(&["id"]));
        resolver.get_fields(demo, FieldFilter::exclude(&["name"]).ignore_superclass());
        resolver.get_fields_with(demo, true, false, &[]);
        assert_eq!(resolver.len(), 2);

        resolver.get_fields(Dog::bean_info(), FieldFilter::all());
        assert_eq!(resolver.len(), 4);

        resolver.clear();
        assert_eq!(resolver.len(), 0);
    }

    #[test]
    fn version_marker_never_resolved() {
        let resolver = FieldResolver::new();

        assert_eq!(
            resolve(&resolver, Dog::bean_info(), FieldFilter::all()),
            [("name", 0), ("legs", 1)]
        );

        let versioned = Versioned::bean_info();
        assert!(
            versioned
                .fields()
                .iter()
                .any(|f| f.name() == "serialVersionUid" && f.is_version_marker())
        );
        assert_eq!(resolve(&resolver, versioned, FieldFilter::all()), [("displayName", 0)]);
        assert!(
            resolve(&resolver, versioned, FieldFilter::include(&["serialVersionUid"])).is_empty()
        );
    }
}
