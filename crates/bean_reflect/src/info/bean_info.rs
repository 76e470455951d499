use core::fmt;

use crate::info::{FieldInfo, ParentInfo, PropertyInfo, Type};
use crate::{AccessError, Bean, Typed};

// -----------------------------------------------------------------------------
// BeanInfo

/// The static description of one bean type.
///
/// Lists what the type itself declares: raw fields, accessor pairs, an
/// optional link to the type it extends and an optional no-argument
/// constructor. Inherited members live in the parent's own `BeanInfo`.
///
/// Usually generated by [`#[derive(Bean)]`](crate::derive::Bean), but can be
/// built by hand through [`BeanInfo::builder`].
///
/// # Examples
///
/// ```
/// use bean_reflect::{Typed, derive::Bean};
///
/// #[derive(Bean, Default)]
/// #[bean(default)]
/// struct Point {
///     x: i32,
///     #[bean(skip)]
///     cache: u64,
/// }
///
/// let info = Point::bean_info();
/// assert_eq!(info.fields().len(), 2);
/// assert_eq!(info.properties().len(), 1);
/// assert!(info.parent().is_none());
/// assert!(info.has_constructor());
/// ```
pub struct BeanInfo {
    ty: Type,
    fields: Box<[FieldInfo]>,
    properties: Box<[PropertyInfo]>,
    parent: Option<ParentInfo>,
    constructor: Option<fn() -> Box<dyn Bean>>,
}

impl BeanInfo {
    /// Starts building the table of `T`.
    #[inline]
    pub fn builder<T: Bean>() -> BeanInfoBuilder {
        BeanInfoBuilder {
            ty: Type::of::<T>(),
            fields: Vec::new(),
            properties: Vec::new(),
            parent: None,
            constructor: None,
        }
    }

    /// Returns the described type.
    #[inline]
    pub const fn ty(&self) -> Type {
        self.ty
    }

    /// Raw fields declared on this level, in declaration order.
    #[inline]
    pub fn fields(&self) -> &[FieldInfo] {
        &self.fields
    }

    /// Accessor pairs declared on this level, in declaration order.
    #[inline]
    pub fn properties(&self) -> &[PropertyInfo] {
        &self.properties
    }

    /// Returns the raw field called `name` on this level.
    pub fn field(&self, name: &str) -> Option<&FieldInfo> {
        self.fields.iter().find(|f| f.name() == name)
    }

    /// Returns the property called `name` on this level.
    pub fn property(&self, name: &str) -> Option<&PropertyInfo> {
        self.properties.iter().find(|p| p.name() == name)
    }

    #[inline]
    pub const fn parent(&self) -> Option<&ParentInfo> {
        self.parent.as_ref()
    }

    #[inline]
    pub const fn has_constructor(&self) -> bool {
        self.constructor.is_some()
    }

    /// Runs the no-argument constructor.
    #[inline]
    pub fn construct(&self) -> Option<Box<dyn Bean>> {
        self.constructor.map(|ctor| ctor())
    }

    /// Iterates over this type and every ancestor, leaf first.
    pub fn lineage(&'static self) -> impl Iterator<Item = &'static BeanInfo> {
        core::iter::successors(Some(self), |info| info.parent().map(ParentInfo::info))
    }

    fn check(&self, bean: &dyn Bean) -> Result<(), AccessError> {
        let found = bean.reflect_bean_info().ty();
        if found == self.ty {
            Ok(())
        } else {
            Err(AccessError::TypeMismatch {
                expected: self.ty.path(),
                found: found.path(),
            })
        }
    }

    /// Projects `bean`, an instance of this type, onto its ancestor `depth`
    /// levels up. Depth `0` returns the bean itself.
    pub fn upcast<'a>(&self, bean: &'a dyn Bean, depth: usize) -> Result<&'a dyn Bean, AccessError> {
        self.check(bean)?;
        let mut current = bean;
        let mut level = self;
        for _ in 0..depth {
            let Some(parent) = level.parent() else {
                return Err(AccessError::MissingParent {
                    type_path: level.ty.path(),
                });
            };
            let found = current.reflect_bean_info().ty().path();
            current = parent.upcast(current).ok_or(AccessError::TypeMismatch {
                expected: level.ty.path(),
                found,
            })?;
            level = parent.info();
        }
        Ok(current)
    }

    /// Mutable counterpart of [`BeanInfo::upcast`].
    pub fn upcast_mut<'a>(
        &self,
        bean: &'a mut dyn Bean,
        depth: usize,
    ) -> Result<&'a mut dyn Bean, AccessError> {
        self.check(bean)?;
        let mut current = bean;
        let mut level = self;
        for _ in 0..depth {
            let Some(parent) = level.parent() else {
                return Err(AccessError::MissingParent {
                    type_path: level.ty.path(),
                });
            };
            let found = current.reflect_bean_info().ty().path();
            current = parent.upcast_mut(current).ok_or(AccessError::TypeMismatch {
                expected: level.ty.path(),
                found,
            })?;
            level = parent.info();
        }
        Ok(current)
    }
}

impl fmt::Debug for BeanInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BeanInfo")
            .field("ty", &self.ty)
            .field("fields", &self.fields)
            .field("properties", &self.properties)
            .field("parent", &self.parent)
            .field("constructor", &self.constructor.is_some())
            .finish()
    }
}

/// A no-argument constructor backed by [`Default`].
///
/// This is what `#[bean(default)]` registers.
pub fn construct_default<T: Typed + Default>() -> Box<dyn Bean> {
    Box::new(T::default())
}

// -----------------------------------------------------------------------------
// BeanInfoBuilder

/// Builder returned by [`BeanInfo::builder`].
///
/// # Examples
///
/// ```
/// use bean_reflect::info::{BeanInfo, BeanInfoCell, PropertyInfo, construct_default};
/// use bean_reflect::{AccessError, Bean, Typed, Value};
/// use bean_reflect::__macro_exports::{convert, downcast_mut, downcast_ref};
///
/// #[derive(Default)]
/// struct Tag {
///     label: String,
/// }
///
/// impl Bean for Tag {
///     fn reflect_bean_info(&self) -> &'static BeanInfo {
///         Self::bean_info()
///     }
/// }
///
/// fn read_label(bean: &dyn Bean) -> Result<Value, AccessError> {
///     Ok(Value::from(downcast_ref::<Tag>(bean)?.label.as_str()))
/// }
///
/// fn write_label(bean: &mut dyn Bean, value: Value) -> Result<(), AccessError> {
///     downcast_mut::<Tag>(bean)?.label = convert("label", value)?;
///     Ok(())
/// }
///
/// impl Typed for Tag {
///     fn bean_info() -> &'static BeanInfo {
///         static CELL: BeanInfoCell = BeanInfoCell::new();
///         CELL.get_or_init(|| {
///             BeanInfo::builder::<Tag>()
///                 .property(
///                     PropertyInfo::new::<String>("label")
///                         .with_getter(read_label)
///                         .with_setter(write_label),
///                 )
///                 .constructor(construct_default::<Tag>)
///                 .build()
///         })
///     }
/// }
///
/// assert_eq!(Tag::bean_info().property("label").unwrap().ty().name(), "String");
/// ```
pub struct BeanInfoBuilder {
    ty: Type,
    fields: Vec<FieldInfo>,
    properties: Vec<PropertyInfo>,
    parent: Option<ParentInfo>,
    constructor: Option<fn() -> Box<dyn Bean>>,
}

impl BeanInfoBuilder {
    /// Appends a raw field.
    #[inline]
    pub fn field(mut self, field: FieldInfo) -> Self {
        self.fields.push(field);
        self
    }

    /// Appends a property.
    #[inline]
    pub fn property(mut self, property: PropertyInfo) -> Self {
        self.properties.push(property);
        self
    }

    /// Sets the parent link.
    #[inline]
    pub fn parent(mut self, parent: ParentInfo) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Sets the no-argument constructor.
    #[inline]
    pub fn constructor(mut self, constructor: fn() -> Box<dyn Bean>) -> Self {
        self.constructor = Some(constructor);
        self
    }

    pub fn build(self) -> BeanInfo {
        BeanInfo {
            ty: self.ty,
            fields: self.fields.into_boxed_slice(),
            properties: self.properties.into_boxed_slice(),
            parent: self.parent,
            constructor: self.constructor,
        }
    }
}
