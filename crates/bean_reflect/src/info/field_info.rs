use core::any::Any;
use core::fmt;

use crate::info::Type;
use crate::{AccessError, Bean, Value};

// -----------------------------------------------------------------------------
// Accessor functions

/// Reads one field or property out of a bean.
///
/// The bean passed in must be of the declaring type, otherwise the function
/// returns [`AccessError::TypeMismatch`].
pub type ReadFn = fn(&dyn Bean) -> Result<Value, AccessError>;

/// Writes one property of a bean.
///
/// Same type requirement as [`ReadFn`].
pub type WriteFn = fn(&mut dyn Bean, Value) -> Result<(), AccessError>;

// -----------------------------------------------------------------------------
// FieldInfo

/// A raw field declared directly on one type.
///
/// Every named field is listed, including fields marked `#[bean(skip)]`
/// that are not exposed as properties. The parent link is never a field.
#[derive(Clone, Copy)]
pub struct FieldInfo {
    name: &'static str,
    ty: Type,
    reader: ReadFn,
    version_marker: bool,
}

impl FieldInfo {
    /// Creates a new [`FieldInfo`] for a field `name` of type `T`.
    #[inline]
    pub fn new<T: Any>(name: &'static str, reader: ReadFn) -> Self {
        Self {
            name,
            ty: Type::of::<T>(),
            reader,
            version_marker: false,
        }
    }

    /// Marks the field as the serialization version marker, whatever its
    /// exposed name.
    #[inline]
    pub const fn with_version_marker(mut self) -> Self {
        self.version_marker = true;
        self
    }

    /// Returns the field name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the declared field type.
    #[inline]
    pub const fn ty(&self) -> Type {
        self.ty
    }

    #[inline]
    pub const fn is_version_marker(&self) -> bool {
        self.version_marker
    }

    /// Returns the reader function.
    #[inline]
    pub const fn reader(&self) -> ReadFn {
        self.reader
    }

    /// Reads the field from a bean of the declaring type.
    #[inline]
    pub fn read(&self, bean: &dyn Bean) -> Result<Value, AccessError> {
        (self.reader)(bean)
    }
}

impl fmt::Debug for FieldInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldInfo")
            .field("name", &self.name)
            .field("ty", &self.ty)
            .finish_non_exhaustive()
    }
}

// -----------------------------------------------------------------------------
// PropertyInfo

/// An accessor pair declared on one type.
///
/// A property may lack a getter (`#[bean(write_only)]`) or a setter
/// (`#[bean(read_only)]`).
///
/// # Examples
///
/// ```
/// use bean_reflect::info::PropertyInfo;
///
/// let info = PropertyInfo::new::<Option<String>>("name");
/// assert!(!info.is_readable());
/// assert!(info.ty().is::<Option<String>>());
/// ```
#[derive(Clone, Copy)]
pub struct PropertyInfo {
    name: &'static str,
    ty: Type,
    getter: Option<ReadFn>,
    setter: Option<WriteFn>,
}

impl PropertyInfo {
    /// Creates a property without accessors.
    #[inline]
    pub fn new<T: Any>(name: &'static str) -> Self {
        Self {
            name,
            ty: Type::of::<T>(),
            getter: None,
            setter: None,
        }
    }

    /// Sets the getter.
    #[inline]
    pub const fn with_getter(mut self, getter: ReadFn) -> Self {
        self.getter = Some(getter);
        self
    }

    /// Sets the setter.
    #[inline]
    pub const fn with_setter(mut self, setter: WriteFn) -> Self {
        self.setter = Some(setter);
        self
    }

    /// Returns the property name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the declared property type.
    #[inline]
    pub const fn ty(&self) -> Type {
        self.ty
    }

    #[inline]
    pub const fn getter(&self) -> Option<ReadFn> {
        self.getter
    }

    #[inline]
    pub const fn setter(&self) -> Option<WriteFn> {
        self.setter
    }

    #[inline]
    pub const fn is_readable(&self) -> bool {
        self.getter.is_some()
    }

    #[inline]
    pub const fn is_writable(&self) -> bool {
        self.setter.is_some()
    }
}

impl fmt::Debug for PropertyInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyInfo")
            .field("name", &self.name)
            .field("ty", &self.ty)
            .field("readable", &self.is_readable())
            .field("writable", &self.is_writable())
            .finish()
    }
}
