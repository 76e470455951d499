use core::any::{Any, TypeId, type_name};
use core::fmt;
use core::hash::{Hash, Hasher};

// -----------------------------------------------------------------------------
// Type

/// The base representation of a Rust type: its [`TypeId`] and full path.
///
/// # Examples
///
/// ```
/// # use core::any::TypeId;
/// use bean_reflect::info::Type;
///
/// let ty = Type::of::<Option<String>>();
///
/// assert!(ty.is::<Option<String>>());
/// assert!(!ty.is::<String>());
/// assert!(ty.name().starts_with("Option"));
/// assert_eq!(ty.id(), TypeId::of::<Option<String>>());
/// ```
#[derive(Copy, Clone)]
pub struct Type {
    type_id: TypeId,
    type_path: &'static str,
}

impl Type {
    /// Creates the [`Type`] of `T`.
    #[inline]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_path: type_name::<T>(),
        }
    }

    /// Returns the [`TypeId`] of the type.
    #[inline(always)]
    pub const fn id(&self) -> TypeId {
        self.type_id
    }

    /// Check if the given type matches this one.
    ///
    /// This only compares the [`TypeId`] of the types.
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        TypeId::of::<T>() == self.type_id
    }

    /// The full type path, as given by [`core::any::type_name`].
    ///
    /// The text is meant for diagnostics and may change between compiler
    /// versions. Use [`Type::is`] or [`Type::id`] to identify a type.
    #[inline(always)]
    pub const fn path(&self) -> &'static str {
        self.type_path
    }

    /// The type path without the module path of the outer type.
    ///
    /// Generic arguments are kept as written in the full path.
    pub fn name(&self) -> &'static str {
        let path = self.type_path;
        let head = path.find('<').unwrap_or(path.len());
        match path[..head].rfind("::") {
            Some(index) => &path[index + 2..],
            None => path,
        }
    }
}

/// This implementation purely relies on the [`TypeId`] of the type.
impl PartialEq for Type {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for Type {}

/// This implementation purely relies on the [`TypeId`] of the type.
impl Hash for Type {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

/// This implementation will only output the type path.
impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_path)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_path)
    }
}

#[cfg(test)]
mod tests {
    use super::Type;

    struct Local;

    #[test]
    fn short_names() {
        assert_eq!(Type::of::<u32>().name(), "u32");
        assert_eq!(Type::of::<String>().name(), "String");
        assert_eq!(Type::of::<Local>().name(), "Local");
        assert!(Type::of::<Local>().path().ends_with("tests::Local"));
    }

    #[test]
    fn identity_is_type_id() {
        assert_eq!(Type::of::<Option<i32>>(), Type::of::<Option<i32>>());
        assert_ne!(Type::of::<Option<i32>>(), Type::of::<i32>());
    }
}
