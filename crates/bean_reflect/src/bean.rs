use core::any::{Any, TypeId};
use core::fmt;

use crate::info::BeanInfo;

// -----------------------------------------------------------------------------
// Bean

/// A type whose properties can be discovered and accessed at runtime.
///
/// Implemented by [`#[derive(Bean)]`](crate::derive::Bean) together with
/// [`Typed`]. Every operation of a [`BeanContext`](crate::BeanContext) takes
/// beans as `&dyn Bean`, and the property tables are looked up through
/// [`Bean::reflect_bean_info`].
///
/// # Examples
///
/// ```
/// use bean_reflect::{Bean, derive::Bean};
///
/// #[derive(Bean)]
/// struct User {
///     name: String,
/// }
///
/// let user: Box<dyn Bean> = Box::new(User { name: "ann".into() });
/// assert!(user.is::<User>());
/// assert_eq!(user.reflect_bean_info().ty().name(), "User");
///
/// let user: User = user.take().unwrap();
/// assert_eq!(user.name, "ann");
/// ```
pub trait Bean: Any + Send + Sync {
    /// Returns the table of the underlying type.
    fn reflect_bean_info(&self) -> &'static BeanInfo;
}

/// A static accessor to the [`BeanInfo`] of a type.
///
/// Allows access to bean tables without an instance of the type.
pub trait Typed: Bean + Sized {
    fn bean_info() -> &'static BeanInfo;
}

impl dyn Bean {
    /// Returns the [`TypeId`] of the underlying value.
    #[inline(always)]
    pub fn ty_id(&self) -> TypeId {
        let any: &dyn Any = self;
        any.type_id()
    }

    /// Returns `true` if the underlying value is of type `T`.
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    /// Downcasts the value to type `T` by mutable reference.
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }

    /// Downcasts the value to type `T`, consuming the trait object.
    ///
    /// If the underlying value is not of type `T`, it is handed back as
    /// `Box<dyn Any>`.
    #[inline]
    pub fn downcast<T: Any>(self: Box<dyn Bean>) -> Result<Box<T>, Box<dyn Any>> {
        let any: Box<dyn Any> = self;
        any.downcast::<T>()
    }

    /// Downcasts the value to type `T`, unboxing and consuming the trait
    /// object.
    #[inline]
    pub fn take<T: Any>(self: Box<dyn Bean>) -> Result<T, Box<dyn Any>> {
        self.downcast::<T>().map(|boxed| *boxed)
    }
}

impl fmt::Debug for dyn Bean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let info = self.reflect_bean_info();
        let mut map = f.debug_struct(info.ty().name());
        let mut seen: Vec<&str> = Vec::new();
        for (depth, level) in info.lineage().enumerate() {
            let part = info.upcast(self, depth).ok();
            for property in level.properties() {
                let Some(getter) = property.getter() else {
                    continue;
                };
                if seen.contains(&property.name()) {
                    continue;
                }
                seen.push(property.name());
                match part.map(getter) {
                    Some(Ok(value)) => map.field(property.name(), &value),
                    _ => map.field(property.name(), &format_args!("<unreadable>")),
                };
            }
        }
        map.finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::Bean;
    use crate::fixtures::{BaseEntity, Demo};

    #[test]
    fn downcast_hands_back_mismatched_value() {
        let bean: Box<dyn Bean> = Box::new(BaseEntity { id: Some(3) });

        let err = bean.downcast::<Demo>().unwrap_err();
        let base = err.downcast::<BaseEntity>().unwrap();
        assert_eq!(base.id, Some(3));

        let bean: Box<dyn Bean> = base;
        assert_eq!(bean.take::<BaseEntity>().unwrap(), BaseEntity { id: Some(3) });
    }
}
