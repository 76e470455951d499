//! Items used by the code `#[derive(Bean)]` generates.
//!
//! Not part of the public API.

use core::any::type_name;

use crate::{AccessError, Bean, FromValue, Value};

pub use crate::info::{
    BeanInfo, BeanInfoCell, FieldInfo, ParentInfo, PropertyInfo, construct_default,
};
pub use crate::value::ToValue;

/// Downcasts `bean` for a generated accessor of `T`.
#[inline]
pub fn downcast_ref<T: Bean>(bean: &dyn Bean) -> Result<&T, AccessError> {
    let found = bean.reflect_bean_info().ty().path();
    bean.downcast_ref::<T>().ok_or(AccessError::TypeMismatch {
        expected: type_name::<T>(),
        found,
    })
}

/// Mutable form of [`downcast_ref`].
#[inline]
pub fn downcast_mut<T: Bean>(bean: &mut dyn Bean) -> Result<&mut T, AccessError> {
    let found = bean.reflect_bean_info().ty().path();
    bean.downcast_mut::<T>().ok_or(AccessError::TypeMismatch {
        expected: type_name::<T>(),
        found,
    })
}

/// Converts a value handed to the setter of `property`.
#[inline]
pub fn convert<T: FromValue>(property: &'static str, value: Value) -> Result<T, AccessError> {
    T::from_value(value).map_err(|source| AccessError::Conversion { property, source })
}

#[cfg(feature = "auto_register")]
pub mod auto_register {
    pub use inventory;

    use crate::info::BeanInfo;

    /// A type submitted by `#[bean(auto_register)]`.
    pub struct AutoRegisterBean(pub fn() -> &'static BeanInfo);

    inventory::collect!(AutoRegisterBean);
}
