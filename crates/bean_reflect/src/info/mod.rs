//! Static per-type bean tables.
//!
//! ## Menu
//!
//! - [`Type`]: a `TypeId` plus the full type path.
//! - [`BeanInfo`]: what one type declares, built once per type.
//!     - [`FieldInfo`]: a raw declared field with its reader.
//!     - [`PropertyInfo`]: an accessor pair, getter and setter both optional.
//!     - [`ParentInfo`]: the link to the extended type.
//! - [`BeanInfoBuilder`]: builds a `BeanInfo` by hand.
//! - [`BeanInfoCell`]: static storage used by [`Typed`](crate::Typed) impls.

// -----------------------------------------------------------------------------
// Modules

mod bean_info;
mod cell;
mod field_info;
mod parent_info;
mod type_path;

// -----------------------------------------------------------------------------
// Exports

pub use bean_info::{BeanInfo, BeanInfoBuilder, construct_default};
pub use cell::BeanInfoCell;
pub use field_info::{FieldInfo, PropertyInfo, ReadFn, WriteFn};
pub use parent_info::ParentInfo;
pub use type_path::Type;
