//! The generic bean operations.
//!
//! Everything here is a method on [`BeanContext`](crate::BeanContext), so it
//! runs against the context's caches:
//!
//! - by-name access: [`get_property`], [`set_property`];
//! - copying: [`copy`], [`copy_new`], [`copy_new_list`];
//! - map conversion: [`to_map`], [`to_map_with`], [`to_map_list`];
//! - diffing: [`compare`], [`is_different`] and their filtered forms;
//! - trimming: [`trim_property`], or the uncached [`trim_strings`].
//!
//! [`get_property`]: crate::BeanContext::get_property
//! [`set_property`]: crate::BeanContext::set_property
//! [`copy`]: crate::BeanContext::copy
//! [`copy_new`]: crate::BeanContext::copy_new
//! [`copy_new_list`]: crate::BeanContext::copy_new_list
//! [`to_map`]: crate::BeanContext::to_map
//! [`to_map_with`]: crate::BeanContext::to_map_with
//! [`to_map_list`]: crate::BeanContext::to_map_list
//! [`compare`]: crate::BeanContext::compare
//! [`is_different`]: crate::BeanContext::is_different
//! [`trim_property`]: crate::BeanContext::trim_property

// -----------------------------------------------------------------------------
// Modules

mod copy;
mod diff;
mod map;
mod property;
mod trim;

// -----------------------------------------------------------------------------
// Exports

pub use diff::Difference;
pub use map::key_editor;
pub use trim::trim_strings;
