//! Thread-safe metadata caches.
//!
//! ## Menu
//!
//! - [`PropertyMetadataCache`]: type to ordered [`TypeDescriptor`].
//! - [`FieldResolver`]: inheritance-aware raw field lists, filtered by
//!   [`FieldFilter`].
//! - [`AccessorCache`]: `(type, name)` to [`AccessorPair`].
//! - [`StringAccessorCache`]: type path to the accessor pairs of text
//!   properties.
//! - [`EqualityStrategies`]: per field type equality for diffing.
//!
//! All caches are owned by a [`BeanContext`](crate::BeanContext) and share
//! [`SharedCache`]'s concurrency rules: lookups take a read lock, values are
//! built with no lock held and inserted under a short write lock.

// -----------------------------------------------------------------------------
// Modules

mod accessor;
mod cache;
mod descriptor;
mod equality;
mod field_resolver;

// -----------------------------------------------------------------------------
// Exports

pub use accessor::{AccessorCache, AccessorKey, AccessorPair, StringAccessorCache};
pub use cache::SharedCache;
pub use descriptor::{PropertyDescriptor, PropertyMetadataCache, TypeDescriptor};
pub use equality::{EqualityFn, EqualityStrategies, decimal_eq};
pub use field_resolver::{
    FieldDescriptor, FieldFilter, FieldResolver, ResolvedField, VERSION_MARKER_FIELD,
};

pub(crate) use accessor::is_text;
