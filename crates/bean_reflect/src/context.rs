use std::sync::Arc;

use crate::info::BeanInfo;
use crate::registry::{
    AccessorCache, EqualityFn, EqualityStrategies, FieldResolver, PropertyMetadataCache,
    StringAccessorCache, TypeDescriptor,
};
use crate::Typed;

// -----------------------------------------------------------------------------
// BeanContext

/// Owner of every metadata cache, and the entry point of all bean
/// operations.
///
/// A context is `Send + Sync`. Share one by reference or through an `Arc`;
/// two contexts never share cached metadata.
///
/// The operations are documented on their own modules under
/// [`ops`](crate::ops).
///
/// # Examples
///
/// ```
/// use bean_reflect::{BeanContext, Value, derive::Bean};
///
/// #[derive(Bean)]
/// struct Account {
///     owner: String,
///     balance: i64,
/// }
///
/// let ctx = BeanContext::new();
/// let mut account = Account { owner: "ann".into(), balance: 10 };
///
/// ctx.set_property(&mut account, "balance", Value::I64(25)).unwrap();
/// assert_eq!(ctx.get_property(&account, "balance").unwrap(), Value::I64(25));
/// assert_eq!(ctx.get_property(&account, "missing").unwrap(), Value::Null);
/// ```
#[derive(Debug, Default)]
pub struct BeanContext {
    descriptors: PropertyMetadataCache,
    fields: FieldResolver,
    accessors: AccessorCache,
    string_accessors: StringAccessorCache,
    equality: EqualityStrategies,
}

impl BeanContext {
    /// Creates a context with empty caches and the default equality
    /// strategies.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn builder() -> BeanContextBuilder {
        BeanContextBuilder::default()
    }

    #[inline]
    pub fn descriptors(&self) -> &PropertyMetadataCache {
        &self.descriptors
    }

    #[inline]
    pub fn field_resolver(&self) -> &FieldResolver {
        &self.fields
    }

    #[inline]
    pub fn accessors(&self) -> &AccessorCache {
        &self.accessors
    }

    #[inline]
    pub fn string_accessors(&self) -> &StringAccessorCache {
        &self.string_accessors
    }

    #[inline]
    pub fn equality(&self) -> &EqualityStrategies {
        &self.equality
    }

    /// The cached property list of `info`.
    #[inline]
    pub fn descriptor(&self, info: &'static BeanInfo) -> Arc<TypeDescriptor> {
        self.descriptors.get(info)
    }

    /// Returns `true` when `info` exposes at least one property.
    pub fn is_bean(&self, info: &'static BeanInfo) -> bool {
        !self.descriptor(info).is_empty()
    }

    /// Returns `true` when `T` exposes at least one property.
    #[inline]
    pub fn is_bean_type<T: Typed>(&self) -> bool {
        self.is_bean(T::bean_info())
    }

    /// Drops every cached entry. Descriptors already handed out stay valid.
    pub fn clear_caches(&self) {
        self.descriptors.clear();
        self.fields.clear();
        self.accessors.clear();
        self.string_accessors.clear();
        log::debug!("bean caches cleared");
    }

    /// Builds the descriptors of every type marked `#[bean(auto_register)]`.
    ///
    /// Returns how many types were visited.
    #[cfg(feature = "auto_register")]
    pub fn auto_register(&self) -> usize {
        use crate::__macro_exports::auto_register::{AutoRegisterBean, inventory};

        let mut count = 0_usize;
        for AutoRegisterBean(bean_info) in inventory::iter::<AutoRegisterBean> {
            let info = bean_info();
            self.descriptors.get(info);
            self.string_accessors.get(&self.descriptors, info);
            count += 1;
        }
        log::debug!("auto registered {count} bean types");
        count
    }
}

// -----------------------------------------------------------------------------
// BeanContextBuilder

/// Configures a [`BeanContext`].
///
/// # Examples
///
/// ```
/// use bean_reflect::{BeanContext, Value, derive::Bean};
///
/// #[derive(Bean)]
/// struct Tag {
///     label: String,
/// }
///
/// let ctx = BeanContext::builder()
///     .with_equality::<String>(|a, b| {
///         a.as_str().map(str::to_lowercase) == b.as_str().map(str::to_lowercase)
///     })
///     .build();
///
/// let a = Tag { label: "Rust".into() };
/// let b = Tag { label: "RUST".into() };
/// assert!(ctx.compare(&a, &b).unwrap().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct BeanContextBuilder {
    equality: EqualityStrategies,
}

impl BeanContextBuilder {
    /// Compares fields declared as `T` with `equals` in the diff engine.
    pub fn with_equality<T: 'static>(mut self, equals: EqualityFn) -> Self {
        self.equality.register::<T>(equals);
        self
    }

    /// Replaces the whole equality table.
    pub fn with_equality_strategies(mut self, equality: EqualityStrategies) -> Self {
        self.equality = equality;
        self
    }

    pub fn build(self) -> BeanContext {
        BeanContext {
            equality: self.equality,
            ..BeanContext::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BeanContext;
    use crate::fixtures::Demo;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn context_is_shareable() {
        assert_send_sync::<BeanContext>();
    }

    #[test]
    fn clear_keeps_handed_out_descriptors() {
        let ctx = BeanContext::new();
        let descriptor = ctx.descriptors().get_of::<Demo>();
        assert!(ctx.is_bean_type::<Demo>());

        ctx.clear_caches();
        assert!(ctx.descriptors().is_empty());
        assert_eq!(descriptor.len(), 5);
    }

    #[cfg(feature = "auto_register")]
    #[test]
    fn auto_register_warms_caches() {
        let ctx = BeanContext::new();
        assert!(ctx.auto_register() >= 1);
        assert!(ctx.descriptors().len() >= 1);
        assert!(ctx.string_accessors().len() >= 1);
    }
}
