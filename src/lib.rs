#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use bean_reflect as reflect;
pub use bean_utils as utils;

/// The items most callers need: the derive, the context and the value model.
pub mod prelude {
    pub use bean_reflect::derive::Bean;
    pub use bean_reflect::ops::{Difference, key_editor};
    pub use bean_reflect::registry::FieldFilter;
    pub use bean_reflect::value::ValueMap;
    pub use bean_reflect::{Bean, BeanContext, BeanError, Typed, Value};
}
