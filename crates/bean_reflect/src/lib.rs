#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Extern Self

// Generated code names this crate as `bean_reflect`, which only resolves
// inside the crate itself through this alias.
extern crate self as bean_reflect;

// -----------------------------------------------------------------------------
// Modules

mod bean;
mod context;
mod error;
mod introspect;

pub mod info;
pub mod ops;
pub mod registry;
pub mod value;

#[cfg(test)]
mod fixtures;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use bean::{Bean, Typed};
pub use context::{BeanContext, BeanContextBuilder};
pub use error::{AccessError, BeanError};
pub use introspect::TypeIntrospector;
pub use value::{FromValue, ToValue, Value, ValueError};

pub use bean_reflect_derive as derive;
