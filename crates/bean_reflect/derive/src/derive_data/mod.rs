//! Parsing and validation of the derive input.

// -----------------------------------------------------------------------------
// Modules

mod attributes;
mod bean_struct;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use attributes::FieldMode;
pub(crate) use bean_struct::{BeanField, BeanStruct};
