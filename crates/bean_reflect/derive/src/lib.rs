//! See the [`Bean`] derive macro.
#![cfg_attr(docsrs, feature(doc_cfg))]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static BEAN_ATTRIBUTE_NAME: &str = "bean";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Bean Derivation
///
/// `#[derive(Bean)]` implements `Bean` and `Typed` for a non-generic struct
/// with named fields. The generated `BeanInfo` lists:
///
/// - a raw field per visible struct field, in declaration order;
/// - a property (getter and setter) per visible struct field;
/// - the parent type, when a field is marked `#[bean(parent)]`;
/// - a no-argument constructor, when `#[bean(default)]` is set.
///
/// Field types must implement `ToValue`, and `FromValue` when they get a
/// setter.
///
/// ## Container Attributes
///
/// ```rust, ignore
/// #[derive(Bean, Default)]
/// #[bean(rename_all = "camelCase", default, auto_register)]
/// struct Student { /* ... */ }
/// ```
///
/// - `rename_all`: one of `camelCase`, `PascalCase`, `snake_case` or
///   `SCREAMING_SNAKE_CASE`, applied to field identifiers.
/// - `default`: registers `Default::default` as the no-argument constructor,
///   which `copy_new` relies on.
/// - `auto_register`: submits the type to the collection walked by
///   `BeanContext::auto_register`. Needs the `auto_register` feature.
///
/// ## Field Attributes
///
/// - `parent`: this field holds the extended type. Its properties are
///   inherited, and a property of the same name declared here shadows
///   them. The field itself is neither a raw field nor a property.
/// - `rename = "..."`: explicit name, overrides `rename_all`.
/// - `skip`: raw field only, no property.
/// - `ignore`: neither a raw field nor a property.
/// - `read_only`: getter only.
/// - `write_only`: setter only.
///
/// `parent`, `skip`, `ignore`, `read_only` and `write_only` are mutually
/// exclusive. Two fields ending up with the same name is an error.
///
/// ```rust, ignore
/// #[derive(Bean, Default)]
/// #[bean(default)]
/// struct BaseEntity {
///     id: Option<i64>,
/// }
///
/// #[derive(Bean, Default)]
/// #[bean(default, rename_all = "camelCase")]
/// struct Student {
///     #[bean(parent)]
///     base: BaseEntity,
///     student_id: Option<i32>,
///     #[bean(read_only)]
///     created_by: String,
///     #[bean(ignore)]
///     scratch: Vec<u8>,
/// }
/// ```
#[proc_macro_derive(Bean, attributes(bean))]
pub fn derive_bean(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    impls::match_bean_impls(ast)
}
