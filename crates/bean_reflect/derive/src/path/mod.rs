//! Paths into `bean_reflect` used by the generated code.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the access path of the `bean_reflect` crate.
///
/// 1. For crates that depend on `bean_reflect`, `::bean_reflect` is returned.
/// 2. For crates that depend on `bean_core`, `::bean_core::reflect` is returned.
/// 3. Otherwise `::bean_reflect` is returned, which `bean_reflect` itself
///    resolves through `extern crate self as bean_reflect`.
///
/// Reads the caller's manifest, so it is resolved once per derive.
pub(crate) fn bean_reflect() -> syn::Path {
    bean_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("bean_reflect"))
}

// -----------------------------------------------------------------------------
// Items

#[inline(always)]
pub(crate) fn macro_exports_(bean_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #bean_reflect_path::__macro_exports
    }
}

#[cfg(feature = "auto_register")]
#[inline(always)]
pub(crate) fn auto_register_(bean_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #bean_reflect_path::__macro_exports::auto_register
    }
}

#[inline(always)]
pub(crate) fn bean_(bean_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #bean_reflect_path::Bean
    }
}

#[inline(always)]
pub(crate) fn typed_(bean_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #bean_reflect_path::Typed
    }
}

#[inline(always)]
pub(crate) fn value_(bean_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #bean_reflect_path::Value
    }
}

#[inline(always)]
pub(crate) fn access_error_(bean_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #bean_reflect_path::AccessError
    }
}

#[inline(always)]
pub(crate) fn bean_info_(bean_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #bean_reflect_path::info::BeanInfo
    }
}

#[inline(always)]
pub(crate) fn bean_info_cell_(bean_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #bean_reflect_path::info::BeanInfoCell
    }
}

#[inline(always)]
pub(crate) fn field_info_(bean_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #bean_reflect_path::info::FieldInfo
    }
}

#[inline(always)]
pub(crate) fn property_info_(bean_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #bean_reflect_path::info::PropertyInfo
    }
}

#[inline(always)]
pub(crate) fn parent_info_(bean_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #bean_reflect_path::info::ParentInfo
    }
}

#[inline(always)]
pub(crate) fn construct_default_(bean_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #bean_reflect_path::info::construct_default
    }
}
