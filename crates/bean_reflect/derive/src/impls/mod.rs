// -----------------------------------------------------------------------------
// Modules

mod auto_register;
mod trait_bean;
mod trait_typed;

// -----------------------------------------------------------------------------
// Internal API

use proc_macro::TokenStream;
use quote::quote;
use syn::DeriveInput;

use crate::derive_data::BeanStruct;

use auto_register::get_auto_register_impl;
use trait_bean::impl_trait_bean;
use trait_typed::impl_trait_typed;

pub(crate) fn match_bean_impls(ast: DeriveInput) -> TokenStream {
    let bean_reflect_path = crate::path::bean_reflect();

    let bean = match BeanStruct::parse(&ast, bean_reflect_path) {
        Ok(bean) => bean,
        Err(err) => return err.into_compile_error().into(),
    };

    let bean_impl = impl_trait_bean(&bean);
    let typed_impl = impl_trait_typed(&bean);
    let auto_register = get_auto_register_impl(&bean);

    quote! {
        const _: () = {
            #bean_impl
            #typed_impl
        };

        #auto_register
    }
    .into()
}
