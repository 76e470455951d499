use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::BeanStruct;

/// Generate implementation code for `Bean`.
pub(crate) fn impl_trait_bean(bean: &BeanStruct) -> TokenStream {
    let bean_reflect_path = &bean.bean_reflect_path;
    let bean_ = crate::path::bean_(bean_reflect_path);
    let typed_ = crate::path::typed_(bean_reflect_path);
    let bean_info_ = crate::path::bean_info_(bean_reflect_path);
    let ident = bean.ident;

    quote! {
        impl #bean_ for #ident {
            #[inline]
            fn reflect_bean_info(&self) -> &'static #bean_info_ {
                <Self as #typed_>::bean_info()
            }
        }
    }
}
