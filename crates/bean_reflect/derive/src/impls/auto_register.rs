use proc_macro2::TokenStream;
use quote::quote_spanned;

use crate::derive_data::BeanStruct;

/// Generate `auto_register` implementation
#[cfg(feature = "auto_register")]
pub(crate) fn get_auto_register_impl(bean: &BeanStruct) -> TokenStream {
    let Some(span) = bean.attrs.auto_register else {
        return TokenStream::new();
    };

    let bean_reflect_path = &bean.bean_reflect_path;
    let auto_register_ = crate::path::auto_register_(bean_reflect_path);
    let typed_ = crate::path::typed_(bean_reflect_path);
    let ident = bean.ident;

    quote_spanned! { span =>
        #auto_register_::inventory::submit! {
            #auto_register_::AutoRegisterBean(<#ident as #typed_>::bean_info)
        }
    }
}

/// Generate `auto_register` implementation
#[cfg(not(feature = "auto_register"))]
pub(crate) fn get_auto_register_impl(_: &BeanStruct) -> TokenStream {
    TokenStream::new()
}
