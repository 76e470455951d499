use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::ext::IdentExt;

use crate::derive_data::{BeanField, BeanStruct, FieldMode};

/// Field identifier of the serialization version marker.
const VERSION_MARKER_IDENT: &str = "serial_version_uid";

/// Generate implementation code for `Typed`.
///
/// Accessors are emitted as nested `fn` items so they coerce to the
/// `ReadFn`/`WriteFn` pointers of the tables. Nested items cannot see the
/// outer `Self`, so they name the struct directly.
pub(crate) fn impl_trait_typed(bean: &BeanStruct) -> TokenStream {
    let bean_reflect_path = &bean.bean_reflect_path;
    let typed_ = crate::path::typed_(bean_reflect_path);
    let bean_info_ = crate::path::bean_info_(bean_reflect_path);
    let bean_info_cell_ = crate::path::bean_info_cell_(bean_reflect_path);
    let ident = bean.ident;

    let accessors = bean.fields.iter().map(|field| accessor_fns(bean, field));
    let field_tokens = bean.fields.iter().map(|field| field_info_tokens(bean, field));
    let property_tokens = bean.fields.iter().filter_map(|field| property_info_tokens(bean, field));
    let (parent_fns, parent_call) = parent_tokens(bean).unzip();
    let constructor_tokens = bean.attrs.default.map(|_| {
        let construct_default_ = crate::path::construct_default_(bean_reflect_path);
        quote! { .constructor(#construct_default_::<#ident>) }
    });

    quote! {
        impl #typed_ for #ident {
            fn bean_info() -> &'static #bean_info_ {
                #(#accessors)*
                #parent_fns

                static CELL: #bean_info_cell_ = #bean_info_cell_::new();
                CELL.get_or_init(|| {
                    #bean_info_::builder::<#ident>()
                        #(#field_tokens)*
                        #(#property_tokens)*
                        #parent_call
                        #constructor_tokens
                        .build()
                })
            }
        }
    }
}

fn read_fn_ident(field: &BeanField) -> syn::Ident {
    format_ident!("__bean_read_{}", field.ident.unraw())
}

fn write_fn_ident(field: &BeanField) -> syn::Ident {
    format_ident!("__bean_write_{}", field.ident.unraw())
}

fn accessor_fns(bean: &BeanStruct, field: &BeanField) -> TokenStream {
    let bean_reflect_path = &bean.bean_reflect_path;
    let bean_ = crate::path::bean_(bean_reflect_path);
    let value_ = crate::path::value_(bean_reflect_path);
    let access_error_ = crate::path::access_error_(bean_reflect_path);
    let macro_exports_ = crate::path::macro_exports_(bean_reflect_path);

    let ident = bean.ident;
    let member = field.ident;
    let ty = field.ty;
    let name = &field.name;
    let read_fn = read_fn_ident(field);
    let write_fn = write_fn_ident(field);

    let reader = quote! {
        fn #read_fn(bean: &dyn #bean_) -> ::core::result::Result<#value_, #access_error_> {
            let this = #macro_exports_::downcast_ref::<#ident>(bean)?;
            ::core::result::Result::Ok(#macro_exports_::ToValue::to_value(&this.#member))
        }
    };

    let writer = matches!(field.mode, FieldMode::ReadWrite | FieldMode::WriteOnly).then(|| {
        quote! {
            fn #write_fn(
                bean: &mut dyn #bean_,
                value: #value_,
            ) -> ::core::result::Result<(), #access_error_> {
                let this = #macro_exports_::downcast_mut::<#ident>(bean)?;
                this.#member = #macro_exports_::convert::<#ty>(#name, value)?;
                ::core::result::Result::Ok(())
            }
        }
    });

    quote! {
        #reader
        #writer
    }
}

fn field_info_tokens(bean: &BeanStruct, field: &BeanField) -> TokenStream {
    let field_info_ = crate::path::field_info_(&bean.bean_reflect_path);
    let ty = field.ty;
    let name = &field.name;
    let read_fn = read_fn_ident(field);
    let marker = (field.ident.unraw() == VERSION_MARKER_IDENT).then(|| quote! { .with_version_marker() });

    quote! {
        .field(#field_info_::new::<#ty>(#name, #read_fn) #marker)
    }
}

fn property_info_tokens(bean: &BeanStruct, field: &BeanField) -> Option<TokenStream> {
    let property_info_ = crate::path::property_info_(&bean.bean_reflect_path);
    let ty = field.ty;
    let name = &field.name;
    let read_fn = read_fn_ident(field);
    let write_fn = write_fn_ident(field);

    let (getter, setter) = match field.mode {
        FieldMode::ReadWrite => (true, true),
        FieldMode::ReadOnly => (true, false),
        FieldMode::WriteOnly => (false, true),
        FieldMode::Skip | FieldMode::Ignore | FieldMode::Parent => return None,
    };
    let getter = getter.then(|| quote! { .with_getter(#read_fn) });
    let setter = setter.then(|| quote! { .with_setter(#write_fn) });

    Some(quote! {
        .property(#property_info_::new::<#ty>(#name) #getter #setter)
    })
}

/// The upcast functions, and the `.parent(..)` builder call using them.
fn parent_tokens(bean: &BeanStruct) -> Option<(TokenStream, TokenStream)> {
    let parent = bean.parent.as_ref()?;
    let bean_reflect_path = &bean.bean_reflect_path;
    let bean_ = crate::path::bean_(bean_reflect_path);
    let parent_info_ = crate::path::parent_info_(bean_reflect_path);

    let ident = bean.ident;
    let member = parent.ident;
    let parent_ty = parent.ty;

    let fns = quote! {
        fn __bean_upcast(bean: &dyn #bean_) -> ::core::option::Option<&dyn #bean_> {
            bean.downcast_ref::<#ident>().map(|this| &this.#member as &dyn #bean_)
        }

        fn __bean_upcast_mut(bean: &mut dyn #bean_) -> ::core::option::Option<&mut dyn #bean_> {
            bean.downcast_mut::<#ident>().map(|this| &mut this.#member as &mut dyn #bean_)
        }
    };
    let call = quote! {
        .parent(#parent_info_::new::<#parent_ty>(__bean_upcast, __bean_upcast_mut))
    };

    Some((fns, call))
}
