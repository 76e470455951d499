use std::collections::BTreeSet;

use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, Ident, Type};

use super::attributes::{FieldAttributes, FieldMode, TypeAttributes};

/// One visible field of the struct.
pub(crate) struct BeanField<'a> {
    pub ident: &'a Ident,
    pub ty: &'a Type,
    /// The property and raw field name after renaming.
    pub name: String,
    pub mode: FieldMode,
}

/// The `#[bean(parent)]` field.
pub(crate) struct ParentField<'a> {
    pub ident: &'a Ident,
    pub ty: &'a Type,
}

/// A validated `#[derive(Bean)]` input.
pub(crate) struct BeanStruct<'a> {
    pub ident: &'a Ident,
    pub attrs: TypeAttributes,
    pub fields: Vec<BeanField<'a>>,
    pub parent: Option<ParentField<'a>>,
    pub bean_reflect_path: syn::Path,
}

impl<'a> BeanStruct<'a> {
    /// Only non-generic structs with named fields are beans.
    pub(crate) fn parse(ast: &'a DeriveInput, bean_reflect_path: syn::Path) -> syn::Result<Self> {
        let named = match &ast.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(named) => named,
                _ => {
                    return Err(syn::Error::new_spanned(
                        &ast.ident,
                        "`Bean` can only be derived for structs with named fields",
                    ));
                }
            },
            _ => {
                return Err(syn::Error::new_spanned(
                    &ast.ident,
                    "`Bean` can only be derived for structs",
                ));
            }
        };

        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "`Bean` cannot be derived for generic types",
            ));
        }

        let attrs = TypeAttributes::parse_attrs(&ast.attrs)?;

        let mut fields = Vec::with_capacity(named.named.len());
        let mut parent: Option<ParentField<'a>> = None;
        let mut names: BTreeSet<String> = BTreeSet::new();

        for field in &named.named {
            let Some(ident) = &field.ident else {
                continue;
            };
            let field_attrs = FieldAttributes::parse_attrs(&field.attrs)?;

            match field_attrs.mode {
                FieldMode::Ignore => continue,
                FieldMode::Parent => {
                    if parent.is_some() {
                        return Err(syn::Error::new_spanned(
                            ident,
                            "a bean can have at most one `#[bean(parent)]` field",
                        ));
                    }
                    parent = Some(ParentField {
                        ident,
                        ty: &field.ty,
                    });
                    continue;
                }
                _ => {}
            }

            let name = match &field_attrs.rename {
                Some(lit) => lit.value(),
                None => attrs.rename_all.apply(&ident.unraw().to_string()),
            };
            if name.trim().is_empty() {
                return Err(syn::Error::new_spanned(ident, "property name must not be blank"));
            }
            if !names.insert(name.clone()) {
                return Err(syn::Error::new_spanned(
                    ident,
                    format!("duplicate property name `{name}`"),
                ));
            }

            fields.push(BeanField {
                ident,
                ty: &field.ty,
                name,
                mode: field_attrs.mode,
            });
        }

        Ok(Self {
            ident: &ast.ident,
            attrs,
            fields,
            parent,
            bean_reflect_path,
        })
    }
}
